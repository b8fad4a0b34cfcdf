use crate::domain::product::{Catalog, Product};
use crate::model::selection::{Message as SelectionMessage, Selection};

/// Products backing the home page and the list selection over them
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub catalog: Catalog,
    pub selection: Selection,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: Selection::new(),
        }
    }

    /// Visible products matching `query`
    pub fn filtered(&self, query: &str) -> Vec<&Product> {
        self.catalog.search(query)
    }

    pub fn selected<'a>(&'a self, query: &str) -> Option<&'a Product> {
        let index = self.selection.selected_index()?;
        self.filtered(query).get(index).copied()
    }

    pub fn select_previous(&mut self) {
        self.selection.update(SelectionMessage::PreviousItemSelected);
    }

    pub fn select_next(&mut self, query: &str) {
        let len = self.filtered(query).len();
        self.selection
            .update(SelectionMessage::NextItemSelected { len });
    }

    /// Keep the selection inside the list after the query changed
    pub fn refilter(&mut self, query: &str) {
        let len = self.filtered(query).len();
        self.selection.update(SelectionMessage::ListResized { len });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn catalog() -> Catalog {
        let mut laptop = Product::new("1", "Laptop");
        laptop.brand = "Acme".to_string();
        let mut phone = Product::new("2", "Phone");
        phone.brand = "Acme".to_string();
        let mut gone = Product::new("3", "Legacy Phone");
        gone.deleted = true;
        Catalog::new(vec![laptop, phone, gone])
    }

    #[test]
    fn test_selection_follows_filter() {
        let mut state = CatalogState::new(catalog());

        state.select_next("");
        state.select_next("");
        assert_eq!(state.selected("").map(|p| p.id.as_str()), Some("2"));

        state.refilter("laptop");
        assert_eq!(state.selection.selected_index(), Some(0));
        assert_eq!(state.selected("laptop").map(|p| p.id.as_str()), Some("1"));

        state.refilter("nothing");
        assert_eq!(state.selected("nothing"), None);
    }

    #[test]
    fn test_select_next_stops_at_end() {
        let mut state = CatalogState::new(catalog());
        for _ in 0..5 {
            state.select_next("phone");
        }
        // the deleted phone is never listed
        assert_eq!(state.selection.selected_index(), Some(0));
        state.select_previous();
        assert_eq!(state.selection.selected_index(), Some(0));
    }
}
