/// Which home page section receives Enter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Carousel,
    ProductList,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::Carousel => Focus::ProductList,
            Focus::ProductList => Focus::Carousel,
        }
    }
}

/// UI-related state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub focus: Focus,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_focus_toggles() {
        assert_eq!(Focus::default(), Focus::Carousel);
        assert_eq!(Focus::Carousel.toggled(), Focus::ProductList);
        assert_eq!(Focus::ProductList.toggled(), Focus::Carousel);
    }
}
