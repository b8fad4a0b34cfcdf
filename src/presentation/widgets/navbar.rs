use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

pub const APP_TITLE: &str = "Storefront";
const SEARCH_HINT: &str = "press / to search";
const CURSOR: &str = "▏";

pub struct NavbarWidget<'a> {
    query: &'a str,
    editing: bool,
}

impl<'a> NavbarWidget<'a> {
    pub fn new(query: &'a str, editing: bool) -> Self {
        Self { query, editing }
    }

    fn search_spans(&self) -> Vec<Span<'a>> {
        let mut spans = vec![Span::raw("Search: ")];
        if self.query.is_empty() && !self.editing {
            spans.push(Span::styled(SEARCH_HINT, Style::default().fg(Color::DarkGray)));
        } else {
            spans.push(Span::raw(self.query));
        }
        if self.editing {
            spans.push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
        }
        spans
    }
}

impl Widget for NavbarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let [title, search] = Layout::horizontal([
            Constraint::Length(APP_TITLE.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .areas(inner);

        Paragraph::new(Span::styled(APP_TITLE, Style::default().bold()))
            .render(title, buf);
        Paragraph::new(Line::from(self.search_spans()))
            .alignment(Alignment::Right)
            .render(search, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn middle_row(query: &str, editing: bool) -> String {
        let area = Rect::new(0, 0, 50, 3);
        let mut buf = Buffer::empty(area);
        NavbarWidget::new(query, editing).render(area, &mut buf);
        (0..area.width).map(|x| buf[(x, 1)].symbol()).collect()
    }

    #[test]
    fn test_shows_hint_when_idle() {
        let row = middle_row("", false);
        assert!(row.starts_with("│Storefront"));
        assert!(row.contains("Search: press / to search│"));
    }

    #[test]
    fn test_shows_query_and_cursor_while_editing() {
        let row = middle_row("lamp", true);
        assert!(row.contains("Search: lamp▏│"));
    }
}
