use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::domain::{product::Product, text::format_price};

pub struct ProductListWidget<'a> {
    products: Vec<&'a Product>,
    selected: Option<usize>,
    focused: bool,
}

impl<'a> ProductListWidget<'a> {
    pub fn new(products: Vec<&'a Product>, selected: Option<usize>) -> Self {
        Self {
            products,
            selected,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn row(product: &Product) -> Line<'static> {
        let mut spans = vec![Span::styled(product.title.clone(), Style::default().bold())];
        if !product.brand.is_empty() {
            spans.push(Span::styled(
                format!(" · {}", product.brand),
                Style::default().fg(Color::Gray),
            ));
        }
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format_price(product.discounted_price()),
            Style::default().fg(Color::Green),
        ));
        if product.discount_percentage > 0.0 {
            spans.push(Span::styled(
                format!(" -{}%", product.discount_percentage.round()),
                Style::default().fg(Color::Yellow),
            ));
        }
        spans.push(Span::raw("  "));
        if product.in_stock() {
            spans.push(Span::raw(format!("{} in stock", product.stock)));
        } else {
            spans.push(Span::styled("out of stock", Style::default().fg(Color::Red)));
        }
        Line::from(spans)
    }
}

impl Widget for ProductListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title_top(Line::from(format!(" Products ({}) ", self.products.len())));

        if self.products.is_empty() {
            Paragraph::new(Line::styled(
                "No products found",
                Style::default().fg(Color::DarkGray),
            ))
            .block(block)
            .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .products
            .iter()
            .map(|product| ListItem::new(Self::row(product)))
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().reversed())
            .highlight_symbol("> ");
        let mut state = ListState::default().with_selected(self.selected);
        StatefulWidget::render(list, area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn lines(buf: &Buffer) -> Vec<String> {
        let area = buf.area;
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    fn laptop() -> Product {
        let mut p = Product::new("1", "Laptop");
        p.brand = "Acme".to_string();
        p.price = 1499.0;
        p.discount_percentage = 10.0;
        p.stock = 3;
        p
    }

    #[test]
    fn test_row_text() {
        let line = ProductListWidget::row(&laptop());
        assert_eq!(line.to_string(), "Laptop · Acme  $1,349 -10%  3 in stock");

        let mut sold_out = Product::new("2", "Mouse");
        sold_out.price = 25.0;
        assert_eq!(
            ProductListWidget::row(&sold_out).to_string(),
            "Mouse  $25  out of stock"
        );
    }

    #[test]
    fn test_renders_selection_marker() {
        let product = laptop();
        let area = Rect::new(0, 0, 50, 4);
        let mut buf = Buffer::empty(area);
        ProductListWidget::new(vec![&product], Some(0)).render(area, &mut buf);

        let lines = lines(&buf);
        assert!(lines[0].contains("Products (1)"));
        assert!(lines[1].starts_with("│> Laptop"));
    }

    #[test]
    fn test_renders_empty_message() {
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        ProductListWidget::new(vec![], None).render(area, &mut buf);
        assert!(lines(&buf)[1].contains("No products found"));
    }
}
