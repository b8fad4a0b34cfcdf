use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::domain::{
    slide::SlideSet,
    text::{ellipsize, truncate_text, wrap_text},
    ui::CarouselLayout,
};

pub const PREVIOUS_ARROW: &str = "❮";
pub const NEXT_ARROW: &str = "❯";
pub const ACTIVE_DOT: &str = "●";
pub const INACTIVE_DOT: &str = "○";

const DESCRIPTION_LINES: usize = 2;

/// One slide of a [`SlideSet`] with arrows and position dots
pub struct CarouselWidget<'a> {
    slides: &'a SlideSet,
    current_index: usize,
    focused: bool,
}

impl<'a> CarouselWidget<'a> {
    pub fn new(slides: &'a SlideSet, current_index: usize) -> Self {
        Self {
            slides,
            current_index,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn body_lines(&self, width: usize) -> Vec<Line<'a>> {
        let Some(slide) = self
            .slides
            .get(self.current_index)
            .or_else(|| self.slides.get(0))
        else {
            return vec![];
        };

        let mut lines = vec![
            Line::styled(
                ellipsize(&slide.image, width),
                Style::default().fg(Color::DarkGray).italic(),
            ),
            Line::default(),
            Line::styled(ellipsize(&slide.title, width), Style::default().bold()),
        ];
        let description = truncate_text(&wrap_text(&slide.description, width), DESCRIPTION_LINES);
        lines.extend(description.lines().map(|line| Line::raw(line.to_string())));
        lines
    }
}

impl Widget for CarouselWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title_top(Line::from(" Featured "))
            .title_top(
                Line::from(format!(
                    " {}/{} ",
                    self.current_index + 1,
                    self.slides.len()
                ))
                .right_aligned(),
            )
            .render(area, buf);

        let layout = CarouselLayout::new(area, self.slides.len());

        Paragraph::new(self.body_lines(layout.body.width as usize))
            .alignment(Alignment::Center)
            .render(layout.body, buf);

        Paragraph::new(PREVIOUS_ARROW)
            .alignment(Alignment::Center)
            .render(layout.previous, buf);
        Paragraph::new(NEXT_ARROW)
            .alignment(Alignment::Center)
            .render(layout.next, buf);

        for (i, dot) in layout.dots.iter().enumerate() {
            let (symbol, style) = if i == self.current_index {
                (ACTIVE_DOT, Style::default().fg(Color::White))
            } else {
                (INACTIVE_DOT, Style::default().fg(Color::DarkGray))
            };
            buf.set_string(dot.x, dot.y, symbol, style);
        }
    }
}
