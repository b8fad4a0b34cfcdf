//! Screen geometry for the home page
//!
//! Rendering and mouse hit-testing share these layouts so a click always
//! lands on what was drawn there.

use ratatui::layout::{Constraint, Layout, Position, Rect};

pub const NAVBAR_HEIGHT: u16 = 3;
pub const CAROUSEL_HEIGHT: u16 = 8;
pub const STATUS_BAR_HEIGHT: u16 = 1;
/// Columns taken by each arrow button, including padding
pub const ARROW_WIDTH: u16 = 3;
/// Columns per position dot: the glyph plus a gap
pub const DOT_STRIDE: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeLayout {
    pub navbar: Rect,
    /// Absent while the carousel is unmounted
    pub carousel: Option<Rect>,
    pub product_list: Rect,
    pub status_bar: Rect,
}

impl HomeLayout {
    pub fn new(area: Rect, with_carousel: bool) -> Self {
        if with_carousel {
            let [navbar, carousel, product_list, status_bar] = Layout::vertical([
                Constraint::Length(NAVBAR_HEIGHT),
                Constraint::Length(CAROUSEL_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .areas(area);
            Self {
                navbar,
                carousel: Some(carousel),
                product_list,
                status_bar,
            }
        } else {
            let [navbar, product_list, status_bar] = Layout::vertical([
                Constraint::Length(NAVBAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .areas(area);
            Self {
                navbar,
                carousel: None,
                product_list,
                status_bar,
            }
        }
    }
}

/// What a click inside the carousel landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselHit {
    Previous,
    Next,
    Dot(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselLayout {
    pub area: Rect,
    /// Slide content between the arrows
    pub body: Rect,
    pub previous: Rect,
    pub next: Rect,
    pub dots: Vec<Rect>,
}

impl CarouselLayout {
    /// Geometry of a bordered carousel of `slide_count` slides drawn in `area`.
    pub fn new(area: Rect, slide_count: usize) -> Self {
        let inner = Rect::new(
            area.x.saturating_add(1),
            area.y.saturating_add(1),
            area.width.saturating_sub(2),
            area.height.saturating_sub(2),
        );
        let middle = inner.y + inner.height / 2;
        let arrow_width = ARROW_WIDTH.min(inner.width / 2);

        let previous = Rect::new(inner.x, middle, arrow_width, inner.height.min(1));
        let next = Rect::new(
            inner.right().saturating_sub(arrow_width),
            middle,
            arrow_width,
            inner.height.min(1),
        );
        let gutter = arrow_width + 1;
        let body = Rect::new(
            inner.x + gutter.min(inner.width),
            inner.y,
            inner.width.saturating_sub(gutter * 2),
            inner.height.saturating_sub(1),
        );

        let count = u16::try_from(slide_count).unwrap_or(u16::MAX);
        let dots_width = count.saturating_mul(DOT_STRIDE).saturating_sub(1);
        let dots_x = inner.x + inner.width.saturating_sub(dots_width) / 2;
        let dots_y = inner.bottom().saturating_sub(1);
        let dots = (0..count)
            .map(|i| {
                let x = dots_x.saturating_add(i.saturating_mul(DOT_STRIDE));
                Rect::new(x, dots_y, 1, inner.height.min(1))
            })
            .filter(|dot| dot.right() <= inner.right())
            .collect();

        Self {
            area,
            body,
            previous,
            next,
            dots,
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }

    pub fn dot_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.dots.iter().position(|dot| dot.contains(position))
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<CarouselHit> {
        let position = Position::new(column, row);
        if self.previous.contains(position) {
            Some(CarouselHit::Previous)
        } else if self.next.contains(position) {
            Some(CarouselHit::Next)
        } else {
            self.dot_at(column, row).map(CarouselHit::Dot)
        }
    }
}
