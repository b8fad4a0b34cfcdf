//! Home page component
//!
//! Navbar, the carousel while no search is active, the product list and the
//! status bar. Pure and stateless: everything comes from `AppState`.

use ratatui::prelude::*;

use crate::{
    core::state::{AppState, Focus},
    domain::ui::HomeLayout,
    presentation::widgets::{
        carousel::CarouselWidget, navbar::NavbarWidget, product_list::ProductListWidget,
        status_bar::StatusBarWidget,
    },
};

#[derive(Debug, Clone, Default)]
pub struct HomeComponent;

impl HomeComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        self.render(state, area, frame.buffer_mut());
    }

    pub fn render(&self, state: &AppState, area: Rect, buf: &mut Buffer) {
        let layout = HomeLayout::new(area, state.carousel_visible());

        NavbarWidget::new(&state.search.query, state.search.editing).render(layout.navbar, buf);

        if let (Some(area), Some(controller)) = (layout.carousel, state.carousel.controller()) {
            CarouselWidget::new(controller.slides(), controller.current_index())
                .focused(state.ui.focus == Focus::Carousel)
                .render(area, buf);
        }

        ProductListWidget::new(
            state.filtered_products(),
            state.catalog.selection.selected_index(),
        )
        .focused(state.ui.focus == Focus::ProductList)
        .render(layout.product_list, buf);

        StatusBarWidget::new(&state.system.status_bar, state.carousel.playback())
            .render(layout.status_bar, buf);
    }
}
