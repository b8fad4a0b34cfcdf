pub mod carousel;
pub mod catalog;
pub mod search;
pub mod system;
pub mod ui;

use std::rc::Rc;

use crate::domain::product::{Catalog, Product};
use crate::domain::scheduler::Scheduler;
use crate::domain::slide::SlideSet;
use crate::infrastructure::config::Config;

pub use carousel::CarouselState;
pub use catalog::CatalogState;
pub use search::SearchState;
pub use system::SystemState;
pub use ui::{Focus, UiState};

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    pub config: Config,
}

/// Unified application state
#[derive(Debug)]
pub struct AppState {
    pub system: SystemState,
    pub catalog: CatalogState,
    pub search: SearchState,
    pub carousel: CarouselState,
    pub ui: UiState,
    pub config: ConfigState,
}

impl AppState {
    /// Build the home page over `catalog` and mount its carousel.
    pub fn new(config: Config, catalog: Catalog, scheduler: Rc<dyn Scheduler>) -> Self {
        let slides = SlideSet::from_products(catalog.visible());
        let carousel = CarouselState::new(slides, scheduler, config.carousel.interval());
        let mut state = Self {
            system: SystemState::default(),
            catalog: CatalogState::new(catalog),
            search: SearchState::default(),
            carousel,
            ui: UiState::default(),
            config: ConfigState { config },
        };
        state.sync_carousel();
        state
    }

    /// Products listed under the current query
    pub fn filtered_products(&self) -> Vec<&Product> {
        self.catalog.filtered(&self.search.query)
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.catalog.selected(&self.search.query)
    }

    pub fn carousel_visible(&self) -> bool {
        !self.search.is_active()
    }

    /// Mount or unmount the carousel to match the search query.
    pub fn sync_carousel(&mut self) {
        if self.carousel_visible() {
            self.carousel.mount();
        } else {
            self.carousel.unmount();
            self.ui.focus = Focus::ProductList;
        }
    }

    /// Link of whatever Enter would open right now
    pub fn focused_link_target(&self) -> Option<String> {
        match self.ui.focus {
            Focus::Carousel => self
                .carousel
                .controller()
                .map(|controller| controller.current_slide().link_target()),
            Focus::ProductList => self.selected_product().map(Product::link_target),
        }
    }
}
