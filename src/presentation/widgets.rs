//! Reusable UI widgets
//!
//! Widgets receive plain data and draw into a buffer; they never touch `AppState`.

pub mod carousel;
pub mod navbar;
pub mod product_list;
pub mod status_bar;
