//! Domain logic
//!
//! This module contains storefront business types that do not depend on the terminal:
//! - Product catalog and search filtering
//! - Carousel slides and the placeholder slide set
//! - The host timer abstraction used by the carousel
//! - Home page geometry shared by rendering and hit-testing

pub mod product;
pub mod scheduler;
pub mod slide;
pub mod text;
pub mod ui;
