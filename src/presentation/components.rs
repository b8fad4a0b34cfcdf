//! Stateless components that render `AppState`

pub mod home;

pub use home::HomeComponent;
