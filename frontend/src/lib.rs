//! Browser front-end for the expboard experiment dashboard.

pub mod api;
pub mod app;
pub mod charts;
pub mod components;
pub mod util;

pub use app::App;
