//! expboard: experiment tracking dashboard.
//!
//! This crate re-exports the page model from `expboard-core` and the hosting
//! server as [`server`].

pub use expboard_core::*;
pub use expboard_server as server;
