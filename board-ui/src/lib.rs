//! Activity Board UI library
//!
//! Split from the binary so browser tests under `tests/` can mount
//! components and drive the board state directly.

pub mod api;
pub mod app;
pub mod components;
pub mod state;
