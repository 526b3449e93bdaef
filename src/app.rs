//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and wraps the player together with
//! presentation-only state (notice popup, quit flag).

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
