//! Audio engine adapter.
//!
//! `AudioEngine` is the capability set the player drives; `RodioEngine`
//! implements it on top of a `rodio` sink.

mod engine;
mod output;
mod sink;
mod types;

#[cfg(test)]
pub mod mock;

pub use engine::AudioEngine;
pub use output::RodioEngine;
pub use types::{EngineError, EngineEvent, Repeat};
