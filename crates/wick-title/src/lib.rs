//! Wick sample title library
//!
//! The runnable pieces of the spinning-cube title: configuration loading
//! and the cube actor. `main.rs` wires them to the scheduler and drives
//! frames.

mod config;
mod cube_actor;

pub use config::{StageConfig, TitleConfig};
pub use cube_actor::{CubeActor, DEFAULT_SPIN_PERIOD_MS};
