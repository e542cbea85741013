//! Configuration types and presets
//!
//! - `base`: `Config` and `Format`
//! - `display`: which parts of an event line are shown
//! - `presets`: development, production and environment-driven configs

mod base;
mod display;
mod presets;

pub use base::{Config, Format};
pub use display::DisplayConfig;
pub use presets::{ENV_FORMAT, ENV_LEVEL};
