//! Utilities for feature code running inside a game-overlay scripting host
//!
//! The host owns entity state, menu widgets, drawing, and input; this crate
//! covers the seams feature code actually shares: subscribing to host
//! lifecycle events ([`events::EventRegistry`]) and smoothing visual state
//! between frames ([`animation::Animation`]), plus the color, math, config,
//! and logging glue those two need.
//!
//! Everything here is synchronous and single-threaded, matching the host's
//! cooperative tick model.

pub mod animation;
pub mod clock;
pub mod color;
pub mod config;
pub mod events;
pub mod logging;
pub mod math;

// Re-export commonly used types
pub use animation::Animation;
pub use clock::FrameClock;
pub use color::Color;
pub use config::{Config, ConfigError};
pub use events::{EventHost, EventRegistry};
