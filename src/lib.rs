//! chart-overlays: annotation overlays for an external chart engine.
//!
//! The engine owns scales and painting. This crate takes the plot bounds and
//! coordinate mapping it reports, and returns declarative `DrawNode` trees:
//! a four-quadrant area overlay pivoted at the axis midpoint, and timeline
//! event markers spaced so they never overlap.

pub mod api;
pub mod core;
pub mod error;
pub mod mock;
pub mod overlays;
pub mod render;
pub mod series;
pub mod table;
pub mod telemetry;

pub use api::{OverlayEngine, OverlayEngineConfig};
pub use error::{OverlayError, OverlayResult};
