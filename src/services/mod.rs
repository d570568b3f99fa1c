//! Service layer for loading layouts and planning footprint placement.
//!
//! This module contains services that coordinate between the parser, the
//! models and whatever host consumes the resulting placements.

pub mod host;
pub mod layouts;
pub mod placement;

// Re-export commonly used types and functions
pub use host::FootprintHost;
pub use layouts::LayoutService;
pub use placement::{compute_transform, Placement, PlacementPlan};
