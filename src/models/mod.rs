//! Data models for decoded layouts and footprint placements.
//!
//! This module contains the core data structures used throughout the application.
//! Models are independent of file I/O and of any CAD host.

pub mod key;
pub mod layout;
pub mod transform;

// Re-export all model types
pub use key::{Key, ModifierTemplate};
pub use layout::{Layout, LayoutMetadata};
pub use transform::{PlacementTransform, Spacing};
