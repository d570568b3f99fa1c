//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the default unit spacing.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "KLE Placer";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "kleplacer";

/// Physical size of one keyboard unit (1u) in millimetres.
///
/// This is the usual MX switch pitch of 0.75 inch. It is only a default:
/// placement treats spacing as an opaque scale factor.
pub const DEFAULT_UNIT_SPACING_MM: f64 = 19.05;

/// Name of the container that groups every placed footprint instance.
pub const DEFAULT_GROUP_NAME: &str = "Switches";
