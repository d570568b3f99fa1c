//! CLI command handlers for KLE Placer.
//!
//! This module provides headless, scriptable access to layout decoding and
//! placement for automation and for CAD host scripts that consume JSON.

pub mod common;
pub mod config;
pub mod decode;
pub mod place;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use decode::DecodeArgs;
pub use place::PlaceArgs;
