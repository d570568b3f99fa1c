//! KLE Placer Library
//!
//! This library decodes Keyboard Layout Editor (KLE) serializations into an
//! ordered list of keys and computes, for each key, the rigid transform that
//! places a switch footprint at the key's position and rotation.
//!
//! ```
//! use kleplacer::models::Spacing;
//! use kleplacer::parser::decode_layout;
//! use kleplacer::services::compute_transform;
//!
//! let value = serde_json::json!([[{ "r": 45, "rx": 2, "ry": 2 }, "a"]]);
//! let layout = decode_layout(&value)?;
//! let transform = compute_transform(&layout.keys[0], Spacing::uniform(1.0));
//! assert_eq!(transform.translation, [2.5, -2.5, 0.0]);
//! # Ok::<(), kleplacer::error::FormatError>(())
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod services;
