//! Decoded layout and metadata data structures.

use crate::models::Key;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Optional metadata object found at the top of a KLE layout.
///
/// Only informational: it never affects key positions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutMetadata {
    /// Keyboard name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Layout author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Every other metadata field (backcolor, radii, switchMount, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LayoutMetadata {
    /// Builds metadata from a KLE metadata object.
    ///
    /// Well-known fields with a non-string value are kept in `extra`
    /// instead of being rejected.
    #[must_use]
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let mut extra = object.clone();
        let mut take_string = |field: &str| {
            if !matches!(extra.get(field), Some(Value::String(_))) {
                return None;
            }
            match extra.remove(field) {
                Some(Value::String(s)) => Some(s),
                _ => None,
            }
        };

        let name = take_string("name");
        let author = take_string("author");
        let notes = take_string("notes");

        Self {
            name,
            author,
            notes,
            extra,
        }
    }
}

/// An ordered sequence of decoded keys.
///
/// # Ordering
///
/// `keys` is in reading order of the source (row-major, left to right).
/// Callers may rely on indices being stable between decodes of the same input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layout {
    /// Metadata row, if the layout had one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<LayoutMetadata>,
    /// Decoded keys in reading order
    pub keys: Vec<Key>,
}

impl Layout {
    /// Gets the total number of keys.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the layout has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the layout name from metadata, if present.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|meta| meta.name.as_deref())
    }
}
