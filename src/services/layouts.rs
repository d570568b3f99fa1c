//! Layout file I/O service.
//!
//! This module centralizes reading KLE layouts from disk. It accepts both
//! the JSON file downloaded from the editor and the lenient "raw data"
//! text (unquoted keys, no outer brackets) shown in its raw data tab.

use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::KleError;
use crate::models::Layout;
use crate::parser;

/// Service for loading KLE layouts.
pub struct LayoutService;

impl LayoutService {
    /// Loads and decodes a layout file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a `.json` download or a raw data text file
    ///
    /// # Returns
    ///
    /// * `Ok(Layout)` - Successfully decoded layout
    /// * `Err(KleError::MissingInput)` - File absent or unreadable
    /// * `Err(KleError::Syntax)` - Neither JSON nor raw data
    /// * `Err(KleError::Format)` - Valid JSON with a malformed row or token
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use kleplacer::services::LayoutService;
    ///
    /// let layout = LayoutService::load(Path::new("ergo.json"))?;
    /// println!("{} keys", layout.key_count());
    /// # Ok::<(), kleplacer::error::KleError>(())
    /// ```
    pub fn load(path: &Path) -> Result<Layout, KleError> {
        let content = fs::read_to_string(path).map_err(|source| KleError::MissingInput {
            path: path.to_path_buf(),
            source,
        })?;

        let layout = Self::parse_str(&content)?;
        info!(
            path = %path.display(),
            keys = layout.key_count(),
            "loaded KLE layout"
        );
        Ok(layout)
    }

    /// Decodes a layout from text already in memory.
    ///
    /// Raw data is wrapped in `[` `]` before decoding, the same way the
    /// editor reads its raw data tab. Text is treated as raw data when it
    /// does not parse as-is, when its root is not an array, or when the root
    /// array holds label strings but no rows (a single unwrapped row).
    pub fn parse_str(content: &str) -> Result<Layout, KleError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(KleError::Syntax("layout is empty".to_string()));
        }

        match parse_lenient(trimmed) {
            Ok(value) if !needs_wrapping(&value) => Ok(parser::decode_layout(&value)?),
            Ok(value) => {
                debug!("decoding layout as a single raw data row");
                let wrapped = Value::Array(vec![value.clone()]);
                // Report positions against the text as written if both fail.
                parser::decode_layout(&wrapped)
                    .or_else(|_| parser::decode_layout(&value))
                    .map_err(KleError::from)
            }
            Err(first_error) => {
                debug!("parsing layout as raw data");
                let value = parse_lenient(&format!("[{trimmed}]"))
                    .map_err(|_| KleError::Syntax(first_error))?;
                Ok(parser::decode_layout(&value)?)
            }
        }
    }
}

fn parse_lenient(text: &str) -> Result<Value, String> {
    serde_json::from_str(text).or_else(|_| json5::from_str(text).map_err(|err| err.to_string()))
}

fn needs_wrapping(value: &Value) -> bool {
    match value {
        Value::Array(items) => {
            items.iter().any(Value::is_string) && !items.iter().any(Value::is_array)
        }
        _ => true,
    }
}
