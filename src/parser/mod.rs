//! Parsing of Keyboard Layout Editor (KLE) serializations.
//!
//! [`kle`] validates the raw JSON shape into a typed document and
//! [`decoder`] turns that document into an ordered list of keys.

pub mod decoder;
pub mod kle;

// Re-export commonly used functions
pub use decoder::{decode_document, decode_layout, DecoderState};
pub use kle::{KleDocument, Modifiers, Row, Token};
