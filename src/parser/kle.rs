//! KLE ingestion: validates a raw JSON value into a typed document.
//!
//! A KLE layout is an array of rows. The first row may be a metadata object;
//! every other row is an array whose tokens are either modifier objects
//! (`{"w": 2}`) or label strings (`"Esc"`). All shape checks happen here,
//! once, so the decoder only ever sees well-formed tokens.

use serde_json::{Map, Value};

use crate::error::{FormatError, FormatErrorKind};
use crate::models::LayoutMetadata;

/// Modifier fields recognized in a token object.
///
/// Every field is optional; absent fields leave the running template alone.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Modifiers {
    /// `r`: rotation angle in degrees
    pub r: Option<f64>,
    /// `rx`: rotation pivot X
    pub rx: Option<f64>,
    /// `ry`: rotation pivot Y
    pub ry: Option<f64>,
    /// `x`: relative X offset
    pub x: Option<f64>,
    /// `y`: relative Y offset
    pub y: Option<f64>,
    /// `w`: width
    pub w: Option<f64>,
    /// `h`: height
    pub h: Option<f64>,
    /// `x2`: secondary rectangle X offset
    pub x2: Option<f64>,
    /// `y2`: secondary rectangle Y offset
    pub y2: Option<f64>,
    /// `w2`: secondary rectangle width
    pub w2: Option<f64>,
    /// `h2`: secondary rectangle height
    pub h2: Option<f64>,
    /// `n`: homing nub
    pub n: Option<bool>,
    /// `l`: stepped
    pub l: Option<bool>,
    /// `d`: decal
    pub d: Option<bool>,
    /// `p`: profile
    pub p: Option<String>,
    /// `c`: color
    pub c: Option<String>,
}

impl Modifiers {
    /// Reads the recognized fields of a modifier object.
    ///
    /// Unknown fields are ignored. A recognized field with the wrong type is
    /// reported as [`FormatErrorKind::InvalidField`].
    pub fn from_object(object: &Map<String, Value>) -> Result<Self, FormatErrorKind> {
        Ok(Self {
            r: number(object, "r")?,
            rx: number(object, "rx")?,
            ry: number(object, "ry")?,
            x: number(object, "x")?,
            y: number(object, "y")?,
            w: number(object, "w")?,
            h: number(object, "h")?,
            x2: number(object, "x2")?,
            y2: number(object, "y2")?,
            w2: number(object, "w2")?,
            h2: number(object, "h2")?,
            n: boolean(object, "n")?,
            l: boolean(object, "l")?,
            d: boolean(object, "d")?,
            p: string(object, "p")?,
            c: string(object, "c")?,
        })
    }
}

fn number(object: &Map<String, Value>, field: &'static str) -> Result<Option<f64>, FormatErrorKind> {
    match object.get(field) {
        None => Ok(None),
        Some(Value::Number(n)) => n.as_f64().map(Some).ok_or(FormatErrorKind::InvalidField {
            field,
            expected: "a number",
        }),
        Some(_) => Err(FormatErrorKind::InvalidField {
            field,
            expected: "a number",
        }),
    }
}

fn boolean(object: &Map<String, Value>, field: &'static str) -> Result<Option<bool>, FormatErrorKind> {
    match object.get(field) {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(FormatErrorKind::InvalidField {
            field,
            expected: "a boolean",
        }),
    }
}

fn string(object: &Map<String, Value>, field: &'static str) -> Result<Option<String>, FormatErrorKind> {
    match object.get(field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(FormatErrorKind::InvalidField {
            field,
            expected: "a string",
        }),
    }
}

/// A single row token.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Modifier object, applied to the running template
    Modifier(Modifiers),
    /// Label string, emits one key
    Label(String),
}

/// A validated row.
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    /// Leading metadata object
    Metadata(LayoutMetadata),
    /// Key row
    Tokens(Vec<Token>),
}

/// A validated KLE layout.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KleDocument {
    /// Rows in source order, including the metadata row if present
    pub rows: Vec<Row>,
}

impl KleDocument {
    /// Validates a raw JSON value.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] locating the first malformed row or token:
    /// - root is not an array
    /// - a row is not an array (or an object at index 0)
    /// - an object row appears at a non-zero index
    /// - a token is not an object or a string
    /// - a recognized modifier field has the wrong type
    pub fn from_value(value: &Value) -> Result<Self, FormatError> {
        let Value::Array(rows) = value else {
            return Err(FormatError::row(0, FormatErrorKind::RootNotArray));
        };

        let rows = rows
            .iter()
            .enumerate()
            .map(|(index, row)| parse_row(index, row))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows })
    }

    /// Returns the metadata row, if any.
    #[must_use]
    pub fn metadata(&self) -> Option<&LayoutMetadata> {
        match self.rows.first() {
            Some(Row::Metadata(meta)) => Some(meta),
            _ => None,
        }
    }

    /// Iterates over the key rows, skipping metadata.
    pub fn token_rows(&self) -> impl Iterator<Item = &[Token]> {
        self.rows.iter().filter_map(|row| match row {
            Row::Tokens(tokens) => Some(tokens.as_slice()),
            Row::Metadata(_) => None,
        })
    }

    /// Total number of label tokens, which equals the number of keys decoded.
    #[must_use]
    pub fn label_count(&self) -> usize {
        self.token_rows()
            .flatten()
            .filter(|token| matches!(token, Token::Label(_)))
            .count()
    }
}

fn parse_row(index: usize, row: &Value) -> Result<Row, FormatError> {
    match row {
        Value::Object(object) if index == 0 => Ok(Row::Metadata(LayoutMetadata::from_object(object))),
        Value::Object(_) => Err(FormatError::row(index, FormatErrorKind::MetadataOutOfPlace)),
        Value::Array(tokens) => tokens
            .iter()
            .enumerate()
            .map(|(token_index, token)| {
                parse_token(token).map_err(|kind| FormatError::token(index, token_index, kind))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Row::Tokens),
        _ => Err(FormatError::row(index, FormatErrorKind::InvalidRow)),
    }
}

fn parse_token(token: &Value) -> Result<Token, FormatErrorKind> {
    match token {
        Value::Object(object) => Modifiers::from_object(object).map(Token::Modifier),
        Value::String(label) => Ok(Token::Label(label.clone())),
        _ => Err(FormatErrorKind::InvalidToken),
    }
}
