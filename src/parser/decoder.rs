//! Stateful KLE decoder.
//!
//! KLE does not store key positions. Each modifier token mutates a running
//! template and cursor, and each label snapshots them into a key. The state
//! is threaded by value through every token: each step consumes the previous
//! [`DecoderState`] and returns the next one, plus the emitted key if any.

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::FormatError;
use crate::models::{Key, Layout, ModifierTemplate};
use crate::parser::kle::{KleDocument, Modifiers, Token};

/// Grid cursor. Private to a single decode.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct CursorState {
    cursor_x: f64,
    cursor_y: f64,
    current_row: usize,
    current_col: usize,
}

/// Template and cursor carried from token to token.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DecoderState {
    template: ModifierTemplate,
    cursor: CursorState,
}

impl DecoderState {
    /// Fresh state at the start of a layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current template.
    #[must_use]
    pub const fn template(&self) -> &ModifierTemplate {
        &self.template
    }

    /// Current cursor position in grid units.
    #[must_use]
    pub const fn cursor(&self) -> (f64, f64) {
        (self.cursor.cursor_x, self.cursor.cursor_y)
    }

    /// Applies a modifier token.
    ///
    /// Fields are applied in a fixed order: rotation (`r`, `rx`, `ry`), then
    /// the relative offsets, then sizes, so `w2`/`h2` override `w`/`h` when
    /// both appear in one token.
    #[must_use]
    pub fn apply_modifiers(self, modifiers: &Modifiers) -> Self {
        let Self {
            mut template,
            mut cursor,
        } = self;

        if let Some(r) = modifiers.r {
            template.rotation_angle = r;
            cursor = CursorState::default();
        }
        if let Some(rx) = modifiers.rx {
            template.rotation_x = rx;
            cursor.cursor_x = 0.0;
            cursor.current_col = 0;
        }
        if let Some(ry) = modifiers.ry {
            template.rotation_y = ry;
            cursor.cursor_y = 0.0;
            cursor.current_row = 0;
        }
        if let Some(x) = modifiers.x {
            cursor.cursor_x += x;
        }
        if let Some(y) = modifiers.y {
            cursor.cursor_y += y;
        }
        if let Some(w) = modifiers.w {
            template.width = w;
            template.width2 = w;
        }
        if let Some(h) = modifiers.h {
            template.height = h;
            template.height2 = h;
        }
        if let Some(x2) = modifiers.x2 {
            template.x2 = x2;
        }
        if let Some(y2) = modifiers.y2 {
            template.y2 = y2;
        }
        if let Some(w2) = modifiers.w2 {
            template.width2 = w2;
        }
        if let Some(h2) = modifiers.h2 {
            template.height2 = h2;
        }
        if let Some(n) = modifiers.n {
            template.nub = n;
        }
        if let Some(l) = modifiers.l {
            template.stepped = l;
        }
        if let Some(d) = modifiers.d {
            template.decal = d;
        }
        if let Some(p) = &modifiers.p {
            template.profile = Some(p.clone());
        }
        if let Some(c) = &modifiers.c {
            template.color = Some(c.clone());
        }

        Self { template, cursor }
    }

    /// Emits a key for a label token and advances the cursor past it.
    #[must_use]
    pub fn emit_label(self, label: &str) -> (Self, Key) {
        let Self {
            template,
            mut cursor,
        } = self;

        let labels = label.split('\n').map(str::to_string).collect();
        let (x, y) = if template.in_rotation_group() {
            (
                template.rotation_x + cursor.cursor_x,
                template.rotation_y + cursor.cursor_y,
            )
        } else {
            (cursor.cursor_x, cursor.cursor_y)
        };
        let key = template.snapshot(x, y, labels);

        trace!(
            row = cursor.current_row,
            col = cursor.current_col,
            x = key.x,
            y = key.y,
            label = key.primary_label(),
            "emitted key"
        );

        cursor.cursor_x += key.width;
        cursor.current_col += 1;

        (
            Self {
                template: template.reset_transient(),
                cursor,
            },
            key,
        )
    }

    /// Moves the cursor to the start of the next row.
    ///
    /// Applied after every key row, inside or outside a rotation group.
    #[must_use]
    pub fn end_row(self) -> Self {
        let Self {
            template,
            mut cursor,
        } = self;

        cursor.cursor_x = 0.0;
        cursor.cursor_y += 1.0;
        cursor.current_col = 0;
        cursor.current_row += 1;

        Self { template, cursor }
    }

    /// Processes one token, returning the key it emits, if any.
    #[must_use]
    pub fn step(self, token: &Token) -> (Self, Option<Key>) {
        match token {
            Token::Modifier(modifiers) => (self.apply_modifiers(modifiers), None),
            Token::Label(label) => {
                let (state, key) = self.emit_label(label);
                (state, Some(key))
            }
        }
    }
}

/// Decodes a validated document into a layout.
///
/// Infallible: every shape check already happened in [`KleDocument::from_value`].
#[must_use]
pub fn decode_document(document: &KleDocument) -> Layout {
    let mut keys = Vec::with_capacity(document.label_count());
    let mut state = DecoderState::new();

    for row in document.token_rows() {
        for token in row {
            let (next, key) = state.step(token);
            state = next;
            keys.extend(key);
        }
        state = state.end_row();
    }

    debug!(keys = keys.len(), "decoded KLE layout");

    Layout {
        metadata: document.metadata().cloned(),
        keys,
    }
}

/// Validates and decodes a raw KLE value.
///
/// # Errors
///
/// Returns a [`FormatError`] for any malformed row or token. No keys are
/// returned in that case.
pub fn decode_layout(value: &Value) -> Result<Layout, FormatError> {
    let document = KleDocument::from_value(value)?;
    Ok(decode_document(&document))
}
