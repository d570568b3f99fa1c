//! Key descriptors decoded from a KLE layout.

use serde::{Deserialize, Serialize};

/// Running key template carried from token to token while decoding.
///
/// Rotation, profile and color persist until overwritten. Size, secondary
/// rectangle and the boolean flags are reset after every emitted key
/// (see [`ModifierTemplate::reset_transient`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierTemplate {
    /// Rotation in degrees (clockwise on screen)
    pub rotation_angle: f64,
    /// Rotation pivot X in keyboard units
    pub rotation_x: f64,
    /// Rotation pivot Y in keyboard units
    pub rotation_y: f64,
    /// Primary width in keyboard units
    pub width: f64,
    /// Primary height in keyboard units
    pub height: f64,
    /// Secondary rectangle width (0 = unset)
    pub width2: f64,
    /// Secondary rectangle height (0 = unset)
    pub height2: f64,
    /// Secondary rectangle X offset
    pub x2: f64,
    /// Secondary rectangle Y offset
    pub y2: f64,
    /// Homing nub
    pub nub: bool,
    /// Stepped keycap
    pub stepped: bool,
    /// Decal (label only, no physical key)
    pub decal: bool,
    /// Keycap profile name
    pub profile: Option<String>,
    /// Keycap color (usually `#rrggbb`)
    pub color: Option<String>,
}

impl Default for ModifierTemplate {
    fn default() -> Self {
        Self {
            rotation_angle: 0.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
            width: 1.0,
            height: 1.0,
            width2: 0.0,
            height2: 0.0,
            x2: 0.0,
            y2: 0.0,
            nub: false,
            stepped: false,
            decal: false,
            profile: None,
            color: None,
        }
    }
}

impl ModifierTemplate {
    /// Returns true if any rotation field is set, i.e. keys are placed
    /// relative to the rotation pivot instead of the global origin.
    #[must_use]
    pub fn in_rotation_group(&self) -> bool {
        self.rotation_angle != 0.0 || self.rotation_x != 0.0 || self.rotation_y != 0.0
    }

    /// Resets the fields that only apply to a single key.
    #[must_use]
    pub fn reset_transient(self) -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            width2: 0.0,
            height2: 0.0,
            x2: 0.0,
            y2: 0.0,
            nub: false,
            stepped: false,
            decal: false,
            ..self
        }
    }

    /// Snapshots the template into a key placed at `(x, y)`.
    ///
    /// Unset secondary dimensions fall back to the primary ones.
    #[must_use]
    pub fn snapshot(&self, x: f64, y: f64, labels: Vec<String>) -> Key {
        Key {
            x,
            y,
            width: self.width,
            height: self.height,
            width2: if self.width2 == 0.0 {
                self.width
            } else {
                self.width2
            },
            height2: if self.height2 == 0.0 {
                self.height
            } else {
                self.height2
            },
            x2: self.x2,
            y2: self.y2,
            rotation_angle: self.rotation_angle,
            rotation_x: self.rotation_x,
            rotation_y: self.rotation_y,
            nub: self.nub,
            stepped: self.stepped,
            decal: self.decal,
            profile: self.profile.clone(),
            color: self.color.clone(),
            labels,
        }
    }
}

/// A single decoded key.
///
/// # Coordinates
///
/// `x`/`y` are absolute grid positions (1.0 = one key unit), with Y growing
/// downward as in the editor. For keys inside a rotation group the position
/// is the unrotated one; `rotation_*` describe how to rotate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Key {
    /// Grid X position of the top-left corner
    pub x: f64,
    /// Grid Y position of the top-left corner
    pub y: f64,
    /// Key width in keyboard units
    pub width: f64,
    /// Key height in keyboard units
    pub height: f64,
    /// Secondary rectangle width (ISO enter, big-ass enter)
    pub width2: f64,
    /// Secondary rectangle height
    pub height2: f64,
    /// Secondary rectangle X offset
    pub x2: f64,
    /// Secondary rectangle Y offset
    pub y2: f64,
    /// Rotation in degrees
    pub rotation_angle: f64,
    /// Rotation pivot X in keyboard units
    pub rotation_x: f64,
    /// Rotation pivot Y in keyboard units
    pub rotation_y: f64,
    /// Homing nub
    pub nub: bool,
    /// Stepped keycap
    pub stepped: bool,
    /// Decal
    pub decal: bool,
    /// Keycap profile
    pub profile: Option<String>,
    /// Keycap color
    pub color: Option<String>,
    /// Legends, one per line of the source label
    pub labels: Vec<String>,
}

impl Key {
    /// Returns the first non-empty legend, or an empty string.
    #[must_use]
    pub fn primary_label(&self) -> &str {
        self.labels
            .iter()
            .find(|label| !label.is_empty())
            .map_or("", String::as_str)
    }

    /// Returns true if the key is rotated about its pivot.
    #[must_use]
    pub fn is_rotated(&self) -> bool {
        self.rotation_angle != 0.0
    }
}
