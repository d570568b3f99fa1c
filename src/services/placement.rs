//! Footprint placement for decoded keys.
//!
//! Converts a key's grid position, size and rotation into the rigid transform
//! that puts a unit footprint (centered on its own origin) at the key's center.
//!
//! # Axis conventions
//!
//! KLE rows grow downward while the target plane's Y axis grows upward, so
//! every Y coordinate is negated. For the same reason a clockwise KLE
//! rotation becomes a negative (clockwise) angle about +Z.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Key, Layout, PlacementTransform, Spacing};

/// Computes the placement transform for one key.
///
/// 1. The pivot is scaled to physical units.
/// 2. The key's offset from the pivot is scaled and shifted from the
///    top-left corner to the key center.
/// 3. Pivot + offset gives the final center, translated with Y negated.
/// 4. If the key is rotated, the translated footprint is then rotated about
///    the (Y-negated) pivot.
///
/// Pure and total: zero or negative spacing just yields degenerate results.
#[must_use]
pub fn compute_transform(key: &Key, spacing: Spacing) -> PlacementTransform {
    let Spacing {
        horizontal: h,
        vertical: v,
    } = spacing;

    let pivot_x = key.rotation_x * h;
    let pivot_y = key.rotation_y * v;

    let local_x = (key.x - key.rotation_x) * h + key.width * h / 2.0;
    let local_y = (key.y - key.rotation_y) * v + key.height * v / 2.0;

    let final_x = pivot_x + local_x;
    let final_y = pivot_y + local_y;

    let rotation_angle_radians = if key.rotation_angle == 0.0 {
        0.0
    } else {
        -key.rotation_angle.to_radians()
    };

    PlacementTransform {
        rotation_angle_radians,
        rotation_center: [pivot_x, -pivot_y, 0.0],
        translation: [final_x, -final_y, 0.0],
    }
}

/// One key together with its transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Index of the key in the layout
    pub index: usize,
    /// The decoded key
    pub key: Key,
    /// Where to put the footprint for this key
    pub transform: PlacementTransform,
}

/// Everything a host needs to instantiate footprints for a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementPlan {
    /// Name of the container grouping all instances
    pub group_name: String,
    /// Spacing the transforms were computed with
    pub spacing: Spacing,
    /// Whether the host should hide the original footprint afterwards
    pub hide_template: bool,
    /// One placement per key, in layout order
    pub placements: Vec<Placement>,
}

impl PlacementPlan {
    /// Computes placements for every key of a layout.
    pub fn build(layout: &Layout, spacing: Spacing, group_name: impl Into<String>) -> Self {
        let placements: Vec<Placement> = layout
            .keys
            .iter()
            .enumerate()
            .map(|(index, key)| Placement {
                index,
                key: key.clone(),
                transform: compute_transform(key, spacing),
            })
            .collect();

        debug!(
            placements = placements.len(),
            horizontal = spacing.horizontal,
            vertical = spacing.vertical,
            "built placement plan"
        );

        Self {
            group_name: group_name.into(),
            spacing,
            hide_template: true,
            placements,
        }
    }

    /// Number of footprint instances the plan creates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Returns true if the plan places nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModifierTemplate;
    use crate::parser::decode_layout;
    use serde_json::json;
    use std::f64::consts::FRAC_PI_4;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: [f64; 3], expected: [f64; 3]) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < EPSILON, "expected {expected:?}, got {actual:?}");
        }
    }

    fn key_at(x: f64, y: f64) -> Key {
        ModifierTemplate::default().snapshot(x, y, vec!["k".to_string()])
    }

    #[test]
    fn test_unrotated_row() {
        let layout = decode_layout(&json!([["a", "b"]])).unwrap();
        let spacing = Spacing::uniform(1.0);

        let first = compute_transform(&layout.keys[0], spacing);
        let second = compute_transform(&layout.keys[1], spacing);

        assert_close(first.translation, [0.5, -0.5, 0.0]);
        assert_close(second.translation, [1.5, -0.5, 0.0]);
        assert_eq!(first.rotation_angle_radians, 0.0);
        assert_eq!(second.rotation_angle_radians, 0.0);
    }

    #[test]
    fn test_rotated_key_about_pivot() {
        let layout = decode_layout(&json!([[{ "r": 45, "rx": 2, "ry": 2 }, "a"]])).unwrap();
        let transform = compute_transform(&layout.keys[0], Spacing::uniform(1.0));

        assert_close(transform.rotation_center, [2.0, -2.0, 0.0]);
        assert!((transform.rotation_angle_radians + FRAC_PI_4).abs() < EPSILON);
        assert_close(transform.translation, [2.5, -2.5, 0.0]);

        // Key center sits half a diagonal straight below the pivot once rotated.
        let half_diagonal = std::f64::consts::SQRT_2 / 2.0;
        assert_close(transform.footprint_origin(), [2.0, -2.0 - half_diagonal, 0.0]);
    }

    #[test]
    fn test_spacing_scales_axes_independently() {
        let key = ModifierTemplate {
            width: 2.0,
            ..ModifierTemplate::default()
        }
        .snapshot(1.0, 3.0, vec![]);
        let transform = compute_transform(&key, Spacing::new(19.05, 18.0));

        assert_close(
            transform.translation,
            [19.05 + 19.05, -(3.0 * 18.0 + 9.0), 0.0],
        );
    }

    #[test]
    fn test_pivot_only_group_has_no_rotation() {
        let layout = decode_layout(&json!([[{ "rx": 1, "ry": 1 }, "a"]])).unwrap();
        let transform = compute_transform(&layout.keys[0], Spacing::uniform(10.0));

        assert!(!transform.is_rotated());
        assert_close(transform.translation, [15.0, -15.0, 0.0]);
        assert_close(transform.footprint_origin(), [15.0, -15.0, 0.0]);
    }

    #[test]
    fn test_degenerate_spacing_is_accepted() {
        let key = key_at(3.0, 2.0);

        let zero = compute_transform(&key, Spacing::uniform(0.0));
        assert_close(zero.translation, [0.0, 0.0, 0.0]);

        let negative = compute_transform(&key, Spacing::uniform(-1.0));
        assert_close(negative.translation, [-3.5, 2.5, 0.0]);
    }

    #[test]
    fn test_rotation_sign_is_inverted() {
        let key = ModifierTemplate {
            rotation_angle: -30.0,
            ..ModifierTemplate::default()
        }
        .snapshot(0.0, 0.0, vec![]);
        let transform = compute_transform(&key, Spacing::uniform(1.0));
        assert!((transform.rotation_angle_radians - 30f64.to_radians()).abs() < EPSILON);
    }

    #[test]
    fn test_plan_preserves_order() {
        let layout = decode_layout(&json!([["a", "b"], ["c"]])).unwrap();
        let plan = PlacementPlan::build(&layout, Spacing::uniform(1.0), "Switches");

        assert_eq!(plan.len(), 3);
        assert!(plan.hide_template);
        assert_eq!(plan.group_name, "Switches");
        let labels: Vec<&str> = plan.placements.iter().map(|p| p.key.primary_label()).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
        let indices: Vec<usize> = plan.placements.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_close(plan.placements[2].transform.translation, [0.5, -1.5, 0.0]);
    }

    #[test]
    fn test_empty_plan() {
        let plan = PlacementPlan::build(&Layout::default(), Spacing::default(), "Switches");
        assert!(plan.is_empty());
    }
}
