//! Rigid placement transforms for footprint instances.

use nalgebra::{Isometry3, Matrix4, Point3, Translation3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Physical spacing per keyboard unit.
///
/// Treated as opaque scale factors; zero or negative values are accepted
/// and simply produce degenerate placements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    /// Physical units per grid unit along X
    pub horizontal: f64,
    /// Physical units per grid unit along Y
    pub vertical: f64,
}

impl Spacing {
    /// Creates a new spacing.
    #[must_use]
    pub const fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Same spacing on both axes.
    #[must_use]
    pub const fn uniform(unit: f64) -> Self {
        Self::new(unit, unit)
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self::uniform(crate::constants::DEFAULT_UNIT_SPACING_MM)
    }
}

/// Rigid transform placing one footprint instance.
///
/// The transform is a translation followed by a rotation about
/// `rotation_center` around the plane normal (+Z):
///
/// `p' = R(center, angle) * (p + translation)`
///
/// Coordinates are in the target plane, where Y grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementTransform {
    /// Counter-clockwise rotation about +Z, in radians
    pub rotation_angle_radians: f64,
    /// Point the rotation is taken about
    pub rotation_center: [f64; 3],
    /// Translation applied before the rotation
    pub translation: [f64; 3],
}

impl PlacementTransform {
    /// Returns true if the transform rotates.
    #[must_use]
    pub fn is_rotated(&self) -> bool {
        self.rotation_angle_radians != 0.0
    }

    /// Converts to an isometry: rotation about the center composed after the translation.
    #[must_use]
    pub fn to_isometry(&self) -> Isometry3<f64> {
        let [tx, ty, tz] = self.translation;
        let translation = Isometry3::from_parts(
            Translation3::new(tx, ty, tz),
            UnitQuaternion::identity(),
        );
        if !self.is_rotated() {
            return translation;
        }

        let [cx, cy, cz] = self.rotation_center;
        let rotation = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), self.rotation_angle_radians);
        Isometry3::rotation_wrt_point(rotation, Point3::new(cx, cy, cz)) * translation
    }

    /// Converts to a 4x4 homogeneous matrix (column vectors).
    #[must_use]
    pub fn to_matrix(&self) -> Matrix4<f64> {
        self.to_isometry().to_homogeneous()
    }

    /// Maps a point from footprint-local coordinates into the target plane.
    #[must_use]
    pub fn transform_point(&self, point: [f64; 3]) -> [f64; 3] {
        let mapped = self
            .to_isometry()
            .transform_point(&Point3::new(point[0], point[1], point[2]));
        [mapped.x, mapped.y, mapped.z]
    }

    /// Where the footprint's local origin ends up.
    #[must_use]
    pub fn footprint_origin(&self) -> [f64; 3] {
        self.transform_point([0.0, 0.0, 0.0])
    }
}
