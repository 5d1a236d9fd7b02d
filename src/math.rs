//! Vector math and angle geometry.
//!
//! Everything here is plain `f64` arithmetic with an explicit, fixed
//! evaluation order. Determinism across platforms depends on never letting
//! the compiler reassociate these expressions or fuse them into an FMA, so
//! this module intentionally avoids any crate (e.g. `nalgebra`) whose
//! vectorized backends don't make that evaluation order auditable.

use std::f64::consts::PI;

pub const TAU: f64 = 2.0 * PI;

/// A 2-D vector or point. Always passed and returned by value.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// A unit-length vector pointing at `angle` radians from +x, counter-clockwise.
    pub fn from_angle(angle: f64) -> Self {
        Self {
            x: angle.cos(),
            y: angle.sin(),
        }
    }

    pub fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }

    pub fn scale(self, k: f64) -> Vec2 {
        Vec2::new(self.x * k, self.y * k)
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance_to(self, other: Vec2) -> f64 {
        self.sub(other).length()
    }

    /// Angle of this vector from +x, counter-clockwise, in (-pi, pi].
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }
}

/// Normalize an angle in radians to `[0, TAU)`.
pub fn normalize_angle_unsigned(angle: f64) -> f64 {
    let wrapped = angle % TAU;
    if wrapped < 0.0 {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Normalize an angle in radians to `(-PI, PI]`, used for bearing offsets.
pub fn normalize_angle_signed(angle: f64) -> f64 {
    let wrapped = normalize_angle_unsigned(angle + PI) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Whether `bearing` lies within an arc of total angular width `arc_width`
/// centered on `heading` (both radians). `arc_width` is the full width, not
/// the half-width, matching the `arc_degrees` config field.
pub fn within_arc(heading: f64, bearing: f64, arc_width: f64) -> bool {
    let offset = normalize_angle_signed(bearing - heading);
    offset.abs() <= arc_width / 2.0
}

/// Point-in-circle containment test.
pub fn within_circle(point: Vec2, center: Vec2, radius: f64) -> bool {
    point.distance_to(center) <= radius
}
