//! Degree/radian angles for axis rotations
//!
//! Rotations on [`Vector3`](crate::Vector3) take their angle in degrees; the
//! conversion factors are module constants, never per-vector state.
//!
//! ```
//! use vector3_core::{Degrees, Radians};
//!
//! let (sin, cos) = Degrees::new(90.0).to_radians().sin_cos();
//! assert!((sin - 1.0).abs() < 1e-12 && cos.abs() < 1e-12);
//! assert_eq!(Radians::new(std::f64::consts::PI).to_degrees().to_string(), "180.0°");
//! ```

use std::fmt;
use std::ops::Neg;

/// Degrees in one radian (`180 / π`)
pub const DEGREES_PER_RADIAN: f64 = 180.0 / std::f64::consts::PI;

/// Radians in one degree (`π / 180`)
pub const RADIANS_PER_DEGREE: f64 = std::f64::consts::PI / 180.0;

/// Rotation angle in degrees. Plain `f64` converts via `From`, so
/// `v.rotate_x(90.0)` and `v.rotate_x(Degrees::new(90.0))` are equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(transparent)]
pub struct Degrees(f64);

impl Degrees {
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Degrees(value)
    }

    /// Scale by [`RADIANS_PER_DEGREE`]
    #[inline]
    #[must_use]
    pub fn to_radians(self) -> Radians {
        Radians(self.0 * RADIANS_PER_DEGREE)
    }
}

impl From<f64> for Degrees {
    fn from(v: f64) -> Self {
        Degrees(v)
    }
}

impl Neg for Degrees {
    type Output = Degrees;
    fn neg(self) -> Degrees {
        Degrees(-self.0)
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}

/// Angle in radians, the unit `sin`/`cos` work in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(transparent)]
pub struct Radians(f64);

impl Radians {
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Radians(value)
    }

    /// Scale by [`DEGREES_PER_RADIAN`]
    #[inline]
    #[must_use]
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0 * DEGREES_PER_RADIAN)
    }

    /// `(sin, cos)` of the angle
    #[inline]
    #[must_use]
    pub fn sin_cos(self) -> (f64, f64) {
        self.0.sin_cos()
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} rad", self.0)
    }
}
