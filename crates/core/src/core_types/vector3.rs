//! Three-component vector for positions, directions and rotations.
//!
//! `Vector3` mixes two groups of operations on purpose:
//! - mutating methods on an owned instance (`normalize`, `add_eq`, `rotate_x`, ...)
//! - pure free functions in [`crate::ops`] that borrow their operands and
//!   return a new vector (`add`, `sub`, `dot`, `cross`)
//!
//! Magnitude comparisons and the normalize short-circuit use exact float
//! equality. A vector whose magnitude rounds to exactly `1.0` is treated as
//! already normalized.

use std::fmt;

use tracing::{debug, trace};

use super::angle::Degrees;

/// 3D vector with `f64` components.
///
/// Components default to `0.0`. Any three finite (or non-finite) values form a
/// valid vector; there is no unit-length invariant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
    /// Depth coordinate
    pub z: f64,
}

/// Missing or falsy input (`None`, `NaN`, `-0.0`) becomes `0.0`.
#[inline]
fn or_zero(value: Option<f64>) -> f64 {
    match value {
        Some(v) if !v.is_nan() && v != 0.0 => v,
        _ => 0.0,
    }
}

/// Round to two decimal places, half away from zero.
#[inline]
fn round_hundredths(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // avoid rendering -0.0 as "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

impl Vector3 {
    /// The zero vector
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    /// Unit vector along +X
    pub const UNIT_X: Vector3 = Vector3::new(1.0, 0.0, 0.0);

    /// Unit vector along +Y
    pub const UNIT_Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);

    /// Unit vector along +Z
    pub const UNIT_Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    /// Create a vector from three components, stored as given.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// Create a vector where each missing component defaults to `0.0`.
    ///
    /// `NaN` counts as missing here, matching the toolkit's "falsy becomes
    /// zero" construction rule. Use [`Vector3::new`] to store `NaN` as-is.
    ///
    /// ```
    /// use vector3_core::Vector3;
    ///
    /// let v = Vector3::from_optional(Some(2.0), None, Some(f64::NAN));
    /// assert_eq!(v, Vector3::new(2.0, 0.0, 0.0));
    /// ```
    #[inline]
    #[must_use]
    pub fn from_optional(x: Option<f64>, y: Option<f64>, z: Option<f64>) -> Self {
        Vector3 {
            x: or_zero(x),
            y: or_zero(y),
            z: or_zero(z),
        }
    }

    /// Create a vector with all three components set to `value`.
    #[inline]
    #[must_use]
    pub const fn splat(value: f64) -> Self {
        Vector3::new(value, value, value)
    }

    /// Components as `[x, y, z]`
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Overwrite `target` with this vector's components.
    #[inline]
    pub fn copy_to(&self, target: &mut Vector3) {
        target.x = self.x;
        target.y = self.y;
        target.z = self.z;
    }

    /// Overwrite this vector with `source`'s components.
    #[inline]
    pub fn copy_from(&mut self, source: &Vector3) {
        self.x = source.x;
        self.y = source.y;
        self.z = source.z;
    }

    /// Set all three components in place.
    #[inline]
    pub fn reset(&mut self, x: f64, y: f64, z: f64) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Set all three components in place, defaulting missing ones to `0.0`.
    ///
    /// Same coercion rules as [`Vector3::from_optional`].
    #[inline]
    pub fn reset_optional(&mut self, x: Option<f64>, y: Option<f64>, z: Option<f64>) {
        *self = Vector3::from_optional(x, y, z);
    }

    /// Euclidean length, `sqrt(x² + y² + z²)`
    #[inline]
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Squared length, `x² + y² + z²`. Avoids the square root for comparisons.
    #[inline]
    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Scale to unit length in place.
    ///
    /// No-op when the magnitude is exactly `0.0` (nothing to scale) or exactly
    /// `1.0` (already unit). Near-unit vectors whose magnitude rounds to `1.0`
    /// are therefore not re-normalized.
    pub fn normalize(&mut self) {
        let magnitude = self.magnitude();

        if magnitude == 0.0 {
            trace!("normalize skipped: zero-magnitude vector");
            return;
        }
        if magnitude == 1.0 {
            return;
        }
        if !magnitude.is_finite() {
            debug!(
                "normalize on non-finite magnitude {} for ({}, {}, {})",
                magnitude, self.x, self.y, self.z
            );
        }

        self.multiply_eq(1.0 / magnitude);
    }

    /// Normalized copy of this vector, same rules as [`Vector3::normalize`].
    #[inline]
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Scale every component by `scalar` in place.
    #[inline]
    pub fn multiply_eq(&mut self, scalar: f64) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
    }

    /// Componentwise in-place addition.
    #[inline]
    pub fn add_eq(&mut self, other: &Vector3) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }

    /// Componentwise in-place subtraction.
    #[inline]
    pub fn sub_eq(&mut self, other: &Vector3) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }

    /// `true` if the magnitude is less than `n` (compares `magnitude² < n²`).
    #[inline]
    #[must_use]
    pub fn is_magnitude_less_than(&self, n: f64) -> bool {
        self.magnitude_squared() < n * n
    }

    /// `true` if the magnitude is greater than `n` (compares `magnitude² > n²`).
    #[inline]
    #[must_use]
    pub fn is_magnitude_greater_than(&self, n: f64) -> bool {
        self.magnitude_squared() > n * n
    }

    /// `true` if `magnitude² == n²` exactly. No epsilon tolerance.
    #[inline]
    #[must_use]
    pub fn is_magnitude_equal_to(&self, n: f64) -> bool {
        self.magnitude_squared() == n * n
    }

    /// Rotate the `(y, z)` pair about the X axis.
    ///
    /// `y' = y·cosθ − z·sinθ`, `z' = y·sinθ + z·cosθ`
    pub fn rotate_x(&mut self, angle: impl Into<Degrees>) {
        let (sin, cos) = angle.into().to_radians().sin_cos();
        let (old_y, old_z) = (self.y, self.z);

        self.y = old_y * cos - old_z * sin;
        self.z = old_y * sin + old_z * cos;
    }

    /// Rotate the `(x, z)` pair about the Y axis.
    ///
    /// `x' = x·cosθ + z·sinθ`, `z' = −x·sinθ + z·cosθ`
    ///
    /// This handedness differs from [`Vector3::rotate_x`] / [`Vector3::rotate_z`];
    /// existing callers depend on it.
    pub fn rotate_y(&mut self, angle: impl Into<Degrees>) {
        let (sin, cos) = angle.into().to_radians().sin_cos();
        let (old_x, old_z) = (self.x, self.z);

        self.x = old_x * cos + old_z * sin;
        self.z = -old_x * sin + old_z * cos;
    }

    /// Rotate the `(x, y)` pair about the Z axis.
    ///
    /// `x' = x·cosθ − y·sinθ`, `y' = x·sinθ + y·cosθ`
    pub fn rotate_z(&mut self, angle: impl Into<Degrees>) {
        let (sin, cos) = angle.into().to_radians().sin_cos();
        let (old_x, old_y) = (self.x, self.y);

        self.x = old_x * cos - old_y * sin;
        self.y = old_x * sin + old_y * cos;
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> [f64; 3] {
        v.to_array()
    }
}

/// Renders `x:<x> y:<y> z:<z>` with each component rounded to two decimals.
impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x:{} y:{} z:{}",
            round_hundredths(self.x),
            round_hundredths(self.y),
            round_hundredths(self.z)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPS: f64 = 1e-9;

    fn assert_close(a: Vector3, b: Vector3) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = EPS);
        assert_abs_diff_eq!(a.y, b.y, epsilon = EPS);
        assert_abs_diff_eq!(a.z, b.z, epsilon = EPS);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Vector3::default(), Vector3::ZERO);
        assert_eq!(Vector3::default().to_string(), "x:0 y:0 z:0");
    }

    #[test]
    fn test_from_optional_defaults_missing_and_falsy() {
        let v = Vector3::from_optional(None, Some(f64::NAN), Some(-0.0));
        assert_eq!(v.to_array(), [0.0, 0.0, 0.0]);
        assert!(v.z.is_sign_positive());

        let w = Vector3::from_optional(Some(1.5), None, Some(-2.0));
        assert_eq!(w, Vector3::new(1.5, 0.0, -2.0));
    }

    #[test]
    #[allow(clippy::clone_on_copy)]
    fn test_clone_is_independent() {
        let original = Vector3::new(1.0, 2.0, 3.0);
        let mut copy = original.clone();
        copy.x = 99.0;
        assert_eq!(original, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(copy.x, 99.0);
    }

    #[test]
    fn test_copy_to_matches_copy_from() {
        let source = Vector3::new(-4.0, 0.5, 7.25);

        let mut via_to = Vector3::new(9.0, 9.0, 9.0);
        source.copy_to(&mut via_to);

        let mut via_from = Vector3::new(1.0, 1.0, 1.0);
        via_from.copy_from(&source);

        assert_eq!(via_to, via_from);
        assert_eq!(via_to, source);
    }

    #[test]
    fn test_reset_and_reset_optional() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v.reset(4.0, 5.0, 6.0);
        assert_eq!(v, Vector3::new(4.0, 5.0, 6.0));

        v.reset_optional(Some(7.0), None, None);
        assert_eq!(v, Vector3::new(7.0, 0.0, 0.0));
    }

    #[test]
    fn test_magnitude_345() {
        let v = Vector3::new(3.0, 4.0, 0.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.magnitude_squared(), 25.0);
        assert_eq!(v.to_string(), "x:3 y:4 z:0");
    }

    #[test]
    fn test_normalize_scales_to_unit_length() {
        let mut v = Vector3::new(3.0, 4.0, 12.0);
        v.normalize();
        assert_abs_diff_eq!(v.magnitude(), 1.0, epsilon = EPS);
        assert_close(v, Vector3::new(3.0 / 13.0, 4.0 / 13.0, 12.0 / 13.0));
    }

    #[test]
    fn test_normalize_zero_is_noop() {
        let mut v = Vector3::ZERO;
        v.normalize();
        assert_eq!(v, Vector3::ZERO);
        assert!(!v.x.is_nan());
    }

    #[test]
    fn test_normalize_exact_unit_is_noop() {
        let mut v = Vector3::new(0.0, -1.0, 0.0);
        assert_eq!(v.magnitude(), 1.0);
        v.normalize();
        assert_eq!(v, Vector3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_normalize_propagates_nan() {
        let mut v = Vector3::new(f64::NAN, 1.0, 1.0);
        v.normalize();
        assert!(v.x.is_nan() && v.y.is_nan() && v.z.is_nan());
    }

    #[test]
    fn test_normalized_leaves_source_untouched() {
        let v = Vector3::new(0.0, 10.0, 0.0);
        let n = v.normalized();
        assert_eq!(v, Vector3::new(0.0, 10.0, 0.0));
        assert_eq!(n, Vector3::UNIT_Y);
    }

    #[test]
    fn test_compound_arithmetic() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v.multiply_eq(2.0);
        assert_eq!(v, Vector3::new(2.0, 4.0, 6.0));

        v.add_eq(&Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(v, Vector3::new(3.0, 5.0, 7.0));

        v.sub_eq(&Vector3::new(3.0, 5.0, 7.0));
        assert_eq!(v, Vector3::ZERO);
    }

    #[test]
    fn test_magnitude_comparisons() {
        let v = Vector3::new(3.0, 4.0, 0.0);

        assert!(v.is_magnitude_less_than(6.0));
        assert!(!v.is_magnitude_less_than(5.0));
        assert!(v.is_magnitude_greater_than(4.0));
        assert!(!v.is_magnitude_greater_than(5.0));
        assert!(v.is_magnitude_equal_to(5.0));

        // n is squared, so the sign is ignored
        assert!(v.is_magnitude_equal_to(-5.0));
        assert!(v.is_magnitude_greater_than(-4.0));

        assert!(Vector3::ZERO.is_magnitude_equal_to(0.0));
        assert!(!Vector3::ZERO.is_magnitude_less_than(0.0));
    }

    #[test]
    fn test_rotate_x_quarter_turn() {
        let mut v = Vector3::new(5.0, 1.0, 0.0);
        v.rotate_x(90.0);
        assert_close(v, Vector3::new(5.0, 0.0, 1.0));
    }

    #[test]
    fn test_rotate_y_quarter_turn_keeps_handedness() {
        let mut v = Vector3::UNIT_X;
        v.rotate_y(90.0);
        // x' = x·cos + z·sin = 0, z' = -x·sin + z·cos = -1
        assert_close(v, Vector3::new(0.0, 0.0, -1.0));

        let mut w = Vector3::UNIT_Z;
        w.rotate_y(90.0);
        assert_close(w, Vector3::UNIT_X);
    }

    #[test]
    fn test_rotate_z_quarter_turn() {
        let mut v = Vector3::new(1.0, 0.0, 3.0);
        v.rotate_z(Degrees::new(90.0));
        assert_close(v, Vector3::new(0.0, 1.0, 3.0));
    }

    #[test]
    fn test_rotation_uses_pre_rotation_snapshot() {
        let mut v = Vector3::new(0.0, 1.0, 1.0);
        v.rotate_x(180.0);
        assert_close(v, Vector3::new(0.0, -1.0, -1.0));
    }

    #[test]
    fn test_display_rounds_to_two_decimals() {
        assert_eq!(Vector3::new(1.234, -5.678, 0.125).to_string(), "x:1.23 y:-5.68 z:0.13");
        assert_eq!(Vector3::new(-0.001, 0.004, 2.5).to_string(), "x:0 y:0 z:2.5");
        assert_eq!(Vector3::new(-1.005, 10.0, 100.0).to_string(), "x:-1 y:10 z:100");
    }

    #[test]
    fn test_display_negative_half_rounds_away_from_zero() {
        assert_eq!(Vector3::new(-0.125, 0.0, 0.0).to_string(), "x:-0.13 y:0 z:0");
        assert_eq!(Vector3::new(0.0, -2.5, -0.375).to_string(), "x:0 y:-2.5 z:-0.38");
    }

    #[test]
    fn test_display_non_finite_components() {
        let v = Vector3::new(f64::INFINITY, f64::NAN, f64::NEG_INFINITY);
        assert_eq!(v.to_string(), "x:inf y:NaN z:-inf");
    }

    #[test]
    fn test_array_and_tuple_conversions() {
        let v: Vector3 = [1.0, 2.0, 3.0].into();
        let w: Vector3 = (1.0, 2.0, 3.0).into();
        assert_eq!(v, w);

        let arr: [f64; 3] = v.into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);
        assert_eq!(Vector3::splat(2.0), Vector3::new(2.0, 2.0, 2.0));
    }
}
