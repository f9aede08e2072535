//! Pure vector operations and std operator overloads.
//!
//! The free functions borrow their operands and always return a fresh value;
//! they never mutate. The compound-assignment operators (`+=`, `-=`, `*=`)
//! forward to the in-place methods on [`Vector3`].

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::core_types::Vector3;

/// Componentwise sum `v + w`.
#[inline]
#[must_use]
pub fn add(v: &Vector3, w: &Vector3) -> Vector3 {
    Vector3::new(v.x + w.x, v.y + w.y, v.z + w.z)
}

/// Componentwise difference `v − w`.
#[inline]
#[must_use]
pub fn sub(v: &Vector3, w: &Vector3) -> Vector3 {
    Vector3::new(v.x - w.x, v.y - w.y, v.z - w.z)
}

/// Dot product `v.x·w.x + v.y·w.y + v.z·w.z`.
#[inline]
#[must_use]
pub fn dot(v: &Vector3, w: &Vector3) -> f64 {
    v.x * w.x + v.y * w.y + v.z * w.z
}

/// Cross product `v × w`, right-hand oriented.
///
/// The result is orthogonal to both inputs, and `cross(x̂, ŷ) == ẑ`.
/// Operands are taken as `v × w`, not the `w × v` order a component-wise
/// reading of `(w.y·v.z − w.z·v.y, …)` would give.
#[inline]
#[must_use]
pub fn cross(v: &Vector3, w: &Vector3) -> Vector3 {
    Vector3::new(
        v.y * w.z - v.z * w.y,
        v.z * w.x - v.x * w.z,
        v.x * w.y - v.y * w.x,
    )
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Vector3) -> Vector3 {
        add(&self, &rhs)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Vector3) -> Vector3 {
        sub(&self, &rhs)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(mut self, rhs: f64) -> Vector3 {
        self.multiply_eq(rhs);
        self
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        self.add_eq(&rhs);
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        self.sub_eq(&rhs);
    }
}

impl MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, rhs: f64) {
        self.multiply_eq(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_cross_of_basis_vectors() {
        assert_eq!(cross(&Vector3::UNIT_X, &Vector3::UNIT_Y), Vector3::UNIT_Z);
        assert_eq!(cross(&Vector3::UNIT_Y, &Vector3::UNIT_Z), Vector3::UNIT_X);
        assert_eq!(cross(&Vector3::UNIT_Z, &Vector3::UNIT_X), Vector3::UNIT_Y);
    }

    #[test]
    fn test_cross_is_anti_commutative_and_orthogonal() {
        let v = Vector3::new(1.5, -2.0, 3.25);
        let w = Vector3::new(-0.5, 4.0, 2.0);

        let vw = cross(&v, &w);
        assert_eq!(vw, -cross(&w, &v));
        assert_abs_diff_eq!(dot(&vw, &v), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(dot(&vw, &w), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_dot_pairs_matching_axes() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let w = Vector3::new(4.0, -5.0, 6.0);
        assert_eq!(dot(&v, &w), 4.0 - 10.0 + 18.0);
        assert_eq!(dot(&v, &w), dot(&w, &v));
    }

    #[test]
    fn test_add_and_sub_return_new_values() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let w = Vector3::new(0.5, 0.5, 0.5);

        assert_eq!(add(&v, &w), Vector3::new(1.5, 2.5, 3.5));
        assert_eq!(sub(&v, &w), Vector3::new(0.5, 1.5, 2.5));
        assert_eq!(sub(&add(&v, &w), &w), v);
        // operands untouched
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_operators_match_free_functions() {
        let v = Vector3::new(1.0, -2.0, 3.0);
        let w = Vector3::new(4.0, 0.0, -1.0);

        assert_eq!(v + w, add(&v, &w));
        assert_eq!(v - w, sub(&v, &w));
        assert_eq!(v * 2.0, Vector3::new(2.0, -4.0, 6.0));
        assert_eq!(2.0 * v, v * 2.0);

        let mut acc = v;
        acc += w;
        acc -= v;
        acc *= 0.5;
        assert_eq!(acc, Vector3::new(2.0, 0.0, -0.5));
    }

    #[test]
    fn test_nan_propagates_through_operations() {
        let v = Vector3::new(f64::NAN, 0.0, 0.0);
        assert!(dot(&v, &Vector3::UNIT_X).is_nan());
        assert!(add(&v, &Vector3::UNIT_X).x.is_nan());
        assert!((v * f64::INFINITY).x.is_nan());
    }
}
