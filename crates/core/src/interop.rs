//! Conversions between [`Vector3`] and `nalgebra` types.
//!
//! Transform and camera code in the toolkit does its matrix work in
//! `nalgebra`; these impls let it hand positions and directions back and
//! forth without touching individual components.

use nalgebra::{Point3, Vector3 as NaVector3};

use crate::core_types::Vector3;

impl From<NaVector3<f64>> for Vector3 {
    fn from(v: NaVector3<f64>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for NaVector3<f64> {
    fn from(v: Vector3) -> Self {
        NaVector3::new(v.x, v.y, v.z)
    }
}

impl From<Point3<f64>> for Vector3 {
    fn from(p: Point3<f64>) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }
}

impl From<Vector3> for Point3<f64> {
    fn from(v: Vector3) -> Self {
        Point3::new(v.x, v.y, v.z)
    }
}
