//! Unit quaternions for rotating derived geometry (isosurfaces) in the 3-D view.

use core::fmt;
use core::ops;

use euclid::{Angle, Rotation3D, UnknownUnit, Vector3D, vec3};

/// Acts as polyfill for float methods
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use num_traits::float::Float as _;

/// Vectors in the model space that a [`Quaternion`] rotates.
pub type RotationVector = Vector3D<f64, UnknownUnit>;

/// A rotation of a rigid body in three-dimensional space, represented as a unit quaternion.
///
/// If the rotation is counterclockwise by an angle *α* about the unit axis *n*, the
/// quaternion is `[cos(α/2), sin(α/2) n]`.
///
/// Multiplication composes rotations: `q * r` means *do `r` first, then `q`*.
/// Correspondingly `q *= r` means `q = q * r`, which is the natural form for applying an
/// increment `r` (e.g. from a mouse drag) to an accumulated orientation `q`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion(Rotation3D<f64, UnknownUnit, UnknownUnit>);

impl Quaternion {
    /// Constructs a quaternion from its scalar part `w` and vector part `(x, y, z)`.
    ///
    /// The components are normalized so that the sum of their squares is one.
    #[inline]
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self(Rotation3D::quaternion(x, y, z, w).normalize())
    }

    /// The rotation which leaves everything where it is.
    #[inline]
    pub fn identity() -> Self {
        Self(Rotation3D::identity())
    }

    /// Rotation by `angle` radians counterclockwise about `axis` (which need not be
    /// normalized, but must not be zero).
    #[inline]
    pub fn from_axis_angle(axis: RotationVector, angle: f64) -> Self {
        Self(Rotation3D::around_axis(axis, Angle::radians(angle)))
    }

    /// Returns the shortest rotation which carries `from` onto `to`.
    ///
    /// This is how a drag on a virtual trackball is turned into a rotation: both ends of the
    /// drag are projected onto the unit sphere and this rotation takes one to the other.
    /// If the points are opposite, the rotation is a half turn about an arbitrary
    /// perpendicular axis.
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn between(from: SpherePoint, to: SpherePoint) -> Self {
        let a = from.vector();
        let b = to.vector();
        let axis = a.cross(b);
        let sin = axis.length();
        let cos = a.dot(b);
        if sin > 1e-12 {
            Self::from_axis_angle(axis, sin.atan2(cos))
        } else if cos > 0.0 {
            Self::identity()
        } else {
            let helper = if a.x.abs() < 0.9 {
                vec3(1.0, 0.0, 0.0)
            } else {
                vec3(0.0, 1.0, 0.0)
            };
            Self::from_axis_angle(a.cross(helper), core::f64::consts::PI)
        }
    }

    /// Scalar part.
    #[inline]
    pub fn w(&self) -> f64 {
        self.0.r
    }
    /// First component of the vector part.
    #[inline]
    pub fn x(&self) -> f64 {
        self.0.i
    }
    /// Second component of the vector part.
    #[inline]
    pub fn y(&self) -> f64 {
        self.0.j
    }
    /// Third component of the vector part.
    #[inline]
    pub fn z(&self) -> f64 {
        self.0.k
    }

    /// Returns the opposite rotation.
    #[inline]
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self(self.0.inverse())
    }

    /// Largest absolute value among the four components.
    #[inline]
    pub fn inf_norm(&self) -> f64 {
        self.w()
            .abs()
            .max(self.x().abs())
            .max(self.y().abs())
            .max(self.z().abs())
    }

    /// Applies this rotation to `vector`.
    #[inline]
    pub fn rotate(&self, vector: RotationVector) -> RotationVector {
        self.0.transform_vector3d(vector)
    }

    /// Returns the homogeneous 4×4 rotation matrix, in the row-vector convention:
    /// a point `p` is rotated by computing `[p.x, p.y, p.z, 1] × M`.
    #[inline]
    pub fn to_matrix(&self) -> [[f64; 4]; 4] {
        self.0.to_transform().to_arrays()
    }
}

impl Default for Quaternion {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl ops::Mul for Quaternion {
    type Output = Self;

    /// `self * rhs` applies `rhs` first, then `self`.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self(rhs.0.then(&self.0))
    }
}

impl ops::Div for Quaternion {
    type Output = Self;

    /// `self / rhs` is `self * rhs.inverse()`.
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self * rhs.inverse()
    }
}

impl ops::MulAssign for Quaternion {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl ops::DivAssign for Quaternion {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl fmt::Display for Quaternion {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}; {}, {}, {})",
            self.w(),
            self.x(),
            self.y(),
            self.z()
        )
    }
}

/// A point on the unit sphere, i.e. a direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpherePoint(RotationVector);

impl SpherePoint {
    /// Normalizes `(x, y, z)` onto the unit sphere.
    ///
    /// Returns [`None`] if the vector is zero or not finite, since it has no direction.
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn new(x: f64, y: f64, z: f64) -> Option<Self> {
        let v = vec3(x, y, z);
        let length = v.length();
        if length > 0.0 && length.is_finite() {
            Some(Self(v / length))
        } else {
            None
        }
    }

    /// The unit vector pointing at this point from the center of the sphere.
    #[inline]
    pub fn vector(self) -> RotationVector {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::FRAC_PI_2;
    use std::string::ToString as _;

    const EPSILON: f64 = 1e-12;

    #[track_caller]
    fn assert_vec_close(actual: RotationVector, expected: RotationVector) {
        assert!(
            (actual - expected).length() < EPSILON,
            "{actual:?} != {expected:?}"
        );
    }

    fn x() -> RotationVector {
        vec3(1.0, 0.0, 0.0)
    }
    fn y() -> RotationVector {
        vec3(0.0, 1.0, 0.0)
    }
    fn z() -> RotationVector {
        vec3(0.0, 0.0, 1.0)
    }

    #[test]
    fn new_normalizes() {
        let q = Quaternion::new(2.0, 0.0, 0.0, 0.0);
        assert_eq!(q, Quaternion::identity());
        assert_eq!(q.inf_norm(), 1.0);
    }

    #[test]
    fn hamilton_product() {
        let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(i * j, k);
        assert_eq!(j * i, Quaternion::new(0.0, 0.0, 0.0, -1.0));
    }

    #[test]
    fn quarter_turn_about_z() {
        let q = Quaternion::from_axis_angle(z(), FRAC_PI_2);
        assert_vec_close(q.rotate(x()), y());
        assert_vec_close(q.rotate(y()), -x());
        assert_vec_close(q.rotate(z()), z());
    }

    #[test]
    fn composition_order() {
        let q = Quaternion::from_axis_angle(z(), FRAC_PI_2);
        let r = Quaternion::from_axis_angle(x(), FRAC_PI_2);
        let v = vec3(0.3, -1.5, 2.0);
        assert_vec_close((q * r).rotate(v), q.rotate(r.rotate(v)));

        let mut accumulated = q;
        accumulated *= r;
        assert_eq!(accumulated, q * r);
        accumulated /= r;
        assert_vec_close(accumulated.rotate(v), q.rotate(v));
    }

    #[test]
    fn inverse_undoes() {
        let q = Quaternion::from_axis_angle(vec3(1.0, 2.0, 3.0), 0.7);
        let v = vec3(4.0, 5.0, 6.0);
        assert_vec_close(q.inverse().rotate(q.rotate(v)), v);
        assert_vec_close((q / q).rotate(v), v);
    }

    #[test]
    fn matrix_agrees_with_rotate() {
        let q = Quaternion::from_axis_angle(vec3(-1.0, 0.5, 2.0), 1.2);
        let m = q.to_matrix();
        let p = [0.25, -3.0, 1.5, 1.0];
        let mut product = [0.0; 4];
        for (col, out) in product.iter_mut().enumerate() {
            *out = (0..4).map(|row| p[row] * m[row][col]).sum::<f64>();
        }
        assert_vec_close(
            vec3(product[0], product[1], product[2]),
            q.rotate(vec3(p[0], p[1], p[2])),
        );
        assert!((product[3] - 1.0).abs() < EPSILON);
    }

    #[test]
    fn identity_matrix() {
        assert_eq!(
            Quaternion::identity().to_matrix(),
            [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ]
        );
    }

    #[test]
    fn between_sphere_points() {
        let px = SpherePoint::new(3.0, 0.0, 0.0).unwrap();
        let py = SpherePoint::new(0.0, 0.5, 0.0).unwrap();
        assert_vec_close(Quaternion::between(px, py).rotate(x()), y());
        assert_vec_close(Quaternion::between(px, px).rotate(y()), y());

        let nx = SpherePoint::new(-1.0, 0.0, 0.0).unwrap();
        assert_vec_close(Quaternion::between(px, nx).rotate(x()), -x());
    }

    #[test]
    fn sphere_point_rejects_zero() {
        assert_eq!(SpherePoint::new(0.0, 0.0, 0.0), None);
        assert_eq!(SpherePoint::new(f64::NAN, 0.0, 1.0), None);
    }

    #[test]
    fn display() {
        assert_eq!(Quaternion::identity().to_string(), "(1; 0, 0, 0)");
    }
}
