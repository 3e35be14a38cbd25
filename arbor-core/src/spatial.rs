//! Spatial algebra utilities for 6D motion and force vectors.
//!
//! Implements the spatial vector algebra used throughout the articulated-body
//! recursion. Functions here are pure math — no tree state dependencies.

use nalgebra::{Matrix3, Matrix6, Vector3, Vector6};

/// 6D spatial vector: [angular (3), linear (3)].
///
/// Following Featherstone's convention:
/// - Motion vectors: [ω, v] (angular velocity, linear velocity)
/// - Force vectors: [τ, f] (torque, force)
pub type SpatialVec = Vector6<f64>;

/// Assemble a spatial vector from its angular and linear parts.
#[inline]
#[must_use]
pub fn spatial_vec(angular: Vector3<f64>, linear: Vector3<f64>) -> SpatialVec {
    SpatialVec::new(
        angular.x, angular.y, angular.z, linear.x, linear.y, linear.z,
    )
}

/// Angular (top 3) component of a spatial vector.
#[inline]
#[must_use]
pub fn angular_part(v: &SpatialVec) -> Vector3<f64> {
    Vector3::new(v[0], v[1], v[2])
}

/// Linear (bottom 3) component of a spatial vector.
#[inline]
#[must_use]
pub fn linear_part(v: &SpatialVec) -> Vector3<f64> {
    Vector3::new(v[3], v[4], v[5])
}

/// Antisymmetric cross-product matrix of a 3-vector.
///
/// `cross_mat(a) * b == a × b`.
#[inline]
#[must_use]
pub fn cross_mat(v: &Vector3<f64>) -> Matrix3<f64> {
    Matrix3::new(
        0.0, -v.z, v.y, //
        v.z, 0.0, -v.x, //
        -v.y, v.x, 0.0,
    )
}

/// Congruence transform `R·M·Rᵀ`.
///
/// Used for expressing inertias (and inertia-like quantities) in a rotated
/// frame.
#[inline]
#[must_use]
pub fn ortho_transform(m: &Matrix3<f64>, r: &Matrix3<f64>) -> Matrix3<f64> {
    r * m * r.transpose()
}

/// Transport a spatial motion vector across a rigid offset: `Φᵀ(r)·v`.
///
/// `r` points from the parent origin to the child origin. The angular part
/// is unchanged; the linear part picks up the lever arm ω × r.
#[inline]
#[must_use]
pub fn shift_motion(v: &SpatialVec, r: &Vector3<f64>) -> SpatialVec {
    let omega = angular_part(v);
    let lin = linear_part(v) + omega.cross(r);
    spatial_vec(omega, lin)
}

/// Transport a spatial force from child to parent: `Φ(r)·f`.
///
/// `r` points from the parent origin to the child origin. The force is
/// unchanged; the moment picks up r × f.
#[inline]
#[must_use]
pub fn shift_force(f: &SpatialVec, r: &Vector3<f64>) -> SpatialVec {
    let lin = linear_part(f);
    let moment = angular_part(f) + r.cross(&lin);
    spatial_vec(moment, lin)
}

/// Shift a 6×6 articulated inertia from a child origin to its parent origin:
/// the block-wise conjugation `Φ(r)·M·Φᵀ(r)` with `r` from parent to child.
///
/// Writing `l = skew(r)` and M's 3×3 blocks as m11..m22, the result is
///
/// ```text
/// [ m11 + l·m21 − m12·l − l·m22·l ,  m12 + l·m22 ]
/// [ m21 − m22·l                   ,  m22         ]
/// ```
#[must_use]
pub fn shift_articulated(m: &Matrix6<f64>, r: &Vector3<f64>) -> Matrix6<f64> {
    let l = cross_mat(r);
    let m11 = m.fixed_view::<3, 3>(0, 0).into_owned();
    let m12 = m.fixed_view::<3, 3>(0, 3).into_owned();
    let m21 = m.fixed_view::<3, 3>(3, 0).into_owned();
    let m22 = m.fixed_view::<3, 3>(3, 3).into_owned();

    let p11 = m11 + l * m21 - m12 * l - l * m22 * l;
    let p12 = m12 + l * m22;
    let p21 = m21 - m22 * l;

    block_mat22(&p11, &p12, &p21, &m22)
}

/// Assemble a 6×6 matrix from four 3×3 blocks.
#[inline]
#[must_use]
pub fn block_mat22(
    a11: &Matrix3<f64>,
    a12: &Matrix3<f64>,
    a21: &Matrix3<f64>,
    a22: &Matrix3<f64>,
) -> Matrix6<f64> {
    let mut m = Matrix6::zeros();
    m.fixed_view_mut::<3, 3>(0, 0).copy_from(a11);
    m.fixed_view_mut::<3, 3>(0, 3).copy_from(a12);
    m.fixed_view_mut::<3, 3>(3, 0).copy_from(a21);
    m.fixed_view_mut::<3, 3>(3, 3).copy_from(a22);
    m
}

/// Spatial inertia about the body origin, expressed in ground.
///
/// Given the ground-frame inertia about the body origin, the mass, and the
/// ground-frame COM station `s`, this is the symmetric matrix
///
/// ```text
/// [ I            ,  m·skew(s) ]
/// [ −m·skew(s)   ,  m·1       ]
/// ```
///
/// The off-diagonal block is skew-symmetric, so the opposite block is its
/// negation.
#[must_use]
pub fn spatial_inertia(mass: f64, com_g: &Vector3<f64>, inertia_g: &Matrix3<f64>) -> Matrix6<f64> {
    let off = mass * cross_mat(com_g);
    block_mat22(inertia_g, &off, &(-off), &(mass * Matrix3::identity()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cross_mat_matches_cross() {
        let a = Vector3::new(1.0, -2.0, 0.5);
        let b = Vector3::new(0.3, 0.7, -1.1);
        assert_relative_eq!(cross_mat(&a) * b, a.cross(&b), epsilon = 1e-15);
    }

    #[test]
    fn test_shift_motion_zero_offset() {
        let v = spatial_vec(Vector3::new(0.0, 0.0, 1.0), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(shift_motion(&v, &Vector3::zeros()), v);
    }

    #[test]
    fn test_shift_motion_lever_arm() {
        // Pure rotation about z at the parent origin, child at +x:
        // child picks up linear velocity +y.
        let v = spatial_vec(Vector3::z(), Vector3::zeros());
        let out = shift_motion(&v, &Vector3::x());
        assert_relative_eq!(linear_part(&out), Vector3::y(), epsilon = 1e-15);
        assert_relative_eq!(angular_part(&out), Vector3::z(), epsilon = 1e-15);
    }

    #[test]
    fn test_shift_force_moment_arm() {
        // Force +z applied at the child (offset +x from the parent): the
        // parent sees the extra moment r × f = ê_x × ê_z = −ê_y.
        let f = spatial_vec(Vector3::zeros(), Vector3::z());
        let out = shift_force(&f, &Vector3::x());
        assert_relative_eq!(linear_part(&out), Vector3::z(), epsilon = 1e-15);
        assert_relative_eq!(angular_part(&out), Vector3::new(0.0, -1.0, 0.0), epsilon = 1e-15);
    }

    #[test]
    fn test_shift_force_dual_to_shift_motion() {
        // Power invariance: fᵀ·(Φᵀ v) == (Φ f)ᵀ·v for any offset.
        let v = spatial_vec(Vector3::new(0.2, -0.4, 0.9), Vector3::new(1.0, 0.0, -2.0));
        let f = spatial_vec(Vector3::new(-1.0, 0.5, 0.3), Vector3::new(0.7, 0.7, 0.1));
        let r = Vector3::new(0.5, -0.3, 0.8);
        let lhs = f.dot(&shift_motion(&v, &r));
        let rhs = shift_force(&f, &r).dot(&v);
        assert_relative_eq!(lhs, rhs, epsilon = 1e-13);
    }

    #[test]
    fn test_shift_articulated_matches_explicit_phi() {
        // Build Φ(r) explicitly and compare against the block-wise form.
        let r = Vector3::new(0.4, -1.2, 0.6);
        let phi = block_mat22(
            &Matrix3::identity(),
            &cross_mat(&r),
            &Matrix3::zeros(),
            &Matrix3::identity(),
        );
        // Any symmetric 6×6 will do.
        let m = spatial_inertia(
            2.5,
            &Vector3::new(0.1, 0.2, -0.3),
            &Matrix3::new(2.0, 0.1, 0.0, 0.1, 3.0, -0.2, 0.0, -0.2, 1.5),
        );
        let expected = phi * m * phi.transpose();
        assert_relative_eq!(shift_articulated(&m, &r), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_spatial_inertia_symmetric() {
        let m = spatial_inertia(
            3.0,
            &Vector3::new(0.5, 0.0, -0.1),
            &Matrix3::from_diagonal(&Vector3::new(1.0, 2.0, 3.0)),
        );
        assert_relative_eq!(m, m.transpose(), epsilon = 1e-15);
        // Lower-right block is m·1.
        assert_relative_eq!(m[(3, 3)], 3.0, epsilon = 1e-15);
        assert_relative_eq!(m[(4, 4)], 3.0, epsilon = 1e-15);
    }
}
