//! Joint taxonomy and inboard joint frames.

use nalgebra::{Matrix3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The joint families supported by the engine.
///
/// Each non-ground body is connected to its parent by exactly one joint.
/// A joint contributes `dof()` motion degrees of freedom and occupies
/// `dim()` slots in the tree-wide coordinate vector (these differ only for
/// quaternion-parameterized orientation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum JointType {
    /// The immobile ground frame. Exactly one body (index 0) has this type.
    Ground,
    /// One rotational degree of freedom about the joint z axis.
    Torsion,
    /// Two rotational degrees of freedom about the joint x and y axes
    /// (rotation about z is excluded).
    UJoint,
    /// Three rotational degrees of freedom: unrestricted orientation.
    Orientation,
    /// Three translational degrees of freedom in the parent frame.
    Cartesian,
    /// Five degrees of freedom: the free joint for a body with no inertia
    /// about one axis (two rotations + three translations).
    FreeLine,
    /// Six degrees of freedom: unrestricted rigid motion.
    Free,
}

impl JointType {
    /// Motion degrees of freedom (the number of generalized velocities).
    #[must_use]
    pub const fn dof(self) -> usize {
        match self {
            Self::Ground => 0,
            Self::Torsion => 1,
            Self::UJoint => 2,
            Self::Orientation => 3,
            Self::Cartesian => 3,
            Self::FreeLine => 5,
            Self::Free => 6,
        }
    }

    /// Coordinate slots in the tree-wide position vector.
    ///
    /// Quaternion-parameterized orientation carries one extra slot.
    #[must_use]
    pub const fn dim(self, quaternion: bool) -> usize {
        match (self, quaternion) {
            (Self::Orientation, true) => 4,
            (Self::Free, true) => 7,
            _ => self.dof(),
        }
    }

    /// Whether this joint family contains a ball (three-rotational-DOF)
    /// component and therefore supports the quaternion parameterization.
    #[must_use]
    pub const fn has_ball(self) -> bool {
        matches!(self, Self::Orientation | Self::Free)
    }
}

impl std::fmt::Display for JointType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Ground => "ground",
            Self::Torsion => "torsion",
            Self::UJoint => "ujoint",
            Self::Orientation => "orientation",
            Self::Cartesian => "cartesian",
            Self::FreeLine => "freeline",
            Self::Free => "free",
        };
        f.write_str(name)
    }
}

/// The inboard joint frame J expressed in the body frame B.
///
/// `rotation` is R_BJ; `station` is the frame origin measured from the body
/// origin. Joint families whose axes coincide with the body axes (cartesian,
/// orientation, free) ignore the rotation and use the identity frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointFrame {
    /// Orientation of the joint frame in the body frame (R_BJ).
    pub rotation: Matrix3<f64>,
    /// Origin of the joint frame, measured from the body origin in B.
    pub station: Vector3<f64>,
}

impl Default for JointFrame {
    fn default() -> Self {
        Self::identity()
    }
}

impl JointFrame {
    /// The identity frame: J coincides with B.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            rotation: Matrix3::identity(),
            station: Vector3::zeros(),
        }
    }

    /// Create a frame from an explicit rotation and station.
    #[must_use]
    pub const fn new(rotation: Matrix3<f64>, station: Vector3<f64>) -> Self {
        Self { rotation, station }
    }

    /// Build a joint frame by taking the body z axis into alignment with
    /// `z_dir`. The result is not unique; this picks the frame reached by a
    /// space-fixed rotation through the direction's spherical coordinates.
    #[must_use]
    pub fn from_z_axis(z_dir: Vector3<f64>) -> Self {
        let z = z_dir.normalize();

        // Zenith and (90° - azimuth) of the target direction.
        let theta = z.z.clamp(-1.0, 1.0).acos();
        let psi = z.x.atan2(z.y);

        let (st, ct) = theta.sin_cos();
        let (sp, cp) = psi.sin_cos();
        let rotation = Matrix3::new(
            cp,
            ct * sp,
            sp * st, //
            -sp,
            ct * cp,
            cp * st, //
            0.0,
            -st,
            ct,
        );
        Self {
            rotation,
            station: Vector3::zeros(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dof_dim_tables() {
        assert_eq!(JointType::Ground.dof(), 0);
        assert_eq!(JointType::Torsion.dof(), 1);
        assert_eq!(JointType::UJoint.dof(), 2);
        assert_eq!(JointType::FreeLine.dof(), 5);

        // Only ball-bearing joints gain a slot in quaternion mode.
        assert_eq!(JointType::Orientation.dim(false), 3);
        assert_eq!(JointType::Orientation.dim(true), 4);
        assert_eq!(JointType::Free.dim(false), 6);
        assert_eq!(JointType::Free.dim(true), 7);
        assert_eq!(JointType::Cartesian.dim(true), 3);
    }

    #[test]
    fn test_frame_from_z_axis_maps_z() {
        for dir in [
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.3, -0.4, 0.87),
        ] {
            let frame = JointFrame::from_z_axis(dir);
            let z_in_b = frame.rotation * Vector3::z();
            assert_relative_eq!(z_in_b, dir.normalize(), epsilon = 1e-12);
            // R_BJ is a rotation: orthonormal with unit determinant.
            assert_relative_eq!(frame.rotation.determinant(), 1.0, epsilon = 1e-12);
        }
    }
}
