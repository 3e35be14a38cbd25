//! Body-frame mass properties.

use nalgebra::{Matrix3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::TreeError;

/// Mass properties of a rigid body, expressed in the body frame.
///
/// The inertia tensor is taken **about the body origin** (not the center of
/// mass), which is the reference point every ground-frame quantity in the
/// engine uses. Constructors that start from central inertia apply the
/// parallel-axis shift.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MassProperties {
    /// Body mass in kg.
    pub mass: f64,
    /// Center-of-mass station in the body frame.
    pub com: Vector3<f64>,
    /// Inertia tensor about the body origin, in the body frame.
    pub inertia: Matrix3<f64>,
}

impl MassProperties {
    /// Create mass properties from mass, COM station, and inertia about the
    /// body origin.
    #[must_use]
    pub const fn new(mass: f64, com: Vector3<f64>, inertia: Matrix3<f64>) -> Self {
        Self { mass, com, inertia }
    }

    /// A point mass at a station in the body frame.
    ///
    /// The inertia about the origin is m·(|r|²·1 − r⊗r).
    #[must_use]
    pub fn point_mass(mass: f64, station: Vector3<f64>) -> Self {
        let r2 = station.norm_squared();
        let inertia = mass * (r2 * Matrix3::identity() - station * station.transpose());
        Self {
            mass,
            com: station,
            inertia,
        }
    }

    /// A uniform solid sphere centered on the body origin.
    #[must_use]
    pub fn solid_sphere(mass: f64, radius: f64) -> Self {
        let i = 0.4 * mass * radius * radius;
        Self {
            mass,
            com: Vector3::zeros(),
            inertia: Matrix3::from_diagonal_element(i),
        }
    }

    /// Mass properties with a central (about-COM) inertia tensor, shifted to
    /// the body origin by the parallel-axis theorem.
    #[must_use]
    pub fn from_central_inertia(mass: f64, com: Vector3<f64>, central: Matrix3<f64>) -> Self {
        let r2 = com.norm_squared();
        let shift = mass * (r2 * Matrix3::identity() - com * com.transpose());
        Self {
            mass,
            com,
            inertia: central + shift,
        }
    }

    /// The zero mass properties used by the ground body.
    #[must_use]
    pub fn ground() -> Self {
        Self {
            mass: 0.0,
            com: Vector3::zeros(),
            inertia: Matrix3::zeros(),
        }
    }

    /// Validate mass positivity and inertia symmetry.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidMassProperties`] if the mass is not
    /// positive and finite, or the inertia tensor is visibly asymmetric.
    pub fn validate(&self) -> Result<(), TreeError> {
        if !(self.mass > 0.0 && self.mass.is_finite()) {
            return Err(TreeError::invalid_mass(format!(
                "mass must be positive and finite, got {}",
                self.mass
            )));
        }
        let asym = (self.inertia - self.inertia.transpose()).norm();
        if asym > 1e-9 * self.inertia.norm().max(1.0) {
            return Err(TreeError::invalid_mass(
                "inertia tensor is not symmetric".to_string(),
            ));
        }
        Ok(())
    }
}
