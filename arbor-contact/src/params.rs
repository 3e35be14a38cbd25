//! Contact material parameters and pair combination.
//!
//! Each surface carries its own material description; when two surfaces
//! touch, the pair's effective parameters are combined from the two sides.
//! The combination rules map to measurable material properties, so the same
//! surface description composes against any counterpart.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Material parameters of one contacting surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfaceParams {
    /// Material modulus b. The surface's contact stiffness is b^(2/3),
    /// which makes stiffness combine like springs in series.
    pub stiffness: f64,
    /// Dissipation coefficient (s/m): the slope of the force-velocity
    /// correction at contact.
    pub dissipation: f64,
    /// Static friction coefficient.
    pub mu_static: f64,
    /// Dynamic friction coefficient.
    pub mu_dynamic: f64,
    /// Viscous friction coefficient (s/m).
    pub mu_viscous: f64,
}

impl SurfaceParams {
    /// A frictionless surface with the given modulus and dissipation.
    #[must_use]
    pub const fn new(stiffness: f64, dissipation: f64) -> Self {
        Self {
            stiffness,
            dissipation,
            mu_static: 0.0,
            mu_dynamic: 0.0,
            mu_viscous: 0.0,
        }
    }

    /// Set the three friction coefficients.
    #[must_use]
    pub const fn with_friction(mut self, mu_static: f64, mu_dynamic: f64, mu_viscous: f64) -> Self {
        self.mu_static = mu_static;
        self.mu_dynamic = mu_dynamic;
        self.mu_viscous = mu_viscous;
        self
    }
}

/// Effective parameters of a contacting pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContactPair {
    /// Effective contact stiffness k = k₁k₂/(k₁+k₂), kᵢ = bᵢ^(2/3).
    pub stiffness: f64,
    /// Effective dissipation c = (c₁k₂ + c₂k₁)/(k₁+k₂).
    pub dissipation: f64,
    /// Effective static friction μ = 2μ₁μ₂/(μ₁+μ₂).
    pub mu_static: f64,
    /// Effective dynamic friction, same combination.
    pub mu_dynamic: f64,
    /// Effective viscous friction, same combination.
    pub mu_viscous: f64,
    /// Fraction of the penetration depth on the first surface's side:
    /// k₂/(k₁+k₂). Locates the contact plane inside the overlap.
    pub depth_fraction: f64,
}

/// Harmonic-style friction combination: 2μ₁μ₂/(μ₁+μ₂), zero when both
/// sides are frictionless.
fn combine_mu(mu1: f64, mu2: f64) -> f64 {
    if mu1 + mu2 == 0.0 {
        0.0
    } else {
        2.0 * mu1 * mu2 / (mu1 + mu2)
    }
}

impl ContactPair {
    /// Combine two surface descriptions into the pair's effective
    /// parameters.
    #[must_use]
    pub fn combine(a: &SurfaceParams, b: &SurfaceParams) -> Self {
        let k1 = a.stiffness.powf(2.0 / 3.0);
        let k2 = b.stiffness.powf(2.0 / 3.0);
        let sum = k1 + k2;
        Self {
            stiffness: k1 * k2 / sum,
            dissipation: (a.dissipation * k2 + b.dissipation * k1) / sum,
            mu_static: combine_mu(a.mu_static, b.mu_static),
            mu_dynamic: combine_mu(a.mu_dynamic, b.mu_dynamic),
            mu_viscous: combine_mu(a.mu_viscous, b.mu_viscous),
            depth_fraction: k2 / sum,
        }
    }
}
