//! Hunt-Crossley compliant normal contact.
//!
//! A nonlinear viscoelastic spring: the static force grows as depth^(3/2)
//! (Hertzian contact) and the dissipation correction scales with both the
//! static force and the approach speed, so the contact force vanishes
//! smoothly at zero depth and never pulls.
//!
//! ```text
//! f  = (4/3)·k·d·√(r·k·d)
//! f' = max(0, f·(1 + 1.5·c·v))
//! ```
//!
//! where `k` and `c` are the pair's effective stiffness and dissipation,
//! `d` the penetration depth, `r` the undeformed contact radius, and `v`
//! the approach speed (positive when closing).

use crate::params::ContactPair;

/// Hunt-Crossley force law for a sphere-on-surface pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HuntCrossleyForce {
    pair: ContactPair,
}

impl HuntCrossleyForce {
    /// Create the force law for a combined pair.
    #[must_use]
    pub const fn new(pair: ContactPair) -> Self {
        Self { pair }
    }

    /// The combined pair parameters.
    #[must_use]
    pub const fn pair(&self) -> &ContactPair {
        &self.pair
    }

    /// Static (zero-velocity) normal force at penetration depth `d` for a
    /// sphere of radius `r`. Zero for non-positive depth.
    #[must_use]
    pub fn static_force(&self, radius: f64, depth: f64) -> f64 {
        if depth <= 0.0 {
            return 0.0;
        }
        let k = self.pair.stiffness;
        (4.0 / 3.0) * k * depth * (radius * k * depth).sqrt()
    }

    /// Normal force including dissipation. `approach_speed` is positive
    /// when the bodies are closing; the force is clamped at zero so the
    /// contact can only push.
    #[must_use]
    pub fn normal_force(&self, radius: f64, depth: f64, approach_speed: f64) -> f64 {
        let f = self.static_force(radius, depth);
        (f * (1.0 + 1.5 * self.pair.dissipation * approach_speed)).max(0.0)
    }
}
