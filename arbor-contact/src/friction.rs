//! Regularized Coulomb friction.
//!
//! Hard Coulomb friction is discontinuous at zero slip, which breaks smooth
//! integrators. The regularization blends static and dynamic friction
//! through a transition velocity `v_t`: below it the force ramps roughly
//! linearly, above it the curve decays from the static toward the dynamic
//! coefficient, plus a viscous term.
//!
//! ```text
//! f_t = −sign(v) · f_n · ( min(|v|/v_t, 1)·(μ_d + 2(μ_s−μ_d)/(1+(|v|/v_t)²)) + μ_v·|v| )
//! ```

use crate::params::ContactPair;

/// Default transition velocity (m/s).
pub const DEFAULT_TRANSITION_VELOCITY: f64 = 1e-3;

/// Regularized Coulomb friction curve for a contacting pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegularizedFriction {
    /// Effective static friction coefficient.
    pub mu_static: f64,
    /// Effective dynamic friction coefficient.
    pub mu_dynamic: f64,
    /// Effective viscous friction coefficient (s/m).
    pub mu_viscous: f64,
    /// Transition velocity separating the stiction ramp from sliding.
    pub transition_velocity: f64,
}

impl RegularizedFriction {
    /// Friction curve for a combined pair, with the default transition
    /// velocity.
    #[must_use]
    pub const fn new(pair: &ContactPair) -> Self {
        Self {
            mu_static: pair.mu_static,
            mu_dynamic: pair.mu_dynamic,
            mu_viscous: pair.mu_viscous,
            transition_velocity: DEFAULT_TRANSITION_VELOCITY,
        }
    }

    /// Override the transition velocity.
    #[must_use]
    pub const fn with_transition_velocity(mut self, vt: f64) -> Self {
        self.transition_velocity = vt;
        self
    }

    /// Signed tangential force opposing a slip speed `v` under normal
    /// force `normal` (≥ 0).
    #[must_use]
    pub fn force(&self, normal: f64, v: f64) -> f64 {
        if v == 0.0 || normal <= 0.0 {
            return 0.0;
        }
        let vrel = (v / self.transition_velocity).abs();
        let coulomb =
            vrel.min(1.0) * (self.mu_dynamic + 2.0 * (self.mu_static - self.mu_dynamic) / (1.0 + vrel * vrel));
        -v.signum() * normal * (coulomb + self.mu_viscous * v.abs())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::params::SurfaceParams;
    use approx::assert_relative_eq;

    fn curve() -> RegularizedFriction {
        let pair = ContactPair::combine(
            &SurfaceParams::new(1.0, 0.5).with_friction(1.0, 0.5, 0.1),
            &SurfaceParams::new(2.0, 1.0).with_friction(0.7, 0.2, 0.05),
        );
        RegularizedFriction::new(&pair).with_transition_velocity(1e-3)
    }

    #[test]
    fn test_opposes_motion_and_vanishes_at_rest() {
        let f = curve();
        assert_eq!(f.force(10.0, 0.0), 0.0);
        assert!(f.force(10.0, 0.5) < 0.0);
        assert!(f.force(10.0, -0.5) > 0.0);
        // Zero normal force carries no friction.
        assert_eq!(f.force(0.0, 0.5), 0.0);
    }

    #[test]
    fn test_odd_symmetry() {
        let f = curve();
        for v in [1e-5, 1e-4, 1e-3, 1e-2, 0.3, 1.0] {
            assert_relative_eq!(f.force(3.0, v), -f.force(3.0, -v), epsilon = 1e-13);
        }
    }

    #[test]
    fn test_closed_form_sweep() {
        let f = curve();
        let fn_ = 2.5;
        let vt = f.transition_velocity;
        let mut v = -1.0;
        while v <= 1.0 {
            if v != 0.0 {
                let vrel = (v / vt).abs();
                let expected = -v.signum()
                    * fn_
                    * (vrel.min(1.0)
                        * (f.mu_dynamic + 2.0 * (f.mu_static - f.mu_dynamic) / (1.0 + vrel * vrel))
                        + f.mu_viscous * v.abs());
                assert_relative_eq!(f.force(fn_, v), expected, epsilon = 1e-12);
            }
            v += 0.1;
        }
    }

    #[test]
    fn test_stiction_peak_near_transition() {
        // The Coulomb part peaks around v_t and decays toward μ_d beyond it.
        let f = curve();
        let near = f.force(1.0, f.transition_velocity).abs();
        let far = f.force(1.0, 100.0 * f.transition_velocity).abs();
        assert!(near > far * 0.9, "stiction bump should dominate near v_t");
    }
}
