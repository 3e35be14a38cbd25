//! Cartesian-force to generalized-force projection.

use crate::spatial::{shift_force, SpatialVec};
use crate::types::{Data, Model};

/// Standalone tip-to-base projection of an applied spatial force field into
/// internal generalized forces.
///
/// `z = −f + Σ_children Φ·z_child`, then `τ_int += Sᵀ·z`. The accumulation
/// into `τ_int` means repeated calls sum their contributions; a position
/// set clears the accumulator.
pub(crate) fn calc_internal_force(model: &Model, data: &mut Data, forces: &[SpatialVec]) {
    for body in 0..model.nbody {
        data.z_resid[body] = -forces[body];
    }

    for body in (1..model.nbody).rev() {
        let parent = model.body_parent[body];
        let z = data.z_resid[body];

        data.force_internal[body] += data.s_map[body].transpose() * z;

        if parent != 0 {
            data.z_resid[parent] += shift_force(&z, &data.phi_r[body]);
        }
    }
}
