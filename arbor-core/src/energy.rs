//! Energy queries.

use crate::types::{Data, Model};

/// Total kinetic energy of the tree: Σ ½·s_velᵀ·M_k·s_vel.
///
/// Requires position and velocity kinematics to be current.
pub(crate) fn kinetic_energy(model: &Model, data: &Data) -> f64 {
    let mut energy = 0.0;
    for body in 1..model.nbody {
        let v = &data.svel[body];
        energy += 0.5 * v.dot(&(data.mk[body] * v));
    }
    energy
}
