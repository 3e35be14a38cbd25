//! Inverse-inertia sensitivity recursion.

use nalgebra::Matrix6;

use crate::types::{Data, Model};

/// Base-to-tip sensitivity pass: `Y = S·D⁻¹·Sᵀ + ψᵀ·Y_parent·ψ`, with
/// ground's Y = 0.
///
/// Y relates a spatial test force at a body to the spatial acceleration it
/// produces there, with every joint free — the quantity constraint
/// projection needs. Requires the articulated-inertia pass.
pub(crate) fn calc_inverse_inertia(model: &Model, data: &mut Data) {
    data.y_sens[0] = Matrix6::zeros();

    for body in 1..model.nbody {
        let parent = model.body_parent[body];
        let s = data.s_map[body];
        let psi_t = data.psi_t[body];

        data.y_sens[body] =
            s * data.di[body] * s.transpose() + psi_t * data.y_sens[parent] * psi_t.transpose();
    }
}
