//! Articulated-body forward dynamics: inertia, residual, and acceleration
//! passes.

use nalgebra::{DMatrix, Matrix3, Matrix6, Vector3};

use arbor_types::TreeError;

use crate::spatial::{
    block_mat22, cross_mat, shift_articulated, shift_force, shift_motion, SpatialVec,
};
use crate::types::{Data, Model};

/// Φᵀ for the body's parent-to-child offset, as an explicit 6×6.
///
/// Only `psi_t` needs the operator in matrix form; everything else uses the
/// shift helpers.
#[inline]
fn phi_transpose(r: &Vector3<f64>) -> Matrix6<f64> {
    block_mat22(
        &Matrix3::identity(),
        &Matrix3::zeros(),
        &(-cross_mat(r)),
        &Matrix3::identity(),
    )
}

/// Tip-to-base articulated-inertia pass.
///
/// Initializes every body's articulated inertia to its spatial inertia,
/// then sweeps tip to base: by the time a body is visited, all its children
/// have already folded their `Φ·(τ·P)·Φᵀ` contribution into it (children
/// carry higher indices, so reverse order suffices — no child lists).
///
/// Per body, the joint-space quantities: D = Sᵀ·P·S, D⁻¹, G = P·S·D⁻¹,
/// τ = 1 − G·Sᵀ, ψᵀ = τᵀ·Φᵀ.
pub(crate) fn calc_articulated_inertia(model: &Model, data: &mut Data) -> Result<(), TreeError> {
    for body in 0..model.nbody {
        data.p_art[body] = data.mk[body];
    }

    for body in (1..model.nbody).rev() {
        let parent = model.body_parent[body];
        let p = data.p_art[body];
        let s = data.s_map[body];
        let dof = model.dof(body);

        // D = Sᵀ·P·S occupies the leading dof×dof block; the unused
        // diagonal is padded with 1 so the full 6×6 inverse exists exactly
        // when the block inverse does, and the padding is annihilated by
        // the zero tail columns of S downstream.
        let mut d = s.transpose() * p * s;
        for k in dof..6 {
            d[(k, k)] = 1.0;
        }

        let Some(di) = d.try_inverse() else {
            let h = DMatrix::from_fn(dof, 6, |i, j| s[(j, i)]);
            tracing::warn!(
                body,
                level = model.body_level[body],
                ?h,
                "joint-space inertia is singular; bad topology or degenerate mass distribution"
            );
            return Err(TreeError::SingularConfiguration {
                body,
                level: model.body_level[body],
                h,
            });
        };

        let g = p * s * di;
        let tau = Matrix6::identity() - g * s.transpose();
        data.di[body] = di;
        data.g_coupling[body] = g;
        data.tau_proj[body] = tau;
        data.psi_t[body] = tau.transpose() * phi_transpose(&data.phi_r[body]);

        if parent != 0 {
            let folded = shift_articulated(&(tau * p), &data.phi_r[body]);
            data.p_art[parent] += folded;
        }
    }

    Ok(())
}

/// Tip-to-base residual pass.
///
/// `forces` supplies one applied spatial force per body (ground entry
/// ignored), expressed in ground and acting at the body origin. Each body's
/// residual starts at `z = P·a + b − f`; children fold `Φ·(z + G·ε)` into
/// their parent as the sweep passes them. Then ε = τ_int − Sᵀ·z, ν = D⁻¹·ε.
pub(crate) fn calc_bias_force(model: &Model, data: &mut Data, forces: &[SpatialVec]) {
    data.z_resid[0] = SpatialVec::zeros();
    for body in 1..model.nbody {
        data.z_resid[body] = data.p_art[body] * data.coriolis_bias[body] + data.gyro_bias[body]
            - forces[body];
    }

    for body in (1..model.nbody).rev() {
        let parent = model.body_parent[body];
        let z = data.z_resid[body];

        let eps = data.force_internal[body] - data.s_map[body].transpose() * z;
        data.nu[body] = data.di[body] * eps;
        data.g_eps[body] = data.g_coupling[body] * eps;
        data.eps[body] = eps;

        if parent != 0 {
            let folded = shift_force(&(z + data.g_eps[body]), &data.phi_r[body]);
            data.z_resid[parent] += folded;
        }
    }
}

/// Base-to-tip acceleration pass, consuming ν, G, and the Coriolis bias
/// computed by the earlier passes. Ground's spatial acceleration is zero.
///
/// Quaternion ball joints additionally turn (ω, ω̇) into q̈.
pub(crate) fn calc_accel(model: &Model, data: &mut Data) {
    data.sacc[0] = SpatialVec::zeros();

    for body in 1..model.nbody {
        let parent = model.body_parent[body];

        let alpha_shift = shift_motion(&data.sacc[parent], &data.phi_r[body]);
        data.ddtheta[body] = data.nu[body] - data.g_coupling[body].transpose() * alpha_shift;
        data.sacc[body] =
            alpha_shift + data.s_map[body] * data.ddtheta[body] + data.coriolis_bias[body];

        if let Some(ball) = data.ball[body].as_mut() {
            let omega = Vector3::new(
                data.dtheta[body][0],
                data.dtheta[body][1],
                data.dtheta[body][2],
            );
            let domega = Vector3::new(
                data.ddtheta[body][0],
                data.ddtheta[body][1],
                data.ddtheta[body][2],
            );
            ball.calc_accel(omega, domega);
        }
    }
}
