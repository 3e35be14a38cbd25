//! Dynamic per-body state and the public recursion surface.
//!
//! [`Data`] owns everything the recursive passes read and write: the
//! position-, velocity-, and acceleration-level kinematic state of every
//! body, plus the articulated-body scratch refreshed inside a force solve.
//! All storage is allocated once by [`Model::make_data`]; the passes mutate
//! it in place.
//!
//! DOF-varying quantities (the motion map S, the joint-space inverse
//! inertia, the coupling G, the per-joint vectors) are held in fixed
//! 6-capacity matrices with only the leading `dof` rows/columns populated —
//! the unused tail stays zero and drops out of every product.

use nalgebra::{DVector, Matrix3, Matrix6, Vector3, Vector6};

use arbor_types::TreeError;

use crate::dynamics::{
    calc_accel, calc_articulated_inertia, calc_bias_force, calc_internal_force,
    calc_inverse_inertia,
};
use crate::energy::kinetic_energy;
use crate::forward::{enforce_constraints, fwd_position, fwd_velocity, set_vel_from_spatial};
use crate::joint::ball::BallOrientation;
use crate::joint::{pack_accel, pack_internal_force, pack_pos, pack_vel};
use crate::spatial::SpatialVec;
use crate::types::Model;

/// Dynamic state of a rigid-body tree (sized by, and paired with, a
/// [`Model`]).
///
/// Arrays are indexed by body id; entry 0 belongs to the ground body and
/// stays at its zero/identity values.
#[derive(Debug, Clone)]
pub struct Data {
    // ==================== Position kinematics ====================
    /// Orientation of the body in its parent (R_PB).
    pub r_pb: Vec<Matrix3<f64>>,
    /// Origin of the body in its parent frame (OB_P).
    pub ob_p: Vec<Vector3<f64>>,
    /// Orientation of the body in ground (R_GB).
    pub r_gb: Vec<Matrix3<f64>>,
    /// Origin of the body in ground (OB_G).
    pub ob_g: Vec<Vector3<f64>>,
    /// Ground-frame offset from the parent origin to this body's origin —
    /// the vector the shift operator Φ is built from.
    pub phi_r: Vec<Vector3<f64>>,
    /// Inertia about the body origin, expressed in ground.
    pub inertia_g: Vec<Matrix3<f64>>,
    /// COM station (from the body origin) in ground.
    pub com_station_g: Vec<Vector3<f64>>,
    /// COM position in ground.
    pub com_g: Vec<Vector3<f64>>,
    /// Spatial inertia M_k about the body origin in ground.
    pub mk: Vec<Matrix6<f64>>,

    // ==================== Velocity kinematics ====================
    /// Velocity of B in P, expressed in ground.
    pub v_pb_g: Vec<SpatialVec>,
    /// Spatial velocity of the body in ground.
    pub svel: Vec<SpatialVec>,
    /// Gyroscopic bias force b.
    pub gyro_bias: Vec<SpatialVec>,
    /// Coriolis/centripetal bias acceleration a.
    pub coriolis_bias: Vec<SpatialVec>,

    // ==================== Acceleration ====================
    /// Spatial acceleration of the body in ground.
    pub sacc: Vec<SpatialVec>,

    // ==================== Joint state ====================
    /// Generalized coordinates (leading `dof` entries; ball-bearing joints
    /// keep quaternions in their [`BallOrientation`] instead).
    pub theta: Vec<Vector6<f64>>,
    /// Generalized velocities.
    pub dtheta: Vec<Vector6<f64>>,
    /// Generalized accelerations.
    pub ddtheta: Vec<Vector6<f64>>,
    /// Internal (generalized) joint force, cleared on every position set and
    /// accumulated by the inverse pass.
    pub force_internal: Vec<Vector6<f64>>,
    /// Orientation component of ball-bearing joints.
    pub ball: Vec<Option<BallOrientation>>,

    // ==================== Articulated-body scratch ====================
    /// Motion map S = Hᵀ (6 × dof, leading columns): V_PB_G = S·θ̇.
    pub s_map: Vec<Matrix6<f64>>,
    /// Articulated inertia P of the subtree at this body.
    pub p_art: Vec<Matrix6<f64>>,
    /// Inverse joint-space inertia D⁻¹ (dof × dof block).
    pub di: Vec<Matrix6<f64>>,
    /// Coupling G = P·S·D⁻¹ (6 × dof columns).
    pub g_coupling: Vec<Matrix6<f64>>,
    /// Projection τ = 1 − G·Sᵀ.
    pub tau_proj: Vec<Matrix6<f64>>,
    /// ψᵀ = τᵀ·Φᵀ.
    pub psi_t: Vec<Matrix6<f64>>,
    /// Force residual z.
    pub z_resid: Vec<SpatialVec>,
    /// G·ε.
    pub g_eps: Vec<SpatialVec>,
    /// Joint-space residual ε = τ_int − Sᵀ·z.
    pub eps: Vec<Vector6<f64>>,
    /// Internal acceleration ν = D⁻¹·ε.
    pub nu: Vec<Vector6<f64>>,
    /// Inverse-inertia sensitivity Y.
    pub y_sens: Vec<Matrix6<f64>>,
}

impl Data {
    /// Allocate zeroed state for `model`. Ball-bearing joints get their
    /// orientation component in the representation the model selected.
    #[must_use]
    pub(crate) fn new(model: &Model) -> Self {
        let n = model.nbody;
        let ball = (0..n)
            .map(|body| {
                model.body_joint[body]
                    .has_ball()
                    .then(|| BallOrientation::new(model.body_quaternion[body]))
            })
            .collect();
        Self {
            r_pb: vec![Matrix3::identity(); n],
            ob_p: vec![Vector3::zeros(); n],
            r_gb: vec![Matrix3::identity(); n],
            ob_g: vec![Vector3::zeros(); n],
            phi_r: vec![Vector3::zeros(); n],
            inertia_g: vec![Matrix3::zeros(); n],
            com_station_g: vec![Vector3::zeros(); n],
            com_g: vec![Vector3::zeros(); n],
            mk: vec![Matrix6::zeros(); n],
            v_pb_g: vec![SpatialVec::zeros(); n],
            svel: vec![SpatialVec::zeros(); n],
            gyro_bias: vec![SpatialVec::zeros(); n],
            coriolis_bias: vec![SpatialVec::zeros(); n],
            sacc: vec![SpatialVec::zeros(); n],
            theta: vec![Vector6::zeros(); n],
            dtheta: vec![Vector6::zeros(); n],
            ddtheta: vec![Vector6::zeros(); n],
            force_internal: vec![Vector6::zeros(); n],
            ball,
            s_map: vec![Matrix6::zeros(); n],
            p_art: vec![Matrix6::zeros(); n],
            di: vec![Matrix6::zeros(); n],
            g_coupling: vec![Matrix6::zeros(); n],
            tau_proj: vec![Matrix6::zeros(); n],
            psi_t: vec![Matrix6::zeros(); n],
            z_resid: vec![SpatialVec::zeros(); n],
            g_eps: vec![SpatialVec::zeros(); n],
            eps: vec![Vector6::zeros(); n],
            nu: vec![Vector6::zeros(); n],
            y_sens: vec![Matrix6::zeros(); n],
        }
    }

    // ==================== State transfer ====================

    /// Set a new configuration and run position kinematics, base to tip.
    ///
    /// `pos` is the tree-wide coordinate vector (length `model.nq`).
    pub fn set_pos(&mut self, model: &Model, pos: &DVector<f64>) {
        fwd_position(model, self, pos);
    }

    /// Set new generalized velocities for the current configuration and run
    /// velocity kinematics, base to tip. Position kinematics must be
    /// current.
    ///
    /// `vel` shares the coordinate layout (length `model.nq`): quaternion
    /// joints carry q̇ in their four slots, everything else carries θ̇.
    pub fn set_vel(&mut self, model: &Model, vel: &DVector<f64>) {
        fwd_velocity(model, self, vel);
    }

    /// Impose per-body spatial velocities, recovering the generalized
    /// velocities θ̇ = Sᵀ·(V − Φᵀ·V_parent) base to tip (quaternion joints
    /// also refresh q̇ from the implied angular velocity).
    ///
    /// # Errors
    ///
    /// [`TreeError::BodyCountMismatch`] if `svel` is not one entry per body.
    pub fn set_vel_from_spatial(
        &mut self,
        model: &Model,
        svel: &[SpatialVec],
    ) -> Result<(), TreeError> {
        check_body_slice(model, svel)?;
        set_vel_from_spatial(model, self, svel);
        Ok(())
    }

    /// Pack the current generalized coordinates into `pos`.
    pub fn get_pos(&self, model: &Model, pos: &mut DVector<f64>) {
        pack_pos(model, self, pos);
    }

    /// Pack the current generalized velocities into `vel`.
    pub fn get_vel(&self, model: &Model, vel: &mut DVector<f64>) {
        pack_vel(model, self, vel);
    }

    /// Pack the current generalized accelerations into `acc`.
    pub fn get_accel(&self, model: &Model, acc: &mut DVector<f64>) {
        pack_accel(model, self, acc);
    }

    /// Pack the accumulated internal generalized forces into `tau`.
    ///
    /// The layout follows the coordinate offsets; ball-bearing joints
    /// report through their orientation component (Euler inverse Jacobian,
    /// or angular-velocity-conjugate pass-through for quaternions).
    pub fn get_internal_force(&self, model: &Model, tau: &mut DVector<f64>) {
        pack_internal_force(model, self, tau);
    }

    /// Set the internal generalized force driving the residual pass.
    ///
    /// `tau` is laid out by motion DOFs (length `model.nv`); each entry is
    /// energetically conjugate to the matching generalized velocity — for
    /// ball-bearing joints, a body torque conjugate to the angular velocity
    /// of B in P. Overwrites whatever the inverse pass accumulated.
    pub fn set_internal_force(&mut self, model: &Model, tau: &DVector<f64>) {
        for body in 1..model.nbody {
            let adr = model.body_dof_adr[body];
            for i in 0..model.dof(body) {
                self.force_internal[body][i] = tau[adr + i];
            }
        }
    }

    // ==================== Articulated-body recursion ====================

    /// Tip-to-base articulated-inertia pass: P, D⁻¹, G, τ, ψᵀ per body.
    ///
    /// # Errors
    ///
    /// [`TreeError::SingularConfiguration`] if some body's joint-space
    /// inertia cannot be inverted.
    pub fn calc_articulated_inertia(&mut self, model: &Model) -> Result<(), TreeError> {
        calc_articulated_inertia(model, self)
    }

    /// Tip-to-base residual pass: z, ε, ν, Gε per body, given one spatial
    /// force per body (expressed in ground, acting at the body origin).
    ///
    /// # Errors
    ///
    /// [`TreeError::BodyCountMismatch`] if `forces` is not one entry per
    /// body.
    pub fn calc_bias_force(
        &mut self,
        model: &Model,
        forces: &[SpatialVec],
    ) -> Result<(), TreeError> {
        check_body_slice(model, forces)?;
        calc_bias_force(model, self, forces);
        Ok(())
    }

    /// Base-to-tip acceleration pass, consuming the articulated quantities
    /// of the two previous passes.
    pub fn calc_accel(&mut self, model: &Model) {
        calc_accel(model, self);
    }

    /// The three articulated passes in order. Position and velocity
    /// kinematics must be current.
    ///
    /// # Errors
    ///
    /// Propagates [`TreeError::SingularConfiguration`] and
    /// [`TreeError::BodyCountMismatch`].
    pub fn forward_dynamics(
        &mut self,
        model: &Model,
        forces: &[SpatialVec],
    ) -> Result<(), TreeError> {
        self.calc_articulated_inertia(model)?;
        self.calc_bias_force(model, forces)?;
        self.calc_accel(model);
        Ok(())
    }

    /// Base-to-tip inverse-inertia sensitivity pass:
    /// Y = S·D⁻¹·Sᵀ + ψᵀ·Y_parent·ψ. Requires the articulated-inertia pass.
    pub fn calc_inverse_inertia(&mut self, model: &Model) {
        calc_inverse_inertia(model, self);
    }

    /// Standalone tip-to-base projection of a Cartesian spatial force field
    /// into generalized internal forces: z = −f + Σ Φ·z_child,
    /// τ_int += Sᵀ·z.
    ///
    /// # Errors
    ///
    /// [`TreeError::BodyCountMismatch`] if `forces` is not one entry per
    /// body.
    pub fn calc_internal_force(
        &mut self,
        model: &Model,
        forces: &[SpatialVec],
    ) -> Result<(), TreeError> {
        check_body_slice(model, forces)?;
        calc_internal_force(model, self, forces);
        Ok(())
    }

    /// Project the caller's position and velocity vectors back onto the
    /// quaternion constraint manifold (|q| = 1, q·q̇ = 0) for every
    /// quaternion-parameterized joint.
    pub fn enforce_constraints(
        &mut self,
        model: &Model,
        pos: &mut DVector<f64>,
        vel: &mut DVector<f64>,
    ) {
        enforce_constraints(model, self, pos, vel);
    }

    // ==================== Queries ====================

    /// Total kinetic energy Σ ½·s_velᵀ·M_k·s_vel.
    #[must_use]
    pub fn kinetic_energy(&self, model: &Model) -> f64 {
        kinetic_energy(model, self)
    }
}

/// Validate a caller-supplied per-body slice.
fn check_body_slice<T>(model: &Model, slice: &[T]) -> Result<(), TreeError> {
    if slice.len() == model.nbody {
        Ok(())
    } else {
        Err(TreeError::BodyCountMismatch {
            expected: model.nbody,
            actual: slice.len(),
        })
    }
}
