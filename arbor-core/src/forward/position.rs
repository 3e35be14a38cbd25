//! Position kinematics: body poses and spatial mass properties from the
//! tree-wide coordinate vector.

use nalgebra::DVector;

use crate::joint::{calc_joint_kinematics_pos, set_joint_pos};
use crate::spatial::{ortho_transform, spatial_inertia};
use crate::types::{Data, Model};

/// Position pass, base to tip.
///
/// Per body: unpack the joint coordinates, run the joint-specific
/// kinematics (R_PB, OB_P, S), then the joint-independent part — re-express
/// the parent-to-child offset in ground, compose the ground-frame pose, and
/// rebuild the spatial mass properties (they depend on R_GB, so every
/// position change invalidates them).
///
/// Setting a new configuration also forgets any accumulated internal
/// forces.
pub(crate) fn fwd_position(model: &Model, data: &mut Data, pos: &DVector<f64>) {
    for body in 1..model.nbody {
        let parent = model.body_parent[body];

        data.force_internal[body].fill(0.0);
        set_joint_pos(model, data, body, pos);
        calc_joint_kinematics_pos(model, data, body);

        // Re-express the parent-to-child shift vector (OB − OP) in ground.
        // The shift operator Φ is built from this offset.
        let ob_op_g = data.r_gb[parent] * data.ob_p[body];
        data.phi_r[body] = ob_op_g;

        // Spatial configuration of this body.
        data.r_gb[body] = data.r_gb[parent] * data.r_pb[body];
        data.ob_g[body] = data.ob_g[parent] + ob_op_g;

        // Spatial mass properties: local moments into ground, then the
        // 6×6 inertia about the body origin.
        let props = &model.body_mass_props[body];
        data.inertia_g[body] = ortho_transform(&props.inertia, &data.r_gb[body]);
        data.com_station_g[body] = data.r_gb[body] * props.com;
        data.com_g[body] = data.ob_g[body] + data.com_station_g[body];
        data.mk[body] = spatial_inertia(
            props.mass,
            &data.com_station_g[body],
            &data.inertia_g[body],
        );
    }
}

/// Project position and velocity vectors onto the quaternion constraint
/// manifold for every quaternion-parameterized ball joint.
pub(crate) fn enforce_constraints(
    model: &Model,
    data: &mut Data,
    pos: &mut DVector<f64>,
    vel: &mut DVector<f64>,
) {
    for body in 1..model.nbody {
        if let Some(ball) = data.ball[body].as_mut() {
            ball.enforce_constraints(model.body_qpos_adr[body], pos, vel);
        }
    }
}
