//! Velocity kinematics: spatial velocities and velocity-dependent bias
//! terms from the tree-wide velocity vector.

use nalgebra::{DVector, Vector3};

use crate::joint::{calc_joint_kinematics_vel, set_joint_vel};
use crate::spatial::{angular_part, linear_part, shift_motion, spatial_vec, SpatialVec};
use crate::types::{Data, Model};

/// Velocity pass, base to tip. Position kinematics must be current.
///
/// Per body: unpack θ̇ (quaternion joints convert q̇ to angular velocity),
/// form V_PB_G = S·θ̇, compose the spatial velocity across the joint, and
/// compute the two velocity-dependent bias terms the articulated recursion
/// consumes:
///
/// - gyroscopic force `b = [ω × (I·ω); m·ω × (ω × s)]`
/// - Coriolis acceleration `a`, whose angular part is ω_P × ω_PB and whose
///   linear part picks up both the joint's relative linear velocity and
///   the lever-arm rate ω_P × (v_B − v_P).
pub(crate) fn fwd_velocity(model: &Model, data: &mut Data, vel: &DVector<f64>) {
    for body in 1..model.nbody {
        let parent = model.body_parent[body];

        set_joint_vel(model, data, body, vel);
        calc_joint_kinematics_vel(model, data, body);

        data.svel[body] =
            shift_motion(&data.svel[parent], &data.phi_r[body]) + data.v_pb_g[body];

        calc_bias_terms(model, data, body);
    }
}

/// Gyroscopic and Coriolis bias terms for one body (velocity state must be
/// current for the body and its parent).
fn calc_bias_terms(model: &Model, data: &mut Data, body: usize) {
    let parent = model.body_parent[body];
    let props = &model.body_mass_props[body];

    let omega = angular_part(&data.svel[body]);
    let g_moment = omega.cross(&(data.inertia_g[body] * omega));
    let g_force = props.mass * omega.cross(&omega.cross(&data.com_station_g[body]));
    data.gyro_bias[body] = spatial_vec(g_moment, g_force);

    let vel_b = linear_part(&data.svel[body]);
    let p_omega = angular_part(&data.svel[parent]);
    let p_vel = linear_part(&data.svel[parent]);

    let a_ang = p_omega.cross(&angular_part(&data.v_pb_g[body]));
    let a_lin = p_omega.cross(&linear_part(&data.v_pb_g[body])) + p_omega.cross(&(vel_b - p_vel));
    data.coriolis_bias[body] = spatial_vec(a_ang, a_lin);
}

/// Impose per-body spatial velocities, base to tip: recover
/// θ̇ = Sᵀ·(V − Φᵀ·V_parent), refresh q̇ for quaternion joints, and leave
/// the velocity-level state consistent with the imposed field. Ground's
/// entry is ignored; its velocity stays pinned at zero.
pub(crate) fn set_vel_from_spatial(model: &Model, data: &mut Data, svel: &[SpatialVec]) {
    for body in 1..model.nbody {
        let parent = model.body_parent[body];

        let rel = svel[body] - shift_motion(&data.svel[parent], &data.phi_r[body]);
        data.dtheta[body] = data.s_map[body].transpose() * rel;

        if let Some(ball) = data.ball[body].as_mut() {
            // The leading generalized velocities of a ball-bearing joint
            // are the angular velocity of B in P.
            let omega = Vector3::new(
                data.dtheta[body][0],
                data.dtheta[body][1],
                data.dtheta[body][2],
            );
            ball.set_derivs(omega);
        }

        calc_joint_kinematics_vel(model, data, body);
        data.svel[body] =
            shift_motion(&data.svel[parent], &data.phi_r[body]) + data.v_pb_g[body];
        calc_bias_terms(model, data, body);
    }
}
