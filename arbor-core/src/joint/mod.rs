//! Per-family joint kinematics and state packing.
//!
//! Every joint family implements two kinematic primitives, dispatched on
//! [`JointType`] inside the tree loops:
//!
//! - position: produce R_PB, OB_P, and the motion map S (= Hᵀ, 6 × dof)
//!   whose columns span the joint's freedom in ground coordinates;
//! - velocity: produce V_PB_G = S·θ̇.
//!
//! The packing functions move each body's block between its own state and
//! the caller-owned tree-wide vectors at the body's state offset.
//!
//! Angle units are explicit per family: torsion and U-joint coordinates are
//! radians; ball-joint Euler coordinates are degrees (see
//! [`ball::EULER_DEG_TO_RAD`]).

pub mod ball;

use nalgebra::{DVector, Matrix3, Vector3};

use arbor_types::JointType;

use crate::spatial::ortho_transform;
use crate::types::{Data, Model};

/// Rotation about the joint z axis.
#[inline]
fn rot_z(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        c, -s, 0.0, //
        s, c, 0.0, //
        0.0, 0.0, 1.0,
    )
}

/// Two-angle rotation Ry(ψ)·Rx(φ) used by the U-joint families: rotation
/// about the joint x and y axes, none about z.
#[inline]
fn rot_yx(phi: f64, psi: f64) -> Matrix3<f64> {
    let (s_phi, c_phi) = phi.sin_cos();
    let (s_psi, c_psi) = psi.sin_cos();
    Matrix3::new(
        c_psi,
        s_psi * s_phi,
        s_psi * c_phi,
        0.0,
        c_phi,
        -s_phi,
        -s_psi,
        c_psi * s_phi,
        c_psi * c_phi,
    )
}

/// Write `[axis; 0]` into column `col` of the motion map.
#[inline]
fn set_angular_col(data: &mut Data, body: usize, col: usize, axis: &Vector3<f64>) {
    for i in 0..3 {
        data.s_map[body][(i, col)] = axis[i];
        data.s_map[body][(i + 3, col)] = 0.0;
    }
}

/// Write `[0; axis]` into column `col` of the motion map.
#[inline]
fn set_linear_col(data: &mut Data, body: usize, col: usize, axis: &Vector3<f64>) {
    for i in 0..3 {
        data.s_map[body][(i, col)] = 0.0;
        data.s_map[body][(i + 3, col)] = axis[i];
    }
}

/// Joint-specific position kinematics: R_PB, OB_P, and S.
///
/// Assumes the parent's position kinematics is current and the joint
/// coordinates have been unpacked.
pub(crate) fn calc_joint_kinematics_pos(model: &Model, data: &mut Data, body: usize) {
    let parent = model.body_parent[body];
    let r_gp = data.r_gb[parent];
    let r_bj = model.body_joint_rot[body];
    let ref_station = model.body_ref_station[body];
    let theta = data.theta[body];

    match model.body_joint[body] {
        JointType::Ground => {}

        JointType::Torsion => {
            // The torsion joint cannot move the body origin in its parent.
            data.ob_p[body] = ref_station;
            // R_PB = R_PJi · R_JiJ · R_JB with R_PJi = R_BJ.
            data.r_pb[body] = ortho_transform(&rot_z(theta[0]), &r_bj);
            // The joint z axis is shared by B and P; its ground-frame
            // direction is the single angular freedom.
            let z = r_gp * (r_bj * Vector3::z());
            set_angular_col(data, body, 0, &z);
        }

        JointType::UJoint => {
            data.ob_p[body] = ref_station;
            data.r_pb[body] = ortho_transform(&rot_yx(theta[0], theta[1]), &r_bj);
            let r_gb = r_gp * data.r_pb[body];
            let x = r_gb * (r_bj * Vector3::x());
            let y = r_gb * (r_bj * Vector3::y());
            set_angular_col(data, body, 0, &x);
            set_angular_col(data, body, 1, &y);
        }

        JointType::Orientation => {
            data.ob_p[body] = ref_station;
            if let Some(b) = data.ball[body].as_mut() {
                data.r_pb[body] = b.rotation(&theta);
            }
            // Angular freedom spans the parent frame: S = [R_GP; 0].
            for col in 0..3 {
                let axis = r_gp.column(col).into_owned();
                set_angular_col(data, body, col, &axis);
            }
        }

        JointType::Cartesian => {
            data.ob_p[body] = ref_station + Vector3::new(theta[0], theta[1], theta[2]);
            // A Cartesian joint cannot change orientation.
            data.r_pb[body] = Matrix3::identity();
            for col in 0..3 {
                let axis = r_gp.column(col).into_owned();
                set_linear_col(data, body, col, &axis);
            }
        }

        JointType::FreeLine => {
            data.ob_p[body] = ref_station + Vector3::new(theta[2], theta[3], theta[4]);
            data.r_pb[body] = ortho_transform(&rot_yx(theta[0], theta[1]), &r_bj);
            let r_gb = r_gp * data.r_pb[body];
            let x = r_gb * (r_bj * Vector3::x());
            let y = r_gb * (r_bj * Vector3::y());
            set_angular_col(data, body, 0, &x);
            set_angular_col(data, body, 1, &y);
            for col in 0..3 {
                let axis = r_gp.column(col).into_owned();
                set_linear_col(data, body, col + 2, &axis);
            }
        }

        JointType::Free => {
            data.ob_p[body] = ref_station + Vector3::new(theta[3], theta[4], theta[5]);
            if let Some(b) = data.ball[body].as_mut() {
                data.r_pb[body] = b.rotation(&theta);
            }
            for col in 0..3 {
                let axis = r_gp.column(col).into_owned();
                set_angular_col(data, body, col, &axis);
                set_linear_col(data, body, col + 3, &axis);
            }
        }
    }
}

/// Joint-specific velocity kinematics: V_PB_G = S·θ̇.
///
/// Uniform across families — the unused columns of S and entries of θ̇ are
/// zero.
#[inline]
pub(crate) fn calc_joint_kinematics_vel(_model: &Model, data: &mut Data, body: usize) {
    data.v_pb_g[body] = data.s_map[body] * data.dtheta[body];
}

// ==================== Unpacking (tree-wide vector → node) ====================

/// Unpack one body's position block from the tree-wide coordinate vector.
pub(crate) fn set_joint_pos(model: &Model, data: &mut Data, body: usize, posv: &DVector<f64>) {
    let adr = model.body_qpos_adr[body];
    match model.body_joint[body] {
        JointType::Ground => {}
        JointType::Orientation => {
            if let Some(b) = data.ball[body].as_mut() {
                b.set_pos(adr, posv, &mut data.theta[body]);
            }
        }
        JointType::Free => {
            if let Some(b) = data.ball[body].as_mut() {
                b.set_pos(adr, posv, &mut data.theta[body]);
                let tr_adr = adr + b.dim();
                for i in 0..3 {
                    data.theta[body][3 + i] = posv[tr_adr + i];
                }
            }
        }
        joint => {
            for i in 0..joint.dof() {
                data.theta[body][i] = posv[adr + i];
            }
        }
    }
}

/// Unpack one body's velocity block from the tree-wide velocity vector.
pub(crate) fn set_joint_vel(model: &Model, data: &mut Data, body: usize, velv: &DVector<f64>) {
    let adr = model.body_qpos_adr[body];
    match model.body_joint[body] {
        JointType::Ground => {}
        JointType::Orientation => {
            if let Some(b) = data.ball[body].as_mut() {
                b.set_vel(adr, velv, &mut data.dtheta[body]);
            }
        }
        JointType::Free => {
            if let Some(b) = data.ball[body].as_mut() {
                b.set_vel(adr, velv, &mut data.dtheta[body]);
                let tr_adr = adr + b.dim();
                for i in 0..3 {
                    data.dtheta[body][3 + i] = velv[tr_adr + i];
                }
            }
        }
        joint => {
            for i in 0..joint.dof() {
                data.dtheta[body][i] = velv[adr + i];
            }
        }
    }
}

// ==================== Packing (node → tree-wide vector) ====================

/// Pack all generalized coordinates into `posv`.
pub(crate) fn pack_pos(model: &Model, data: &Data, posv: &mut DVector<f64>) {
    for body in 1..model.nbody {
        let adr = model.body_qpos_adr[body];
        match model.body_joint[body] {
            JointType::Ground => {}
            JointType::Orientation => {
                if let Some(b) = data.ball[body].as_ref() {
                    b.get_pos(&data.theta[body], adr, posv);
                }
            }
            JointType::Free => {
                if let Some(b) = data.ball[body].as_ref() {
                    b.get_pos(&data.theta[body], adr, posv);
                    let tr_adr = adr + b.dim();
                    for i in 0..3 {
                        posv[tr_adr + i] = data.theta[body][3 + i];
                    }
                }
            }
            joint => {
                for i in 0..joint.dof() {
                    posv[adr + i] = data.theta[body][i];
                }
            }
        }
    }
}

/// Pack all generalized velocities into `velv`.
pub(crate) fn pack_vel(model: &Model, data: &Data, velv: &mut DVector<f64>) {
    for body in 1..model.nbody {
        let adr = model.body_qpos_adr[body];
        match model.body_joint[body] {
            JointType::Ground => {}
            JointType::Orientation => {
                if let Some(b) = data.ball[body].as_ref() {
                    b.get_vel(&data.dtheta[body], adr, velv);
                }
            }
            JointType::Free => {
                if let Some(b) = data.ball[body].as_ref() {
                    b.get_vel(&data.dtheta[body], adr, velv);
                    let tr_adr = adr + b.dim();
                    for i in 0..3 {
                        velv[tr_adr + i] = data.dtheta[body][3 + i];
                    }
                }
            }
            joint => {
                for i in 0..joint.dof() {
                    velv[adr + i] = data.dtheta[body][i];
                }
            }
        }
    }
}

/// Pack all generalized accelerations into `accv`.
pub(crate) fn pack_accel(model: &Model, data: &Data, accv: &mut DVector<f64>) {
    for body in 1..model.nbody {
        let adr = model.body_qpos_adr[body];
        match model.body_joint[body] {
            JointType::Ground => {}
            JointType::Orientation => {
                if let Some(b) = data.ball[body].as_ref() {
                    b.get_accel(&data.ddtheta[body], adr, accv);
                }
            }
            JointType::Free => {
                if let Some(b) = data.ball[body].as_ref() {
                    b.get_accel(&data.ddtheta[body], adr, accv);
                    let tr_adr = adr + b.dim();
                    for i in 0..3 {
                        accv[tr_adr + i] = data.ddtheta[body][3 + i];
                    }
                }
            }
            joint => {
                for i in 0..joint.dof() {
                    accv[adr + i] = data.ddtheta[body][i];
                }
            }
        }
    }
}

/// Pack all internal generalized forces into `tauv`.
///
/// Ball-bearing joints map their body-frame torque through the orientation
/// component (Euler inverse Jacobian, or pass-through for quaternions).
pub(crate) fn pack_internal_force(model: &Model, data: &Data, tauv: &mut DVector<f64>) {
    for body in 1..model.nbody {
        let adr = model.body_qpos_adr[body];
        let f = &data.force_internal[body];
        match model.body_joint[body] {
            JointType::Ground => {}
            JointType::Orientation => {
                if let Some(b) = data.ball[body].as_ref() {
                    b.internal_force(Vector3::new(f[0], f[1], f[2]), adr, tauv);
                }
            }
            JointType::Free => {
                if let Some(b) = data.ball[body].as_ref() {
                    b.internal_force(Vector3::new(f[0], f[1], f[2]), adr, tauv);
                    let tr_adr = adr + b.dim();
                    for i in 0..3 {
                        tauv[tr_adr + i] = f[3 + i];
                    }
                }
            }
            joint => {
                for i in 0..joint.dof() {
                    tauv[adr + i] = f[i];
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rot_z_quarter_turn() {
        let r = rot_z(std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(r * Vector3::x(), Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn test_rot_yx_is_composition() {
        let phi: f64 = 0.3;
        let psi: f64 = -0.7;
        let rx = {
            let (s, c) = phi.sin_cos();
            Matrix3::new(1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c)
        };
        let ry = {
            let (s, c) = psi.sin_cos();
            Matrix3::new(c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c)
        };
        assert_relative_eq!(rot_yx(phi, psi), ry * rx, epsilon = 1e-14);
    }

    #[test]
    fn test_motion_map_unused_tail_stays_zero() {
        // calc_joint_kinematics_vel relies on zeroed unused columns; the
        // column writers must never touch columns past the joint's dof.
        // (Exercised end to end in the velocity-composition integration
        // test; here we check the writers directly.)
        use arbor_types::{JointType, MassProperties};

        use crate::types::{BodyDef, ModelBuilder};

        let mut builder = ModelBuilder::new("one-torsion");
        builder
            .add_body(
                0,
                BodyDef::new(MassProperties::solid_sphere(1.0, 0.1), JointType::Torsion),
            )
            .unwrap();
        let model = builder.build();
        let mut data = model.make_data();
        calc_joint_kinematics_pos(&model, &mut data, 1);
        for col in 1..6 {
            for row in 0..6 {
                assert_eq!(data.s_map[1][(row, col)], 0.0);
            }
        }
    }
}
