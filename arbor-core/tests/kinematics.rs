//! Kinematic-pass tests: pose composition, velocity composition, and the
//! quaternion constraint surface.

use approx::assert_relative_eq;
use nalgebra::{DVector, Vector3, Vector4};

use arbor_core::spatial::{angular_part, linear_part, shift_motion};
use arbor_core::{BodyDef, Data, JointType, MassProperties, Model, ModelBuilder, SpatialVec};

/// A mixed chain exercising every joint family except Ground:
/// free → torsion → ujoint → cartesian → freeline → orientation.
fn mixed_chain(quaternion: bool) -> Model {
    let mut b = ModelBuilder::new("mixed-chain");
    let props = MassProperties::from_central_inertia(
        2.0,
        Vector3::new(0.1, -0.2, 0.3),
        nalgebra::Matrix3::from_diagonal(&Vector3::new(0.4, 0.5, 0.6)),
    );
    let mut parent = 0;
    for (joint, station) in [
        (JointType::Free, Vector3::zeros()),
        (JointType::Torsion, Vector3::new(0.0, -0.5, 0.0)),
        (JointType::UJoint, Vector3::new(0.3, 0.0, 0.0)),
        (JointType::Cartesian, Vector3::new(0.0, 0.0, 0.4)),
        (JointType::FreeLine, Vector3::new(0.2, 0.2, 0.0)),
        (JointType::Orientation, Vector3::new(0.0, 0.1, 0.0)),
    ] {
        parent = b
            .add_body(
                parent,
                BodyDef::new(props, joint)
                    .with_station(station)
                    .with_quaternion(quaternion),
            )
            .unwrap();
    }
    b.build()
}

/// Fill a coordinate vector with a valid, non-trivial configuration
/// (quaternions normalized).
fn sample_pos(model: &Model) -> DVector<f64> {
    let mut pos = DVector::zeros(model.nq);
    for i in 0..model.nq {
        pos[i] = 0.1 * (i as f64 + 1.0) * if i % 2 == 0 { 1.0 } else { -1.0 };
    }
    for body in 1..model.nbody {
        if model.body_joint[body].has_ball() && model.body_quaternion[body] {
            let adr = model.body_qpos_adr[body];
            let q = Vector4::new(1.0, 0.2 * body as f64, -0.1, 0.3).normalize();
            for i in 0..4 {
                pos[adr + i] = q[i];
            }
        }
    }
    pos
}

fn sample_vel(model: &Model) -> DVector<f64> {
    // The velocity vector shares the coordinate layout (quaternion joints
    // carry q̇ in their four slots).
    let mut vel = DVector::zeros(model.nq);
    for i in 0..model.nq {
        vel[i] = 0.05 * (i as f64 + 1.0) * if i % 3 == 0 { -1.0 } else { 1.0 };
    }
    vel
}

/// Spatial velocity composition: after the two kinematic passes, every body
/// satisfies `s_vel = Φᵀ·s_vel_parent + S·θ̇`.
#[test]
fn velocity_composition_holds_along_mixed_chain() {
    for quaternion in [false, true] {
        let model = mixed_chain(quaternion);
        let mut data = model.make_data();
        data.set_pos(&model, &sample_pos(&model));
        data.set_vel(&model, &sample_vel(&model));

        for body in 1..model.nbody {
            let parent = model.body_parent[body];
            let expected = shift_motion(&data.svel[parent], &data.phi_r[body])
                + data.s_map[body] * data.dtheta[body];
            assert_relative_eq!(data.svel[body], expected, epsilon = 1e-12);
        }
    }
}

/// Pack/unpack round trip: get_pos/get_vel reproduce what set_pos/set_vel
/// consumed.
#[test]
fn state_transfer_round_trip() {
    for quaternion in [false, true] {
        let model = mixed_chain(quaternion);
        let mut data = model.make_data();
        let pos = sample_pos(&model);
        let vel = sample_vel(&model);
        data.set_pos(&model, &pos);
        data.set_vel(&model, &vel);

        let mut pos_out = DVector::zeros(model.nq);
        let mut vel_out = DVector::zeros(model.nq);
        data.get_pos(&model, &mut pos_out);
        data.get_vel(&model, &mut vel_out);

        assert_relative_eq!(pos_out, pos, epsilon = 1e-14);
        assert_relative_eq!(vel_out, vel, epsilon = 1e-14);
    }
}

/// A torsion pendulum's spatial velocity is a pure rotation about the joint
/// axis, and its kinetic energy matches the point-mass closed form.
#[test]
fn torsion_pendulum_velocity_and_energy() {
    let length = 0.7;
    let mass = 1.3;
    let mut b = ModelBuilder::new("pendulum");
    b.add_body(
        0,
        BodyDef::new(
            MassProperties::point_mass(mass, Vector3::new(length, 0.0, 0.0)),
            JointType::Torsion,
        ),
    )
    .unwrap();
    let model = b.build();
    let mut data = model.make_data();

    let w = 2.1;
    data.set_pos(&model, &DVector::from_vec(vec![0.4]));
    data.set_vel(&model, &DVector::from_vec(vec![w]));

    // Joint axis is the ground z axis; the body origin does not translate.
    assert_relative_eq!(
        angular_part(&data.svel[1]),
        w * Vector3::z(),
        epsilon = 1e-12
    );
    assert_relative_eq!(linear_part(&data.svel[1]), Vector3::zeros(), epsilon = 1e-12);

    // KE = ½·m·(l·ω)² for a point mass on a rigid arm.
    let ke = data.kinetic_energy(&model);
    assert_relative_eq!(ke, 0.5 * mass * (length * w).powi(2), epsilon = 1e-12);
}

/// Quaternion joints: the generalized velocity recovered from q̇ is the
/// angular velocity, and the constraint projection restores |q| = 1 and
/// q·q̇ = 0 through the system surface.
#[test]
fn quaternion_constraint_enforcement() {
    let mut b = ModelBuilder::new("ball");
    b.add_body(
        0,
        BodyDef::new(MassProperties::solid_sphere(1.0, 0.2), JointType::Orientation)
            .with_quaternion(true),
    )
    .unwrap();
    let model = b.build();
    let mut data = model.make_data();

    // The concrete projection case: q = (2,0,0,0), q̇ = (0.1, 0.1, 0.1, 0.1).
    let mut pos = DVector::from_vec(vec![2.0, 0.0, 0.0, 0.0]);
    let mut vel = DVector::from_vec(vec![0.1, 0.1, 0.1, 0.1]);
    data.set_pos(&model, &pos);
    data.set_vel(&model, &vel);
    data.enforce_constraints(&model, &mut pos, &mut vel);

    assert_relative_eq!(pos[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(vel[0], 0.0, epsilon = 1e-12);
    for i in 1..4 {
        assert_relative_eq!(pos[i], 0.0, epsilon = 1e-12);
        assert_relative_eq!(vel[i], 0.1, epsilon = 1e-12);
    }

    // Unit norm and tangency, as numbers.
    let q = Vector4::new(pos[0], pos[1], pos[2], pos[3]);
    let dq = Vector4::new(vel[0], vel[1], vel[2], vel[3]);
    assert_relative_eq!(q.norm(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(q.dot(&dq), 0.0, epsilon = 1e-12);
}

/// `set_vel_from_spatial` recovers generalized velocities that reproduce
/// the imposed spatial velocity field.
#[test]
fn spatial_velocity_round_trip() {
    let model = mixed_chain(true);
    let mut data = model.make_data();
    data.set_pos(&model, &sample_pos(&model));
    data.set_vel(&model, &sample_vel(&model));

    // Capture the consistent field the velocity pass produced, zero the
    // state, and impose it back.
    let target: Vec<SpatialVec> = data.svel.clone();
    let mut fresh: Data = model.make_data();
    fresh.set_pos(&model, &sample_pos(&model));
    fresh.set_vel_from_spatial(&model, &target).unwrap();

    for body in 1..model.nbody {
        assert_relative_eq!(fresh.svel[body], target[body], epsilon = 1e-10);
    }
}
