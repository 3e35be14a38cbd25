//! Articulated-body dynamics tests: the reference scenarios and the
//! equation-of-motion consistency properties.

use approx::assert_relative_eq;
use nalgebra::{DMatrix, DVector, Matrix3, Vector3};

use arbor_core::spatial::spatial_vec;
use arbor_core::{
    BodyDef, Data, JointType, MassProperties, Model, ModelBuilder, SpatialVec, TreeError,
};

const GRAVITY: Vector3<f64> = Vector3::new(0.0, -9.8, 0.0);

/// Build the per-body spatial gravity field for the current configuration:
/// force m·g at the COM, expressed at the body origin.
fn gravity_field(model: &Model, data: &Data) -> Vec<SpatialVec> {
    (0..model.nbody)
        .map(|body| {
            let f = model.body_mass_props[body].mass * GRAVITY;
            spatial_vec(data.com_station_g[body].cross(&f), f)
        })
        .collect()
}

/// A chain of four bodies with no ball joints (so the coordinate and DOF
/// layouts coincide): torsion → ujoint → cartesian → freeline.
fn no_ball_chain() -> Model {
    let mut b = ModelBuilder::new("no-ball-chain");
    let props = MassProperties::from_central_inertia(
        1.5,
        Vector3::new(0.2, 0.1, -0.1),
        Matrix3::from_diagonal(&Vector3::new(0.3, 0.4, 0.5)),
    );
    let mut parent = 0;
    for (joint, station) in [
        (JointType::Torsion, Vector3::new(0.0, -0.4, 0.0)),
        (JointType::UJoint, Vector3::new(0.3, 0.0, 0.1)),
        (JointType::Cartesian, Vector3::new(0.0, 0.2, 0.0)),
        (JointType::FreeLine, Vector3::new(0.1, 0.0, 0.3)),
    ] {
        parent = b
            .add_body(parent, BodyDef::new(props, joint).with_station(station))
            .unwrap();
    }
    b.build()
}

fn sample_state(model: &Model) -> (DVector<f64>, DVector<f64>) {
    let pos = DVector::from_fn(model.nq, |i, _| 0.2 * (i as f64 + 1.0).sin());
    let vel = DVector::from_fn(model.nv, |i, _| 0.3 * (i as f64 + 2.0).cos());
    (pos, vel)
}

/// Assemble the generalized mass matrix from the articulated recursion:
/// column j is M⁻¹·e_j (forward dynamics under unit generalized force at
/// zero velocity), inverted at the end.
fn generalized_mass(model: &Model, data: &mut Data, pos: &DVector<f64>) -> DMatrix<f64> {
    let zero_forces = vec![SpatialVec::zeros(); model.nbody];
    let mut m_inv = DMatrix::zeros(model.nv, model.nv);
    for j in 0..model.nv {
        data.set_pos(model, pos);
        data.set_vel(model, &DVector::zeros(model.nv));
        let mut tau = DVector::zeros(model.nv);
        tau[j] = 1.0;
        data.set_internal_force(model, &tau);
        data.forward_dynamics(model, &zero_forces).unwrap();
        let mut acc = DVector::zeros(model.nv);
        data.get_accel(model, &mut acc);
        m_inv.set_column(j, &acc);
    }
    m_inv.try_inverse().unwrap()
}

/// Scenario: a single Cartesian body in gravity accelerates at g.
#[test]
fn cartesian_body_free_fall() {
    let mut b = ModelBuilder::new("free-fall");
    b.add_body(
        0,
        BodyDef::new(MassProperties::solid_sphere(1.0, 0.1), JointType::Cartesian),
    )
    .unwrap();
    let model = b.build();
    let mut data = model.make_data();

    data.set_pos(&model, &DVector::zeros(model.nq));
    data.set_vel(&model, &DVector::zeros(model.nv));
    let forces = gravity_field(&model, &data);
    data.forward_dynamics(&model, &forces).unwrap();

    let mut acc = DVector::zeros(model.nv);
    data.get_accel(&model, &mut acc);
    assert_relative_eq!(acc[0], 0.0, epsilon = 1e-12);
    assert_relative_eq!(acc[1], -9.8, epsilon = 1e-12);
    assert_relative_eq!(acc[2], 0.0, epsilon = 1e-12);
}

/// Scenario: torsion pendulum. With the bob hanging at θ = 0 and gravity
/// down, θ̈ = −(g/l)·sin θ exactly for a point mass (≈ −(mgl/I)·θ for
/// small angles).
#[test]
fn torsion_pendulum_small_angle() {
    let length = 0.9;
    let mut b = ModelBuilder::new("pendulum");
    b.add_body(
        0,
        BodyDef::new(
            MassProperties::point_mass(2.0, Vector3::new(0.0, -length, 0.0)),
            JointType::Torsion,
        ),
    )
    .unwrap();
    let model = b.build();
    let mut data = model.make_data();

    for theta in [0.01, 0.1, -0.25] {
        data.set_pos(&model, &DVector::from_vec(vec![theta]));
        data.set_vel(&model, &DVector::zeros(1));
        let forces = gravity_field(&model, &data);
        data.forward_dynamics(&model, &forces).unwrap();

        let mut acc = DVector::zeros(1);
        data.get_accel(&model, &mut acc);
        let expected = -(9.8 / length) * theta.sin();
        assert_relative_eq!(acc[0], expected, epsilon = 1e-10);
    }
}

/// Scenario: a free body spinning about a principal axis has zero
/// generalized acceleration and conserves kinetic energy.
#[test]
fn free_body_spin_is_torque_free() {
    for quaternion in [false, true] {
        let mut b = ModelBuilder::new("spinner");
        b.add_body(
            0,
            BodyDef::new(
                MassProperties::new(
                    1.0,
                    Vector3::zeros(),
                    Matrix3::from_diagonal(&Vector3::new(1.0, 2.0, 3.0)),
                ),
                JointType::Free,
            )
            .with_quaternion(quaternion),
        )
        .unwrap();
        let model = b.build();
        let mut data = model.make_data();

        let mut pos = DVector::zeros(model.nq);
        let mut vel = DVector::zeros(model.nq);
        if quaternion {
            pos[0] = 1.0; // identity quaternion
            // q̇ for ω = (0, 1, 0) at identity: ½·E(q)ᵀ·ω.
            vel[2] = 0.5;
        } else {
            vel[1] = 1.0; // ω_y; Euler angles all zero
        }
        data.set_pos(&model, &pos);
        data.set_vel(&model, &vel);

        let forces = vec![SpatialVec::zeros(); model.nbody];
        data.forward_dynamics(&model, &forces).unwrap();

        let mut acc = DVector::zeros(model.nq);
        data.get_accel(&model, &mut acc);
        // All generalized accelerations vanish: ω is principal and there is
        // no external force.
        for i in 0..model.dof(1) {
            assert_relative_eq!(data.ddtheta[1][i], 0.0, epsilon = 1e-12);
        }
        if quaternion {
            // The q̈ slots absorb only the parameterization rate:
            // q̈ = ½·E(q̇)ᵀ·ω = (−|q̇|², 0, 0, 0) here.
            assert_relative_eq!(acc[0], -0.25, epsilon = 1e-12);
            for i in 1..7 {
                assert_relative_eq!(acc[i], 0.0, epsilon = 1e-12);
            }
        }

        // KE = ½·ωᵀ·I·ω = ½·1·2·1 = 1.
        assert_relative_eq!(data.kinetic_energy(&model), 1.0, epsilon = 1e-12);
    }
}

/// Kinetic-energy consistency: the node-summed KE equals ½·θ̇ᵀ·M_gen·θ̇
/// with M_gen assembled from the articulated recursion.
#[test]
fn kinetic_energy_matches_generalized_mass() {
    let model = no_ball_chain();
    let mut data = model.make_data();
    let (pos, vel) = sample_state(&model);

    let m_gen = generalized_mass(&model, &mut data, &pos);

    data.set_pos(&model, &pos);
    data.set_vel(&model, &vel);
    let ke_nodes = data.kinetic_energy(&model);
    let ke_gen = 0.5 * vel.dot(&(&m_gen * &vel));

    assert_relative_eq!(ke_nodes, ke_gen, epsilon = 1e-10, max_relative = 1e-10);
}

/// Acceleration consistency: M_gen·θ̈ + C(θ, θ̇) = τ for an arbitrary
/// generalized force, with C recovered from the τ = 0 solve.
#[test]
fn equation_of_motion_consistency() {
    let model = no_ball_chain();
    let mut data = model.make_data();
    let (pos, vel) = sample_state(&model);
    let zero_forces = vec![SpatialVec::zeros(); model.nbody];

    let m_gen = generalized_mass(&model, &mut data, &pos);

    // Bias accelerations at τ = 0.
    data.set_pos(&model, &pos);
    data.set_vel(&model, &vel);
    data.forward_dynamics(&model, &zero_forces).unwrap();
    let mut acc0 = DVector::zeros(model.nv);
    data.get_accel(&model, &mut acc0);

    // Accelerations under an arbitrary generalized force.
    let tau = DVector::from_fn(model.nv, |i, _| 0.7 * (i as f64 - 3.5));
    data.set_pos(&model, &pos);
    data.set_vel(&model, &vel);
    data.set_internal_force(&model, &tau);
    data.forward_dynamics(&model, &zero_forces).unwrap();
    let mut acc_tau = DVector::zeros(model.nv);
    data.get_accel(&model, &mut acc_tau);

    // M·(θ̈_τ − θ̈_0) = τ.
    let recovered = &m_gen * (&acc_tau - &acc0);
    assert_relative_eq!(recovered, tau, epsilon = 1e-9, max_relative = 1e-9);
}

/// Forward/inverse round trip: projecting the induced spatial forces
/// (M_k·s_acc + b) through the inverse pass reproduces the projection of
/// the applied field.
#[test]
fn forward_inverse_round_trip() {
    let model = no_ball_chain();
    let mut data = model.make_data();
    let (pos, vel) = sample_state(&model);

    data.set_pos(&model, &pos);
    data.set_vel(&model, &vel);

    // An arbitrary applied wrench field plus gravity.
    let mut forces = gravity_field(&model, &data);
    for (body, f) in forces.iter_mut().enumerate().skip(1) {
        *f += spatial_vec(
            Vector3::new(0.1 * body as f64, -0.2, 0.3),
            Vector3::new(-0.4, 0.5 * body as f64, 0.6),
        );
    }
    data.forward_dynamics(&model, &forces).unwrap();

    // Induced per-body spatial force: M_k·a + b.
    let induced: Vec<SpatialVec> = (0..model.nbody)
        .map(|body| data.mk[body] * data.sacc[body] + data.gyro_bias[body])
        .collect();

    let mut from_induced = data.clone();
    from_induced.force_internal.iter_mut().for_each(|f| f.fill(0.0));
    from_induced.calc_internal_force(&model, &induced).unwrap();
    let mut tau_induced = DVector::zeros(model.nq);
    from_induced.get_internal_force(&model, &mut tau_induced);

    let mut from_applied = data.clone();
    from_applied.force_internal.iter_mut().for_each(|f| f.fill(0.0));
    from_applied.calc_internal_force(&model, &forces).unwrap();
    let mut tau_applied = DVector::zeros(model.nq);
    from_applied.get_internal_force(&model, &mut tau_applied);

    assert_relative_eq!(tau_induced, tau_applied, epsilon = 1e-10, max_relative = 1e-9);
}

/// The inverse-inertia sensitivity of a single free body is the inverse of
/// its spatial inertia.
#[test]
fn inverse_inertia_single_free_body() {
    let mut b = ModelBuilder::new("free");
    b.add_body(
        0,
        BodyDef::new(
            MassProperties::from_central_inertia(
                2.0,
                Vector3::new(0.1, 0.0, -0.2),
                Matrix3::from_diagonal(&Vector3::new(0.5, 0.8, 1.1)),
            ),
            JointType::Free,
        ),
    )
    .unwrap();
    let model = b.build();
    let mut data = model.make_data();

    data.set_pos(&model, &DVector::zeros(model.nq));
    data.set_vel(&model, &DVector::zeros(model.nv));
    data.calc_articulated_inertia(&model).unwrap();
    data.calc_inverse_inertia(&model);

    let product = data.y_sens[1] * data.mk[1];
    assert_relative_eq!(
        product,
        nalgebra::Matrix6::identity(),
        epsilon = 1e-10,
        max_relative = 1e-9
    );
}

/// A U-joint on a body with no rotational inertia about the joint axes has
/// a singular joint-space inertia; the failure names the body and level.
#[test]
fn singular_configuration_is_reported() {
    let mut b = ModelBuilder::new("degenerate");
    b.add_body(
        0,
        BodyDef::new(
            MassProperties::point_mass(1.0, Vector3::zeros()),
            JointType::UJoint,
        ),
    )
    .unwrap();
    let model = b.build();
    let mut data = model.make_data();

    data.set_pos(&model, &DVector::zeros(model.nq));
    data.set_vel(&model, &DVector::zeros(model.nv));
    let err = data.calc_articulated_inertia(&model).unwrap_err();
    match err {
        TreeError::SingularConfiguration { body, level, h } => {
            assert_eq!(body, 1);
            assert_eq!(level, 1);
            assert_eq!(h.nrows(), 2);
            assert_eq!(h.ncols(), 6);
        }
        other => panic!("expected SingularConfiguration, got {other:?}"),
    }
}
