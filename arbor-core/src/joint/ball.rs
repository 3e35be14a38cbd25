//! Orientation component shared by the ball-bearing joint families.
//!
//! The Orientation and Free joints own three rotational degrees of freedom
//! whose coordinates can be either body-three Euler angles or a unit
//! quaternion. Everything peculiar to that choice — coordinate packing, the
//! quaternion↔angular-velocity maps, constraint enforcement, the Euler
//! inverse-Jacobian torque map — lives here, so the joint kinematics proper
//! can stay representation-agnostic.

use nalgebra::{DVector, Matrix3, Matrix3x4, Matrix4x3, Vector3, Vector4, Vector6};

/// Ball-joint Euler coordinates are measured in degrees; this is the factor
/// applied wherever they enter a trigonometric formula. Torsion and U-joint
/// coordinates are radians and never see it.
pub const EULER_DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Cached trigonometry of the body-three Euler angles (Φ, Θ, Ψ), refreshed
/// on every position update and reused by the internal-force map.
#[derive(Debug, Clone, Copy)]
pub struct EulerTrig {
    c_phi: f64,
    s_phi: f64,
    c_theta: f64,
    s_theta: f64,
    c_psi: f64,
    s_psi: f64,
}

impl Default for EulerTrig {
    fn default() -> Self {
        // Trig of the zero orientation.
        Self {
            c_phi: 1.0,
            s_phi: 0.0,
            c_theta: 1.0,
            s_theta: 0.0,
            c_psi: 1.0,
            s_psi: 0.0,
        }
    }
}

/// Quaternion orientation state: q = (w, x, y, z) and its time derivatives.
#[derive(Debug, Clone, Copy)]
pub struct QuatState {
    /// Orientation of B in P as a unit quaternion.
    pub q: Vector4<f64>,
    /// Quaternion rate.
    pub dq: Vector4<f64>,
    /// Quaternion second derivative.
    pub ddq: Vector4<f64>,
}

impl Default for QuatState {
    fn default() -> Self {
        Self {
            q: Vector4::new(1.0, 0.0, 0.0, 0.0),
            dq: Vector4::zeros(),
            ddq: Vector4::zeros(),
        }
    }
}

/// Orientation representation of a ball-bearing joint.
#[derive(Debug, Clone, Copy)]
pub enum BallOrientation {
    /// Body-three Euler angles, held in the node's generalized coordinates
    /// (degrees). Carries only the trig cache of the last position update.
    Euler(EulerTrig),
    /// Unit quaternion with its derivatives, held here; the node's
    /// generalized velocity is the angular velocity of B in P.
    Quaternion(QuatState),
}

/// The 3×4 map E(q) with ω = 2·E(q)·q̇ for a unit quaternion q.
#[inline]
fn omega_map(q: &Vector4<f64>) -> Matrix3x4<f64> {
    Matrix3x4::new(
        -q[1], q[0], -q[3], q[2], //
        -q[2], q[3], q[0], -q[1], //
        -q[3], -q[2], q[1], q[0],
    )
}

/// The transpose map E(q)ᵀ with q̇ = ½·E(q)ᵀ·ω.
#[inline]
fn omega_map_t(q: &Vector4<f64>) -> Matrix4x3<f64> {
    omega_map(q).transpose()
}

impl BallOrientation {
    /// A fresh orientation component in the requested representation.
    #[must_use]
    pub fn new(quaternion: bool) -> Self {
        if quaternion {
            Self::Quaternion(QuatState::default())
        } else {
            Self::Euler(EulerTrig::default())
        }
    }

    /// Coordinate slots this component occupies (3 Euler, 4 quaternion).
    #[must_use]
    pub const fn dim(&self) -> usize {
        match self {
            Self::Euler(_) => 3,
            Self::Quaternion(_) => 4,
        }
    }

    /// Unpack position coordinates at `adr`. Euler mode fills `theta`
    /// (the node's generalized coordinates); quaternion mode captures q.
    pub fn set_pos(&mut self, adr: usize, posv: &DVector<f64>, theta: &mut Vector6<f64>) {
        match self {
            Self::Euler(_) => {
                for i in 0..3 {
                    theta[i] = posv[adr + i];
                }
            }
            Self::Quaternion(state) => {
                for i in 0..4 {
                    state.q[i] = posv[adr + i];
                }
            }
        }
    }

    /// Pack position coordinates back into the caller's vector.
    pub fn get_pos(&self, theta: &Vector6<f64>, adr: usize, posv: &mut DVector<f64>) {
        match self {
            Self::Euler(_) => {
                for i in 0..3 {
                    posv[adr + i] = theta[i];
                }
            }
            Self::Quaternion(state) => {
                for i in 0..4 {
                    posv[adr + i] = state.q[i];
                }
            }
        }
    }

    /// Unpack velocity coordinates at `adr`, producing the angular velocity
    /// of B in P in `dtheta[0..3]`. Quaternion mode reads q̇ and converts via
    /// ω = 2·E(q)·q̇.
    pub fn set_vel(&mut self, adr: usize, velv: &DVector<f64>, dtheta: &mut Vector6<f64>) {
        match self {
            Self::Euler(_) => {
                for i in 0..3 {
                    dtheta[i] = velv[adr + i];
                }
            }
            Self::Quaternion(state) => {
                for i in 0..4 {
                    state.dq[i] = velv[adr + i];
                }
                let omega = 2.0 * omega_map(&state.q) * state.dq;
                for i in 0..3 {
                    dtheta[i] = omega[i];
                }
            }
        }
    }

    /// Pack velocity coordinates back into the caller's vector.
    pub fn get_vel(&self, dtheta: &Vector6<f64>, adr: usize, velv: &mut DVector<f64>) {
        match self {
            Self::Euler(_) => {
                for i in 0..3 {
                    velv[adr + i] = dtheta[i];
                }
            }
            Self::Quaternion(state) => {
                for i in 0..4 {
                    velv[adr + i] = state.dq[i];
                }
            }
        }
    }

    /// Update the second derivative after an acceleration pass: in
    /// quaternion mode, q̈ = ½·(E(q̇)ᵀ·ω + E(q)ᵀ·ω̇). Euler mode has nothing
    /// to do — the generalized acceleration already is ω̇.
    pub fn calc_accel(&mut self, omega: Vector3<f64>, domega: Vector3<f64>) {
        if let Self::Quaternion(state) = self {
            state.ddq = 0.5 * (omega_map_t(&state.dq) * omega + omega_map_t(&state.q) * domega);
        }
    }

    /// Pack acceleration coordinates back into the caller's vector.
    pub fn get_accel(&self, ddtheta: &Vector6<f64>, adr: usize, accv: &mut DVector<f64>) {
        match self {
            Self::Euler(_) => {
                for i in 0..3 {
                    accv[adr + i] = ddtheta[i];
                }
            }
            Self::Quaternion(state) => {
                for i in 0..4 {
                    accv[adr + i] = state.ddq[i];
                }
            }
        }
    }

    /// The rotation R_PB of the current orientation.
    ///
    /// Euler mode reads the angles (degrees) from `theta`, refreshing the
    /// trig cache; quaternion mode reads the stored q.
    pub fn rotation(&mut self, theta: &Vector6<f64>) -> Matrix3<f64> {
        match self {
            Self::Euler(trig) => {
                // Body-three 3-2-1 sequence: Φ about z, Θ about y', Ψ about x''.
                let (s_phi, c_phi) = (theta[0] * EULER_DEG_TO_RAD).sin_cos();
                let (s_theta, c_theta) = (theta[1] * EULER_DEG_TO_RAD).sin_cos();
                let (s_psi, c_psi) = (theta[2] * EULER_DEG_TO_RAD).sin_cos();
                *trig = EulerTrig {
                    c_phi,
                    s_phi,
                    c_theta,
                    s_theta,
                    c_psi,
                    s_psi,
                };
                Matrix3::new(
                    c_phi * c_theta,
                    -s_phi * c_psi + c_phi * s_theta * s_psi,
                    s_phi * s_psi + c_phi * s_theta * c_psi,
                    s_phi * c_theta,
                    c_phi * c_psi + s_phi * s_theta * s_psi,
                    -c_phi * s_psi + s_phi * s_theta * c_psi,
                    -s_theta,
                    c_theta * s_psi,
                    c_theta * c_psi,
                )
            }
            Self::Quaternion(state) => {
                let q = &state.q;
                let (w, x, y, z) = (q[0], q[1], q[2], q[3]);
                // Active-sense rotation of the (not necessarily normalized
                // mid-step) quaternion; enforce_constraints restores |q| = 1.
                Matrix3::new(
                    w * w + x * x - y * y - z * z,
                    2.0 * (x * y - w * z),
                    2.0 * (x * z + w * y),
                    2.0 * (x * y + w * z),
                    w * w - x * x + y * y - z * z,
                    2.0 * (y * z - w * x),
                    2.0 * (x * z - w * y),
                    2.0 * (y * z + w * x),
                    w * w - x * x - y * y + z * z,
                )
            }
        }
    }

    /// Project the caller's position and velocity vectors back onto the
    /// constraint manifold: normalize q and remove the component of q̇ along
    /// q (the tangency condition q·q̇ = 0). A no-op in Euler mode.
    pub fn enforce_constraints(
        &mut self,
        adr: usize,
        posv: &mut DVector<f64>,
        velv: &mut DVector<f64>,
    ) {
        if let Self::Quaternion(state) = self {
            let mut q = Vector4::zeros();
            let mut dq = Vector4::zeros();
            for i in 0..4 {
                q[i] = posv[adr + i];
                dq[i] = velv[adr + i];
            }

            q /= q.norm();
            dq -= q.dot(&dq) * q;

            for i in 0..4 {
                posv[adr + i] = q[i];
                velv[adr + i] = dq[i];
            }
            state.q = q;
            state.dq = dq;
        }
    }

    /// Map a body-frame internal torque into generalized forces at `adr`.
    ///
    /// Euler mode applies the body-three inverse Jacobian (using the trig
    /// cache from the last position update) and the degree scale. In
    /// quaternion mode the generalized velocity is the angular velocity
    /// itself, so the torque passes through unchanged; the spare coordinate
    /// slot is zeroed.
    pub fn internal_force(&self, torque: Vector3<f64>, adr: usize, out: &mut DVector<f64>) {
        match self {
            Self::Euler(t) => {
                let m = Matrix3::new(
                    0.0,
                    0.0,
                    1.0,
                    -t.s_phi,
                    t.c_phi,
                    0.0,
                    t.c_phi * t.c_theta,
                    t.s_phi * t.c_theta,
                    -t.s_theta,
                );
                let e_torque = EULER_DEG_TO_RAD * m * torque;
                for i in 0..3 {
                    out[adr + i] = e_torque[i];
                }
            }
            Self::Quaternion(_) => {
                for i in 0..3 {
                    out[adr + i] = torque[i];
                }
                out[adr + 3] = 0.0;
            }
        }
    }

    /// Recompute q̇ from a freshly-imposed angular velocity (after setting
    /// generalized velocities from a spatial velocity). A no-op in Euler
    /// mode.
    pub fn set_derivs(&mut self, omega: Vector3<f64>) {
        if let Self::Quaternion(state) = self {
            state.dq = 0.5 * omega_map_t(&state.q) * omega;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_euler_identity_at_zero() {
        let mut ball = BallOrientation::new(false);
        let theta = Vector6::zeros();
        let r = ball.rotation(&theta);
        assert_relative_eq!(r, Matrix3::identity(), epsilon = 1e-15);
    }

    #[test]
    fn test_euler_quarter_turn_about_z() {
        // With Θ = Ψ = 0 the body-three matrix reduces to Rz(Φ). At Φ = 90°
        // the active map sends ê_x → ê_y, and the parent's ê_y resolves to
        // ê_x in the body frame (Rᵀ·ê_y = ê_x).
        let mut ball = BallOrientation::new(false);
        let mut theta = Vector6::zeros();
        theta[0] = 90.0;
        let r = ball.rotation(&theta);
        assert_relative_eq!(r * Vector3::x(), Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(r.transpose() * Vector3::y(), Vector3::x(), epsilon = 1e-12);
    }

    #[test]
    fn test_quaternion_rotation_matches_euler() {
        // q for a rotation of angle a about z is (cos a/2, 0, 0, sin a/2).
        let a: f64 = 0.73;
        let mut quat = BallOrientation::new(true);
        if let BallOrientation::Quaternion(state) = &mut quat {
            state.q = Vector4::new((a / 2.0).cos(), 0.0, 0.0, (a / 2.0).sin());
        }
        let r_quat = quat.rotation(&Vector6::zeros());

        let mut euler = BallOrientation::new(false);
        let mut theta = Vector6::zeros();
        theta[0] = a / EULER_DEG_TO_RAD;
        let r_euler = euler.rotation(&theta);

        assert_relative_eq!(r_quat, r_euler, epsilon = 1e-12);
    }

    #[test]
    fn test_enforce_normalizes_and_projects() {
        let mut ball = BallOrientation::new(true);
        let mut posv = DVector::from_vec(vec![2.0, 0.0, 0.0, 0.0]);
        let mut velv = DVector::from_vec(vec![0.1, 0.1, 0.1, 0.1]);
        ball.enforce_constraints(0, &mut posv, &mut velv);

        assert_relative_eq!(posv[0], 1.0, epsilon = 1e-12);
        for i in 1..4 {
            assert_relative_eq!(posv[i], 0.0, epsilon = 1e-12);
        }
        // The component of q̇ along q = (1,0,0,0) is removed; the rest stays.
        assert_relative_eq!(velv[0], 0.0, epsilon = 1e-12);
        for i in 1..4 {
            assert_relative_eq!(velv[i], 0.1, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_omega_roundtrip() {
        // set_derivs then set_vel must reproduce the angular velocity.
        let mut ball = BallOrientation::new(true);
        if let BallOrientation::Quaternion(state) = &mut ball {
            // An arbitrary unit quaternion.
            state.q = Vector4::new(0.5, 0.5, -0.5, 0.5);
        }
        let omega = Vector3::new(0.3, -1.1, 0.7);
        ball.set_derivs(omega);

        let mut velv = DVector::zeros(4);
        let mut dtheta = Vector6::zeros();
        ball.get_vel(&Vector6::zeros(), 0, &mut velv);
        ball.set_vel(0, &velv, &mut dtheta);

        for i in 0..3 {
            assert_relative_eq!(dtheta[i], omega[i], epsilon = 1e-12);
        }
    }
}
