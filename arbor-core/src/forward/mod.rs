//! Base-to-tip kinematic passes.
//!
//! `position` refreshes the configuration-level state from a tree-wide
//! coordinate vector; `velocity` refreshes the velocity-level state
//! (spatial velocities and the gyroscopic/Coriolis biases consumed by the
//! articulated-body recursion). Both must run in topological order: a
//! body's kinematics is valid only after its parent's.

mod position;
mod velocity;

pub(crate) use position::{enforce_constraints, fwd_position};
pub(crate) use velocity::{fwd_velocity, set_vel_from_spatial};
