//! The articulated-body recursions.
//!
//! Three cooperating passes implement O(N) forward dynamics:
//!
//! 1. `articulated` (tip→base): articulated inertias and joint couplings;
//! 2. `articulated` (tip→base): force residuals from the applied spatial
//!    forces;
//! 3. `articulated` (base→tip): joint and spatial accelerations.
//!
//! `sensitivity` adds the base→tip inverse-inertia recursion used by
//! constraint projection, and `inverse` the standalone tip→base projection
//! of a Cartesian force field into generalized forces.

mod articulated;
mod inverse;
mod sensitivity;

pub(crate) use articulated::{calc_accel, calc_articulated_inertia, calc_bias_force};
pub(crate) use inverse::calc_internal_force;
pub(crate) use sensitivity::calc_inverse_inertia;
