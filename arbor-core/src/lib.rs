//! Recursive articulated-body dynamics over a rigid-body tree.
//!
//! This crate implements O(N) forward dynamics for a tree of rigid bodies
//! connected by single-degree-of-freedom-family joints, following the
//! Model/Data architecture:
//!
//! - [`Model`] is static (immutable after [`ModelBuilder::build`]): the
//!   kinematic tree, mass properties, joint frames, and state offsets.
//! - [`Data`] is dynamic: per-body kinematic state and the articulated-body
//!   scratch, allocated once by [`Model::make_data`] and mutated in place.
//!
//! A dynamics step is a strict pipeline over the tree's topological order:
//!
//! ```text
//! set_pos ──▶ set_vel ──▶ calc_articulated_inertia (tip→base)
//!                         calc_bias_force          (tip→base)
//!                         calc_accel               (base→tip)
//! ```
//!
//! # Quick start
//!
//! ```
//! use arbor_core::{BodyDef, JointType, MassProperties, ModelBuilder, SpatialVec};
//! use nalgebra::DVector;
//!
//! // Ground + one body on a Cartesian (3-translation) joint.
//! let mut builder = ModelBuilder::new("falling-body");
//! let body = builder
//!     .add_body(
//!         0,
//!         BodyDef::new(MassProperties::solid_sphere(1.0, 0.1), JointType::Cartesian),
//!     )
//!     .unwrap();
//! let model = builder.build();
//! let mut data = model.make_data();
//!
//! data.set_pos(&model, &DVector::zeros(model.nq));
//! data.set_vel(&model, &DVector::zeros(model.nv));
//!
//! // Gravity enters as an external spatial force on the body.
//! let mut forces = vec![SpatialVec::zeros(); model.nbody];
//! forces[body][4] = -9.8; // linear y component
//! data.forward_dynamics(&model, &forces).unwrap();
//!
//! let mut acc = DVector::zeros(model.nv);
//! data.get_accel(&model, &mut acc);
//! assert!((acc[1] - (-9.8)).abs() < 1e-12);
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,  // Many methods can't be const due to nalgebra
    clippy::needless_range_loop,   // Index loops mirror the recursion math
    clippy::doc_markdown,          // Not all technical terms need backticks
    clippy::suboptimal_flops       // mul_add style changes aren't always clearer
)]

mod dynamics;
mod energy;
mod forward;
pub mod joint;
pub mod spatial;
pub mod types;

pub use joint::ball::{BallOrientation, EULER_DEG_TO_RAD};
pub use spatial::SpatialVec;
pub use types::{BodyDef, Data, Model, ModelBuilder};

// Re-export the vocabulary types for convenience.
pub use arbor_types::{JointFrame, JointType, MassProperties, TreeError};
