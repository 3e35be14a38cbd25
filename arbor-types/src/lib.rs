//! Shared vocabulary types for the arbor multibody dynamics engine.
//!
//! This crate holds the types that every layer of the engine speaks:
//! body-frame mass properties, the joint taxonomy, inboard joint frames,
//! and the error type surfaced by assembly and the articulated-body
//! recursion. It has no dynamics of its own.

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]

mod error;
mod joint;
mod mass;

pub use error::TreeError;
pub use joint::{JointFrame, JointType};
pub use mass::MassProperties;
