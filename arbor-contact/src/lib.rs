//! Hunt-Crossley compliant contact and regularized Coulomb friction.
//!
//! A compliant (spring-damper) contact force model rather than an
//! impulse-based one: forces vary smoothly with penetration and slip, so
//! the dynamics stay integrable by smooth integrators. The crate is pure
//! force computation — geometry queries and integration belong to the
//! caller, which drives these laws with depths and velocities and feeds
//! the resulting wrenches to the dynamics engine.
//!
//! # Example
//!
//! ```
//! use arbor_contact::{ContactPair, HuntCrossleyForce, RegularizedFriction, SurfaceParams};
//!
//! let sphere = SurfaceParams::new(1.0, 0.5).with_friction(1.0, 0.5, 0.1);
//! let plane = SurfaceParams::new(2.0, 1.0).with_friction(0.7, 0.2, 0.05);
//! let pair = ContactPair::combine(&sphere, &plane);
//!
//! let hc = HuntCrossleyForce::new(pair);
//! let normal = hc.normal_force(0.8, 0.05, 0.0);
//! let friction = RegularizedFriction::new(&pair).force(normal, 0.2);
//! assert!(normal > 0.0 && friction < 0.0);
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]

mod friction;
mod hunt_crossley;
mod params;

pub use friction::{RegularizedFriction, DEFAULT_TRANSITION_VELOCITY};
pub use hunt_crossley::HuntCrossleyForce;
pub use params::{ContactPair, SurfaceParams};
