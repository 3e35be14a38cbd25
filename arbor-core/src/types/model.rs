//! Model struct definition and the tree builder.
//!
//! [`Model`] is the static, immutable description of the rigid-body tree:
//! topology, body-frame mass properties, inboard joint frames, and the state
//! offsets that lay each body's coordinates out in the tree-wide vectors.
//! It is constructed by [`ModelBuilder`] and shared (read-only) across all
//! recursion passes.

use nalgebra::{Matrix3, Vector3};

use arbor_types::{JointFrame, JointType, MassProperties, TreeError};

use super::data::Data;

/// Static tree description.
///
/// Immutable after construction — all memory allocated upfront.
///
/// # Memory layout
///
/// Arrays are indexed by body id, with the ground body at index 0. Bodies
/// are stored in topological order: every non-ground body has a strictly
/// lower-indexed parent. Base→tip passes therefore run `1..nbody` and
/// tip→base passes run in reverse, accumulating into the parent.
#[derive(Debug, Clone)]
pub struct Model {
    /// Model name (diagnostic only).
    pub name: String,

    /// Number of coordinate slots in the tree-wide position vector.
    /// Quaternion-parameterized orientation makes this exceed `nv`.
    pub nq: usize,
    /// Number of motion degrees of freedom (velocity slots).
    pub nv: usize,
    /// Number of bodies, including ground at index 0.
    pub nbody: usize,

    /// Parent body index (ground points at itself).
    pub body_parent: Vec<usize>,
    /// Depth in the tree (ground = 0).
    pub body_level: Vec<usize>,
    /// Joint family connecting each body to its parent.
    pub body_joint: Vec<JointType>,
    /// Quaternion (`true`) vs Euler (`false`) orientation coordinates.
    /// Meaningful only for ball-bearing joints.
    pub body_quaternion: Vec<bool>,
    /// Body-frame mass properties (inertia about the body origin).
    pub body_mass_props: Vec<MassProperties>,
    /// Inboard joint frame orientation in the body frame (R_BJ).
    pub body_joint_rot: Vec<Matrix3<f64>>,
    /// Reference origin of the body in its parent frame: where OB sits in P
    /// when the joint coordinates are zero.
    pub body_ref_station: Vec<Vector3<f64>>,
    /// First slot of this body's block in the tree-wide coordinate vector.
    pub body_qpos_adr: Vec<usize>,
    /// First slot of this body's block in the tree-wide velocity vector.
    pub body_dof_adr: Vec<usize>,
}

impl Model {
    /// Motion degrees of freedom of a body's inboard joint.
    #[inline]
    #[must_use]
    pub fn dof(&self, body: usize) -> usize {
        self.body_joint[body].dof()
    }

    /// Coordinate slots of a body's inboard joint.
    #[inline]
    #[must_use]
    pub fn dim(&self, body: usize) -> usize {
        self.body_joint[body].dim(self.body_quaternion[body])
    }

    /// Allocate a fresh [`Data`] sized for this model.
    ///
    /// All storage the recursion passes touch is allocated here, once.
    #[must_use]
    pub fn make_data(&self) -> Data {
        Data::new(self)
    }
}

/// Describes one body to be attached to the tree.
///
/// Defaults: identity joint frame, zero station, Euler orientation
/// coordinates, forward joint direction.
#[derive(Debug, Clone, Copy)]
pub struct BodyDef {
    /// Body-frame mass properties.
    pub mass_props: MassProperties,
    /// Joint family connecting the body to its parent.
    pub joint: JointType,
    /// Inboard joint frame in the body frame.
    pub frame: JointFrame,
    /// Origin of the body in its parent at the reference configuration.
    pub station: Vector3<f64>,
    /// Use quaternion orientation coordinates (ball-bearing joints only).
    pub quaternion: bool,
    /// Reverse the joint direction. Part of the assembly vocabulary but
    /// unsupported: `true` is rejected at `add_body`.
    pub reversed: bool,
}

impl BodyDef {
    /// A body definition with the given mass properties and joint family.
    #[must_use]
    pub fn new(mass_props: MassProperties, joint: JointType) -> Self {
        Self {
            mass_props,
            joint,
            frame: JointFrame::identity(),
            station: Vector3::zeros(),
            quaternion: false,
            reversed: false,
        }
    }

    /// Set the inboard joint frame.
    #[must_use]
    pub fn with_frame(mut self, frame: JointFrame) -> Self {
        self.frame = frame;
        self
    }

    /// Set the reference station of the body in its parent.
    #[must_use]
    pub fn with_station(mut self, station: Vector3<f64>) -> Self {
        self.station = station;
        self
    }

    /// Select quaternion orientation coordinates.
    #[must_use]
    pub fn with_quaternion(mut self, quaternion: bool) -> Self {
        self.quaternion = quaternion;
        self
    }

    /// Request a reversed joint (always rejected; see [`BodyDef::reversed`]).
    #[must_use]
    pub fn with_reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }
}

/// Incremental tree builder.
///
/// Starts with the ground body already present at index 0; bodies must be
/// added parent-first. `build()` freezes the model.
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    name: String,
    defs: Vec<BodyDef>,
    parents: Vec<usize>,
}

impl ModelBuilder {
    /// Start a new tree containing only the ground body.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let ground = BodyDef::new(MassProperties::ground(), JointType::Ground);
        Self {
            name: name.into(),
            defs: vec![ground],
            parents: vec![0],
        }
    }

    /// Attach a body to `parent` and return its index.
    ///
    /// # Errors
    ///
    /// - [`TreeError::InvalidParent`] if `parent` has not been added yet.
    /// - [`TreeError::ReversedJointUnsupported`] if the definition requests
    ///   a reversed joint.
    /// - [`TreeError::InvalidMassProperties`] if the mass properties fail
    ///   validation.
    pub fn add_body(&mut self, parent: usize, def: BodyDef) -> Result<usize, TreeError> {
        let body = self.defs.len();
        if parent >= body {
            return Err(TreeError::InvalidParent { body, parent });
        }
        if def.reversed {
            return Err(TreeError::ReversedJointUnsupported);
        }
        def.mass_props.validate()?;
        self.defs.push(def);
        self.parents.push(parent);
        Ok(body)
    }

    /// Freeze the tree into a [`Model`], computing levels and state offsets.
    #[must_use]
    pub fn build(self) -> Model {
        let nbody = self.defs.len();
        let mut body_level = vec![0usize; nbody];
        let mut body_qpos_adr = vec![0usize; nbody];
        let mut body_dof_adr = vec![0usize; nbody];

        let mut nq = 0usize;
        let mut nv = 0usize;
        for body in 0..nbody {
            if body > 0 {
                body_level[body] = body_level[self.parents[body]] + 1;
            }
            body_qpos_adr[body] = nq;
            body_dof_adr[body] = nv;
            let def = &self.defs[body];
            nq += def.joint.dim(def.quaternion);
            nv += def.joint.dof();
        }

        tracing::debug!(
            name = %self.name,
            nbody,
            nq,
            nv,
            "froze rigid-body tree"
        );

        Model {
            name: self.name,
            nq,
            nv,
            nbody,
            body_parent: self.parents,
            body_level,
            body_joint: self.defs.iter().map(|d| d.joint).collect(),
            body_quaternion: self.defs.iter().map(|d| d.quaternion).collect(),
            body_mass_props: self.defs.iter().map(|d| d.mass_props).collect(),
            body_joint_rot: self.defs.iter().map(|d| d.frame.rotation).collect(),
            body_ref_station: self.defs.iter().map(|d| d.station).collect(),
            body_qpos_adr,
            body_dof_adr,
        }
    }
}
