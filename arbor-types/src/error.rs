//! Error types for tree assembly and the articulated-body recursion.

use nalgebra::DMatrix;
use thiserror::Error;

/// Errors surfaced by tree assembly and the forward-dynamics recursion.
///
/// There is no silent recovery anywhere in the engine: every failure either
/// comes back through this type or, in the LAPACK layer, through a verbatim
/// `info` code.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TreeError {
    /// The joint-space inertia D = H·P·Hᵀ is not invertible at some body.
    ///
    /// This usually indicates a degenerate mass distribution for the joint's
    /// degrees of freedom (for example a U-joint on a body with no inertia
    /// about either joint axis). The offending body, its depth in the tree,
    /// and its joint transition matrix are carried for diagnostics; the
    /// caller decides whether to reparameterize, perturb, or abort.
    #[error("singular joint-space inertia at body {body} (level {level})")]
    SingularConfiguration {
        /// Index of the body whose D matrix failed to invert.
        body: usize,
        /// Depth of that body in the tree (ground = 0).
        level: usize,
        /// The joint transition matrix H (dof × 6) at the failure.
        h: DMatrix<f64>,
    },

    /// A reversed (child-to-parent) joint direction was requested.
    ///
    /// The flag exists in the assembly interface but no joint family
    /// supports it.
    #[error("reversed joints are not supported")]
    ReversedJointUnsupported,

    /// A body referenced a parent that does not exist yet.
    ///
    /// Bodies must be added in topological order: every parent index must
    /// refer to an already-added body.
    #[error("invalid parent {parent} for body {body}: parent must already exist")]
    InvalidParent {
        /// Index the new body would have received.
        body: usize,
        /// The out-of-range parent index.
        parent: usize,
    },

    /// Mass properties failed validation.
    #[error("invalid mass properties: {reason}")]
    InvalidMassProperties {
        /// Description of what is wrong.
        reason: String,
    },

    /// A per-body slice passed to a recursion had the wrong length.
    #[error("expected {expected} per-body entries, got {actual}")]
    BodyCountMismatch {
        /// Number of bodies in the model.
        expected: usize,
        /// Length of the slice supplied by the caller.
        actual: usize,
    },
}

impl TreeError {
    /// Create an invalid-mass-properties error.
    #[must_use]
    pub fn invalid_mass(reason: impl Into<String>) -> Self {
        Self::InvalidMassProperties {
            reason: reason.into(),
        }
    }

    /// Check whether this is a numerical singularity (as opposed to a
    /// precondition violation).
    #[must_use]
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::SingularConfiguration { .. })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TreeError::SingularConfiguration {
            body: 3,
            level: 2,
            h: DMatrix::zeros(1, 6),
        };
        assert!(err.to_string().contains("body 3"));
        assert!(err.is_singular());

        let err = TreeError::InvalidParent { body: 4, parent: 9 };
        assert!(err.to_string().contains("parent 9"));
        assert!(!err.is_singular());
    }
}
