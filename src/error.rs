//! Error types for flow chain operations.
//!
//! The pure ordering functions never fail - malformed edge sets degrade to
//! empty or partial results by design. Errors exist only at the edges of the
//! crate: chain-preserving manager mutations and (de)serialization.

use thiserror::Error;

/// Result type alias for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// Errors that can occur during chain-editing and serialization operations.
#[derive(Error, Debug)]
pub enum ChainError {
    /// Stage not found in the flow.
    #[error("Stage not found: {0}")]
    StageNotFound(String),

    /// A stage with this id already exists.
    #[error("Duplicate stage: {0}")]
    DuplicateStage(String),

    /// A stage cannot precede itself.
    #[error("Stage cannot link to itself: {0}")]
    SelfLink(String),

    /// Linking would give a stage a second in- or out-edge.
    #[error("Edge conflict: {from} already linked to {to}")]
    EdgeConflict { from: String, to: String },

    /// Index out of bounds for ordered-list operations.
    #[error("Index {index} out of bounds for chain of length {length}")]
    IndexOutOfBounds { index: usize, length: usize },

    /// Snapshot serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ChainError {
    /// Creates a StageNotFound error.
    pub fn stage_not_found(id: impl Into<String>) -> Self {
        Self::StageNotFound(id.into())
    }

    /// Creates a DuplicateStage error.
    pub fn duplicate_stage(id: impl Into<String>) -> Self {
        Self::DuplicateStage(id.into())
    }

    /// Creates a SelfLink error.
    pub fn self_link(id: impl Into<String>) -> Self {
        Self::SelfLink(id.into())
    }

    /// Creates an EdgeConflict error.
    pub fn edge_conflict(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::EdgeConflict {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Creates an IndexOutOfBounds error.
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::IndexOutOfBounds { index, length }
    }
}
