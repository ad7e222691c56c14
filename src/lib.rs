//! Flowchain - stage-chain ordering for workflow flows.
//!
//! A flow's stage order is stored as an unordered set of directed edges
//! (`{from, to}` pairs forming, ideally, a single simple path). This crate
//! rebuilds the canonical head-to-tail ordering from such an edge set and
//! degrades predictably when the data is malformed:
//!
//! - **No head** (empty set or pure cycle): empty ordering
//! - **Cycle reachable from the head**: partial chain, traversal never loops
//! - **Orphan stages**: sorted after every positioned stage, input order kept
//! - **Disconnected components**: first head in input order wins
//!
//! # Example
//!
//! ```rust
//! use flowchain::{order_stages, ordered_stage_ids, Edge, Stage};
//!
//! // Edges arrive in arbitrary order from the backend.
//! let edges = vec![Edge::new(3, 4), Edge::new(1, 3), Edge::new(4, 2)];
//!
//! let ids = ordered_stage_ids(&edges);
//! assert_eq!(ids.len(), 4); // 1, 3, 4, 2
//!
//! // Stages carry display data; ordering leaves it untouched.
//! let stages = vec![
//!     Stage::new(4, "Decision"),
//!     Stage::new(1, "Intake"),
//!     Stage::new(3, "Review"),
//!     Stage::new(2, "Close"),
//! ];
//! let ordered = order_stages(&stages, &edges);
//! assert_eq!(ordered[0].name, "Intake");
//! ```

pub mod error;

// Chain module
pub mod chain;

// Re-exports for convenience
pub use chain::{
    find_head, order_edges, order_stages, ordered_stage_ids, sequence, ChainIssue, ChainManager,
    Edge, FlowChain, Sequencing, Stage, StageId,
};
pub use error::{ChainError, ChainResult};

#[cfg(feature = "wasm")]
pub use chain::JsChainManager;

// Stats module (only compiled when stats feature enabled)
#[cfg(feature = "stats")]
pub mod stats;

#[cfg(feature = "stats")]
pub use stats::{breakdown, StageBreakdown, StageTally};
