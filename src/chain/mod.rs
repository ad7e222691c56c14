//! Flow stage-chain module.
//!
//! Provides the chain data model, the pure ordering functions, and the
//! chain-preserving [`ChainManager`] for call sites that edit a flow.

pub mod manager;
pub mod model;
pub mod sequencer;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for convenience
pub use manager::ChainManager;
pub use model::{Edge, FlowChain, Stage, StageId};
pub use sequencer::{
    find_head, order_edges, order_stages, ordered_stage_ids, sequence, ChainIssue, Sequencing,
};

#[cfg(feature = "wasm")]
pub use wasm::JsChainManager;
