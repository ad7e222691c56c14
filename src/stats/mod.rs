//! Statistics module for per-stage case tallies.
//!
//! The console's dashboards chart how many cases sit in each stage; the
//! chart's x-axis must follow the flow's chain order, not whatever order the
//! counts arrived in. This module joins a count map against a flow's stages
//! and edges into a chain-ordered breakdown.

pub mod model;
pub mod report;

pub use model::{StageBreakdown, StageTally};
pub use report::breakdown;
