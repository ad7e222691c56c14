//! Data models for stage statistics.

use serde::{Deserialize, Serialize};

use crate::chain::StageId;

/// Case count for one stage, labeled for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageTally {
    /// The stage's identifier.
    pub id: StageId,

    /// Chart label (the stage's display name).
    pub label: String,

    /// Number of cases currently in this stage.
    pub count: u64,
}

impl StageTally {
    /// Creates a new tally.
    pub fn new(id: impl Into<StageId>, label: impl Into<String>, count: u64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            count,
        }
    }
}

/// A full per-stage breakdown in chain order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageBreakdown {
    /// Tallies for stages with a chain position, head-to-tail.
    pub tallies: Vec<StageTally>,

    /// Tallies for stages outside the chain (orphans), in input order.
    pub unsequenced: Vec<StageTally>,
}

impl StageBreakdown {
    /// Total case count across all stages, sequenced or not.
    pub fn total(&self) -> u64 {
        self.tallies
            .iter()
            .chain(self.unsequenced.iter())
            .map(|t| t.count)
            .sum()
    }

    /// Returns true if the breakdown has no stages at all.
    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty() && self.unsequenced.is_empty()
    }
}
