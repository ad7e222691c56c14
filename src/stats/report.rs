//! Builds chain-ordered stage breakdowns from raw counts.

use std::collections::HashMap;

use crate::chain::{ordered_stage_ids, Edge, Stage, StageId};

use super::model::{StageBreakdown, StageTally};

/// Joins `counts` against the flow's stages and edges into a chain-ordered
/// breakdown.
///
/// Stages missing from `counts` tally as 0 - a stage with no cases still
/// belongs on the chart. Stages without a chain position land in
/// `unsequenced`, keeping their input order, mirroring the core's orphan
/// policy. Counts for ids that match no stage are dropped: the stage list is
/// the source of truth for what gets charted.
pub fn breakdown(
    stages: &[Stage],
    edges: &[Edge],
    counts: &HashMap<StageId, u64>,
) -> StageBreakdown {
    let positions: HashMap<StageId, usize> = ordered_stage_ids(edges)
        .into_iter()
        .enumerate()
        .map(|(i, id)| (id, i))
        .collect();

    let mut sequenced: Vec<(usize, StageTally)> = Vec::new();
    let mut unsequenced: Vec<StageTally> = Vec::new();

    for stage in stages {
        let tally = StageTally::new(
            stage.id.clone(),
            stage.name.clone(),
            counts.get(&stage.id).copied().unwrap_or(0),
        );
        match positions.get(&stage.id) {
            Some(&pos) => sequenced.push((pos, tally)),
            None => unsequenced.push(tally),
        }
    }

    sequenced.sort_by_key(|(pos, _)| *pos);

    StageBreakdown {
        tallies: sequenced.into_iter().map(|(_, t)| t).collect(),
        unsequenced,
    }
}

// =============================================================================
// TESTS
// =============================================================================
