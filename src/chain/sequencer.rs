//! Chain ordering: rebuilds the head-to-tail stage sequence from an
//! unordered edge set.
//!
//! The edge set of a well-formed flow is a single simple path, but exports
//! from real installations are not always well-formed. Every function here
//! degrades instead of failing: no head yields an empty ordering, a cycle
//! reachable from the head yields the partial chain collected before the
//! revisit, orphan stages sort after every positioned stage. Callers that
//! need to distinguish a full ordering from a degraded one use [`sequence`],
//! which reports completeness alongside the result.
//!
//! All functions are pure: inputs are read-only slices, outputs are newly
//! built vectors, and there is no retained state.

use std::collections::{HashMap, HashSet};

use super::model::{Edge, Stage, StageId};

// =============================================================================
// DIAGNOSTICS
// =============================================================================

/// Why an ordering came back empty or truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainIssue {
    /// No stage qualifies as head: the edge set is empty or a pure cycle.
    NoHead,
    /// A cycle reachable from the head was cut; the ordering stops before
    /// revisiting this stage.
    CycleTruncated(StageId),
}

/// Result of [`sequence`]: the ordered edges plus completeness diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequencing {
    /// The recovered chain, head-first. May be empty or partial.
    pub edges: Vec<Edge>,
    /// True when every input edge made it into the chain.
    pub complete: bool,
    /// Set when the ordering is empty or was truncated mid-traversal.
    pub issue: Option<ChainIssue>,
}

impl Sequencing {
    /// The ordered stage ids implied by the ordered edges: every `from`,
    /// then the final `to`. An N-edge chain yields N + 1 ids.
    pub fn stage_ids(&self) -> Vec<StageId> {
        let mut ids: Vec<StageId> = self.edges.iter().map(|e| e.from.clone()).collect();
        if let Some(last) = self.edges.last() {
            ids.push(last.to.clone());
        }
        ids
    }
}

// =============================================================================
// CORE OPERATIONS
// =============================================================================

/// Finds the chain head: the first stage (in input order) that appears as a
/// `from` but never as a `to`.
///
/// Returns `None` for an empty edge set or a pure cycle. When several stages
/// qualify (disconnected components each have their own head), the first in
/// input order wins - callers are expected to supply a single chain.
pub fn find_head(edges: &[Edge]) -> Option<&StageId> {
    let targets: HashSet<&StageId> = edges.iter().map(|e| &e.to).collect();
    edges
        .iter()
        .map(|e| &e.from)
        .find(|from| !targets.contains(*from))
}

/// Orders the edge set into a chain, head-first.
///
/// Starting from the head's edge, repeatedly appends the first edge whose
/// `from` equals the current edge's `to`. Returns an empty vector when
/// [`find_head`] finds nothing. A visited set guards against cycles reachable
/// from the head: the traversal stops with the partial chain rather than
/// revisiting a stage.
pub fn order_edges(edges: &[Edge]) -> Vec<Edge> {
    sequence(edges).edges
}

/// Like [`order_edges`] but also reports whether the ordering is complete and
/// why it is not.
pub fn sequence(edges: &[Edge]) -> Sequencing {
    let Some(head) = find_head(edges) else {
        return Sequencing {
            edges: Vec::new(),
            complete: edges.is_empty(),
            issue: if edges.is_empty() {
                None
            } else {
                Some(ChainIssue::NoHead)
            },
        };
    };

    let mut ordered = Vec::with_capacity(edges.len());
    let mut visited: HashSet<&StageId> = HashSet::new();
    let mut issue = None;
    let mut current = head;

    while let Some(next) = edges.iter().find(|e| &e.from == current) {
        if visited.contains(&next.to) {
            issue = Some(ChainIssue::CycleTruncated(next.to.clone()));
            break;
        }
        visited.insert(&next.to);
        current = &next.to;
        ordered.push(next.clone());
    }

    let complete = issue.is_none() && ordered.len() == edges.len();
    Sequencing {
        edges: ordered,
        complete,
        issue,
    }
}

/// The ordered stage ids implied by the edge set: every ordered edge's
/// `from`, then the final `to`. Empty when no ordering exists - a lone
/// orphan stage is not synthesized here; union with the stage list if
/// orphans matter.
pub fn ordered_stage_ids(edges: &[Edge]) -> Vec<StageId> {
    sequence(edges).stage_ids()
}

/// Stable-sorts `stages` by chain position.
///
/// Positions come from [`ordered_stage_ids`], so the tail sorts strictly
/// after the last edge's `from`. Stages without a position (orphans, or all
/// stages when the edge set yields no ordering) are placed after every
/// positioned stage, keeping their relative input order. The result is a
/// best-effort rendering order even for malformed input.
pub fn order_stages(stages: &[Stage], edges: &[Edge]) -> Vec<Stage> {
    let positions: HashMap<StageId, usize> = ordered_stage_ids(edges)
        .into_iter()
        .enumerate()
        .map(|(i, id)| (id, i))
        .collect();

    let mut ordered: Vec<Stage> = stages.to_vec();
    // Vec::sort_by_key is stable; unpositioned stages all key to MAX and
    // keep their input order among themselves.
    ordered.sort_by_key(|s| positions.get(&s.id).copied().unwrap_or(usize::MAX));
    ordered
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn edge(from: i64, to: i64) -> Edge {
        Edge::new(from, to)
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(find_head(&[]), None);
        assert!(order_edges(&[]).is_empty());
        assert!(ordered_stage_ids(&[]).is_empty());

        let seq = sequence(&[]);
        assert!(seq.complete);
        assert_eq!(seq.issue, None);
    }

    #[test]
    fn test_single_edge() {
        let edges = [edge(1, 2)];
        assert_eq!(find_head(&edges), Some(&StageId::from(1)));
        assert_eq!(order_edges(&edges), vec![edge(1, 2)]);
        assert_eq!(
            ordered_stage_ids(&edges),
            vec![StageId::from(1), StageId::from(2)]
        );
    }

    #[test]
    fn test_simple_chain_unordered_input() {
        let edges = [edge(3, 4), edge(1, 3), edge(4, 2)];

        assert_eq!(find_head(&edges), Some(&StageId::from(1)));
        assert_eq!(order_edges(&edges), vec![edge(1, 3), edge(3, 4), edge(4, 2)]);
        assert_eq!(
            ordered_stage_ids(&edges),
            vec![
                StageId::from(1),
                StageId::from(3),
                StageId::from(4),
                StageId::from(2)
            ]
        );

        let seq = sequence(&edges);
        assert!(seq.complete);
        assert_eq!(seq.issue, None);
    }

    #[test]
    fn test_pure_cycle_has_no_head() {
        let edges = [edge(1, 2), edge(2, 3), edge(3, 1)];

        assert_eq!(find_head(&edges), None);
        assert!(order_edges(&edges).is_empty());
        assert!(ordered_stage_ids(&edges).is_empty());

        let seq = sequence(&edges);
        assert!(!seq.complete);
        assert_eq!(seq.issue, Some(ChainIssue::NoHead));
    }

    #[test]
    fn test_cycle_reachable_from_head_terminates() {
        // Head is 1; 3 links back to 2, which would loop forever without
        // the visited guard.
        let edges = [edge(1, 2), edge(2, 3), edge(3, 2)];

        assert_eq!(find_head(&edges), Some(&StageId::from(1)));
        assert_eq!(order_edges(&edges), vec![edge(1, 2), edge(2, 3)]);

        let seq = sequence(&edges);
        assert!(!seq.complete);
        assert_eq!(seq.issue, Some(ChainIssue::CycleTruncated(StageId::from(2))));
    }

    #[test]
    fn test_self_loop_after_head() {
        let edges = [edge(0, 1), edge(1, 1)];
        assert_eq!(order_edges(&edges), vec![edge(0, 1)]);

        let seq = sequence(&edges);
        assert_eq!(seq.issue, Some(ChainIssue::CycleTruncated(StageId::from(1))));
    }

    #[test]
    fn test_multiple_heads_first_wins() {
        // Two components: 1->2 and 5->6. The first head in input order (5)
        // is traversed; the other component is left out.
        let edges = [edge(5, 6), edge(1, 2)];

        assert_eq!(find_head(&edges), Some(&StageId::from(5)));
        assert_eq!(order_edges(&edges), vec![edge(5, 6)]);

        let seq = sequence(&edges);
        assert!(!seq.complete);
        assert_eq!(seq.issue, None); // not truncated, just disconnected
    }

    #[test]
    fn test_duplicate_out_edge_first_wins() {
        let edges = [edge(1, 2), edge(1, 3)];
        assert_eq!(order_edges(&edges), vec![edge(1, 2)]);
        assert!(!sequence(&edges).complete);
    }

    #[test]
    fn test_order_stages_simple() {
        let stages = vec![
            Stage::new(4, "Close"),
            Stage::new(1, "Intake"),
            Stage::new(3, "Review"),
        ];
        let edges = [edge(1, 3), edge(3, 4)];

        let ordered = order_stages(&stages, &edges);
        let names: Vec<&str> = ordered.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Intake", "Review", "Close"]);
    }

    #[test]
    fn test_order_stages_orphan_placed_last() {
        let stages = vec![
            Stage::new(9, "A"),
            Stage::new(1, "B"),
            Stage::new(3, "C"),
        ];
        let edges = [edge(1, 3)];

        let ordered = order_stages(&stages, &edges);
        let names: Vec<&str> = ordered.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_order_stages_empty_edges_keeps_input_order() {
        let stages = vec![
            Stage::new(2, "B"),
            Stage::new(1, "A"),
            Stage::new(3, "C"),
        ];

        let ordered = order_stages(&stages, &[]);
        assert_eq!(ordered, stages);
    }

    #[test]
    fn test_order_stages_tail_listed_before_predecessor() {
        // The tail (4) precedes its predecessor (3) in input order; chain
        // position must still put it last.
        let stages = vec![
            Stage::new(4, "Tail"),
            Stage::new(3, "Mid"),
            Stage::new(1, "Head"),
        ];
        let edges = [edge(1, 3), edge(3, 4)];

        let names: Vec<String> = order_stages(&stages, &edges)
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Head", "Mid", "Tail"]);
    }

    #[test]
    fn test_order_stages_idempotent() {
        let stages = vec![
            Stage::new(9, "Orphan"),
            Stage::new(2, "End"),
            Stage::new(1, "Start"),
        ];
        let edges = [edge(1, 2)];

        let once = order_stages(&stages, &edges);
        let twice = order_stages(&once, &edges);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_valid_chain_round_trip_properties() {
        // 50-edge chain supplied in reverse order.
        let edges: Vec<Edge> = (0..50).rev().map(|i| edge(i, i + 1)).collect();

        let ids = ordered_stage_ids(&edges);
        assert_eq!(ids.len(), edges.len() + 1);

        let unique: HashSet<&StageId> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());

        assert_eq!(ids.first(), Some(&StageId::from(0)));
        assert_eq!(ids.last(), Some(&StageId::from(50)));
        assert!(sequence(&edges).complete);
    }

    #[test]
    fn test_string_and_numeric_ids_mix() {
        let edges = [
            Edge::new("draft", "review"),
            Edge::new("review", 7),
        ];
        let ids = ordered_stage_ids(&edges);
        assert_eq!(
            ids,
            vec![StageId::from("draft"), StageId::from("review"), StageId::from(7)]
        );
    }
}
