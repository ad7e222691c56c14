//! ChainManager: owned flow state with chain-preserving edits.
//!
//! The pure functions in [`super::sequencer`] accept arbitrary edge sets;
//! this manager is for call sites that own the flow and edit it (the stage
//! editor). Its mutations keep the edge set a single chain by construction,
//! so the recovered ordering is always complete for manager-built flows.
//!
//! # Caching Strategy
//!
//! - `cached_order`: the ordered stage ids, invalidated on any mutation.

use super::model::{Edge, FlowChain, Stage, StageId};
use super::sequencer;
use crate::error::{ChainError, ChainResult};

/// Owns a [`FlowChain`] and offers chain-preserving CRUD over it.
pub struct ChainManager {
    flow: FlowChain,
    /// Cached ordering - invalidated after every mutation.
    cached_order: Option<Vec<StageId>>,
}

impl ChainManager {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Creates a new empty ChainManager.
    pub fn new() -> Self {
        Self {
            flow: FlowChain::new(),
            cached_order: None,
        }
    }

    /// Wraps an existing flow snapshot, e.g. one fetched from the backend.
    pub fn from_flow(flow: FlowChain) -> Self {
        Self {
            flow,
            cached_order: None,
        }
    }

    /// Creates a ChainManager from a saved JSON snapshot.
    pub fn from_bytes(bytes: &[u8]) -> ChainResult<Self> {
        let flow: FlowChain = serde_json::from_slice(bytes)?;
        Ok(Self::from_flow(flow))
    }

    /// Saves the flow to a JSON snapshot.
    pub fn save(&self) -> ChainResult<Vec<u8>> {
        Ok(serde_json::to_vec(&self.flow)?)
    }

    /// Returns the current flow state.
    pub fn state(&self) -> &FlowChain {
        &self.flow
    }

    fn invalidate_cache(&mut self) {
        self.cached_order = None;
    }

    // =========================================================================
    // STAGE CRUD
    // =========================================================================

    /// Adds a stage without linking it (it stays an orphan until linked).
    ///
    /// Returns an error if a stage with the same id already exists.
    pub fn create_stage(&mut self, stage: Stage) -> ChainResult<()> {
        if self.flow.stage(&stage.id).is_some() {
            return Err(ChainError::duplicate_stage(stage.id.to_string()));
        }
        self.invalidate_cache();
        self.flow.stages.push(stage);
        Ok(())
    }

    /// Creates a stage and links it onto the current tail in one operation.
    ///
    /// The first stage of a flow has nothing to link to and simply becomes
    /// the head.
    pub fn create_and_link(&mut self, stage: Stage) -> ChainResult<()> {
        let id = stage.id.clone();
        // An edgeless flow has no chain tail yet; link onto the most recently
        // created stage instead.
        let tail = self
            .ordered_ids()
            .last()
            .cloned()
            .or_else(|| self.flow.stages.last().map(|s| s.id.clone()));
        self.create_stage(stage)?;
        if let Some(tail) = tail {
            self.link(tail, id)?;
        }
        Ok(())
    }

    /// Gets a stage by id.
    pub fn get_stage(&self, id: &StageId) -> Option<&Stage> {
        self.flow.stage(id)
    }

    /// Applies a function to mutate a stage's display data.
    pub fn update_stage<F>(&mut self, id: &StageId, f: F) -> ChainResult<()>
    where
        F: FnOnce(&mut Stage),
    {
        let stage = self
            .flow
            .stages
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or_else(|| ChainError::stage_not_found(id.to_string()))?;
        f(stage);
        // Display data does not affect ordering; the cache stays valid.
        Ok(())
    }

    /// Removes a stage and splices its neighbor edges back together, so the
    /// remaining stages still form one chain.
    pub fn delete_stage(&mut self, id: &StageId) -> ChainResult<()> {
        if self.flow.stage(id).is_none() {
            return Err(ChainError::stage_not_found(id.to_string()));
        }
        self.invalidate_cache();

        let incoming = self.flow.sequences.iter().position(|e| &e.to == id);
        let outgoing = self.flow.sequences.iter().position(|e| &e.from == id);

        match (incoming, outgoing) {
            (Some(i), Some(o)) => {
                // Middle of the chain: predecessor re-links to successor.
                let successor = self.flow.sequences[o].to.clone();
                self.flow.sequences[i].to = successor;
                self.flow.sequences.remove(o);
            }
            (Some(i), None) => {
                self.flow.sequences.remove(i);
            }
            (None, Some(o)) => {
                self.flow.sequences.remove(o);
            }
            (None, None) => {}
        }

        self.flow.stages.retain(|s| &s.id != id);
        Ok(())
    }

    // =========================================================================
    // LINKING
    // =========================================================================

    /// Links `from` before `to`.
    ///
    /// Both stages must exist, a stage cannot precede itself, and neither
    /// endpoint may already be linked on the same side - the manager owns
    /// its edge set and keeps it a single chain.
    pub fn link(&mut self, from: impl Into<StageId>, to: impl Into<StageId>) -> ChainResult<()> {
        let from = from.into();
        let to = to.into();

        if from == to {
            return Err(ChainError::self_link(from.to_string()));
        }
        if self.flow.stage(&from).is_none() {
            return Err(ChainError::stage_not_found(from.to_string()));
        }
        if self.flow.stage(&to).is_none() {
            return Err(ChainError::stage_not_found(to.to_string()));
        }
        if let Some(existing) = self.flow.sequences.iter().find(|e| e.from == from) {
            return Err(ChainError::edge_conflict(
                from.to_string(),
                existing.to.to_string(),
            ));
        }
        if let Some(existing) = self.flow.sequences.iter().find(|e| e.to == to) {
            return Err(ChainError::edge_conflict(
                existing.from.to_string(),
                to.to_string(),
            ));
        }

        self.invalidate_cache();
        self.flow.sequences.push(Edge { from, to });
        Ok(())
    }

    /// Removes the out-edge of `from`, if any. Returns true when an edge was
    /// removed.
    pub fn unlink(&mut self, from: &StageId) -> bool {
        let before = self.flow.sequences.len();
        self.flow.sequences.retain(|e| &e.from != from);
        let removed = self.flow.sequences.len() != before;
        if removed {
            self.invalidate_cache();
        }
        removed
    }

    /// Creates `stage` and splices it in directly after `anchor`:
    /// `anchor -> stage`, and the anchor's old successor (if any) becomes the
    /// new stage's successor.
    pub fn insert_after(&mut self, anchor: &StageId, stage: Stage) -> ChainResult<()> {
        if self.flow.stage(anchor).is_none() {
            return Err(ChainError::stage_not_found(anchor.to_string()));
        }
        let id = stage.id.clone();
        self.create_stage(stage)?;

        if let Some(edge) = self.flow.sequences.iter_mut().find(|e| &e.from == anchor) {
            let successor = std::mem::replace(&mut edge.to, id.clone());
            self.flow.sequences.push(Edge {
                from: id,
                to: successor,
            });
        } else {
            self.flow.sequences.push(Edge {
                from: anchor.clone(),
                to: id,
            });
        }
        Ok(())
    }

    /// Moves the stage at chain position `from` to position `to` and rebuilds
    /// the edge set from the new order.
    ///
    /// Positions refer to the recovered chain ordering; orphan stages are not
    /// addressable here.
    pub fn move_stage(&mut self, from: usize, to: usize) -> ChainResult<()> {
        let mut ids = self.ordered_ids();
        let len = ids.len();
        if from >= len {
            return Err(ChainError::index_out_of_bounds(from, len));
        }
        if to > len {
            return Err(ChainError::index_out_of_bounds(to, len));
        }
        if from == to {
            return Ok(());
        }

        let id = ids.remove(from);
        let adjusted_to = if from < to { to - 1 } else { to };
        ids.insert(adjusted_to, id);

        self.invalidate_cache();
        self.flow.sequences = ids
            .windows(2)
            .map(|pair| Edge {
                from: pair[0].clone(),
                to: pair[1].clone(),
            })
            .collect();
        Ok(())
    }

    // =========================================================================
    // ORDERED VIEWS
    // =========================================================================

    /// Returns the ordered stage ids, computing and caching them on demand.
    pub fn ordered_ids(&mut self) -> Vec<StageId> {
        if let Some(ref cached) = self.cached_order {
            return cached.clone();
        }
        let order = sequencer::ordered_stage_ids(&self.flow.sequences);
        self.cached_order = Some(order.clone());
        order
    }

    /// Returns the stages in rendering order (positioned stages head-to-tail,
    /// orphans after them in input order).
    pub fn ordered_stages(&self) -> Vec<Stage> {
        sequencer::order_stages(&self.flow.stages, &self.flow.sequences)
    }

    /// Returns the full ordering diagnostics for the current edge set.
    pub fn sequencing(&self) -> sequencer::Sequencing {
        sequencer::sequence(&self.flow.sequences)
    }
}

impl Default for ChainManager {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
