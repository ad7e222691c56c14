//! Input structs for parsing console flow export JSON.
//!
//! These structs match the flow service's wire format. Key differences from
//! the crate model:
//! - Root-level fields are camelCase
//! - Case counts arrive keyed by stringified stage id

use serde::Deserialize;
use std::collections::HashMap;

use flowchain::{Edge, FlowChain, Stage, StageId};

/// Root flow export from the console backend.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputFlow {
    #[allow(dead_code)]
    pub id: Option<StageId>,

    #[serde(default)]
    pub name: String,

    pub stages: Vec<InputStage>,

    #[serde(default)]
    pub sequences: Vec<InputSequence>,

    /// Case counts keyed by stringified stage id (JSON object keys are
    /// always strings, even for numeric ids).
    #[serde(default)]
    pub case_counts: HashMap<String, u64>,
}

/// Stage record as exported.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputStage {
    pub id: StageId,
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub color: Option<String>,
}

/// Precedence edge as exported.
#[derive(Debug, Deserialize)]
pub struct InputSequence {
    pub from: StageId,
    pub to: StageId,
}

impl From<InputStage> for Stage {
    fn from(input: InputStage) -> Self {
        let mut stage = Stage::new(input.id, input.name).with_description(input.description);
        if let Some(color) = input.color {
            stage = stage.with_color(color);
        }
        stage
    }
}

impl From<InputSequence> for Edge {
    fn from(input: InputSequence) -> Self {
        Edge {
            from: input.from,
            to: input.to,
        }
    }
}

impl InputFlow {
    /// Converts the export into the crate model plus a typed count map.
    pub fn into_parts(self) -> (FlowChain, HashMap<StageId, u64>) {
        let flow = FlowChain {
            stages: self.stages.into_iter().map(Stage::from).collect(),
            sequences: self.sequences.into_iter().map(Edge::from).collect(),
        };

        // Re-key counts: a key that parses as an integer refers to a numeric
        // stage id, anything else to a string id.
        let counts = self
            .case_counts
            .into_iter()
            .map(|(key, count)| {
                let id = match key.parse::<i64>() {
                    Ok(n) => StageId::from(n),
                    Err(_) => StageId::from(key),
                };
                (id, count)
            })
            .collect();

        (flow, counts)
    }
}
