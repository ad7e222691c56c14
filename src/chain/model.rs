//! Data models for flow stage chains.
//!
//! A flow's ordering is encoded as a set of directed edges between stage
//! identifiers. Each edge means "from precedes to"; a well-formed flow is a
//! single simple path (every stage has at most one incoming and one outgoing
//! edge). Real exports are not guaranteed to be well-formed, so nothing here
//! enforces chain shape - that policy lives in the sequencer and manager.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// =============================================================================
// STAGE ID
// =============================================================================

/// Unique identifier for a stage within one flow.
///
/// Backend exports use integer ids for persisted stages and string ids
/// (UUIDs) for stages created client-side, so both forms are first-class.
/// The untagged serde representation accepts either JSON shape.
///
/// # Examples
///
/// ```
/// use flowchain::StageId;
///
/// let a = StageId::from(7);
/// let b = StageId::from("intake");
/// assert_ne!(a, b);
/// assert_eq!(a.to_string(), "7");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StageId {
    /// Numeric id assigned by the backend.
    Num(i64),
    /// String id (typically a UUID minted client-side).
    Name(String),
}

impl StageId {
    /// Mints a fresh random (UUID v4) stage id.
    pub fn random() -> Self {
        StageId::Name(Uuid::new_v4().to_string())
    }

    /// Returns the numeric value if this is a numeric id.
    pub fn as_num(&self) -> Option<i64> {
        match self {
            StageId::Num(n) => Some(*n),
            StageId::Name(_) => None,
        }
    }

    /// Returns the string value if this is a string id.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            StageId::Num(_) => None,
            StageId::Name(s) => Some(s),
        }
    }
}

impl From<i64> for StageId {
    fn from(n: i64) -> Self {
        StageId::Num(n)
    }
}

impl From<i32> for StageId {
    fn from(n: i32) -> Self {
        StageId::Num(n as i64)
    }
}

impl From<&str> for StageId {
    fn from(s: &str) -> Self {
        StageId::Name(s.to_string())
    }
}

impl From<String> for StageId {
    fn from(s: String) -> Self {
        StageId::Name(s)
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageId::Num(n) => write!(f, "{}", n),
            StageId::Name(s) => write!(f, "{}", s),
        }
    }
}

impl fmt::Debug for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StageId({})", self)
    }
}

// =============================================================================
// EDGE
// =============================================================================

/// A directed precedence edge: stage `from` comes immediately before `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// The earlier stage.
    pub from: StageId,
    /// The later stage.
    pub to: StageId,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(from: impl Into<StageId>, to: impl Into<StageId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

// =============================================================================
// STAGE
// =============================================================================

/// A workflow stage with its display data.
///
/// Ordering never depends on these fields; they are carried through
/// `order_stages` untouched so the renderer has everything it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    /// Unique identifier (also referenced by edges).
    pub id: StageId,

    /// Display name.
    pub name: String,

    /// Longer description shown in stage detail views.
    #[serde(default)]
    pub description: String,

    /// Display color (hex string), if the console assigned one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Extensible metadata as JSON string (blob approach).
    #[serde(default)]
    pub metadata: String,
}

impl Stage {
    /// Creates a new Stage with the given id and name.
    pub fn new(id: impl Into<StageId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            color: None,
            metadata: String::new(),
        }
    }

    /// Builder: Set description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder: Set display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Builder: Set metadata as JSON string.
    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = metadata.into();
        self
    }
}

// =============================================================================
// FLOW CHAIN
// =============================================================================

/// Root snapshot of one flow: its stages and the edges linking them.
///
/// Stage order in `stages` is whatever the source produced; orphan placement
/// in `order_stages` depends on it, so it is preserved on load and save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowChain {
    /// All stages of the flow, in source order.
    pub stages: Vec<Stage>,

    /// Precedence edges. Expected - not guaranteed - to form a single chain.
    pub sequences: Vec<Edge>,
}

impl FlowChain {
    /// Creates a new empty flow chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns true if there are no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Returns the stage with the given id, if present.
    pub fn stage(&self, id: &StageId) -> Option<&Stage> {
        self.stages.iter().find(|s| &s.id == id)
    }
}

// =============================================================================
// TESTS
// =============================================================================
