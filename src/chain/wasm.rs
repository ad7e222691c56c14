//! WASM bindings for the chain module.
//!
//! This module provides JavaScript-friendly wrappers around ChainManager and
//! the ordering functions for use in browser consoles.

use js_sys::{Array, Uint8Array};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

use super::manager::ChainManager;
use super::model::{Stage, StageId};
use crate::error::ChainError;

/// Serialize a value to JsValue with HashMaps as plain JS objects (not Map).
fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&Serializer::new().serialize_maps_as_objects(true))
}

// =============================================================================
// ERROR CONVERSION
// =============================================================================

impl From<ChainError> for JsValue {
    fn from(err: ChainError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

/// Helper macro for Result conversion
macro_rules! js_result {
    ($expr:expr) => {
        $expr.map_err(|e: ChainError| JsValue::from(e))
    };
}

// =============================================================================
// MAIN WRAPPER TYPE
// =============================================================================

/// JavaScript-friendly wrapper around ChainManager.
///
/// This provides stage-chain editing and ordering for flow views in the
/// browser.
#[wasm_bindgen]
pub struct JsChainManager {
    inner: ChainManager,
}

#[wasm_bindgen]
impl JsChainManager {
    /// Creates a new empty chain manager.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const manager = new JsChainManager();
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsChainManager {
        JsChainManager {
            inner: ChainManager::new(),
        }
    }

    /// Loads from a JSON snapshot (Uint8Array).
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const bytes = new TextEncoder().encode(flowJson);
    /// const manager = JsChainManager.fromBytes(bytes);
    /// ```
    #[wasm_bindgen(js_name = fromBytes)]
    pub fn from_bytes(bytes: &[u8]) -> Result<JsChainManager, JsValue> {
        let inner = js_result!(ChainManager::from_bytes(bytes))?;
        Ok(JsChainManager { inner })
    }

    /// Saves to a JSON snapshot (returns Uint8Array).
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const bytes = manager.toBytes();
    /// // Persist bytes, or POST them back to the flow service
    /// ```
    #[wasm_bindgen(js_name = toBytes)]
    pub fn to_bytes(&self) -> Result<Uint8Array, JsValue> {
        let bytes = js_result!(self.inner.save())?;
        Ok(Uint8Array::from(&bytes[..]))
    }

    /// Gets the full flow state as a JavaScript object.
    ///
    /// Returns an object with `stages` (array of Stage records) and
    /// `sequences` (array of `{from, to}` edges).
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const state = manager.getState();
    /// console.log(state.sequences); // [{from: 1, to: 3}, ...]
    /// ```
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> Result<JsValue, JsValue> {
        Ok(to_js_value(self.inner.state())?)
    }
}

// =============================================================================
// STAGE MANAGEMENT METHODS
// =============================================================================

#[wasm_bindgen]
impl JsChainManager {
    /// Creates a stage and links it onto the current tail.
    ///
    /// # Arguments
    /// * `stage` - Stage as JavaScript object with fields:
    ///   - `id`: number or string
    ///   - `name`: string
    ///   - `description`: string
    ///   - `color`: string (optional)
    ///   - `metadata`: string (JSON)
    ///
    /// # Example (JavaScript)
    /// ```js
    /// manager.createAndLink({
    ///   id: 'b3c1…', // or a number
    ///   name: 'Review',
    ///   description: '',
    ///   metadata: ''
    /// });
    /// ```
    #[wasm_bindgen(js_name = createAndLink)]
    pub fn create_and_link(&mut self, stage: JsValue) -> Result<(), JsValue> {
        let stage: Stage = from_value(stage)?;
        js_result!(self.inner.create_and_link(stage))?;
        Ok(())
    }

    /// Creates a stage without linking it.
    #[wasm_bindgen(js_name = createStage)]
    pub fn create_stage(&mut self, stage: JsValue) -> Result<(), JsValue> {
        let stage: Stage = from_value(stage)?;
        js_result!(self.inner.create_stage(stage))?;
        Ok(())
    }

    /// Gets a stage by id, returns null if not found.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const stage = manager.getStage(3);
    /// if (stage) console.log(stage.name);
    /// ```
    #[wasm_bindgen(js_name = getStage)]
    pub fn get_stage(&self, id: JsValue) -> Result<JsValue, JsValue> {
        let id: StageId = from_value(id)?;
        match self.inner.get_stage(&id) {
            Some(stage) => Ok(to_js_value(stage)?),
            None => Ok(JsValue::NULL),
        }
    }

    /// Deletes a stage; its neighbors are re-linked to keep one chain.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// manager.deleteStage(3);
    /// ```
    #[wasm_bindgen(js_name = deleteStage)]
    pub fn delete_stage(&mut self, id: JsValue) -> Result<(), JsValue> {
        let id: StageId = from_value(id)?;
        js_result!(self.inner.delete_stage(&id))?;
        Ok(())
    }

    /// Creates a stage spliced in directly after `anchor`.
    #[wasm_bindgen(js_name = insertAfter)]
    pub fn insert_after(&mut self, anchor: JsValue, stage: JsValue) -> Result<(), JsValue> {
        let anchor: StageId = from_value(anchor)?;
        let stage: Stage = from_value(stage)?;
        js_result!(self.inner.insert_after(&anchor, stage))?;
        Ok(())
    }
}

// =============================================================================
// ORDER MANAGEMENT METHODS
// =============================================================================

#[wasm_bindgen]
impl JsChainManager {
    /// Links `from` before `to`.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// manager.link(1, 3);
    /// ```
    pub fn link(&mut self, from: JsValue, to: JsValue) -> Result<(), JsValue> {
        let from: StageId = from_value(from)?;
        let to: StageId = from_value(to)?;
        js_result!(self.inner.link(from, to))?;
        Ok(())
    }

    /// Removes the out-edge of `from`. Returns true when an edge was removed.
    pub fn unlink(&mut self, from: JsValue) -> Result<bool, JsValue> {
        let from: StageId = from_value(from)?;
        Ok(self.inner.unlink(&from))
    }

    /// Moves the stage at chain position `from` to position `to`.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// manager.moveStage(0, 2); // Move the head to third position
    /// ```
    #[wasm_bindgen(js_name = moveStage)]
    pub fn move_stage(&mut self, from: usize, to: usize) -> Result<(), JsValue> {
        js_result!(self.inner.move_stage(from, to))?;
        Ok(())
    }

    /// Gets the ordered stage ids as an array.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const order = manager.orderedIds();
    /// console.log(order); // [1, 3, 4, 2]
    /// ```
    #[wasm_bindgen(js_name = orderedIds)]
    pub fn ordered_ids(&mut self) -> Result<Array, JsValue> {
        let order = self.inner.ordered_ids();
        let array = Array::new();
        for id in order {
            array.push(&to_js_value(&id)?);
        }
        Ok(array)
    }

    /// Gets the stages in rendering order (orphans last) as an array of
    /// Stage objects. The renderer must not re-sort this.
    #[wasm_bindgen(js_name = orderedStages)]
    pub fn ordered_stages(&self) -> Result<JsValue, JsValue> {
        Ok(to_js_value(&self.inner.ordered_stages())?)
    }

    /// Gets ordering diagnostics: `{edges, complete, issue}`.
    ///
    /// `complete` is false when the edge set is not a single clean chain
    /// (cycle, disconnected components, no head).
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const seq = manager.sequencing();
    /// if (!seq.complete) showDataWarning();
    /// ```
    pub fn sequencing(&self) -> Result<JsValue, JsValue> {
        let seq = self.inner.sequencing();
        let obj = js_sys::Object::new();
        js_sys::Reflect::set(&obj, &"edges".into(), &to_js_value(&seq.edges)?)?;
        js_sys::Reflect::set(&obj, &"complete".into(), &JsValue::from_bool(seq.complete))?;
        let issue = match seq.issue {
            Some(issue) => JsValue::from_str(&format!("{:?}", issue)),
            None => JsValue::NULL,
        };
        js_sys::Reflect::set(&obj, &"issue".into(), &issue)?;
        Ok(obj.into())
    }
}

impl Default for JsChainManager {
    fn default() -> Self {
        Self::new()
    }
}
