use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::{FakeInputError, Result};
use crate::models::EdgeMargins;

/// Per-instance configuration. JSON keys are camelCase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FakeInputOptions {
    pub right_edge_adjustment: f32,
    pub left_edge_adjustment: f32,
    pub caret_adjustment: f32,
    #[serde(alias = "fireInput")]
    pub fire_input_events: bool,
    #[serde(alias = "fireChange")]
    pub fire_change_events: bool,
    pub integrate_selectors: bool,
    pub integrate_validations: bool,
    pub max_length: Option<usize>,
}

impl Default for FakeInputOptions {
    fn default() -> Self {
        Self {
            right_edge_adjustment: 3.0,
            left_edge_adjustment: 0.0,
            caret_adjustment: 0.0,
            fire_input_events: true,
            fire_change_events: true,
            integrate_selectors: false,
            integrate_validations: false,
            max_length: None,
        }
    }
}

impl FakeInputOptions {
    pub fn edge_margins(&self) -> EdgeMargins {
        EdgeMargins::new(self.left_edge_adjustment, self.right_edge_adjustment)
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Single option by its camelCase name.
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.to_json() {
            Value::Object(mut map) => map.remove(name),
            _ => None,
        }
    }

    pub fn set(&mut self, name: &str, value: Value) -> Result<()> {
        let mut patch = Map::new();
        patch.insert(name.to_string(), value);
        self.merge(Value::Object(patch))
    }

    /// Merges an object of options; nothing changes unless every entry is valid.
    pub fn merge(&mut self, patch: Value) -> Result<()> {
        let Value::Object(patch) = patch else {
            return Err(FakeInputError::InvalidOption {
                name: String::new(),
                message: "expected an object of options".to_string(),
            });
        };

        let Value::Object(mut current) = self.to_json() else {
            return Ok(());
        };

        for (name, value) in patch {
            if !current.contains_key(&name) {
                return Err(FakeInputError::InvalidOption {
                    name,
                    message: "unknown option".to_string(),
                });
            }
            let merged = {
                let mut probe = current.clone();
                probe.insert(name.clone(), value.clone());
                serde_json::from_value::<FakeInputOptions>(Value::Object(probe))
            };
            if let Err(e) = merged {
                return Err(FakeInputError::InvalidOption {
                    name,
                    message: e.to_string(),
                });
            }
            current.insert(name, value);
        }

        *self = serde_json::from_value(Value::Object(current))?;
        Ok(())
    }
}
