//! Actions accepted by the reducer and their JSON wire form.

use serde::Deserialize;
use serde_json::Value;

use crate::task::Task;

/// A request to change the task sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a fully-formed task to the end of the sequence.
    Add(Task),
    /// Remove the task with this id.
    Delete(String),
    /// Flip the completion flag of the task with this id.
    ToggleComplete(String),
    /// Replace the task carrying the same id, keeping its position.
    Edit(Task),
    /// An action kind this store does not know. Always a no-op.
    Unknown(String),
}

#[derive(Debug, Deserialize)]
struct WireAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Value,
}

impl Action {
    /// Wire name of the action kind.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::Add(_) => "ADD_TASK",
            Self::Delete(_) => "DELETE_TASK",
            Self::ToggleComplete(_) => "TOGGLE_COMPLETE",
            Self::Edit(_) => "EDIT_TASK",
            Self::Unknown(kind) => kind,
        }
    }

    /// Parses an action from its wire form, `{"type": ..., "payload": ...}`.
    ///
    /// Unrecognized `type` values become [`Action::Unknown`] rather than an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a JSON object with a string
    /// `type`, or if the payload of a known kind has the wrong shape.
    pub fn from_json(input: &str) -> Result<Self, String> {
        let wire: WireAction =
            serde_json::from_str(input).map_err(|e| format!("Failed to parse action: {e}"))?;
        let kind = wire.kind.as_str();
        let action = match kind {
            "ADD_TASK" => Self::Add(payload(kind, wire.payload)?),
            "DELETE_TASK" => Self::Delete(payload(kind, wire.payload)?),
            "TOGGLE_COMPLETE" => Self::ToggleComplete(payload(kind, wire.payload)?),
            "EDIT_TASK" => Self::Edit(payload(kind, wire.payload)?),
            _ => Self::Unknown(kind.to_string()),
        };
        Ok(action)
    }
}

fn payload<T: serde::de::DeserializeOwned>(kind: &str, value: Value) -> Result<T, String> {
    serde_json::from_value(value).map_err(|e| format!("Invalid payload for {kind}: {e}"))
}
