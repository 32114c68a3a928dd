//! `{type, payload}` decoding.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ActionKind, BuildAction};
use crate::catalog::{CareerId, CharacterId, ItemType};
use crate::engine::ReduceError;

/// Untyped action as it arrives from a caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionEnvelope {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: Value,
}

#[derive(Deserialize)]
struct TalentPayload {
    row_index: usize,
    talent_index: usize,
}

#[derive(Deserialize)]
struct EquipPayload {
    slot_index: usize,
    item: ItemType,
}

impl ActionEnvelope {
    pub fn new(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    /// Parses an envelope from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Resolves the envelope into a typed action.
    ///
    /// # Errors
    ///
    /// - `ReduceError::UnhandledAction` when `type` names no known kind
    /// - `ReduceError::MalformedPayload` when the payload does not fit the kind
    pub fn decode(self) -> Result<BuildAction, ReduceError> {
        let kind: ActionKind = self
            .kind
            .parse()
            .map_err(|_| ReduceError::UnhandledAction { kind: self.kind })?;

        let malformed = |err: serde_json::Error| ReduceError::MalformedPayload {
            kind,
            message: err.to_string(),
        };

        let action = match kind {
            ActionKind::Character => {
                BuildAction::Character(CharacterId::deserialize(self.payload).map_err(malformed)?)
            }
            ActionKind::Career => {
                BuildAction::Career(CareerId::deserialize(self.payload).map_err(malformed)?)
            }
            ActionKind::Talent => {
                let payload = TalentPayload::deserialize(self.payload).map_err(malformed)?;
                BuildAction::Talent {
                    row_index: payload.row_index,
                    talent_index: payload.talent_index,
                }
            }
            ActionKind::Equip => {
                let payload = EquipPayload::deserialize(self.payload).map_err(malformed)?;
                BuildAction::Equip {
                    slot_index: payload.slot_index,
                    item: payload.item,
                }
            }
        };
        Ok(action)
    }
}

impl TryFrom<ActionEnvelope> for BuildAction {
    type Error = ReduceError;

    fn try_from(envelope: ActionEnvelope) -> Result<Self, Self::Error> {
        envelope.decode()
    }
}

impl From<&BuildAction> for ActionEnvelope {
    fn from(action: &BuildAction) -> Self {
        let payload = match action {
            BuildAction::Character(id) => Value::from(id.as_str()),
            BuildAction::Career(id) => Value::from(id.as_str()),
            BuildAction::Talent {
                row_index,
                talent_index,
            } => serde_json::json!({ "row_index": row_index, "talent_index": talent_index }),
            BuildAction::Equip { slot_index, item } => {
                serde_json::json!({ "slot_index": slot_index, "item": item.as_str() })
            }
        };
        Self::new(action.kind().as_ref(), payload)
    }
}
