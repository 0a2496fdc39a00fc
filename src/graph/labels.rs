use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use super::NodeId;


/// Fixed id <-> label pair that bypasses the generic rule
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservedLabel {
    pub id: NodeId,
    pub label: String,
}

impl ReservedLabel {
    pub fn new(id: NodeId, label: impl Into<String>) -> Self {
        Self { id, label: label.into() }
    }
}


/// Bidirectional mapping between numeric node ids and display labels
///
/// The two reserved endpoints are looked up first. Every other id is rendered
/// as `prefix + id`. A label is read back by dropping the prefix, if present,
/// and collecting all the digits that remain, so `node_42` and `x4y2` both
/// decode to 42.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelCodec {
    pub start: ReservedLabel,
    pub target: ReservedLabel,
    pub prefix: String,
}

impl Default for LabelCodec {
    fn default() -> Self {
        Self {
            start: ReservedLabel::new(18, "Erde"),
            target: ReservedLabel::new(246, "b3-r7-r4nd7"),
            prefix: "node_".to_string(),
        }
    }
}

impl LabelCodec {

    pub fn new(start: ReservedLabel, target: ReservedLabel) -> Self {
        Self { start, target, ..Self::default() }
    }

    /// Replace the prefix used for generic labels
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    fn reserved(&self) -> [&ReservedLabel; 2] {
        [&self.start, &self.target]
    }

    /// Id to label, total over all ids
    pub fn to_label(&self, id: NodeId) -> String {
        match self.reserved().into_iter().find(|r| r.id == id) {
            Some(r) => r.label.clone(),
            None => format!("{}{}", self.prefix, id),
        }
    }

    /// Label to id
    /// Fails for a non-reserved label with no digits, or digits that overflow the id type
    pub fn to_id(&self, label: &str) -> Result<NodeId, ConfigError> {
        if let Some(r) = self.reserved().into_iter().find(|r| r.label == label) {
            return Ok(r.id);
        }

        // digits in the prefix are not part of the id
        let body = label.strip_prefix(self.prefix.as_str()).unwrap_or(label);
        let digits: String = body.chars().filter(|c| c.is_ascii_digit()).collect();
        digits
            .parse::<NodeId>()
            .map_err(|_| ConfigError::UnmappedLabel(label.to_string()))
    }

    /// Check that `label` survives label -> id -> label unchanged
    pub fn check_round_trip(&self, label: &str) -> Result<NodeId, ConfigError> {
        let id = self.to_id(label)?;
        let round_trip = self.to_label(id);
        if round_trip != label {
            return Err(ConfigError::LabelNotInvertible {
                label: label.to_string(),
                id,
                round_trip,
            });
        }
        Ok(id)
    }
}
