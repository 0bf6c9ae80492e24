use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Context as _;

use crate::error::{RelatoError, RelatoResult};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Layer {
    pub id: String, // unique, numeric-sortable as string
    pub title: String,
    #[serde(default)]
    pub body: Vec<String>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Shift {
    pub id: String, // unique, numeric-sortable as string
    pub layer_id: String,
    pub title: String,
    #[serde(default)]
    pub body: Vec<String>,
}

/// Source content for one report: ordered layers plus the shifts that
/// belong to them. Loaded once and never mutated for the session.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ContentModel {
    pub layers: Vec<Layer>,
    pub shifts: Vec<Shift>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl ContentModel {
    pub fn from_json(s: &str) -> RelatoResult<Self> {
        let model: Self = serde_json::from_str(s).map_err(|e| RelatoError::serde(e.to_string()))?;
        model.validate()?;
        Ok(model)
    }

    pub fn from_path(path: impl AsRef<Path>) -> RelatoResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read content model '{}'", path.display()))?;
        Self::from_json(&s)
    }

    pub fn validate(&self) -> RelatoResult<()> {
        let mut layer_ids = BTreeSet::new();
        for layer in &self.layers {
            if layer.id.trim().is_empty() {
                return Err(RelatoError::validation("layer id must be non-empty"));
            }
            if layer.title.trim().is_empty() {
                return Err(RelatoError::validation(format!(
                    "layer '{}' has an empty title",
                    layer.id
                )));
            }
            if !layer_ids.insert(layer.id.as_str()) {
                return Err(RelatoError::validation(format!(
                    "duplicate layer id '{}'",
                    layer.id
                )));
            }
        }

        let mut shift_ids = BTreeSet::new();
        for shift in &self.shifts {
            if shift.id.trim().is_empty() {
                return Err(RelatoError::validation("shift id must be non-empty"));
            }
            if shift.title.trim().is_empty() {
                return Err(RelatoError::validation(format!(
                    "shift '{}' has an empty title",
                    shift.id
                )));
            }
            if !shift_ids.insert(shift.id.as_str()) {
                return Err(RelatoError::validation(format!(
                    "duplicate shift id '{}'",
                    shift.id
                )));
            }
        }

        // A shift pointing at a missing layer is not an error: it is dropped
        // from the built timeline and surfaced via `orphan_shifts`.
        Ok(())
    }

    /// Shifts whose `layer_id` matches no layer. These never appear in a
    /// built timeline.
    pub fn orphan_shifts(&self) -> Vec<&Shift> {
        self.shifts
            .iter()
            .filter(|s| !self.layers.iter().any(|l| l.id == s.layer_id))
            .collect()
    }
}
