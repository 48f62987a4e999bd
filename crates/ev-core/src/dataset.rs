//! JSON dataset exchange: per-event energy and momentum sequences.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::column::JaggedColumn;
use crate::error::{Error, Result};
use crate::event::EventStore;

/// One event: three parallel candidate sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Candidate energies.
    #[serde(rename = "E")]
    pub energy: Vec<f64>,
    /// Candidate x-momenta.
    pub px: Vec<f64>,
    /// Candidate y-momenta.
    pub py: Vec<f64>,
}

/// A full dataset: an ordered list of events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Events in processing order.
    pub events: Vec<EventRecord>,
}

impl Dataset {
    /// Number of events.
    pub fn n_events(&self) -> usize {
        self.events.len()
    }

    /// Read a dataset from a JSON file.
    pub fn read_json(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Write the dataset to a JSON file.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let text = serde_json::to_string(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Convert to an [`EventStore`] with columns `E`, `px`, `py`.
    ///
    /// Each record's three sequences must have equal length; a ragged
    /// record yields [`Error::LengthMismatch`].
    pub fn to_store(&self) -> Result<EventStore> {
        let mut energy = JaggedColumn::new();
        let mut px = JaggedColumn::new();
        let mut py = JaggedColumn::new();
        for (event, record) in self.events.iter().enumerate() {
            let expected = record.energy.len();
            for (column, len) in [("px", record.px.len()), ("py", record.py.len())] {
                if len != expected {
                    return Err(Error::LengthMismatch {
                        column: column.to_string(),
                        event,
                        expected,
                        got: len,
                    });
                }
            }
            energy.push_event(&record.energy);
            px.push_event(&record.px);
            py.push_event(&record.py);
        }

        let mut store = EventStore::new();
        store.insert("E", energy)?;
        store.insert("px", px)?;
        store.insert("py", py)?;
        Ok(store)
    }
}
