//! Named event columns and per-candidate views.

use std::collections::HashMap;

use crate::column::JaggedColumn;
use crate::error::{Error, Result};

/// A set of named jagged columns with a uniform event count.
///
/// Columns are independent per-event sequences; candidate-level access
/// (index `i` across several columns of the same event) is validated at
/// read time via [`EventStore::candidate_slices`].
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    n_events: Option<usize>,
    columns: HashMap<String, JaggedColumn>,
}

impl EventStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a named column.
    ///
    /// The first insert pins the store's event count; later columns must
    /// match it. Duplicate names are rejected.
    pub fn insert(&mut self, name: impl Into<String>, column: JaggedColumn) -> Result<()> {
        let name = name.into();
        if self.columns.contains_key(&name) {
            return Err(Error::Column(format!("duplicate column '{name}'")));
        }
        match self.n_events {
            None => self.n_events = Some(column.n_events()),
            Some(n) if n != column.n_events() => {
                return Err(Error::Column(format!(
                    "column '{name}' has {} events, store has {n}",
                    column.n_events()
                )));
            }
            Some(_) => {}
        }
        self.columns.insert(name, column);
        Ok(())
    }

    /// Number of events (0 for an empty store).
    pub fn n_events(&self) -> usize {
        self.n_events.unwrap_or(0)
    }

    /// Whether a column with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Result<&JaggedColumn> {
        self.columns
            .get(name)
            .ok_or_else(|| Error::Column(format!("unknown column '{name}'")))
    }

    /// All column names, sorted.
    pub fn column_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.columns.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Per-candidate slices of the named columns for one event.
    ///
    /// All referenced columns must have the same number of values for this
    /// event; a ragged event yields [`Error::LengthMismatch`].
    ///
    /// Panics if `event >= n_events()`.
    pub fn candidate_slices(&self, event: usize, names: &[&str]) -> Result<Vec<&[f64]>> {
        let mut slices = Vec::with_capacity(names.len());
        let mut expected = None;
        for name in names {
            let vals = self.column(name)?.values(event);
            match expected {
                None => expected = Some(vals.len()),
                Some(n) if n != vals.len() => {
                    return Err(Error::LengthMismatch {
                        column: (*name).to_string(),
                        event,
                        expected: n,
                        got: vals.len(),
                    });
                }
                Some(_) => {}
            }
            slices.push(vals);
        }
        Ok(slices)
    }
}

/// One candidate's kinematics: energy and transverse momentum components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Energy.
    pub e: f64,
    /// x-momentum.
    pub px: f64,
    /// y-momentum.
    pub py: f64,
}

impl Candidate {
    /// Transverse momentum, `sqrt(px^2 + py^2)`.
    pub fn pt(&self) -> f64 {
        (self.px * self.px + self.py * self.py).sqrt()
    }

    /// Whether the candidate passes a strict energy cut.
    pub fn passes(&self, energy_min: f64) -> bool {
        self.e > energy_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(name: &str, events: &[&[f64]]) -> EventStore {
        let mut store = EventStore::new();
        store.insert(name, JaggedColumn::from_events(events)).unwrap();
        store
    }

    #[test]
    fn insert_pins_event_count() {
        let mut store = store_with("a", &[&[1.0], &[2.0, 3.0]]);
        assert_eq!(store.n_events(), 2);

        let err = store.insert("b", JaggedColumn::from_events([vec![1.0]])).unwrap_err();
        assert!(matches!(err, Error::Column(_)));
    }

    #[test]
    fn duplicate_column_rejected() {
        let mut store = store_with("a", &[&[1.0]]);
        let err = store.insert("a", JaggedColumn::from_events([vec![2.0]])).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn candidate_slices_checks_lengths() {
        let mut store = store_with("e", &[&[150.0, 50.0]]);
        store.insert("px", JaggedColumn::from_events([vec![3.0]])).unwrap();

        let err = store.candidate_slices(0, &["e", "px"]).unwrap_err();
        match err {
            Error::LengthMismatch { column, event, expected, got } => {
                assert_eq!(column, "px");
                assert_eq!(event, 0);
                assert_eq!(expected, 2);
                assert_eq!(got, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn candidate_pt() {
        let cand = Candidate { e: 150.0, px: 3.0, py: 4.0 };
        assert_eq!(cand.pt(), 5.0);
        assert!(cand.passes(100.0));
        assert!(!Candidate { e: 100.0, px: 0.0, py: 0.0 }.passes(100.0));
    }
}
