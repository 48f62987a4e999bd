//! Plot-friendly JSON snapshots of filled histograms.

use serde::{Deserialize, Serialize};

use crate::histogram::{Axis, Hist1D};

/// Serializable snapshot of a [`Hist1D`], consumed by renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hist1DArtifact {
    /// Histogram name.
    pub name: String,
    /// Axis label for rendering.
    pub x_label: String,
    /// Binning.
    pub axis: Axis,
    /// Sum of weights per bin.
    pub bin_content: Vec<f64>,
    /// Sum of squared weights per bin.
    pub sumw2: Vec<f64>,
    /// Sum of weights below range.
    pub underflow: f64,
    /// Sum of weights at or above range.
    pub overflow: f64,
    /// Number of fill calls.
    pub entries: u64,
}

impl Hist1DArtifact {
    /// Snapshot a filled histogram.
    pub fn from_hist(name: impl Into<String>, x_label: impl Into<String>, hist: &Hist1D) -> Self {
        Self {
            name: name.into(),
            x_label: x_label.into(),
            axis: hist.axis,
            bin_content: hist.bin_content.clone(),
            sumw2: hist.sumw2.clone(),
            underflow: hist.underflow,
            overflow: hist.overflow,
            entries: hist.entries,
        }
    }

    /// Largest bin content (0.0 for an all-empty histogram).
    pub fn max_content(&self) -> f64 {
        self.bin_content.iter().copied().fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_and_round_trip() {
        let mut h = Hist1D::new(Axis::new(16, 0.0, 4.0)).unwrap();
        h.fill(1.0);
        h.fill(5.0);
        let art = Hist1DArtifact::from_hist("pt_spectrum", "pt", &h);
        assert_eq!(art.bin_content[4], 1.0);
        assert_eq!(art.overflow, 1.0);
        assert_eq!(art.entries, 2);
        assert_eq!(art.max_content(), 1.0);

        let text = serde_json::to_string(&art).unwrap();
        let back: Hist1DArtifact = serde_json::from_str(&text).unwrap();
        assert_eq!(back, art);
    }
}
