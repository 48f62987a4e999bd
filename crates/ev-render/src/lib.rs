//! # ev-render
//!
//! Rendering of [`ev_core::Hist1DArtifact`] snapshots to SVG documents
//! and terminal text.

pub mod canvas;
pub mod config;
pub mod plot;
pub mod primitives;
pub mod text;

use std::path::Path;

use ev_core::Hist1DArtifact;
use thiserror::Error;

pub use config::RenderConfig;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("artifact error: {0}")]
    Artifact(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// Parse a histogram artifact from JSON text.
pub fn artifact_from_json(text: &str) -> Result<Hist1DArtifact> {
    Ok(serde_json::from_str(text)?)
}

/// Render an artifact to an SVG string.
pub fn render_svg(artifact: &Hist1DArtifact, config: &RenderConfig) -> Result<String> {
    plot::render(artifact, config)
}

/// Render an artifact as a terminal bar chart.
pub fn render_text(artifact: &Hist1DArtifact, bar_width: usize) -> String {
    text::render(artifact, bar_width)
}

/// Render an artifact to a file; `.svg` produces SVG, anything else text.
pub fn render_to_file(
    artifact: &Hist1DArtifact,
    path: &Path,
    config: &RenderConfig,
) -> Result<()> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let contents = match ext {
        "svg" => render_svg(artifact, config)?,
        _ => render_text(artifact, 48),
    };
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ev_core::{Axis, Hist1D};

    #[test]
    fn artifact_json_round_trip() {
        let mut h = Hist1D::new(Axis::new(4, 0.0, 2.0)).unwrap();
        h.fill(0.5);
        let art = Hist1DArtifact::from_hist("h", "x", &h);
        let text = serde_json::to_string(&art).unwrap();
        let back = artifact_from_json(&text).unwrap();
        assert_eq!(back, art);
    }

    #[test]
    fn bad_json_is_a_render_error() {
        assert!(matches!(artifact_from_json("{"), Err(RenderError::Deserialize(_))));
    }
}
