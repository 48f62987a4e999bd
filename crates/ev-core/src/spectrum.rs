//! The transverse-momentum spectrum, filled by four interchangeable
//! engines.
//!
//! All engines walk events in order and candidates in index order, apply
//! the same strict energy cut, and compute `pt` with the same floating
//! point operation order, so identical input produces bit-identical
//! histograms regardless of engine.

use crate::error::Result;
use crate::event::{Candidate, EventStore};
use crate::frame::Frame;
use crate::histogram::{Axis, FlowPolicy, Hist1D};

/// Configuration for the pt spectrum: column bindings, selection, binning.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumConfig {
    /// Name of the energy column.
    pub energy_column: String,
    /// Name of the x-momentum column.
    pub px_column: String,
    /// Name of the y-momentum column.
    pub py_column: String,
    /// Strict lower energy cut: candidates pass when `E > energy_min`.
    pub energy_min: f64,
    /// Histogram binning.
    pub axis: Axis,
    /// Under/overflow policy.
    pub flow_policy: FlowPolicy,
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        Self {
            energy_column: "E".into(),
            px_column: "px".into(),
            py_column: "py".into(),
            energy_min: 100.0,
            axis: Axis::new(16, 0.0, 4.0),
            flow_policy: FlowPolicy::Drop,
        }
    }
}

/// Fill via an explicit per-event, per-candidate loop.
pub fn fill_event_loop(store: &EventStore, cfg: &SpectrumConfig) -> Result<Hist1D> {
    let mut hist = Hist1D::with_policy(cfg.axis, cfg.flow_policy)?;
    let names =
        [cfg.energy_column.as_str(), cfg.px_column.as_str(), cfg.py_column.as_str()];
    for event in 0..store.n_events() {
        let slices = store.candidate_slices(event, &names)?;
        let (e, px, py) = (slices[0], slices[1], slices[2]);
        for i in 0..e.len() {
            let candidate = Candidate { e: e[i], px: px[i], py: py[i] };
            if candidate.passes(cfg.energy_min) {
                hist.fill(candidate.pt());
            }
        }
    }
    Ok(hist)
}

/// Fill via vectorized filter/map over the flat column storage.
pub fn fill_columnar(store: &EventStore, cfg: &SpectrumConfig) -> Result<Hist1D> {
    let mut hist = Hist1D::with_policy(cfg.axis, cfg.flow_policy)?;
    let names =
        [cfg.energy_column.as_str(), cfg.px_column.as_str(), cfg.py_column.as_str()];
    for event in 0..store.n_events() {
        let slices = store.candidate_slices(event, &names)?;
        let (e, px, py) = (slices[0], slices[1], slices[2]);
        let pts = e
            .iter()
            .copied()
            .zip(px.iter().copied())
            .zip(py.iter().copied())
            .filter(|&((energy, _), _)| energy > cfg.energy_min)
            .map(|((_, x), y)| (x * x + y * y).sqrt());
        for pt in pts {
            hist.fill(pt);
        }
    }
    Ok(hist)
}

/// Fill via the frame pipeline with closure-based stages.
pub fn fill_frame(store: &EventStore, cfg: &SpectrumConfig) -> Result<Hist1D> {
    let energy_min = cfg.energy_min;
    Frame::new(store)
        .filter(&[&cfg.energy_column], move |v| v[0] > energy_min)
        .define("pt", &[&cfg.px_column, &cfg.py_column], |v| {
            (v[0] * v[0] + v[1] * v[1]).sqrt()
        })
        .histo1d_with_policy(cfg.axis, cfg.flow_policy, "pt")
}

/// Fill via the frame pipeline with compiled string expressions.
pub fn fill_frame_expr(store: &EventStore, cfg: &SpectrumConfig) -> Result<Hist1D> {
    let selection = format!("{} > {}", cfg.energy_column, cfg.energy_min);
    let pt = format!(
        "sqrt({px} * {px} + {py} * {py})",
        px = cfg.px_column,
        py = cfg.py_column
    );
    Frame::new(store)
        .filter_expr(&selection)?
        .define_expr("pt", &pt)?
        .histo1d_with_policy(cfg.axis, cfg.flow_policy, "pt")
}
