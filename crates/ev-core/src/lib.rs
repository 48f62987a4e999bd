//! # ev-core
//!
//! Columnar event storage, candidate selection, and histogram filling.
//!
//! Events are sets of equal-length numeric sequences (one value per
//! candidate). A selection keeps candidates above a strict energy cut, a
//! transform computes the transverse momentum `sqrt(px^2 + py^2)`, and a
//! fixed-range histogram accumulates the result. The same computation is
//! available through four engines — an explicit event loop, vectorized
//! column operations, and a lazy frame pipeline driven by closures or by
//! compiled string expressions — which produce bit-identical histograms
//! on identical input.
//!
//! ## Example
//!
//! ```
//! use ev_core::spectrum::{SpectrumConfig, fill_event_loop, fill_frame_expr};
//! use ev_core::toy::{ToyConfig, generate};
//!
//! let data = generate(&ToyConfig { events: 200, ..Default::default() }).unwrap();
//! let store = data.to_store().unwrap();
//! let cfg = SpectrumConfig::default();
//!
//! let a = fill_event_loop(&store, &cfg).unwrap();
//! let b = fill_frame_expr(&store, &cfg).unwrap();
//! assert_eq!(a, b);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod artifact;
pub mod column;
pub mod dataset;
pub mod error;
pub mod event;
pub mod expr;
pub mod frame;
pub mod histogram;
pub mod spectrum;
pub mod toy;

pub use artifact::Hist1DArtifact;
pub use column::JaggedColumn;
pub use dataset::{Dataset, EventRecord};
pub use error::{Error, Result};
pub use event::{Candidate, EventStore};
pub use expr::CompiledExpr;
pub use frame::Frame;
pub use histogram::{Axis, BinId, FlowPolicy, Hist1D};
pub use spectrum::{
    SpectrumConfig, fill_columnar, fill_event_loop, fill_frame, fill_frame_expr,
};
