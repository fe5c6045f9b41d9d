#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/riskframe/riskframe/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod sample;
pub mod synth;

// Re-export main types
pub use grid::{AxisLabels, GridAxis, RiskGrid};
pub use sample::RiskSample;
pub use synth::{BASE_YEAR, Synthesis, synthesize};
