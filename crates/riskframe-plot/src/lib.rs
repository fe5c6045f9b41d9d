#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/riskframe/riskframe/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod style;
pub mod wireframe;

// Re-export main types
pub use error::{PlotError, Result};
pub use wireframe::{render_svg, render_svg_string};
