//! Data models.
//!
//! Canonical shapes (`Paper`, `Dataset`, `ToolEnvelope`) use camelCase on the
//! wire to match what agent runtimes and front-ends consume. Provider
//! responses are only typed at the page level (see [`raw`]).

mod dataset;
mod envelope;
mod inputs;
mod paper;
pub mod raw;

pub use dataset::Dataset;
pub use envelope::{Payload, PayloadKind, ToolEnvelope};
pub use inputs::*;
pub use paper::{NetworkPaper, Paper, PaperDetails, SOURCE_SEMANTIC_SCHOLAR, Year};
