//! Client core for the Verifex analysis service: request lifecycle, report
//! rendering, transport and settings shared by the CLI and the desktop GUI.

pub mod config;
pub mod controller;
pub mod error;
pub mod render;
pub mod transport;

pub use config::{load_settings, ClientSettings};
pub use controller::{
    Completion, Generation, RequestController, RequestState, Resolution, Submission,
};
pub use error::AnalyzeError;
pub use render::{render, InvariantItem, ReportView, ResultView};
pub use transport::{AnalysisTransport, HttpAnalysisClient};

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod transport_tests;
