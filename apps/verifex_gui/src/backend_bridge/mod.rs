//! Backend bridge: command queue from the UI thread to the analysis worker.

pub mod commands;
pub mod runtime;
