//! Controller layer: UI events, failure classification, and command orchestration.

pub mod events;
pub mod orchestration;
