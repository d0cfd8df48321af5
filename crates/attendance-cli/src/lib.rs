//! CLI library components for the attendance normalizer.

pub mod logging;
pub mod pipeline;
