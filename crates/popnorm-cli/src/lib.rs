//! CLI library components for the population table normalizer.

pub mod logging;
pub mod present;
