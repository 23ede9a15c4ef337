use crate::core::models::electronic::DataAlignmentError;
use crate::core::models::lattice::{AllocationError, ConnectivityError};
use thiserror::Error;

/// Errors that fail model construction.
///
/// All of these are deterministic structural errors detected during the
/// one-shot build sequence; none are recovered internally, since a partially
/// initialized model is unsafe to hand to the propagation engine.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Invalid model configuration: {source}")]
    Config {
        #[from]
        source: crate::engine::config::ConfigError,
    },

    #[error("Malformed lattice connectivity: {source}")]
    Connectivity {
        #[from]
        source: ConnectivityError,
    },

    #[error("Raw input misaligned with the connectivity table: {source}")]
    Alignment {
        #[from]
        source: DataAlignmentError,
    },

    #[error("Buffer sizing failed: {source}")]
    Allocation {
        #[from]
        source: AllocationError,
    },

    #[error("Failed to load raw model input: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}
