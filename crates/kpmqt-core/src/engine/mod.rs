//! # Engine Module
//!
//! This module assembles the validated physical model a KPM propagation engine
//! consumes, and owns the stateful random-vector machinery behind stochastic
//! trace estimation.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Validated scalar parameters and their builder
//! - **Model Assembly** ([`model`]) - The [`Model`](model::Model) aggregate and its
//!   construction pipeline, run once per simulation lifetime
//! - **Random Phases** ([`random_phase`]) - The seeded phase generator drawn from
//!   once per atom per realization
//! - **Error Handling** ([`error`]) - The umbrella construction error
//!
//! The energy-grid and time-axis derivations are construction internals; their
//! results surface only as the finished model arrays.

pub mod config;
pub(crate) mod energy_grid;
pub mod error;
pub mod model;
pub mod random_phase;
pub(crate) mod time_grid;
