//! # Core Models Module
//!
//! This module contains the fundamental data structures used to represent a
//! disordered lattice and its electronic structure in KPM-QT.
//!
//! ## Key Components
//!
//! - [`lattice`] - Per-atom neighbor counts and the flattened fixed-stride
//!   adjacency table, with bounds-checked slot accessors
//! - [`electronic`] - Complex hopping amplitudes, on-site potential, and bond
//!   displacements aligned to the adjacency slots
//! - [`state`] - The caller-owned complex state vector filled once per
//!   random-vector realization
//!
//! All three are immutable after construction; mutation of a [`state::StateVector`]
//! happens only through the model's `initialize_state` entry point.

pub mod electronic;
pub mod lattice;
pub mod state;
