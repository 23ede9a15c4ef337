//! # Core Module
//!
//! This module provides the fundamental building blocks for representing a
//! disordered tight-binding lattice in KPM-QT, serving as the data foundation
//! of the library.
//!
//! ## Overview
//!
//! The core module implements the stateless data structures a quantum transport
//! model is assembled from, together with the raw-input surface that decouples
//! the model builder from any particular on-disk format.
//!
//! ## Architecture
//!
//! - **Lattice Representation** ([`models`]) - Fixed-stride neighbor tables,
//!   bond-aligned hopping/potential arrays, and the complex state vector container
//! - **Input Surface** ([`io`]) - The raw scalar/array bundle produced by an input
//!   source, the [`ModelSource`](io::traits::ModelSource) collaborator trait, and a
//!   TOML-backed directory source

pub mod io;
pub mod models;
