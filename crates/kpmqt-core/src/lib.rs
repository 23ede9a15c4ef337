//! # KPM-QT Core Library
//!
//! A library building the in-memory physical model consumed by linear-scaling
//! quantum transport simulations based on the kernel polynomial method (KPM):
//! Chebyshev polynomial expansion of the time-evolution and Green's-function
//! operators over a disordered tight-binding lattice.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict two-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (the lattice
//!   connectivity table, the bond-aligned electronic structure, the complex state
//!   vector container) and the raw-input surface through which an input source
//!   feeds the model builder.
//!
//! - **[`engine`]: The Logic Core.** This stateful layer assembles the validated
//!   [`Model`](engine::model::Model): parameter validation, the Chebyshev-compatible
//!   energy grid and its rescaling contract, the correlation time axis, and the
//!   seeded random-phase machinery that backs stochastic trace estimation.
//!
//! The Chebyshev propagation engine and the correlation-function accumulators sit
//! on top of this crate as external consumers: they read the finished model arrays
//! and drive [`initialize_state`](engine::model::Model::initialize_state) once per
//! random-vector realization.

pub mod core;
pub mod engine;
