//! # Input Surface Module
//!
//! This module decouples model construction from any particular on-disk format.
//!
//! The normative surface is [`raw::RawModelInput`]: the bundle of scalars and
//! arrays every input collaborator must produce. The [`traits::ModelSource`]
//! trait is implemented by such collaborators; [`toml_dir`] ships the one most
//! runs use, reading a `model.toml` from an input directory.

pub mod raw;
pub mod toml_dir;
pub mod traits;
