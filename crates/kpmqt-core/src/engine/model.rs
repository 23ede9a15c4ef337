use super::config::{ConfigError, ModelParameters};
use super::error::ModelError;
use super::random_phase::PhaseGenerator;
use super::{energy_grid, time_grid};
use crate::core::io::raw::RawModelInput;
use crate::core::io::toml_dir::TomlDirectorySource;
use crate::core::io::traits::ModelSource;
use crate::core::models::electronic::{DataAlignmentError, ElectronicStructure};
use crate::core::models::lattice::{Lattice, pair_table_capacity};
use crate::core::models::state::StateVector;
use std::path::Path;
use tracing::instrument;

/// The in-memory physical model consumed by the KPM propagation engine.
///
/// A model is built once per simulation run; the construction pipeline runs
/// parameter validation, connectivity, electronic structure, energy grid, and
/// correlation time axis in dependency order and fails fast on the first
/// violated contract. All arrays are immutable afterwards and exposed
/// read-only; the only public mutation is
/// [`initialize_state`](Model::initialize_state), called once per
/// random-vector realization by a single driving loop.
#[derive(Debug, Clone)]
pub struct Model {
    parameters: ModelParameters,
    lattice: Lattice,
    electronic: ElectronicStructure,
    energy: Vec<f64>,
    time_step: Vec<f64>,
    volume: f64,
    random_state_real: Vec<f64>,
    random_state_imag: Vec<f64>,
    generator: PhaseGenerator,
}

impl Model {
    /// Builds a model from the `model.toml` inside an input directory.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Source`] if the directory cannot be read or
    /// decoded, or any construction error from [`Model::from_raw`].
    pub fn from_input_dir(input_dir: impl AsRef<Path>) -> Result<Self, ModelError> {
        Self::from_source(&TomlDirectorySource::new(input_dir.as_ref()))
    }

    /// Builds a model from any input collaborator.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Source`] if the source fails to produce the raw
    /// bundle, or any construction error from [`Model::from_raw`].
    pub fn from_source<S: ModelSource>(source: &S) -> Result<Self, ModelError> {
        let raw = source
            .load()
            .map_err(|e| ModelError::Source(Box::new(e)))?;
        Self::from_raw(&raw)
    }

    /// Runs the construction pipeline over a raw input bundle.
    ///
    /// # Errors
    ///
    /// Fails with the first violated contract: [`ConfigError`] for scalar
    /// validation, `AllocationError` for pair-table sizing,
    /// `ConnectivityError` for malformed adjacency, and `DataAlignmentError`
    /// for arrays that disagree with the connectivity table. No partially
    /// initialized model is ever returned.
    #[instrument(level = "debug", skip_all)]
    pub fn from_raw(raw: &RawModelInput) -> Result<Self, ModelError> {
        let parameters = ModelParameters::from_raw(&raw.parameters)?;
        let n = parameters.number_of_atoms;

        let pairs = pair_table_capacity(n, parameters.max_neighbor)?;

        let lattice = Lattice::from_adjacency(
            &raw.geometry.adjacency,
            n,
            parameters.max_neighbor,
            raw.geometry.allow_self_loops,
        )?;
        debug_assert_eq!(lattice.number_of_pairs(), pairs);

        validate_box(&raw.geometry.box_lengths)?;
        let transport_box = raw.geometry.box_lengths[0];

        let electronic = ElectronicStructure::build(
            &lattice,
            &raw.electronic.hopping_real,
            raw.electronic.hopping_imag.as_deref(),
            &raw.electronic.potential,
            &raw.geometry.position,
            transport_box,
        )?;

        let energy = energy_grid::build(parameters.number_of_energy_points, parameters.energy_max);
        let volume = energy_grid::volume(&raw.geometry.box_lengths);

        let time_step = if parameters.requires_time() {
            time_grid::build(parameters.number_of_steps_correlation, parameters.time_step)
        } else {
            Vec::new()
        };

        let generator = PhaseGenerator::from_seed(parameters.random_seed);

        tracing::debug!(
            number_of_atoms = n,
            number_of_pairs = pairs,
            volume,
            "model construction complete"
        );

        Ok(Self {
            parameters,
            lattice,
            electronic,
            energy,
            time_step,
            volume,
            random_state_real: vec![0.0; n],
            random_state_imag: vec![0.0; n],
            generator,
        })
    }

    /// Fills a caller-owned state vector with unit-modulus random phases.
    ///
    /// For every atom a phase is drawn uniformly from `[0, 2pi)` and written
    /// as `(cos theta, sin theta)`; the model-owned random-state buffers are
    /// overwritten with the same components. The shared generator advances by
    /// exactly `number_of_atoms` draws, so successive calls yield independent
    /// realizations and never reuse a sub-sequence.
    ///
    /// # Errors
    ///
    /// Returns a `DataAlignmentError` if `state` is not `number_of_atoms`
    /// long; the state is left untouched in that case.
    pub fn initialize_state(&mut self, state: &mut StateVector) -> Result<(), ModelError> {
        let n = self.parameters.number_of_atoms;
        if state.len() != n {
            return Err(DataAlignmentError::LengthMismatch {
                name: "random_state",
                found: state.len(),
                expected: n,
            }
            .into());
        }

        let (real, imag) = state.components_mut();
        for atom in 0..n {
            let theta = self.generator.next_phase();
            let (sin, cos) = theta.sin_cos();
            self.random_state_real[atom] = cos;
            self.random_state_imag[atom] = sin;
            real[atom] = cos;
            imag[atom] = sin;
        }
        Ok(())
    }

    /// Derives an independently seeded phase generator for one realization.
    ///
    /// Intended for drivers that evaluate realizations concurrently instead of
    /// serializing [`initialize_state`](Model::initialize_state) calls.
    pub fn fork_generator(&self, realization: u64) -> PhaseGenerator {
        self.generator.fork(realization)
    }

    /// Returns the validated scalar configuration.
    pub fn parameters(&self) -> &ModelParameters {
        &self.parameters
    }

    /// Returns the number of lattice sites.
    pub fn number_of_atoms(&self) -> usize {
        self.parameters.number_of_atoms
    }

    /// Returns the per-atom connectivity bound.
    pub fn max_neighbor(&self) -> usize {
        self.parameters.max_neighbor
    }

    /// Returns the flattened pair-table capacity, `N * max_neighbor`.
    pub fn number_of_pairs(&self) -> usize {
        self.lattice.number_of_pairs()
    }

    /// Returns the lattice connectivity table.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Returns the bond-aligned electronic structure.
    pub fn electronic(&self) -> &ElectronicStructure {
        &self.electronic
    }

    /// Returns the ascending energy grid over `[-energy_max, energy_max]`.
    pub fn energy(&self) -> &[f64] {
        &self.energy
    }

    /// Returns the correlation time axis; empty unless VAC/MSD is requested.
    pub fn time_step(&self) -> &[f64] {
        &self.time_step
    }

    /// Returns the normalization volume of the periodic cell.
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Returns the components of the most recently initialized random state.
    ///
    /// Zero-filled until the first [`initialize_state`](Model::initialize_state)
    /// call; overwritten on every subsequent one.
    pub fn last_random_state(&self) -> (&[f64], &[f64]) {
        (&self.random_state_real, &self.random_state_imag)
    }
}

fn validate_box(box_lengths: &[f64]) -> Result<(), ConfigError> {
    if box_lengths.is_empty() {
        return Err(ConfigError::MissingParameter("geometry.box_lengths"));
    }
    for &length in box_lengths {
        if !(length > 0.0 && length.is_finite()) {
            return Err(ConfigError::NonPositive {
                name: "box_lengths",
                value: length,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::raw::{RawElectronicStructure, RawGeometry, RawParameters};

    /// Four atoms on a ring (0-1, 1-2, 2-3, 3-0) with uniform hopping.
    fn ring_input() -> RawModelInput {
        RawModelInput {
            parameters: RawParameters {
                number_of_atoms: 4,
                max_neighbor: 2,
                number_of_random_vectors: 2,
                number_of_moments: 1000,
                number_of_energy_points: 5,
                energy_max: 10.0,
                calculate_vac: false,
                calculate_msd: false,
                number_of_steps_correlation: 0,
                time_step: 0.0,
                random_seed: 0,
            },
            geometry: RawGeometry {
                adjacency: vec![vec![1, 3], vec![0, 2], vec![1, 3], vec![2, 0]],
                allow_self_loops: false,
                position: vec![0.0, 1.0, 2.0, 3.0],
                box_lengths: vec![4.0],
            },
            electronic: RawElectronicStructure {
                hopping_real: vec![vec![-1.0; 2]; 4],
                hopping_imag: None,
                potential: vec![0.0; 4],
            },
        }
    }

    mod construction {
        use super::*;

        #[test]
        fn ring_model_builds_all_derived_quantities() {
            let model = Model::from_raw(&ring_input()).unwrap();

            assert_eq!(model.number_of_atoms(), 4);
            assert_eq!(model.max_neighbor(), 2);
            assert_eq!(model.number_of_pairs(), 8);
            assert_eq!(model.lattice().neighbor_number(), &[2, 2, 2, 2]);
            assert_eq!(model.lattice().neighbors(0), &[1, 3]);
            assert_eq!(model.lattice().neighbors(3), &[2, 0]);
            assert_eq!(model.energy(), &[-10.0, -5.0, 0.0, 5.0, 10.0]);
            assert_eq!(model.volume(), 4.0);
            assert!(model.time_step().is_empty());
        }

        #[test]
        fn hopping_slots_are_populated_exactly_where_neighbors_are_valid() {
            let mut input = ring_input();
            input.geometry.adjacency = vec![vec![1, 3], vec![0], vec![3], vec![2, 0]];
            input.electronic.hopping_real =
                vec![vec![-1.0, -1.0], vec![-1.0], vec![-1.0], vec![-1.0, -1.0]];

            let model = Model::from_raw(&input).unwrap();
            let lattice = model.lattice();
            let hopping = model.electronic().hopping_real();

            for slot in 0..model.number_of_pairs() {
                if lattice.is_valid_slot(slot) {
                    assert_eq!(hopping[slot], -1.0);
                } else {
                    assert_eq!(hopping[slot], 0.0);
                }
            }
        }

        #[test]
        fn energy_grid_is_ascending_and_bounded() {
            let mut input = ring_input();
            input.parameters.number_of_energy_points = 33;
            input.parameters.energy_max = 4.2;

            let model = Model::from_raw(&input).unwrap();
            let energy = model.energy();

            assert_eq!(energy.len(), 33);
            assert!(energy.windows(2).all(|w| w[0] < w[1]));
            assert!(energy.iter().all(|&e| e.abs() <= 4.2 + 1e-12));
        }

        #[test]
        fn correlation_axis_is_built_only_on_request() {
            let mut input = ring_input();
            input.parameters.calculate_msd = true;
            input.parameters.number_of_steps_correlation = 3;
            input.parameters.time_step = 0.5;

            let model = Model::from_raw(&input).unwrap();
            assert_eq!(model.time_step(), &[0.5, 1.0, 1.5]);
        }

        #[test]
        fn vac_with_zero_correlation_steps_fails_as_config_error() {
            let mut input = ring_input();
            input.parameters.calculate_vac = true;
            input.parameters.number_of_steps_correlation = 0;
            input.parameters.time_step = 0.5;

            let err = Model::from_raw(&input).unwrap_err();
            assert!(matches!(
                err,
                ModelError::Config {
                    source: ConfigError::MissingCorrelationSteps
                }
            ));
        }

        #[test]
        fn malformed_adjacency_fails_as_connectivity_error() {
            let mut input = ring_input();
            input.geometry.adjacency[1] = vec![0, 9];

            let err = Model::from_raw(&input).unwrap_err();
            assert!(matches!(err, ModelError::Connectivity { .. }));
        }

        #[test]
        fn misaligned_hopping_fails_as_alignment_error() {
            let mut input = ring_input();
            input.electronic.hopping_real[2] = vec![-1.0];

            let err = Model::from_raw(&input).unwrap_err();
            assert!(matches!(err, ModelError::Alignment { .. }));
        }

        #[test]
        fn degenerate_box_fails_as_config_error() {
            let mut input = ring_input();
            input.geometry.box_lengths = vec![4.0, 0.0];

            let err = Model::from_raw(&input).unwrap_err();
            assert!(matches!(err, ModelError::Config { .. }));
        }

        #[test]
        fn construction_is_deterministic_for_identical_input() {
            let a = Model::from_raw(&ring_input()).unwrap();
            let b = Model::from_raw(&ring_input()).unwrap();

            assert_eq!(a.energy(), b.energy());
            assert_eq!(a.electronic().xx(), b.electronic().xx());
            assert_eq!(a.lattice().neighbor_list(), b.lattice().neighbor_list());
        }
    }

    mod random_states {
        use super::*;

        #[test]
        fn initialize_state_fills_unit_modulus_phases() {
            let mut model = Model::from_raw(&ring_input()).unwrap();
            let mut state = StateVector::zeros(4);
            model.initialize_state(&mut state).unwrap();

            for atom in 0..4 {
                let modulus = state.real()[atom].powi(2) + state.imag()[atom].powi(2);
                assert!((modulus - 1.0).abs() < 1e-12);
            }
        }

        #[test]
        fn model_buffers_mirror_the_caller_state() {
            let mut model = Model::from_raw(&ring_input()).unwrap();
            let mut state = StateVector::zeros(4);
            model.initialize_state(&mut state).unwrap();

            let (real, imag) = model.last_random_state();
            assert_eq!(real, state.real());
            assert_eq!(imag, state.imag());
        }

        #[test]
        fn successive_realizations_are_distinct() {
            let mut model = Model::from_raw(&ring_input()).unwrap();
            let mut first = StateVector::zeros(4);
            let mut second = StateVector::zeros(4);

            model.initialize_state(&mut first).unwrap();
            model.initialize_state(&mut second).unwrap();

            assert_ne!(first, second);
        }

        #[test]
        fn realizations_are_reproducible_per_seed() {
            let mut input = ring_input();
            input.parameters.random_seed = 77;

            let mut a = Model::from_raw(&input).unwrap();
            let mut b = Model::from_raw(&input).unwrap();
            let mut state_a = StateVector::zeros(4);
            let mut state_b = StateVector::zeros(4);

            a.initialize_state(&mut state_a).unwrap();
            b.initialize_state(&mut state_b).unwrap();

            assert_eq!(state_a, state_b);
        }

        #[test]
        fn wrong_state_length_is_rejected_without_a_partial_write() {
            let mut model = Model::from_raw(&ring_input()).unwrap();
            let mut state = StateVector::zeros(3);

            let err = model.initialize_state(&mut state).unwrap_err();
            assert!(matches!(err, ModelError::Alignment { .. }));
            assert_eq!(state.real(), &[0.0; 3]);
            assert_eq!(state.imag(), &[0.0; 3]);
        }

        #[test]
        fn forked_generators_are_decoupled_from_the_serial_sequence() {
            let model = Model::from_raw(&ring_input()).unwrap();
            let mut fork = model.fork_generator(0);
            let mut serial = Model::from_raw(&ring_input()).unwrap();
            let mut state = StateVector::zeros(4);
            serial.initialize_state(&mut state).unwrap();

            let forked: Vec<f64> = (0..4).map(|_| fork.next_phase()).collect();
            let serial_phases: Vec<f64> = state
                .real()
                .iter()
                .zip(state.imag())
                .map(|(&re, &im)| im.atan2(re))
                .collect();

            assert_ne!(forked, serial_phases);
        }
    }
}
