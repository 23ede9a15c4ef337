use serde::Deserialize;

fn default_random_vectors() -> usize {
    1
}

fn default_moments() -> usize {
    1000
}

fn default_energy_max() -> f64 {
    10.0
}

/// Raw scalar configuration as produced by an input source, before validation.
///
/// Defaults follow the reference simulation setup: one random vector, 1000
/// Chebyshev moments, a spectral half-width of 10 energy units. Validation
/// into a usable parameter set happens in `engine::config`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawParameters {
    pub number_of_atoms: usize,
    #[serde(default)]
    pub max_neighbor: usize,
    #[serde(default = "default_random_vectors")]
    pub number_of_random_vectors: usize,
    #[serde(default = "default_moments")]
    pub number_of_moments: usize,
    pub number_of_energy_points: usize,
    #[serde(default = "default_energy_max")]
    pub energy_max: f64,
    #[serde(default)]
    pub calculate_vac: bool,
    #[serde(default)]
    pub calculate_msd: bool,
    #[serde(default)]
    pub number_of_steps_correlation: usize,
    /// Correlation time-axis spacing; required (positive) when VAC/MSD is on.
    #[serde(default)]
    pub time_step: f64,
    #[serde(default)]
    pub random_seed: u64,
}

/// Raw lattice geometry: per-atom adjacency lists, transport-axis coordinates,
/// and the periodic simulation box.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawGeometry {
    /// One neighbor-index list per atom, order-preserved into the pair table.
    pub adjacency: Vec<Vec<usize>>,
    #[serde(default)]
    pub allow_self_loops: bool,
    /// Transport-axis coordinate of each atom.
    pub position: Vec<f64>,
    /// Edge lengths of the periodic cell; the first entry is the transport
    /// axis, and their product is the normalization volume.
    pub box_lengths: Vec<f64>,
}

/// Raw electronic structure: per-bond hopping amplitudes parallel to the
/// adjacency lists, and the on-site potential per atom.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawElectronicStructure {
    pub hopping_real: Vec<Vec<f64>>,
    /// Omitted for real Hamiltonians; defaults to zero on every bond.
    #[serde(default)]
    pub hopping_imag: Option<Vec<Vec<f64>>>,
    pub potential: Vec<f64>,
}

/// The complete raw bundle an input source yields for model construction.
///
/// This is the normative contract between the input side and the model
/// builder; the on-disk format behind it is a collaborator concern.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawModelInput {
    pub parameters: RawParameters,
    pub geometry: RawGeometry,
    pub electronic: RawElectronicStructure,
}
