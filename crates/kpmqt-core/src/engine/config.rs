use crate::core::io::raw::RawParameters;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Parameter '{name}' must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("VAC/MSD accumulation requested but number_of_steps_correlation is 0")]
    MissingCorrelationSteps,

    #[error("VAC/MSD accumulation requested but the correlation time_step is {0}, not positive")]
    InvalidCorrelationSpacing(f64),
}

/// Validated scalar configuration of a transport model.
///
/// Every instance of this struct satisfies the construction contract:
/// positive atom count, at least one random vector and one Chebyshev moment,
/// a positive spectral half-width, at least one energy sample, and a
/// consistent correlation-time request. Obtain one through
/// [`ModelParameters::from_raw`] or [`ModelParametersBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub struct ModelParameters {
    pub number_of_atoms: usize,
    pub max_neighbor: usize,
    pub number_of_random_vectors: usize,
    pub number_of_moments: usize,
    pub number_of_energy_points: usize,
    /// Spectral half-width: the Hamiltonian spectrum is mapped into `[-1, 1]`
    /// by dividing energies by this value.
    pub energy_max: f64,
    pub calculate_vac: bool,
    pub calculate_msd: bool,
    pub number_of_steps_correlation: usize,
    pub time_step: f64,
    pub random_seed: u64,
}

impl ModelParameters {
    /// Validates raw scalar input into a usable parameter set.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first violated rule.
    pub fn from_raw(raw: &RawParameters) -> Result<Self, ConfigError> {
        let parameters = Self {
            number_of_atoms: raw.number_of_atoms,
            max_neighbor: raw.max_neighbor,
            number_of_random_vectors: raw.number_of_random_vectors,
            number_of_moments: raw.number_of_moments,
            number_of_energy_points: raw.number_of_energy_points,
            energy_max: raw.energy_max,
            calculate_vac: raw.calculate_vac,
            calculate_msd: raw.calculate_msd,
            number_of_steps_correlation: raw.number_of_steps_correlation,
            time_step: raw.time_step,
            random_seed: raw.random_seed,
        };
        parameters.validate()?;
        Ok(parameters)
    }

    /// Reports whether a correlation time axis must be built.
    pub fn requires_time(&self) -> bool {
        self.calculate_vac || self.calculate_msd
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_positive_count("number_of_atoms", self.number_of_atoms)?;
        check_positive_count("number_of_random_vectors", self.number_of_random_vectors)?;
        check_positive_count("number_of_moments", self.number_of_moments)?;
        check_positive_count("number_of_energy_points", self.number_of_energy_points)?;

        if !(self.energy_max > 0.0 && self.energy_max.is_finite()) {
            return Err(ConfigError::NonPositive {
                name: "energy_max",
                value: self.energy_max,
            });
        }

        if self.requires_time() {
            if self.number_of_steps_correlation == 0 {
                return Err(ConfigError::MissingCorrelationSteps);
            }
            if !(self.time_step > 0.0 && self.time_step.is_finite()) {
                return Err(ConfigError::InvalidCorrelationSpacing(self.time_step));
            }
        }

        Ok(())
    }
}

fn check_positive_count(name: &'static str, value: usize) -> Result<(), ConfigError> {
    if value == 0 {
        Err(ConfigError::NonPositive {
            name,
            value: 0.0,
        })
    } else {
        Ok(())
    }
}

/// Builder for [`ModelParameters`], for callers constructing models
/// programmatically rather than from an input source.
#[derive(Debug, Default, Clone)]
pub struct ModelParametersBuilder {
    number_of_atoms: Option<usize>,
    max_neighbor: Option<usize>,
    number_of_random_vectors: Option<usize>,
    number_of_moments: Option<usize>,
    number_of_energy_points: Option<usize>,
    energy_max: Option<f64>,
    calculate_vac: Option<bool>,
    calculate_msd: Option<bool>,
    number_of_steps_correlation: Option<usize>,
    time_step: Option<f64>,
    random_seed: Option<u64>,
}

impl ModelParametersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn number_of_atoms(mut self, n: usize) -> Self {
        self.number_of_atoms = Some(n);
        self
    }
    pub fn max_neighbor(mut self, max_neighbor: usize) -> Self {
        self.max_neighbor = Some(max_neighbor);
        self
    }
    pub fn number_of_random_vectors(mut self, n: usize) -> Self {
        self.number_of_random_vectors = Some(n);
        self
    }
    pub fn number_of_moments(mut self, n: usize) -> Self {
        self.number_of_moments = Some(n);
        self
    }
    pub fn number_of_energy_points(mut self, n: usize) -> Self {
        self.number_of_energy_points = Some(n);
        self
    }
    pub fn energy_max(mut self, energy_max: f64) -> Self {
        self.energy_max = Some(energy_max);
        self
    }
    pub fn calculate_vac(mut self, enabled: bool) -> Self {
        self.calculate_vac = Some(enabled);
        self
    }
    pub fn calculate_msd(mut self, enabled: bool) -> Self {
        self.calculate_msd = Some(enabled);
        self
    }
    pub fn number_of_steps_correlation(mut self, steps: usize) -> Self {
        self.number_of_steps_correlation = Some(steps);
        self
    }
    pub fn time_step(mut self, dt: f64) -> Self {
        self.time_step = Some(dt);
        self
    }
    pub fn random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Builds and validates the parameter set.
    ///
    /// Scalars with reference defaults (random vectors, moments, energy_max,
    /// flags, seed) may be omitted; structural scalars (atom count, neighbor
    /// bound, energy point count) must be supplied.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for a missing required scalar or any
    /// violated validation rule.
    pub fn build(self) -> Result<ModelParameters, ConfigError> {
        let parameters = ModelParameters {
            number_of_atoms: self
                .number_of_atoms
                .ok_or(ConfigError::MissingParameter("number_of_atoms"))?,
            max_neighbor: self
                .max_neighbor
                .ok_or(ConfigError::MissingParameter("max_neighbor"))?,
            number_of_random_vectors: self.number_of_random_vectors.unwrap_or(1),
            number_of_moments: self.number_of_moments.unwrap_or(1000),
            number_of_energy_points: self
                .number_of_energy_points
                .ok_or(ConfigError::MissingParameter("number_of_energy_points"))?,
            energy_max: self.energy_max.unwrap_or(10.0),
            calculate_vac: self.calculate_vac.unwrap_or(false),
            calculate_msd: self.calculate_msd.unwrap_or(false),
            number_of_steps_correlation: self.number_of_steps_correlation.unwrap_or(0),
            time_step: self.time_step.unwrap_or(0.0),
            random_seed: self.random_seed.unwrap_or(0),
        };
        parameters.validate()?;
        Ok(parameters)
    }
}
