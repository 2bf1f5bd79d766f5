//! ACO configuration.

use crate::error::{AcoError, Result};
use crate::geo::Metric;

/// Configuration for the Ant Colony Optimization solver.
///
/// # Defaults
///
/// ```
/// use u_antroute::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.n_ants, 50);
/// assert_eq!(config.n_iterations, 1000);
/// assert!((config.q0 - 0.9).abs() < 1e-12);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_antroute::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_ants(20)
///     .with_iterations(200)
///     .with_rho(0.3)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AcoConfig {
    /// Number of ants constructing a tour each iteration.
    pub n_ants: usize,

    /// Number of iterations to run. Every iteration runs all ants.
    pub n_iterations: usize,

    /// Exponent on the pheromone trail. Higher values follow trails harder.
    pub alpha: f64,

    /// Exponent on inverse distance. Higher values favour nearby stops.
    pub beta: f64,

    /// Evaporation rate in `[0, 1]`.
    ///
    /// `0` keeps every trail forever; `1` wipes all trails each iteration
    /// so only the latest deposits remain.
    pub rho: f64,

    /// Exploitation probability in `[0, 1]`.
    ///
    /// With probability `q0` an ant takes the best-scoring next stop;
    /// otherwise it samples one in proportion to the scores.
    pub q0: f64,

    /// Distance metric used when building the matrix from locations.
    pub metric: Metric,

    /// Whether to construct the ants' tours in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            n_ants: 50,
            n_iterations: 1000,
            alpha: 1.0,
            beta: 2.0,
            rho: 0.5,
            q0: 0.9,
            metric: Metric::default(),
            parallel: false,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Sets the number of ants per iteration.
    pub fn with_ants(mut self, n: usize) -> Self {
        self.n_ants = n;
        self
    }

    /// Sets the number of iterations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.n_iterations = n;
        self
    }

    /// Sets the pheromone exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the inverse-distance exponent.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the evaporation rate.
    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    /// Sets the exploitation probability.
    pub fn with_q0(mut self, q0: f64) -> Self {
        self.q0 = q0;
        self
    }

    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Enables or disables parallel tour construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.n_ants == 0 {
            return Err(AcoError::InvalidConfig("n_ants must be at least 1".into()));
        }
        if self.n_iterations == 0 {
            return Err(AcoError::InvalidConfig(
                "n_iterations must be at least 1".into(),
            ));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(AcoError::InvalidConfig(format!(
                "alpha must be a non-negative number, got {}",
                self.alpha
            )));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(AcoError::InvalidConfig(format!(
                "beta must be a non-negative number, got {}",
                self.beta
            )));
        }
        if !(0.0..=1.0).contains(&self.rho) {
            return Err(AcoError::InvalidConfig(format!(
                "rho must be in [0, 1], got {}",
                self.rho
            )));
        }
        if !(0.0..=1.0).contains(&self.q0) {
            return Err(AcoError::InvalidConfig(format!(
                "q0 must be in [0, 1], got {}",
                self.q0
            )));
        }
        Ok(())
    }
}
