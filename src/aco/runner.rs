//! Solver driver: runs the colony for the full iteration budget.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use super::colony::Colony;
use super::config::AcoConfig;
use super::types::Tour;
use crate::error::{AcoError, Result};
use crate::geo::{DistanceMatrix, Location};

/// Result of an ACO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// Best closed tour found, starting and ending at the start index.
    pub tour: Tour,

    /// Length of `tour` (same as `tour.distance`).
    pub distance: f64,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Iteration (1-based) in which the best tour was first found.
    pub best_iteration: usize,

    /// Best distance after each iteration. Non-increasing.
    pub distance_history: Vec<f64>,
}

/// Executes Ant Colony Optimization.
///
/// # Usage
///
/// ```
/// use u_antroute::aco::{AcoConfig, AcoRunner};
/// use u_antroute::geo::{DistanceMatrix, Location, Metric};
///
/// let locations = vec![
///     Location::new(0.0, 0.0, "a"),
///     Location::new(0.0, 1.0, "b"),
///     Location::new(1.0, 1.0, "c"),
///     Location::new(1.0, 0.0, "d"),
/// ];
/// let distances = DistanceMatrix::from_locations(&locations, Metric::Euclidean);
/// let config = AcoConfig::default().with_ants(10).with_iterations(20).with_seed(42);
///
/// let result = AcoRunner::run(&distances, 0, &config).unwrap();
/// assert!((result.distance - 4.0).abs() < 1e-9);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs ACO on a pre-built distance matrix.
    ///
    /// # Errors
    ///
    /// Fails before any iteration if the config is invalid, the matrix has
    /// fewer than 2 locations, or `start` is out of range.
    pub fn run(distances: &DistanceMatrix, start: usize, config: &AcoConfig) -> Result<AcoResult> {
        config.validate()?;
        check_inputs(distances.len(), start)?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        info!(
            locations = distances.len(),
            start,
            ants = config.n_ants,
            iterations = config.n_iterations,
            "starting ant colony run"
        );

        let mut colony = Colony::new(distances, start, config);
        let mut distance_history = Vec::with_capacity(config.n_iterations);
        let mut best_iteration = 0;

        for iteration in 1..=config.n_iterations {
            let before = colony.best().distance();
            colony.run_iteration(&mut rng);
            let best_distance = colony.best().distance();

            if best_iteration == 0 || best_distance < before {
                best_iteration = iteration;
            }
            distance_history.push(best_distance);

            debug!(
                iteration,
                total = config.n_iterations,
                best_distance,
                "iteration complete"
            );
        }

        let tour = colony
            .into_best()
            .into_tour()
            .expect("every iteration constructs at least one tour");

        info!(
            distance = tour.distance,
            best_iteration, "ant colony run finished"
        );

        Ok(AcoResult {
            distance: tour.distance,
            tour,
            iterations: config.n_iterations,
            best_iteration,
            distance_history,
        })
    }
}

/// Builds the distance matrix from `locations` with `config.metric` and
/// runs ACO from `start_index`.
///
/// # Errors
///
/// Same as [`AcoRunner::run`]; the location count and start index are
/// checked before the matrix is built.
pub fn solve(locations: &[Location], start_index: usize, config: &AcoConfig) -> Result<AcoResult> {
    config.validate()?;
    check_inputs(locations.len(), start_index)?;

    let distances = DistanceMatrix::from_locations(locations, config.metric);
    AcoRunner::run(&distances, start_index, config)
}

fn check_inputs(len: usize, start: usize) -> Result<()> {
    if len < 2 {
        return Err(AcoError::TooFewLocations(len));
    }
    if start >= len {
        return Err(AcoError::StartOutOfRange { start, len });
    }
    Ok(())
}
