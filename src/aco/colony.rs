//! One colony iteration at a time.
//!
//! Every ant of an iteration reads the same frozen pheromone snapshot.
//! Evaporation and deposits are applied only after all ants have finished,
//! whether they ran sequentially or in parallel.

use rand::Rng;
#[cfg(feature = "parallel")]
use rand::{rngs::StdRng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::trace;

use super::ant::construct_route;
use super::config::AcoConfig;
use super::pheromone::PheromoneField;
use super::types::{BestTour, Tour};
use crate::geo::DistanceMatrix;

/// Colony state for a single run: the pheromone field and the best tour.
///
/// The distance matrix and start index stay fixed for the colony's
/// lifetime; the pheromone field is reused from one iteration to the next.
pub struct Colony<'a> {
    distances: &'a DistanceMatrix,
    start: usize,
    config: &'a AcoConfig,
    pheromone: PheromoneField,
    best: BestTour,
}

impl<'a> Colony<'a> {
    /// Creates a colony with uniform trails and no best tour.
    ///
    /// Inputs are not validated here; [`AcoRunner`](super::AcoRunner) checks
    /// them before building a colony.
    pub fn new(distances: &'a DistanceMatrix, start: usize, config: &'a AcoConfig) -> Self {
        Self {
            distances,
            start,
            config,
            pheromone: PheromoneField::new(distances.len()),
            best: BestTour::new(),
        }
    }

    pub fn pheromone(&self) -> &PheromoneField {
        &self.pheromone
    }

    pub fn best(&self) -> &BestTour {
        &self.best
    }

    pub fn into_best(self) -> BestTour {
        self.best
    }

    /// Runs one iteration and returns every ant's tour, in ant order.
    ///
    /// 1. All `n_ants` ants construct a tour against the current trails
    /// 2. Any tour strictly shorter than the best so far replaces it
    /// 3. Trails evaporate by `rho`
    /// 4. Each tour deposits `1 / distance` on each of its edges
    pub fn run_iteration<R: Rng>(&mut self, rng: &mut R) -> Vec<Tour> {
        let tours = self.construct_tours(rng);

        for tour in &tours {
            if self.best.offer(tour) {
                trace!(distance = tour.distance, path = ?tour.path, "new best tour");
            }
        }

        self.pheromone.evaporate(self.config.rho);
        for tour in &tours {
            self.pheromone.deposit_tour(tour);
        }

        tours
    }

    /// Builds every ant's tour against the current, unmodified trails.
    fn construct_tours<R: Rng>(&self, rng: &mut R) -> Vec<Tour> {
        #[cfg(feature = "parallel")]
        {
            if self.config.parallel {
                // Seeds are drawn up front so the result depends only on `rng`,
                // not on how rayon schedules the ants.
                let seeds: Vec<u64> = (0..self.config.n_ants).map(|_| rng.random()).collect();
                return seeds
                    .into_par_iter()
                    .map(|seed| {
                        let mut ant_rng = StdRng::seed_from_u64(seed);
                        construct_route(
                            self.start,
                            self.distances,
                            &self.pheromone,
                            self.config,
                            &mut ant_rng,
                        )
                    })
                    .collect();
            }
        }

        (0..self.config.n_ants)
            .map(|_| {
                construct_route(
                    self.start,
                    self.distances,
                    &self.pheromone,
                    self.config,
                    &mut *rng,
                )
            })
            .collect()
    }
}
