//! Ant Colony Optimization (ACO) for closed tours.
//!
//! A population-based constructive metaheuristic. Each iteration, a colony
//! of ants builds complete tours step by step, choosing the next stop from
//! pheromone trails and inverse distance. After every ant has finished, the
//! trails evaporate and each tour deposits pheromone on its edges in
//! proportion to `1 / tour_length`, so shorter tours reinforce their edges
//! more strongly.
//!
//! The next-stop rule follows the Ant Colony System pseudo-random
//! proportional rule: with probability `q0` the ant takes the best-scoring
//! candidate, otherwise it samples from the normalized scores.
//!
//! # Key Types
//!
//! - [`AcoConfig`]: colony size, iteration budget, and the `alpha`, `beta`,
//!   `rho`, `q0` parameters
//! - [`PheromoneField`]: directed N×N trail intensities
//! - [`Colony`]: one iteration at a time, tracking the best tour
//! - [`AcoRunner`]: runs the full iteration budget and returns an [`AcoResult`]
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a Colony
//!   of Cooperating Agents", *IEEE Trans. SMC-B* 26(1), 29-41.
//! - Dorigo & Gambardella (1997), "Ant Colony System: A Cooperative Learning
//!   Approach to the Traveling Salesman Problem", *IEEE Trans. EC* 1(1), 53-66.

mod ant;
mod colony;
mod config;
mod pheromone;
mod runner;
mod types;

pub use ant::{construct_route, MIN_DISTANCE};
pub use colony::Colony;
pub use config::AcoConfig;
pub use pheromone::PheromoneField;
pub use runner::{solve, AcoResult, AcoRunner};
pub use types::{BestTour, Tour};
