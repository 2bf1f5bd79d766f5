//! Ant Colony Optimization for closed tours over geographic points.
//!
//! Given a handful of pre-geocoded locations and a starting stop, finds a
//! short closed tour that visits every location once and returns to the
//! start (a small Traveling Salesman Problem).
//!
//! - **Geo**: locations, the great-circle distance oracle, and the
//!   symmetric distance matrix built once per run.
//! - **ACO**: pheromone field, per-ant route construction, the colony
//!   iteration, and the solver driver.
//! - **Report**: the ordered stops and per-leg distances a map renderer
//!   draws, with optional GeoJSON export.
//!
//! # Architecture
//!
//! Geocoding addresses and drawing maps are left to the caller. The solver
//! consumes coordinate records plus a start index and produces an ordered
//! index sequence; [`report::RouteSummary`] maps it back to coordinates and
//! labels.
//!
//! # Example
//!
//! ```
//! use u_antroute::aco::{solve, AcoConfig};
//! use u_antroute::geo::Location;
//!
//! let locations = vec![
//!     Location::new(56.1387, 8.9734, "Herning"),
//!     Location::new(56.2445, 8.9607, "Sunds"),
//!     Location::new(56.1389, 9.1575, "Ikast"),
//!     Location::new(55.7404, 9.1518, "Billund"),
//! ];
//! let config = AcoConfig::default().with_ants(10).with_iterations(50).with_seed(7);
//!
//! let result = solve(&locations, 0, &config).unwrap();
//! assert_eq!(result.tour.path.first(), Some(&0));
//! assert_eq!(result.tour.path.last(), Some(&0));
//! ```

pub mod aco;
pub mod error;
pub mod geo;
pub mod report;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{AcoError, Result};
