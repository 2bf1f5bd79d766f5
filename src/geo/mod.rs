//! Geographic inputs and the distance layer.
//!
//! Locations arrive pre-geocoded as `(latitude, longitude, label)` records.
//! The solver never reads them directly; it works on a [`DistanceMatrix`]
//! built once per run through a [`Metric`].
//!
//! # Key Types
//!
//! - [`Location`]: a labelled coordinate pair, owned by the caller
//! - [`Coordinate`]: the bare `(latitude, longitude)` pair
//! - [`Metric`]: the distance oracle (great-circle or planar)
//! - [`DistanceMatrix`]: symmetric N×N distances indexed by location position
//!
//! # References
//!
//! - Sinnott, R. W. (1984), "Virtues of the Haversine", *Sky and Telescope* 68(2), 159.

mod distance;
mod location;
mod matrix;

pub use distance::{euclidean, haversine_km, Metric, EARTH_RADIUS_KM};
pub use location::{Coordinate, Location};
pub use matrix::DistanceMatrix;
