//! Distance oracle.
//!
//! Pure functions over two coordinate pairs. Nothing here validates its
//! input: out-of-range latitudes simply produce a (meaningless) number.

use super::location::Coordinate;

/// Mean Earth radius in kilometres (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Great-circle distance in kilometres using the haversine formula.
///
/// Symmetric, and zero exactly when both coordinates are equal.
///
/// # Examples
///
/// ```
/// use u_antroute::geo::{haversine_km, Coordinate};
///
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(0.0, 1.0);
/// assert!((haversine_km(a, b) - 111.195).abs() < 0.01);
/// ```
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push h a hair above 1 for antipodal points. `clamp`
    // keeps a NaN input NaN.
    2.0 * EARTH_RADIUS_KM * h.sqrt().clamp(0.0, 1.0).asin()
}

/// Planar distance treating latitude and longitude as plain `(y, x)`.
///
/// Useful for synthetic fixtures where coordinates are not on a sphere.
pub fn euclidean(a: Coordinate, b: Coordinate) -> f64 {
    (b.latitude - a.latitude).hypot(b.longitude - a.longitude)
}

/// Distance metric used to build a run's distance matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Metric {
    /// Great-circle distance in kilometres.
    #[default]
    Haversine,
    /// Planar distance in coordinate units.
    Euclidean,
}

impl Metric {
    /// Distance between two coordinates under this metric.
    pub fn distance(self, a: Coordinate, b: Coordinate) -> f64 {
        match self {
            Metric::Haversine => haversine_km(a, b),
            Metric::Euclidean => euclidean(a, b),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Haversine => "haversine",
            Metric::Euclidean => "euclidean",
        }
    }
}
