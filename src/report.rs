//! Route summary handed to a map renderer.
//!
//! The solver only returns indices. A renderer needs the stops in order,
//! their coordinates and labels, each leg's length, and the total. With the
//! `serde` feature the summary can also be exported as GeoJSON.

use crate::aco::Tour;
use crate::geo::{DistanceMatrix, Location};

/// One stop along the route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    /// Position in the caller's location list.
    pub index: usize,
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// One leg between consecutive stops.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    pub from: usize,
    pub to: usize,
    pub distance: f64,
}

/// Ordered stops and legs of a closed tour, ready for display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSummary {
    /// Stops in travel order; the start appears first and last.
    pub stops: Vec<Stop>,
    /// Legs in travel order, closing leg included.
    pub legs: Vec<Leg>,
    /// Sum of all leg distances.
    pub total_distance: f64,
}

impl RouteSummary {
    /// Maps a tour back onto the locations it was solved over.
    ///
    /// `locations` and `distances` must be the inputs of the run that
    /// produced `tour`.
    pub fn new(locations: &[Location], tour: &Tour, distances: &DistanceMatrix) -> Self {
        let stops = tour
            .path
            .iter()
            .map(|&index| {
                let loc = &locations[index];
                Stop {
                    index,
                    label: loc.label.clone(),
                    latitude: loc.latitude,
                    longitude: loc.longitude,
                }
            })
            .collect();

        let legs: Vec<Leg> = tour
            .edges()
            .map(|(from, to)| Leg {
                from,
                to,
                distance: distances.get(from, to),
            })
            .collect();

        let total_distance = legs.iter().map(|leg| leg.distance).sum();

        Self {
            stops,
            legs,
            total_distance,
        }
    }

    /// GeoJSON `FeatureCollection`: one `LineString` for the route, then
    /// one `Point` per distinct stop in visiting order.
    ///
    /// GeoJSON positions are `[longitude, latitude]`.
    #[cfg(feature = "serde")]
    pub fn to_geojson(&self) -> serde_json::Value {
        use serde_json::json;

        let line: Vec<[f64; 2]> = self
            .stops
            .iter()
            .map(|s| [s.longitude, s.latitude])
            .collect();

        let mut features = vec![json!({
            "type": "Feature",
            "geometry": { "type": "LineString", "coordinates": line },
            "properties": { "total_distance": self.total_distance },
        })];

        let distinct = self.stops.len().saturating_sub(1);
        features.extend(self.stops[..distinct].iter().enumerate().map(|(order, s)| {
            json!({
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [s.longitude, s.latitude] },
                "properties": { "order": order, "index": s.index, "label": s.label },
            })
        }));

        json!({ "type": "FeatureCollection", "features": features })
    }
}
