//! WebAssembly bindings for browser map front-ends.
//!
//! The page geocodes addresses itself, calls [`solve_tour`] with the
//! resulting records, and draws the returned route summary.

use wasm_bindgen::prelude::*;

use crate::aco::{AcoConfig, AcoRunner};
use crate::geo::{DistanceMatrix, Location};
use crate::report::RouteSummary;

/// Solves a closed tour over `locations` starting at `start_index`.
///
/// `locations` is an array of `{ latitude, longitude, label }` objects.
/// `config` is an optional partial `AcoConfig` object; missing fields take
/// their defaults. Returns a `RouteSummary` object.
#[wasm_bindgen(js_name = solveTour)]
pub fn solve_tour(
    locations: JsValue,
    start_index: usize,
    config: JsValue,
) -> Result<JsValue, JsValue> {
    let locations: Vec<Location> = serde_wasm_bindgen::from_value(locations)?;
    let config: AcoConfig = if config.is_undefined() || config.is_null() {
        AcoConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };

    let distances = DistanceMatrix::from_locations(&locations, config.metric);
    let result = AcoRunner::run(&distances, start_index, &config)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let summary = RouteSummary::new(&locations, &result.tour, &distances);
    Ok(serde_wasm_bindgen::to_value(&summary)?)
}
