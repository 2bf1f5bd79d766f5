//! Pheromone trail matrix.

use super::ant::MIN_DISTANCE;
use super::types::Tour;

/// Directed N×N trail intensities, stored row-major.
///
/// Every cell starts at 1.0. Cells never go negative: evaporation scales
/// toward zero and deposits only add non-negative amounts.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneField {
    n: usize,
    cells: Vec<f64>,
}

impl PheromoneField {
    /// Initial intensity on every cell.
    pub const INITIAL: f64 = 1.0;

    /// Creates an `n`×`n` field with every cell at [`Self::INITIAL`].
    pub fn new(n: usize) -> Self {
        Self {
            n,
            cells: vec![Self::INITIAL; n * n],
        }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Trail intensity on the directed edge `i -> j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[i * self.n + j]
    }

    /// Multiplies every cell by `1 - rho`.
    pub fn evaporate(&mut self, rho: f64) {
        let keep = 1.0 - rho;
        for cell in &mut self.cells {
            *cell *= keep;
        }
    }

    /// Adds `amount` to the directed edge `i -> j` only.
    pub fn deposit(&mut self, i: usize, j: usize, amount: f64) {
        debug_assert!(amount >= 0.0, "deposit must be non-negative");
        self.cells[i * self.n + j] += amount;
    }

    /// Deposits `1 / tour.distance` on every directed edge of `tour`,
    /// the closing edge included.
    ///
    /// A zero-length tour (all stops coincide) deposits against
    /// [`MIN_DISTANCE`] instead of dividing by zero.
    pub fn deposit_tour(&mut self, tour: &Tour) {
        let amount = 1.0 / tour.distance.max(MIN_DISTANCE);
        for (i, j) in tour.edges() {
            self.deposit(i, j, amount);
        }
    }
}
