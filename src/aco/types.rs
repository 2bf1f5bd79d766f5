//! Tours and best-tour tracking.

/// A closed tour: location indices starting and ending at the same stop.
///
/// For N locations `path` has length N+1, `path[0] == path[N]`, and
/// `path[..N]` is a permutation of `0..N`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    /// Visited indices in order, including the closing return to the start.
    pub path: Vec<usize>,
    /// Total length including the closing edge.
    pub distance: f64,
}

impl Tour {
    pub fn new(path: Vec<usize>, distance: f64) -> Self {
        Self { path, distance }
    }

    /// The stop the tour starts and ends at.
    pub fn start(&self) -> usize {
        self.path[0]
    }

    /// Directed edges `(from, to)` in travel order, closing edge included.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.path.windows(2).map(|w| (w[0], w[1]))
    }

    /// Checks the closed-tour shape against `n` locations.
    pub fn is_valid(&self, n: usize) -> bool {
        if self.path.len() != n + 1 || self.path[0] != self.path[n] {
            return false;
        }
        let mut seen = vec![false; n];
        for &i in &self.path[..n] {
            if i >= n || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }
}

/// Best tour seen so far in a run.
///
/// Starts empty with distance `+inf`. The first offered tour is always
/// taken, even if its length is not finite; after that only strictly
/// shorter tours replace it, so its distance never increases.
#[derive(Debug, Clone, Default)]
pub struct BestTour {
    tour: Option<Tour>,
}

impl BestTour {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distance of the best tour, or `f64::INFINITY` before the first offer.
    pub fn distance(&self) -> f64 {
        self.tour.as_ref().map_or(f64::INFINITY, |t| t.distance)
    }

    pub fn tour(&self) -> Option<&Tour> {
        self.tour.as_ref()
    }

    pub fn into_tour(self) -> Option<Tour> {
        self.tour
    }

    /// Takes `candidate` if nothing is held yet or it is strictly shorter.
    ///
    /// Returns `true` when the candidate was taken.
    pub fn offer(&mut self, candidate: &Tour) -> bool {
        if self.tour.is_none() || candidate.distance < self.distance() {
            self.tour = Some(candidate.clone());
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_edges_include_closing_edge() {
        let tour = Tour::new(vec![2, 0, 1, 2], 3.0);
        let edges: Vec<_> = tour.edges().collect();
        assert_eq!(edges, vec![(2, 0), (0, 1), (1, 2)]);
        assert_eq!(tour.start(), 2);
    }

    #[test]
    fn test_tour_is_valid() {
        assert!(Tour::new(vec![0, 1, 2, 0], 0.0).is_valid(3));
        assert!(Tour::new(vec![1, 0, 1], 0.0).is_valid(2));
        // not closed
        assert!(!Tour::new(vec![0, 1, 2, 1], 0.0).is_valid(3));
        // repeated stop
        assert!(!Tour::new(vec![0, 1, 1, 0], 0.0).is_valid(3));
        // wrong length
        assert!(!Tour::new(vec![0, 1, 0], 0.0).is_valid(3));
        // out of range
        assert!(!Tour::new(vec![0, 5, 2, 0], 0.0).is_valid(3));
    }

    #[test]
    fn test_best_tour_starts_empty() {
        let best = BestTour::new();
        assert!(best.tour().is_none());
        assert_eq!(best.distance(), f64::INFINITY);
    }

    #[test]
    fn test_best_tour_accepts_only_strict_improvement() {
        let mut best = BestTour::new();
        assert!(best.offer(&Tour::new(vec![0, 1, 2, 0], 10.0)));
        assert!(!best.offer(&Tour::new(vec![0, 2, 1, 0], 10.0)));
        assert_eq!(best.tour().unwrap().path, vec![0, 1, 2, 0]);
        assert!(!best.offer(&Tour::new(vec![0, 2, 1, 0], 12.0)));
        assert!(best.offer(&Tour::new(vec![0, 2, 1, 0], 9.5)));
        assert_eq!(best.distance(), 9.5);
        assert_eq!(best.into_tour().unwrap().path, vec![0, 2, 1, 0]);
    }

    #[test]
    fn test_best_tour_takes_first_offer_even_if_infinite() {
        let mut best = BestTour::new();
        assert!(best.offer(&Tour::new(vec![0, 1, 0], f64::INFINITY)));
        assert!(best.tour().is_some());
        assert!(!best.offer(&Tour::new(vec![1, 0, 1], f64::INFINITY)));
        assert!(best.offer(&Tour::new(vec![1, 0, 1], 3.0)));
        assert_eq!(best.distance(), 3.0);
    }
}
