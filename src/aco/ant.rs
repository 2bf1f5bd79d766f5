//! Route construction for a single ant.
//!
//! # Algorithm
//!
//! 1. Start at the given index with only that index visited
//! 2. While unvisited stops remain:
//!    a. Score every unvisited `j` as `tau[cur][j]^alpha * d[cur][j]^(-beta)`
//!    b. Normalize the scores into probabilities
//!    c. Draw `r` in `[0, 1)`: if `r < q0` take the most probable stop
//!       (first index on ties), otherwise sample from the distribution
//!    d. Move there and accumulate the edge distance
//! 3. Close the loop back to the start

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

use super::config::AcoConfig;
use super::pheromone::PheromoneField;
use super::types::Tour;
use crate::geo::DistanceMatrix;

/// Stand-in for a zero distance between two distinct stops.
///
/// Keeps `distance^(-beta)` finite when two inputs share coordinates.
pub const MIN_DISTANCE: f64 = 1e-9;

/// Builds one closed tour from `start`.
///
/// Reads `distances` and `pheromone` without modifying them; the caller
/// supplies the random source so runs can be reproduced from a seed.
///
/// Requires `start < distances.len()` and a pheromone field of the same
/// size.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_antroute::aco::{construct_route, AcoConfig, PheromoneField};
/// use u_antroute::geo::{DistanceMatrix, Location, Metric};
///
/// let locations = vec![
///     Location::new(0.0, 0.0, "a"),
///     Location::new(0.0, 1.0, "b"),
///     Location::new(1.0, 1.0, "c"),
/// ];
/// let distances = DistanceMatrix::from_locations(&locations, Metric::Euclidean);
/// let pheromone = PheromoneField::new(distances.len());
/// let mut rng = StdRng::seed_from_u64(1);
///
/// let tour = construct_route(0, &distances, &pheromone, &AcoConfig::default(), &mut rng);
/// assert_eq!(tour.path.len(), 4);
/// assert_eq!(tour.path[0], 0);
/// assert_eq!(tour.path[3], 0);
/// ```
pub fn construct_route<R: Rng>(
    start: usize,
    distances: &DistanceMatrix,
    pheromone: &PheromoneField,
    config: &AcoConfig,
    rng: &mut R,
) -> Tour {
    let n = distances.len();
    let mut path = Vec::with_capacity(n + 1);
    let mut visited = vec![false; n];
    let mut probabilities = vec![0.0; n];

    path.push(start);
    visited[start] = true;
    let mut current = start;
    let mut total = 0.0;

    for _ in 1..n {
        score_candidates(
            current,
            &visited,
            distances,
            pheromone,
            config,
            &mut probabilities,
        );
        normalize(&mut probabilities, &visited);

        let next = if rng.random::<f64>() < config.q0 {
            most_probable(&probabilities, &visited)
        } else {
            sample(&probabilities, &visited, rng)
        };

        visited[next] = true;
        total += distances.get(current, next);
        path.push(next);
        current = next;
    }

    total += distances.get(current, start);
    path.push(start);

    Tour::new(path, total)
}

/// Fills `scores` with the desirability of moving from `current` to each
/// stop. Visited stops score 0.
fn score_candidates(
    current: usize,
    visited: &[bool],
    distances: &DistanceMatrix,
    pheromone: &PheromoneField,
    config: &AcoConfig,
    scores: &mut [f64],
) {
    for (j, score) in scores.iter_mut().enumerate() {
        *score = if visited[j] {
            0.0
        } else {
            let d = distances.get(current, j).max(MIN_DISTANCE);
            pheromone.get(current, j).powf(config.alpha) * d.powf(-config.beta)
        };
    }
}

/// Turns scores into probabilities in place.
///
/// If the unvisited scores sum to zero (every trail evaporated) or to
/// something non-finite, the unvisited stops become equally likely.
fn normalize(scores: &mut [f64], visited: &[bool]) {
    let total: f64 = scores.iter().sum();
    if total > 0.0 && total.is_finite() {
        for p in scores.iter_mut() {
            *p /= total;
        }
        return;
    }

    let open = visited.iter().filter(|&&v| !v).count() as f64;
    for (p, &v) in scores.iter_mut().zip(visited) {
        *p = if v { 0.0 } else { 1.0 / open };
    }
}

/// Exploitation: the unvisited stop with the highest probability, lowest
/// index on ties.
fn most_probable(probabilities: &[f64], visited: &[bool]) -> usize {
    let mut best = None;
    let mut best_p = f64::NEG_INFINITY;
    for (j, &p) in probabilities.iter().enumerate() {
        if !visited[j] && p > best_p {
            best = Some(j);
            best_p = p;
        }
    }
    best.unwrap_or_else(|| first_open(visited))
}

/// Exploration: roulette-wheel sampling over the probabilities.
fn sample<R: Rng>(probabilities: &[f64], visited: &[bool], rng: &mut R) -> usize {
    match WeightedIndex::new(probabilities) {
        Ok(dist) => dist.sample(rng),
        Err(_) => most_probable(probabilities, visited),
    }
}

fn first_open(visited: &[bool]) -> usize {
    visited
        .iter()
        .position(|&v| !v)
        .expect("called with at least one unvisited stop")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{Location, Metric};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn uniform_matrix(n: usize) -> DistanceMatrix {
        let rows = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 0.0 } else { 1.0 }).collect())
            .collect();
        DistanceMatrix::from_rows(rows).unwrap()
    }

    fn line(n: usize) -> DistanceMatrix {
        let locations: Vec<Location> = (0..n)
            .map(|i| Location::new(0.0, i as f64, format!("p{i}")))
            .collect();
        DistanceMatrix::from_locations(&locations, Metric::Euclidean)
    }

    #[test]
    fn test_two_locations_unique_tour() {
        let distances = line(2);
        let pheromone = PheromoneField::new(2);
        let mut rng = StdRng::seed_from_u64(3);

        for start in 0..2 {
            let config = AcoConfig::default();
            let tour = construct_route(start, &distances, &pheromone, &config, &mut rng);
            assert_eq!(tour.path, vec![start, 1 - start, start]);
            assert!((tour.distance - 2.0 * distances.get(0, 1)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_tour_is_valid_and_length_matches() {
        let distances = line(8);
        let pheromone = PheromoneField::new(8);
        let config = AcoConfig::default().with_q0(0.5);
        let mut rng = StdRng::seed_from_u64(11);

        for start in 0..8 {
            let tour = construct_route(start, &distances, &pheromone, &config, &mut rng);
            assert!(tour.is_valid(8), "invalid tour {:?}", tour.path);
            assert_eq!(tour.start(), start);
            assert!((tour.distance - distances.tour_length(&tour.path)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_exploitation_tie_breaks_on_lowest_index() {
        let distances = uniform_matrix(4);
        let pheromone = PheromoneField::new(4);
        let config = AcoConfig::default().with_q0(1.0);
        let mut rng = StdRng::seed_from_u64(0);

        let tour = construct_route(0, &distances, &pheromone, &config, &mut rng);
        assert_eq!(tour.path, vec![0, 1, 2, 3, 0]);

        let tour = construct_route(2, &distances, &pheromone, &config, &mut rng);
        assert_eq!(tour.path, vec![2, 0, 1, 3, 2]);
    }

    #[test]
    fn test_exploitation_follows_nearest_neighbor_on_fresh_trails() {
        // Points on a line: greedy from 0 walks 1, 2, 3, ...
        let distances = line(6);
        let pheromone = PheromoneField::new(6);
        let config = AcoConfig::default().with_q0(1.0);
        let mut rng = StdRng::seed_from_u64(5);

        let tour = construct_route(0, &distances, &pheromone, &config, &mut rng);
        assert_eq!(tour.path, vec![0, 1, 2, 3, 4, 5, 0]);
        assert!((tour.distance - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_exploitation_follows_strong_trail() {
        let distances = uniform_matrix(4);
        let mut pheromone = PheromoneField::new(4);
        pheromone.deposit(0, 3, 5.0);
        pheromone.deposit(3, 2, 5.0);
        let config = AcoConfig::default().with_q0(1.0);
        let mut rng = StdRng::seed_from_u64(0);

        let tour = construct_route(0, &distances, &pheromone, &config, &mut rng);
        assert_eq!(tour.path, vec![0, 3, 2, 1, 0]);
    }

    #[test]
    fn test_exploration_reaches_several_tours() {
        let distances = uniform_matrix(5);
        let pheromone = PheromoneField::new(5);
        let config = AcoConfig::default().with_q0(0.0);
        let mut rng = StdRng::seed_from_u64(99);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            let tour = construct_route(0, &distances, &pheromone, &config, &mut rng);
            assert!(tour.is_valid(5));
            seen.insert(tour.path);
        }
        assert!(seen.len() > 5, "expected varied tours, got {}", seen.len());
    }

    #[test]
    fn test_zero_distance_between_distinct_points() {
        let locations = vec![
            Location::new(0.0, 0.0, "a"),
            Location::new(0.0, 0.0, "a again"),
            Location::new(0.0, 1.0, "b"),
        ];
        let distances = DistanceMatrix::from_locations(&locations, Metric::Euclidean);
        let pheromone = PheromoneField::new(3);
        let mut rng = StdRng::seed_from_u64(1);

        for q0 in [0.0, 1.0] {
            let config = AcoConfig::default().with_q0(q0);
            let tour = construct_route(0, &distances, &pheromone, &config, &mut rng);
            assert!(tour.is_valid(3));
            assert!(tour.distance.is_finite());
            assert!((tour.distance - 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_all_points_coincide() {
        let locations = vec![Location::new(1.0, 1.0, "x"); 4];
        let distances = DistanceMatrix::from_locations(&locations, Metric::Haversine);
        let pheromone = PheromoneField::new(4);
        let mut rng = StdRng::seed_from_u64(1);

        let config = AcoConfig::default();
        let tour = construct_route(1, &distances, &pheromone, &config, &mut rng);
        assert!(tour.is_valid(4));
        assert_eq!(tour.distance, 0.0);
    }

    #[test]
    fn test_evaporated_trails_fall_back_to_uniform() {
        let distances = line(5);
        let mut pheromone = PheromoneField::new(5);
        pheromone.evaporate(1.0);
        let mut rng = StdRng::seed_from_u64(4);

        for q0 in [0.0, 1.0] {
            let config = AcoConfig::default().with_q0(q0);
            let tour = construct_route(0, &distances, &pheromone, &config, &mut rng);
            assert!(tour.is_valid(5));
        }
    }

    #[test]
    fn test_normalize_sums_to_one() {
        let mut scores = vec![0.0, 2.0, 6.0];
        normalize(&mut scores, &[true, false, false]);
        assert!((scores.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!((scores[2] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_degenerate_is_uniform_over_open() {
        let mut scores = vec![0.0, 0.0, 0.0, 0.0];
        normalize(&mut scores, &[true, false, true, false]);
        assert_eq!(scores, vec![0.0, 0.5, 0.0, 0.5]);
    }

    #[test]
    fn test_most_probable_first_on_ties() {
        let p = [0.0, 0.4, 0.2, 0.4];
        assert_eq!(most_probable(&p, &[true, false, false, false]), 1);
        assert_eq!(most_probable(&p, &[true, true, false, false]), 3);
    }
}
