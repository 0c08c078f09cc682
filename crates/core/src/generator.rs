use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::matrix::SquareMatrix;
use common::error::Error;
use common::types::Weight;

/// Upper bound (exclusive) for generated integer weights when the caller
/// has no preference.
pub const DEFAULT_MAX_WEIGHT: u32 = 10;

/// Probability that an entry's sign is flipped when negative weights are
/// allowed.
const NEGATION_PROBABILITY: f64 = 0.2;

/// Generates a random complete weight matrix for `num_nodes` nodes.
///
/// Every entry is drawn as a uniform integer in `[1, max_weight)`. With
/// `allow_negative`, each entry's sign is then flipped independently with
/// probability 0.2, the diagonal included. The diagonal is reset to exactly
/// `0.0` afterwards, overriding any flip applied to it.
///
/// This is the only producer of negative-weight fixtures, so it is the
/// mechanism by which negative-cycle scenarios are exercised end-to-end.
///
/// # Errors
/// Returns `Error::InvalidWeightBound` if `max_weight < 2` for a non-empty
/// graph, since the integer range `[1, max_weight)` would be empty.
pub fn generate_random_graph(
    num_nodes: usize,
    allow_negative: bool,
    max_weight: u32,
) -> Result<SquareMatrix, Error> {
    let mut rng: SmallRng = SmallRng::from_os_rng();
    generate_random_graph_with(&mut rng, num_nodes, allow_negative, max_weight)
}

/// Same as [`generate_random_graph`], drawing from a caller-supplied RNG so
/// tests can seed the generation.
pub fn generate_random_graph_with<R: Rng>(
    rng: &mut R,
    num_nodes: usize,
    allow_negative: bool,
    max_weight: u32,
) -> Result<SquareMatrix, Error> {
    if num_nodes == 0 {
        return Ok(SquareMatrix::filled(0, 0.0));
    }
    if max_weight < 2 {
        return Err(Error::InvalidWeightBound(max_weight));
    }

    let mut graph = SquareMatrix::filled(num_nodes, 0.0);

    for i in 0..num_nodes {
        for j in 0..num_nodes {
            let mut weight = rng.random_range(1..max_weight) as Weight;
            if allow_negative && rng.random_bool(NEGATION_PROBABILITY) {
                weight = -weight;
            }
            graph.set(i, j, weight);
        }
    }

    for i in 0..num_nodes {
        graph.set(i, i, 0.0);
    }

    Ok(graph)
}
