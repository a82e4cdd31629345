use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Create the deterministic random source for a run.
///
/// Every stochastic decision of a run (placement, velocity redraw, target
/// selection) draws from this single generator, so equal seeds give equal
/// traces.
pub fn create_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
