use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Stream tags so the board, the deal and each AI draw from unrelated sequences.
pub const STREAM_DEAL: u8 = 0;
pub const STREAM_SELF_AI: u8 = 1;
pub const STREAM_OPPONENT_AI: u8 = 2;

/// Deterministic RNG factory for a given (seed, game_id, stream) triple.
///
/// Implementation detail:
/// - Derives a per-stream 64-bit seed as `seed ^ (game_id << 8) ^ stream`.
/// - Uses PCG 64-bit generator (rand_pcg::Pcg64) for reproducible sequences.
/// - Returned RNG is deterministic and reproducible across runs when inputs are equal.
#[inline]
pub fn rng_for_match(seed: u64, game_id: u64, stream: u8) -> Pcg64 {
    let derived: u64 = seed ^ (game_id << 8) ^ u64::from(stream);
    Pcg64::seed_from_u64(derived)
}
