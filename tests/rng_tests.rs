use rand::Rng;
use triadcore::rng::{STREAM_DEAL, STREAM_OPPONENT_AI, STREAM_SELF_AI};
use triadcore::rng_for_match;

fn sample(seq_len: usize, seed: u64, game_id: u64, stream: u8) -> Vec<u64> {
    let mut rng = rng_for_match(seed, game_id, stream);
    (0..seq_len).map(|_| rng.gen::<u64>()).collect()
}

#[test]
fn rng_stability_same_triple() {
    let a = sample(16, 0xDEAD_BEEFu64, 0xCAFE_BABEu64, STREAM_DEAL);
    let b = sample(16, 0xDEAD_BEEFu64, 0xCAFE_BABEu64, STREAM_DEAL);
    assert_eq!(a, b, "rng_for_match must produce stable sequences for identical (seed, game_id, stream)");
}

#[test]
fn rng_diff_for_different_triples() {
    let base_seed: u64 = 0x00C0_FFEEu64;
    let s1 = sample(16, base_seed, 1001, STREAM_SELF_AI);
    let s2 = sample(16, base_seed, 1001, STREAM_OPPONENT_AI);
    let s3 = sample(16, base_seed.wrapping_add(1), 1001, STREAM_SELF_AI);
    let s4 = sample(16, base_seed, 1002, STREAM_SELF_AI);
    assert_ne!(s1, s2, "changing stream should alter sequence");
    assert_ne!(s1, s3, "changing seed should alter sequence");
    assert_ne!(s1, s4, "changing game_id should alter sequence");
}

#[test]
fn adjacent_games_do_not_share_streams() {
    let g0_ai = sample(8, 7, 0, STREAM_SELF_AI);
    let g1_deal = sample(8, 7, 1, STREAM_DEAL);
    assert_ne!(g0_ai, g1_deal);
}
