use rand::SeedableRng;
use rand_pcg::Pcg64;
use triadcore::{
    load_cards_from_json, AiMove, Board, Card, GameError, GameState, Hand, Outcome, Player,
    RandomAi, Ranks, Rule, TacticalAi,
};

fn card(name: &str, top: u8, left: u8, right: u8, bottom: u8) -> Card {
    Card::new(0, name, 1, Ranks::new(top, left, right, bottom))
}

fn deck() -> Vec<Card> {
    load_cards_from_json("data/cards.json").expect("load data/cards.json").deck()
}

fn mv(target_cell_index: usize, selected_card_index: usize) -> AiMove {
    AiMove {
        target_cell_index,
        selected_card_index,
    }
}

#[test]
fn deal_splits_distinct_hands() {
    let deck = deck();
    let mut rng = Pcg64::seed_from_u64(11);
    let state = GameState::deal(Rule::standard(), &deck, 5, &mut rng).expect("deal");

    assert_eq!(state.hand_self.count_cards(), 5);
    assert_eq!(state.hand_opponent.count_cards(), 5);
    assert!(state.board.is_empty());
    assert_eq!(state.turn, 0);

    let mut ids: Vec<u16> = state
        .hand_self
        .cards()
        .iter()
        .chain(state.hand_opponent.cards())
        .map(|c| c.id)
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 10, "no card dealt twice");
}

#[test]
fn deal_is_reproducible() {
    let deck = deck();
    let a = GameState::deal(Rule::all_enabled(), &deck, 5, &mut Pcg64::seed_from_u64(3)).unwrap();
    let b = GameState::deal(Rule::all_enabled(), &deck, 5, &mut Pcg64::seed_from_u64(3)).unwrap();

    assert_eq!(a.hand_self, b.hand_self);
    assert_eq!(a.hand_opponent, b.hand_opponent);
    assert_eq!(a.next, b.next);
    assert_eq!(a.board.cells(), b.board.cells());
}

#[test]
fn deal_rejects_small_deck() {
    let deck = vec![card("a", 1, 1, 1, 1); 7];
    let err = GameState::deal(Rule::standard(), &deck, 5, &mut Pcg64::seed_from_u64(0)).unwrap_err();
    assert_eq!(err, GameError::NotEnoughCards { needed: 10, available: 7 });
}

#[test]
fn apply_places_card_and_passes_turn() {
    let mut state = GameState::new(
        Board::new(Rule::standard()),
        Hand::new(vec![card("s0", 0, 0, 0, 2), card("s1", 1, 1, 1, 1)]),
        Hand::new(vec![card("o0", 1, 0, 0, 0)]),
        Player::Opponent,
    );

    assert!(state.apply(mv(3, 0)).unwrap().is_empty());
    assert_eq!(state.next, Player::Myself);
    assert!(state.hand_opponent.is_empty());

    let results = state.apply(mv(0, 0)).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].captured_cell_indices, vec![3]);
    assert_eq!(state.turn, 2);
    assert_eq!(state.hand_self.cards()[0].name, "s1");

    // Opponent has nothing left to play.
    assert!(state.is_over());
    let score = state.score();
    assert_eq!((score.myself, score.opponent), (3, 0));
    assert_eq!(state.outcome(), Some(Outcome::Win(Player::Myself)));
}

#[test]
fn apply_rejects_invalid_moves_without_side_effects() {
    let mut state = GameState::new(
        Board::new(Rule::standard()),
        Hand::new(vec![card("s0", 1, 1, 1, 1), card("s1", 1, 1, 1, 1)]),
        Hand::new(vec![card("o0", 1, 1, 1, 1), card("o1", 1, 1, 1, 1)]),
        Player::Myself,
    );
    state.apply(mv(4, 0)).unwrap();

    assert_eq!(state.apply(mv(4, 0)), Err(GameError::CellOccupied(4)));
    assert_eq!(state.apply(mv(9, 0)), Err(GameError::CellOutOfRange(9)));
    assert_eq!(
        state.apply(mv(0, 5)),
        Err(GameError::CardOutOfRange { index: 5, count: 2 })
    );
    assert_eq!(state.hand_opponent.count_cards(), 2);
    assert_eq!(state.next, Player::Opponent);
    assert_eq!(state.board.filled_count(), 1);
}

#[test]
fn apply_after_match_over_fails() {
    let mut state = GameState::new(
        Board::new(Rule::standard()),
        Hand::default(),
        Hand::new(vec![card("o0", 1, 1, 1, 1)]),
        Player::Myself,
    );
    assert!(state.is_over());
    assert_eq!(state.apply(mv(0, 0)), Err(GameError::MatchOver));
}

#[test]
fn full_match_between_tactical_and_random() {
    let deck = deck();
    for seed in 0..20u64 {
        let mut rng = Pcg64::seed_from_u64(seed);
        let mut state = GameState::deal(Rule::all_enabled(), &deck, 5, &mut rng).unwrap();
        let mut own = TacticalAi::with_seed(Player::Myself, seed);
        let mut opponent = RandomAi::with_seed(seed + 1000);

        let outcome = state.play_out(&mut own, &mut opponent).expect("play out");

        assert!(state.board.is_fully_occupied());
        assert_eq!(state.turn, 9);
        let score = state.score();
        assert_eq!(score.myself + score.opponent, 10, "nine placed plus one left in hand");
        assert_eq!(Some(outcome), state.outcome());
    }
}

#[test]
fn step_reports_none_when_over() {
    let deck = deck();
    let mut state = GameState::deal(Rule::standard(), &deck, 5, &mut Pcg64::seed_from_u64(4)).unwrap();
    let mut ai = RandomAi::with_seed(4);
    let mut steps = 0;
    while state.step(&mut ai).unwrap().is_some() {
        steps += 1;
    }
    assert_eq!(steps, 9);
    assert!(state.step(&mut ai).unwrap().is_none());
}
