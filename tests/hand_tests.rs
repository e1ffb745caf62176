use triadcore::{Card, Hand, Ranks};

fn named(names: &[&str]) -> Vec<Card> {
    names
        .iter()
        .enumerate()
        .map(|(i, n)| Card::new(i as u16, *n, 1, Ranks::new(1, 1, 1, 1)))
        .collect()
}

fn names(hand: &Hand) -> Vec<&str> {
    hand.cards().iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn draw_removes_and_shifts() {
    let mut hand = Hand::new(named(&["a", "b", "c", "d"]));
    let drawn = hand.draw(1).expect("card at 1");

    assert_eq!(drawn.name, "b");
    assert_eq!(hand.count_cards(), 3);
    assert_eq!(names(&hand), vec!["a", "c", "d"]);
}

#[test]
fn draw_out_of_range_returns_none() {
    let mut hand = Hand::new(named(&["a", "b"]));
    assert!(hand.draw(2).is_none());
    assert!(hand.draw(usize::MAX).is_none());
    assert_eq!(hand.count_cards(), 2);

    let mut empty = Hand::default();
    assert!(empty.draw(0).is_none());
}

#[test]
fn push_appends_in_order() {
    let mut hand = Hand::default();
    assert!(hand.is_empty());
    hand.push(named(&["a", "b"]));
    hand.push(named(&["c"]));

    assert_eq!(names(&hand), vec!["a", "b", "c"]);
    assert_eq!(hand.count_cards(), 3);
}

#[test]
fn drawing_every_card_empties_hand() {
    let mut hand = Hand::from(named(&["a", "b", "c", "d", "e"]));
    let mut drawn = Vec::new();
    while let Some(c) = hand.draw(0) {
        drawn.push(c.name);
    }
    assert_eq!(drawn, vec!["a", "b", "c", "d", "e"]);
    assert!(hand.is_empty());
}
