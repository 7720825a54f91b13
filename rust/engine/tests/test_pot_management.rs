use holdem_engine::pot::{split_pot, Pot};

#[test]
fn pot_accumulates_and_empties() {
    let mut pot = Pot::new();
    pot.add(15);
    pot.add(10);
    assert_eq!(pot.total(), 25);
    assert_eq!(pot.take(), 25);
    assert_eq!(pot.total(), 0);
}

#[test]
fn even_split_has_no_remainder() {
    assert_eq!(split_pot(100, &[0, 1]), vec![(0, 50), (1, 50)]);
}

#[test]
fn odd_chips_go_to_earliest_winners() {
    let payouts = split_pot(101, &[4, 0, 2]);
    assert_eq!(payouts, vec![(4, 34), (0, 34), (2, 33)]);
    assert_eq!(payouts.iter().map(|(_, a)| a).sum::<u32>(), 101);
}

#[test]
fn single_winner_takes_everything() {
    assert_eq!(split_pot(7, &[3]), vec![(3, 7)]);
    assert!(split_pot(7, &[]).is_empty());
}
