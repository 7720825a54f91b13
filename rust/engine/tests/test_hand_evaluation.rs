use holdem_engine::cards::{parse_cards, Card, Rank as R, Suit as S};
use holdem_engine::hand::{compare_hands, evaluate_hand, Category, HandStrength};

fn eval(notation: &str) -> HandStrength {
    evaluate_hand(&parse_cards(notation).expect("valid cards"))
}

#[test]
fn detects_royal_flush() {
    let cards = [
        Card::new(R::Ten, S::Hearts),
        Card::new(R::Jack, S::Hearts),
        Card::new(R::Queen, S::Hearts),
        Card::new(R::King, S::Hearts),
        Card::new(R::Ace, S::Hearts),
        Card::new(R::Two, S::Clubs),
        Card::new(R::Three, S::Diamonds),
    ];
    let hs = evaluate_hand(&cards);
    assert_eq!(hs.category, Category::StraightFlush);
    assert_eq!(hs.kickers, vec![14, 13, 12, 11, 10]);
}

#[test]
fn royal_flush_beats_four_aces() {
    let royal = eval("As Ks Qs Js Ts");
    let quads = eval("Ah As Ad Ac 2h");
    assert_eq!(quads.category, Category::FourOfAKind);
    assert!(compare_hands(&royal, &quads).is_gt());
}

#[test]
fn four_of_a_kind_beats_full_house() {
    let quads = eval("2h 2s 2d 2c 7h");
    let boat = eval("Kh Ks Kd Ah As");
    assert_eq!(quads.category as u8, 7);
    assert_eq!(boat.category as u8, 6);
    assert!(quads > boat);
}

#[test]
fn wheel_is_a_five_high_straight() {
    let wheel = eval("Ah 2s 3d 4c 5h");
    assert_eq!(wheel.category, Category::Straight);
    assert_eq!(wheel.kickers, vec![5, 4, 3, 2, 1]);
    let six_high = eval("2s 3d 4c 5h 6d");
    assert!(six_high > wheel);
}

#[test]
fn straight_beats_three_of_a_kind() {
    let straight = eval("9c Td Jh Qs Kc 2d 2h");
    let trips = eval("Ac Ad Ah Kc Qd 3s 5h");
    assert_eq!(straight.category, Category::Straight);
    assert_eq!(trips.category, Category::ThreeOfAKind);
    assert!(compare_hands(&straight, &trips).is_gt());
}

#[test]
fn flush_ranks_by_its_own_five_highest_cards() {
    let a = eval("Ah 9h 7h 4h 2h Kc Qd");
    let b = eval("Kh Qh Jh 9h 8h Ac Ad");
    assert_eq!(a.category, Category::Flush);
    assert_eq!(b.category, Category::Flush);
    assert!(a > b);
}

#[test]
fn two_pair_kicker_breaks_ties() {
    let a = eval("Kh Kd 7s 7c Ah 2d 3c");
    let b = eval("Ks Kc 7h 7d Qh 2s 3h");
    assert_eq!(a.category, Category::TwoPair);
    assert_eq!(a.kickers, vec![13, 7, 14]);
    assert!(a > b);
}

#[test]
fn identical_strength_ties_across_suits() {
    let board = "2c 3d 7h 8s 9c";
    let a = eval(&format!("Ah Kh {board}"));
    let b = eval(&format!("As Ks {board}"));
    assert_eq!(a.category, Category::HighCard);
    assert_eq!(a.kickers, vec![14, 13, 9, 8, 7]);
    assert!(compare_hands(&a, &b).is_eq());
}

#[test]
fn only_five_cards_play_for_tiebreak() {
    // the sixth and seventh cards differ but never count
    let a = eval("Ah Ad Kc Qs Js 3c 2d");
    let b = eval("As Ac Kd Qh Jc 4c 3d");
    assert!(compare_hands(&a, &b).is_eq());
}

#[test]
fn two_card_hand_reports_a_pair() {
    let hs = eval("9s 9d");
    assert_eq!(hs.category, Category::OnePair);
    assert_eq!(hs.kickers, vec![9]);
}
