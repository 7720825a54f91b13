use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        };
        f.write_str(name)
    }
}

/// Evaluated hand. Field order matters: the derived `Ord` compares the category first and then
/// the kicker sequence lexicographically.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    // kickers: ordered high -> low for tiebreaks, only the five cards that play
    pub kickers: Vec<u8>,
}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.category, self.kickers)
    }
}

/// Ranks any 0..=7 cards. Fewer than five cards still yield the category the cards
/// make (pairs, trips, quads) with a shorter kicker sequence.
pub fn evaluate_hand(cards: &[Card]) -> HandStrength {
    let mut rank_counts = [0u8; 15]; // 2..14 used
    let mut by_suit: [Vec<u8>; 4] = Default::default();
    for c in cards {
        let r = c.rank.value();
        rank_counts[r as usize] += 1;
        by_suit[suit_index(c.suit)].push(r);
    }

    let flush_suit = by_suit.iter().position(|ranks| ranks.len() >= 5);

    // Straight flush
    if let Some(s) = flush_suit {
        if let Some(high) = straight_high(&by_suit[s]) {
            return HandStrength {
                category: Category::StraightFlush,
                kickers: straight_sequence(high),
            };
        }
    }

    let groups = rank_groups(&rank_counts);
    let count_at = |i: usize| groups.get(i).map_or(0, |g| g.0);

    // Four of a kind
    if count_at(0) == 4 {
        let mut k = vec![groups[0].1];
        k.extend(top_ranks(&groups[1..], 1));
        return HandStrength {
            category: Category::FourOfAKind,
            kickers: k,
        };
    }

    // Full house (a second trip plays as the pair)
    if count_at(0) == 3 && count_at(1) >= 2 {
        return HandStrength {
            category: Category::FullHouse,
            kickers: vec![groups[0].1, groups[1].1],
        };
    }

    // Flush
    if let Some(s) = flush_suit {
        let mut ranks = by_suit[s].clone();
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        ranks.truncate(5);
        return HandStrength {
            category: Category::Flush,
            kickers: ranks,
        };
    }

    // Straight
    let distinct: Vec<u8> = groups.iter().map(|g| g.1).collect();
    if let Some(high) = straight_high(&distinct) {
        return HandStrength {
            category: Category::Straight,
            kickers: straight_sequence(high),
        };
    }

    let (category, made) = match (count_at(0), count_at(1)) {
        (3, _) => (Category::ThreeOfAKind, 1),
        (2, 2) => (Category::TwoPair, 2),
        (2, _) => (Category::OnePair, 1),
        _ => (Category::HighCard, 0),
    };
    let used: usize = groups[..made].iter().map(|g| g.0 as usize).sum();
    let mut k: Vec<u8> = groups[..made].iter().map(|g| g.1).collect();
    k.extend(top_ranks(&groups[made..], 5usize.saturating_sub(used)));
    HandStrength {
        category,
        kickers: k,
    }
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.kickers.cmp(&b.kickers),
        ord => ord,
    }
}

fn suit_index(s: Suit) -> usize {
    match s {
        Suit::Spades => 0,
        Suit::Hearts => 1,
        Suit::Diamonds => 2,
        Suit::Clubs => 3,
    }
}

/// (count, rank) for every present rank, sorted by count then rank, both descending.
fn rank_groups(rank_counts: &[u8; 15]) -> Vec<(u8, u8)> {
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (rank_counts[r as usize], r))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));
    groups
}

fn top_ranks(groups: &[(u8, u8)], n: usize) -> Vec<u8> {
    let mut ranks: Vec<u8> = groups.iter().map(|g| g.1).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    ranks.truncate(n);
    ranks
}

/// Highest card of the best five-card run, 5 for the wheel.
fn straight_high(ranks: &[u8]) -> Option<u8> {
    let mut mask: u16 = 0;
    for &r in ranks {
        mask |= 1 << r;
    }
    // Ace also plays low
    if mask & (1 << 14) != 0 {
        mask |= 1 << 1;
    }
    (5..=14u8).rev().find(|&high| {
        let window = 0b1_1111u16 << (high - 4);
        mask & window == window
    })
}

fn straight_sequence(high: u8) -> Vec<u8> {
    (0..5).map(|i| high - i).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn eval(s: &str) -> HandStrength {
        evaluate_hand(&parse_cards(s).unwrap())
    }

    #[test]
    fn trips_with_two_pairs_is_full_house_using_higher_pair() {
        let hs = eval("3c 3d 3h Ah As Kd Kc");
        assert_eq!(hs.category, Category::FullHouse);
        assert_eq!(hs.kickers, vec![3, 14]);
    }

    #[test]
    fn two_trips_make_full_house() {
        let hs = eval("9c 9d 9h 4h 4s 4d 2c");
        assert_eq!(hs.category, Category::FullHouse);
        assert_eq!(hs.kickers, vec![9, 4]);
    }

    #[test]
    fn third_pair_can_be_the_two_pair_kicker() {
        let hs = eval("Qc Qd Jh Js Tc Td 2c");
        assert_eq!(hs.category, Category::TwoPair);
        assert_eq!(hs.kickers, vec![12, 11, 10]);
    }

    #[test]
    fn quads_kicker_comes_from_any_remaining_rank() {
        let hs = eval("7c 7d 7h 7s Kc Kd 2c");
        assert_eq!(hs.category, Category::FourOfAKind);
        assert_eq!(hs.kickers, vec![7, 13]);
    }

    #[test]
    fn six_card_run_uses_highest_five() {
        let hs = eval("4c 5d 6h 7s 8c 9d Kh");
        assert_eq!(hs.category, Category::Straight);
        assert_eq!(hs.kickers, vec![9, 8, 7, 6, 5]);
    }

    #[test]
    fn flush_ignores_off_suit_cards() {
        let hs = eval("Ah Kh 9h 5h 2h Ac As");
        assert_eq!(hs.category, Category::Flush);
        assert_eq!(hs.kickers, vec![14, 13, 9, 5, 2]);
    }

    #[test]
    fn straight_flush_requires_suited_run() {
        // straight across suits plus a flush that is not itself a run
        let hs = eval("5h 6h 7h 8h 9c Th 2h");
        assert_eq!(hs.category, Category::Flush);
    }

    #[test]
    fn partial_hands_are_ranked() {
        assert_eq!(eval("Ah Ad").category, Category::OnePair);
        assert_eq!(eval("Ah Kd").kickers, vec![14, 13]);
        assert_eq!(evaluate_hand(&[]).category, Category::HighCard);
    }
}
