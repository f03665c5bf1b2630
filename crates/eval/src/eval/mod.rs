// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw poker hand classifier.
//!
//! A five cards hand is sorted by rank value with ace high, checked for flush
//! and straight (ace plays low for the A-2-3-4-5 wheel), grouped by rank, and
//! finally mapped to a [HandCategory].
use drawpoker_cards::{Card, Suit};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// The lowest pair rank paying as jacks or better.
const JACK: u8 = 11;

/// The lowest rank of a royal flush.
const TEN: u8 = 10;

/// The ace rank value.
const ACE: u8 = 14;

/// The ace value when it plays low.
const LOW_ACE: u8 = 1;

/// A hand category ordered by payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No pairs, no straight, no flush.
    #[serde(rename = "High Card")]
    HighCard = 0,
    /// A pair of tens or lower.
    #[serde(rename = "One Pair")]
    OnePair,
    /// A pair of jacks, queens, kings or aces.
    #[serde(rename = "Jacks or Better")]
    JacksOrBetter,
    /// Two pairs.
    #[serde(rename = "Two Pair")]
    TwoPair,
    /// Three cards of the same rank.
    #[serde(rename = "Three of a Kind")]
    ThreeOfAKind,
    /// Five cards in sequence.
    #[serde(rename = "Straight")]
    Straight,
    /// Five cards of the same suit.
    #[serde(rename = "Flush")]
    Flush,
    /// Three of a kind and a pair.
    #[serde(rename = "Full House")]
    FullHouse,
    /// Four cards of the same rank.
    #[serde(rename = "Four of a Kind")]
    FourOfAKind,
    /// A straight with all cards of the same suit.
    #[serde(rename = "Straight Flush")]
    StraightFlush,
    /// Ten to ace straight flush.
    #[serde(rename = "Royal Flush")]
    RoyalFlush,
}

impl HandCategory {
    /// Returns all categories from lowest to highest.
    pub fn all() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
            JacksOrBetter,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The category display name.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::JacksOrBetter => "Jacks or Better",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A card rank value and suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedCard {
    /// The rank value, 2 to 14 with ace high.
    pub value: u8,
    /// The card suit.
    pub suit: Suit,
}

/// A group of two or more cards with the same rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    /// The group rank value.
    pub value: u8,
    /// The number of cards in the group.
    pub count: usize,
}

/// A hand sorted by ascending rank value.
///
/// Cards with the same rank keep their hand order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedHand([RankedCard; HAND_SIZE]);

impl SortedHand {
    /// Sorts a hand.
    pub fn new(hand: &[Card; HAND_SIZE]) -> Self {
        let mut cards = hand.map(|c| RankedCard {
            value: c.rank().value(),
            suit: c.suit(),
        });

        // Stable sort.
        cards.sort_by_key(|c| c.value);
        Self(cards)
    }

    /// The sorted cards.
    pub fn cards(&self) -> &[RankedCard; HAND_SIZE] {
        &self.0
    }

    /// The sorted rank values.
    pub fn values(&self) -> [u8; HAND_SIZE] {
        self.0.map(|c| c.value)
    }

    /// Checks if all cards have the same suit.
    pub fn is_flush(&self) -> bool {
        let suit = self.0[0].suit;
        self.0.iter().all(|c| c.suit == suit)
    }

    /// Checks if the cards form a run, the ace plays high or low.
    pub fn is_straight(&self) -> bool {
        fn is_run(values: &[u8]) -> bool {
            values.windows(2).all(|w| w[0] + 1 == w[1])
        }

        let values = self.values();
        if is_run(&values) {
            return true;
        }

        // Wheel, move the ace to the front as a one.
        if values[HAND_SIZE - 1] == ACE {
            let mut low = [LOW_ACE; HAND_SIZE];
            low[1..].copy_from_slice(&values[..HAND_SIZE - 1]);
            return is_run(&low);
        }

        false
    }

    /// Returns the groups of cards with the same rank in ascending rank order.
    pub fn groups(&self) -> Vec<Group> {
        (LOW_ACE..=ACE)
            .filter_map(|value| {
                let count = self.0.iter().filter(|c| c.value == value).count();
                (count >= 2).then_some(Group { value, count })
            })
            .collect()
    }

    /// The lowest rank value in the hand.
    pub fn low_value(&self) -> u8 {
        self.0[0].value
    }
}

/// Classifies a five cards hand.
pub fn evaluate(hand: &[Card; HAND_SIZE]) -> HandCategory {
    let sorted = SortedHand::new(hand);
    let is_flush = sorted.is_flush();
    let is_straight = sorted.is_straight();

    if is_flush && is_straight && sorted.low_value() == TEN {
        return HandCategory::RoyalFlush;
    }

    if is_flush && is_straight {
        return HandCategory::StraightFlush;
    }

    if is_flush {
        return HandCategory::Flush;
    }

    if is_straight {
        return HandCategory::Straight;
    }

    match sorted.groups().as_slice() {
        [g] if g.count == 4 => HandCategory::FourOfAKind,
        [g1, g2] if matches!((g1.count, g2.count), (3, 2) | (2, 3)) => HandCategory::FullHouse,
        [g] if g.count == 3 => HandCategory::ThreeOfAKind,
        [g1, g2] if g1.count == 2 && g2.count == 2 => HandCategory::TwoPair,
        [g] if g.count == 2 && g.value >= JACK => HandCategory::JacksOrBetter,
        [g] if g.count == 2 => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    }
}
