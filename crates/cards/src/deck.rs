// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards and deck definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Deck errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A deal asked for more cards than the deck holds.
    #[error("cannot deal {requested} cards from a deck with {remaining} cards")]
    InsufficientCards {
        /// The number of cards requested.
        requested: usize,
        /// The number of cards left in the deck.
        remaining: usize,
    },
}

/// Error returned when parsing an invalid card code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid card code {0:?}")]
pub struct ParseCardError(String);

/// A playing card.
///
/// A card is packed in a byte with the following format:
///
/// ```text
///   +--------+
///   |xxssrrrr|
///   +--------+
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   s = suit of card (clubs=0,diamonds=1,hearts=2,spades=3)
/// ```
///
/// Cards serialize as their code, for example `"10C"` or `"AS"`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card(u8);

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(((suit as u8) << 4) | rank as u8)
    }

    /// This card unique id.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match (self.0 >> 4) & 0x3 {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            _ => Suit::Spades,
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        match self.0 & 0xf {
            0 => Rank::Deuce,
            1 => Rank::Trey,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            12 => Rank::Ace,
            _ => panic!("Invalid rank 0x{:x}", self.0),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        let err = || ParseCardError(s.to_string());

        // The suit is always the last character, the rank is what precedes it.
        let Some(suit_char) = code.chars().last() else {
            return Err(err());
        };

        let suit = match suit_char {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return Err(err()),
        };

        let rank = match &code[..code.len() - 1] {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(err()),
        };

        Ok(Card::new(rank, suit))
    }
}

impl TryFrom<String> for Card {
    type Error = ParseCardError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    const ALL: [Rank; 13] = [
        Rank::Deuce,
        Rank::Trey,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Returns all ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// Numeric rank value with ace high, deuce is 2 and ace is 14.
    pub fn value(&self) -> u8 {
        *self as u8 + 2
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds = 1,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 3,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }
}

/// A cards deck, cards are dealt from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the cards left in the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals `n` cards from the front of the deck.
    ///
    /// The deck is left untouched if it holds less than `n` cards.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, Error> {
        if n > self.cards.len() {
            return Err(Error::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }

        Ok(self.cards.drain(..n).collect())
    }

    /// Deals a single card from the front of the deck.
    pub fn deal_one(&mut self) -> Result<Card, Error> {
        self.deal(1).map(|cards| cards[0])
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The cards left in the deck in dealing order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calls the `f` closure for each k-cards combination of the deck cards.
    ///
    /// Panics if k is zero.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!(k > 0, "k must be positive");

        let n = self.cards.len();
        if k > n {
            return;
        }

        // Lexicographic k-subsets of the card indices.
        let mut idx = (0..k).collect::<Vec<_>>();
        let mut hand = self.cards[..k].to_vec();

        loop {
            for (card, &i) in hand.iter_mut().zip(&idx) {
                *card = self.cards[i];
            }

            f(&hand);

            let Some(i) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
                return;
            };

            idx[i] += 1;
            for j in (i + 1)..k {
                idx[j] = idx[j - 1] + 1;
            }
        }
    }
}

impl Default for Deck {
    /// The fresh deck, clubs, diamonds, hearts, spades with ranks A, 2, .., K.
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| {
                std::iter::once(Rank::Ace)
                    .chain(Rank::ranks().take(12))
                    .map(move |r| Card::new(r, s))
            })
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::rngs::StdRng;

    fn codes(cards: &[Card]) -> Vec<String> {
        cards.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();
        for card in Deck::default() {
            assert_eq!(card.id() & 0xF, card.rank() as u8);
            assert_eq!(card.id() >> 4, card.suit() as u8);
            assert_eq!(Card::new(card.rank(), card.suit()), card);
            cards.insert(card.id());
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    #[should_panic(expected = "Invalid rank")]
    fn invalid_rank_panics() {
        Card(0x0d).rank();
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "10H");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn card_from_string() {
        for card in Deck::default() {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }

        let ten = Card::new(Rank::Ten, Suit::Clubs);
        assert_eq!("TC".parse::<Card>(), Ok(ten));
        assert_eq!("10c".parse::<Card>(), Ok(ten));

        for code in ["", "C", "1C", "11S", "AX", "10", "BLUE_BACK"] {
            assert!(code.parse::<Card>().is_err(), "{code}");
        }
    }

    #[test]
    fn rank_values() {
        let values = Rank::ranks().map(|r| r.value()).collect::<Vec<_>>();
        assert_eq!(values, (2..=14).collect::<Vec<_>>());
    }

    #[test]
    fn fresh_deck() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let unique = deck.cards().iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), Deck::SIZE);

        let codes = codes(deck.cards());
        assert_eq!(&codes[..14], [
            "AC", "2C", "3C", "4C", "5C", "6C", "7C", "8C", "9C", "10C", "JC", "QC", "KC", "AD"
        ]);
        assert_eq!(codes[51], "KS");
    }

    #[test]
    fn shuffled_deck() {
        let fresh = Deck::default();
        let deck = Deck::new_and_shuffled(&mut rand::rng());
        assert_eq!(deck.count(), Deck::SIZE);
        assert_ne!(deck, fresh);

        let fresh = fresh.cards().iter().collect::<HashSet<_>>();
        let shuffled = deck.cards().iter().collect::<HashSet<_>>();
        assert_eq!(fresh, shuffled);
    }

    #[test]
    fn seeded_shuffle() {
        let d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(101));
        let d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(101));
        let d3 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(102));
        assert_eq!(d1, d2);
        assert_ne!(d1, d3);
    }

    #[test]
    fn deal_cards() {
        let mut deck = Deck::default();
        let hand = deck.deal(5).unwrap();
        assert_eq!(codes(&hand), ["AC", "2C", "3C", "4C", "5C"]);
        assert_eq!(deck.count(), 47);
        assert_eq!(deck.cards()[0].to_string(), "6C");

        let card = deck.deal_one().unwrap();
        assert_eq!(card.to_string(), "6C");
        assert_eq!(deck.count(), 46);
    }

    #[test]
    fn deal_keeps_order() {
        let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
        let expected = deck.cards()[..5].to_vec();
        assert_eq!(deck.deal(5).unwrap(), expected);
        assert_eq!(deck.count(), 47);
    }

    #[test]
    fn deal_never_repeats() {
        let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(3));
        let mut seen = HashSet::default();
        while deck.count() >= 5 {
            for card in deck.deal(5).unwrap() {
                assert!(seen.insert(card), "{card} dealt twice");
            }
        }

        assert_eq!(deck.count(), 2);
        assert_eq!(seen.len(), 50);
    }

    #[test]
    fn deal_too_many() {
        let mut deck = Deck::default();
        deck.deal(50).unwrap();

        let res = deck.deal(3);
        assert_eq!(
            res,
            Err(Error::InsufficientCards {
                requested: 3,
                remaining: 2
            })
        );
        assert_eq!(deck.count(), 2);

        assert_eq!(deck.deal(2).unwrap().len(), 2);
        assert!(deck.is_empty());
        assert_eq!(
            deck.deal_one(),
            Err(Error::InsufficientCards {
                requested: 1,
                remaining: 0
            })
        );
        assert_eq!(deck.deal(0), Ok(vec![]));
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut hands = HashSet::default();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_598_960);
    }

    #[test]
    fn deck_for_each_small() {
        let mut deck = Deck::default();
        deck.deal(49).unwrap();

        let mut count = 0;
        deck.for_each(5, |_| count += 1);
        assert_eq!(count, 0);

        deck.for_each(3, |cards| {
            assert_eq!(codes(cards), ["JS", "QS", "KS"]);
            count += 1;
        });
        assert_eq!(count, 1);
    }
}
