// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use drawpoker_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td: Card = "10D".parse().unwrap();
//! assert_eq!(ah.to_string(), "AH");
//! assert_eq!(td.rank().value(), 10);
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards from the front of the deck:
//!
//! ```
//! # use drawpoker_cards::Deck;
//! let mut deck = Deck::default();
//! let hand = deck.deal(5).unwrap();
//! assert_eq!(hand.len(), 5);
//! assert_eq!(deck.count(), 47);
//! ```
//!
//! The deck can also iterate all k-cards hands, for example all 5 cards hands:
//!
//! ```no_run
//! # use drawpoker_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Error, ParseCardError, Rank, Suit};

pub mod image;
pub use image::CardImage;
