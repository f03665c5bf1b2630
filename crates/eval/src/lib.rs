// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw poker hand classifier and paytable.
//!
//! To classify a five cards hand use [evaluate] and then [payout] to get the
//! amount won for a bet:
//!
//! ```
//! # use drawpoker_eval::*;
//! // 10H, JH, QH, KH, AH
//! let hand = ["JH", "10H", "AH", "QH", "KH"].map(|c| c.parse::<Card>().unwrap());
//! let category = evaluate(&hand);
//! assert_eq!(category, HandCategory::RoyalFlush);
//! assert_eq!(payout(category, 5), 1_250);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HAND_SIZE, HandCategory, evaluate};

pub mod paytable;
pub use paytable::payout;

// Reexport cards types.
pub use drawpoker_cards::{Card, Deck, Rank, Suit};
