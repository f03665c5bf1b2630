// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game errors.
use crate::poker::{Card, Chips};

/// A game error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The deck ran out of cards.
    #[error(transparent)]
    Deck(#[from] drawpoker_cards::Error),
    /// A discard refers to a card that is not in the hand.
    #[error("card {0} is not in the hand")]
    CardNotInHand(Card),
    /// A hand slot index out of range.
    #[error("invalid card index {0}")]
    InvalidCardIndex(usize),
    /// The bet is zero or not one of the allowed bet sizes.
    #[error("invalid bet {0}")]
    InvalidBet(Chips),
    /// The bet is larger than the bankroll.
    #[error("bet {bet} exceeds bankroll {bankroll}")]
    InsufficientBankroll {
        /// The requested bet.
        bet: Chips,
        /// The bankroll available.
        bankroll: Chips,
    },
    /// A bet was placed before the current round was drawn.
    #[error("round in progress")]
    RoundInProgress,
    /// Discards can only be changed before the draw.
    #[error("no round awaiting discards")]
    NoRoundInProgress,
}

/// Result type for game operations.
pub type Result<T> = std::result::Result<T, Error>;
