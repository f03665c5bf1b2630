// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Types used in a draw poker game.
use serde::{Deserialize, Serialize};
use std::{fmt, ops};

pub use drawpoker_eval::{Card, Deck, HAND_SIZE, HandCategory, Rank, Suit, evaluate, payout};

/// A five cards hand.
pub type Hand = [Card; HAND_SIZE];

/// Chips amount.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Chips(u32);

impl Chips {
    /// The zero chips.
    pub const ZERO: Chips = Chips(0);

    /// Creates chips with the given value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The integer amount.
    pub fn amount(&self) -> u32 {
        self.0
    }

    /// The chips paid for a hand category with this bet.
    pub fn payout(&self, category: HandCategory) -> Chips {
        Chips(payout(category, self.0))
    }
}

impl From<u32> for Chips {
    fn from(val: u32) -> Self {
        Chips(val)
    }
}

impl From<Chips> for u32 {
    fn from(val: Chips) -> Self {
        val.0
    }
}

impl ops::Add for Chips {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Chips(self.0.saturating_add(rhs.0))
    }
}

impl ops::AddAssign for Chips {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl ops::Sub<Chips> for Chips {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl ops::SubAssign for Chips {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self.0;
        if amount >= 1_000_000_000 {
            write!(
                f,
                "${},{:03},{:03},{:03}",
                amount / 1_000_000_000,
                amount % 1_000_000_000 / 1_000_000,
                amount % 1_000_000 / 1_000,
                amount % 1000
            )
        } else if amount >= 1_000_000 {
            write!(
                f,
                "${},{:03},{:03}",
                amount / 1_000_000,
                amount % 1_000_000 / 1_000,
                amount % 1000
            )
        } else if amount >= 1_000 {
            write!(f, "${},{:03}", amount / 1000, amount % 1000)
        } else {
            write!(f, "${}", amount)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chips_formatting() {
        assert_eq!(Chips(0).to_string(), "$0");
        assert_eq!(Chips(123).to_string(), "$123");
        assert_eq!(Chips(1_000).to_string(), "$1,000");
        assert_eq!(Chips(12_345).to_string(), "$12,345");
        assert_eq!(Chips(1_234_567).to_string(), "$1,234,567");
        assert_eq!(Chips(1_000_000_000).to_string(), "$1,000,000,000");
        assert_eq!(Chips(u32::MAX).to_string(), "$4,294,967,295");
    }

    #[test]
    fn chips_arithmetic() {
        let mut bank = Chips::new(100);
        bank -= Chips::new(25);
        assert_eq!(bank, Chips::new(75));
        bank += Chips::new(25).payout(HandCategory::FullHouse);
        assert_eq!(bank.amount(), 300);
        assert_eq!(Chips::new(5) - Chips::new(10), Chips::ZERO);
        assert_eq!(Chips::new(u32::MAX) + Chips::new(1), Chips::new(u32::MAX));
    }
}
