// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Jacks or better paytable.
use crate::HandCategory;

impl HandCategory {
    /// The bet multiplier paid for this category.
    pub fn multiplier(&self) -> u32 {
        match self {
            HandCategory::RoyalFlush => 250,
            HandCategory::StraightFlush => 50,
            HandCategory::FourOfAKind => 25,
            HandCategory::FullHouse => 9,
            HandCategory::Flush => 6,
            HandCategory::Straight => 4,
            HandCategory::ThreeOfAKind => 3,
            HandCategory::TwoPair => 2,
            HandCategory::JacksOrBetter => 1,
            HandCategory::OnePair | HandCategory::HighCard => 0,
        }
    }
}

/// Returns the amount paid for a hand category given the bet.
pub fn payout(category: HandCategory, bet: u32) -> u32 {
    bet.saturating_mul(category.multiplier())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payouts() {
        assert_eq!(payout(HandCategory::RoyalFlush, 5), 1_250);
        assert_eq!(payout(HandCategory::StraightFlush, 5), 250);
        assert_eq!(payout(HandCategory::FourOfAKind, 10), 250);
        assert_eq!(payout(HandCategory::FullHouse, 5), 45);
        assert_eq!(payout(HandCategory::Flush, 5), 30);
        assert_eq!(payout(HandCategory::Straight, 25), 100);
        assert_eq!(payout(HandCategory::ThreeOfAKind, 5), 15);
        assert_eq!(payout(HandCategory::TwoPair, 5), 10);
        assert_eq!(payout(HandCategory::JacksOrBetter, 5), 5);
        assert_eq!(payout(HandCategory::OnePair, 5), 0);
        assert_eq!(payout(HandCategory::HighCard, 25), 0);
    }

    #[test]
    fn multipliers_follow_category_order() {
        let multipliers = HandCategory::all()
            .map(|c| c.multiplier())
            .collect::<Vec<_>>();
        assert!(multipliers.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(payout(HandCategory::RoyalFlush, u32::MAX), u32::MAX);
    }
}
