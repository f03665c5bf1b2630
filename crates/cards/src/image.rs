// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards display resources.
//!
//! Each card face maps to an image keyed by the card code, a card marked for
//! discard is shown with the card back.
use std::fmt;

use crate::Card;

/// The image shown for a card slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardImage {
    /// The face of a card.
    Face(Card),
    /// The card back.
    Back,
}

impl CardImage {
    /// The reserved key for the card back image.
    pub const BACK_KEY: &'static str = "BLUE_BACK";

    /// The image for a card that may be covered.
    pub fn for_card(card: Card, covered: bool) -> Self {
        if covered {
            CardImage::Back
        } else {
            CardImage::Face(card)
        }
    }

    /// The image resource key.
    pub fn key(&self) -> String {
        match self {
            CardImage::Face(card) => card.to_string(),
            CardImage::Back => Self::BACK_KEY.to_string(),
        }
    }

    /// The image resource path relative to the assets root.
    pub fn path(&self) -> String {
        format!("images/{}.svg", self.key())
    }
}

impl fmt::Display for CardImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardImage::Face(card) => write!(f, "{card}"),
            CardImage::Back => write!(f, "▒▒"),
        }
    }
}
