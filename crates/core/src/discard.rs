// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Discard selection and redraw.
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    poker::{Card, Deck, Hand},
};

/// The cards a player marked for replacement, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardSelection {
    cards: Vec<Card>,
}

impl DiscardSelection {
    /// Returns a copy of this selection with `card` removed if present or
    /// appended if absent.
    #[must_use]
    pub fn toggled(&self, card: Card) -> Self {
        let mut selection = self.clone();
        selection.toggle(card);
        selection
    }

    /// Removes `card` if selected, selects it otherwise.
    pub fn toggle(&mut self, card: Card) {
        if let Some(pos) = self.cards.iter().position(|c| c == &card) {
            self.cards.remove(pos);
        } else {
            self.cards.push(card);
        }
    }

    /// Checks if a card is selected.
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Number of selected cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the selection is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The selected cards in selection order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// Replaces the `discards` cards in `hand` with cards dealt from `deck`.
///
/// Replacements are dealt in `discards` order, the first discard gets the first
/// card from the deck. Returns a new hand, if a discard is not in the hand
/// neither the hand nor the deck are changed.
pub fn redraw(hand: &Hand, discards: &[Card], deck: &mut Deck) -> Result<Hand> {
    let mut positions = Vec::with_capacity(discards.len());
    for card in discards {
        match hand.iter().position(|c| c == card) {
            Some(pos) if !positions.contains(&pos) => positions.push(pos),
            // A card discarded twice is gone after the first replacement.
            _ => return Err(Error::CardNotInHand(*card)),
        }
    }

    let replacements = deck.deal(positions.len())?;

    let mut new_hand = *hand;
    for (pos, card) in positions.into_iter().zip(replacements) {
        debug!("Replaced {} with {}", new_hand[pos], card);
        new_hand[pos] = card;
    }

    Ok(new_hand)
}
