// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw poker game state.
//!
//! A [Game] holds the player bankroll and the current [Round]. A round starts
//! when a bet is placed, the player then selects the cards to discard, and the
//! round ends on draw when the final hand is classified and paid.
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use drawpoker_cards::CardImage;

use crate::{
    discard::{DiscardSelection, redraw},
    error::{Error, Result},
    poker::{Card, Chips, Deck, HAND_SIZE, Hand, HandCategory, evaluate},
};

/// Game configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The starting bankroll.
    pub bankroll: Chips,
    /// The bets a player can place, any positive bet if empty.
    pub bet_sizes: Vec<Chips>,
    /// Seed for reproducible decks.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bankroll: Chips::new(100),
            bet_sizes: [5, 10, 15, 20, 25].into_iter().map(Chips::new).collect(),
            seed: None,
        }
    }
}

/// The game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// No round has been played yet.
    AwaitingBet,
    /// The hand has been dealt and the player selects discards.
    AwaitingDiscards,
    /// The round has been drawn and paid.
    Finished,
}

/// The outcome of a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// The final hand.
    pub hand: Hand,
    /// The final hand category.
    pub category: HandCategory,
    /// The round bet.
    pub bet: Chips,
    /// The chips won.
    pub payout: Chips,
}

/// A single round: bet, deal, discard and draw.
#[derive(Debug, Clone)]
pub struct Round {
    deck: Deck,
    hand: Hand,
    discards: DiscardSelection,
    bet: Chips,
    result: Option<RoundResult>,
}

impl Round {
    /// Starts a round dealing the hand from the given deck.
    pub fn deal(bet: Chips, mut deck: Deck) -> Result<Self> {
        let cards = deck.deal(HAND_SIZE)?;
        let hand = Hand::try_from(cards).map_err(|cards| {
            Error::Deck(drawpoker_cards::Error::InsufficientCards {
                requested: HAND_SIZE,
                remaining: cards.len(),
            })
        })?;

        Ok(Self {
            deck,
            hand,
            discards: DiscardSelection::default(),
            bet,
            result: None,
        })
    }

    /// The round status.
    pub fn status(&self) -> Status {
        if self.result.is_some() {
            Status::Finished
        } else {
            Status::AwaitingDiscards
        }
    }

    /// The current hand.
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The cards selected for discard.
    pub fn discards(&self) -> &DiscardSelection {
        &self.discards
    }

    /// The round bet.
    pub fn bet(&self) -> Chips {
        self.bet
    }

    /// The cards left in the deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The round result once drawn.
    pub fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    /// Selects or deselects a hand card for discard.
    pub fn toggle_discard(&mut self, card: Card) -> Result<()> {
        if self.result.is_some() {
            return Err(Error::NoRoundInProgress);
        }

        if !self.hand.contains(&card) {
            return Err(Error::CardNotInHand(card));
        }

        self.discards.toggle(card);
        Ok(())
    }

    /// Replaces the discards, classifies the final hand and computes the payout.
    ///
    /// Returns `None` if the round has already been drawn.
    pub fn draw(&mut self) -> Result<Option<&RoundResult>> {
        if self.result.is_some() {
            return Ok(None);
        }

        let hand = redraw(&self.hand, self.discards.cards(), &mut self.deck)?;
        let category = evaluate(&hand);
        let payout = self.bet.payout(category);

        self.hand = hand;
        Ok(Some(self.result.insert(RoundResult {
            hand,
            category,
            bet: self.bet,
            payout,
        })))
    }
}

/// A snapshot of the game for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// The game status.
    pub status: Status,
    /// The hand cards, empty before the first bet.
    pub hand: Vec<Card>,
    /// The cards selected for discard.
    pub discards: Vec<Card>,
    /// The image key for each hand card.
    pub images: Vec<String>,
    /// The last round category.
    pub result: Option<HandCategory>,
    /// The last round payout.
    pub won: Chips,
    /// The current bankroll.
    pub bankroll: Chips,
    /// The current bet.
    pub bet: Chips,
    /// The draw action is enabled.
    pub can_draw: bool,
    /// The bet actions are enabled.
    pub can_bet: bool,
}

/// A single player draw poker game.
#[derive(Debug)]
pub struct Game {
    config: Config,
    rng: StdRng,
    bankroll: Chips,
    round: Option<Round>,
}

impl Game {
    /// Creates a new game.
    pub fn new(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            bankroll: config.bankroll,
            config,
            rng,
            round: None,
        }
    }

    /// Places a bet, deals a new hand from a freshly shuffled deck.
    pub fn place_bet(&mut self, amount: Chips) -> Result<()> {
        if !self.can_bet() {
            return Err(Error::RoundInProgress);
        }

        let sizes = &self.config.bet_sizes;
        if amount == Chips::ZERO || !(sizes.is_empty() || sizes.contains(&amount)) {
            return Err(Error::InvalidBet(amount));
        }

        if amount > self.bankroll {
            return Err(Error::InsufficientBankroll {
                bet: amount,
                bankroll: self.bankroll,
            });
        }

        let deck = Deck::new_and_shuffled(&mut self.rng);
        let round = Round::deal(amount, deck)?;
        self.bankroll -= amount;

        debug!("Bet {amount} dealt {:?}", round.hand());
        self.round = Some(round);

        Ok(())
    }

    /// Selects or deselects a hand card for discard.
    pub fn toggle_discard(&mut self, card: Card) -> Result<()> {
        match self.round.as_mut() {
            Some(round) => round.toggle_discard(card),
            None => Err(Error::NoRoundInProgress),
        }
    }

    /// Selects or deselects the hand card at `index` for discard.
    pub fn toggle_discard_at(&mut self, index: usize) -> Result<()> {
        let card = self
            .round
            .as_ref()
            .ok_or(Error::NoRoundInProgress)?
            .hand()
            .get(index)
            .copied()
            .ok_or(Error::InvalidCardIndex(index))?;
        self.toggle_discard(card)
    }

    /// Draws the round and credits the payout to the bankroll.
    ///
    /// Does nothing and returns `None` if no round is awaiting discards.
    pub fn draw(&mut self) -> Result<Option<RoundResult>> {
        let Some(round) = self.round.as_mut() else {
            return Ok(None);
        };

        let Some(result) = round.draw()?.cloned() else {
            return Ok(None);
        };

        self.bankroll += result.payout;
        info!(
            "{} bet {} won {} bankroll {}",
            result.category, result.bet, result.payout, self.bankroll
        );

        Ok(Some(result))
    }

    /// The game status.
    pub fn status(&self) -> Status {
        self.round
            .as_ref()
            .map_or(Status::AwaitingBet, Round::status)
    }

    /// The current round.
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// The hand cards, empty before the first bet.
    pub fn hand(&self) -> &[Card] {
        match &self.round {
            Some(round) => round.hand(),
            None => &[],
        }
    }

    /// The cards selected for discard.
    pub fn discards(&self) -> &[Card] {
        match &self.round {
            Some(round) => round.discards().cards(),
            None => &[],
        }
    }

    /// The image for each hand card, discarded cards show the back.
    pub fn card_images(&self) -> Vec<CardImage> {
        let Some(round) = self.round.as_ref() else {
            return Vec::new();
        };

        let covering = round.status() == Status::AwaitingDiscards;
        round
            .hand()
            .iter()
            .map(|c| CardImage::for_card(*c, covering && round.discards().contains(c)))
            .collect()
    }

    /// The last round category.
    pub fn result(&self) -> Option<HandCategory> {
        self.round.as_ref()?.result().map(|r| r.category)
    }

    /// The last round payout.
    pub fn won(&self) -> Chips {
        self.round
            .as_ref()
            .and_then(Round::result)
            .map_or(Chips::ZERO, |r| r.payout)
    }

    /// The current bankroll.
    pub fn bankroll(&self) -> Chips {
        self.bankroll
    }

    /// The current bet.
    pub fn bet(&self) -> Chips {
        self.round.as_ref().map_or(Chips::ZERO, Round::bet)
    }

    /// The bets a player can place.
    pub fn bet_sizes(&self) -> &[Chips] {
        &self.config.bet_sizes
    }

    /// Checks if the draw action is enabled.
    pub fn can_draw(&self) -> bool {
        self.status() == Status::AwaitingDiscards
    }

    /// Checks if the bet actions are enabled.
    pub fn can_bet(&self) -> bool {
        self.status() != Status::AwaitingDiscards
    }

    /// Returns a snapshot of the game state.
    pub fn view(&self) -> GameView {
        GameView {
            status: self.status(),
            hand: self.hand().to_vec(),
            discards: self.discards().to_vec(),
            images: self.card_images().iter().map(CardImage::key).collect(),
            result: self.result(),
            won: self.won(),
            bankroll: self.bankroll(),
            bet: self.bet(),
            can_draw: self.can_draw(),
            can_bet: self.can_bet(),
        }
    }
}
