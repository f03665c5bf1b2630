// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw poker game engine.
//!
//! A [Game] deals a hand when a bet is placed, lets the player toggle the
//! cards to discard, and on draw replaces the discards, classifies the hand
//! and credits the payout:
//!
//! ```
//! # use drawpoker_core::{Config, Game, Status, poker::Chips};
//! let mut game = Game::new(Config {
//!     seed: Some(7),
//!     ..Config::default()
//! });
//!
//! game.place_bet(Chips::new(5)).unwrap();
//! game.toggle_discard_at(0).unwrap();
//!
//! let result = game.draw().unwrap().unwrap();
//! assert_eq!(game.status(), Status::Finished);
//! assert_eq!(game.bankroll(), Chips::new(95) + result.payout);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod discard;
pub mod error;
pub mod game_state;
pub mod poker;

pub use discard::{DiscardSelection, redraw};
pub use error::{Error, Result};
pub use game_state::{Config, Game, GameView, Round, RoundResult, Status};
