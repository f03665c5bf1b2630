// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{self, Stylize},
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use std::io;

use drawpoker_core::{Game, Status, poker::Chips};

/// A player action mapped from a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    /// Toggle the card at the given slot.
    Toggle(usize),
    /// Draw the discards.
    Draw,
    /// Place the selected bet.
    Bet,
    /// Select the next bet size.
    RaiseBet,
    /// Select the previous bet size.
    LowerBet,
    /// Leave the game.
    Quit,
}

impl Action {
    fn from_key(code: KeyCode) -> Option<Action> {
        match code {
            KeyCode::Char(c @ '1'..='5') => Some(Action::Toggle(c as usize - '1' as usize)),
            KeyCode::Char('d') | KeyCode::Enter => Some(Action::Draw),
            KeyCode::Char('b') => Some(Action::Bet),
            KeyCode::Char('+') | KeyCode::Right => Some(Action::RaiseBet),
            KeyCode::Char('-') | KeyCode::Left => Some(Action::LowerBet),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        }
    }
}

/// The terminal application state.
struct App {
    game: Game,
    bet_idx: usize,
    message: Option<String>,
}

impl App {
    fn new(game: Game, bet_idx: usize) -> Self {
        Self {
            game,
            bet_idx,
            message: None,
        }
    }

    fn selected_bet(&self) -> Chips {
        self.game
            .bet_sizes()
            .get(self.bet_idx)
            .copied()
            .unwrap_or(Chips::ZERO)
    }

    /// Handles an action, returns false when the player quits.
    fn handle(&mut self, action: Action) -> bool {
        self.message = None;

        let res = match action {
            Action::Toggle(idx) => self.game.toggle_discard_at(idx),
            Action::Draw => self.game.draw().map(|_| ()),
            Action::Bet => {
                let bet = self.selected_bet();
                self.game.place_bet(bet)
            }
            Action::RaiseBet => {
                if self.game.can_bet() && self.bet_idx + 1 < self.game.bet_sizes().len() {
                    self.bet_idx += 1;
                }
                Ok(())
            }
            Action::LowerBet => {
                if self.game.can_bet() {
                    self.bet_idx = self.bet_idx.saturating_sub(1);
                }
                Ok(())
            }
            Action::Quit => return false,
        };

        if let Err(e) = res {
            debug!("{action:?} failed: {e}");
            self.message = Some(e.to_string());
        }

        true
    }

    /// The screen lines.
    fn lines(&self) -> Vec<String> {
        let game = &self.game;

        let result = game.result().map(|r| r.to_string()).unwrap_or_default();
        let scores = format!(
            "{result:<16}Bank: {:<8}Bet: {:<6}Won: {}",
            game.bankroll().to_string(),
            game.bet().to_string(),
            game.won()
        );

        let cards = game
            .card_images()
            .iter()
            .enumerate()
            .map(|(i, img)| format!("{}:{:<4}", i + 1, img.to_string()))
            .collect::<Vec<_>>()
            .join(" ");

        let actions = match game.status() {
            Status::AwaitingDiscards => "[1-5] discard  [d] draw  [q] quit".to_string(),
            Status::AwaitingBet | Status::Finished => format!(
                "[b] bet {}  [+/-] change bet  [q] quit",
                self.selected_bet()
            ),
        };

        vec![
            "DRAW POKER".to_string(),
            scores,
            String::new(),
            cards,
            String::new(),
            actions,
            self.message.clone().unwrap_or_default(),
        ]
    }
}

/// Runs the terminal loop.
pub fn run(game: Game, bet_idx: usize) -> Result<()> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;

    let res = event_loop(&mut stdout, App::new(game, bet_idx));

    execute!(
        stdout,
        Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        cursor::Show
    )?;
    disable_raw_mode()?;

    res
}

fn event_loop(w: &mut impl io::Write, mut app: App) -> Result<()> {
    print_app(w, &app)?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };

        if key.kind != KeyEventKind::Press {
            continue;
        }

        if let Some(action) = Action::from_key(key.code) {
            if !app.handle(action) {
                break;
            }

            print_app(w, &app)?;
        }
    }

    Ok(())
}

fn print_app(w: &mut impl io::Write, app: &App) -> Result<()> {
    execute!(w, Clear(ClearType::All))?;

    for (row, line) in app.lines().iter().enumerate() {
        queue!(
            w,
            cursor::MoveTo(0, row as u16),
            style::PrintStyledContent(line.as_str().dark_green())
        )?;
    }

    w.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawpoker_core::Config;

    fn new_app() -> App {
        let game = Game::new(Config {
            seed: Some(11),
            ..Config::default()
        });
        App::new(game, 0)
    }

    #[test]
    fn key_actions() {
        assert_eq!(Action::from_key(KeyCode::Char('1')), Some(Action::Toggle(0)));
        assert_eq!(Action::from_key(KeyCode::Char('5')), Some(Action::Toggle(4)));
        assert_eq!(Action::from_key(KeyCode::Char('6')), None);
        assert_eq!(Action::from_key(KeyCode::Char('d')), Some(Action::Draw));
        assert_eq!(Action::from_key(KeyCode::Char('b')), Some(Action::Bet));
        assert_eq!(Action::from_key(KeyCode::Char('q')), Some(Action::Quit));
    }

    #[test]
    fn play_round() {
        let mut app = new_app();
        assert!(app.handle(Action::RaiseBet));
        assert_eq!(app.selected_bet(), Chips::new(10));

        app.handle(Action::Bet);
        assert_eq!(app.game.status(), Status::AwaitingDiscards);
        assert_eq!(app.game.bankroll(), Chips::new(90));

        // Bet size is locked during a round.
        app.handle(Action::RaiseBet);
        assert_eq!(app.selected_bet(), Chips::new(10));

        app.handle(Action::Toggle(1));
        assert!(app.lines()[3].contains("2:▒▒"));

        app.handle(Action::Bet);
        assert_eq!(app.message.as_deref(), Some("round in progress"));

        app.handle(Action::Draw);
        assert_eq!(app.game.status(), Status::Finished);
        assert_eq!(app.message, None);
        assert!(!app.lines()[3].contains("▒▒"));

        assert!(!app.handle(Action::Quit));
    }

    #[test]
    fn bet_bounds() {
        let mut app = new_app();
        app.handle(Action::LowerBet);
        assert_eq!(app.selected_bet(), Chips::new(5));

        for _ in 0..10 {
            app.handle(Action::RaiseBet);
        }
        assert_eq!(app.selected_bet(), Chips::new(25));
    }
}
