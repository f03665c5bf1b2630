// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// Total hands      2598960
// Elapsed:         0.061s
// Hands/sec:       42605901
//
// High Card:       1302540
// One Pair:        760320
// Jacks or Better: 337920
// Two Pair:        123552
// Three of a Kind: 54912
// Straight:        10200
// Flush:           5108
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  36
// Royal Flush:     4
// ```

use anyhow::{Result, bail};
use std::time::Instant;

use drawpoker_eval::*;

fn main() -> Result<()> {
    let now = Instant::now();
    let mut counts = [0usize; 11];
    let mut skipped = 0usize;

    Deck::default().for_each(HAND_SIZE, |cards| match <[Card; HAND_SIZE]>::try_from(cards) {
        Ok(hand) => counts[evaluate(&hand) as usize] += 1,
        Err(_) => skipped += 1,
    });

    if skipped > 0 {
        bail!("{skipped} combinations were not {HAND_SIZE} cards");
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in HandCategory::all() {
        let label = format!("{category}:");
        println!("{label:<17}{}", counts[category as usize]);
    }

    Ok(())
}
