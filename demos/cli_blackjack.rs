//! CLI blackjack example.
//!
//! A minimal presentation adapter: it forwards typed actions to the engine
//! and renders the snapshots and results the engine hands back.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Card, Game, GameOptions, GameState, HandOutcome, RoundProgress, RoundResult, Suit};

fn main() {
    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), 1000, seed);

    loop {
        let minimum = game.options.minimum_bet;
        if game.bankroll() < minimum {
            println!("Not enough money for the minimum bet. Game over.");
            break;
        }

        println!("\nBankroll: ${}", game.bankroll());
        let Some(bet) = prompt_usize(&format!("Bet amount (minimum {minimum}, 0 to quit): "))
        else {
            break;
        };
        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        match game.start_round(bet) {
            Ok(RoundProgress::Settled(result)) => {
                print_result(&game, &result);
                continue;
            }
            Ok(RoundProgress::InPlay(_)) => {}
            Err(err) => {
                println!("Bet error: {err}");
                continue;
            }
        }

        while game.state() == GameState::PlayerTurn {
            print_table(&game);

            let action = prompt_line("(h)it, (s)tand, (d)ouble, (q)uit: ");
            let settled = match action.as_str() {
                "h" | "hit" => match game.hit() {
                    Ok(RoundProgress::InPlay(_)) => None,
                    Ok(RoundProgress::Settled(result)) => Some(result),
                    Err(err) => {
                        println!("Action error: {err}");
                        None
                    }
                },
                "s" | "stand" => match game.stand() {
                    Ok(result) => Some(result),
                    Err(err) => {
                        println!("Action error: {err}");
                        None
                    }
                },
                "d" | "double" => match game.double_down() {
                    Ok(result) => Some(result),
                    Err(err) => {
                        println!("Action error: {err}");
                        None
                    }
                },
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    None
                }
            };

            if let Some(result) = settled {
                print_result(&game, &result);
            }
        }
    }

    println!("\nThanks for playing! You're leaving with ${}", game.bankroll());
}

fn print_table(game: &Game) {
    let snapshot = game.snapshot();

    let dealer: Vec<String> = snapshot
        .dealer_hand
        .iter()
        .copied()
        .map(|card| card.map_or_else(|| "??".to_owned(), format_card))
        .collect();
    let player: Vec<String> = snapshot.player_hand.iter().copied().map(format_card).collect();

    println!("\nDealer: {}", dealer.join(" "));
    println!("You:    {} (value {})", player.join(" "), snapshot.player_value);
}

fn print_result(game: &Game, result: &RoundResult) {
    for card in &result.dealer_draws {
        println!("Dealer draws {}", format_card(*card));
    }

    let dealer: Vec<String> = game
        .dealer_hand()
        .cards()
        .iter()
        .copied()
        .map(format_card)
        .collect();
    println!("Dealer: {} (value {})", dealer.join(" "), result.dealer_value);

    let message = match result.outcome {
        HandOutcome::Blackjack => "Blackjack! You win 1.5x your bet.",
        HandOutcome::Win => "You win!",
        HandOutcome::DealerBust => "Dealer busts! You win!",
        HandOutcome::Lose => "Dealer wins.",
        HandOutcome::Bust => "Bust! You lose your bet.",
        HandOutcome::DealerBlackjack => "Dealer has blackjack.",
        HandOutcome::Push => "Push. Your bet is returned.",
    };
    println!("{message} ({:+})", result.bankroll_delta);
}

fn format_card(card: Card) -> String {
    let rank = match card.rank {
        1 => "A".to_owned(),
        11 => "J".to_owned(),
        12 => "Q".to_owned(),
        13 => "K".to_owned(),
        n => n.to_string(),
    };
    let suit = match card.suit {
        Suit::Hearts => '♥',
        Suit::Diamonds => '♦',
        Suit::Clubs => '♣',
        Suit::Spades => '♠',
    };
    format!("{rank}{suit}")
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let line = prompt_line(prompt);
        if line == "q" || line == "quit" {
            return None;
        }
        match line.parse() {
            Ok(value) => return Some(value),
            Err(_) => println!("Enter a number."),
        }
    }
}
