//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full round flow:
//! betting against a session bankroll, dealing from a multi-deck shoe,
//! player actions (hit, stand, double down), dealer play, and settlement.
//! Rendering and input belong to the caller; every action returns either a
//! masked table snapshot or a settled result to draw from.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{Game, GameOptions, RoundProgress};
//!
//! let mut game = Game::new(GameOptions::default(), 1000, 42);
//! match game.start_round(25) {
//!     Ok(RoundProgress::InPlay(_snapshot)) => { /* render, prompt for an action */ }
//!     Ok(RoundProgress::Settled(_result)) => { /* a natural on the deal */ }
//!     Err(_err) => { /* bad bet, re-prompt */ }
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bankroll;
pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;

// Re-export main types
pub use bankroll::Bankroll;
pub use card::{Card, DECK_SIZE, SUITS, Suit};
pub use error::{ActionError, BetError, EmptyShoeError};
pub use game::{Game, GameState};
pub use hand::{DealerHand, Hand, HandValue, evaluate, is_natural};
pub use options::{GameOptions, RoundingMode};
pub use result::{HandOutcome, RoundProgress, RoundResult, RoundSnapshot};
pub use shoe::Shoe;
