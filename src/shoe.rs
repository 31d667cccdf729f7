//! Multi-deck dealing shoe.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, SUITS};
use crate::error::EmptyShoeError;

/// A dealing shoe holding one or more shuffled decks.
///
/// Cards are dealt from the top (the end of the internal vector). Rebuilding
/// discards whatever is left of the previous shoe and starts over with a full
/// freshly shuffled one, so no card composition carries across a reshuffle.
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Cards remaining, top of the shoe last.
    cards: Vec<Card>,
    /// Number of decks per rebuild.
    num_decks: u8,
    /// Random number generator driving every shuffle.
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a shoe of `num_decks` decks, shuffled with the given seed.
    ///
    /// The same seed always produces the same card order.
    #[must_use]
    pub fn new(num_decks: u8, seed: u64) -> Self {
        let mut shoe = Self {
            cards: Vec::new(),
            num_decks,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.rebuild();
        shoe
    }

    /// Discards the remaining cards and shuffles a fresh full shoe.
    pub fn rebuild(&mut self) {
        self.cards.clear();
        self.cards.reserve(self.num_decks as usize * DECK_SIZE);

        for _ in 0..self.num_decks {
            for suit in SUITS {
                for rank in 1..=13 {
                    self.cards.push(Card::new(suit, rank));
                }
            }
        }

        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyShoeError`] if the shoe is empty. The round engine
    /// rebuilds the shoe before dealing, so this surfacing mid-round means an
    /// engine invariant was broken.
    pub fn draw(&mut self) -> Result<Card, EmptyShoeError> {
        self.cards.pop().ok_or(EmptyShoeError)
    }

    /// Returns whether the shoe has fewer than `threshold` cards left.
    #[must_use]
    pub fn needs_reshuffle(&self, threshold: usize) -> bool {
        self.cards.len() < threshold
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of decks the shoe rebuilds with.
    #[must_use]
    pub const fn num_decks(&self) -> u8 {
        self.num_decks
    }

    /// Replaces the shoe contents with a fixed card order.
    ///
    /// The last card of `cards` is the top of the shoe and will be drawn
    /// first. Intended for deterministic replays and tests.
    pub fn load(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }
}
