//! Hand evaluation and player/dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// The evaluated value of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandValue {
    /// Best total not exceeding 21 where possible.
    pub total: u8,
    /// Whether an ace is still counted as 11 in the total.
    pub is_soft: bool,
}

/// Evaluates a set of cards.
///
/// Aces are counted as 11, then demoted to 1 one at a time while the total
/// exceeds 21 and an undemoted ace remains. The result is the highest total
/// not exceeding 21 that the aces allow, or the lowest hard total if every
/// combination busts.
#[must_use]
pub fn evaluate(cards: &[Card]) -> HandValue {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        total = total.saturating_add(card.value());
    }

    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    HandValue {
        total,
        is_soft: aces > 0 && total <= 21,
    }
}

/// Returns whether the cards form a natural: exactly two cards, one ace and
/// one ten-valued card.
///
/// A natural pays more than a 21 assembled from three or more cards, so the
/// two are distinguished here rather than by total alone.
#[must_use]
pub fn is_natural(cards: &[Card]) -> bool {
    match cards {
        [a, b] => (a.is_ace() && b.is_ten_value()) || (b.is_ace() && a.is_ten_value()),
        _ => false,
    }
}

/// The player's hand.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand, in deal order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate(&self.cards).total
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate(&self.cards).is_soft
    }

    /// Returns whether the hand is a natural (two-card 21).
    #[must_use]
    pub fn is_natural(&self) -> bool {
        is_natural(&self.cards)
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// The dealer's hand.
///
/// The first card dealt to the dealer is the hole card and stays face-down
/// until the dealer acts; the second card is the up card.
#[derive(Debug, Clone, Default)]
pub struct DealerHand {
    /// Cards in the hand, in deal order. Index 0 is the hole card.
    cards: Vec<Card>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the face-up card (the second card dealt).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.get(1)
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// The dealer's total once the hole card is revealed.
    ///
    /// `None` while the hole stays hidden; the up card alone does not fix
    /// the total, so the value is masked rather than partial.
    #[must_use]
    pub fn visible_value(&self) -> Option<u8> {
        self.hole_revealed.then(|| self.value())
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate(&self.cards).total
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate(&self.cards).is_soft
    }

    /// Returns whether the hand is a natural (two-card 21).
    #[must_use]
    pub fn is_natural(&self) -> bool {
        is_natural(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}
