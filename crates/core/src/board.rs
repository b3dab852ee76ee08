//! Board module - the ordered card sequence for one game
//!
//! A board is dealt once from a preset and a seed, and then only mutated
//! through the crate-internal face/match setters, so the state machine in
//! [`crate::game`] is the sole authority over card state. Uses a
//! fixed-capacity vector for zero-allocation deals.
//!
//! Positions are flat indices `0..len()`; the presentation layer maps them
//! onto the preset's `width x height` grid.

use arrayvec::ArrayVec;

use crate::rng::{pair_deck, SimpleRng};
use memory_match_types::{BoardSize, Card, MAX_CARDS};

/// The card board for a single game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    board_size: BoardSize,
    cards: ArrayVec<Card, MAX_CARDS>,
}

impl Board {
    /// Deal a fresh board for the given preset
    ///
    /// Each pair identity appears on exactly two cards, in a random
    /// permutation determined by `seed`. All cards start face-down and
    /// unmatched.
    pub fn deal(board_size: BoardSize, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let cards = pair_deck(board_size.num_pairs(), &mut rng)
            .iter()
            .map(|&identity| Card::new(identity))
            .collect();
        Self { board_size, cards }
    }

    /// The preset this board was dealt for
    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    /// Number of cards on the board
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the board holds no cards
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get the card at a position
    /// Returns None if out of bounds
    pub fn card(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// All cards in board order
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Whether every card on the board has been matched
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|card| card.is_matched)
    }

    /// Reveal the card at `position`
    ///
    /// Callers must bounds-check first.
    pub(crate) fn set_face_up(&mut self, position: usize) {
        self.cards[position].is_face_up = true;
    }

    /// Permanently match the card at `position`
    ///
    /// Also forces the card face-up: a matched card is always revealed.
    pub(crate) fn set_matched(&mut self, position: usize) {
        let card = &mut self.cards[position];
        card.is_matched = true;
        card.is_face_up = true;
    }

    /// Turn every face-up, unmatched card back face-down
    ///
    /// Returns the number of cards reverted. Matched cards stay face-up.
    pub(crate) fn flip_down_unmatched(&mut self) -> usize {
        let mut reverted = 0;
        for card in &mut self.cards {
            if card.is_face_up && !card.is_matched {
                card.is_face_up = false;
                reverted += 1;
            }
        }
        reverted
    }
}
