//! Shared types module - vocabulary for the memory-match engine
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are plain data with no game logic, making them usable in any
//! context (core engine, presentation layer, wire formats).
//!
//! # Board Presets
//!
//! The engine supports a closed set of difficulty presets. Grid layout code
//! needs a fixed, finite set of aspect ratios, so board sizes are presets
//! rather than an arbitrary-size generator:
//!
//! | Preset | Cards | Width | Height | Pairs |
//! |--------|-------|-------|--------|-------|
//! | `Easy` | 8 | 2 | 4 | 4 |
//! | `Medium` | 18 | 3 | 6 | 9 |
//! | `Hard` | 24 | 4 | 6 | 12 |
//!
//! Every preset satisfies `width * height == card_count` and
//! `num_pairs == card_count / 2`.
//!
//! # Examples
//!
//! ```
//! use memory_match_types::{BoardSize, Card, FlipResult, MAX_CARDS};
//!
//! // Look up a preset by total card count
//! let size = BoardSize::from_card_count(8).unwrap();
//! assert_eq!(size, BoardSize::Easy);
//! assert_eq!(size.width(), 2);
//! assert_eq!(size.height(), 4);
//! assert_eq!(size.num_pairs(), 4);
//!
//! // Parse from string (case-insensitive)
//! let parsed = BoardSize::from_str("hard").unwrap();
//! assert_eq!(parsed.card_count(), MAX_CARDS);
//!
//! // Cards start face-down and unmatched
//! let card = Card::new(3);
//! assert!(!card.is_face_up);
//! assert!(!card.is_matched);
//!
//! // Flip results label the three comparison outcomes
//! assert_eq!(FlipResult::Match.as_str(), "match");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest supported board (the `Hard` preset)
pub const MAX_CARDS: usize = 24;

/// Largest supported pair count (`MAX_CARDS / 2`)
pub const MAX_PAIRS: usize = 12;

/// Total card counts with a matching preset, ascending
pub const SUPPORTED_CARD_COUNTS: [usize; 3] = [8, 18, 24];


/// The three difficulty presets
///
/// Each preset fixes the total card count and the grid the presentation
/// layer lays the cards out on. `Easy` is the default starting board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BoardSize {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl BoardSize {
    /// All presets in ascending card count
    pub const ALL: [BoardSize; 3] = [BoardSize::Easy, BoardSize::Medium, BoardSize::Hard];

    /// Total number of cards on the board
    pub fn card_count(&self) -> usize {
        match self {
            BoardSize::Easy => 8,
            BoardSize::Medium => 18,
            BoardSize::Hard => 24,
        }
    }

    /// Grid width in cards
    pub fn width(&self) -> usize {
        match self {
            BoardSize::Easy => 2,
            BoardSize::Medium => 3,
            BoardSize::Hard => 4,
        }
    }

    /// Grid height in cards
    pub fn height(&self) -> usize {
        self.card_count() / self.width()
    }

    /// Number of card pairs on the board
    pub fn num_pairs(&self) -> usize {
        self.card_count() / 2
    }

    /// Look up the preset with the given total card count
    ///
    /// The lookup is total over [`SUPPORTED_CARD_COUNTS`] and fails with
    /// [`GameError::InvalidBoardSize`] for any other count.
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_match_types::BoardSize;
    ///
    /// assert_eq!(BoardSize::from_card_count(18), Ok(BoardSize::Medium));
    /// assert!(BoardSize::from_card_count(10).is_err());
    /// ```
    pub fn from_card_count(card_count: usize) -> Result<Self, GameError> {
        match card_count {
            8 => Ok(BoardSize::Easy),
            18 => Ok(BoardSize::Medium),
            24 => Ok(BoardSize::Hard),
            _ => Err(GameError::InvalidBoardSize { card_count }),
        }
    }

    /// Parse preset from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_match_types::BoardSize;
    ///
    /// assert_eq!(BoardSize::from_str("easy"), Some(BoardSize::Easy));
    /// assert_eq!(BoardSize::from_str("Medium"), Some(BoardSize::Medium));
    /// assert_eq!(BoardSize::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(BoardSize::Easy),
            "medium" => Some(BoardSize::Medium),
            "hard" => Some(BoardSize::Hard),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardSize::Easy => "easy",
            BoardSize::Medium => "medium",
            BoardSize::Hard => "hard",
        }
    }
}

/// Opaque token identifying which image/symbol a card shows
///
/// Identities are 0-based pair indices; exactly two cards on a board carry
/// each identity. Custom games keep their image identifiers in a side table
/// keyed by this index, so the card itself stays `Copy`.
pub type CardIdentity = u8;

/// One card on the board
///
/// Invariant: `is_matched` implies `is_face_up`, and a matched card never
/// returns face-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Which pair this card belongs to
    pub identity: CardIdentity,
    /// Whether the card is currently revealed
    pub is_face_up: bool,
    /// Whether the card has been permanently matched
    pub is_matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card
    pub fn new(identity: CardIdentity) -> Self {
        Self {
            identity,
            is_face_up: false,
            is_matched: false,
        }
    }

    /// Whether two cards belong to the same pair
    pub fn matches(&self, other: &Card) -> bool {
        self.identity == other.identity
    }
}

/// Outcome of a single flip
///
/// The caller decides what to do next from this value: wait for the second
/// flip, play a match animation and check for a win, or schedule the
/// face-down reversal of two mismatched cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipResult {
    /// First card of a pair revealed; awaiting the second flip
    Pending,
    /// Second card revealed and the identities are equal
    Match,
    /// Second card revealed and the identities differ
    Mismatch,
}

impl FlipResult {
    /// Convert to lowercase string for log/event labels
    pub fn as_str(&self) -> &'static str {
        match self {
            FlipResult::Pending => "pending",
            FlipResult::Match => "match",
            FlipResult::Mismatch => "mismatch",
        }
    }

    /// Whether this flip completed a two-card comparison
    pub fn completed_move(&self) -> bool {
        !matches!(self, FlipResult::Pending)
    }
}

/// Validation failures surfaced synchronously to the caller
///
/// The engine does no I/O, so every error is a local precondition failure;
/// there are no transient modes and no retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// No preset uses the given total card count
    #[error("no supported board uses {card_count} cards")]
    InvalidBoardSize { card_count: usize },
    /// Custom identity list length does not match the board's pair count
    #[error("board needs {expected} custom images, got {actual}")]
    IdentityCountMismatch { expected: usize, actual: usize },
    /// Position outside `[0, card_count)`
    #[error("position {position} is outside the {card_count}-card board")]
    IndexOutOfRange { position: usize, card_count: usize },
    /// Flip of an already face-up card, or any flip after the game is won
    #[error("card {position} cannot be flipped")]
    InvalidMove { position: usize },
}
