//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the whole memory-game engine: board dealing, the
//! flip/match/mismatch state machine, and the bookkeeping a caller needs to
//! render a game. It has **zero dependencies** on UI, networking, or I/O,
//! making it:
//!
//! - **Deterministic**: Same seed deals the same board (for replays and tests)
//! - **Testable**: The whole pair cycle is driven through one entry point
//! - **Portable**: Can back any frontend (mobile, terminal, headless)
//!
//! # Module Structure
//!
//! - [`board`]: the dealt card sequence and its face/match state
//! - [`game`]: the two-card flip state machine, move and pair counters
//! - [`rng`]: seeded Fisher-Yates dealing of the paired identity deck
//! - [`session`]: immutable per-session configuration (preset, custom images)
//! - [`snapshot`]: fixed-size read-model for presentation layers
//!
//! # Game Rules
//!
//! - Cards carry one of `num_pairs` identities, each on exactly two cards
//! - Flipping the first card of a pair is `Pending`; flipping the second
//!   completes one move and yields `Match` or `Mismatch`
//! - Matched cards stay face-up permanently
//! - Mismatched cards stay face-up until the caller reverts them with
//!   [`MemoryGame::reset_unmatched`] after its presentation delay; the
//!   engine schedules no timers of its own
//! - The game is won once every pair is matched
//!
//! # Example
//!
//! ```
//! use memory_match_core::MemoryGame;
//! use memory_match_core::types::{BoardSize, FlipResult};
//!
//! // Deal an 8-card board from a seed
//! let mut game = MemoryGame::new(BoardSize::Easy, 12345);
//!
//! // The first flip of a pair is always pending
//! assert_eq!(game.flip_card(0).unwrap(), FlipResult::Pending);
//!
//! // The second flip completes a move either way
//! let outcome = game.flip_card(1).unwrap();
//! assert!(outcome.completed_move());
//! assert_eq!(game.num_moves(), 1);
//!
//! // The caller checks for the win after each match
//! assert!(!game.has_won());
//! ```

pub mod board;
pub mod game;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use memory_match_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game::MemoryGame;
pub use rng::{pair_deck, SimpleRng};
pub use session::GameSession;
pub use snapshot::{CardSnapshot, GameSnapshot};
