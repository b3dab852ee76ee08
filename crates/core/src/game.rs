//! Game module - the flip/match/mismatch state machine
//!
//! [`MemoryGame`] is the sole authority over card identities, face state,
//! and match bookkeeping. A caller drives it one flip at a time and reacts
//! to the returned [`FlipResult`]; the game never schedules timers and never
//! reverts cards on its own.
//!
//! # State machine
//!
//! Between completed comparisons at most one face-up, unmatched card exists:
//!
//! - no card pending: `flip_card` records the position and returns
//!   [`FlipResult::Pending`]
//! - one card pending: `flip_card` completes the comparison, increments the
//!   move counter, and returns [`FlipResult::Match`] or
//!   [`FlipResult::Mismatch`]
//!
//! "Won" is not a state of its own; it is the derived predicate
//! [`MemoryGame::has_won`], checked by the caller after each match.
//!
//! Mismatched cards stay face-up until the caller reverts them with
//! [`MemoryGame::reset_unmatched`], typically after a presentation delay.
//! Without that call repeated mismatches accumulate face-up cards.

use tracing::{debug, info, instrument};

use crate::board::Board;
use crate::snapshot::GameSnapshot;
use memory_match_types::{BoardSize, FlipResult, GameError};

/// Complete state of one memory game
#[derive(Debug, Clone)]
pub struct MemoryGame {
    board: Board,
    /// Image identifiers for custom games, indexed by card identity.
    images: Option<Vec<String>>,
    /// Position of the single face-up card awaiting its partner.
    pending: Option<usize>,
    /// Completed two-card comparisons (not individual flips).
    moves: u32,
    pairs_found: usize,
    seed: u32,
}

impl MemoryGame {
    /// Create a new game with default identities and the given RNG seed
    pub fn new(board_size: BoardSize, seed: u32) -> Self {
        Self {
            board: Board::deal(board_size, seed),
            images: None,
            pending: None,
            moves: 0,
            pairs_found: 0,
            seed,
        }
    }

    /// Create a new custom game whose pairs show the given images
    ///
    /// `images` must hold exactly one identifier per pair on the board. The
    /// engine never fetches or validates image content; identifiers are
    /// resolved per card through [`MemoryGame::image_for`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IdentityCountMismatch`] when the list length
    /// does not equal `board_size.num_pairs()`.
    pub fn with_images(
        board_size: BoardSize,
        images: Vec<String>,
        seed: u32,
    ) -> Result<Self, GameError> {
        let expected = board_size.num_pairs();
        if images.len() != expected {
            return Err(GameError::IdentityCountMismatch {
                expected,
                actual: images.len(),
            });
        }

        let mut game = Self::new(board_size, seed);
        game.images = Some(images);
        Ok(game)
    }

    /// The preset this game is played on
    pub fn board_size(&self) -> BoardSize {
        self.board.board_size()
    }

    /// The board in its current state (read-only)
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The seed the board was dealt with (for restarting with the same deck)
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Completed two-card comparisons so far
    pub fn num_moves(&self) -> u32 {
        self.moves
    }

    /// Pairs matched so far
    pub fn num_pairs_found(&self) -> usize {
        self.pairs_found
    }

    /// Position of the single face-up card awaiting a second flip
    pub fn pending_card(&self) -> Option<usize> {
        self.pending
    }

    /// Whether every pair has been found
    pub fn has_won(&self) -> bool {
        self.pairs_found == self.board_size().num_pairs()
    }

    /// Whether the card at `position` is currently revealed
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IndexOutOfRange`] for positions outside the
    /// board.
    pub fn is_card_face_up(&self, position: usize) -> Result<bool, GameError> {
        match self.board.card(position) {
            Some(card) => Ok(card.is_face_up),
            None => Err(GameError::IndexOutOfRange {
                position,
                card_count: self.board.len(),
            }),
        }
    }

    /// Image identifier shown by the card at `position`
    ///
    /// `None` for default games, for positions outside the board, and for
    /// identities without an entry in the custom image list.
    pub fn image_for(&self, position: usize) -> Option<&str> {
        let card = self.board.card(position)?;
        let images = self.images.as_ref()?;
        images.get(card.identity as usize).map(String::as_str)
    }

    /// Flip the card at `position` and resolve the pair cycle
    ///
    /// The first flip of a pair returns [`FlipResult::Pending`]. The second
    /// completes the comparison: the move counter increments exactly once,
    /// and the result is [`FlipResult::Match`] (both cards permanently
    /// matched) or [`FlipResult::Mismatch`] (both cards left face-up for the
    /// caller to revert via [`MemoryGame::reset_unmatched`]).
    ///
    /// # Errors
    ///
    /// - [`GameError::IndexOutOfRange`] for positions outside the board
    /// - [`GameError::InvalidMove`] when the card is already face-up, or
    ///   when the game has already been won
    #[instrument(skip(self), fields(pending = ?self.pending))]
    pub fn flip_card(&mut self, position: usize) -> Result<FlipResult, GameError> {
        let card_count = self.board.len();
        if position >= card_count {
            return Err(GameError::IndexOutOfRange {
                position,
                card_count,
            });
        }
        if self.has_won() || self.board.cards()[position].is_face_up {
            return Err(GameError::InvalidMove { position });
        }

        self.board.set_face_up(position);

        let first = match self.pending.take() {
            None => {
                self.pending = Some(position);
                debug!(position, "first card of pair revealed");
                return Ok(FlipResult::Pending);
            }
            Some(first) => first,
        };

        self.moves += 1;
        let result = if self.board.cards()[first].matches(&self.board.cards()[position]) {
            self.board.set_matched(first);
            self.board.set_matched(position);
            self.pairs_found += 1;
            FlipResult::Match
        } else {
            FlipResult::Mismatch
        };

        debug!(
            first,
            second = position,
            moves = self.moves,
            pairs_found = self.pairs_found,
            outcome = result.as_str(),
            "comparison completed"
        );
        if self.has_won() {
            info!(moves = self.moves, "all pairs matched");
        }

        Ok(result)
    }

    /// Turn every face-up, unmatched card back face-down
    ///
    /// The caller invokes this after a [`FlipResult::Mismatch`], once its
    /// presentation delay has elapsed. A pending half-move is cleared so the
    /// next flip starts a fresh pair. Returns the number of cards reverted.
    pub fn reset_unmatched(&mut self) -> usize {
        self.pending = None;
        let reverted = self.board.flip_down_unmatched();
        if reverted > 0 {
            debug!(reverted, "unmatched cards turned face-down");
        }
        reverted
    }

    /// Write the current state into a reusable snapshot without allocating
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        out.board_size = self.board_size();
        out.card_count = self.board.len();
        for (slot, card) in out.cards.iter_mut().zip(self.board.cards()) {
            slot.identity = card.identity;
            slot.face_up = card.is_face_up;
            slot.matched = card.is_matched;
        }
        out.pending = self.pending;
        out.moves = self.moves;
        out.pairs_found = self.pairs_found;
        out.num_pairs = self.board_size().num_pairs();
        out.won = self.has_won();
        out.seed = self.seed;
    }

    /// Allocate a fresh snapshot of the current state
    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}

impl Default for MemoryGame {
    fn default() -> Self {
        Self::new(BoardSize::default(), 1)
    }
}
