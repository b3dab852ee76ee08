use serde::{Deserialize, Serialize};

use memory_match_types::{BoardSize, Card, CardIdentity, MAX_CARDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CardSnapshot {
    pub identity: CardIdentity,
    pub face_up: bool,
    pub matched: bool,
}

impl From<Card> for CardSnapshot {
    fn from(value: Card) -> Self {
        Self {
            identity: value.identity,
            face_up: value.is_face_up,
            matched: value.is_matched,
        }
    }
}

/// Fixed-size read-model of a game for a presentation layer.
///
/// Only the first `card_count` entries of `cards` are meaningful; the rest
/// stay cleared so the struct can be reused across frames without
/// allocating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board_size: BoardSize,
    pub cards: [CardSnapshot; MAX_CARDS],
    pub card_count: usize,
    pub pending: Option<usize>,
    pub moves: u32,
    pub pairs_found: usize,
    pub num_pairs: usize,
    pub won: bool,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board_size = BoardSize::default();
        self.cards = [CardSnapshot::default(); MAX_CARDS];
        self.card_count = 0;
        self.pending = None;
        self.moves = 0;
        self.pairs_found = 0;
        self.num_pairs = 0;
        self.won = false;
        self.seed = 0;
    }

    /// The populated slice of `cards`
    pub fn cards(&self) -> &[CardSnapshot] {
        &self.cards[..self.card_count]
    }

    pub fn playable(&self) -> bool {
        !self.won
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board_size: BoardSize::default(),
            cards: [CardSnapshot::default(); MAX_CARDS],
            card_count: 0,
            pending: None,
            moves: 0,
            pairs_found: 0,
            num_pairs: 0,
            won: false,
            seed: 0,
        };
        s.clear();
        s
    }
}
