//! Session module - immutable description of what is being played
//!
//! A [`GameSession`] captures the choices that outlive a single game: the
//! board preset and, for custom games, the downloaded name and image list.
//! The session is a value owned by the caller and replaced wholesale on
//! every reset or size change; nothing on it is ever mutated in place.
//! Starting a game hands back a fresh [`MemoryGame`] each time.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::game::MemoryGame;
use memory_match_types::{BoardSize, GameError};

/// Immutable per-session game configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board_size: BoardSize,
    game_name: Option<String>,
    custom_images: Option<Vec<String>>,
}

impl GameSession {
    /// A standard game on the given preset
    pub fn standard(board_size: BoardSize) -> Self {
        Self {
            board_size,
            game_name: None,
            custom_images: None,
        }
    }

    /// A custom game built from a downloaded image list
    ///
    /// The preset is derived from the list: `2 * images.len()` must be a
    /// supported card count, so four, nine, or twelve images select the
    /// easy, medium, or hard board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBoardSize`] when no preset uses
    /// `2 * images.len()` cards.
    pub fn custom(game_name: impl Into<String>, images: Vec<String>) -> Result<Self, GameError> {
        let board_size = BoardSize::from_card_count(images.len() * 2)?;
        Ok(Self {
            board_size,
            game_name: Some(game_name.into()),
            custom_images: Some(images),
        })
    }

    /// The preset games in this session are played on
    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    /// Name of the custom game, if any
    pub fn game_name(&self) -> Option<&str> {
        self.game_name.as_deref()
    }

    /// Image identifiers of the custom game, if any
    pub fn custom_images(&self) -> Option<&[String]> {
        self.custom_images.as_deref()
    }

    /// Whether this session plays a custom game
    pub fn is_custom(&self) -> bool {
        self.custom_images.is_some()
    }

    /// Start a fresh game for this session
    pub fn start_game(&self, seed: u32) -> Result<MemoryGame, GameError> {
        info!(
            board_size = self.board_size.as_str(),
            custom = self.is_custom(),
            seed,
            "starting new game"
        );
        match &self.custom_images {
            Some(images) => MemoryGame::with_images(self.board_size, images.clone(), seed),
            None => Ok(MemoryGame::new(self.board_size, seed)),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::standard(BoardSize::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_list(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("img-{i}.png")).collect()
    }

    #[test]
    fn test_standard_session() {
        let session = GameSession::standard(BoardSize::Medium);
        assert_eq!(session.board_size(), BoardSize::Medium);
        assert_eq!(session.game_name(), None);
        assert!(!session.is_custom());

        let game = session.start_game(9).unwrap();
        assert_eq!(game.board().len(), 18);
        assert_eq!(game.image_for(0), None);
    }

    #[test]
    fn test_custom_session_derives_board_size() {
        let session = GameSession::custom("animals", image_list(4)).unwrap();
        assert_eq!(session.board_size(), BoardSize::Easy);
        assert_eq!(session.game_name(), Some("animals"));
        assert!(session.is_custom());

        let session = GameSession::custom("cities", image_list(9)).unwrap();
        assert_eq!(session.board_size(), BoardSize::Medium);

        let session = GameSession::custom("faces", image_list(12)).unwrap();
        assert_eq!(session.board_size(), BoardSize::Hard);
    }

    #[test]
    fn test_custom_session_rejects_unsupported_counts() {
        for count in [0, 1, 3, 5, 8, 13] {
            assert_eq!(
                GameSession::custom("nope", image_list(count)),
                Err(GameError::InvalidBoardSize {
                    card_count: count * 2,
                }),
            );
        }
    }

    #[test]
    fn test_start_game_is_fresh_every_time() {
        let session = GameSession::custom("animals", image_list(4)).unwrap();

        let mut first = session.start_game(5).unwrap();
        first.flip_card(0).unwrap();

        let second = session.start_game(5).unwrap();
        assert_eq!(second.num_moves(), 0);
        assert_eq!(second.pending_card(), None);
        assert_eq!(second.is_card_face_up(0), Ok(false));
        // Same session and seed deal the same board
        assert_eq!(first.board().cards()[1], second.board().cards()[1]);
    }
}
