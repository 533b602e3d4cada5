//! Store adapter for [`Game`].

use crate::config::GameConfig;
use crate::game::Game;
use serde::{Deserialize, Serialize};
use statecraft_core::reducer::Reducer;
use std::sync::Arc;

/// Game actions for use through a store
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameAction {
    /// Play a square for the mark to move
    Play(usize),
    /// View a snapshot
    JumpTo(usize),
}

/// Reducer holding a whole [`Game`]
///
/// Refused moves and jumps are identity transitions: the same `Arc` comes
/// back.
#[derive(Clone, Copy, Debug, Default)]
pub struct GameReducer {
    config: GameConfig,
}

impl GameReducer {
    /// A reducer whose games use `config`
    #[must_use]
    pub const fn new(config: GameConfig) -> Self {
        Self { config }
    }
}

impl Reducer for GameReducer {
    type State = Arc<Game>;
    type Action = GameAction;

    fn reduce(&self, state: Option<&Arc<Game>>, action: Option<&GameAction>) -> Arc<Game> {
        let Some(game) = state else {
            return Arc::new(Game::with_config(self.config));
        };

        match action {
            Some(GameAction::Play(position)) => {
                let mut next = Game::clone(game);
                match next.try_apply_move(*position) {
                    Ok(()) => Arc::new(next),
                    Err(reason) => {
                        tracing::debug!(%reason, position, "Move rejected");
                        Arc::clone(game)
                    },
                }
            },
            Some(GameAction::JumpTo(target)) => {
                let mut next = Game::clone(game);
                match next.jump_to(*target) {
                    Ok(()) => Arc::new(next),
                    Err(error) => {
                        tracing::debug!(%error, "Jump rejected");
                        Arc::clone(game)
                    },
                }
            },
            None => Arc::clone(game),
        }
    }
}
