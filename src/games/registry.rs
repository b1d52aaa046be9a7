//! Selecting a bundled game by name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::env::{Environment, SeedableEnvironment};
use crate::error::EnvError;

use super::{GridWorld, TicTacToe, TwentyOne};

/// The bundled games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    TicTacToe,
    TwentyOne,
    GridWorld,
}

impl GameKind {
    pub const ALL: [GameKind; 3] = [GameKind::TicTacToe, GameKind::TwentyOne, GameKind::GridWorld];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            GameKind::TicTacToe => TicTacToe::NAME,
            GameKind::TwentyOne => TwentyOne::NAME,
            GameKind::GridWorld => GridWorld::NAME,
        }
    }

    /// Construct the game with its default settings.
    pub fn build(self, seed: Option<u64>) -> Box<dyn Environment + Send + Sync> {
        match self {
            GameKind::TicTacToe => Box::new(TicTacToe::with_seed(seed)),
            GameKind::TwentyOne => Box::new(TwentyOne::with_seed(seed)),
            GameKind::GridWorld => Box::new(GridWorld::with_seed(seed)),
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameKind {
    type Err = EnvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EnvError::UnknownGame(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("tictactoe".parse::<GameKind>().unwrap(), GameKind::TicTacToe);
        assert_eq!("TwentyOne".parse::<GameKind>().unwrap(), GameKind::TwentyOne);
        assert_eq!(" gridworld ".parse::<GameKind>().unwrap(), GameKind::GridWorld);
        assert!(matches!("chess".parse::<GameKind>(), Err(EnvError::UnknownGame(_))));
    }

    #[test]
    fn test_display_roundtrip() {
        for kind in GameKind::ALL {
            assert_eq!(kind.to_string().parse::<GameKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_built_game_reports_its_name() {
        for kind in GameKind::ALL {
            let game = kind.build(Some(1));
            assert_eq!(game.info().name, kind.name());
        }
    }

    #[test]
    fn test_checked_game_is_shareable_across_threads() {
        let mut env = crate::env::Checked::new(GameKind::TicTacToe.build(Some(1)));
        env.reset().unwrap();

        let legal = std::thread::scope(|s| s.spawn(|| env.legal_actions().unwrap()).join().unwrap());
        assert_eq!(legal.len(), 9);
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&GameKind::TwentyOne).unwrap();
        assert_eq!(json, "\"twentyone\"");
    }
}
