//! Driver-side configuration.
//!
//! The driver, not the game, owns the players list and the action-space
//! size it lays policies out with. `EnvConfig` carries those values plus the
//! run knobs (seed, move limit, rendering) and checks them against what a
//! game reports through `GameInfo`.

use serde::{Deserialize, Serialize};

use super::PlayerId;
use crate::env::GameInfo;
use crate::error::{EnvError, Result};

/// Driver configuration for one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Every value `to_play()` may return.
    pub players: Vec<PlayerId>,

    /// Size of the action space the driver lays policies out with.
    pub action_space_size: u32,

    /// Seed passed to the environment constructor. `None` draws one.
    pub seed: Option<u64>,

    /// Maximum plies per episode before the driver truncates it.
    pub max_moves: usize,

    /// Render the state before every ply.
    pub render: bool,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            players: vec![PlayerId::new(0)],
            action_space_size: 0,
            seed: None,
            max_moves: 500,
            render: false,
        }
    }
}

impl EnvConfig {
    /// Configuration mirroring what a game reports about itself.
    pub fn from_info(info: &GameInfo) -> Self {
        Self {
            players: info.players.clone(),
            action_space_size: info.action_space.size(),
            ..Self::default()
        }
    }

    /// Set the environment seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the players list.
    pub fn with_players(mut self, players: Vec<PlayerId>) -> Self {
        self.players = players;
        self
    }

    /// Set maximum plies per episode.
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }

    /// Enable or disable rendering.
    pub fn with_render(mut self, render: bool) -> Self {
        self.render = render;
        self
    }

    /// Whether `player` is in the configured players list.
    #[must_use]
    pub fn has_player(&self, player: PlayerId) -> bool {
        self.players.contains(&player)
    }

    /// Check that a game fits this configuration.
    ///
    /// The action spaces must agree exactly and every player the game can
    /// report must be configured.
    pub fn validate(&self, info: &GameInfo) -> Result<()> {
        if self.max_moves == 0 {
            return Err(EnvError::Misconfigured("max_moves must be positive".to_string()));
        }

        if info.action_space.size() != self.action_space_size {
            return Err(EnvError::Misconfigured(format!(
                "{} has {} actions, configured {}",
                info.name,
                info.action_space.size(),
                self.action_space_size
            )));
        }

        if let Some(missing) = info.players.iter().find(|p| !self.has_player(**p)) {
            return Err(EnvError::Misconfigured(format!(
                "{} may report player {}, which is not configured",
                info.name, missing
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ActionSpace;
    use crate::env::LegalityPolicy;

    fn info() -> GameInfo {
        GameInfo {
            name: "test".to_string(),
            players: PlayerId::list(2),
            action_space: ActionSpace::new(9),
            observation_shape: vec![9],
            legality: LegalityPolicy::Exact,
        }
    }

    #[test]
    fn test_from_info_validates() {
        let info = info();
        let config = EnvConfig::from_info(&info);
        assert_eq!(config.action_space_size, 9);
        assert_eq!(config.players.len(), 2);
        assert!(config.validate(&info).is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EnvConfig::default()
            .with_seed(7)
            .with_max_moves(20)
            .with_render(true);

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_moves, 20);
        assert!(config.render);
    }

    #[test]
    fn test_action_space_mismatch() {
        let info = info();
        let mut config = EnvConfig::from_info(&info);
        config.action_space_size = 10;
        assert!(matches!(config.validate(&info), Err(EnvError::Misconfigured(_))));
    }

    #[test]
    fn test_missing_player() {
        let info = info();
        let config = EnvConfig::from_info(&info).with_players(vec![PlayerId::new(0)]);
        assert!(matches!(config.validate(&info), Err(EnvError::Misconfigured(_))));
    }

    #[test]
    fn test_zero_move_limit() {
        let info = info();
        let config = EnvConfig::from_info(&info).with_max_moves(0);
        assert!(config.validate(&info).is_err());
    }

    #[test]
    fn test_serialization() {
        let config = EnvConfig::from_info(&info()).with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EnvConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
