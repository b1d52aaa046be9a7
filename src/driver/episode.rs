//! Game history of one episode.
//!
//! An episode records what the driver saw and did, ply by ply:
//! - the observation before each ply (plus the final one)
//! - the player to move and the action it chose
//! - the reward returned for that ply
//!
//! This is the raw material a replay buffer turns into training targets.

use serde::{Deserialize, Serialize};

use crate::core::{Action, Observation, PlayerId, PlayerMap};
use crate::error::Result;

/// A recorded episode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// Name of the game that was played.
    pub game: String,

    /// Seed the environment was constructed with, if any.
    pub seed: Option<u64>,

    /// Observations; one more than the number of plies.
    pub observations: Vec<Observation>,

    /// Player to move at each ply.
    pub to_play: Vec<PlayerId>,

    /// Action taken at each ply.
    pub actions: Vec<Action>,

    /// Reward returned at each ply.
    pub rewards: Vec<f32>,

    /// The game signalled termination. `false` means the driver stopped at
    /// its move limit.
    pub terminated: bool,
}

impl Episode {
    /// Start recording from the observation `reset` returned.
    pub fn new(game: impl Into<String>, seed: Option<u64>, initial: Observation) -> Self {
        Self {
            game: game.into(),
            seed,
            observations: vec![initial],
            to_play: Vec::new(),
            actions: Vec::new(),
            rewards: Vec::new(),
            terminated: false,
        }
    }

    /// Record one ply.
    pub fn record(&mut self, player: PlayerId, action: Action, reward: f32, observation: Observation) {
        self.to_play.push(player);
        self.actions.push(action);
        self.rewards.push(reward);
        self.observations.push(observation);
    }

    /// Number of plies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Observation the last ply produced.
    #[must_use]
    pub fn final_observation(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// Sum of all rewards.
    #[must_use]
    pub fn total_reward(&self) -> f32 {
        self.rewards.iter().sum()
    }

    /// Rewards summed per acting player.
    ///
    /// # Panics
    ///
    /// Panics if `player_count` is 0 or above 255, like [`PlayerMap::new`].
    #[must_use]
    pub fn player_rewards(&self, player_count: usize) -> PlayerMap<f32> {
        let mut totals = PlayerMap::with_value(player_count, 0.0);
        for (player, reward) in self.to_play.iter().zip(&self.rewards) {
            if let Some(total) = totals.get_mut(*player) {
                *total += reward;
            }
        }
        totals
    }

    /// Compact binary encoding for storage or transfer.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode an episode written by [`Episode::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
