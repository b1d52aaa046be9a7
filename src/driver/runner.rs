//! Episode loop.

use std::io;

use crate::core::{EnvConfig, PlayerMap};
use crate::env::{Checked, Environment};
use crate::error::{EnvError, Result};

use super::episode::Episode;
use super::selector::ActionSelector;

/// Seats one selector per player.
pub type Seats = PlayerMap<Box<dyn ActionSelector>>;

/// Plays episodes of any game under a fixed configuration.
#[derive(Clone, Debug)]
pub struct EpisodeRunner {
    config: EnvConfig,
}

impl EpisodeRunner {
    pub fn new(config: EnvConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Play one episode from a fresh `reset`.
    ///
    /// Stops when the game signals termination or after `max_moves` plies,
    /// whichever comes first. The environment is left open for the caller
    /// to reuse or close.
    pub fn play<E: Environment>(&self, env: &mut Checked<E>, seats: &mut Seats) -> Result<Episode> {
        self.config.validate(env.info())?;
        if seats.player_count() < self.config.players.len() {
            return Err(EnvError::Misconfigured(format!(
                "{} seats for {} players",
                seats.player_count(),
                self.config.players.len()
            )));
        }

        let initial = env.reset()?;
        let mut episode = Episode::new(env.info().name.clone(), self.config.seed, initial);

        for _ in 0..self.config.max_moves {
            let player = env.to_play()?;
            if !self.config.has_player(player) {
                return Err(EnvError::UnknownPlayer(player));
            }

            let legal = env.legal_actions()?;
            if legal.is_empty() {
                return Err(EnvError::NoLegalActions);
            }

            if self.config.render {
                env.render(&mut io::stdout())?;
            }

            let selector = seats.get_mut(player).ok_or(EnvError::UnknownPlayer(player))?;
            let action = selector.select(env.inner(), &legal)?;
            log::trace!("player {} plays {}", player, env.inner().action_to_string(action));

            let transition = env.step(action)?;
            episode.record(player, action, transition.reward, transition.observation);
            if transition.done {
                episode.terminated = true;
                break;
            }
        }

        if self.config.render {
            env.render(&mut io::stdout())?;
        }

        log::debug!(
            "{}: {} plies, total reward {}, terminated {}",
            episode.game,
            episode.len(),
            episode.total_reward(),
            episode.terminated
        );
        Ok(episode)
    }

    /// Play `count` episodes back to back on the same instance.
    pub fn play_many<E: Environment>(
        &self,
        env: &mut Checked<E>,
        seats: &mut Seats,
        count: usize,
    ) -> Result<Vec<Episode>> {
        (0..count).map(|_| self.play(env, seats)).collect()
    }
}
