//! Lifecycle guard.
//!
//! `Checked` wraps any [`Environment`] and enforces the instance state
//! machine:
//!
//! ```text
//! Ready --reset--> Playing --step(done)--> Terminated --reset--> Playing
//!   \                 \                        \
//!    +-------close-----+----------close---------+--> Closed
//! ```
//!
//! Order violations the bare contract leaves undefined (querying before
//! `reset`, stepping after termination, any use after `close`) become typed
//! errors instead, and actions are checked against the action space and,
//! for exact-legality games, the legal set.

use std::io::Write;

use crate::core::{Action, Observation, PlayerId};
use crate::error::{EnvError, Result};

use super::{Environment, GameInfo, SeedableEnvironment, Transition};

/// Where an instance is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, never reset.
    Ready,
    /// Mid-episode.
    Playing,
    /// The last step ended the episode.
    Terminated,
    /// `close` has been called.
    Closed,
}

/// An environment whose calls are checked against its lifecycle.
pub struct Checked<E: Environment> {
    env: E,
    info: GameInfo,
    phase: Phase,
    episodes: u64,
    ply: usize,
}

impl<E: SeedableEnvironment> Checked<E> {
    /// Construct the wrapped game from an optional seed.
    pub fn with_seed(seed: Option<u64>) -> Self {
        Self::new(E::with_seed(seed))
    }
}

impl<E: Environment> Checked<E> {
    /// Wrap a freshly constructed environment.
    pub fn new(env: E) -> Self {
        let info = env.info();
        Self {
            env,
            info,
            phase: Phase::Ready,
            episodes: 0,
            ply: 0,
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Static game description, captured at construction.
    #[must_use]
    pub fn info(&self) -> &GameInfo {
        &self.info
    }

    /// Number of episodes started by `reset`.
    #[must_use]
    pub fn episodes(&self) -> u64 {
        self.episodes
    }

    /// Plies played in the current episode.
    #[must_use]
    pub fn ply(&self) -> usize {
        self.ply
    }

    /// The wrapped environment.
    pub fn inner(&self) -> &E {
        &self.env
    }

    /// Unwrap, giving up the lifecycle checks.
    pub fn into_inner(self) -> E {
        self.env
    }

    fn violation(&self, error: EnvError) -> EnvError {
        log::warn!("{}: {}", self.info.name, error);
        error
    }

    /// Fails unless a reset has happened and the instance is still open.
    fn require_started(&self) -> Result<()> {
        match self.phase {
            Phase::Ready => Err(self.violation(EnvError::NotReset)),
            Phase::Closed => Err(self.violation(EnvError::Closed)),
            Phase::Playing | Phase::Terminated => Ok(()),
        }
    }

    /// Start a new episode.
    pub fn reset(&mut self) -> Result<Observation> {
        if self.phase == Phase::Closed {
            return Err(self.violation(EnvError::Closed));
        }

        let observation = self.env.reset();
        self.phase = Phase::Playing;
        self.episodes += 1;
        self.ply = 0;
        log::debug!("{}: episode {} started", self.info.name, self.episodes);
        Ok(observation)
    }

    /// The player to move.
    pub fn to_play(&self) -> Result<PlayerId> {
        self.require_started()?;
        Ok(self.env.to_play())
    }

    /// Legal actions for the player to move.
    ///
    /// Allowed on a terminated episode, where games typically return an
    /// empty set.
    pub fn legal_actions(&self) -> Result<Vec<Action>> {
        self.require_started()?;
        if self.phase == Phase::Terminated {
            log::debug!("{}: legal actions queried after termination", self.info.name);
        }
        Ok(self.env.legal_actions())
    }

    /// Apply one action.
    pub fn step(&mut self, action: Action) -> Result<Transition> {
        match self.phase {
            Phase::Ready => return Err(self.violation(EnvError::NotReset)),
            Phase::Terminated => return Err(self.violation(EnvError::EpisodeTerminated)),
            Phase::Closed => return Err(self.violation(EnvError::Closed)),
            Phase::Playing => {}
        }

        if !self.info.action_space.contains(action) {
            return Err(self.violation(EnvError::ActionOutOfSpace {
                action,
                size: self.info.action_space.size(),
            }));
        }

        if self.info.legality.is_exact() && !self.env.legal_actions().contains(&action) {
            let player = self.env.to_play();
            return Err(self.violation(EnvError::IllegalAction { action, player }));
        }

        let transition = self.env.step(action);
        self.ply += 1;
        log::trace!(
            "{}: ply {} action {} reward {} done {}",
            self.info.name,
            self.ply,
            action,
            transition.reward,
            transition.done
        );

        if transition.done {
            self.phase = Phase::Terminated;
        }
        Ok(transition)
    }

    /// Render the current state.
    pub fn render(&self, out: &mut dyn Write) -> Result<()> {
        self.require_started()?;
        self.env.render(out)?;
        Ok(())
    }

    /// Ask a human for an action. Rejected once the episode has ended,
    /// since there is nothing left to choose.
    pub fn human_to_action(&self) -> Result<Action> {
        self.require_started()?;
        if self.phase == Phase::Terminated {
            return Err(self.violation(EnvError::EpisodeTerminated));
        }
        self.env.human_to_action()
    }

    /// Label an action. Valid before the first reset.
    pub fn action_to_string(&self, action: Action) -> Result<String> {
        if self.phase == Phase::Closed {
            return Err(self.violation(EnvError::Closed));
        }
        Ok(self.env.action_to_string(action))
    }

    /// Release the game's resources. A second call is rejected without
    /// reaching the game.
    pub fn close(&mut self) -> Result<()> {
        if self.phase == Phase::Closed {
            return Err(self.violation(EnvError::Closed));
        }
        self.env.close();
        self.phase = Phase::Closed;
        log::debug!("{}: closed after {} episodes", self.info.name, self.episodes);
        Ok(())
    }
}
