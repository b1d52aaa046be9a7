//! The environment contract.
//!
//! A driver runs any game through the same operations:
//!
//! ```text
//! construct -> reset -> { to_play, legal_actions, step }* -> close
//! ```
//!
//! `render` and `human_to_action` are only used for interactive or debug
//! play; `action_to_string` labels actions for logs and prompts.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionSpace, Observation, PlayerId};
use crate::error::Result;

use super::human::prompt_action;

/// How a game treats actions outside the current legal set.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum LegalityPolicy {
    /// `legal_actions` is exact; stepping anything else is a caller error.
    Exact,
    /// `legal_actions` returns the whole action space. An illegal choice is
    /// absorbed by `step`, which returns `penalty` as the reward and ends the
    /// episode only if `terminates` is set.
    Penalized { penalty: f32, terminates: bool },
}

impl LegalityPolicy {
    #[must_use]
    pub fn is_exact(self) -> bool {
        matches!(self, LegalityPolicy::Exact)
    }
}

/// Static description of a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameInfo {
    /// Short name, as used by `GameKind`.
    pub name: String,

    /// Every player `to_play` may report.
    pub players: Vec<PlayerId>,

    /// The fixed action space.
    pub action_space: ActionSpace,

    /// Shape of every observation this game returns.
    pub observation_shape: Vec<usize>,

    /// Which legality policy this game follows.
    pub legality: LegalityPolicy,
}

/// Result of one `step`.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// Observation after the action.
    pub observation: Observation,
    /// Reward attributable to this transition, for the player who acted.
    pub reward: f32,
    /// The episode has ended.
    pub done: bool,
}

impl Transition {
    pub fn new(observation: Observation, reward: f32, done: bool) -> Self {
        Self {
            observation,
            reward,
            done,
        }
    }

    /// Split into the `(observation, reward, done)` triple.
    pub fn into_tuple(self) -> (Observation, f32, bool) {
        (self.observation, self.reward, self.done)
    }
}

/// A game a self-play driver can play without game-specific code.
///
/// Implementations own their state exclusively and are driven by one caller
/// at a time.
///
/// ## Implementation Notes
///
/// - `reset` must leave `to_play` and `legal_actions` meaningful.
/// - `legal_actions` is non-empty in every non-terminal state. Its order is
///   preserved by drivers but carries no meaning.
/// - `step` advances exactly one ply. Calling it after termination, or
///   before the first `reset`, is a caller error; wrap the game in
///   [`Checked`](super::Checked) to have those caught.
/// - `render` must not mutate game state.
/// - `action_to_string` must accept every action in the space, including
///   illegal ones.
pub trait Environment {
    /// Describe this game.
    fn info(&self) -> GameInfo;

    /// Start a new episode and return its initial observation.
    fn reset(&mut self) -> Observation;

    /// The player whose turn it is.
    fn to_play(&self) -> PlayerId;

    /// Actions the current player may take.
    fn legal_actions(&self) -> Vec<Action>;

    /// Apply `action` and advance one ply.
    fn step(&mut self, action: Action) -> Transition;

    /// Write a human-readable view of the current state.
    fn render(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Ask a human on stdin for a legal action.
    ///
    /// Blocks until a valid choice is typed. Invalid input is reported and
    /// re-prompted; only a closed input stream or an I/O failure is returned
    /// as an error.
    fn human_to_action(&self) -> Result<Action> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        prompt_action(self, &mut stdin.lock(), &mut stdout)
    }

    /// Label an action for logs and prompts.
    fn action_to_string(&self, action: Action) -> String {
        action.to_string()
    }

    /// Release external resources. Called once at end of life.
    fn close(&mut self) {}
}

/// The construct operation.
///
/// With `Some(seed)`, every stochastic element of the game is a function of
/// the seed. With `None` the game seeds itself from entropy.
pub trait SeedableEnvironment: Environment + Sized {
    fn with_seed(seed: Option<u64>) -> Self;
}

impl<E: Environment + ?Sized> Environment for Box<E> {
    fn info(&self) -> GameInfo {
        (**self).info()
    }

    fn reset(&mut self) -> Observation {
        (**self).reset()
    }

    fn to_play(&self) -> PlayerId {
        (**self).to_play()
    }

    fn legal_actions(&self) -> Vec<Action> {
        (**self).legal_actions()
    }

    fn step(&mut self, action: Action) -> Transition {
        (**self).step(action)
    }

    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        (**self).render(out)
    }

    fn human_to_action(&self) -> Result<Action> {
        (**self).human_to_action()
    }

    fn action_to_string(&self, action: Action) -> String {
        (**self).action_to_string(action)
    }

    fn close(&mut self) {
        (**self).close()
    }
}
