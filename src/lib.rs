//! # muzero-env
//!
//! The contract a game must satisfy to be played by a MuZero-style
//! self-play and training system.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic Driver**: A driver resets, queries `to_play` and
//!    `legal_actions`, and steps any game through one trait. Nothing in the
//!    loop branches on which game it is.
//!
//! 2. **Seeded Determinism**: Every stochastic element of a game draws from
//!    a `GameRng` built from the construction seed. Same seed and same
//!    actions give the same trajectory.
//!
//! 3. **Explicit Legality Policy**: Each game declares whether
//!    `legal_actions` is exact or whether it returns the whole action space
//!    and penalizes illegal choices.
//!
//! ## Modules
//!
//! - `core`: Actions, players, observations, RNG, driver configuration
//! - `env`: The `Environment` trait, seeded construction, lifecycle guard,
//!   human prompt
//! - `games`: Reference environments (tic-tac-toe, twenty-one, grid world)
//! - `driver`: Minimal episode loop and game history
//! - `conformance`: Checks any environment can be run through

pub mod conformance;
pub mod core;
pub mod driver;
pub mod env;
pub mod error;
pub mod games;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Action, ActionSpace, EnvConfig, GameRng, Observation, PlayerId, PlayerMap};

pub use crate::env::{
    prompt_action, Checked, Environment, GameInfo, LegalityPolicy, Phase, SeedableEnvironment, Transition,
};

pub use crate::error::{EnvError, Result};

pub use crate::games::{GameKind, GridWorld, GridWorldBuilder, TicTacToe, TwentyOne};

pub use crate::driver::{
    ActionSelector, Episode, EpisodeRunner, FirstLegal, HumanSelector, RandomSelector, Seats,
};
