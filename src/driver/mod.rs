//! Minimal self-play driver.
//!
//! Runs any [`Environment`](crate::env::Environment) through the contract's
//! control flow without knowing which game it is:
//!
//! ```text
//! reset -> { to_play -> legal_actions -> select -> step }* -> done
//! ```
//!
//! ## Overview
//!
//! - **ActionSelector**: chooses among legal actions (random, first, human)
//! - **Episode**: the recorded history of one run
//! - **EpisodeRunner**: the loop itself, bounded by `EnvConfig::max_moves`
//!
//! ## Usage
//!
//! ```
//! use muzero_env::core::{EnvConfig, PlayerMap};
//! use muzero_env::driver::{ActionSelector, EpisodeRunner, RandomSelector};
//! use muzero_env::env::Checked;
//! use muzero_env::games::TicTacToe;
//!
//! let mut env = Checked::<TicTacToe>::with_seed(Some(7));
//! let config = EnvConfig::from_info(env.info()).with_seed(7);
//! let mut seats = PlayerMap::new(2, |p| {
//!     Box::new(RandomSelector::new(p.index() as u64)) as Box<dyn ActionSelector>
//! });
//!
//! let episode = EpisodeRunner::new(config).play(&mut env, &mut seats).unwrap();
//! assert!(episode.terminated);
//! env.close().unwrap();
//! ```

pub mod episode;
pub mod runner;
pub mod selector;

pub use episode::Episode;
pub use runner::{EpisodeRunner, Seats};
pub use selector::{ActionSelector, FirstLegal, HumanSelector, RandomSelector};
