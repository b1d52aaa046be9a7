//! Core value types shared by environments and drivers: actions, players,
//! observations, the seeded RNG, and driver configuration.

pub mod action;
pub mod config;
pub mod observation;
pub mod player;
pub mod rng;

pub use action::{Action, ActionSpace};
pub use config::EnvConfig;
pub use observation::Observation;
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
