//! The environment contract a self-play driver plays games through.
//!
//! - `Environment`: the operations every game implements
//! - `SeedableEnvironment`: seeded construction
//! - `Checked`: lifecycle guard turning order violations into errors
//! - `prompt_action`: the text prompt behind `human_to_action`

pub mod game;
pub mod human;
pub mod lifecycle;

pub use game::{Environment, GameInfo, LegalityPolicy, SeedableEnvironment, Transition};
pub use human::prompt_action;
pub use lifecycle::{Checked, Phase};
