use thiserror::Error;

use crate::core::{Action, PlayerId};

/// Errors raised by environments, the lifecycle guard, and the driver.
#[derive(Error, Debug)]
pub enum EnvError {
    #[error("environment queried or stepped before the first reset")]
    NotReset,

    #[error("episode has terminated; call reset before stepping again")]
    EpisodeTerminated,

    #[error("environment has been closed")]
    Closed,

    #[error("action {action} is outside the action space of size {size}")]
    ActionOutOfSpace { action: Action, size: u32 },

    #[error("action {action} is not legal for player {player}")]
    IllegalAction { action: Action, player: PlayerId },

    #[error("no legal actions in a non-terminal state")]
    NoLegalActions,

    #[error("player {0} is not in the configured players list")]
    UnknownPlayer(PlayerId),

    #[error("unknown game: {0}")]
    UnknownGame(String),

    #[error("configuration does not match the game: {0}")]
    Misconfigured(String),

    #[error("input closed while waiting for an action")]
    InputClosed,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("episode encoding error: {0}")]
    Codec(#[from] bincode::Error),
}

/// Convenience Result type for environment operations.
pub type Result<T> = std::result::Result<T, EnvError>;
