//! Reference environments.
//!
//! Small games covering both legality policies, one- and two-player turn
//! order, and seeded randomness. `GameKind` selects among them by name.

pub mod gridworld;
pub mod registry;
pub mod tictactoe;
pub mod twenty_one;

pub use gridworld::{GridWorld, GridWorldBuilder};
pub use registry::GameKind;
pub use tictactoe::TicTacToe;
pub use twenty_one::TwentyOne;
