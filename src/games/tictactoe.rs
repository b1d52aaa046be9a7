//! Tic-tac-toe.
//!
//! Two players, nine actions (one per cell, row-major), exact legality.
//! The game has no randomness, so the construction seed is ignored.
//!
//! ```text
//! 0 | 1 | 2
//! ---------
//! 3 | 4 | 5
//! ---------
//! 6 | 7 | 8
//! ```
//!
//! Observation `[3, 3, 3]`: a plane of player 0's marks, a plane of
//! player 1's marks, and a plane filled with `1.0` when player 0 is to play
//! and `-1.0` otherwise. Completing a line pays `1.0` to the mover and ends
//! the episode; a full board ends it with `0.0`.

use std::io::{self, Write};

use crate::core::{Action, ActionSpace, Observation, PlayerId};
use crate::env::{Environment, GameInfo, LegalityPolicy, SeedableEnvironment, Transition};

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Tic-tac-toe environment.
#[derive(Clone, Debug)]
pub struct TicTacToe {
    board: [Option<PlayerId>; 9],
    current: PlayerId,
    winner: Option<PlayerId>,
}

impl TicTacToe {
    pub const NAME: &'static str = "tictactoe";

    pub fn new() -> Self {
        Self {
            board: [None; 9],
            current: PlayerId::new(0),
            winner: None,
        }
    }

    /// Mark at a cell, if any.
    #[must_use]
    pub fn cell(&self, cell: usize) -> Option<PlayerId> {
        self.board.get(cell).copied().flatten()
    }

    /// The winner, once a line is complete.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    fn opponent(player: PlayerId) -> PlayerId {
        PlayerId::new(1 - player.0)
    }

    fn check_winner(&self) -> Option<PlayerId> {
        LINES.iter().find_map(|line| {
            let first = self.board[line[0]]?;
            (self.board[line[1]] == Some(first) && self.board[line[2]] == Some(first))
                .then_some(first)
        })
    }

    fn is_full(&self) -> bool {
        self.board.iter().all(Option::is_some)
    }

    fn observe(&self) -> Observation {
        let mut obs = Observation::zeros(vec![3, 3, 3]);
        for (i, cell) in self.board.iter().enumerate() {
            if let Some(player) = cell {
                obs.plane_mut(player.index())[i] = 1.0;
            }
        }
        let to_play = if self.current == PlayerId::new(0) { 1.0 } else { -1.0 };
        obs.plane_mut(2).fill(to_play);
        obs
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedableEnvironment for TicTacToe {
    fn with_seed(_seed: Option<u64>) -> Self {
        Self::new()
    }
}

impl Environment for TicTacToe {
    fn info(&self) -> GameInfo {
        GameInfo {
            name: Self::NAME.to_string(),
            players: PlayerId::list(2),
            action_space: ActionSpace::new(9),
            observation_shape: vec![3, 3, 3],
            legality: LegalityPolicy::Exact,
        }
    }

    fn reset(&mut self) -> Observation {
        *self = Self::new();
        self.observe()
    }

    fn to_play(&self) -> PlayerId {
        self.current
    }

    fn legal_actions(&self) -> Vec<Action> {
        if self.winner.is_some() {
            return Vec::new();
        }
        self.board
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| Action::new(i as u32))
            .collect()
    }

    fn step(&mut self, action: Action) -> Transition {
        let mover = self.current;
        self.board[action.index()] = Some(mover);
        self.winner = self.check_winner();
        self.current = Self::opponent(mover);

        let reward = if self.winner == Some(mover) { 1.0 } else { 0.0 };
        let done = self.winner.is_some() || self.is_full();
        Transition::new(self.observe(), reward, done)
    }

    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        for row in 0..3 {
            if row > 0 {
                writeln!(out, "-----------")?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(out, "|")?;
                }
                match self.board[row * 3 + col] {
                    Some(p) if p.0 == 0 => write!(out, " X ")?,
                    Some(_) => write!(out, " O ")?,
                    None => write!(out, " {} ", row * 3 + col)?,
                }
            }
            writeln!(out)?;
        }
        Ok(())
    }

    fn action_to_string(&self, action: Action) -> String {
        if action.0 >= 9 {
            return action.to_string();
        }
        format!("Play row {}, column {}", action.0 / 3 + 1, action.0 % 3 + 1)
    }
}
