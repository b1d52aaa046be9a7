//! Grid navigation with penalized legality.
//!
//! Single player. Actions `0..4` move Up, Down, Left, Right. Legality is
//! **penalized**: `legal_actions` always returns all four moves, and a move
//! into the edge of the grid or an obstacle leaves the agent in place and
//! pays `-1.0` without ending the episode.
//!
//! The start cell, goal cell and obstacles are drawn from the seeded RNG on
//! every `reset`. Reaching the goal pays `1.0` and ends the episode; so does
//! running out of steps (with whatever that last move paid). A layout may
//! wall the goal off; the step limit bounds such episodes.
//!
//! Observation `[3, height, width]`: agent plane, goal plane, obstacle
//! plane.

use std::io::{self, Write};

use crate::core::{Action, ActionSpace, GameRng, Observation, PlayerId};
use crate::env::{Environment, GameInfo, LegalityPolicy, SeedableEnvironment, Transition};

const PENALTY: f32 = -1.0;

const MOVES: [(&str, i32, i32); 4] = [("Up", -1, 0), ("Down", 1, 0), ("Left", 0, -1), ("Right", 0, 1)];

/// Grid world environment.
#[derive(Clone, Debug)]
pub struct GridWorld {
    rng: GameRng,
    width: usize,
    height: usize,
    obstacle_count: usize,
    max_steps: usize,
    agent: usize,
    goal: usize,
    obstacles: Vec<usize>,
    steps: usize,
}

/// Builder for [`GridWorld`].
pub struct GridWorldBuilder {
    width: usize,
    height: usize,
    obstacles: usize,
    max_steps: usize,
}

impl Default for GridWorldBuilder {
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
            obstacles: 3,
            max_steps: 50,
        }
    }
}

impl GridWorldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, width: usize, height: usize) -> Self {
        assert!(width * height >= 2, "Grid needs room for a start and a goal");
        self.width = width;
        self.height = height;
        self
    }

    pub fn obstacles(mut self, count: usize) -> Self {
        self.obstacles = count;
        self
    }

    pub fn max_steps(mut self, steps: usize) -> Self {
        assert!(steps > 0, "Step limit must be positive");
        self.max_steps = steps;
        self
    }

    pub fn build(self, seed: Option<u64>) -> GridWorld {
        let cells = self.width * self.height;
        GridWorld {
            rng: GameRng::from_seed_or_entropy(seed),
            width: self.width,
            height: self.height,
            obstacle_count: self.obstacles.min(cells - 2),
            max_steps: self.max_steps,
            agent: 0,
            goal: 0,
            obstacles: Vec::new(),
            steps: 0,
        }
    }
}

impl GridWorld {
    pub const NAME: &'static str = "gridworld";

    /// Agent position as `(row, column)`.
    #[must_use]
    pub fn agent(&self) -> (usize, usize) {
        (self.agent / self.width, self.agent % self.width)
    }

    /// Goal position as `(row, column)`.
    #[must_use]
    pub fn goal(&self) -> (usize, usize) {
        (self.goal / self.width, self.goal % self.width)
    }

    #[must_use]
    pub fn is_obstacle(&self, row: usize, col: usize) -> bool {
        self.obstacles.contains(&(row * self.width + col))
    }

    /// Target cell of a move, or `None` if it leaves the grid or hits an
    /// obstacle.
    fn target(&self, action: Action) -> Option<usize> {
        let (_, dr, dc) = MOVES.get(action.index())?;
        let (row, col) = self.agent();
        let row = row.checked_add_signed(*dr as isize).filter(|r| *r < self.height)?;
        let col = col.checked_add_signed(*dc as isize).filter(|c| *c < self.width)?;
        let cell = row * self.width + col;
        (!self.obstacles.contains(&cell)).then_some(cell)
    }

    fn observe(&self) -> Observation {
        let mut obs = Observation::zeros(vec![3, self.height, self.width]);
        obs.plane_mut(0)[self.agent] = 1.0;
        obs.plane_mut(1)[self.goal] = 1.0;
        let obstacles = obs.plane_mut(2);
        for &cell in &self.obstacles {
            obstacles[cell] = 1.0;
        }
        obs
    }
}

impl SeedableEnvironment for GridWorld {
    fn with_seed(seed: Option<u64>) -> Self {
        GridWorldBuilder::new().build(seed)
    }
}

impl Environment for GridWorld {
    fn info(&self) -> GameInfo {
        GameInfo {
            name: Self::NAME.to_string(),
            players: PlayerId::list(1),
            action_space: ActionSpace::new(MOVES.len() as u32),
            observation_shape: vec![3, self.height, self.width],
            legality: LegalityPolicy::Penalized {
                penalty: PENALTY,
                terminates: false,
            },
        }
    }

    fn reset(&mut self) -> Observation {
        let mut cells: Vec<usize> = (0..self.width * self.height).collect();
        self.rng.shuffle(&mut cells);

        self.agent = cells[0];
        self.goal = cells[1];
        self.obstacles = cells[2..2 + self.obstacle_count].to_vec();
        self.steps = 0;
        self.observe()
    }

    fn to_play(&self) -> PlayerId {
        PlayerId::new(0)
    }

    fn legal_actions(&self) -> Vec<Action> {
        ActionSpace::new(MOVES.len() as u32).to_vec()
    }

    fn step(&mut self, action: Action) -> Transition {
        self.steps += 1;

        let reward = match self.target(action) {
            Some(cell) => {
                self.agent = cell;
                if cell == self.goal {
                    1.0
                } else {
                    0.0
                }
            }
            None => PENALTY,
        };

        let done = self.agent == self.goal || self.steps >= self.max_steps;
        Transition::new(self.observe(), reward, done)
    }

    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        for row in 0..self.height {
            for col in 0..self.width {
                let cell = row * self.width + col;
                let c = if cell == self.agent {
                    'A'
                } else if cell == self.goal {
                    'G'
                } else if self.obstacles.contains(&cell) {
                    '#'
                } else {
                    '.'
                };
                write!(out, "{c}")?;
            }
            writeln!(out)?;
        }
        writeln!(out, "step {}/{}", self.steps, self.max_steps)
    }

    fn action_to_string(&self, action: Action) -> String {
        match MOVES.get(action.index()) {
            Some((name, _, _)) => name.to_string(),
            None => action.to_string(),
        }
    }
}
