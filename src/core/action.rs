//! Action identifiers and action spaces.
//!
//! An action is an integer drawn from a fixed, game-defined space
//! `0..size`. Both the environment and the driver know the size up front,
//! so policy vectors can be laid out by action index.

use serde::{Deserialize, Serialize};

/// Integer action identifier.
///
/// `Display` is the decimal form, which is also the default label and the
/// text a human types at the prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action(pub u32);

impl Action {
    /// Create a new action.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Position of this action in a policy vector.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Action {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// The bounded set of actions a driver may ever present to `step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionSpace {
    size: u32,
}

impl ActionSpace {
    /// Space `0..size`.
    #[must_use]
    pub const fn new(size: u32) -> Self {
        Self { size }
    }

    /// Number of actions.
    #[must_use]
    pub const fn size(self) -> u32 {
        self.size
    }

    /// Number of actions, as a policy vector length.
    #[must_use]
    pub const fn len(self) -> usize {
        self.size as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.size == 0
    }

    /// Whether `action` belongs to this space.
    #[must_use]
    pub const fn contains(self, action: Action) -> bool {
        action.0 < self.size
    }

    /// Every action, in increasing order.
    pub fn iter(self) -> impl Iterator<Item = Action> {
        (0..self.size).map(Action)
    }

    /// Every action collected, as returned by `legal_actions` under
    /// penalized legality.
    #[must_use]
    pub fn to_vec(self) -> Vec<Action> {
        self.iter().collect()
    }
}
