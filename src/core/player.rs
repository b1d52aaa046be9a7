//! Player identifiers and per-seat storage.
//!
//! ## PlayerId
//!
//! The value `to_play()` returns. A driver configures the list of players a
//! game may report; ids are 0-based and contiguous.
//!
//! ## PlayerMap
//!
//! One entry per player, indexed by `PlayerId`. The driver uses it to seat
//! one action selector per player and to accumulate per-player rewards.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player identifier.
///
/// Single-player environments always report `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The players list of a game with `player_count` seats.
    ///
    /// ```
    /// use muzero_env::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::list(2), vec![PlayerId::new(0), PlayerId::new(1)]);
    /// ```
    #[must_use]
    pub fn list(player_count: usize) -> Vec<PlayerId> {
        assert!(player_count <= 255, "At most 255 players supported");
        (0..player_count as u8).map(PlayerId).collect()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-player storage with O(1) access.
///
/// ```
/// use muzero_env::core::{PlayerId, PlayerMap};
///
/// let mut rewards: PlayerMap<f32> = PlayerMap::with_value(2, 0.0);
/// rewards[PlayerId::new(1)] += 1.0;
/// assert_eq!(rewards[PlayerId::new(1)], 1.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map with one value per player from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a map with every entry set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Entry for `player`, or `None` if the player has no seat.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Mutable entry for `player`, or `None` if the player has no seat.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
