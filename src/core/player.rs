//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat number. Players are numbered from 1, matching the turn
//! order shown to the people at the table.
//!
//! ## PlayerCount
//!
//! A validated count in `2..=4`. Bounds are checked here, once, so gameplay
//! code never has to re-check a seat number.
//!
//! ## PlayerMap
//!
//! Per-player data backed by a `Vec` for O(1) access, indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::error::GameError;

/// Player seat number, starting at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who moves first.
    pub const FIRST: PlayerId = PlayerId(1);

    /// Create a player ID from a 1-based seat number.
    #[must_use]
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    /// The 1-based seat number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// The 0-based storage index.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 as usize).wrapping_sub(1)
    }

    /// The seat after this one, wrapping back to player 1.
    ///
    /// ```
    /// use snakes_and_ladders::core::{PlayerCount, PlayerId};
    ///
    /// let three = PlayerCount::new(3).unwrap();
    /// assert_eq!(PlayerId::new(2).next(three), PlayerId::new(3));
    /// assert_eq!(PlayerId::new(3).next(three), PlayerId::new(1));
    /// ```
    #[must_use]
    pub fn next(self, count: PlayerCount) -> PlayerId {
        PlayerId(self.0 % count.get() + 1)
    }

    /// Iterate over all player IDs for a game with `count` players.
    pub fn all(count: PlayerCount) -> impl Iterator<Item = PlayerId> {
        (1..=count.get()).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Number of players seated at the board, always in `2..=4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerCount(u8);

impl PlayerCount {
    pub const MIN: u8 = 2;
    pub const MAX: u8 = 4;

    /// Validate a player count.
    pub fn new(count: u8) -> Result<Self, GameError> {
        if (Self::MIN..=Self::MAX).contains(&count) {
            Ok(Self(count))
        } else {
            Err(GameError::InvalidPlayerCount(count))
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Whether `player` has a seat in a game of this size.
    #[must_use]
    pub fn contains(self, player: PlayerId) -> bool {
        (1..=self.0).contains(&player.number())
    }
}

impl Default for PlayerCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for PlayerCount {
    type Error = GameError;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl From<PlayerCount> for u8 {
    fn from(count: PlayerCount) -> u8 {
        count.0
    }
}

impl std::fmt::Display for PlayerCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per seated player. Indexing with a
/// `PlayerId` outside the count it was built for panics, so keep the map and
/// the count it came from together.
///
/// ## Example
///
/// ```
/// use snakes_and_ladders::core::{PlayerCount, PlayerId, PlayerMap};
///
/// let count = PlayerCount::new(4).unwrap();
/// let mut sixes: PlayerMap<u32> = PlayerMap::with_value(count, 0);
///
/// sixes[PlayerId::new(2)] += 1;
/// assert_eq!(sixes[PlayerId::new(2)], 1);
/// assert_eq!(sixes[PlayerId::new(1)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(count: PlayerCount, factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::all(count).map(factory).collect(),
        }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(count: PlayerCount, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a player's data, or `None` if the seat does not exist.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        player.number().checked_sub(1)?;
        self.data.get(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8 + 1), v))
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
