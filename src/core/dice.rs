//! Dice faces and injectable dice sources.
//!
//! The engine never reaches for a global random generator. It asks a
//! `DiceSource` for the next face, so a game can be driven by a seeded
//! `GameRng` in play and by `ScriptedDice` in tests and replays.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// The value shown by a single six-sided die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieFace(u8);

impl DieFace {
    /// The face that lets a player enter the board and roll again.
    pub const SIX: DieFace = DieFace(6);

    /// Validate a face value.
    pub fn new(value: u8) -> Result<Self, GameError> {
        if (1..=6).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GameError::InvalidDieFace(value))
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_six(self) -> bool {
        self.0 == 6
    }

    /// All six faces in ascending order.
    pub fn all() -> impl Iterator<Item = DieFace> {
        (1..=6).map(DieFace)
    }

    /// Only for callers that have already drawn from `1..=6`.
    pub(crate) const fn from_range(value: u8) -> Self {
        Self(value)
    }
}

impl TryFrom<u8> for DieFace {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DieFace> for u8 {
    fn from(face: DieFace) -> u8 {
        face.0
    }
}

impl std::fmt::Display for DieFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of die rolls for a game session.
///
/// Implementations must return faces uniformly distributed over 1..=6 when
/// used for real play. Test sources may return whatever sequence they like.
pub trait DiceSource {
    /// Roll one die.
    fn roll(&mut self) -> DieFace;
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll(&mut self) -> DieFace {
        (**self).roll()
    }
}

impl<D: DiceSource + ?Sized> DiceSource for Box<D> {
    fn roll(&mut self) -> DieFace {
        (**self).roll()
    }
}

/// A fixed sequence of faces, replayed in order and repeated once exhausted.
///
/// ## Example
///
/// ```
/// use snakes_and_ladders::core::{DiceSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([6, 4]).unwrap();
/// assert_eq!(dice.roll().get(), 6);
/// assert_eq!(dice.roll().get(), 4);
/// assert_eq!(dice.roll().get(), 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedDice {
    faces: Vec<DieFace>,
    cursor: usize,
}

impl ScriptedDice {
    /// Build a script from raw face values, rejecting anything outside 1..=6.
    pub fn new(values: impl IntoIterator<Item = u8>) -> Result<Self, GameError> {
        let faces = values
            .into_iter()
            .map(DieFace::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_faces(faces)
    }

    /// Build a script from already validated faces.
    pub fn from_faces(faces: Vec<DieFace>) -> Result<Self, GameError> {
        if faces.is_empty() {
            return Err(GameError::EmptyDiceScript);
        }
        Ok(Self { faces, cursor: 0 })
    }

    /// Number of faces handed out so far.
    #[must_use]
    pub fn rolls_made(&self) -> usize {
        self.cursor
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> DieFace {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_die_face_bounds() {
        assert_eq!(DieFace::new(0), Err(GameError::InvalidDieFace(0)));
        assert_eq!(DieFace::new(7), Err(GameError::InvalidDieFace(7)));
        assert_eq!(DieFace::new(1).unwrap().get(), 1);
        assert!(DieFace::new(6).unwrap().is_six());
        assert!(!DieFace::new(5).unwrap().is_six());
    }

    #[test]
    fn test_all_faces() {
        let faces: Vec<u8> = DieFace::all().map(DieFace::get).collect();
        assert_eq!(faces, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_scripted_dice_cycles() {
        let mut dice = ScriptedDice::new([1, 2, 3]).unwrap();
        let rolled: Vec<u8> = (0..7).map(|_| dice.roll().get()).collect();

        assert_eq!(rolled, vec![1, 2, 3, 1, 2, 3, 1]);
        assert_eq!(dice.rolls_made(), 7);
    }

    #[test]
    fn test_scripted_dice_rejects_bad_input() {
        assert_eq!(ScriptedDice::new(Vec::new()), Err(GameError::EmptyDiceScript));
        assert_eq!(ScriptedDice::new([3, 9]), Err(GameError::InvalidDieFace(9)));
    }

    #[test]
    fn test_dice_source_through_box() {
        let mut boxed: Box<dyn DiceSource> = Box::new(ScriptedDice::new([5]).unwrap());
        assert_eq!(boxed.roll().get(), 5);
    }

    #[test]
    fn test_die_face_serde() {
        let face: DieFace = serde_json::from_str("4").unwrap();
        assert_eq!(face.get(), 4);
        assert_eq!(serde_json::to_string(&face).unwrap(), "4");
        assert!(serde_json::from_str::<DieFace>("0").is_err());
    }
}
