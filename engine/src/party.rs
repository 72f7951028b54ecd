use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::types::{Cell, Outcome};

/// One of the two competing sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Party {
    A,
    B,
}

impl Party {
    pub fn opponent(self) -> Party {
        match self {
            Party::A => Party::B,
            Party::B => Party::A,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Party::A => Cell::PartyA,
            Party::B => Cell::PartyB,
        }
    }

    pub fn victory(self) -> Outcome {
        match self {
            Party::A => Outcome::PartyAWins,
            Party::B => Outcome::PartyBWins,
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Party::A => write!(f, "party_a"),
            Party::B => write!(f, "party_b"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartyKind {
    Human,
    ExternalAi,
    Com,
}

/// COM difficulty level, parsed from the wire strings "1" through "4".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComLevel {
    One,
    Two,
    Three,
    Four,
}

impl ComLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComLevel::One => "1",
            ComLevel::Two => "2",
            ComLevel::Three => "3",
            ComLevel::Four => "4",
        }
    }
}

impl FromStr for ComLevel {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(ComLevel::One),
            "2" => Ok(ComLevel::Two),
            "3" => Ok(ComLevel::Three),
            "4" => Ok(ComLevel::Four),
            other => Err(GameError::Validation(format!(
                "invalid COM level: {}",
                other
            ))),
        }
    }
}

/// Who occupies one side of a game: kind and reference carried as one
/// unit so an AI slot cannot exist without its model id, nor a COM slot
/// without a valid level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PartySlot {
    Human,
    ExternalAi { model_id: String },
    Com { level: ComLevel },
}

impl PartySlot {
    pub fn from_parts(kind: PartyKind, reference: Option<&str>) -> Result<Self, GameError> {
        match (kind, reference) {
            (PartyKind::Human, None) => Ok(PartySlot::Human),
            (PartyKind::Human, Some(_)) => Err(GameError::Validation(
                "human slot must not carry a reference".to_string(),
            )),
            (PartyKind::ExternalAi, Some(id)) if !id.is_empty() => Ok(PartySlot::ExternalAi {
                model_id: id.to_string(),
            }),
            (PartyKind::ExternalAi, _) => Err(GameError::Validation(
                "AI slot requires a model id".to_string(),
            )),
            (PartyKind::Com, Some(level)) => Ok(PartySlot::Com {
                level: level.parse()?,
            }),
            (PartyKind::Com, None) => Err(GameError::Validation(
                "COM slot requires a difficulty level".to_string(),
            )),
        }
    }

    pub fn kind(&self) -> PartyKind {
        match self {
            PartySlot::Human => PartyKind::Human,
            PartySlot::ExternalAi { .. } => PartyKind::ExternalAi,
            PartySlot::Com { .. } => PartyKind::Com,
        }
    }

    pub fn com_level(&self) -> Option<ComLevel> {
        match self {
            PartySlot::Com { level } => Some(*level),
            _ => None,
        }
    }

    pub fn reference(&self) -> Option<&str> {
        match self {
            PartySlot::Human => None,
            PartySlot::ExternalAi { model_id } => Some(model_id),
            PartySlot::Com { level } => Some(level.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_com_level_parses_valid_strings() {
        assert_eq!("1".parse::<ComLevel>().unwrap(), ComLevel::One);
        assert_eq!("4".parse::<ComLevel>().unwrap(), ComLevel::Four);
    }

    #[test]
    fn test_com_level_rejects_unknown_strings() {
        assert!(matches!(
            "5".parse::<ComLevel>(),
            Err(GameError::Validation(_))
        ));
        assert!(matches!(
            "easy".parse::<ComLevel>(),
            Err(GameError::Validation(_))
        ));
    }

    #[test]
    fn test_slot_requires_reference_for_non_humans() {
        assert!(PartySlot::from_parts(PartyKind::ExternalAi, None).is_err());
        assert!(PartySlot::from_parts(PartyKind::ExternalAi, Some("")).is_err());
        assert!(PartySlot::from_parts(PartyKind::Com, None).is_err());
        assert!(PartySlot::from_parts(PartyKind::Com, Some("9")).is_err());
    }

    #[test]
    fn test_slot_rejects_reference_for_humans() {
        assert!(PartySlot::from_parts(PartyKind::Human, Some("x")).is_err());
        assert_eq!(
            PartySlot::from_parts(PartyKind::Human, None).unwrap(),
            PartySlot::Human
        );
    }

    #[test]
    fn test_slot_round_trips_reference() {
        let com = PartySlot::from_parts(PartyKind::Com, Some("3")).unwrap();
        assert_eq!(com.com_level(), Some(ComLevel::Three));
        assert_eq!(com.reference(), Some("3"));

        let ai = PartySlot::from_parts(PartyKind::ExternalAi, Some("model-7")).unwrap();
        assert_eq!(ai.reference(), Some("model-7"));
    }
}
