//! High score record
//!
//! One best score per game mode, `None` until the mode has been played.
//! Serialized as a flat JSON object keyed by mode name.

use serde::{Deserialize, Serialize};

/// Game modes the UI tracks a best score for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    Addition,
    AdditionBig,
    Multiplication,
    MultiplicationBig,
}

impl GameMode {
    /// All modes, in serialization order
    pub const ALL: [GameMode; 4] = [
        GameMode::Addition,
        GameMode::AdditionBig,
        GameMode::Multiplication,
        GameMode::MultiplicationBig,
    ];

    /// Key used for this mode in the stored JSON object
    pub fn key(&self) -> &'static str {
        match self {
            GameMode::Addition => "addition",
            GameMode::AdditionBig => "additionBig",
            GameMode::Multiplication => "multiplication",
            GameMode::MultiplicationBig => "multiplicationBig",
        }
    }
}

/// Best score per game mode
///
/// Scores are whatever integer the UI reported, negative values included.
///
/// Keys missing from a stored object come back as `None`, so every mode is
/// always present after a load. Unknown keys are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoreRecord {
    pub addition: Option<i64>,
    pub addition_big: Option<i64>,
    pub multiplication: Option<i64>,
    pub multiplication_big: Option<i64>,
}

impl ScoreRecord {
    /// Record with no scores yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Best score for a mode
    pub fn get(&self, mode: GameMode) -> Option<i64> {
        match mode {
            GameMode::Addition => self.addition,
            GameMode::AdditionBig => self.addition_big,
            GameMode::Multiplication => self.multiplication,
            GameMode::MultiplicationBig => self.multiplication_big,
        }
    }

    /// Number of modes with a score
    pub fn recorded(&self) -> usize {
        GameMode::ALL
            .iter()
            .filter(|mode| self.get(**mode).is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_null() {
        let json = serde_json::to_string(&ScoreRecord::new()).unwrap();
        assert_eq!(
            json,
            r#"{"addition":null,"additionBig":null,"multiplication":null,"multiplicationBig":null}"#
        );
    }

    #[test]
    fn test_serializes_in_mode_order() {
        let record = ScoreRecord {
            addition: Some(12),
            addition_big: None,
            multiplication: Some(5),
            multiplication_big: Some(3),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"addition":12,"additionBig":null,"multiplication":5,"multiplicationBig":3}"#
        );
    }

    #[test]
    fn test_missing_keys_default_to_null() {
        let record: ScoreRecord = serde_json::from_str(r#"{"multiplication":7}"#).unwrap();
        assert_eq!(record.multiplication, Some(7));
        assert_eq!(record.addition, None);
        assert_eq!(record.addition_big, None);
        assert_eq!(record.multiplication_big, None);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let record: ScoreRecord =
            serde_json::from_str(r#"{"addition":4,"subtraction":9}"#).unwrap();
        assert_eq!(record.addition, Some(4));
        assert_eq!(record.recorded(), 1);
    }

    #[test]
    fn test_rejects_non_integer_scores() {
        assert!(serde_json::from_str::<ScoreRecord>(r#"{"addition":"ten"}"#).is_err());
        assert!(serde_json::from_str::<ScoreRecord>(r#"{"addition":2.5}"#).is_err());
        assert!(serde_json::from_str::<ScoreRecord>("[1,2,3,4]").is_err());
    }

    #[test]
    fn test_accepts_any_integer_score() {
        let record: ScoreRecord = serde_json::from_str(
            r#"{"addition":-3,"additionBig":null,"multiplication":5,"multiplicationBig":9007199254740991}"#,
        )
        .unwrap();
        assert_eq!(record.addition, Some(-3));
        assert_eq!(record.multiplication, Some(5));
        assert_eq!(record.multiplication_big, Some(9_007_199_254_740_991));
        assert_eq!(record.recorded(), 3);
    }

    #[test]
    fn test_get_by_mode() {
        let record = ScoreRecord {
            multiplication_big: Some(21),
            ..ScoreRecord::new()
        };
        assert_eq!(record.get(GameMode::MultiplicationBig), Some(21));
        assert_eq!(record.get(GameMode::Addition), None);
        assert_eq!(record.recorded(), 1);
        assert_eq!(ScoreRecord::new().recorded(), 0);
    }

    #[test]
    fn test_mode_keys_match_serialized_fields() {
        let record = ScoreRecord {
            addition: Some(0),
            addition_big: Some(1),
            multiplication: Some(2),
            multiplication_big: Some(3),
        };
        let value = serde_json::to_value(record).unwrap();
        for mode in GameMode::ALL {
            assert_eq!(value[mode.key()], serde_json::json!(record.get(mode)));
        }
    }
}
