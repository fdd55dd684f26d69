//! Battle event categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::TeamStructure;

/// Category of battle event a plan targets.
///
/// The serialized labels are the event names the community writes in shared
/// project files; they round-trip through serialization unchanged and are
/// never translated by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BattleMode {
    #[default]
    #[serde(rename = "總力戰")]
    Raid,
    #[serde(rename = "大決戰")]
    Elimination,
    #[serde(rename = "綜合戰術考試")]
    Test,
    #[serde(rename = "日服總力戰")]
    JpRaid,
    #[serde(rename = "制約解除")]
    Unrestrict,
}

impl BattleMode {
    /// Every mode, in display order.
    pub const ALL: [BattleMode; 5] = [
        BattleMode::Raid,
        BattleMode::Elimination,
        BattleMode::Test,
        BattleMode::JpRaid,
        BattleMode::Unrestrict,
    ];

    /// The exact label used in project files.
    pub fn label(&self) -> &'static str {
        match self {
            BattleMode::Raid => "總力戰",
            BattleMode::Elimination => "大決戰",
            BattleMode::Test => "綜合戰術考試",
            BattleMode::JpRaid => "日服總力戰",
            BattleMode::Unrestrict => "制約解除",
        }
    }

    /// Team capacity layout battles of this mode use.
    pub fn team_structure(&self) -> TeamStructure {
        match self {
            BattleMode::Unrestrict => TeamStructure::Unrestrict,
            _ => TeamStructure::Normal,
        }
    }
}

impl fmt::Display for BattleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error when a label does not name a known battle event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown battle mode: {0}")]
pub struct ParseBattleModeError(pub String);

impl FromStr for BattleMode {
    type Err = ParseBattleModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|mode| mode.label() == s)
            .copied()
            .ok_or_else(|| ParseBattleModeError(s.to_string()))
    }
}
