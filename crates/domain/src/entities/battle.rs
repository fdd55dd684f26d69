//! Battle plan aggregate.

use crate::ids::BattleId;
use crate::value_objects::{BattleMode, TeamStructure};

/// Default plan name.
const DEFAULT_NAME: &str = "總力軸";
/// Default free-form annotation.
const DEFAULT_COMMENT: &str = "※註解";
/// Default expected score.
const DEFAULT_SCORE: &str = "0";

/// Optional overrides for constructing a battle; loaded project files carry
/// any subset of these.
#[derive(Debug, Clone, Default)]
pub struct BattleProps {
    pub name: Option<String>,
    pub title: Option<String>,
    pub comment: Option<String>,
    pub score: Option<String>,
    pub mode: Option<BattleMode>,
}

/// Top-level metadata for one battle plan.
///
/// `name`, `comment` and `score` fall back to their defaults when a supplied
/// value is empty; `title` keeps an explicitly supplied empty string and only
/// derives `"蔚藍檔案 {mode}"` when absent, so a deliberately blank title
/// survives a round trip.
#[derive(Debug, Clone)]
pub struct Battle {
    id: BattleId,
    name: String,
    title: String,
    comment: String,
    score: String,
    mode: BattleMode,
}

impl Battle {
    pub fn new(props: BattleProps) -> Self {
        let mode = props.mode.unwrap_or_default();
        Self {
            id: BattleId::new(),
            name: non_empty_or(props.name, DEFAULT_NAME),
            comment: non_empty_or(props.comment, DEFAULT_COMMENT),
            score: non_empty_or(props.score, DEFAULT_SCORE),
            title: props.title.unwrap_or_else(|| format!("蔚藍檔案 {mode}")),
            mode,
        }
    }

    pub fn id(&self) -> BattleId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn score(&self) -> &str {
        &self.score
    }

    pub fn mode(&self) -> BattleMode {
        self.mode
    }

    /// Capacity layout teams of this battle use.
    pub fn team_structure(&self) -> TeamStructure {
        self.mode.team_structure()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    pub fn set_score(&mut self, score: impl Into<String>) {
        self.score = score.into();
    }

    pub fn set_mode(&mut self, mode: BattleMode) {
        self.mode = mode;
    }
}

impl Default for Battle {
    fn default() -> Self {
        Self::new(BattleProps::default())
    }
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
