//! Project file load and save.
//!
//! Loading runs in three steps: parse the JSON, validate the whole shape
//! while collecting every violation, then deserialize and build the domain
//! values. Validation never stops early - a file broken in four places
//! reports four violations.

use serde_json::Value;
use tracing::{debug, warn};

use raidflow_domain::{Battle, BattleMode, BattleProps, Team};

use crate::dto::{ProjectFile, TeamEntry};
use crate::error::{FieldViolation, ProjectFileError};

/// A battle plan together with its teams, as reconstructed from a file.
#[derive(Debug, Clone)]
pub struct Project {
    pub battle: Battle,
    pub teams: Vec<Team>,
}

/// Parse, validate and reconstruct a project from file content.
pub fn load_project(content: &str) -> Result<Project, ProjectFileError> {
    let value: Value = serde_json::from_str(content)?;

    let violations = validate(&value);
    if !violations.is_empty() {
        warn!(count = violations.len(), "project file failed schema validation");
        return Err(ProjectFileError::Schema(violations));
    }

    let file: ProjectFile =
        serde_json::from_value(value).map_err(|error| ProjectFileError::Other(error.to_string()))?;
    Ok(from_file(file))
}

/// Build domain values from an already-validated file.
pub fn from_file(file: ProjectFile) -> Project {
    let battle = Battle::new(BattleProps {
        name: file.name,
        title: file.title,
        comment: file.comment,
        score: file.score,
        mode: file.mode,
    });
    let structure = battle.team_structure();
    let teams: Vec<Team> = file
        .teams
        .unwrap_or_default()
        .into_iter()
        .map(|entry| {
            let mut team = match entry.members {
                Some(members) => Team::with_members(structure, members),
                None => Team::new(structure),
            };
            if let Some(text) = entry.text {
                team.set_text(text);
            }
            team
        })
        .collect();
    debug!(teams = teams.len(), mode = %battle.mode(), "loaded project");
    Project { battle, teams }
}

/// Serialize a battle and its teams into pretty-printed project JSON.
pub fn save_project(battle: &Battle, teams: &[Team]) -> Result<String, ProjectFileError> {
    let file = ProjectFile {
        name: Some(battle.name().to_string()),
        mode: Some(battle.mode()),
        score: Some(battle.score().to_string()),
        comment: Some(battle.comment().to_string()),
        title: Some(battle.title().to_string()),
        teams: Some(
            teams
                .iter()
                .map(|team| TeamEntry {
                    text: Some(team.text().to_string()),
                    members: Some(team.members().to_vec()),
                })
                .collect(),
        ),
    };
    debug!(teams = teams.len(), "saving project");
    serde_json::to_string_pretty(&file).map_err(|error| ProjectFileError::Other(error.to_string()))
}

fn validate(value: &Value) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    let Some(root) = value.as_object() else {
        violations.push(FieldViolation::new("$", "expected an object"));
        return violations;
    };

    for key in ["name", "score", "comment", "title"] {
        if let Some(field) = root.get(key) {
            if !field.is_null() && !field.is_string() {
                violations.push(FieldViolation::new(key, "expected a string or null"));
            }
        }
    }

    if let Some(mode) = root.get("mode") {
        match mode {
            Value::Null => {}
            Value::String(label) => {
                if label.parse::<BattleMode>().is_err() {
                    violations.push(FieldViolation::new(
                        "mode",
                        format!("unknown battle mode \"{label}\""),
                    ));
                }
            }
            _ => violations.push(FieldViolation::new("mode", "expected a string or null")),
        }
    }

    if let Some(teams) = root.get("teams") {
        match teams {
            Value::Null => {}
            Value::Array(entries) => {
                for (index, entry) in entries.iter().enumerate() {
                    validate_team(index, entry, &mut violations);
                }
            }
            _ => violations.push(FieldViolation::new("teams", "expected an array or null")),
        }
    }

    violations
}

fn validate_team(index: usize, entry: &Value, violations: &mut Vec<FieldViolation>) {
    let path = format!("teams[{index}]");
    let Some(team) = entry.as_object() else {
        violations.push(FieldViolation::new(path, "expected an object"));
        return;
    };

    if let Some(text) = team.get("text") {
        if !text.is_null() && !text.is_string() {
            violations.push(FieldViolation::new(
                format!("{path}.text"),
                "expected a string or null",
            ));
        }
    }

    if let Some(members) = team.get("members") {
        match members {
            Value::Null => {}
            Value::Array(slots) => {
                for (slot, member) in slots.iter().enumerate() {
                    if !member.is_null() && !is_character_id(member) {
                        violations.push(FieldViolation::new(
                            format!("{path}.members[{slot}]"),
                            "expected an integer or null",
                        ));
                    }
                }
            }
            _ => violations.push(FieldViolation::new(
                format!("{path}.members"),
                "expected an array or null",
            )),
        }
    }
}

/// Character ids are unsigned 32-bit integers; floats and out-of-range
/// numbers are violations rather than silent truncations.
fn is_character_id(value: &Value) -> bool {
    value
        .as_u64()
        .is_some_and(|id| id <= u64::from(u32::MAX))
}
