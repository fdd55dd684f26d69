//! Stage and action records making up a battle flow.

use serde::{Deserialize, Serialize};

use crate::ids::CharacterId;

/// An occupied or empty position: a roster slot, an actor, or a target.
pub type Member = Option<CharacterId>;

/// One character's participation within a stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    /// Acting character; `None` when the notation named nobody recognizable.
    pub actor: Member,
    /// Skill target. `None` means no target was written; `Some(None)` means
    /// a target was written but did not resolve against the roster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Member>,
    /// Free-text note attached to this action specifically.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Action {
    pub fn new(actor: Member) -> Self {
        Self {
            actor,
            target: None,
            comment: None,
        }
    }

    pub fn with_target(actor: Member, target: Member) -> Self {
        Self {
            actor,
            target: Some(target),
            comment: None,
        }
    }
}

/// An ordered group of simultaneous actions sharing a single comment.
///
/// The comment is never `Some("")`; an absent comment is always `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    pub actions: Vec<Action>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Stage {
    pub fn new(actions: Vec<Action>, comment: Option<String>) -> Self {
        Self {
            actions,
            comment: comment.filter(|c| !c.is_empty()),
        }
    }
}

/// Joins two optional comments with `", "`, dropping empty sides.
///
/// Returns `None` when both sides are empty, so the "comment is never an
/// empty string" invariant survives every merge.
pub fn join_comments(first: Option<&str>, second: Option<&str>) -> Option<String> {
    let joined: Vec<&str> = [first, second]
        .into_iter()
        .flatten()
        .filter(|side| !side.is_empty())
        .collect();
    if joined.is_empty() {
        None
    } else {
        Some(joined.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_both_sides() {
        assert_eq!(
            join_comments(Some("開霞"), Some("等大招")),
            Some("開霞, 等大招".to_string())
        );
    }

    #[test]
    fn test_join_ignores_empty_sides() {
        assert_eq!(join_comments(Some("開霞"), None), Some("開霞".to_string()));
        assert_eq!(join_comments(None, Some("等大招")), Some("等大招".to_string()));
        assert_eq!(join_comments(Some(""), Some("等大招")), Some("等大招".to_string()));
        assert_eq!(join_comments(None, None), None);
        assert_eq!(join_comments(Some(""), Some("")), None);
    }

    #[test]
    fn test_stage_never_keeps_an_empty_comment() {
        let stage = Stage::new(Vec::new(), Some(String::new()));
        assert_eq!(stage.comment, None);
    }

    #[test]
    fn test_target_states_are_distinguishable() {
        let no_target = Action::new(Some(CharacterId::new(1)));
        let unresolved = Action::with_target(Some(CharacterId::new(1)), None);
        let resolved = Action::with_target(Some(CharacterId::new(1)), Some(CharacterId::new(2)));
        assert_eq!(no_target.target, None);
        assert_eq!(unresolved.target, Some(None));
        assert_eq!(resolved.target, Some(Some(CharacterId::new(2))));
        assert_ne!(no_target, unresolved);
    }
}
