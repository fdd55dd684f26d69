//! Free-form battle notation parsing.
//!
//! The notation is line oriented:
//!
//! ```text
//! FLOW   := STAGE [" → " STAGE]*
//! STAGE  := ACTION ["+" ACTION]*
//! ACTION := NAME ["(" COMMENT ")"]
//! ```
//!
//! where `NAME` is a maximal run of non-whitespace, non-parenthesis
//! characters. With [`FlowGrammar::ExTarget`] a name may additionally embed a
//! literal `EX` marker separating the actor from an optional skill target.
//!
//! Parsing is total: anything that fails to match or resolve degrades to a
//! comment fragment, and the grammar is simple enough to scan by hand, so no
//! parser machinery is pulled into the domain layer.

use std::collections::HashMap;

use crate::entities::Character;
use crate::ids::CharacterId;
use crate::value_objects::{Action, Stage};

use super::DEFAULT_STAGE_COMMENT;

/// Separator between stage fragments on a single line.
const STAGE_SEPARATOR: &str = " → ";

/// Marker splitting an actor name from a skill target name.
const TARGET_MARKER: &str = "EX";

/// Which action-token grammar the parser accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowGrammar {
    /// `NAME ["(" COMMENT ")"]` - the notation most flows are written in.
    #[default]
    Plain,
    /// `NAME1 "EX" [NAME2] ["(" COMMENT ")"]` - captures the target of a
    /// skill when the notation needs it.
    ExTarget,
}

/// Exact-match lookup from display names and aliases to character ids.
///
/// Built from whatever roster snapshot the caller scopes a parse to,
/// typically the current team's members. Every alias is inserted before the
/// canonical name, so a canonical name wins over a colliding alias, and a
/// later character wins over an earlier one.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    map: HashMap<String, CharacterId>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_characters<'a>(characters: impl IntoIterator<Item = &'a Character>) -> Self {
        let mut index = Self::new();
        for character in characters {
            for alias in character.aliases() {
                index.insert(alias.clone(), character.id());
            }
            index.insert(character.name().to_string(), character.id());
        }
        index
    }

    pub fn insert(&mut self, name: impl Into<String>, id: CharacterId) {
        self.map.insert(name.into(), id);
    }

    pub fn resolve(&self, name: &str) -> Option<CharacterId> {
        self.map.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// What one action token contributed to its stage fragment.
struct TokenScan {
    action: Option<Action>,
    /// Name text that did not resolve, recovered as a comment fragment.
    stray: Option<String>,
    /// Parenthesized comment following the name.
    comment: Option<String>,
}

pub(super) fn parse(text: &str, names: &NameIndex, grammar: FlowGrammar) -> Vec<Stage> {
    let fragments = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .flat_map(|line| line.split(STAGE_SEPARATOR));

    let mut stages: Vec<Stage> = Vec::new();
    for fragment in fragments {
        let mut actions: Vec<Action> = Vec::new();
        let mut comments: Vec<String> = Vec::new();
        for token in fragment.split('+') {
            let scan = scan_token(token, names, grammar);
            if let Some(action) = scan.action {
                actions.push(action);
            }
            if let Some(stray) = scan.stray {
                comments.push(stray);
            }
            if let Some(comment) = scan.comment {
                comments.push(comment);
            }
        }
        let comment = if comments.is_empty() {
            None
        } else {
            Some(comments.join(", "))
        };

        // A fragment opens a new stage exactly when it carries a comment or
        // nothing has been emitted yet; otherwise its actions fold into the
        // previous stage.
        if comment.is_some() || stages.is_empty() {
            close_previous(&mut stages);
            stages.push(Stage { actions, comment });
        } else if let Some(previous) = stages.last_mut() {
            previous.actions.append(&mut actions);
        }
    }
    // End of input closes the tail stage.
    close_previous(&mut stages);
    stages
}

/// A stage that is closed without a comment of its own gets the default.
fn close_previous(stages: &mut [Stage]) {
    if let Some(previous) = stages.last_mut() {
        if previous.comment.is_none() {
            previous.comment = Some(DEFAULT_STAGE_COMMENT.to_string());
        }
    }
}

fn scan_token(token: &str, names: &NameIndex, grammar: FlowGrammar) -> TokenScan {
    let Some((name, rest)) = name_run(token) else {
        // No name anywhere in the token: the token text itself is the
        // comment, unless it is pure whitespace.
        return TokenScan {
            action: None,
            stray: Some(token.to_string()).filter(|t| !t.trim().is_empty()),
            comment: None,
        };
    };
    let comment = paren_comment(rest).map(str::to_string);

    let resolved = match grammar {
        FlowGrammar::ExTarget => match name.split_once(TARGET_MARKER) {
            Some((actor_name, target_name)) => names
                .resolve(actor_name)
                .map(|actor| Action::with_target(Some(actor), names.resolve(target_name))),
            None => names.resolve(name).map(|actor| Action::new(Some(actor))),
        },
        FlowGrammar::Plain => names.resolve(name).map(|actor| Action::new(Some(actor))),
    };

    match resolved {
        Some(action) => TokenScan {
            action: Some(action),
            stray: None,
            comment,
        },
        None => TokenScan {
            action: None,
            stray: Some(name.to_string()),
            comment,
        },
    }
}

/// First maximal run of non-whitespace, non-parenthesis characters, plus the
/// remainder of the token after it.
fn name_run(token: &str) -> Option<(&str, &str)> {
    fn is_name_char(c: char) -> bool {
        !c.is_whitespace() && c != '(' && c != ')'
    }

    let start = token.find(is_name_char)?;
    let tail = &token[start..];
    let end = tail
        .find(|c: char| !is_name_char(c))
        .unwrap_or(tail.len());
    Some((&tail[..end], &tail[end..]))
}

/// Comment captured only when `(` immediately follows the name and a closing
/// `)` exists with no nested parenthesis in between.
fn paren_comment(rest: &str) -> Option<&str> {
    let inner = rest.strip_prefix('(')?;
    let close = inner.find(')')?;
    let comment = &inner[..close];
    if comment.is_empty() || comment.contains('(') {
        return None;
    }
    Some(comment)
}
