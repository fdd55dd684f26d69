//! Battle flow - the ordered stage timeline for one team.
//!
//! A [`Flow`] is produced by parsing notation text ([`Flow::parse`]) and then
//! edited interactively: single actions move across stage boundaries and
//! whole stages are inserted or deleted. Every editing operation keeps the
//! comment-merge invariants of the parser intact, and none of them can fail -
//! an impossible edit is a silent no-op so interactive callers never need an
//! error path.

mod parser;

pub use parser::{FlowGrammar, NameIndex};

use serde::{Deserialize, Serialize};

use crate::value_objects::{join_comments, Stage};

/// Comment a stage receives when it is closed without one of its own.
pub const DEFAULT_STAGE_COMMENT: &str = "順著費用放";

/// Placeholder comment for stages inserted by hand.
pub const INSERTED_STAGE_COMMENT: &str = "新組";

/// Direction an action moves across a stage boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Which side of a stage index a new stage lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Before,
    After,
}

/// The full ordered stage sequence for one team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Flow {
    stages: Vec<Stage>,
}

impl Flow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_stages(stages: Vec<Stage>) -> Self {
        Self { stages }
    }

    /// Parse notation text with the default (plain-name) grammar.
    pub fn parse(text: &str, names: &NameIndex) -> Self {
        Self::parse_with(text, names, FlowGrammar::default())
    }

    /// Parse notation text with an explicit grammar.
    pub fn parse_with(text: &str, names: &NameIndex, grammar: FlowGrammar) -> Self {
        Self {
            stages: parser::parse(text, names, grammar),
        }
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Move one action out of `stage_index` across the boundary given by
    /// `direction`: the front action into the previous stage, or the back
    /// action into the next one. At the ends of the sequence a fresh
    /// one-action stage is created instead.
    ///
    /// Refused (no-op) when the stage is a single action sitting at the edge
    /// it would move past, and when `stage_index` is out of range.
    pub fn move_action(&mut self, stage_index: usize, direction: Direction) {
        let Some(stage) = self.stages.get(stage_index) else {
            return;
        };
        let last_index = self.stages.len() - 1;
        let single = stage.actions.len() == 1;
        let at_edge = match direction {
            Direction::Previous => stage_index == 0,
            Direction::Next => stage_index == last_index,
        };
        if at_edge && single {
            return;
        }

        let source = &mut self.stages[stage_index];
        let action = match direction {
            Direction::Previous => {
                if source.actions.is_empty() {
                    return;
                }
                source.actions.remove(0)
            }
            Direction::Next => match source.actions.pop() {
                Some(action) => action,
                None => return,
            },
        };
        let emptied = self.stages[stage_index].actions.is_empty();

        match direction {
            Direction::Previous => {
                if stage_index == 0 {
                    self.stages.insert(0, Stage::new(vec![action], None));
                } else {
                    self.stages[stage_index - 1].actions.push(action);
                }
            }
            Direction::Next => {
                if stage_index == last_index {
                    self.stages.push(Stage::new(vec![action], None));
                } else {
                    self.stages[stage_index + 1].actions.insert(0, action);
                }
            }
        }

        // An emptied stage dissolves into whichever neighbour absorbed the
        // action, its comment joined in reading order. The edge guards above
        // ensure an emptied stage always has that neighbour.
        if emptied {
            let removed = self.stages.remove(stage_index);
            match direction {
                Direction::Previous => {
                    if let Some(absorber) = self.stages.get_mut(stage_index.wrapping_sub(1)) {
                        absorber.comment =
                            join_comments(absorber.comment.as_deref(), removed.comment.as_deref());
                    }
                }
                Direction::Next => {
                    if let Some(absorber) = self.stages.get_mut(stage_index) {
                        absorber.comment =
                            join_comments(removed.comment.as_deref(), absorber.comment.as_deref());
                    }
                }
            }
        }
    }

    /// Insert a new empty stage beside `index`, carrying the placeholder
    /// comment so the rendered output marks it visibly. Out-of-range indices
    /// are a no-op.
    pub fn insert_stage(&mut self, index: usize, side: Side) {
        let at = match side {
            Side::Before => index,
            Side::After => index.saturating_add(1),
        };
        if at > self.stages.len() {
            return;
        }
        self.stages.insert(
            at,
            Stage::new(Vec::new(), Some(INSERTED_STAGE_COMMENT.to_string())),
        );
    }

    /// Remove the stage at `index` outright; its comment is discarded with
    /// it. Out-of-range indices are a no-op.
    pub fn delete_stage(&mut self, index: usize) {
        if index < self.stages.len() {
            self.stages.remove(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::CharacterId;
    use crate::value_objects::Action;

    fn action(id: u32) -> Action {
        Action::new(Some(CharacterId::new(id)))
    }

    fn stage(ids: &[u32], comment: Option<&str>) -> Stage {
        Stage::new(
            ids.iter().copied().map(action).collect(),
            comment.map(str::to_string),
        )
    }

    #[test]
    fn test_move_backward_at_first_stage_with_single_action_is_refused() {
        let mut flow = Flow::from_stages(vec![stage(&[1], Some("a")), stage(&[2, 3], Some("b"))]);
        let before = flow.clone();
        flow.move_action(0, Direction::Previous);
        assert_eq!(flow, before);
    }

    #[test]
    fn test_move_forward_at_last_stage_with_single_action_is_refused() {
        let mut flow = Flow::from_stages(vec![stage(&[1, 2], Some("a")), stage(&[3], Some("b"))]);
        let before = flow.clone();
        flow.move_action(1, Direction::Next);
        assert_eq!(flow, before);
    }

    #[test]
    fn test_move_backward_at_first_stage_splits_off_a_new_stage() {
        let mut flow = Flow::from_stages(vec![stage(&[1, 2], Some("a"))]);
        flow.move_action(0, Direction::Previous);
        assert_eq!(
            flow.stages(),
            &[stage(&[1], None), stage(&[2], Some("a"))]
        );
    }

    #[test]
    fn test_move_forward_at_last_stage_splits_off_a_new_stage() {
        let mut flow = Flow::from_stages(vec![stage(&[1, 2], Some("a"))]);
        flow.move_action(0, Direction::Next);
        assert_eq!(
            flow.stages(),
            &[stage(&[1], Some("a")), stage(&[2], None)]
        );
    }

    #[test]
    fn test_move_backward_appends_to_previous_stage() {
        let mut flow = Flow::from_stages(vec![stage(&[1], Some("a")), stage(&[2, 3], Some("b"))]);
        flow.move_action(1, Direction::Previous);
        assert_eq!(
            flow.stages(),
            &[stage(&[1, 2], Some("a")), stage(&[3], Some("b"))]
        );
    }

    #[test]
    fn test_move_forward_prepends_to_next_stage() {
        let mut flow = Flow::from_stages(vec![stage(&[1, 2], Some("a")), stage(&[3], Some("b"))]);
        flow.move_action(0, Direction::Next);
        assert_eq!(
            flow.stages(),
            &[stage(&[1], Some("a")), stage(&[2, 3], Some("b"))]
        );
    }

    #[test]
    fn test_emptied_stage_merges_comment_backward_in_reading_order() {
        let mut flow = Flow::from_stages(vec![stage(&[1], Some("a")), stage(&[2], Some("b"))]);
        flow.move_action(1, Direction::Previous);
        // Stage 1 emptied; its comment joins after the absorber's.
        assert_eq!(flow.stages(), &[stage(&[1, 2], Some("a, b"))]);
    }

    #[test]
    fn test_emptied_stage_merges_comment_forward_in_reading_order() {
        let mut flow = Flow::from_stages(vec![
            stage(&[1], Some("a")),
            stage(&[2], Some("b")),
            stage(&[3], Some("c")),
        ]);
        flow.move_action(1, Direction::Next);
        // Stage 1 emptied; it was earlier in reading order, so its comment
        // comes first in the absorber.
        assert_eq!(
            flow.stages(),
            &[stage(&[1], Some("a")), stage(&[2, 3], Some("b, c"))]
        );
    }

    #[test]
    fn test_emptied_stage_with_no_comment_leaves_absorber_untouched() {
        let mut flow = Flow::from_stages(vec![stage(&[1], Some("a")), stage(&[2], None)]);
        flow.move_action(1, Direction::Previous);
        assert_eq!(flow.stages(), &[stage(&[1, 2], Some("a"))]);
    }

    #[test]
    fn test_insert_stage_before_and_after() {
        let mut flow = Flow::from_stages(vec![stage(&[1], Some("a")), stage(&[2], Some("b"))]);
        flow.insert_stage(1, Side::Before);
        assert_eq!(flow.stages()[1], stage(&[], Some(INSERTED_STAGE_COMMENT)));
        flow.insert_stage(2, Side::After);
        assert_eq!(flow.stages()[2], stage(&[2], Some("b")));
        assert_eq!(flow.stages()[3], stage(&[], Some(INSERTED_STAGE_COMMENT)));
        assert_eq!(flow.len(), 4);
    }

    #[test]
    fn test_delete_stage_discards_comment() {
        let mut flow = Flow::from_stages(vec![stage(&[1], Some("a")), stage(&[2], Some("b"))]);
        flow.delete_stage(0);
        assert_eq!(flow.stages(), &[stage(&[2], Some("b"))]);
    }

    #[test]
    fn test_out_of_range_indices_are_no_ops() {
        let mut flow = Flow::from_stages(vec![stage(&[1], Some("a"))]);
        let before = flow.clone();
        flow.move_action(5, Direction::Next);
        flow.delete_stage(5);
        flow.insert_stage(5, Side::Before);
        assert_eq!(flow, before);
    }

    #[test]
    fn test_moving_out_of_a_user_inserted_empty_stage_is_a_no_op() {
        let mut flow = Flow::from_stages(vec![stage(&[1], Some("a")), stage(&[], Some("新組"))]);
        let before = flow.clone();
        flow.move_action(1, Direction::Previous);
        assert_eq!(flow, before);
    }
}
