//! Stage layout estimation and page packing for visual export.
//!
//! Stages are shelf-packed: each team's stages fill a column top to bottom
//! until the column's height budget or stage capacity runs out, columns fill
//! a page left to right until its width budget runs out, and every team
//! starts on a fresh page. Placement is a deterministic first-fit pass -
//! reproducibility matters here, optimal packing does not.
//!
//! Text measurement is a capability of the rendering host (fonts live
//! there), so callers inject it as a closure returning a width in layout
//! units.

use serde::Serialize;

use crate::value_objects::{Member, Stage};

/// Vertical budget for the stages of one column.
const COLUMN_HEIGHT: f64 = 1020.0;
/// Horizontal budget for the columns of one page.
const PAGE_WIDTH: f64 = 1760.0;
/// Maximum stages per column.
const COLUMN_CAPACITY: usize = 4;
/// Comment lines wrap at this width.
const COMMENT_WRAP_WIDTH: f64 = 630.0;
/// Height of one wrapped comment line.
const COMMENT_LINE_HEIGHT: f64 = 40.0;
/// Avatars per grid row.
const AVATARS_PER_ROW: usize = 4;
/// Vertical gap between a stage's comment box and its avatar grid.
const COMMENT_AVATAR_GAP: f64 = 20.0;

/// Spacing between placed stages and columns, supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gap {
    /// Vertical gap between stages in a column.
    pub row: f64,
    /// Horizontal gap between columns on a page.
    pub col: f64,
}

/// A stage placed within a column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageLayoutInfo {
    pub comment: Option<String>,
    /// Comment box width, clamped to the wrap width.
    pub comment_width: f64,
    /// Actors in grid order; `None` renders as an empty frame.
    pub actors: Vec<Member>,
    /// Vertical offset of the stage within its column.
    pub y: f64,
    /// Vertical offset of the avatar grid within the stage.
    pub avatars_y: f64,
}

/// A vertical run of stages with its measured width and horizontal offset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub entries: Vec<StageLayoutInfo>,
    /// Widest stage in the column.
    pub width: f64,
    /// Horizontal offset of the column within its page.
    pub x: f64,
}

impl Column {
    fn empty() -> Self {
        Self {
            entries: Vec::new(),
            width: 0.0,
            x: 0.0,
        }
    }
}

/// One exported page: columns in reading order.
pub type Page = Vec<Column>;

/// Measured geometry of one stage.
struct StageMetrics {
    comment_width: f64,
    comment_height: f64,
    total_width: f64,
    total_height: f64,
}

fn estimate_stage(stage: &Stage, measure: &impl Fn(&str) -> f64) -> StageMetrics {
    let rows = stage.actions.len().div_ceil(AVATARS_PER_ROW);
    let cols = stage.actions.len().min(AVATARS_PER_ROW);

    let raw = measure(stage.comment.as_deref().unwrap_or(""));
    // A broken measurement capability degrades a single stage estimate, not
    // the whole export.
    let oneline = if raw.is_finite() && raw > 0.0 { raw } else { 0.0 };
    let comment_height = (oneline / COMMENT_WRAP_WIDTH).ceil() * COMMENT_LINE_HEIGHT;
    let comment_width = oneline.min(COMMENT_WRAP_WIDTH);

    let avatars_height = grid_extent(rows);
    let avatars_width = grid_extent(cols);
    let gap = if comment_height > 0.0 && avatars_height > 0.0 {
        COMMENT_AVATAR_GAP
    } else {
        0.0
    };

    StageMetrics {
        comment_width,
        comment_height,
        total_width: avatars_width.max(comment_width),
        total_height: comment_height + gap + avatars_height,
    }
}

/// Edge length of an avatar grid spanning `cells` rows or columns; adjacent
/// cells overlap their frames by 10 units.
fn grid_extent(cells: usize) -> f64 {
    if cells < 2 {
        cells as f64 * 150.0
    } else {
        cells as f64 * 160.0 - 10.0
    }
}

/// Pack every team's stages into fixed-size pages.
///
/// A stage joins the current column only while the column holds fewer than
/// four stages and the stage still fits the height budget; the budget check
/// never rejects a stage outright - an oversized stage simply opens its own
/// column at `y = 0`. Teams never share a page. Pages without any column are
/// not emitted.
pub fn paginate<'a>(
    teams: impl IntoIterator<Item = &'a [Stage]>,
    gap: Gap,
    measure: impl Fn(&str) -> f64,
) -> Vec<Page> {
    let mut pages: Vec<Page> = vec![Vec::new()];

    for stages in teams {
        // Stages into columns.
        let mut columns: Vec<Column> = Vec::new();
        let mut current = Column::empty();
        let mut y = 0.0;
        for stage in stages {
            let metrics = estimate_stage(stage, &measure);
            let overflows = current.entries.len() >= COLUMN_CAPACITY
                || y + metrics.total_height > COLUMN_HEIGHT;
            if overflows {
                if !current.entries.is_empty() {
                    columns.push(std::mem::replace(&mut current, Column::empty()));
                }
                y = 0.0;
            }
            current.entries.push(StageLayoutInfo {
                comment: stage.comment.clone(),
                comment_width: metrics.comment_width,
                actors: stage.actions.iter().map(|action| action.actor).collect(),
                y,
                avatars_y: metrics.comment_height + COMMENT_AVATAR_GAP,
            });
            current.width = current.width.max(metrics.total_width);
            y += metrics.total_height + gap.row;
        }
        if !current.entries.is_empty() {
            columns.push(current);
        }

        // Columns into pages.
        let mut x = 0.0;
        for mut column in columns {
            if x + column.width > PAGE_WIDTH {
                pages.push(Vec::new());
                x = 0.0;
            }
            column.x = x;
            x += column.width + gap.col;
            if let Some(page) = pages.last_mut() {
                page.push(column);
            }
        }

        // Teams never share a page.
        pages.push(Vec::new());
    }

    pages.retain(|page| !page.is_empty());
    pages
}
