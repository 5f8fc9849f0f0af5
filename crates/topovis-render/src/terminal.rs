//! Terminal glyphs and the anchor point computation that makes room for
//! them at an edge endpoint.

use serde::{Deserialize, Serialize};
use topovis_core::geom::{Point, point};

/// Default terminal glyph size, in px.
pub const DEFAULT_TERMINAL_SIZE: f64 = 14.0;

/// Glyph drawn at an edge endpoint. Only `None` vs non-`None` affects
/// geometry; the concrete shape is the renderer's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TerminalType {
    #[default]
    None,
    Directional,
    Circle,
    Square,
    Cross,
}

impl TerminalType {
    pub fn is_none(&self) -> bool {
        matches!(self, TerminalType::None)
    }
}

/// The point along `line_start -> line_end` at distance `terminal_size`
/// back from `line_end`; the visible stroke should end here so a glyph of
/// that size fits between the anchor and the true endpoint.
///
/// A zero-length segment resolves to the origin `(0, 0)` rather than
/// failing; callers that can feed true zero-length segments must
/// special-case that fallback. When `terminal_size` exceeds the segment
/// length the ratio goes negative and the anchor lands beyond
/// `line_start` — accepted, unclamped.
pub fn terminal_anchor(line_start: Point, line_end: Point, terminal_size: f64) -> Point {
    let delta = line_end - line_start;
    let length = delta.length();
    if length == 0.0 {
        return point(0.0, 0.0);
    }
    let ratio = (length - terminal_size) / length;
    line_start + delta * ratio
}
