//! Composite edge path construction.
//!
//! Every edge renders as two superimposed SVG paths: the visible stroke,
//! which always runs the full polyline, and a wider invisible background
//! path used for hover/click targeting, whose terminal ends are pulled back
//! to the glyph anchor.

use topovis_core::geom::Point;

use crate::terminal::{TerminalType, terminal_anchor};

#[derive(Debug, Clone, PartialEq)]
pub struct EdgePath {
    pub start: Point,
    pub end: Point,
    /// Ordered intermediate points, start to end.
    pub bend_points: Vec<Point>,
    pub start_terminal: TerminalType,
    pub end_terminal: TerminalType,
    pub start_terminal_size: f64,
    pub end_terminal_size: f64,
}

impl EdgePath {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            bend_points: Vec::new(),
            start_terminal: TerminalType::None,
            end_terminal: TerminalType::None,
            start_terminal_size: 0.0,
            end_terminal_size: 0.0,
        }
    }

    pub fn with_bend_points(mut self, bend_points: Vec<Point>) -> Self {
        self.bend_points = bend_points;
        self
    }

    pub fn with_start_terminal(mut self, terminal: TerminalType, size: f64) -> Self {
        self.start_terminal = terminal;
        self.start_terminal_size = size;
        self
    }

    pub fn with_end_terminal(mut self, terminal: TerminalType, size: f64) -> Self {
        self.end_terminal = terminal;
        self.end_terminal_size = size;
        self
    }

    /// The visible stroke polyline: always the full
    /// `start -> bends -> end` run, regardless of terminals.
    pub fn stroke_points(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.bend_points.len() + 2);
        points.push(self.start);
        points.extend_from_slice(&self.bend_points);
        points.push(self.end);
        points
    }

    /// The hit-test polyline: each end with a terminal is substituted by
    /// its anchor, computed from the nearest bend point (or the opposite
    /// raw endpoint when there are no bends) toward the real endpoint.
    pub fn background_points(&self) -> Vec<Point> {
        let bg_start = if self.start_terminal.is_none() {
            self.start
        } else {
            let toward = self.bend_points.first().copied().unwrap_or(self.end);
            terminal_anchor(toward, self.start, self.start_terminal_size)
        };
        let bg_end = if self.end_terminal.is_none() {
            self.end
        } else {
            let toward = self.bend_points.last().copied().unwrap_or(self.start);
            terminal_anchor(toward, self.end, self.end_terminal_size)
        };

        let mut points = Vec::with_capacity(self.bend_points.len() + 2);
        points.push(bg_start);
        points.extend_from_slice(&self.bend_points);
        points.push(bg_end);
        points
    }

    /// SVG `d` attribute for the visible stroke.
    pub fn stroke_path_d(&self) -> String {
        path_d(&self.stroke_points())
    }

    /// SVG `d` attribute for the background hit-test path.
    pub fn background_path_d(&self) -> String {
        path_d(&self.background_points())
    }
}

fn path_d(points: &[Point]) -> String {
    let mut out = String::new();
    let mut buf = ryu_js::Buffer::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
            out.push('L');
        } else {
            out.push('M');
        }
        out.push_str(js_number_to_string(p.x, &mut buf));
        out.push(' ');
        out.push_str(js_number_to_string(p.y, &mut buf));
    }
    out
}

// JS `String(number)` parity: whole numbers print without a `.0` suffix,
// and `-0`/non-finite values never leak into path data.
fn js_number_to_string(mut v: f64, buf: &mut ryu_js::Buffer) -> &str {
    if !v.is_finite() {
        return "0";
    }
    if v == -0.0 {
        v = 0.0;
    }
    buf.format_finite(v)
}
