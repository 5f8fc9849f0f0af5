use topovis_core::geom::point;

use crate::terminal::{DEFAULT_TERMINAL_SIZE, TerminalType, terminal_anchor};

#[test]
fn anchor_backs_off_by_the_terminal_size() {
    let anchor = terminal_anchor(point(0.0, 0.0), point(10.0, 0.0), 4.0);
    assert_eq!(anchor, point(6.0, 0.0));
}

#[test]
fn zero_terminal_size_keeps_the_raw_endpoint() {
    let anchor = terminal_anchor(point(0.0, 0.0), point(10.0, 0.0), 0.0);
    assert_eq!(anchor, point(10.0, 0.0));
}

#[test]
fn zero_length_segment_falls_back_to_the_origin() {
    for p in [point(0.0, 0.0), point(3.5, -7.0), point(100.0, 100.0)] {
        assert_eq!(terminal_anchor(p, p, 14.0), point(0.0, 0.0));
        assert_eq!(terminal_anchor(p, p, 0.0), point(0.0, 0.0));
    }
}

#[test]
fn oversized_terminal_overshoots_unclamped() {
    // size > length: the ratio goes negative and the anchor lands beyond
    // the start of the segment.
    let anchor = terminal_anchor(point(0.0, 0.0), point(10.0, 0.0), 15.0);
    assert_eq!(anchor, point(-5.0, 0.0));
}

#[test]
fn anchor_works_on_diagonal_segments() {
    // 3-4-5 triangle: backing off the full length lands on the start.
    let anchor = terminal_anchor(point(0.0, 0.0), point(3.0, 4.0), 5.0);
    assert_eq!(anchor, point(0.0, 0.0));

    let halfway = terminal_anchor(point(0.0, 0.0), point(3.0, 4.0), 2.5);
    assert_eq!(halfway, point(1.5, 2.0));
}

#[test]
fn only_none_is_geometry_neutral() {
    assert!(TerminalType::None.is_none());
    for t in [
        TerminalType::Directional,
        TerminalType::Circle,
        TerminalType::Square,
        TerminalType::Cross,
    ] {
        assert!(!t.is_none());
    }
    assert_eq!(DEFAULT_TERMINAL_SIZE, 14.0);
}
