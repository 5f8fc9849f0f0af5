use topovis_core::geom::point;

use crate::path::EdgePath;
use crate::terminal::TerminalType;

#[test]
fn stroke_runs_the_full_polyline_regardless_of_terminals() {
    let path = EdgePath::new(point(0.0, 0.0), point(10.0, 0.0))
        .with_bend_points(vec![point(5.0, 5.0)])
        .with_end_terminal(TerminalType::Directional, 4.0);

    assert_eq!(
        path.stroke_points(),
        [point(0.0, 0.0), point(5.0, 5.0), point(10.0, 0.0)]
    );
    assert_eq!(path.stroke_path_d(), "M0 0 L5 5 L10 0");
}

#[test]
fn background_matches_stroke_without_terminals() {
    let path =
        EdgePath::new(point(0.0, 0.0), point(10.0, 0.0)).with_bend_points(vec![point(5.0, 5.0)]);
    assert_eq!(path.background_points(), path.stroke_points());
    assert_eq!(path.background_path_d(), path.stroke_path_d());
}

#[test]
fn background_end_is_pulled_back_to_the_anchor() {
    let path = EdgePath::new(point(0.0, 0.0), point(10.0, 0.0))
        .with_end_terminal(TerminalType::Directional, 4.0);

    // No bends: the anchor is computed from the opposite raw endpoint.
    assert_eq!(
        path.background_points(),
        [point(0.0, 0.0), point(6.0, 0.0)]
    );
    assert_eq!(path.background_path_d(), "M0 0 L6 0");
    assert_eq!(path.stroke_path_d(), "M0 0 L10 0");
}

#[test]
fn background_anchors_use_the_nearest_bend_point() {
    let path = EdgePath::new(point(0.0, 0.0), point(5.0, 10.0))
        .with_bend_points(vec![point(0.0, 4.0), point(5.0, 4.0)])
        .with_start_terminal(TerminalType::Circle, 1.0)
        .with_end_terminal(TerminalType::Directional, 3.0);

    // Start anchor: from first bend (0,4) toward (0,0), size 1 -> (0,1).
    // End anchor: from last bend (5,4) toward (5,10), size 3 -> (5,7).
    assert_eq!(
        path.background_points(),
        [
            point(0.0, 1.0),
            point(0.0, 4.0),
            point(5.0, 4.0),
            point(5.0, 7.0),
        ]
    );
}

#[test]
fn start_terminal_without_bends_anchors_from_the_end() {
    let path = EdgePath::new(point(10.0, 0.0), point(0.0, 0.0))
        .with_start_terminal(TerminalType::Square, 2.0);

    // Anchor runs from the end (0,0) toward the start (10,0).
    assert_eq!(
        path.background_points(),
        [point(8.0, 0.0), point(0.0, 0.0)]
    );
}

#[test]
fn path_d_prints_js_style_numbers() {
    let path = EdgePath::new(point(0.5, -0.0), point(10.25, 3.0));
    assert_eq!(path.stroke_path_d(), "M0.5 0 L10.25 3");
}

#[test]
fn degenerate_edge_with_terminal_falls_back_to_the_origin_anchor() {
    let path = EdgePath::new(point(4.0, 4.0), point(4.0, 4.0))
        .with_end_terminal(TerminalType::Directional, 4.0);
    assert_eq!(
        path.background_points(),
        [point(4.0, 4.0), point(0.0, 0.0)]
    );
}
