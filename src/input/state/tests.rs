use super::*;
use crate::config::Config;
use crate::draw::{BLUE, Shape, YELLOW, shape::Point};
use crate::input::{Mode, PointerEvent, SurfaceBounds};

fn create_test_board() -> BoardState {
    let mut state = BoardState::new(&Config::default());
    state.set_surface_bounds(SurfaceBounds {
        left: 0.0,
        top: 0.0,
    });
    state
}

#[test]
fn pointer_down_starts_drag_at_local_point() {
    let mut state = create_test_board();
    state.needs_redraw = false;

    state.on_pointer_down(PointerEvent::new(40.0, 25.0));

    let drag = state.drag().expect("drag should be active");
    assert_eq!(drag.start, Point::new(40.0, 25.0));
    assert_eq!(drag.current, Point::new(40.0, 25.0));
    assert!(state.needs_redraw);
}

#[test]
fn pointer_down_converts_client_to_surface_coordinates() {
    let mut state = create_test_board();
    state.set_surface_bounds(SurfaceBounds {
        left: 10.0,
        top: 20.0,
    });

    state.on_pointer_down(PointerEvent::new(110.0, 120.0));

    let drag = state.drag().unwrap();
    assert_eq!(drag.start, Point::new(100.0, 100.0));
}

#[test]
fn handlers_are_noops_without_surface_bounds() {
    let mut state = BoardState::new(&Config::default());
    state.needs_redraw = false;

    state.on_pointer_down(PointerEvent::new(5.0, 5.0));
    assert!(state.drag().is_none());
    assert!(!state.needs_redraw);

    state.on_pointer_move(PointerEvent::new(6.0, 6.0));
    assert!(state.drag().is_none());

    state.on_pointer_up();
    assert!(state.frame.shapes.is_empty());
}

#[test]
fn pointer_move_without_drag_changes_nothing() {
    let mut state = create_test_board();
    state.needs_redraw = false;

    state.on_pointer_move(PointerEvent::new(50.0, 50.0));
    state.on_pointer_move(PointerEvent::new(80.0, 10.0));

    assert!(state.drag().is_none());
    assert!(!state.needs_redraw);
}

#[test]
fn pointer_up_without_drag_leaves_frame_unchanged() {
    let mut state = create_test_board();

    state.on_pointer_up();

    assert!(state.frame.shapes.is_empty());
    assert!(state.drag().is_none());
}

#[test]
fn rectangle_keeps_signed_dimensions() {
    let mut state = create_test_board();
    state.set_mode(Mode::Rectangle);

    state.on_pointer_down(PointerEvent::new(50.0, 50.0));
    state.on_pointer_move(PointerEvent::new(10.0, 10.0));
    state.on_pointer_up();

    assert_eq!(
        state.frame.shapes,
        vec![Shape::Rect {
            x: 50.0,
            y: 50.0,
            width: -40.0,
            height: -40.0,
            color: Some(YELLOW),
        }]
    );
}

#[test]
fn circle_radius_is_euclidean_distance() {
    let mut state = create_test_board();
    state.set_mode(Mode::Circle);

    state.on_pointer_down(PointerEvent::new(0.0, 0.0));
    state.on_pointer_move(PointerEvent::new(3.0, 4.0));
    state.on_pointer_up();

    match &state.frame.shapes[..] {
        [Shape::Circle {
            cx,
            cy,
            radius,
            color,
        }] => {
            assert_eq!((*cx, *cy), (0.0, 0.0));
            assert_eq!(*radius, 5.0);
            assert!(color.is_none());
        }
        other => panic!("expected one circle, got {other:?}"),
    }
}

#[test]
fn line_keeps_endpoint_order() {
    let mut state = create_test_board();
    state.set_mode(Mode::Line);

    state.on_pointer_down(PointerEvent::new(1.0, 1.0));
    state.on_pointer_move(PointerEvent::new(2.0, 2.0));
    state.on_pointer_up();

    assert_eq!(
        state.frame.shapes,
        vec![Shape::Line {
            x1: 1.0,
            y1: 1.0,
            x2: 2.0,
            y2: 2.0,
            color: Some(BLUE),
        }]
    );
}

#[test]
fn full_drag_commits_rectangle_and_resets_drag() {
    let mut state = create_test_board();
    assert_eq!(state.mode, Mode::Rectangle);
    assert!(state.frame.shapes.is_empty());

    state.on_pointer_down(PointerEvent::new(100.0, 100.0));
    state.on_pointer_move(PointerEvent::new(200.0, 150.0));
    state.on_pointer_up();

    assert_eq!(
        state.frame.shapes,
        vec![Shape::Rect {
            x: 100.0,
            y: 100.0,
            width: 100.0,
            height: 50.0,
            color: Some(YELLOW),
        }]
    );
    assert!(state.drag().is_none());
    assert!(!state.is_drawing());
    assert!(state.needs_redraw);
}

#[test]
fn commit_uses_tracked_current_point_not_release_event() {
    let mut state = create_test_board();
    state.set_mode(Mode::Line);

    state.on_pointer_down(PointerEvent::new(0.0, 0.0));
    state.on_pointer_move(PointerEvent::new(30.0, 40.0));
    // Release carries no coordinates; the last tracked point wins.
    state.on_pointer_up();

    match &state.frame.shapes[..] {
        [Shape::Line { x2, y2, .. }] => assert_eq!((*x2, *y2), (30.0, 40.0)),
        other => panic!("expected one line, got {other:?}"),
    }
}

#[test]
fn mode_switch_mid_drag_changes_committed_type() {
    let mut state = create_test_board();
    state.set_mode(Mode::Rectangle);

    state.on_pointer_down(PointerEvent::new(10.0, 10.0));
    state.on_pointer_move(PointerEvent::new(13.0, 14.0));
    state.set_mode(Mode::Circle);
    state.on_pointer_up();

    match &state.frame.shapes[..] {
        [Shape::Circle { cx, cy, radius, .. }] => {
            // Start point captured before the switch is kept as the center.
            assert_eq!((*cx, *cy), (10.0, 10.0));
            assert_eq!(*radius, 5.0);
        }
        other => panic!("expected one circle, got {other:?}"),
    }
}

#[test]
fn drag_without_motion_commits_degenerate_shape() {
    let mut state = create_test_board();

    state.on_pointer_down(PointerEvent::new(7.0, 7.0));
    state.on_pointer_up();

    assert_eq!(
        state.frame.shapes,
        vec![Shape::Rect {
            x: 7.0,
            y: 7.0,
            width: 0.0,
            height: 0.0,
            color: Some(YELLOW),
        }]
    );
}

#[test]
fn shapes_accumulate_in_insertion_order() {
    let mut state = create_test_board();

    state.on_pointer_down(PointerEvent::new(0.0, 0.0));
    state.on_pointer_up();

    state.set_mode(Mode::Line);
    state.on_pointer_down(PointerEvent::new(1.0, 1.0));
    state.on_pointer_up();

    state.set_mode(Mode::Circle);
    state.on_pointer_down(PointerEvent::new(2.0, 2.0));
    state.on_pointer_up();

    assert_eq!(state.frame.shapes.len(), 3);
    assert!(matches!(state.frame.shapes[0], Shape::Rect { .. }));
    assert!(matches!(state.frame.shapes[1], Shape::Line { .. }));
    assert!(matches!(state.frame.shapes[2], Shape::Circle { .. }));
}

#[test]
fn shape_limit_discards_but_still_clears_drag() {
    let mut config = Config::default();
    config.drawing.max_shapes = 1;
    let mut state = BoardState::new(&config);
    state.set_surface_bounds(SurfaceBounds {
        left: 0.0,
        top: 0.0,
    });

    state.on_pointer_down(PointerEvent::new(0.0, 0.0));
    state.on_pointer_up();
    assert_eq!(state.frame.shapes.len(), 1);

    state.on_pointer_down(PointerEvent::new(5.0, 5.0));
    state.on_pointer_up();

    assert_eq!(state.frame.shapes.len(), 1);
    assert!(state.drag().is_none());
}

#[test]
fn preview_shape_tracks_active_drag() {
    let mut state = create_test_board();
    assert!(state.preview_shape().is_none());

    state.on_pointer_down(PointerEvent::new(10.0, 10.0));
    state.on_pointer_move(PointerEvent::new(60.0, 40.0));

    assert_eq!(
        state.preview_shape(),
        Some(Shape::Rect {
            x: 10.0,
            y: 10.0,
            width: 50.0,
            height: 30.0,
            color: Some(YELLOW),
        })
    );

    state.on_pointer_up();
    assert!(state.preview_shape().is_none());
}

#[test]
fn take_needs_redraw_clears_flag() {
    let mut state = create_test_board();
    state.needs_redraw = true;

    assert!(state.take_needs_redraw());
    assert!(!state.take_needs_redraw());
}
