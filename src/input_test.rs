use super::*;
use uuid::Uuid;

// =============================================================
// Key
// =============================================================

#[test]
fn key_recognizes_delete_and_escape() {
    assert!(Key("Delete".into()).is_delete());
    assert!(!Key("Delete".into()).is_escape());
    assert!(Key("Escape".into()).is_escape());
    assert!(!Key("Backspace".into()).is_delete());
    assert!(!Key("delete".into()).is_delete());
}

// =============================================================
// SeatMove
// =============================================================

#[test]
fn seat_move_from_name() {
    assert_eq!(SeatMove::from_name("up").unwrap(), SeatMove::Up);
    assert_eq!(SeatMove::from_name(" down ").unwrap(), SeatMove::Down);
    assert_eq!(SeatMove::from_name("left"), Err(EditorError::UnknownDirection("left".into())));
}

#[test]
fn swap_target_up_stops_at_first() {
    assert_eq!(SeatMove::Up.swap_target(0, 3), None);
    assert_eq!(SeatMove::Up.swap_target(2, 3), Some(1));
}

#[test]
fn swap_target_down_stops_at_last() {
    assert_eq!(SeatMove::Down.swap_target(2, 3), None);
    assert_eq!(SeatMove::Down.swap_target(0, 3), Some(1));
    assert_eq!(SeatMove::Down.swap_target(0, 1), None);
}

// =============================================================
// InputState
// =============================================================

#[test]
fn idle_is_default_and_not_dragging() {
    let state = InputState::default();
    assert_eq!(state, InputState::Idle);
    assert_eq!(state.dragging(), None);
}

#[test]
fn dragging_reports_object() {
    let id = Uuid::new_v4();
    let state = InputState::DraggingObject { id, grab_offset: Point::new(0.1, -0.2), orig: Point::new(1.0, 1.0) };
    assert_eq!(state.dragging(), Some(id));
}

#[test]
fn ui_state_starts_without_selection() {
    assert_eq!(UiState::default().selected_id, None);
}
