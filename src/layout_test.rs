use super::*;

use uuid::Uuid;

use crate::doc::Seat;

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-4 && (a.z - b.z).abs() < 1e-4
}

fn assert_points(actual: &[Point], expected: &[Point]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!(close(*a, *e), "{actual:?} vs {expected:?}");
    }
}

// =============================================================
// Rectangular tables
// =============================================================

#[test]
fn rectangular_no_seats() {
    assert!(rectangular_seat_positions(Point::default(), 1.5, 2.0, 0).is_empty());
}

#[test]
fn rectangular_lone_seat_takes_first_slot() {
    let positions = rectangular_seat_positions(Point::default(), 1.5, 2.0, 1);
    assert_points(&positions, &[Point::new(-0.45, -1.3)]);
}

#[test]
fn rectangular_one_seat_per_side() {
    let positions = rectangular_seat_positions(Point::default(), 1.5, 2.0, 4);
    assert_points(
        &positions,
        &[Point::new(-0.45, -1.3), Point::new(1.05, -0.7), Point::new(-0.45, 1.3), Point::new(-1.05, -0.7)],
    );
}

#[test]
fn rectangular_fills_north_before_east() {
    // ceil(5 / 4) = 2 per side: N, N, E, E, S.
    let positions = rectangular_seat_positions(Point::default(), 1.6, 2.0, 5);
    assert_points(
        &positions,
        &[
            Point::new(-0.5, -1.3),
            Point::new(0.5, -1.3),
            Point::new(1.1, -0.7),
            Point::new(1.1, 0.7),
            Point::new(-0.5, 1.3),
        ],
    );
}

#[test]
fn rectangular_positions_follow_table_center() {
    let at_origin = rectangular_seat_positions(Point::default(), 1.5, 2.0, 3);
    let moved = rectangular_seat_positions(Point::new(2.0, -1.0), 1.5, 2.0, 3);
    let shifted: Vec<Point> = at_origin.iter().map(|p| *p + Point::new(2.0, -1.0)).collect();
    assert_points(&moved, &shifted);
}

#[test]
fn rectangular_narrow_table_mirrors_slots() {
    // Side shorter than the corner margin: span is -0.2.
    let positions = rectangular_seat_positions(Point::default(), 0.4, 0.4, 8);
    assert_points(&positions[0..2], &[Point::new(0.1, -0.5), Point::new(-0.1, -0.5)]);
    assert_points(&positions[2..4], &[Point::new(0.5, 0.1), Point::new(0.5, -0.1)]);
}

// =============================================================
// Round tables
// =============================================================

#[test]
fn round_seats_evenly_spaced() {
    let positions = round_seat_positions(Point::default(), 1.0, 4);
    assert_points(
        &positions,
        &[Point::new(0.0, 1.3), Point::new(1.3, 0.0), Point::new(0.0, -1.3), Point::new(-1.3, 0.0)],
    );
}

#[test]
fn round_single_seat_faces_positive_z() {
    let positions = round_seat_positions(Point::new(1.0, 1.0), 0.5, 1);
    assert_points(&positions, &[Point::new(1.0, 1.8)]);
}

#[test]
fn round_seats_sit_on_ring() {
    let center = Point::new(-2.0, 3.0);
    for p in round_seat_positions(center, 0.9, 7) {
        let d = p - center;
        assert!(((d.x * d.x + d.z * d.z).sqrt() - 1.2).abs() < 1e-4);
    }
}

// =============================================================
// Table helpers
// =============================================================

fn table_with_seats(shape: TableShape, count: usize) -> (Room, ObjectId) {
    let mut room = Room::new(10.0, 10.0, 3.0);
    let id = Uuid::new_v4();
    room.insert_table(Table {
        id,
        name: "T".into(),
        shape,
        height: 0.75,
        color: "#8b4513".into(),
        position: Point::new(1.0, 0.0),
        seats: Vec::new(),
    });
    for _ in 0..count {
        let seat_id = Uuid::new_v4();
        room.insert_seat(Seat { id: seat_id, name: "S".into(), position: Point::default() });
        room.attach_seat(&id, &seat_id).unwrap();
    }
    (room, id)
}

#[test]
fn initial_seat_position_is_east_of_table() {
    let (room, id) = table_with_seats(TableShape::Rectangular { width: 1.5, length: 2.0 }, 0);
    assert!(close(initial_seat_position(room.table(&id).unwrap()), Point::new(2.05, 0.0)));

    let (room, id) = table_with_seats(TableShape::Round { radius: 1.0 }, 0);
    assert!(close(initial_seat_position(room.table(&id).unwrap()), Point::new(2.3, 0.0)));
}

#[test]
fn relayout_moves_attached_seats() {
    let (mut room, id) = table_with_seats(TableShape::Round { radius: 1.0 }, 2);
    relayout_table(&mut room, &id).unwrap();

    let table = room.table(&id).unwrap();
    let expected = seat_positions(table);
    let actual: Vec<Point> = table.seats.iter().map(|s| room.seat(s).unwrap().position).collect();
    assert_points(&actual, &expected);
    assert!(close(actual[0], Point::new(1.0, 1.3)));
}

#[test]
fn relayout_unknown_table_fails() {
    let mut room = Room::new(10.0, 10.0, 3.0);
    let ghost = Uuid::new_v4();
    assert_eq!(relayout_table(&mut room, &ghost), Err(EditorError::UnknownObject(ghost)));
}

// =============================================================
// Clamping
// =============================================================

#[test]
fn clamp_leaves_inside_points_alone() {
    let p = clamp_to_room(Point::new(1.0, -2.0), (0.75, 1.0), (5.0, 5.0));
    assert_eq!(p, Point::new(1.0, -2.0));
}

#[test]
fn clamp_keeps_footprint_inside() {
    let p = clamp_to_room(Point::new(9.0, -9.0), (0.75, 1.0), (5.0, 4.0));
    assert_eq!(p, Point::new(4.25, -3.0));
}

#[test]
fn clamp_centers_oversized_objects() {
    let p = clamp_to_room(Point::new(3.0, 1.0), (6.0, 0.25), (5.0, 5.0));
    assert_eq!(p, Point::new(0.0, 1.0));
}
