#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::{Person, Point, Seat};
use uuid::Uuid;

fn add_table(room: &mut Room, name: &str, shape: TableShape) -> ObjectId {
    let id = Uuid::new_v4();
    room.insert_table(Table {
        id,
        name: name.into(),
        shape,
        height: 0.75,
        color: "#8b4513".into(),
        position: Point::default(),
        seats: Vec::new(),
    });
    id
}

fn add_seat(room: &mut Room, name: &str) -> ObjectId {
    let id = Uuid::new_v4();
    room.insert_seat(Seat { id, name: name.into(), position: Point::new(2.0, 0.0) });
    id
}

fn seat_person(room: &mut Room, seat_id: ObjectId, name: &str) {
    let position = room.seat(&seat_id).unwrap().position;
    room.insert_person(Person { id: Uuid::new_v4(), name: name.into(), seat_id, position }).unwrap();
}

// =============================================================
// object_list
// =============================================================

#[test]
fn object_list_lists_tables_then_free_seats() {
    let mut room = Room::new(10.0, 10.0, 3.0);
    let loose = add_seat(&mut room, "Seat 1");
    let table = add_table(&mut room, "Table 2", TableShape::Rectangular { width: 1.5, length: 2.0 });
    let attached = add_seat(&mut room, "Seat 3");
    room.attach_seat(&table, &attached).unwrap();
    let round = add_table(&mut room, "Round Table 4", TableShape::Round { radius: 1.0 });

    let list = object_list(&room, Some(loose));

    let ids: Vec<ObjectId> = list.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![table, round, loose]);
    assert_eq!(list[0].kind, ObjectKind::RectangularTable);
    assert_eq!(list[1].kind, ObjectKind::RoundTable);
    assert_eq!(list[2].kind, ObjectKind::Seat);
    assert_eq!(list[1].name, "Round Table 4");
    assert!(list[2].selected);
    assert!(!list[0].selected && !list[1].selected);
}

#[test]
fn object_list_empty_room() {
    let room = Room::new(10.0, 10.0, 3.0);
    assert!(object_list(&room, None).is_empty());
}

// =============================================================
// property_panel
// =============================================================

#[test]
fn panel_none_without_selection() {
    let room = Room::new(10.0, 10.0, 3.0);
    assert_eq!(property_panel(&room, None), PropertyPanel::None);
    assert_eq!(property_panel(&room, Some(Uuid::new_v4())), PropertyPanel::None);
}

#[test]
fn panel_for_rect_table_lists_seats_in_order() {
    let mut room = Room::new(10.0, 10.0, 3.0);
    let table = add_table(&mut room, "Table 1", TableShape::Rectangular { width: 1.5, length: 2.0 });
    let first = add_seat(&mut room, "Seat 2");
    let second = add_seat(&mut room, "Seat 3");
    room.attach_seat(&table, &first).unwrap();
    room.attach_seat(&table, &second).unwrap();
    seat_person(&mut room, second, "Ada");

    let PropertyPanel::RectangularTable { id, name, width, length, height, color, seats } =
        property_panel(&room, Some(table))
    else {
        panic!("expected rectangular table panel");
    };
    assert_eq!(id, table);
    assert_eq!(name, "Table 1");
    assert_eq!((width, length, height), (1.5, 2.0, 0.75));
    assert_eq!(color, "#8b4513");
    assert_eq!(
        seats,
        vec![
            SeatRow { index: 1, seat_id: first, label: EMPTY_SEAT_LABEL.into() },
            SeatRow { index: 2, seat_id: second, label: "Ada".into() },
        ]
    );
}

#[test]
fn panel_for_round_table() {
    let mut room = Room::new(10.0, 10.0, 3.0);
    let table = add_table(&mut room, "Round Table 1", TableShape::Round { radius: 1.2 });

    let PropertyPanel::RoundTable { radius, seats, .. } = property_panel(&room, Some(table)) else {
        panic!("expected round table panel");
    };
    assert_eq!(radius, 1.2);
    assert!(seats.is_empty());
}

#[test]
fn panel_for_free_seat() {
    let mut room = Room::new(10.0, 10.0, 3.0);
    let seat = add_seat(&mut room, "Seat 1");

    assert_eq!(
        property_panel(&room, Some(seat)),
        PropertyPanel::Seat { id: seat, name: "Seat 1".into(), person_name: String::new(), table: None }
    );
}

#[test]
fn panel_for_occupied_attached_seat() {
    let mut room = Room::new(10.0, 10.0, 3.0);
    let table = add_table(&mut room, "Table 1", TableShape::Round { radius: 1.0 });
    let seat = add_seat(&mut room, "Seat 2");
    room.attach_seat(&table, &seat).unwrap();
    seat_person(&mut room, seat, "Grace");

    let PropertyPanel::Seat { person_name, table: owner, .. } = property_panel(&room, Some(seat)) else {
        panic!("expected seat panel");
    };
    assert_eq!(person_name, "Grace");
    assert_eq!(owner, Some(table));
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn panel_serializes_with_type_tag() {
    let mut room = Room::new(10.0, 10.0, 3.0);
    let seat = add_seat(&mut room, "Seat 1");

    let json = serde_json::to_value(property_panel(&room, Some(seat))).unwrap();
    assert_eq!(json["type"], "seat");
    assert_eq!(json["personName"], "");
    assert!(json["table"].is_null());

    let none = serde_json::to_value(PropertyPanel::None).unwrap();
    assert_eq!(none["type"], "none");
}

#[test]
fn property_edit_parses_sparse_json() {
    let edit: PropertyEdit = serde_json::from_str(r#"{"name":"Head table","personName":"Ada"}"#).unwrap();
    assert_eq!(edit.name.as_deref(), Some("Head table"));
    assert_eq!(edit.person_name.as_deref(), Some("Ada"));
    assert_eq!(edit.width, None);
    assert_eq!(edit.color, None);
}
