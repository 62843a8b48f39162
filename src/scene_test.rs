#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::Point;
use uuid::Uuid;

fn room_with_table_and_seat() -> (Room, ObjectId, ObjectId) {
    let mut room = Room::new(8.0, 6.0, 3.0);
    let table = Uuid::new_v4();
    room.insert_table(Table {
        id: table,
        name: "Table 1".into(),
        shape: TableShape::Rectangular { width: 1.5, length: 2.0 },
        height: 0.75,
        color: "#8b4513".into(),
        position: Point::new(1.0, -1.0),
        seats: Vec::new(),
    });
    let seat = Uuid::new_v4();
    room.insert_seat(Seat { id: seat, name: "Seat 2".into(), position: Point::new(3.0, 2.0) });
    (room, table, seat)
}

fn node_for(scene: &Scene, role: NodeRole) -> &SceneNode {
    scene.nodes.iter().find(|n| n.role == role).unwrap()
}

// =============================================================
// Structure
// =============================================================

#[test]
fn empty_room_has_only_room_box() {
    let room = Room::new(8.0, 6.0, 3.0);
    let scene = build(&room, Highlight::default(), 0.25);

    assert_eq!(scene.nodes.len(), 1);
    let node = &scene.nodes[0];
    assert_eq!(node.role, NodeRole::Room);
    assert_eq!(node.geometry, Geometry::Box { width: 8.0, height: 3.0, length: 6.0 });
    assert_eq!(node.position, [0.0, 1.5, 0.0]);
    assert!(node.wireframe);
    assert_eq!(node.color, ROOM_COLOR);
}

#[test]
fn nodes_follow_creation_order() {
    let (room, table, seat) = room_with_table_and_seat();
    let scene = build(&room, Highlight::default(), 0.25);

    let roles: Vec<NodeRole> = scene.nodes.iter().map(|n| n.role).collect();
    assert_eq!(roles, vec![NodeRole::Room, NodeRole::Table, NodeRole::Seat]);
    assert_eq!(scene.nodes[1].object_id, Some(table));
    assert_eq!(scene.nodes[2].object_id, Some(seat));
}

#[test]
fn room_revision_tracks_resize() {
    let (mut room, _, _) = room_with_table_and_seat();
    let before = build(&room, Highlight::default(), 0.25).room_revision;
    room.resize(12.0, 12.0, 3.0);
    let after = build(&room, Highlight::default(), 0.25).room_revision;
    assert_ne!(before, after);
}

// =============================================================
// Meshes
// =============================================================

#[test]
fn rect_table_is_box_centered_at_half_height() {
    let (room, _, _) = room_with_table_and_seat();
    let scene = build(&room, Highlight::default(), 0.25);
    let node = node_for(&scene, NodeRole::Table);

    assert_eq!(node.geometry, Geometry::Box { width: 1.5, height: 0.75, length: 2.0 });
    assert_eq!(node.position, [1.0, 0.375, -1.0]);
    assert_eq!(node.color, "#8b4513");
    assert!(!node.wireframe);
}

#[test]
fn round_table_is_cylinder() {
    let mut room = Room::new(8.0, 6.0, 3.0);
    room.insert_table(Table {
        id: Uuid::new_v4(),
        name: "Round Table 1".into(),
        shape: TableShape::Round { radius: 1.0 },
        height: 0.75,
        color: "#ffffff".into(),
        position: Point::default(),
        seats: Vec::new(),
    });
    let scene = build(&room, Highlight::default(), 0.25);

    assert_eq!(
        node_for(&scene, NodeRole::Table).geometry,
        Geometry::Cylinder { radius: 1.0, height: 0.75, segments: ROUND_TABLE_SEGMENTS }
    );
}

#[test]
fn seat_uses_configured_radius() {
    let (room, _, _) = room_with_table_and_seat();
    let scene = build(&room, Highlight::default(), 0.4);
    let node = node_for(&scene, NodeRole::Seat);

    assert_eq!(node.geometry, Geometry::Cylinder { radius: 0.4, height: SEAT_HEIGHT, segments: SMALL_SEGMENTS });
    assert_eq!(node.position, [3.0, 0.25, 2.0]);
    assert_eq!(node.color, SEAT_COLOR);
}

#[test]
fn person_has_body_head_and_label() {
    let (mut room, _, seat) = room_with_table_and_seat();
    let person = Uuid::new_v4();
    room.insert_person(Person { id: person, name: "Ada".into(), seat_id: seat, position: Point::new(3.0, 2.0) })
        .unwrap();
    let scene = build(&room, Highlight::default(), 0.25);

    let body = node_for(&scene, NodeRole::PersonBody);
    let head = node_for(&scene, NodeRole::PersonHead);
    let label = node_for(&scene, NodeRole::PersonLabel);

    assert_eq!(body.object_id, Some(person));
    assert_eq!(body.position, [3.0, 0.85, 2.0]);
    assert!((head.position[1] - 1.95).abs() < 1e-5);
    assert!((label.position[1] - 3.05).abs() < 1e-5);
    assert_eq!(label.geometry, Geometry::Label { text: "Ada".into() });
    assert_eq!(body.color, PERSON_COLOR);
}

// =============================================================
// Highlight
// =============================================================

#[test]
fn selected_object_glows() {
    let (room, table, _) = room_with_table_and_seat();
    let scene = build(&room, Highlight { selected: Some(table), moving: None }, 0.25);

    assert_eq!(node_for(&scene, NodeRole::Table).emissive, EMISSIVE_SELECTED);
    assert_eq!(node_for(&scene, NodeRole::Seat).emissive, EMISSIVE_NONE);
}

#[test]
fn moving_wins_over_selected() {
    let id = Uuid::new_v4();
    let highlight = Highlight { selected: Some(id), moving: Some(id) };
    assert_eq!(highlight.emissive(id), EMISSIVE_MOVING);
    assert_eq!(highlight.emissive(Uuid::new_v4()), EMISSIVE_NONE);
}

#[test]
fn scene_serializes_geometry_tags() {
    let (room, _, _) = room_with_table_and_seat();
    let json = serde_json::to_value(build(&room, Highlight::default(), 0.25)).unwrap();

    assert_eq!(json["nodes"][0]["role"], "room");
    assert_eq!(json["nodes"][0]["geometry"]["shape"], "box");
    assert_eq!(json["nodes"][2]["geometry"]["shape"], "cylinder");
    assert!(json["roomRevision"].is_u64());
}
