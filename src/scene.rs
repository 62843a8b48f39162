//! Scene description: the meshes the host's 3D engine should show.
//!
//! This module is the only place that knows what each object looks like. It
//! receives read-only views of the room and the highlight state and produces
//! a flat node list; the host diffs or rebuilds its scene graph from it. It
//! does not mutate any application state.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::Serialize;

use crate::consts::{
    EMISSIVE_MOVING, EMISSIVE_NONE, EMISSIVE_SELECTED, PERSON_BODY_HEIGHT, PERSON_COLOR, PERSON_HEAD_LIFT,
    PERSON_LABEL_LIFT, PERSON_RADIUS, ROOM_COLOR, ROUND_TABLE_SEGMENTS, SEAT_COLOR, SEAT_HEIGHT, SMALL_SEGMENTS,
};
use crate::doc::{ObjectId, Person, Room, Seat, Table, TableShape};

/// Mesh geometry for a node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "camelCase")]
pub enum Geometry {
    /// Axis-aligned box; `length` runs along z.
    Box { width: f32, height: f32, length: f32 },
    /// Upright cylinder.
    Cylinder { radius: f32, height: f32, segments: u32 },
    Sphere { radius: f32, segments: u32 },
    /// Camera-facing text sprite.
    Label { text: String },
}

/// What a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeRole {
    Room,
    Table,
    Seat,
    PersonBody,
    PersonHead,
    PersonLabel,
}

/// A single mesh. `position` is the mesh center.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    pub role: NodeRole,
    /// Table, seat, or person this node belongs to.
    pub object_id: Option<ObjectId>,
    pub geometry: Geometry,
    pub position: [f32; 3],
    pub color: String,
    /// `0xRRGGBB` emissive highlight.
    pub emissive: u32,
    pub wireframe: bool,
}

/// The full scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// Changes whenever the room box has to be rebuilt.
    pub room_revision: u64,
    pub nodes: Vec<SceneNode>,
}

/// Which objects are highlighted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Highlight {
    pub selected: Option<ObjectId>,
    /// Being dragged; wins over `selected`.
    pub moving: Option<ObjectId>,
}

impl Highlight {
    #[must_use]
    pub fn emissive(&self, id: ObjectId) -> u32 {
        if self.moving == Some(id) {
            EMISSIVE_MOVING
        } else if self.selected == Some(id) {
            EMISSIVE_SELECTED
        } else {
            EMISSIVE_NONE
        }
    }
}

/// Describe the room box, then tables, seats, and people in creation order.
#[must_use]
pub fn build(room: &Room, highlight: Highlight, seat_radius: f32) -> Scene {
    let mut nodes = vec![room_node(room)];
    nodes.extend(room.tables().iter().map(|t| table_node(t, highlight)));
    nodes.extend(room.seats().iter().map(|s| seat_node(s, highlight, seat_radius)));
    for person in room.people() {
        nodes.extend(person_nodes(person));
    }
    Scene { room_revision: room.mesh_revision, nodes }
}

fn room_node(room: &Room) -> SceneNode {
    SceneNode {
        role: NodeRole::Room,
        object_id: None,
        geometry: Geometry::Box { width: room.width, height: room.height, length: room.length },
        position: [0.0, room.height / 2.0, 0.0],
        color: ROOM_COLOR.to_string(),
        emissive: EMISSIVE_NONE,
        wireframe: true,
    }
}

fn table_node(table: &Table, highlight: Highlight) -> SceneNode {
    let geometry = match table.shape {
        TableShape::Rectangular { width, length } => Geometry::Box { width, height: table.height, length },
        TableShape::Round { radius } => {
            Geometry::Cylinder { radius, height: table.height, segments: ROUND_TABLE_SEGMENTS }
        }
    };
    SceneNode {
        role: NodeRole::Table,
        object_id: Some(table.id),
        geometry,
        position: table.position.at_height(table.height / 2.0).to_array(),
        color: table.color.clone(),
        emissive: highlight.emissive(table.id),
        wireframe: false,
    }
}

fn seat_node(seat: &Seat, highlight: Highlight, radius: f32) -> SceneNode {
    SceneNode {
        role: NodeRole::Seat,
        object_id: Some(seat.id),
        geometry: Geometry::Cylinder { radius, height: SEAT_HEIGHT, segments: SMALL_SEGMENTS },
        position: seat.position.at_height(SEAT_HEIGHT / 2.0).to_array(),
        color: SEAT_COLOR.to_string(),
        emissive: highlight.emissive(seat.id),
        wireframe: false,
    }
}

fn person_nodes(person: &Person) -> [SceneNode; 3] {
    let body = person.position.at_height(PERSON_BODY_HEIGHT / 2.0);
    let node = |role, geometry, lift: f32| SceneNode {
        role,
        object_id: Some(person.id),
        geometry,
        position: [body.x, body.y + lift, body.z],
        color: PERSON_COLOR.to_string(),
        emissive: EMISSIVE_NONE,
        wireframe: false,
    };
    [
        node(
            NodeRole::PersonBody,
            Geometry::Cylinder { radius: PERSON_RADIUS, height: PERSON_BODY_HEIGHT, segments: SMALL_SEGMENTS },
            0.0,
        ),
        node(NodeRole::PersonHead, Geometry::Sphere { radius: PERSON_RADIUS, segments: SMALL_SEGMENTS }, PERSON_HEAD_LIFT),
        node(NodeRole::PersonLabel, Geometry::Label { text: person.name.clone() }, PERSON_LABEL_LIFT),
    ]
}
