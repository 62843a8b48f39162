//! Dashboard view models: the object list, the property panel, and property edits.
//!
//! The host renders these as markup; the engine rebuilds them from the room
//! and the current selection whenever it reports `ObjectListChanged` or
//! `PanelChanged`.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use serde::{Deserialize, Serialize};

use crate::doc::{ObjectId, ObjectKind, Room, Table, TableShape};

/// Label shown for a seat row with nobody on it.
pub const EMPTY_SEAT_LABEL: &str = "Empty";

/// One row of the object list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectListEntry {
    pub id: ObjectId,
    pub kind: ObjectKind,
    pub name: String,
    pub selected: bool,
}

/// One row of a table's seat list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeatRow {
    /// 1-based position in the table's seat list.
    pub index: usize,
    pub seat_id: ObjectId,
    /// Occupant name, or [`EMPTY_SEAT_LABEL`].
    pub label: String,
}

/// Contents of the property panel for the current selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PropertyPanel {
    /// Nothing selected: the host shows its "no selection" message.
    None,
    #[serde(rename_all = "camelCase")]
    RectangularTable { id: ObjectId, name: String, width: f32, length: f32, height: f32, color: String, seats: Vec<SeatRow> },
    #[serde(rename_all = "camelCase")]
    RoundTable { id: ObjectId, name: String, radius: f32, height: f32, color: String, seats: Vec<SeatRow> },
    #[serde(rename_all = "camelCase")]
    Seat {
        id: ObjectId,
        name: String,
        /// Occupant name; empty when the seat is free.
        person_name: String,
        /// Table this seat is attached to.
        table: Option<ObjectId>,
    },
}

/// Sparse edit submitted from the property panel. Only present fields are applied.
///
/// Fields that do not apply to the selected kind are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyEdit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_name: Option<String>,
}

/// Tables in creation order, then the seats not attached to any table.
#[must_use]
pub fn object_list(room: &Room, selected: Option<ObjectId>) -> Vec<ObjectListEntry> {
    let tables = room.tables().iter().map(|t| ObjectListEntry {
        id: t.id,
        kind: t.kind(),
        name: t.name.clone(),
        selected: selected == Some(t.id),
    });
    let seats = room.standalone_seats().map(|s| ObjectListEntry {
        id: s.id,
        kind: ObjectKind::Seat,
        name: s.name.clone(),
        selected: selected == Some(s.id),
    });
    tables.chain(seats).collect()
}

/// Build the property panel for `selected`. Unknown ids show the empty panel.
#[must_use]
pub fn property_panel(room: &Room, selected: Option<ObjectId>) -> PropertyPanel {
    let Some(id) = selected else {
        return PropertyPanel::None;
    };

    if let Some(table) = room.table(&id) {
        let seats = seat_rows(room, table);
        return match table.shape {
            TableShape::Rectangular { width, length } => PropertyPanel::RectangularTable {
                id,
                name: table.name.clone(),
                width,
                length,
                height: table.height,
                color: table.color.clone(),
                seats,
            },
            TableShape::Round { radius } => PropertyPanel::RoundTable {
                id,
                name: table.name.clone(),
                radius,
                height: table.height,
                color: table.color.clone(),
                seats,
            },
        };
    }

    match room.seat(&id) {
        Some(seat) => PropertyPanel::Seat {
            id,
            name: seat.name.clone(),
            person_name: room.occupant(&id).map(|p| p.name.clone()).unwrap_or_default(),
            table: room.owner_of(&id).map(|t| t.id),
        },
        None => PropertyPanel::None,
    }
}

fn seat_rows(room: &Room, table: &Table) -> Vec<SeatRow> {
    table
        .seats
        .iter()
        .enumerate()
        .filter(|(_, seat_id)| room.seat(seat_id).is_some())
        .map(|(i, seat_id)| SeatRow {
            index: i + 1,
            seat_id: *seat_id,
            label: room.occupant(seat_id).map_or_else(|| EMPTY_SEAT_LABEL.to_string(), |p| p.name.clone()),
        })
        .collect()
}
