//! Seat placement around tables and bounds clamping inside the room.
//!
//! Rectangular tables spread their seats over the four sides in order
//! North, East, South, West, filling each side before moving on. Round
//! tables give each seat an equal angular slot starting at +z. In both
//! cases seats sit [`SEAT_OFFSET`] outside the table edge.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::f32::consts::TAU;

use crate::consts::{CORNER_MARGIN, SEAT_OFFSET};
use crate::doc::{ObjectId, Point, Room, Table, TableShape};
use crate::error::EditorError;

/// Positions for `count` seats around a rectangular table centered at `center`.
#[must_use]
pub fn rectangular_seat_positions(center: Point, width: f32, length: f32, count: usize) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }

    let half_w = width / 2.0 + SEAT_OFFSET;
    let half_l = length / 2.0 + SEAT_OFFSET;
    let sides = [Point::new(0.0, -half_l), Point::new(half_w, 0.0), Point::new(0.0, half_l), Point::new(-half_w, 0.0)];

    let per_side = count.div_ceil(4);
    #[allow(clippy::cast_precision_loss)]
    let gaps = per_side.saturating_sub(1) as f32;
    // A lone seat on a side takes the first slot. A negative span mirrors the slots.
    let offset = |span: f32, slot: f32| -span / 2.0 + slot * (span / gaps.max(1.0));

    (0..count)
        .map(|i| {
            let side_index = (i / per_side) % 4;
            #[allow(clippy::cast_precision_loss)]
            let slot = (i % per_side) as f32;
            let side = sides[side_index];

            let along = if side_index % 2 == 0 {
                Point::new(offset(width - CORNER_MARGIN, slot), 0.0)
            } else {
                Point::new(0.0, offset(length - CORNER_MARGIN, slot))
            };

            center + side + along
        })
        .collect()
}

/// Positions for `count` seats evenly spaced around a round table.
#[must_use]
pub fn round_seat_positions(center: Point, radius: f32, count: usize) -> Vec<Point> {
    let ring = radius + SEAT_OFFSET;
    #[allow(clippy::cast_precision_loss)]
    let n = count as f32;
    (0..count)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let angle = i as f32 / n * TAU;
            Point::new(center.x + angle.sin() * ring, center.z + angle.cos() * ring)
        })
        .collect()
}

/// Layout positions for every seat attached to `table`, in seat-list order.
#[must_use]
pub fn seat_positions(table: &Table) -> Vec<Point> {
    match table.shape {
        TableShape::Rectangular { width, length } => {
            rectangular_seat_positions(table.position, width, length, table.seats.len())
        }
        TableShape::Round { radius } => round_seat_positions(table.position, radius, table.seats.len()),
    }
}

/// Where a freshly added seat goes before the table lays it out: due east of the table.
#[must_use]
pub fn initial_seat_position(table: &Table) -> Point {
    let (half_x, _) = table.shape.half_extent();
    table.position + Point::new(half_x + SEAT_OFFSET, 0.0)
}

/// Move every attached seat of `table_id` to its layout position.
///
/// # Errors
///
/// Returns [`EditorError::UnknownObject`] if the table does not exist.
pub fn relayout_table(room: &mut Room, table_id: &ObjectId) -> Result<(), EditorError> {
    let table = room.table(table_id).ok_or(EditorError::UnknownObject(*table_id))?;
    let placements: Vec<(ObjectId, Point)> = table.seats.iter().copied().zip(seat_positions(table)).collect();
    for (seat_id, position) in placements {
        match room.seat_mut(&seat_id) {
            Some(seat) => seat.position = position,
            None => log::warn!("table {table_id} lists missing seat {seat_id}"),
        }
    }
    Ok(())
}

/// Clamp a planar position so a footprint of `half_extent` stays inside the room.
///
/// Along an axis where the object is wider than the room it is centered instead.
#[must_use]
pub fn clamp_to_room(position: Point, half_extent: (f32, f32), room_half: (f32, f32)) -> Point {
    Point::new(
        clamp_axis(position.x, half_extent.0, room_half.0),
        clamp_axis(position.z, half_extent.1, room_half.1),
    )
}

fn clamp_axis(value: f32, extent: f32, half: f32) -> f32 {
    let lo = -half + extent;
    let hi = half - extent;
    if lo > hi { 0.0 } else { value.clamp(lo, hi) }
}
