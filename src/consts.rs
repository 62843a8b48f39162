//! Shared numeric constants for the layout engine.

// ── Seat placement ──────────────────────────────────────────────

/// Distance from a table edge to the center line of the seats around it.
pub const SEAT_OFFSET: f32 = 0.3;

/// Length trimmed from each rectangular side so seats keep clear of the corners.
pub const CORNER_MARGIN: f32 = 0.6;

// ── Meshes ──────────────────────────────────────────────────────

/// Seat cylinder height; seats stand on the floor.
pub const SEAT_HEIGHT: f32 = 0.5;

/// Radial segments for round tables.
pub const ROUND_TABLE_SEGMENTS: u32 = 32;

/// Radial segments for seats and people.
pub const SMALL_SEGMENTS: u32 = 16;

pub const PERSON_RADIUS: f32 = 0.25;
pub const PERSON_BODY_HEIGHT: f32 = 1.7;

/// Head center above the body center.
pub const PERSON_HEAD_LIFT: f32 = 1.1;

/// Name label above the body center.
pub const PERSON_LABEL_LIFT: f32 = 2.2;

pub const ROOM_COLOR: &str = "#cccccc";
pub const SEAT_COLOR: &str = "#333333";
pub const PERSON_COLOR: &str = "#00a0ff";

// ── Highlight ───────────────────────────────────────────────────

/// Emissive color of an object that is neither selected nor moving.
pub const EMISSIVE_NONE: u32 = 0x00_00_00;

/// Emissive color of the selected object.
pub const EMISSIVE_SELECTED: u32 = 0x33_33_33;

/// Emissive color of the object being dragged.
pub const EMISSIVE_MOVING: u32 = 0x55_55_55;

// ── Geometry ────────────────────────────────────────────────────

/// Tolerance for parallel-ray tests.
pub const EPSILON: f32 = 1e-6;
