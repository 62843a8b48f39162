//! Document model: the room, the objects placed in it, and cascading removal.
//!
//! `Room` is the single owner of every placed object. Tables refer to their
//! seats by id (never by reference), and people refer to the seat they were
//! created for. All structural edits go through `Room` so the ownership
//! invariants hold after every call:
//!
//! - a seat id appears in at most one table's seat list;
//! - removing a table removes its attached seats;
//! - removing a seat detaches it from its table and removes its occupant;
//! - a seat has at most one occupant.
//!
//! Positions are planar (`x`, `z`) in meters with the room centered on the
//! origin; heights are implied by the object kind.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EditorError;

/// Unique identifier for a table, seat, or person.
pub type ObjectId = Uuid;

/// A point on the floor plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub z: f32,
}

impl Point {
    #[must_use]
    pub fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    /// Lift onto the 3D scene at height `y`.
    #[must_use]
    pub fn at_height(self, y: f32) -> glam::Vec3 {
        glam::Vec3::new(self.x, y, self.z)
    }
}

impl std::ops::Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.z + rhs.z)
    }
}

impl std::ops::Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.z - rhs.z)
    }
}

/// The kind of a selectable object. Serializes to the palette tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ObjectKind {
    RectangularTable,
    RoundTable,
    Seat,
}

impl ObjectKind {
    /// Parse a palette drag payload tag (`"rectangularTable"`, `"roundTable"`, `"seat"`).
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::UnknownObjectType`] for any other tag.
    pub fn from_tag(tag: &str) -> Result<Self, EditorError> {
        match tag.trim() {
            "rectangularTable" => Ok(Self::RectangularTable),
            "roundTable" => Ok(Self::RoundTable),
            "seat" => Ok(Self::Seat),
            other => Err(EditorError::UnknownObjectType(other.to_string())),
        }
    }

    /// The palette tag for this kind.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::RectangularTable => "rectangularTable",
            Self::RoundTable => "roundTable",
            Self::Seat => "seat",
        }
    }

    #[must_use]
    pub fn is_table(self) -> bool {
        matches!(self, Self::RectangularTable | Self::RoundTable)
    }
}

/// Footprint of a table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TableShape {
    /// `width` runs along x, `length` along z.
    Rectangular { width: f32, length: f32 },
    Round { radius: f32 },
}

impl TableShape {
    #[must_use]
    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::Rectangular { .. } => ObjectKind::RectangularTable,
            Self::Round { .. } => ObjectKind::RoundTable,
        }
    }

    /// Half of the footprint along x and z.
    #[must_use]
    pub fn half_extent(&self) -> (f32, f32) {
        match *self {
            Self::Rectangular { width, length } => (width / 2.0, length / 2.0),
            Self::Round { radius } => (radius, radius),
        }
    }
}

/// A rectangular or round table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: ObjectId,
    pub name: String,
    pub shape: TableShape,
    /// Top surface height; the table stands on the floor.
    pub height: f32,
    /// Canonical `#rrggbb`.
    pub color: String,
    pub position: Point,
    /// Attached seats in layout order.
    pub seats: Vec<ObjectId>,
}

impl Table {
    #[must_use]
    pub fn kind(&self) -> ObjectKind {
        self.shape.kind()
    }
}

/// A single seat, free-standing or attached to a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub id: ObjectId,
    pub name: String,
    pub position: Point,
}

/// A person occupying a seat.
///
/// `position` is copied from the seat when the person is placed and is not
/// kept in sync when the seat later moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: ObjectId,
    pub name: String,
    pub seat_id: ObjectId,
    pub position: Point,
}

/// Everything removed by a single cascading delete.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Removal {
    /// Tables and seats, the requested object first.
    pub objects: Vec<(ObjectId, ObjectKind)>,
    pub people: Vec<ObjectId>,
}

impl Removal {
    #[must_use]
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.objects.iter().any(|(removed, _)| removed == id)
    }
}

/// The room and everything placed in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub width: f32,
    pub length: f32,
    pub height: f32,
    /// Bumped every time the background mesh has to be rebuilt.
    pub mesh_revision: u64,
    tables: Vec<Table>,
    seats: Vec<Seat>,
    people: Vec<Person>,
}

impl Room {
    #[must_use]
    pub fn new(width: f32, length: f32, height: f32) -> Self {
        Self { width, length, height, mesh_revision: 0, tables: Vec::new(), seats: Vec::new(), people: Vec::new() }
    }

    /// Change the room dimensions and invalidate the background mesh.
    pub fn resize(&mut self, width: f32, length: f32, height: f32) {
        self.width = width;
        self.length = length;
        self.height = height;
        self.mesh_revision += 1;
    }

    /// Half of the floor along x and z.
    #[must_use]
    pub fn half_extent(&self) -> (f32, f32) {
        (self.width / 2.0, self.length / 2.0)
    }

    // --- Lookup ---

    #[must_use]
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    #[must_use]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    #[must_use]
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    #[must_use]
    pub fn table(&self, id: &ObjectId) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == *id)
    }

    pub fn table_mut(&mut self, id: &ObjectId) -> Option<&mut Table> {
        self.tables.iter_mut().find(|t| t.id == *id)
    }

    #[must_use]
    pub fn seat(&self, id: &ObjectId) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == *id)
    }

    pub fn seat_mut(&mut self, id: &ObjectId) -> Option<&mut Seat> {
        self.seats.iter_mut().find(|s| s.id == *id)
    }

    #[must_use]
    pub fn person(&self, id: &ObjectId) -> Option<&Person> {
        self.people.iter().find(|p| p.id == *id)
    }

    /// Kind of a table or seat. People are not selectable and return `None`.
    #[must_use]
    pub fn kind_of(&self, id: &ObjectId) -> Option<ObjectKind> {
        if let Some(table) = self.table(id) {
            return Some(table.kind());
        }
        self.seat(id).map(|_| ObjectKind::Seat)
    }

    /// The table whose seat list contains `seat_id`.
    #[must_use]
    pub fn owner_of(&self, seat_id: &ObjectId) -> Option<&Table> {
        self.tables.iter().find(|t| t.seats.contains(seat_id))
    }

    /// The person sitting on `seat_id`.
    #[must_use]
    pub fn occupant(&self, seat_id: &ObjectId) -> Option<&Person> {
        self.people.iter().find(|p| p.seat_id == *seat_id)
    }

    /// Seats not attached to any table, in creation order.
    pub fn standalone_seats(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter().filter(|s| self.owner_of(&s.id).is_none())
    }

    // --- Insertion ---

    pub fn insert_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    pub fn insert_seat(&mut self, seat: Seat) {
        self.seats.push(seat);
    }

    /// Seat a new person.
    ///
    /// # Errors
    ///
    /// Fails if the seat does not exist or already has an occupant.
    pub fn insert_person(&mut self, person: Person) -> Result<(), EditorError> {
        if self.seat(&person.seat_id).is_none() {
            return Err(EditorError::UnknownObject(person.seat_id));
        }
        if self.occupant(&person.seat_id).is_some() {
            return Err(EditorError::SeatOccupied(person.seat_id));
        }
        self.people.push(person);
        Ok(())
    }

    // --- Seat ownership ---

    /// Append `seat_id` to the table's seat list.
    ///
    /// # Errors
    ///
    /// Fails if either object is missing or the seat already belongs to a table.
    pub fn attach_seat(&mut self, table_id: &ObjectId, seat_id: &ObjectId) -> Result<(), EditorError> {
        if self.seat(seat_id).is_none() {
            return Err(EditorError::UnknownObject(*seat_id));
        }
        if let Some(owner) = self.owner_of(seat_id) {
            return Err(EditorError::SeatAlreadyAttached { seat: *seat_id, table: owner.id });
        }
        let table = self.table_mut(table_id).ok_or(EditorError::UnknownObject(*table_id))?;
        table.seats.push(*seat_id);
        Ok(())
    }

    /// Remove `seat_id` from the table's seat list. The seat itself stays in the room.
    ///
    /// # Errors
    ///
    /// Fails if the table is missing or the seat is not attached to it.
    pub fn detach_seat(&mut self, table_id: &ObjectId, seat_id: &ObjectId) -> Result<(), EditorError> {
        let table = self.table_mut(table_id).ok_or(EditorError::UnknownObject(*table_id))?;
        let before = table.seats.len();
        table.seats.retain(|id| id != seat_id);
        if table.seats.len() == before {
            return Err(EditorError::SeatNotAttached { seat: *seat_id, table: *table_id });
        }
        Ok(())
    }

    // --- People ---

    /// Move a person onto another seat, copying that seat's position.
    ///
    /// # Errors
    ///
    /// Fails if the person or seat is missing, or the seat has a different occupant.
    pub fn reseat_person(&mut self, person_id: &ObjectId, seat_id: &ObjectId) -> Result<(), EditorError> {
        let position = self.seat(seat_id).ok_or(EditorError::UnknownObject(*seat_id))?.position;
        if let Some(occupant) = self.occupant(seat_id) {
            if occupant.id != *person_id {
                return Err(EditorError::SeatOccupied(*seat_id));
            }
        }
        let person = self
            .people
            .iter_mut()
            .find(|p| p.id == *person_id)
            .ok_or(EditorError::UnknownObject(*person_id))?;
        person.seat_id = *seat_id;
        person.position = position;
        Ok(())
    }

    pub fn rename_occupant(&mut self, seat_id: &ObjectId, name: &str) -> bool {
        match self.people.iter_mut().find(|p| p.seat_id == *seat_id) {
            Some(person) => {
                person.name = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Remove whoever sits on `seat_id`, returning their id.
    pub fn remove_occupant(&mut self, seat_id: &ObjectId) -> Option<ObjectId> {
        let index = self.people.iter().position(|p| p.seat_id == *seat_id)?;
        Some(self.people.remove(index).id)
    }

    // --- Removal ---

    /// Remove a table and, with it, every attached seat and their occupants.
    pub fn remove_table(&mut self, id: &ObjectId) -> Option<Removal> {
        let index = self.tables.iter().position(|t| t.id == *id)?;
        let table = self.tables.remove(index);
        let mut removal = Removal { objects: vec![(table.id, table.kind())], people: Vec::new() };
        for seat_id in &table.seats {
            if let Some(nested) = self.remove_seat(seat_id) {
                removal.objects.extend(nested.objects);
                removal.people.extend(nested.people);
            }
        }
        Some(removal)
    }

    /// Remove a seat, detach it from its table, and unseat its occupant.
    pub fn remove_seat(&mut self, id: &ObjectId) -> Option<Removal> {
        let index = self.seats.iter().position(|s| s.id == *id)?;
        self.seats.remove(index);
        for table in &mut self.tables {
            table.seats.retain(|seat_id| seat_id != id);
        }
        let people = self.remove_occupant(id).into_iter().collect();
        Some(Removal { objects: vec![(*id, ObjectKind::Seat)], people })
    }

    /// Remove a table or seat by id.
    pub fn remove(&mut self, id: &ObjectId) -> Option<Removal> {
        if self.kind_of(id)?.is_table() { self.remove_table(id) } else { self.remove_seat(id) }
    }
}
