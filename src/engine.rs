use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::camera::{Camera, Ndc};
use crate::color::normalize_hex_color;
use crate::config::EditorConfig;
use crate::doc::{ObjectId, ObjectKind, Person, Point, Room, Seat, Table, TableShape};
use crate::error::{EditorError, positive};
use crate::hit::{self, Hit};
use crate::input::{InputState, Key, SeatMove, UiState};
use crate::layout::{clamp_to_room, initial_seat_position, relayout_table};
use crate::panel::{self, ObjectListEntry, PropertyEdit, PropertyPanel};
use crate::scene::{self, Highlight, Scene};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from engine operations for the host to process.
///
/// The `*Changed` variants tell the host which view model to pull again.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    ObjectCreated { id: ObjectId, kind: ObjectKind },
    ObjectUpdated { id: ObjectId },
    ObjectDeleted { id: ObjectId },
    SelectionChanged { id: Option<ObjectId> },
    RoomResized { width: f32, length: f32, height: f32 },
    /// Orbit controls must be off while an object is dragged.
    SetOrbitEnabled { enabled: bool },
    SceneChanged,
    ObjectListChanged,
    PanelChanged,
}

type Outcome = Result<Vec<Action>, EditorError>;

/// Core engine state: the dashboard controller.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub config: EditorConfig,
    pub room: Room,
    pub camera: Camera,
    pub ui: UiState,
    pub input: InputState,
    /// Shared counter behind the default names `Table N`, `Round Table N`, `Seat N`.
    next_number: u32,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EditorConfig) -> Self {
        let room = Room::new(config.room.width, config.room.length, config.room.height);
        let camera = Camera::from_config(&config.camera);
        Self { config, room, camera, ui: UiState::default(), input: InputState::default(), next_number: 1 }
    }

    // --- Room ---

    /// Apply the room setup form: resize, rebuild the room box, and pull
    /// everything back inside the new bounds.
    ///
    /// # Errors
    ///
    /// Fails if any dimension is not a positive number.
    pub fn create_room(&mut self, width: f32, length: f32, height: f32) -> Outcome {
        positive("room width", width)?;
        positive("room length", length)?;
        positive("room height", height)?;

        self.room.resize(width, length, height);

        let table_ids: Vec<ObjectId> = self.room.tables().iter().map(|t| t.id).collect();
        for id in &table_ids {
            self.place_table(id, None)?;
        }
        let seat_ids: Vec<ObjectId> = self.room.standalone_seats().map(|s| s.id).collect();
        for id in &seat_ids {
            self.place_seat(id, None)?;
        }

        log::debug!("room resized to {width} x {length} x {height}");
        Ok(vec![Action::RoomResized { width, length, height }, Action::SceneChanged])
    }

    // --- Creation ---

    /// Handle a palette item dropped on the scene at `ndc`.
    ///
    /// # Errors
    ///
    /// Fails for an unknown palette tag or a pointer that does not hit the floor.
    pub fn drop_object(&mut self, tag: &str, ndc: Ndc) -> Outcome {
        let kind = ObjectKind::from_tag(tag)?;
        let at = self.camera.floor_point(ndc).ok_or(EditorError::MissedFloor)?;
        let id = self.create_object(kind, at);
        let mut actions = vec![Action::ObjectCreated { id, kind }];
        actions.extend(self.select(Some(id))?);
        Ok(actions)
    }

    /// Create a table or seat with default dimensions at `at`, clamped into the room.
    pub fn create_object(&mut self, kind: ObjectKind, at: Point) -> ObjectId {
        let id = ObjectId::new_v4();
        let name = self.next_name(kind);
        match kind {
            ObjectKind::RectangularTable | ObjectKind::RoundTable => {
                let (shape, height) = if kind == ObjectKind::RectangularTable {
                    let d = self.config.rectangular_table;
                    (TableShape::Rectangular { width: d.width, length: d.length }, d.height)
                } else {
                    let d = self.config.round_table;
                    (TableShape::Round { radius: d.radius }, d.height)
                };
                let position = clamp_to_room(at, shape.half_extent(), self.room.half_extent());
                self.room.insert_table(Table {
                    id,
                    name,
                    shape,
                    height,
                    color: self.config.table_color.clone(),
                    position,
                    seats: Vec::new(),
                });
            }
            ObjectKind::Seat => {
                let position = clamp_to_room(at, self.seat_extent(), self.room.half_extent());
                self.room.insert_seat(Seat { id, name, position });
            }
        }
        log::debug!("created {} {id}", kind.tag());
        id
    }

    fn next_name(&mut self, kind: ObjectKind) -> String {
        let n = self.next_number;
        self.next_number += 1;
        match kind {
            ObjectKind::RectangularTable => format!("Table {n}"),
            ObjectKind::RoundTable => format!("Round Table {n}"),
            ObjectKind::Seat => format!("Seat {n}"),
        }
    }

    // --- Selection ---

    /// Make `id` the single selected object, or clear the selection.
    ///
    /// # Errors
    ///
    /// Fails if `id` is not a table or seat in the room.
    pub fn select(&mut self, id: Option<ObjectId>) -> Outcome {
        if let Some(id) = id {
            if self.room.kind_of(&id).is_none() {
                return Err(EditorError::UnknownObject(id));
            }
        }
        self.ui.selected_id = id;
        Ok(Self::selection_actions(id))
    }

    fn selection_actions(id: Option<ObjectId>) -> Vec<Action> {
        vec![Action::SelectionChanged { id }, Action::SceneChanged, Action::PanelChanged, Action::ObjectListChanged]
    }

    /// Select whatever is under the pointer, or clear the selection on empty space.
    ///
    /// # Errors
    ///
    /// Never fails in practice; shares the selection error path.
    pub fn click(&mut self, ndc: Ndc) -> Outcome {
        let hit = self.pick(ndc);
        self.select(hit.map(|h| h.object_id))
    }

    /// The nearest table or seat under the pointer.
    #[must_use]
    pub fn pick(&self, ndc: Ndc) -> Option<Hit> {
        let ray = self.camera.ray(ndc)?;
        hit::hit_test(&ray, &self.room, self.config.seat_radius)
    }

    // --- Dragging ---

    /// Start dragging the object under the pointer, if any.
    ///
    /// # Errors
    ///
    /// Never fails in practice; shares the selection error path.
    pub fn pointer_down(&mut self, ndc: Ndc) -> Outcome {
        let Some(hit) = self.pick(ndc) else {
            return Ok(Vec::new());
        };
        let Some(orig) = self.position_of(&hit.object_id) else {
            return Ok(Vec::new());
        };

        let grab_offset = self.camera.floor_point(ndc).map_or(Point::default(), |floor| orig - floor);
        let mut actions = self.select(Some(hit.object_id))?;
        self.input = InputState::DraggingObject { id: hit.object_id, grab_offset, orig };
        actions.push(Action::SetOrbitEnabled { enabled: false });
        Ok(actions)
    }

    /// Follow the pointer with the dragged object, clamped to the room.
    ///
    /// # Errors
    ///
    /// Fails if the dragged object disappeared mid-gesture.
    pub fn pointer_move(&mut self, ndc: Ndc) -> Outcome {
        let InputState::DraggingObject { id, grab_offset, .. } = self.input else {
            return Ok(Vec::new());
        };
        let Some(floor) = self.camera.floor_point(ndc) else {
            return Ok(Vec::new());
        };
        self.move_object(&id, floor + grab_offset)
    }

    /// Finish the current drag.
    pub fn pointer_up(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::DraggingObject { .. } => {
                vec![Action::SetOrbitEnabled { enabled: true }, Action::SceneChanged]
            }
        }
    }

    /// Move a table (with its seats) or a seat to `target`, clamped to the room.
    ///
    /// # Errors
    ///
    /// Fails if `id` is not a table or seat.
    pub fn move_object(&mut self, id: &ObjectId, target: Point) -> Outcome {
        if self.room.kind_of(id).ok_or(EditorError::UnknownObject(*id))?.is_table() {
            self.place_table(id, Some(target))?;
        } else {
            self.place_seat(id, Some(target))?;
        }
        Ok(vec![Action::ObjectUpdated { id: *id }, Action::SceneChanged])
    }

    fn position_of(&self, id: &ObjectId) -> Option<Point> {
        self.room.table(id).map(|t| t.position).or_else(|| self.room.seat(id).map(|s| s.position))
    }

    /// Clamp a table at `target` (or where it is) and lay out its seats.
    fn place_table(&mut self, id: &ObjectId, target: Option<Point>) -> Result<(), EditorError> {
        let room_half = self.room.half_extent();
        let table = self.room.table_mut(id).ok_or(EditorError::UnknownObject(*id))?;
        let wanted = target.unwrap_or(table.position);
        table.position = clamp_to_room(wanted, table.shape.half_extent(), room_half);
        relayout_table(&mut self.room, id)
    }

    fn place_seat(&mut self, id: &ObjectId, target: Option<Point>) -> Result<(), EditorError> {
        let extent = self.seat_extent();
        let room_half = self.room.half_extent();
        let seat = self.room.seat_mut(id).ok_or(EditorError::UnknownObject(*id))?;
        let wanted = target.unwrap_or(seat.position);
        seat.position = clamp_to_room(wanted, extent, room_half);
        Ok(())
    }

    fn seat_extent(&self) -> (f32, f32) {
        (self.config.seat_radius, self.config.seat_radius)
    }

    // --- Keyboard ---

    /// `Delete` removes the selection; `Escape` cancels a drag or clears the selection.
    ///
    /// # Errors
    ///
    /// Propagates failures from the delete or restore it triggers.
    pub fn key_down(&mut self, key: &Key) -> Outcome {
        if key.is_delete() {
            return self.delete_selected();
        }
        if key.is_escape() {
            if let InputState::DraggingObject { id, orig, .. } = std::mem::take(&mut self.input) {
                let mut actions = self.move_object(&id, orig)?;
                actions.push(Action::SetOrbitEnabled { enabled: true });
                return Ok(actions);
            }
            if self.ui.selected_id.is_some() {
                return self.select(None);
            }
        }
        Ok(Vec::new())
    }

    // --- Property panel ---

    /// Apply a property-panel edit to the selected object.
    ///
    /// All fields are validated before anything changes.
    ///
    /// # Errors
    ///
    /// Fails with nothing selected, or for an invalid dimension or color.
    pub fn update_selected(&mut self, edit: &PropertyEdit) -> Outcome {
        let id = self.ui.selected_id.ok_or(EditorError::NothingSelected)?;
        let kind = self.room.kind_of(&id).ok_or(EditorError::UnknownObject(id))?;

        if kind == ObjectKind::Seat {
            if let Some(name) = &edit.name {
                if let Some(seat) = self.room.seat_mut(&id) {
                    seat.name.clone_from(name);
                }
            }
            if let Some(person_name) = &edit.person_name {
                self.assign_person(&id, person_name)?;
            }
        } else {
            self.update_table(&id, edit)?;
        }

        log::debug!("updated {} {id}", kind.tag());
        Ok(vec![Action::ObjectUpdated { id }, Action::SceneChanged, Action::ObjectListChanged, Action::PanelChanged])
    }

    fn update_table(&mut self, id: &ObjectId, edit: &PropertyEdit) -> Result<(), EditorError> {
        let validate = |field, value: Option<f32>| value.map(|v| positive(field, v)).transpose();
        let height = validate("table height", edit.height)?;
        let width = validate("table width", edit.width)?;
        let length = validate("table length", edit.length)?;
        let radius = validate("table radius", edit.radius)?;
        let color = edit
            .color
            .as_deref()
            .map(|raw| normalize_hex_color(raw).ok_or_else(|| EditorError::InvalidColor(raw.to_string())))
            .transpose()?;

        let table = self.room.table_mut(id).ok_or(EditorError::UnknownObject(*id))?;
        if let Some(name) = &edit.name {
            table.name.clone_from(name);
        }
        if let Some(height) = height {
            table.height = height;
        }
        if let Some(color) = color {
            table.color = color;
        }
        match &mut table.shape {
            TableShape::Rectangular { width: w, length: l } => {
                *w = width.unwrap_or(*w);
                *l = length.unwrap_or(*l);
            }
            TableShape::Round { radius: r } => *r = radius.unwrap_or(*r),
        }

        self.place_table(id, None)
    }

    // --- Seats on tables ---

    /// Add a new seat to the selected table, which must be of `kind`.
    ///
    /// # Errors
    ///
    /// Fails with nothing selected or when the selection is not a `kind` table.
    pub fn add_seat_to_table(&mut self, kind: ObjectKind) -> Outcome {
        let table_id = self.ui.selected_id.ok_or(EditorError::NothingSelected)?;
        let table = self.room.table(&table_id).ok_or(EditorError::WrongKind { id: table_id, expected: kind.tag() })?;
        if table.kind() != kind {
            return Err(EditorError::WrongKind { id: table_id, expected: kind.tag() });
        }
        let position = initial_seat_position(table);

        let seat_id = ObjectId::new_v4();
        let name = self.next_name(ObjectKind::Seat);
        self.room.insert_seat(Seat { id: seat_id, name, position });
        self.room.attach_seat(&table_id, &seat_id)?;
        relayout_table(&mut self.room, &table_id)?;

        log::debug!("added seat {seat_id} to table {table_id}");
        Ok(vec![
            Action::ObjectCreated { id: seat_id, kind: ObjectKind::Seat },
            Action::ObjectUpdated { id: table_id },
            Action::SceneChanged,
            Action::ObjectListChanged,
            Action::PanelChanged,
        ])
    }

    /// Swap the seat at `index` with its neighbour in the table's seat list.
    ///
    /// Moving the first seat up or the last seat down changes nothing.
    ///
    /// # Errors
    ///
    /// Fails for an unknown table or an index past the end of its seat list.
    pub fn move_seat(&mut self, table_id: &ObjectId, index: usize, direction: SeatMove) -> Outcome {
        let table = self.room.table_mut(table_id).ok_or(EditorError::UnknownObject(*table_id))?;
        let len = table.seats.len();
        if index >= len {
            return Err(EditorError::SeatIndexOutOfRange { table: *table_id, index });
        }
        if let Some(other) = direction.swap_target(index, len) {
            table.seats.swap(index, other);
        }
        relayout_table(&mut self.room, table_id)?;
        Ok(vec![Action::ObjectUpdated { id: *table_id }, Action::SceneChanged, Action::PanelChanged])
    }

    /// Detach a seat from its table. The seat stays where it is as a free-standing seat.
    ///
    /// # Errors
    ///
    /// Fails if the seat is not attached to that table.
    pub fn remove_seat_from_table(&mut self, table_id: &ObjectId, seat_id: &ObjectId) -> Outcome {
        self.room.detach_seat(table_id, seat_id)?;
        relayout_table(&mut self.room, table_id)?;
        log::debug!("detached seat {seat_id} from table {table_id}");
        Ok(vec![
            Action::ObjectUpdated { id: *table_id },
            Action::ObjectUpdated { id: *seat_id },
            Action::SceneChanged,
            Action::ObjectListChanged,
            Action::PanelChanged,
        ])
    }

    // --- People ---

    /// Put `name` on a seat: rename the occupant, seat a new person, or
    /// (for an empty name) clear the seat.
    ///
    /// # Errors
    ///
    /// Fails if `seat_id` is not a seat.
    pub fn assign_person(&mut self, seat_id: &ObjectId, name: &str) -> Outcome {
        let position = self.room.seat(seat_id).ok_or(EditorError::UnknownObject(*seat_id))?.position;
        let name = name.trim();

        if name.is_empty() {
            if let Some(person_id) = self.room.remove_occupant(seat_id) {
                log::debug!("removed person {person_id} from seat {seat_id}");
            }
        } else if !self.room.rename_occupant(seat_id, name) {
            let person = Person { id: ObjectId::new_v4(), name: name.to_string(), seat_id: *seat_id, position };
            self.room.insert_person(person)?;
        }

        Ok(vec![Action::ObjectUpdated { id: *seat_id }, Action::SceneChanged, Action::PanelChanged])
    }

    /// Move a person to another seat and snap them to its current position.
    ///
    /// # Errors
    ///
    /// Fails for an unknown person or seat, or a seat someone else occupies.
    pub fn move_person(&mut self, person_id: &ObjectId, seat_id: &ObjectId) -> Outcome {
        let from = self.room.person(person_id).ok_or(EditorError::UnknownObject(*person_id))?.seat_id;
        self.room.reseat_person(person_id, seat_id)?;
        Ok(vec![
            Action::ObjectUpdated { id: from },
            Action::ObjectUpdated { id: *seat_id },
            Action::SceneChanged,
            Action::PanelChanged,
        ])
    }

    // --- Deletion ---

    /// Delete the selected object. Does nothing when nothing is selected.
    ///
    /// # Errors
    ///
    /// Propagates [`EngineCore::delete_object`] failures.
    pub fn delete_selected(&mut self) -> Outcome {
        match self.ui.selected_id {
            Some(id) => self.delete_object(&id),
            None => Ok(Vec::new()),
        }
    }

    /// Delete a table (with its seats and their people) or a seat (with its person).
    ///
    /// # Errors
    ///
    /// Fails if `id` is not a table or seat.
    pub fn delete_object(&mut self, id: &ObjectId) -> Outcome {
        let removal = self.room.remove(id).ok_or(EditorError::UnknownObject(*id))?;

        let mut actions: Vec<Action> = removal.objects.iter().map(|(id, _)| Action::ObjectDeleted { id: *id }).collect();

        if self.input.dragging().is_some_and(|d| removal.contains(&d)) {
            self.input = InputState::Idle;
            actions.push(Action::SetOrbitEnabled { enabled: true });
        }
        if self.ui.selected_id.is_some_and(|s| removal.contains(&s)) {
            self.ui.selected_id = None;
            actions.push(Action::SelectionChanged { id: None });
        }

        log::debug!("deleted {id} ({} objects, {} people)", removal.objects.len(), removal.people.len());
        actions.extend([Action::SceneChanged, Action::ObjectListChanged, Action::PanelChanged]);
        Ok(actions)
    }

    // --- Queries ---

    /// The currently selected object, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ObjectId> {
        self.ui.selected_id
    }

    #[must_use]
    pub fn object_list(&self) -> Vec<ObjectListEntry> {
        panel::object_list(&self.room, self.ui.selected_id)
    }

    #[must_use]
    pub fn property_panel(&self) -> PropertyPanel {
        panel::property_panel(&self.room, self.ui.selected_id)
    }

    #[must_use]
    pub fn scene(&self) -> Scene {
        let highlight = Highlight { selected: self.ui.selected_id, moving: self.input.dragging() };
        scene::build(&self.room, highlight, self.config.seat_radius)
    }
}

/// The browser-facing engine. Wraps `EngineCore` and speaks JSON strings.
///
/// Rejected operations are logged and return an empty action list.
#[wasm_bindgen]
pub struct Engine {
    core: EngineCore,
    viewport_width: f32,
    viewport_height: f32,
}

impl Default for Engine {
    fn default() -> Self {
        Self::from_core(EngineCore::new())
    }
}

#[wasm_bindgen]
impl Engine {
    /// Create an engine with the default configuration.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine from a JSON configuration override.
    ///
    /// # Errors
    ///
    /// Returns the parse or validation error to the host.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_json: &str) -> Result<Engine, JsError> {
        let config = EditorConfig::from_json(config_json)?;
        Ok(Self::from_core(EngineCore::with_config(config)))
    }

    // --- Viewport / camera ---

    /// Update viewport dimensions in CSS pixels.
    #[wasm_bindgen(js_name = setViewport)]
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.core.camera.set_viewport(width, height);
    }

    /// Report the orbit-controls pose.
    #[wasm_bindgen(js_name = setCamera)]
    pub fn set_camera(&mut self, eye_x: f32, eye_y: f32, eye_z: f32, target_x: f32, target_y: f32, target_z: f32) {
        self.core
            .camera
            .set_pose(glam::Vec3::new(eye_x, eye_y, eye_z), glam::Vec3::new(target_x, target_y, target_z));
    }

    // --- Operations ---

    #[wasm_bindgen(js_name = createRoom)]
    pub fn create_room(&mut self, width: f32, length: f32, height: f32) -> String {
        finish("create room", self.core.create_room(width, length, height))
    }

    #[wasm_bindgen(js_name = dropObject)]
    pub fn drop_object(&mut self, tag: &str, px: f32, py: f32) -> String {
        let ndc = self.ndc(px, py);
        finish("drop", self.core.drop_object(tag, ndc))
    }

    pub fn click(&mut self, px: f32, py: f32) -> String {
        let ndc = self.ndc(px, py);
        finish("click", self.core.click(ndc))
    }

    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, px: f32, py: f32) -> String {
        let ndc = self.ndc(px, py);
        finish("pointer down", self.core.pointer_down(ndc))
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, px: f32, py: f32) -> String {
        let ndc = self.ndc(px, py);
        finish("pointer move", self.core.pointer_move(ndc))
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) -> String {
        to_json(&self.core.pointer_up())
    }

    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, key: &str) -> String {
        finish("key", self.core.key_down(&Key(key.to_string())))
    }

    /// Select by id; an empty string clears the selection.
    pub fn select(&mut self, id: &str) -> String {
        let result = if id.is_empty() { self.core.select(None) } else { parse_id(id).and_then(|id| self.core.select(Some(id))) };
        finish("select", result)
    }

    #[wasm_bindgen(js_name = updateSelected)]
    pub fn update_selected(&mut self, edit_json: &str) -> String {
        let result = serde_json::from_str::<PropertyEdit>(edit_json)
            .map_err(|e| EditorError::InvalidConfig(e.to_string()))
            .and_then(|edit| self.core.update_selected(&edit));
        finish("update", result)
    }

    #[wasm_bindgen(js_name = addSeatToTable)]
    pub fn add_seat_to_table(&mut self, table_tag: &str) -> String {
        let result = ObjectKind::from_tag(table_tag).and_then(|kind| self.core.add_seat_to_table(kind));
        finish("add seat", result)
    }

    #[wasm_bindgen(js_name = moveSeat)]
    pub fn move_seat(&mut self, table_id: &str, index: usize, direction: &str) -> String {
        let result = parse_id(table_id)
            .and_then(|table| Ok((table, SeatMove::from_name(direction)?)))
            .and_then(|(table, dir)| self.core.move_seat(&table, index, dir));
        finish("move seat", result)
    }

    #[wasm_bindgen(js_name = removeSeatFromTable)]
    pub fn remove_seat_from_table(&mut self, table_id: &str, seat_id: &str) -> String {
        let result = parse_id(table_id)
            .and_then(|table| Ok((table, parse_id(seat_id)?)))
            .and_then(|(table, seat)| self.core.remove_seat_from_table(&table, &seat));
        finish("remove seat", result)
    }

    #[wasm_bindgen(js_name = assignPerson)]
    pub fn assign_person(&mut self, seat_id: &str, name: &str) -> String {
        let result = parse_id(seat_id).and_then(|seat| self.core.assign_person(&seat, name));
        finish("assign person", result)
    }

    #[wasm_bindgen(js_name = movePerson)]
    pub fn move_person(&mut self, person_id: &str, seat_id: &str) -> String {
        let result = parse_id(person_id)
            .and_then(|person| Ok((person, parse_id(seat_id)?)))
            .and_then(|(person, seat)| self.core.move_person(&person, &seat));
        finish("move person", result)
    }

    #[wasm_bindgen(js_name = deleteSelected)]
    pub fn delete_selected(&mut self) -> String {
        finish("delete", self.core.delete_selected())
    }

    #[wasm_bindgen(js_name = deleteObject)]
    pub fn delete_object(&mut self, id: &str) -> String {
        finish("delete", parse_id(id).and_then(|id| self.core.delete_object(&id)))
    }

    // --- Views ---

    #[must_use]
    pub fn scene(&self) -> String {
        to_json(&self.core.scene())
    }

    #[wasm_bindgen(js_name = objectList)]
    #[must_use]
    pub fn object_list(&self) -> String {
        to_json(&self.core.object_list())
    }

    #[wasm_bindgen(js_name = propertyPanel)]
    #[must_use]
    pub fn property_panel(&self) -> String {
        to_json(&self.core.property_panel())
    }

    /// Selected id, or an empty string.
    #[must_use]
    pub fn selection(&self) -> String {
        self.core.selection().map(|id| id.to_string()).unwrap_or_default()
    }
}

impl Engine {
    fn from_core(core: EngineCore) -> Self {
        Self { core, viewport_width: 1.0, viewport_height: 1.0 }
    }

    fn ndc(&self, px: f32, py: f32) -> Ndc {
        Ndc::from_viewport(px, py, self.viewport_width, self.viewport_height)
    }

    /// Access the core for host-side Rust callers and tests.
    #[must_use]
    pub fn core(&self) -> &EngineCore {
        &self.core
    }
}

fn parse_id(raw: &str) -> Result<ObjectId, EditorError> {
    ObjectId::parse_str(raw.trim()).map_err(|_| EditorError::InvalidId(raw.to_string()))
}

/// Serialize the actions, or log and skip a rejected operation.
fn finish(op: &str, result: Outcome) -> String {
    match result {
        Ok(actions) => to_json(&actions),
        Err(err) => {
            log::warn!("{op} skipped: {err}");
            to_json(&Vec::<Action>::new())
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| {
        log::error!("failed to serialize engine output: {err}");
        String::from("null")
    })
}
