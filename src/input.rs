//! Input model: keys, seat-list directions, and the drag gesture state machine.
//!
//! `InputState` is the gesture tracked between pointer-down and pointer-up.
//! `UiState` is the selection that outlives gestures and drives highlights,
//! the property panel, and the object list.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::{ObjectId, Point};
use crate::error::EditorError;

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"Delete"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn is_delete(&self) -> bool {
        self.0 == "Delete"
    }

    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape"
    }
}

/// Direction for reordering a seat inside a table's seat list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatMove {
    /// Swap with the previous entry.
    Up,
    /// Swap with the next entry.
    Down,
}

impl SeatMove {
    /// Parse `"up"` or `"down"`.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::UnknownDirection`] for anything else.
    pub fn from_name(name: &str) -> Result<Self, EditorError> {
        match name.trim() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            other => Err(EditorError::UnknownDirection(other.to_string())),
        }
    }

    /// Index of the entry to swap with, or `None` at the end of the list.
    #[must_use]
    pub fn swap_target(self, index: usize, len: usize) -> Option<usize> {
        match self {
            Self::Up => index.checked_sub(1),
            Self::Down => (index + 1 < len).then_some(index + 1),
        }
    }
}

/// Selection state visible to the scene and panels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    /// The single selected table or seat, if any.
    pub selected_id: Option<ObjectId>,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is moving a table or seat across the floor.
    DraggingObject {
        /// Id of the object being dragged.
        id: ObjectId,
        /// Object position minus the floor point under the pointer at grab time.
        grab_offset: Point,
        /// Position at the start of the drag, restored on cancel.
        orig: Point,
    },
}

impl InputState {
    /// Id of the object being dragged, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<ObjectId> {
        match self {
            Self::Idle => None,
            Self::DraggingObject { id, .. } => Some(*id),
        }
    }
}
