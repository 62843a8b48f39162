//! Errors returned by editor operations.

use crate::doc::ObjectId;

/// Why an editor operation was rejected.
///
/// The browser wrapper logs these and skips the operation; nothing here is
/// surfaced to the user.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditorError {
    /// No table, seat, or person with this id exists.
    #[error("unknown object: {0}")]
    UnknownObject(ObjectId),
    /// The string is not a valid object id.
    #[error("invalid object id: {0:?}")]
    InvalidId(String),
    /// The object exists but is the wrong kind for the operation.
    #[error("object {id} is not a {expected}")]
    WrongKind { id: ObjectId, expected: &'static str },
    /// The operation acts on the selection and nothing is selected.
    #[error("no object selected")]
    NothingSelected,
    /// A dimension was zero, negative, or not finite.
    #[error("invalid {field}: {value}")]
    InvalidDimension { field: &'static str, value: f32 },
    /// A color string is not `#RGB` or `#RRGGBB`.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),
    /// A palette payload named an object type the editor does not know.
    #[error("unknown object type: {0:?}")]
    UnknownObjectType(String),
    /// A seat-list direction other than `up` or `down`.
    #[error("unknown seat direction: {0:?}")]
    UnknownDirection(String),
    /// The pointer ray points away from the floor.
    #[error("pointer ray does not reach the floor")]
    MissedFloor,
    #[error("seat {seat} is already attached to table {table}")]
    SeatAlreadyAttached { seat: ObjectId, table: ObjectId },
    #[error("seat {seat} is not attached to table {table}")]
    SeatNotAttached { seat: ObjectId, table: ObjectId },
    #[error("seat index {index} out of range for table {table}")]
    SeatIndexOutOfRange { table: ObjectId, index: usize },
    #[error("seat {0} is already occupied")]
    SeatOccupied(ObjectId),
    /// Host-supplied configuration JSON could not be parsed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Reject zero, negative, and non-finite dimensions.
///
/// # Errors
///
/// Returns [`EditorError::InvalidDimension`] naming `field`.
pub fn positive(field: &'static str, value: f32) -> Result<f32, EditorError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(EditorError::InvalidDimension { field, value })
    }
}
