//! Structural edits of menu documents.
//!
//! Every operation takes a menu snapshot and returns a new, consistent
//! snapshot; the input is never modified. Reordering at the edge of a list
//! is not an error: the menu comes back unchanged.

use thiserror::Error;

mod collections;
mod items;
mod layout;

pub use collections::{
    add_collection, ensure_collection, move_down_collection, move_up_collection,
    remove_collection, update_collection,
};
pub use items::{
    add_menu_item, duplicate_menu_item, move_down_menu_item, move_up_menu_item, remove_menu_item,
    update_menu_item,
};

/// Result type returned by the menu editor.
pub type EditorResult<T> = Result<T, EditorError>;

/// Errors raised when an edit references something the menu does not contain.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// The referenced collection or dish is not part of the menu.
    #[error("{kind} `{id}` not found in menu")]
    NotFound { kind: &'static str, id: String },
    /// A new dish reuses an identifier already present in the menu.
    #[error("identifier `{0}` is already used in menu")]
    DuplicateId(String),
}

impl EditorError {
    pub(crate) fn collection_not_found(id: &str) -> Self {
        EditorError::NotFound {
            kind: "collection",
            id: id.to_string(),
        }
    }

    pub(crate) fn item_not_found(id: &str) -> Self {
        EditorError::NotFound {
            kind: "item",
            id: id.to_string(),
        }
    }
}

/// Direction of a one-slot reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shift {
    Up,
    Down,
}

impl Shift {
    /// Position swapped with `position`, or `None` at the edge of the list.
    pub(crate) fn neighbour(self, position: usize, len: usize) -> Option<usize> {
        match self {
            Shift::Up => position.checked_sub(1),
            Shift::Down => (position + 1 < len).then_some(position + 1),
        }
    }
}
