//! Domain types for the todo list.
//!
//! A todo list is an ordered collection of items that can be added, edited,
//! toggled between complete and incomplete, and removed. Insertion order is
//! display order, and every item carries a unique id assigned at creation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unique identifier for a todo item
///
/// Assigned once at creation and never reused. Production ids derive from
/// the creation timestamp in milliseconds with a monotonic bump, so ids are
/// strictly increasing; tests substitute a sequential generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from a raw value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for TodoId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// Title of the todo
    pub title: String,
    /// Free-form body text
    pub content: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new, incomplete todo item
    #[must_use]
    pub const fn new(id: TodoId, title: String, content: String) -> Self {
        Self {
            id,
            title,
            content,
            completed: false,
        }
    }

    /// Flips the completion status
    pub const fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Error from an id-keyed todo operation
///
/// Non-fatal: the reducer records it in [`TodoState::last_error`] and leaves
/// the collection untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum TodoError {
    /// No item with the given id exists
    #[error("todo {id} not found")]
    NotFound {
        /// The id that failed to resolve
        id: TodoId,
    },
}

/// State of the todo list
///
/// Items live in a `Vec` in insertion order; id lookups are linear scans.
/// No two items share an id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// All todos in insertion order
    pub todos: Vec<TodoItem>,
    /// Error from the most recent operation, if it failed
    pub last_error: Option<TodoError>,
}

impl TodoState {
    /// Creates a new empty todo state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: Vec::new(),
            last_error: None,
        }
    }

    /// Appends a new incomplete item and returns a reference to it
    ///
    /// Empty titles and contents are accepted; there are no error
    /// conditions. The caller supplies a unique id.
    pub fn add(&mut self, id: TodoId, title: String, content: String) -> &TodoItem {
        self.todos.push(TodoItem::new(id, title, content));
        match self.todos.last() {
            Some(item) => item,
            // Just pushed, so the list is non-empty
            None => unreachable!(),
        }
    }

    /// Replaces the title and content of the matching item
    ///
    /// Completion status and position are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::NotFound`] if no item has the given id.
    pub fn edit(&mut self, id: TodoId, title: String, content: String) -> Result<(), TodoError> {
        let item = self.find_mut(id)?;
        item.title = title;
        item.content = content;
        Ok(())
    }

    /// Flips the completion status of the matching item
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::NotFound`] if no item has the given id.
    pub fn toggle(&mut self, id: TodoId) -> Result<(), TodoError> {
        self.find_mut(id)?.toggle();
        Ok(())
    }

    /// Removes the matching item, preserving the order of the remainder
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::NotFound`] if no item has the given id.
    pub fn remove(&mut self, id: TodoId) -> Result<TodoItem, TodoError> {
        let index = self
            .todos
            .iter()
            .position(|item| item.id == id)
            .ok_or(TodoError::NotFound { id })?;
        Ok(self.todos.remove(index))
    }

    /// Returns the item with the given id, if any
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|item| item.id == id)
    }

    /// Checks whether an item with the given id exists
    #[must_use]
    pub fn exists(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Recomputes the completion summary from the collection
    #[must_use]
    pub fn summary(&self) -> Summary {
        let completed = self.todos.iter().filter(|item| item.completed).count();
        Summary {
            completed,
            incomplete: self.todos.len() - completed,
        }
    }

    fn find_mut(&mut self, id: TodoId) -> Result<&mut TodoItem, TodoError> {
        self.todos
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(TodoError::NotFound { id })
    }
}

/// Completion counts derived from the collection
///
/// Always recomputed, never cached: `completed + incomplete` equals the
/// number of todos.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of completed todos
    pub completed: usize,
    /// Number of incomplete todos
    pub incomplete: usize,
}

impl Summary {
    /// Total number of todos
    #[must_use]
    pub const fn total(self) -> usize {
        self.completed + self.incomplete
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Completed: {} | Incomplete: {}",
            self.completed, self.incomplete
        )
    }
}

/// User intents dispatched to the store
///
/// One action per discrete user event: submitting the form in create or
/// edit mode, flipping a completion switch, or confirming a delete prompt.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum TodoAction {
    /// Append a new todo; the environment assigns its id
    Add {
        /// Title of the new todo
        title: String,
        /// Body text of the new todo
        content: String,
    },
    /// Replace the title and content of an existing todo
    Edit {
        /// Todo to edit
        id: TodoId,
        /// Replacement title
        title: String,
        /// Replacement body text
        content: String,
    },
    /// Flip the completion status of an existing todo
    Toggle {
        /// Todo to toggle
        id: TodoId,
    },
    /// Remove an existing todo
    Delete {
        /// Todo to remove
        id: TodoId,
    },
}
