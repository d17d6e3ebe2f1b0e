//! Collaborator-side input state.
//!
//! The entry form and the delete confirmation prompt live outside
//! [`TodoState`](crate::types::TodoState): they belong to the rendering
//! layer, which turns them into actions. The store never sees draft text or
//! an open prompt, only the [`TodoAction`] that results.

use crate::types::{TodoAction, TodoId, TodoItem};

/// Mode of the entry form
///
/// The form either creates a new todo or edits an existing one. Edit mode
/// carries the id of the todo being edited; it is the only cursor into the
/// collection the collaborator holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    /// Submitting appends a new todo
    #[default]
    Create,
    /// Submitting replaces the fields of the identified todo
    Edit(TodoId),
}

/// Draft inputs for the single entry form
///
/// Holds the title and content drafts plus the current [`FormMode`].
/// Submitting produces one action and resets the form to create mode.
#[derive(Clone, Debug, Default)]
pub struct TodoForm {
    /// Draft title text
    pub title: String,
    /// Draft content text
    pub content: String,
    mode: FormMode,
}

impl TodoForm {
    /// Creates an empty form in create mode
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            mode: FormMode::Create,
        }
    }

    /// Returns the current form mode
    #[must_use]
    pub const fn mode(&self) -> FormMode {
        self.mode
    }

    /// Whether the form is editing an existing todo
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Loads an item's fields into the drafts and switches to edit mode
    pub fn begin_edit(&mut self, item: &TodoItem) {
        self.title = item.title.clone();
        self.content = item.content.clone();
        self.mode = FormMode::Edit(item.id);
    }

    /// Label for the submit button in the current mode
    #[must_use]
    pub const fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add Todo",
            FormMode::Edit(_) => "Edit Todo",
        }
    }

    /// Turns the current drafts into an action and resets the form
    ///
    /// Create mode yields [`TodoAction::Add`]; edit mode yields
    /// [`TodoAction::Edit`] for the cursor id. Either way the drafts clear
    /// and the mode returns to create.
    pub fn submit(&mut self) -> TodoAction {
        let title = std::mem::take(&mut self.title);
        let content = std::mem::take(&mut self.content);

        match std::mem::take(&mut self.mode) {
            FormMode::Create => TodoAction::Add { title, content },
            FormMode::Edit(id) => TodoAction::Edit { id, title, content },
        }
    }
}

/// Two-option delete confirmation
///
/// Deleting asks before acting: only [`confirm`](Self::confirm) produces a
/// [`TodoAction::Delete`]; [`cancel`](Self::cancel) consumes the prompt
/// without touching the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeletePrompt {
    id: TodoId,
}

impl DeletePrompt {
    /// Title shown on the confirmation dialog
    pub const TITLE: &'static str = "Delete";

    /// Question shown on the confirmation dialog
    pub const MESSAGE: &'static str = "Are you sure?";

    /// Creates a prompt for the given todo
    #[must_use]
    pub const fn new(id: TodoId) -> Self {
        Self { id }
    }

    /// The todo the prompt refers to
    #[must_use]
    pub const fn id(self) -> TodoId {
        self.id
    }

    /// Confirms the deletion, yielding the delete action
    #[must_use]
    pub fn confirm(self) -> TodoAction {
        tracing::debug!(id = %self.id, "delete confirmed");
        TodoAction::Delete { id: self.id }
    }

    /// Dismisses the prompt; no action results
    pub fn cancel(self) {
        tracing::debug!(id = %self.id, "delete canceled");
    }
}
