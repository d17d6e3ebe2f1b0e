//! Single-screen todo list application.
//!
//! The whole application is one screen: an entry form, a completion
//! summary, and the list of todos. State lives only in process memory,
//! inside a [`Store`](todolist_runtime::Store) that runs [`TodoReducer`]
//! over [`TodoState`]. The modules split along the store boundary:
//!
//! - [`types`]: the domain (items, ids, state, summary, errors, actions)
//! - [`reducer`]: the transition logic and its environment
//! - [`form`]: collaborator-owned drafts, edit cursor, delete prompt
//! - [`screen`]: pure text rendering of the screen
//!
//! # Quick Start
//!
//! ```no_run
//! use todolist_app::{TodoAction, TodoEnvironment, TodoReducer, TodoState};
//! use todolist_runtime::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Store::new(
//!     TodoState::new(),
//!     TodoReducer::new(),
//!     TodoEnvironment::production(),
//! );
//!
//! // Add a todo
//! store
//!     .send(TodoAction::Add {
//!         title: "Buy milk".to_string(),
//!         content: "2 liters".to_string(),
//!     })
//!     .await?;
//!
//! // Read derived state
//! let summary = store.state(|s| s.summary()).await;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```

pub mod form;
pub mod reducer;
pub mod screen;
pub mod types;

// Re-export commonly used types
pub use form::{DeletePrompt, FormMode, TodoForm};
pub use reducer::{TodoEnvironment, TodoReducer};
pub use types::{Summary, TodoAction, TodoError, TodoId, TodoItem, TodoState};
