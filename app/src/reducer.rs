//! Reducer logic for the todo list.
//!
//! The reducer maps each [`TodoAction`] onto the corresponding `TodoState`
//! operation. It is a pure state machine: no action produces effects, and
//! every action runs to completion before the next one starts.

use crate::types::{TodoAction, TodoId, TodoState};
use todolist_core::{
    SmallVec, effect::Effect, environment::IdGenerator, reducer::Reducer, smallvec,
};

/// Environment dependencies for the todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Generator for new todo ids
    pub ids: std::sync::Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(ids: std::sync::Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }

    /// Creates the production environment
    ///
    /// Ids derive from the system clock's millisecond timestamp with a
    /// monotonic bump, so two todos created in the same millisecond still
    /// get distinct, increasing ids.
    #[must_use]
    pub fn production() -> Self {
        use todolist_core::environment::{SystemClock, SystemIdGenerator};

        let clock = std::sync::Arc::new(SystemClock);
        Self::new(std::sync::Arc::new(SystemIdGenerator::new(clock)))
    }
}

/// Reducer for the todo list
#[derive(Clone, Debug)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TodoReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let result = match action {
            TodoAction::Add { title, content } => {
                let id = TodoId::new(env.ids.next_id());
                let item = state.add(id, title, content);
                tracing::debug!(id = %item.id, "todo added");
                Ok(())
            }
            TodoAction::Edit { id, title, content } => state.edit(id, title, content),
            TodoAction::Toggle { id } => state.toggle(id),
            TodoAction::Delete { id } => state.remove(id).map(|_| ()),
        };

        match result {
            Ok(()) => state.last_error = None,
            Err(error) => {
                tracing::warn!(%error, "todo operation failed");
                state.last_error = Some(error);
            }
        }

        smallvec![Effect::None]
    }
}
