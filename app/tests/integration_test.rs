//! Integration tests driving the todo store end to end
//!
//! Exercises the loop a collaborator uses: actions in through `send`,
//! snapshots out through `subscribe_state` and `state` closure reads.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use std::sync::Arc;
use todolist_app::{
    DeletePrompt, TodoAction, TodoEnvironment, TodoError, TodoForm, TodoId, TodoReducer, TodoState,
};
use todolist_runtime::{Store, StoreError};
use todolist_testing::SequentialIdGenerator;

fn test_store() -> Store<TodoState, TodoAction, TodoEnvironment, TodoReducer> {
    let env = TodoEnvironment::new(Arc::new(SequentialIdGenerator::starting_at(1)));
    Store::new(TodoState::new(), TodoReducer::new(), env)
}

/// Full session: two adds through the form, toggle, edit, prompted delete.
#[tokio::test]
async fn test_full_session_through_store() {
    todolist_testing::helpers::init_test_tracing();

    let store = test_store();
    let mut form = TodoForm::new();

    form.title = "Buy milk".to_string();
    form.content = "2 liters".to_string();
    store.send(form.submit()).await.unwrap();

    form.title = "Walk the dog".to_string();
    form.content = "Around the block".to_string();
    store.send(form.submit()).await.unwrap();

    let summary = store.state(|s| s.summary()).await;
    assert_eq!(summary.total(), 2);
    assert_eq!(summary.incomplete, 2);

    let milk_id = store.state(|s| s.todos[0].id).await;
    assert_eq!(milk_id, TodoId::new(1));

    store.send(TodoAction::Toggle { id: milk_id }).await.unwrap();
    let summary = store.state(|s| s.summary()).await;
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.incomplete, 1);

    // Edit through the form keeps completion status
    let milk = store.state(|s| s.get(milk_id).cloned()).await.unwrap();
    form.begin_edit(&milk);
    form.content = "3 liters".to_string();
    store.send(form.submit()).await.unwrap();

    let milk = store.state(|s| s.get(milk_id).cloned()).await.unwrap();
    assert_eq!(milk.content, "3 liters");
    assert!(milk.completed);

    // Delete goes through the confirmation prompt
    store.send(DeletePrompt::new(milk_id).confirm()).await.unwrap();

    let state = store.state(Clone::clone).await;
    assert_eq!(state.count(), 1);
    assert_eq!(state.todos[0].title, "Walk the dog");
    assert_eq!(state.last_error, None);
}

/// Every send replaces the watched snapshot before returning.
#[tokio::test]
async fn test_subscribe_state_observes_each_action() {
    let store = test_store();
    let mut state_rx = store.subscribe_state();

    let actions = [
        TodoAction::Add {
            title: "a".to_string(),
            content: String::new(),
        },
        TodoAction::Add {
            title: "b".to_string(),
            content: String::new(),
        },
        TodoAction::Toggle { id: TodoId::new(1) },
    ];

    let mut seen = Vec::new();
    for action in actions {
        store.send(action).await.unwrap();
        state_rx.changed().await.unwrap();
        let snapshot = state_rx.borrow_and_update().clone();
        seen.push((snapshot.count(), snapshot.summary().completed));
    }

    assert_eq!(seen, vec![(1, 0), (2, 0), (2, 1)]);
}

/// Concurrent senders serialize at the reducer: no ids collide, no adds
/// are lost.
#[tokio::test]
async fn test_concurrent_adds_produce_unique_ids() {
    let store = Arc::new(test_store());

    let mut handles = Vec::new();
    for i in 0..16 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store
                .send(TodoAction::Add {
                    title: format!("todo {i}"),
                    content: String::new(),
                })
                .await
                .unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let state = store.state(Clone::clone).await;
    assert_eq!(state.count(), 16);

    let mut ids: Vec<u64> = state.todos.iter().map(|t| t.id.value()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 16);
}

#[tokio::test]
async fn test_not_found_is_recorded_and_cleared() {
    let store = test_store();

    store
        .send(TodoAction::Add {
            title: "Only".to_string(),
            content: String::new(),
        })
        .await
        .unwrap();

    store
        .send(TodoAction::Toggle { id: TodoId::new(99) })
        .await
        .unwrap();
    let error = store.state(|s| s.last_error).await;
    assert_eq!(error, Some(TodoError::NotFound { id: TodoId::new(99) }));

    // The failure left the collection untouched
    assert_eq!(store.state(TodoState::count).await, 1);

    // The next success clears the error
    store
        .send(TodoAction::Toggle { id: TodoId::new(1) })
        .await
        .unwrap();
    assert_eq!(store.state(|s| s.last_error).await, None);
}

/// The todo reducer emits no work, so effect handles resolve at once.
#[tokio::test]
async fn test_effect_handle_completes_for_pure_actions() {
    let store = test_store();

    let mut handle = store
        .send(TodoAction::Add {
            title: "x".to_string(),
            content: String::new(),
        })
        .await
        .unwrap();

    handle.wait().await;
}

#[tokio::test]
async fn test_send_after_shutdown_is_rejected() {
    let store = test_store();
    store.shutdown_with_default().await.unwrap();

    let result = store
        .send(TodoAction::Add {
            title: "late".to_string(),
            content: String::new(),
        })
        .await;
    assert!(matches!(result, Err(StoreError::ShutdownInProgress)));
}
