//! Todo list demo binary
//!
//! Drives the store through a full session: add two todos, toggle one,
//! edit it, then delete it behind the confirmation prompt. The rendered
//! screen is printed after every action. Set `RUST_LOG` to adjust logging.

use std::time::Duration;
use todolist_app::{
    DeletePrompt, TodoAction, TodoEnvironment, TodoForm, TodoReducer, TodoState, screen,
};
use todolist_runtime::{Store, StoreConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_screen(state: &TodoState, form: &TodoForm) {
    println!("{}", screen::render(state, form));
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todolist=info,todolist_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Todo List Demo ===\n");

    let store = Store::with_config(
        TodoState::new(),
        TodoReducer::new(),
        TodoEnvironment::production(),
        StoreConfig::default().with_shutdown_timeout(Duration::from_secs(5)),
    );

    let mut screen_rx = store.subscribe_state();
    let mut form = TodoForm::new();

    print_screen(&screen_rx.borrow_and_update(), &form);

    // Add the first todo through the form
    form.title = "Buy milk".to_string();
    form.content = "2 liters".to_string();
    println!(">>> Submitting: {}", form.submit_label());
    let _ = store.send(form.submit()).await;
    print_screen(&screen_rx.borrow_and_update(), &form);

    // Add a second one
    form.title = "Walk the dog".to_string();
    form.content = "Around the block".to_string();
    println!(">>> Submitting: {}", form.submit_label());
    let _ = store.send(form.submit()).await;
    print_screen(&screen_rx.borrow_and_update(), &form);

    // Ids come from the rendered collection
    let Some(milk_id) = store.state(|s| s.todos.first().map(|t| t.id)).await else {
        eprintln!("nothing was added");
        return;
    };

    // Flip the completion switch
    println!(">>> Sending: Toggle (todo #{milk_id})");
    let _ = store.send(TodoAction::Toggle { id: milk_id }).await;
    print_screen(&screen_rx.borrow_and_update(), &form);

    // Edit it; completion status survives the edit
    let Some(milk) = store.state(|s| s.get(milk_id).cloned()).await else {
        eprintln!("todo #{milk_id} disappeared");
        return;
    };
    form.begin_edit(&milk);
    form.content = "3 liters".to_string();
    println!(">>> Submitting: {}", form.submit_label());
    let _ = store.send(form.submit()).await;
    print_screen(&screen_rx.borrow_and_update(), &form);

    // Deleting asks first; cancel leaves everything untouched
    let prompt = DeletePrompt::new(milk_id);
    println!(
        ">>> {}: {} (todo #{milk_id})",
        DeletePrompt::TITLE,
        DeletePrompt::MESSAGE
    );
    println!(">>> Cancel");
    prompt.cancel();
    print_screen(&screen_rx.borrow_and_update(), &form);

    // Same prompt, confirmed this time
    let prompt = DeletePrompt::new(milk_id);
    println!(
        ">>> {}: {} (todo #{milk_id})",
        DeletePrompt::TITLE,
        DeletePrompt::MESSAGE
    );
    println!(">>> Delete");
    let _ = store.send(prompt.confirm()).await;
    print_screen(&screen_rx.borrow_and_update(), &form);

    // Operations on a stale id are recorded, not fatal
    println!(">>> Sending: Toggle (todo #{milk_id}, already deleted)");
    let _ = store.send(TodoAction::Toggle { id: milk_id }).await;
    if let Some(error) = store.state(|s| s.last_error).await {
        println!("Rejected: {error}\n");
    }

    if let Err(error) = store.shutdown_with_default().await {
        eprintln!("shutdown failed: {error}");
    }

    println!("=== Demo Complete ===");
}
