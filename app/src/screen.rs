//! Pure text rendering of the single todo screen.
//!
//! [`render`] is a function of `(TodoState, TodoForm)` only. The demo binary
//! prints its output after every action; any other collaborator could map
//! the same inputs onto real widgets instead.

use crate::form::TodoForm;
use crate::types::TodoState;
use std::fmt::Write as _;

/// Renders the screen: header, completion counts, the entry form, then one
/// block per todo in insertion order.
#[must_use]
pub fn render(state: &TodoState, form: &TodoForm) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Todo List");
    let _ = writeln!(out, "{}", state.summary());
    let _ = writeln!(out);
    let _ = writeln!(out, "Title: {}", form.title);
    let _ = writeln!(out, "Content: {}", form.content);
    let _ = writeln!(out, "[ {} ]", form.submit_label());

    if !state.todos.is_empty() {
        let _ = writeln!(out);
        for item in &state.todos {
            let marker = if item.completed { "✓" } else { " " };
            let _ = writeln!(out, "[{marker}] {} (#{})", item.title, item.id);
            let _ = writeln!(out, "    Content: {}", item.content);
            let _ = writeln!(out, "    [ Edit ] [ Delete ]");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TodoId;

    #[test]
    fn renders_empty_list() {
        let rendered = render(&TodoState::new(), &TodoForm::new());

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            [
                "Todo List",
                "Completed: 0 | Incomplete: 0",
                "",
                "Title: ",
                "Content: ",
                "[ Add Todo ]",
            ]
        );
    }

    #[test]
    fn renders_items_with_checkbox_markers() {
        let mut state = TodoState::new();
        state.add(TodoId::new(1), "Buy milk".to_string(), "3 liters".to_string());
        state.add(
            TodoId::new(2),
            "Walk the dog".to_string(),
            "Around the block".to_string(),
        );
        state.todos[0].completed = true;

        let rendered = render(&state, &TodoForm::new());

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            [
                "Todo List",
                "Completed: 1 | Incomplete: 1",
                "",
                "Title: ",
                "Content: ",
                "[ Add Todo ]",
                "",
                "[✓] Buy milk (#1)",
                "    Content: 3 liters",
                "    [ Edit ] [ Delete ]",
                "[ ] Walk the dog (#2)",
                "    Content: Around the block",
                "    [ Edit ] [ Delete ]",
            ]
        );
    }

    #[test]
    fn renders_drafts_and_edit_label() {
        let mut state = TodoState::new();
        state.add(TodoId::new(5), "Buy milk".to_string(), "2 liters".to_string());

        let mut form = TodoForm::new();
        form.begin_edit(&state.todos[0]);

        let rendered = render(&state, &form);

        assert!(rendered.contains("Title: Buy milk"));
        assert!(rendered.contains("Content: 2 liters"));
        assert!(rendered.contains("[ Edit Todo ]"));
    }
}
