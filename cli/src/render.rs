//! Plain-text rendering of the controller state.

use std::fmt::Write;

use chrono::NaiveDate;
use todo_core::view::{format_due_date, is_overdue_on};
use todo_core::{Task, TaskDraft, TodoListController, Transport};

pub const EMPTY_MESSAGE: &str = "No tasks yet. Use `add <title>` to create one.";

fn enabled(flag: bool) -> &'static str {
    if flag {
        ""
    } else {
        " (disabled)"
    }
}

fn render_draft(out: &mut String, label: &str, draft: &TaskDraft) {
    let _ = writeln!(
        out,
        "{label}: title={:?} desc={:?} due={:?} priority={:?}",
        draft.title, draft.description, draft.due_date, draft.priority
    );
}

fn render_row(out: &mut String, task: &Task, today: NaiveDate, locked: bool) {
    let check = if task.completed { "[x]" } else { "[ ]" };
    let mut line = format!("{check} #{} ", task.id);
    if let Some(priority) = task.priority {
        let _ = write!(line, "{} ", priority.marker());
    }
    line.push_str(&task.title);
    if let Some(description) = &task.description {
        let _ = write!(line, " - {description}");
    }
    if let Some(due) = task.due_date {
        let _ = write!(line, "  📅 {}", format_due_date(due));
    }
    if let Some(priority) = task.priority {
        let _ = write!(line, "  {} {}", priority.marker(), priority);
    }
    if !task.completed && is_overdue_on(task.due_date, today) {
        line.push_str("  OVERDUE");
    }
    if locked {
        line.push_str("  (locked)");
    }
    let _ = writeln!(out, "{line}");
}

/// Render the full screen: form, sort mode, rows, footer counters.
pub fn render<T: Transport>(controller: &TodoListController<T>, today: NaiveDate) -> String {
    let mut out = String::new();

    render_draft(&mut out, "New task", controller.new_draft());
    let _ = writeln!(out, "[add]{}", enabled(controller.add_enabled()));

    if controller.tasks().is_empty() {
        let _ = writeln!(out, "{EMPTY_MESSAGE}");
    } else {
        let _ = writeln!(out, "Sort: {}", controller.sort_mode());
        for task in controller.sorted_tasks() {
            if controller.editing_id() == Some(task.id) {
                if let Some(draft) = controller.edit_state().draft() {
                    render_draft(&mut out, &format!("Editing #{}", task.id), draft);
                }
                let _ = writeln!(
                    out,
                    "[save]{} [cancel]{}",
                    enabled(controller.save_enabled()),
                    enabled(controller.cancel_enabled())
                );
            } else {
                render_row(&mut out, task, today, !controller.row_controls_enabled(task.id));
            }
        }
    }

    let counts = controller.counts();
    let _ = writeln!(
        out,
        "Total: {} | Completed: {} | Remaining: {}",
        counts.total, counts.completed, counts.remaining
    );
    out
}
