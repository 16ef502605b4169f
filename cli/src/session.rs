//! Applies prompt commands to the controller.

use todo_core::{TaskDraft, TodoListController, Transport};

use crate::command::Command;
use crate::error::CliError;

/// The form field commands write into: the edit form while one is open,
/// the new-task form otherwise.
fn active_form<T: Transport>(controller: &mut TodoListController<T>) -> Result<&mut TaskDraft, CliError> {
    if controller.editing_id().is_some() {
        return controller
            .edit_draft_mut()
            .ok_or_else(|| CliError::invalid_input("no edit form is open"));
    }
    if !controller.new_draft_enabled() {
        return Err(CliError::invalid_input("the new task form is locked"));
    }
    Ok(controller.new_draft_mut())
}

pub fn apply<T: Transport>(controller: &mut TodoListController<T>, command: Command) -> Result<(), CliError> {
    match command {
        Command::List => {}
        Command::Refresh => {
            controller.refresh().map_err(todo_core::ActionError::from)?;
        }
        Command::Title { words } => active_form(controller)?.title = words.join(" "),
        Command::Desc { words } => active_form(controller)?.description = words.join(" "),
        Command::Due { date } => active_form(controller)?.due_date = date.unwrap_or_default(),
        Command::Priority { level } => active_form(controller)?.priority = level.unwrap_or_default(),
        Command::Add {
            words,
            desc,
            due,
            priority,
        } => {
            if controller.editing_id().is_none() && controller.new_draft_enabled() {
                let draft = controller.new_draft_mut();
                if !words.is_empty() {
                    draft.title = words.join(" ");
                }
                if let Some(desc) = desc {
                    draft.description = desc;
                }
                if let Some(due) = due {
                    draft.due_date = due;
                }
                if let Some(priority) = priority {
                    draft.priority = priority;
                }
            }
            controller.create_task()?;
        }
        Command::Toggle { id } => controller.toggle_completion(id)?,
        Command::Delete { id } => controller.delete_task(id)?,
        Command::Edit { id } => controller.begin_edit(id)?,
        Command::Save => controller.save_edit()?,
        Command::Cancel => controller.cancel_edit(),
        Command::Sort { mode } => controller.set_sort_mode(mode),
    }
    Ok(())
}
