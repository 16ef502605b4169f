//! Unsaved form state: the new-task draft and the single inline edit.
//!
//! # Design
//! Drafts hold the raw strings a form binds to, with `""` meaning "unset".
//! They are only converted into typed payloads on submit, which is also where
//! blank titles, malformed dates and unknown priorities are rejected.
//!
//! Edit mode is an enum rather than a nullable id next to loose draft fields,
//! so "editing task X with draft D" can only ever exist for one task at a time.

use chrono::NaiveDate;

use crate::error::ActionError;
use crate::types::{CreateTask, EditTask, Priority, Task, TaskId};

/// Form values for a task that has not been submitted yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD`, or empty.
    pub due_date: String,
    /// `high`, `medium`, `low`, or empty.
    pub priority: String,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = due_date.into();
        self
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    /// Seed an edit form from a stored task; absent fields become `""`.
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            due_date: task
                .due_date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            priority: task.priority.map(|p| p.as_str().to_string()).unwrap_or_default(),
        }
    }

    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn to_create(&self) -> Result<CreateTask, ActionError> {
        let fields = self.validate()?;
        Ok(CreateTask {
            title: fields.title,
            description: fields.description,
            completed: false,
            due_date: fields.due_date,
            priority: fields.priority,
        })
    }

    pub fn to_edit(&self) -> Result<EditTask, ActionError> {
        let fields = self.validate()?;
        Ok(EditTask {
            title: fields.title,
            description: fields.description,
            due_date: fields.due_date,
            priority: fields.priority,
        })
    }

    fn validate(&self) -> Result<ValidFields, ActionError> {
        if !self.has_title() {
            return Err(ActionError::BlankTitle);
        }
        let due_date = match self.due_date.trim() {
            "" => None,
            raw => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| ActionError::InvalidDueDate(self.due_date.clone()))?,
            ),
        };
        let priority = match self.priority.trim() {
            "" => None,
            raw => Some(
                raw.parse::<Priority>()
                    .map_err(|_| ActionError::InvalidPriority(self.priority.clone()))?,
            ),
        };
        Ok(ValidFields {
            // The title goes out as typed; only blankness is checked.
            title: self.title.clone(),
            description: non_empty(&self.description),
            due_date,
            priority,
        })
    }
}

struct ValidFields {
    title: String,
    description: Option<String>,
    due_date: Option<NaiveDate>,
    priority: Option<Priority>,
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Whether an inline edit is open, and for which task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    NoActiveEdit,
    Editing { id: TaskId, draft: TaskDraft },
}

impl EditState {
    pub fn active_id(&self) -> Option<TaskId> {
        match self {
            EditState::NoActiveEdit => None,
            EditState::Editing { id, .. } => Some(*id),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, EditState::Editing { .. })
    }

    pub fn draft(&self) -> Option<&TaskDraft> {
        match self {
            EditState::NoActiveEdit => None,
            EditState::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut TaskDraft> {
        match self {
            EditState::NoActiveEdit => None,
            EditState::Editing { draft, .. } => Some(draft),
        }
    }
}
