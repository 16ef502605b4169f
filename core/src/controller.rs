//! Client-side state for the task list.
//!
//! # Design
//! `TodoListController` owns the cached list, the new-task draft, the edit
//! state and the sort mode. It never patches the cache: every acknowledged
//! mutation is followed by a full refetch, so the list only ever shows what
//! the backend last returned. Nothing is applied optimistically.
//!
//! Failures are logged through `tracing` and returned to the caller; state is
//! left as it was, drafts included, so the user can simply retry.
//!
//! Every mutation takes `&mut self` and runs to completion before returning,
//! so one controller never has two requests in flight. `busy` is only set
//! inside that call; callers always observe it cleared.

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::draft::{EditState, TaskDraft};
use crate::error::{ActionError, ApiError};
use crate::http::HttpRequest;
use crate::transport::Transport;
use crate::types::{Task, TaskId};
use crate::view::{self, SortMode, TaskCounts};

pub struct TodoListController<T> {
    client: TodoClient,
    transport: T,
    tasks: Vec<Task>,
    new_draft: TaskDraft,
    edit: EditState,
    sort_mode: SortMode,
    busy: bool,
}

impl<T: Transport> TodoListController<T> {
    /// Creates a controller with an empty cache. Call `refresh` to load.
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self {
            client,
            transport,
            tasks: Vec::new(),
            new_draft: TaskDraft::default(),
            edit: EditState::NoActiveEdit,
            sort_mode: SortMode::ServerOrder,
            busy: false,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn new_draft(&self) -> &TaskDraft {
        &self.new_draft
    }

    pub fn new_draft_mut(&mut self) -> &mut TaskDraft {
        &mut self.new_draft
    }

    pub fn set_new_draft(&mut self, draft: TaskDraft) {
        self.new_draft = draft;
    }

    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    pub fn editing_id(&self) -> Option<TaskId> {
        self.edit.active_id()
    }

    /// The open edit form, if any.
    pub fn edit_draft_mut(&mut self) -> Option<&mut TaskDraft> {
        self.edit.draft_mut()
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.sort_mode = mode;
    }

    /// True only while a mutating request is executing.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn client(&self) -> &TodoClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Replace the cache with the backend's current list.
    ///
    /// On any failure the previous list stays in place.
    pub fn refresh(&mut self) -> Result<(), ApiError> {
        let request = self.client.build_list_tasks();
        let fetched = self
            .transport
            .execute(&request)
            .and_then(|response| self.client.parse_list_tasks(response));
        match fetched {
            Ok(tasks) => {
                debug!(count = tasks.len(), "task list refreshed");
                self.tasks = tasks;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch tasks");
                Err(err)
            }
        }
    }

    /// Submit the new-task draft.
    ///
    /// The draft is cleared only once the backend acknowledges the create;
    /// the new task shows up after the refetch that follows.
    pub fn create_task(&mut self) -> Result<(), ActionError> {
        if let Some(id) = self.edit.active_id() {
            return Err(rejected(ActionError::EditInProgress(id)));
        }
        let input = self.new_draft.to_create().map_err(rejected)?;
        let request = self.client.build_create_task(&input)?;

        self.mutate(&request, "create task")?;
        self.new_draft = TaskDraft::default();
        self.refetch();
        Ok(())
    }

    /// Flip the completion flag of a task, based on the cached value.
    pub fn toggle_completion(&mut self, id: TaskId) -> Result<(), ActionError> {
        let completed = self.row_target(id)?.completed;
        let request = self.client.build_toggle_task(id, !completed)?;

        self.mutate(&request, "toggle task")?;
        self.refetch();
        Ok(())
    }

    pub fn delete_task(&mut self, id: TaskId) -> Result<(), ActionError> {
        self.row_target(id)?;
        let request = self.client.build_delete_task(id);

        self.mutate(&request, "delete task")?;
        self.refetch();
        Ok(())
    }

    /// Open the inline edit form for `id`, seeded from the cached task.
    pub fn begin_edit(&mut self, id: TaskId) -> Result<(), ActionError> {
        let draft = TaskDraft::from_task(self.row_target(id)?);
        debug!(id, "edit started");
        self.edit = EditState::Editing { id, draft };
        Ok(())
    }

    /// Send the open edit. On failure the form stays open.
    pub fn save_edit(&mut self) -> Result<(), ActionError> {
        let EditState::Editing { id, draft } = &self.edit else {
            return Err(rejected(ActionError::NoActiveEdit));
        };
        let id = *id;
        let input = draft.to_edit().map_err(rejected)?;
        let request = self.client.build_edit_task(id, &input)?;

        self.mutate(&request, "save edit")?;
        self.edit = EditState::NoActiveEdit;
        self.refetch();
        Ok(())
    }

    /// Drop the open edit without sending anything.
    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.edit.active_id() {
            debug!(id, "edit cancelled");
        }
        self.edit = EditState::NoActiveEdit;
    }

    pub fn sorted_tasks(&self) -> Vec<&Task> {
        view::sort_tasks(&self.tasks, self.sort_mode)
    }

    pub fn counts(&self) -> TaskCounts {
        TaskCounts::of(&self.tasks)
    }

    /// New-task inputs accept typing.
    pub fn new_draft_enabled(&self) -> bool {
        !self.busy && !self.edit.is_active()
    }

    pub fn add_enabled(&self) -> bool {
        self.new_draft_enabled() && self.new_draft.has_title()
    }

    /// Checkbox, edit and delete for a row in display mode.
    pub fn row_controls_enabled(&self, id: TaskId) -> bool {
        !self.busy && !self.edit.is_active() && self.task(id).is_some()
    }

    pub fn save_enabled(&self) -> bool {
        !self.busy && self.edit.draft().is_some_and(TaskDraft::has_title)
    }

    pub fn cancel_enabled(&self) -> bool {
        !self.busy && self.edit.is_active()
    }

    /// Validate that a row action on `id` may start right now.
    fn row_target(&self, id: TaskId) -> Result<&Task, ActionError> {
        if let Some(active) = self.edit.active_id() {
            return Err(rejected(ActionError::EditInProgress(active)));
        }
        self.task(id)
            .ok_or_else(|| rejected(ActionError::UnknownTask(id)))
    }

    /// Run one mutating request with the busy flag held for its duration.
    fn mutate(&mut self, request: &HttpRequest, action: &'static str) -> Result<(), ApiError> {
        debug!(method = %request.method, path = %request.path, action, "sending");
        self.busy = true;
        let result = self
            .transport
            .execute(request)
            .and_then(|response| self.client.acknowledge(&response));
        self.busy = false;
        if let Err(err) = &result {
            warn!(error = %err, action, "request failed");
        }
        result
    }

    /// Refresh after an acknowledged mutation. A failed refetch is already
    /// logged by `refresh` and does not undo the mutation.
    fn refetch(&mut self) {
        let _ = self.refresh();
    }
}

fn rejected(err: ActionError) -> ActionError {
    debug!(reason = %err, "action rejected");
    err
}
