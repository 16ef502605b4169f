//! Client core for the task-list service.
//!
//! # Overview
//! `TodoClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network. `TodoListController` layers the list state on
//! top: cached tasks, the new-task draft, one inline edit, and the sort mode.
//! The host plugs in a `Transport` that performs the actual round-trips.
//!
//! # Design
//! - The backend is the source of truth. Mutations are followed by a full
//!   refetch; the cache is replaced, never patched.
//! - Edit mode is an `EditState` enum, so at most one draft can exist.
//! - Sorting, overdue flags and counters are derived on every read.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod controller;
pub mod draft;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use controller::TodoListController;
pub use draft::{EditState, TaskDraft};
pub use error::{ActionError, ApiError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::Transport;
pub use types::{CreateTask, EditTask, Priority, Task, TaskId, ToggleCompletion};
pub use view::{SortMode, TaskCounts};
