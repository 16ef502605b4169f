//! Interactive terminal front-end for the task list.
//!
//! Each prompt line is parsed into a `Command`, applied to a
//! `TodoListController`, and the screen is re-rendered from the resulting
//! state. HTTP goes through `UreqTransport`.

pub mod command;
pub mod error;
pub mod render;
pub mod session;
pub mod transport;

pub use command::{parse_line, Args, Command};
pub use error::CliError;
pub use transport::UreqTransport;
