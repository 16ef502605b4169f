//! Display-only derivations over the cached task list.
//!
//! Nothing here mutates the list or talks to the backend; every value is
//! recomputed from the current `tasks` on each read.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};

use crate::types::Task;

/// How the list is ordered for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Exactly as the backend returned it.
    #[default]
    ServerOrder,
    DueDate,
    Priority,
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::ServerOrder => "none",
            SortMode::DueDate => "due",
            SortMode::Priority => "priority",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "server" => Ok(SortMode::ServerOrder),
            "due" | "duedate" | "due-date" | "due_date" => Ok(SortMode::DueDate),
            "priority" => Ok(SortMode::Priority),
            other => Err(format!("unknown sort mode {other:?}, expected none, due or priority")),
        }
    }
}

/// Order `tasks` for display without touching the slice.
///
/// Uses a stable sort, so tasks the comparator considers equal (including two
/// tasks that both lack the sort key) keep their server order.
pub fn sort_tasks(tasks: &[Task], mode: SortMode) -> Vec<&Task> {
    let mut sorted: Vec<&Task> = tasks.iter().collect();
    match mode {
        SortMode::ServerOrder => {}
        SortMode::DueDate => sorted.sort_by(|a, b| missing_last(a.due_date, b.due_date)),
        SortMode::Priority => sorted.sort_by(|a, b| missing_last(a.priority, b.priority)),
    }
    sorted
}

/// Ascending by value, with `None` after every `Some`.
fn missing_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// True iff `due_date` is strictly before `today`. A task due today is not
/// overdue.
pub fn is_overdue_on(due_date: Option<NaiveDate>, today: NaiveDate) -> bool {
    due_date.is_some_and(|due| due < today)
}

/// `is_overdue_on` against the local calendar date.
pub fn is_overdue(due_date: Option<NaiveDate>) -> bool {
    is_overdue_on(due_date, Local::now().date_naive())
}

/// Footer counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCounts {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
}

impl TaskCounts {
    pub fn of(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total: tasks.len(),
            completed,
            remaining: tasks.len() - completed,
        }
    }
}

/// `YYYY/MM/DD`, the form the list shows next to the calendar marker.
pub fn format_due_date(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}
