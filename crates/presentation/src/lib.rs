//! Presentation layer for the CleanSlate task client
//!
//! Each screen has a view model that owns two outputs:
//! - a state cell, readable at any time and observable through a
//!   `watch::Receiver`
//! - a queue of one-shot effects (errors to show, navigation), delivered
//!   once and never replayed
//!
//! Events are handled with `handle` (run to completion) or `dispatch`
//! (spawned). Overlapping events are not fenced: whichever finishes last
//! writes the final state.

mod effects;
pub mod task_detail;
pub mod task_list;

#[cfg(test)]
mod testing;

pub use task_detail::{TaskDetailEffect, TaskDetailEvent, TaskDetailState, TaskDetailViewModel};
pub use task_list::{TaskListEffect, TaskListEvent, TaskListState, TaskListViewModel};
