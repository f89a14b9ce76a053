//! Read access for the view layer.

use super::app::{RequestStatus, ThemeMode};
use super::tasks::{self, TasksState};
use super::RootState;
use crate::types::{DomainTodolist, Task};

pub fn select_todolists(state: &RootState) -> &[DomainTodolist] {
    &state.todolists
}

pub fn select_tasks(state: &RootState) -> &TasksState {
    &state.tasks
}

pub fn select_theme_mode(state: &RootState) -> ThemeMode {
    state.app.theme_mode
}

pub fn select_app_status(state: &RootState) -> RequestStatus {
    state.app.status
}

pub fn select_task<'a>(state: &'a RootState, todolist_id: &str, task_id: &str) -> Option<&'a Task> {
    tasks::find_task(&state.tasks, todolist_id, task_id)
}

/// Tasks of `todolist_id` that pass the todolist's filter, in stored order.
/// Empty when the todolist does not exist.
pub fn select_filtered_tasks<'a>(state: &'a RootState, todolist_id: &str) -> Vec<&'a Task> {
    let Some(todolist) = state.todolists.iter().find(|tl| tl.id == todolist_id) else {
        return Vec::new();
    };
    state
        .tasks
        .get(todolist_id)
        .map(|sequence| {
            sequence
                .iter()
                .filter(|task| todolist.filter.matches(task))
                .collect()
        })
        .unwrap_or_default()
}
