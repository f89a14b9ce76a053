//! Tasks keyed by the id of the todolist they belong to.
//!
//! The key set mirrors the todolist collection: [`react_to_todolists`] is fed
//! every todolist action by the root reducer and adds or drops whole
//! sequences. Task actions aimed at a todolist that has no entry are ignored.

use std::collections::HashMap;

use super::todolists::TodolistsAction;
use crate::types::Task;

pub type TasksState = HashMap<String, Vec<Task>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TasksAction {
    Fetched { todolist_id: String, tasks: Vec<Task> },
    Created(Task),
    Deleted { todolist_id: String, task_id: String },
    /// Carries the server's copy; only its status is applied.
    StatusChanged(Task),
    /// Carries the server's copy; only its title is applied.
    TitleChanged(Task),
}

pub fn reduce(state: &mut TasksState, action: TasksAction) {
    match action {
        TasksAction::Fetched { todolist_id, tasks } => {
            if let Some(sequence) = state.get_mut(&todolist_id) {
                *sequence = tasks;
            }
        }
        TasksAction::Created(task) => {
            if let Some(sequence) = state.get_mut(&task.todo_list_id) {
                sequence.insert(0, task);
            }
        }
        TasksAction::Deleted { todolist_id, task_id } => {
            if let Some(sequence) = state.get_mut(&todolist_id) {
                if let Some(index) = sequence.iter().position(|task| task.id == task_id) {
                    sequence.remove(index);
                }
            }
        }
        TasksAction::StatusChanged(updated) => {
            if let Some(task) = find_task_mut(state, &updated.todo_list_id, &updated.id) {
                task.status = updated.status;
            }
        }
        TasksAction::TitleChanged(updated) => {
            if let Some(task) = find_task_mut(state, &updated.todo_list_id, &updated.id) {
                task.title = updated.title;
            }
        }
    }
}

/// Keep the key set equal to the todolist ids after `action` settles.
pub fn react_to_todolists(state: &mut TasksState, action: &TodolistsAction) {
    match action {
        TodolistsAction::Fetched(todolists) => {
            state.retain(|id, _| todolists.iter().any(|tl| &tl.id == id));
            for todolist in todolists {
                state.entry(todolist.id.clone()).or_default();
            }
        }
        TodolistsAction::Created(todolist) => {
            state.entry(todolist.id.clone()).or_default();
        }
        TodolistsAction::Deleted { id } => {
            state.remove(id);
        }
        TodolistsAction::TitleChanged { .. } | TodolistsAction::FilterChanged { .. } => {}
    }
}

pub fn find_task<'a>(state: &'a TasksState, todolist_id: &str, task_id: &str) -> Option<&'a Task> {
    state.get(todolist_id)?.iter().find(|task| task.id == task_id)
}

fn find_task_mut<'a>(
    state: &'a mut TasksState,
    todolist_id: &str,
    task_id: &str,
) -> Option<&'a mut Task> {
    state.get_mut(todolist_id)?.iter_mut().find(|task| task.id == task_id)
}
