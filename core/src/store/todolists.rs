//! The ordered todolist collection.

use crate::types::{DomainTodolist, FilterValue, Todolist};

pub type TodolistsState = Vec<DomainTodolist>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodolistsAction {
    /// Server list arrived; replaces the whole collection.
    Fetched(Vec<Todolist>),
    Created(Todolist),
    Deleted { id: String },
    TitleChanged { id: String, title: String },
    /// Local only, never sent to the server.
    FilterChanged { id: String, filter: FilterValue },
}

pub fn reduce(state: &mut TodolistsState, action: TodolistsAction) {
    match action {
        TodolistsAction::Fetched(todolists) => {
            *state = todolists.into_iter().map(DomainTodolist::from).collect();
        }
        TodolistsAction::Created(todolist) => {
            if state.iter().all(|tl| tl.id != todolist.id) {
                state.insert(0, DomainTodolist::from(todolist));
            }
        }
        TodolistsAction::Deleted { id } => {
            if let Some(index) = state.iter().position(|tl| tl.id == id) {
                state.remove(index);
            }
        }
        TodolistsAction::TitleChanged { id, title } => {
            if let Some(todolist) = state.iter_mut().find(|tl| tl.id == id) {
                todolist.title = title;
            }
        }
        TodolistsAction::FilterChanged { id, filter } => {
            if let Some(todolist) = state.iter_mut().find(|tl| tl.id == id) {
                todolist.filter = filter;
            }
        }
    }
}
