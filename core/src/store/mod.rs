//! Client-side state and the dispatcher that mutates it.
//!
//! # Design
//! - `RootState` is a plain struct passed to pure reducers; nothing global.
//! - `reduce` is the single entry point for mutation. Todolist lifecycle
//!   actions are forwarded to the task slice as well, so the task mapping's
//!   key set always equals the todolist ids.
//! - `Store` wraps state, client and transport and runs the API-backed
//!   actions: status `Loading`, request, status `Succeeded`/`Failed`, then
//!   the fulfilled action. A failed request leaves the slices untouched.

pub mod app;
pub mod selectors;
pub mod tasks;
pub mod todolists;

use tracing::{debug, warn};

pub use app::{AppAction, AppState, RequestStatus, ThemeMode};
pub use tasks::{TasksAction, TasksState};
pub use todolists::{TodolistsAction, TodolistsState};

use crate::client::TodolistClient;
use crate::error::ApiError;
use crate::operations;
use crate::transport::Transport;
use crate::types::{FilterValue, TaskStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootState {
    pub app: AppState,
    pub todolists: TodolistsState,
    pub tasks: TasksState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    App(AppAction),
    Todolists(TodolistsAction),
    Tasks(TasksAction),
}

impl From<AppAction> for Action {
    fn from(action: AppAction) -> Self {
        Action::App(action)
    }
}

impl From<TodolistsAction> for Action {
    fn from(action: TodolistsAction) -> Self {
        Action::Todolists(action)
    }
}

impl From<TasksAction> for Action {
    fn from(action: TasksAction) -> Self {
        Action::Tasks(action)
    }
}

pub fn reduce(state: &mut RootState, action: impl Into<Action>) {
    match action.into() {
        Action::App(action) => app::reduce(&mut state.app, action),
        Action::Todolists(action) => {
            tasks::react_to_todolists(&mut state.tasks, &action);
            todolists::reduce(&mut state.todolists, action);
        }
        Action::Tasks(action) => tasks::reduce(&mut state.tasks, action),
    }
}

/// State plus the means to sync it with the API.
pub struct Store<T> {
    state: RootState,
    client: TodolistClient,
    transport: T,
}

impl<T: Transport> Store<T> {
    pub fn new(client: TodolistClient, transport: T) -> Self {
        Self::with_state(client, transport, RootState::default())
    }

    pub fn with_state(client: TodolistClient, transport: T, state: RootState) -> Self {
        Self {
            state,
            client,
            transport,
        }
    }

    pub fn state(&self) -> &RootState {
        &self.state
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_state(self) -> RootState {
        self.state
    }

    pub fn dispatch(&mut self, action: impl Into<Action>) {
        let action = action.into();
        debug!(?action, "dispatch");
        reduce(&mut self.state, action);
    }

    // --- local actions ---

    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        self.dispatch(AppAction::SetThemeMode(mode));
    }

    pub fn toggle_theme_mode(&mut self) {
        self.dispatch(AppAction::ToggleThemeMode);
    }

    pub fn set_todolist_filter(&mut self, id: &str, filter: FilterValue) {
        self.dispatch(TodolistsAction::FilterChanged {
            id: id.to_string(),
            filter,
        });
    }

    // --- todolists ---

    pub async fn fetch_todolists(&mut self) -> Result<(), ApiError> {
        self.begin();
        let result = operations::fetch_todolists(&self.client, &self.transport).await;
        self.settle("fetch todolists", result)
    }

    pub async fn create_todolist(&mut self, title: &str) -> Result<(), ApiError> {
        self.begin();
        let result = operations::create_todolist(&self.client, &self.transport, title).await;
        self.settle("create todolist", result)
    }

    pub async fn delete_todolist(&mut self, id: &str) -> Result<(), ApiError> {
        self.begin();
        let result = operations::delete_todolist(&self.client, &self.transport, id).await;
        self.settle("delete todolist", result)
    }

    pub async fn rename_todolist(&mut self, id: &str, title: &str) -> Result<(), ApiError> {
        self.begin();
        let result = operations::rename_todolist(&self.client, &self.transport, id, title).await;
        self.settle("rename todolist", result)
    }

    // --- tasks ---

    pub async fn fetch_tasks(&mut self, todolist_id: &str) -> Result<(), ApiError> {
        self.begin();
        let result = operations::fetch_tasks(&self.client, &self.transport, todolist_id).await;
        self.settle("fetch tasks", result)
    }

    pub async fn create_task(&mut self, todolist_id: &str, title: &str) -> Result<(), ApiError> {
        self.begin();
        let result =
            operations::create_task(&self.client, &self.transport, todolist_id, title).await;
        self.settle("create task", result)
    }

    pub async fn delete_task(&mut self, todolist_id: &str, task_id: &str) -> Result<(), ApiError> {
        self.begin();
        let result =
            operations::delete_task(&self.client, &self.transport, todolist_id, task_id).await;
        self.settle("delete task", result)
    }

    /// No request is made, and nothing changes, when the task is not in state.
    pub async fn change_task_status(
        &mut self,
        todolist_id: &str,
        task_id: &str,
        status: TaskStatus,
    ) -> Result<(), ApiError> {
        let Some(current) = selectors::select_task(&self.state, todolist_id, task_id).cloned()
        else {
            debug!(todolist_id, task_id, "status change skipped: task not in state");
            return Ok(());
        };
        self.begin();
        let result =
            operations::change_task_status(&self.client, &self.transport, &current, status).await;
        self.settle("change task status", result)
    }

    /// No request is made, and nothing changes, when the task is not in state.
    pub async fn change_task_title(
        &mut self,
        todolist_id: &str,
        task_id: &str,
        title: &str,
    ) -> Result<(), ApiError> {
        let Some(current) = selectors::select_task(&self.state, todolist_id, task_id).cloned()
        else {
            debug!(todolist_id, task_id, "title change skipped: task not in state");
            return Ok(());
        };
        self.begin();
        let result =
            operations::change_task_title(&self.client, &self.transport, &current, title).await;
        self.settle("change task title", result)
    }

    fn begin(&mut self) {
        self.dispatch(AppAction::SetStatus(RequestStatus::Loading));
    }

    fn settle<A: Into<Action>>(
        &mut self,
        operation: &str,
        result: Result<A, ApiError>,
    ) -> Result<(), ApiError> {
        match result {
            Ok(action) => {
                self.dispatch(AppAction::SetStatus(RequestStatus::Succeeded));
                self.dispatch(action);
                Ok(())
            }
            Err(err) => {
                warn!(operation, error = %err, "request failed");
                self.dispatch(AppAction::SetStatus(RequestStatus::Failed));
                Err(err)
            }
        }
    }
}
