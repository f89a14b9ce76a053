//! One async function per API-backed action.
//!
//! Each function builds the request, runs it through the transport, parses
//! the reply and hands back the action to apply on success. Nothing here
//! touches store state, so callers are free to run several at once and
//! dispatch the results in whatever order they settle.

use tracing::debug;

use crate::client::TodolistClient;
use crate::error::ApiError;
use crate::store::{TasksAction, TodolistsAction};
use crate::transport::Transport;
use crate::types::{Task, TaskStatus, UpdateTaskModel};

pub async fn fetch_todolists(
    client: &TodolistClient,
    transport: &dyn Transport,
) -> Result<TodolistsAction, ApiError> {
    let response = transport.execute(client.build_list_todolists()).await?;
    let todolists = client.parse_list_todolists(response)?;
    debug!(count = todolists.len(), "fetched todolists");
    Ok(TodolistsAction::Fetched(todolists))
}

pub async fn create_todolist(
    client: &TodolistClient,
    transport: &dyn Transport,
    title: &str,
) -> Result<TodolistsAction, ApiError> {
    let response = transport.execute(client.build_create_todolist(title)?).await?;
    let todolist = client.parse_create_todolist(response)?;
    debug!(id = %todolist.id, "created todolist");
    Ok(TodolistsAction::Created(todolist))
}

pub async fn delete_todolist(
    client: &TodolistClient,
    transport: &dyn Transport,
    id: &str,
) -> Result<TodolistsAction, ApiError> {
    let response = transport.execute(client.build_delete_todolist(id)).await?;
    client.parse_delete_todolist(response)?;
    Ok(TodolistsAction::Deleted { id: id.to_string() })
}

/// The rename reply has no body worth reading, so the requested title is
/// what gets applied.
pub async fn rename_todolist(
    client: &TodolistClient,
    transport: &dyn Transport,
    id: &str,
    title: &str,
) -> Result<TodolistsAction, ApiError> {
    let response = transport
        .execute(client.build_rename_todolist(id, title)?)
        .await?;
    client.parse_rename_todolist(response)?;
    Ok(TodolistsAction::TitleChanged {
        id: id.to_string(),
        title: title.to_string(),
    })
}

pub async fn fetch_tasks(
    client: &TodolistClient,
    transport: &dyn Transport,
    todolist_id: &str,
) -> Result<TasksAction, ApiError> {
    let response = transport.execute(client.build_list_tasks(todolist_id)).await?;
    let tasks = client.parse_list_tasks(response)?;
    debug!(todolist_id, count = tasks.len(), "fetched tasks");
    Ok(TasksAction::Fetched {
        todolist_id: todolist_id.to_string(),
        tasks,
    })
}

pub async fn create_task(
    client: &TodolistClient,
    transport: &dyn Transport,
    todolist_id: &str,
    title: &str,
) -> Result<TasksAction, ApiError> {
    let response = transport
        .execute(client.build_create_task(todolist_id, title)?)
        .await?;
    let task = client.parse_create_task(response)?;
    debug!(id = %task.id, todolist_id, "created task");
    Ok(TasksAction::Created(task))
}

pub async fn delete_task(
    client: &TodolistClient,
    transport: &dyn Transport,
    todolist_id: &str,
    task_id: &str,
) -> Result<TasksAction, ApiError> {
    let response = transport
        .execute(client.build_delete_task(todolist_id, task_id))
        .await?;
    client.parse_delete_task(response)?;
    Ok(TasksAction::Deleted {
        todolist_id: todolist_id.to_string(),
        task_id: task_id.to_string(),
    })
}

/// `current` is the task as the store holds it; every other field is sent
/// back unchanged.
pub async fn change_task_status(
    client: &TodolistClient,
    transport: &dyn Transport,
    current: &Task,
    status: TaskStatus,
) -> Result<TasksAction, ApiError> {
    let model = UpdateTaskModel {
        status,
        ..UpdateTaskModel::from(current)
    };
    let task = update_task(client, transport, current, &model).await?;
    Ok(TasksAction::StatusChanged(task))
}

pub async fn change_task_title(
    client: &TodolistClient,
    transport: &dyn Transport,
    current: &Task,
    title: &str,
) -> Result<TasksAction, ApiError> {
    let model = UpdateTaskModel {
        title: title.to_string(),
        ..UpdateTaskModel::from(current)
    };
    let task = update_task(client, transport, current, &model).await?;
    Ok(TasksAction::TitleChanged(task))
}

async fn update_task(
    client: &TodolistClient,
    transport: &dyn Transport,
    current: &Task,
    model: &UpdateTaskModel,
) -> Result<Task, ApiError> {
    let request = client.build_update_task(&current.todo_list_id, &current.id, model)?;
    let response = transport.execute(request).await?;
    client.parse_update_task(response)
}
