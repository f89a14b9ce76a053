use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Longest title the API accepts for todolists and tasks.
pub const MAX_TITLE_LEN: usize = 100;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todolist {
    pub id: String,
    pub title: String,
    pub added_date: String,
    pub order: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub todo_list_id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: u8,
    pub priority: u8,
    pub start_date: Option<String>,
    pub deadline: Option<String>,
    pub added_date: String,
    pub order: i64,
}

#[derive(Deserialize)]
pub struct TitleInput {
    pub title: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskInput {
    pub title: String,
    pub description: Option<String>,
    pub status: u8,
    pub priority: u8,
    pub start_date: Option<String>,
    pub deadline: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub error: String,
}

/// Reply wrapper for every mutating endpoint. `result_code == 0` is success.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub result_code: i32,
    pub messages: Vec<String>,
    pub fields_errors: Vec<FieldError>,
    pub data: T,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Item<T> {
    pub item: T,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Empty {}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TasksPage {
    pub items: Vec<Task>,
    pub total_count: usize,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub struct Data {
    pub todolists: Vec<Todolist>,
    pub tasks: HashMap<String, Vec<Task>>,
}

pub type Db = Arc<RwLock<Data>>;

pub fn app() -> Router {
    app_with_db(Db::default())
}

/// Build the router over an existing store, so tests can inspect or seed it.
pub fn app_with_db(db: Db) -> Router {
    Router::new()
        .route("/todo-lists", get(list_todolists).post(create_todolist))
        .route(
            "/todo-lists/{id}",
            put(rename_todolist).delete(delete_todolist),
        )
        .route("/todo-lists/{id}/tasks", get(list_tasks).post(create_task))
        .route(
            "/todo-lists/{id}/tasks/{task_id}",
            put(update_task).delete(delete_task),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn ok<T: Serialize>(data: T) -> Response {
    Json(Envelope {
        result_code: 0,
        messages: Vec::new(),
        fields_errors: Vec::new(),
        data,
    })
    .into_response()
}

fn rejected(message: impl Into<String>) -> Response {
    Json(Envelope {
        result_code: 1,
        messages: vec![message.into()],
        fields_errors: Vec::new(),
        data: Empty {},
    })
    .into_response()
}

/// Returns the rejection reply for an unusable title, if any.
fn validate_title(title: &str) -> Option<Response> {
    let message = if title.trim().is_empty() {
        "Title is required"
    } else if title.chars().count() > MAX_TITLE_LEN {
        "Title max length is 100 symbols"
    } else {
        return None;
    };
    Some(
        Json(Envelope {
            result_code: 1,
            messages: vec![message.to_string()],
            fields_errors: vec![FieldError {
                field: "title".to_string(),
                error: message.to_string(),
            }],
            data: Empty {},
        })
        .into_response(),
    )
}

fn now() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
}

async fn list_todolists(State(db): State<Db>) -> Json<Vec<Todolist>> {
    Json(db.read().await.todolists.clone())
}

async fn create_todolist(State(db): State<Db>, Json(input): Json<TitleInput>) -> Response {
    if let Some(reply) = validate_title(&input.title) {
        return reply;
    }
    let mut data = db.write().await;
    let order = data.todolists.first().map_or(0, |first| first.order - 1);
    let todolist = Todolist {
        id: Uuid::new_v4().to_string(),
        title: input.title,
        added_date: now(),
        order,
    };
    data.tasks.insert(todolist.id.clone(), Vec::new());
    data.todolists.insert(0, todolist.clone());
    tracing::info!(id = %todolist.id, "todolist created");
    ok(Item { item: todolist })
}

async fn rename_todolist(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<TitleInput>,
) -> Response {
    if let Some(reply) = validate_title(&input.title) {
        return reply;
    }
    let mut data = db.write().await;
    match data.todolists.iter_mut().find(|tl| tl.id == id) {
        Some(todolist) => {
            todolist.title = input.title;
            ok(Empty {})
        }
        None => rejected("Todolist not found"),
    }
}

async fn delete_todolist(State(db): State<Db>, Path(id): Path<String>) -> Response {
    let mut data = db.write().await;
    let before = data.todolists.len();
    data.todolists.retain(|tl| tl.id != id);
    if data.todolists.len() == before {
        return rejected("Todolist not found");
    }
    data.tasks.remove(&id);
    tracing::info!(%id, "todolist deleted");
    ok(Empty {})
}

async fn list_tasks(State(db): State<Db>, Path(id): Path<String>) -> Json<TasksPage> {
    let data = db.read().await;
    let page = match data.tasks.get(&id) {
        Some(tasks) => TasksPage {
            items: tasks.clone(),
            total_count: tasks.len(),
            error: None,
        },
        None => TasksPage {
            items: Vec::new(),
            total_count: 0,
            error: Some("Todolist not found".to_string()),
        },
    };
    Json(page)
}

async fn create_task(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<TitleInput>,
) -> Response {
    if let Some(reply) = validate_title(&input.title) {
        return reply;
    }
    let mut data = db.write().await;
    let Some(tasks) = data.tasks.get_mut(&id) else {
        return rejected("Todolist not found");
    };
    let order = tasks.first().map_or(0, |first| first.order - 1);
    let task = Task {
        id: Uuid::new_v4().to_string(),
        todo_list_id: id,
        title: input.title,
        description: None,
        status: 0,
        priority: 1,
        start_date: None,
        deadline: None,
        added_date: now(),
        order,
    };
    tasks.insert(0, task.clone());
    tracing::info!(id = %task.id, todolist = %task.todo_list_id, "task created");
    ok(Item { item: task })
}

async fn update_task(
    State(db): State<Db>,
    Path((id, task_id)): Path<(String, String)>,
    Json(input): Json<UpdateTaskInput>,
) -> Response {
    if let Some(reply) = validate_title(&input.title) {
        return reply;
    }
    let mut data = db.write().await;
    let task = data
        .tasks
        .get_mut(&id)
        .and_then(|tasks| tasks.iter_mut().find(|task| task.id == task_id));
    let Some(task) = task else {
        return rejected("Task not found");
    };
    task.title = input.title;
    task.description = input.description;
    task.status = input.status;
    task.priority = input.priority;
    task.start_date = input.start_date;
    task.deadline = input.deadline;
    ok(Item { item: task.clone() })
}

async fn delete_task(
    State(db): State<Db>,
    Path((id, task_id)): Path<(String, String)>,
) -> Response {
    let mut data = db.write().await;
    let Some(tasks) = data.tasks.get_mut(&id) else {
        return rejected("Todolist not found");
    };
    let before = tasks.len();
    tasks.retain(|task| task.id != task_id);
    if tasks.len() == before {
        return rejected("Task not found");
    }
    tracing::info!(%task_id, todolist = %id, "task deleted");
    ok(Empty {})
}
