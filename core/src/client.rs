//! Stateless HTTP request builder and response parser for the todolist API.
//!
//! # Design
//! `TodolistClient` holds only its configuration and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. A transport executes the round-trip in between.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    BaseResponse, GetTasksResponse, ItemData, Task, TitlePayload, Todolist, UpdateTaskModel,
};

/// Stateless client for the todolist API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct TodolistClient {
    base_url: String,
    api_key: Option<String>,
    token: Option<String>,
}

impl TodolistClient {
    pub fn new(base_url: &str) -> Self {
        Self::from_config(ClientConfig::new(base_url))
    }

    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            token: config.token,
        }
    }

    // --- todolists ---

    pub fn build_list_todolists(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/todo-lists".to_string(), None)
    }

    pub fn build_create_todolist(&self, title: &str) -> Result<HttpRequest, ApiError> {
        let body = to_json(&TitlePayload { title: title.to_string() })?;
        Ok(self.request(HttpMethod::Post, "/todo-lists".to_string(), Some(body)))
    }

    pub fn build_delete_todolist(&self, id: &str) -> HttpRequest {
        self.request(HttpMethod::Delete, format!("/todo-lists/{id}"), None)
    }

    pub fn build_rename_todolist(&self, id: &str, title: &str) -> Result<HttpRequest, ApiError> {
        let body = to_json(&TitlePayload { title: title.to_string() })?;
        Ok(self.request(HttpMethod::Put, format!("/todo-lists/{id}"), Some(body)))
    }

    pub fn parse_list_todolists(&self, response: HttpResponse) -> Result<Vec<Todolist>, ApiError> {
        check_status(&response, 200)?;
        from_json(&response.body)
    }

    pub fn parse_create_todolist(&self, response: HttpResponse) -> Result<Todolist, ApiError> {
        let data: ItemData<Todolist> = parse_envelope(response)?;
        Ok(data.item)
    }

    pub fn parse_delete_todolist(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_envelope::<serde_json::Value>(response).map(drop)
    }

    pub fn parse_rename_todolist(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_envelope::<serde_json::Value>(response).map(drop)
    }

    // --- tasks ---

    pub fn build_list_tasks(&self, todolist_id: &str) -> HttpRequest {
        self.request(HttpMethod::Get, format!("/todo-lists/{todolist_id}/tasks"), None)
    }

    pub fn build_create_task(&self, todolist_id: &str, title: &str) -> Result<HttpRequest, ApiError> {
        let body = to_json(&TitlePayload { title: title.to_string() })?;
        Ok(self.request(
            HttpMethod::Post,
            format!("/todo-lists/{todolist_id}/tasks"),
            Some(body),
        ))
    }

    pub fn build_delete_task(&self, todolist_id: &str, task_id: &str) -> HttpRequest {
        self.request(
            HttpMethod::Delete,
            format!("/todo-lists/{todolist_id}/tasks/{task_id}"),
            None,
        )
    }

    pub fn build_update_task(
        &self,
        todolist_id: &str,
        task_id: &str,
        model: &UpdateTaskModel,
    ) -> Result<HttpRequest, ApiError> {
        let body = to_json(model)?;
        Ok(self.request(
            HttpMethod::Put,
            format!("/todo-lists/{todolist_id}/tasks/{task_id}"),
            Some(body),
        ))
    }

    /// The tasks listing has its own reply shape: an `error` string instead of
    /// a result code.
    pub fn parse_list_tasks(&self, response: HttpResponse) -> Result<Vec<Task>, ApiError> {
        check_status(&response, 200)?;
        let page: GetTasksResponse = from_json(&response.body)?;
        match page.error {
            Some(error) => Err(ApiError::Rejected {
                result_code: 1,
                messages: vec![error],
            }),
            None => Ok(page.items),
        }
    }

    pub fn parse_create_task(&self, response: HttpResponse) -> Result<Task, ApiError> {
        let data: ItemData<Task> = parse_envelope(response)?;
        Ok(data.item)
    }

    pub fn parse_delete_task(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_envelope::<serde_json::Value>(response).map(drop)
    }

    pub fn parse_update_task(&self, response: HttpResponse) -> Result<Task, ApiError> {
        let data: ItemData<Task> = parse_envelope(response)?;
        Ok(data.item)
    }

    fn request(&self, method: HttpMethod, path: String, body: Option<String>) -> HttpRequest {
        let mut headers = Vec::new();
        if body.is_some() {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }
        if let Some(api_key) = &self.api_key {
            headers.push(("API-KEY".to_string(), api_key.clone()));
        }
        if let Some(token) = &self.token {
            headers.push(("authorization".to_string(), format!("Bearer {token}")));
        }
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers,
            body,
        }
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

/// Check the status, decode the envelope and unwrap `data` on result code 0.
fn parse_envelope<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response, 200)?;
    // Rejections carry `data: {}`, so peek at the code before decoding `T`.
    let envelope: BaseResponse<serde_json::Value> = from_json(&response.body)?;
    if envelope.result_code != 0 {
        return Err(ApiError::Rejected {
            result_code: envelope.result_code,
            messages: envelope.messages,
        });
    }
    serde_json::from_value(envelope.data).map_err(|e| ApiError::Deserialization(e.to_string()))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}
