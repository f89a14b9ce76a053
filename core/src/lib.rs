//! Client core for the todolist service.
//!
//! # Overview
//! Keeps a client-side store of todolists and their tasks in sync with the
//! remote REST API. Requests are built and responses parsed as plain data
//! (host-does-IO pattern); a [`Transport`] performs the round-trip.
//!
//! # Design
//! - `TodolistClient` is stateless: configuration in, `HttpRequest` out,
//!   `HttpResponse` in, typed result out.
//! - `operations` holds one async function per API-backed action. Each
//!   returns the action to apply on success, or the `ApiError`.
//! - `store` holds the state, the pure reducers and `Store`, which sequences
//!   request status, operation and reducer.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod operations;
pub mod store;
pub mod transport;
pub mod types;

pub use client::TodolistClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::{reduce, Action, RootState, Store};
pub use transport::{ReqwestTransport, Transport};
pub use types::{
    DomainTodolist, FilterValue, Task, TaskPriority, TaskStatus, Todolist, UpdateTaskModel,
};
