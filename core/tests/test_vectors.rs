//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and the expected parse result or error kind. Comparing parsed JSON (not
//! raw strings) avoids false negatives from field-ordering differences.

use serde::Serialize;
use serde_json::Value;
use todolist_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, TodolistClient, UpdateTaskModel};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> TodolistClient {
    TodolistClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn error_kind(err: &ApiError) -> &'static str {
    match err {
        ApiError::NotFound => "not_found",
        ApiError::Http { .. } => "http",
        ApiError::Rejected { .. } => "rejected",
        ApiError::Deserialization(_) => "deserialization",
        ApiError::Serialization(_) => "serialization",
        ApiError::Transport(_) => "transport",
    }
}

fn str_input<'a>(case: &'a Value, key: &str) -> &'a str {
    case["input"][key].as_str().unwrap()
}

fn check_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.path, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: path");

    let expected_headers: Vec<(String, String)> = expected["headers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let arr = h.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect();
    assert_eq!(req.headers, expected_headers, "{name}: headers");

    let body = match req.body.as_deref() {
        Some(raw) => serde_json::from_str(raw).unwrap(),
        None => Value::Null,
    };
    assert_eq!(body, expected["body"], "{name}: body");
}

fn simulated_response(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

fn check_outcome<T: Serialize>(name: &str, case: &Value, result: Result<T, ApiError>) {
    match (case.get("expected_error").and_then(Value::as_str), result) {
        (Some(kind), Err(err)) => assert_eq!(error_kind(&err), kind, "{name}: error kind"),
        (Some(kind), Ok(_)) => panic!("{name}: expected {kind} error, got success"),
        (None, Ok(value)) => {
            let value = serde_json::to_value(value).unwrap();
            assert_eq!(value, case["expected_result"], "{name}: parsed result");
        }
        (None, Err(err)) => panic!("{name}: unexpected error {err}"),
    }
}

// ---------------------------------------------------------------------------
// Todolists
// ---------------------------------------------------------------------------

#[test]
fn todolist_test_vectors() {
    let raw = include_str!("../../test-vectors/todolists.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_req = &case["expected_request"];
        let response = simulated_response(case);

        match case["operation"].as_str().unwrap() {
            "list" => {
                check_request(name, &c.build_list_todolists(), expected_req);
                check_outcome(name, case, c.parse_list_todolists(response));
            }
            "create" => {
                let req = c.build_create_todolist(str_input(case, "title")).unwrap();
                check_request(name, &req, expected_req);
                check_outcome(name, case, c.parse_create_todolist(response));
            }
            "rename" => {
                let req = c
                    .build_rename_todolist(str_input(case, "id"), str_input(case, "title"))
                    .unwrap();
                check_request(name, &req, expected_req);
                check_outcome(name, case, c.parse_rename_todolist(response));
            }
            "delete" => {
                check_request(name, &c.build_delete_todolist(str_input(case, "id")), expected_req);
                check_outcome(name, case, c.parse_delete_todolist(response));
            }
            other => panic!("{name}: unknown operation {other}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

#[test]
fn task_test_vectors() {
    let raw = include_str!("../../test-vectors/tasks.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_req = &case["expected_request"];
        let response = simulated_response(case);
        let todolist_id = str_input(case, "todolist_id");

        match case["operation"].as_str().unwrap() {
            "list" => {
                check_request(name, &c.build_list_tasks(todolist_id), expected_req);
                check_outcome(name, case, c.parse_list_tasks(response));
            }
            "create" => {
                let req = c.build_create_task(todolist_id, str_input(case, "title")).unwrap();
                check_request(name, &req, expected_req);
                check_outcome(name, case, c.parse_create_task(response));
            }
            "update" => {
                let model: UpdateTaskModel =
                    serde_json::from_value(case["input"]["model"].clone()).unwrap();
                let req = c
                    .build_update_task(todolist_id, str_input(case, "task_id"), &model)
                    .unwrap();
                check_request(name, &req, expected_req);
                check_outcome(name, case, c.parse_update_task(response));
            }
            "delete" => {
                let req = c.build_delete_task(todolist_id, str_input(case, "task_id"));
                check_request(name, &req, expected_req);
                check_outcome(name, case, c.parse_delete_task(response));
            }
            other => panic!("{name}: unknown operation {other}"),
        }
    }
}
