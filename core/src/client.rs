//! Stateless HTTP request builder and response parser for the task API.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`; the host executes the round-trip in between.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTask, EditTask, Task, TaskId, ToggleCompletion};

const COLLECTION_PATH: &str = "/api/todos";

/// Synchronous, stateless client for the task API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}{COLLECTION_PATH}", self.base_url)
    }

    fn item_url(&self, id: TaskId) -> String {
        format!("{}{COLLECTION_PATH}/{id}", self.base_url)
    }

    pub fn build_list_tasks(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_task(&self, id: TaskId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_task(&self, input: &CreateTask) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Post, self.collection_url(), input)
    }

    pub fn build_edit_task(&self, id: TaskId, input: &EditTask) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Put, self.item_url(id), input)
    }

    pub fn build_toggle_task(&self, id: TaskId, completed: bool) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Put, self.item_url(id), &ToggleCompletion { completed })
    }

    pub fn build_delete_task(&self, id: TaskId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_tasks(&self, response: HttpResponse) -> Result<Vec<Task>, ApiError> {
        check_status(&response, |status| status == 200)?;
        decode(&response.body)
    }

    pub fn parse_get_task(&self, response: HttpResponse) -> Result<Task, ApiError> {
        check_status(&response, |status| status == 200)?;
        decode(&response.body)
    }

    pub fn parse_create_task(&self, response: HttpResponse) -> Result<Task, ApiError> {
        check_success(&response)?;
        decode(&response.body)
    }

    pub fn parse_update_task(&self, response: HttpResponse) -> Result<Task, ApiError> {
        check_success(&response)?;
        decode(&response.body)
    }

    /// Both a plain 200 and 204 No Content count as a successful delete.
    pub fn parse_delete_task(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_success(&response)
    }

    /// Accept any 2xx response without looking at the body.
    ///
    /// The controller refetches the full list after every mutation, so it
    /// only needs to know whether the backend acknowledged the request.
    pub fn acknowledge(&self, response: &HttpResponse) -> Result<(), ApiError> {
        check_success(response)
    }
}

fn json_request<T: Serialize>(
    method: HttpMethod,
    path: String,
    input: &T,
) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
    Ok(HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

fn check_success(response: &HttpResponse) -> Result<(), ApiError> {
    check_status(response, |_| response.is_success())
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, accept: impl Fn(u16) -> bool) -> Result<(), ApiError> {
    if accept(response.status) {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::types::Priority;

    const TASK_JSON: &str = r#"{"id":1,"title":"Test","description":null,"completed":false,"created_at":"2025-01-02T10:11:12","due_date":null,"priority":null}"#;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:8000")
    }

    #[test]
    fn build_list_tasks_produces_correct_request() {
        let req = client().build_list_tasks();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8000/api/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_task_uses_item_path() {
        let req = client().build_get_task(42);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8000/api/todos/42");
    }

    #[test]
    fn build_create_task_produces_json_post() {
        let input = CreateTask {
            title: "Buy milk".to_string(),
            description: Some("2 liters".to_string()),
            completed: false,
            due_date: NaiveDate::from_ymd_opt(2025, 12, 31),
            priority: Some(Priority::High),
        };
        let req = client().build_create_task(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8000/api/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Buy milk");
        assert_eq!(body["description"], "2 liters");
        assert_eq!(body["completed"], false);
        assert_eq!(body["due_date"], "2025-12-31");
        assert_eq!(body["priority"], "high");
    }

    #[test]
    fn build_toggle_task_sends_only_completed() {
        let req = client().build_toggle_task(3, true).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:8000/api/todos/3");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "completed": true }));
    }

    #[test]
    fn build_edit_task_sends_cleared_fields_as_null() {
        let input = EditTask {
            title: "Renamed".to_string(),
            description: None,
            due_date: None,
            priority: None,
        };
        let req = client().build_edit_task(3, &input).unwrap();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Renamed");
        assert!(body["description"].is_null());
        assert!(body["due_date"].is_null());
        assert!(body["priority"].is_null());
        assert!(body.get("completed").is_none());
    }

    #[test]
    fn build_delete_task_has_no_body() {
        let req = client().build_delete_task(9);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:8000/api/todos/9");
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:8000/");
        assert_eq!(client.build_list_tasks().path, "http://localhost:8000/api/todos");
    }

    #[test]
    fn parse_list_tasks_success() {
        let response = HttpResponse::new(200, format!("[{TASK_JSON}]"));
        let tasks = client().parse_list_tasks(response).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Test");
    }

    #[test]
    fn parse_list_tasks_keeps_records_with_unknown_priority() {
        let body = r#"[
            {"id":1,"title":"Known","completed":false,"created_at":"2025-01-02T10:11:12","priority":"low"},
            {"id":2,"title":"Foreign","completed":false,"created_at":"2025-01-02T10:11:12Z","priority":"urgent"}
        ]"#;
        let tasks = client().parse_list_tasks(HttpResponse::new(200, body)).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].priority, Some(Priority::Low));
        assert_eq!(tasks[1].title, "Foreign");
        assert_eq!(tasks[1].priority, None);
    }

    #[test]
    fn parse_list_tasks_bad_json() {
        let err = client()
            .parse_list_tasks(HttpResponse::new(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_list_tasks_server_error() {
        let err = client()
            .parse_list_tasks(HttpResponse::new(500, "boom"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_get_task_not_found() {
        let err = client().parse_get_task(HttpResponse::new(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_create_task_accepts_201() {
        let task = client()
            .parse_create_task(HttpResponse::new(201, TASK_JSON))
            .unwrap();
        assert_eq!(task.id, 1);
    }

    #[test]
    fn parse_update_task_success() {
        let task = client()
            .parse_update_task(HttpResponse::new(200, TASK_JSON))
            .unwrap();
        assert_eq!(task.title, "Test");
    }

    #[test]
    fn parse_delete_task_accepts_200_and_204() {
        assert!(client().parse_delete_task(HttpResponse::new(204, "")).is_ok());
        assert!(client().parse_delete_task(HttpResponse::new(200, "")).is_ok());
    }

    #[test]
    fn parse_delete_task_not_found() {
        let err = client().parse_delete_task(HttpResponse::new(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn acknowledge_ignores_body() {
        assert!(client().acknowledge(&HttpResponse::new(201, "")).is_ok());
        let err = client()
            .acknowledge(&HttpResponse::new(422, "bad"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 422, .. }));
    }
}
