//! Stateless HTTP request builder and response parser for the student API.
//!
//! # Design
//! `StudentClient` holds only a `base_url` and carries no mutable state
//! between calls. Each CRUD operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. `StudentApi` glues the two halves around a `Transport`;
//! hosts with their own HTTP stack can drive the halves directly.
//!
//! Every `parse_*` checks the HTTP status first, then decodes the envelope,
//! then checks the envelope status. Read and write operations share this
//! order.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Envelope, NewStudent, Reply, Student, StudentSummary, UpdateStudent};

/// Where the SRMS backend listens by default.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

const LIST_FALLBACK: &str = "Failed to fetch students";
const CREATE_FALLBACK: &str = "Failed to add student";
const GET_FALLBACK: &str = "Student not found";
const UPDATE_FALLBACK: &str = "Failed to update student";
const DELETE_FALLBACK: &str = "Failed to delete student";

/// Update body: the backend reads the target id from the body, so it is
/// repeated next to the changed fields.
#[derive(Serialize)]
struct UpdateBody<'a> {
    id: u32,
    #[serde(flatten)]
    fields: &'a UpdateStudent,
}

/// Synchronous, stateless client for the student records API.
#[derive(Debug, Clone)]
pub struct StudentClient {
    base_url: String,
}

impl Default for StudentClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl StudentClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_students(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/students", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_student(&self, id: u32) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/students/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_student(&self, input: &NewStudent) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/students", self.base_url),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_update_student(
        &self,
        id: u32,
        input: &UpdateStudent,
    ) -> Result<HttpRequest, ApiError> {
        let body = UpdateBody { id, fields: input };
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/students/{id}", self.base_url),
            headers: json_headers(),
            body: Some(to_json(&body)?),
        })
    }

    pub fn build_delete_student(&self, id: u32) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/students/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_students(&self, response: HttpResponse) -> Result<Vec<Student>, ApiError> {
        require_data(decode(&response, LIST_FALLBACK)?)
    }

    pub fn parse_get_student(&self, response: HttpResponse) -> Result<Student, ApiError> {
        require_data(decode(&response, GET_FALLBACK)?)
    }

    pub fn parse_create_student(
        &self,
        response: HttpResponse,
    ) -> Result<Reply<StudentSummary>, ApiError> {
        decode(&response, CREATE_FALLBACK)
    }

    pub fn parse_update_student(&self, response: HttpResponse) -> Result<Reply, ApiError> {
        decode(&response, UPDATE_FALLBACK)
    }

    pub fn parse_delete_student(&self, response: HttpResponse) -> Result<Reply, ApiError> {
        decode(&response, DELETE_FALLBACK)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::SerializationError(e.to_string()))
}

/// Status check, envelope decode, envelope check.
fn decode<T: DeserializeOwned>(response: &HttpResponse, fallback: &str) -> Result<Reply<T>, ApiError> {
    if !response.is_success() {
        return Err(ApiError::HttpError {
            status: response.status,
            body: response.body.clone(),
        });
    }
    let envelope: Envelope<T> = serde_json::from_str(&response.body)
        .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
    envelope.into_result(fallback)
}

fn require_data<T>(reply: Reply<T>) -> Result<T, ApiError> {
    reply
        .data
        .ok_or_else(|| ApiError::DeserializationError("success envelope carried no data".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> StudentClient {
        StudentClient::new("http://localhost:8080/api")
    }

    fn ok(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    fn new_student() -> NewStudent {
        NewStudent {
            id: None,
            name: "Meera".to_string(),
            age: 20,
            course: "Chemistry".to_string(),
            email: "meera@uni.edu".to_string(),
            gpa: 8.7,
            marks: 512,
        }
    }

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(StudentClient::default().base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn build_list_students_produces_correct_request() {
        let req = client().build_list_students();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8080/api/students");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_student_produces_correct_request() {
        let req = client().build_get_student(1001);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8080/api/students/1001");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_student_produces_correct_request() {
        let req = client().build_create_student(&new_student()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8080/api/students");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Meera");
        assert_eq!(body["gpa"], 8.7);
        assert!(body.get("id").is_none());
    }

    #[test]
    fn build_update_student_repeats_id_in_body() {
        let input = UpdateStudent {
            course: Some("Biochemistry".to_string()),
            ..UpdateStudent::default()
        };
        let req = client().build_update_student(1002, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:8080/api/students/1002");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"id": 1002, "course": "Biochemistry"}));
    }

    #[test]
    fn build_delete_student_produces_correct_request() {
        let req = client().build_delete_student(1003);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:8080/api/students/1003");
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = StudentClient::new("http://localhost:8080/api/");
        assert_eq!(client.build_list_students().path, "http://localhost:8080/api/students");
    }

    #[test]
    fn parse_list_students_returns_data() {
        let response = ok(
            r#"{"status":"success","message":"Students retrieved","data":[{"id":1001,"name":"Test","age":20,"course":"CS","email":"t@x.io","gpa":7.5,"marks":300}]}"#,
        );
        let students = client().parse_list_students(response).unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].name, "Test");
        assert_eq!(students[0].gpa, 7.5);
    }

    #[test]
    fn parse_get_student_rejected_uses_server_message() {
        let response = ok(r#"{"status":"error","message":"Student not found"}"#);
        let err = client().parse_get_student(response).unwrap_err();
        assert!(matches!(err, ApiError::Rejected { ref message } if message == "Student not found"));
    }

    #[test]
    fn parse_get_student_without_data_is_an_error() {
        let response = ok(r#"{"status":"success","message":"Student found"}"#);
        let err = client().parse_get_student(response).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_create_student_returns_full_reply() {
        let response = ok(
            r#"{"status":"success","message":"Student added successfully","data":{"id":1001,"name":"Meera"}}"#,
        );
        let reply = client().parse_create_student(response).unwrap();
        assert_eq!(reply.message.as_deref(), Some("Student added successfully"));
        assert_eq!(
            reply.data,
            Some(StudentSummary {
                id: 1001,
                name: "Meera".to_string()
            })
        );
    }

    #[test]
    fn parse_create_student_falls_back_when_message_missing() {
        let response = ok(r#"{"status":"error"}"#);
        let err = client().parse_create_student(response).unwrap_err();
        assert_eq!(err.to_string(), "Failed to add student");
    }

    #[test]
    fn write_paths_check_http_status_first() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: r#"{"status":"success"}"#.to_string(),
        };
        let err = client().parse_update_student(response.clone()).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
        let err = client().parse_delete_student(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_update_and_delete_success() {
        let reply = client()
            .parse_update_student(ok(r#"{"status":"success","message":"Student updated successfully"}"#))
            .unwrap();
        assert_eq!(reply.message.as_deref(), Some("Student updated successfully"));
        assert!(reply.data.is_none());

        let reply = client()
            .parse_delete_student(ok(r#"{"status":"success","message":"Student deleted successfully"}"#))
            .unwrap();
        assert_eq!(reply.message.as_deref(), Some("Student deleted successfully"));
    }

    #[test]
    fn per_operation_fallback_messages() {
        let bare = || ok(r#"{"status":"error"}"#);
        let c = client();
        assert_eq!(c.parse_list_students(bare()).unwrap_err().to_string(), LIST_FALLBACK);
        assert_eq!(c.parse_get_student(bare()).unwrap_err().to_string(), GET_FALLBACK);
        assert_eq!(c.parse_update_student(bare()).unwrap_err().to_string(), UPDATE_FALLBACK);
        assert_eq!(c.parse_delete_student(bare()).unwrap_err().to_string(), DELETE_FALLBACK);
    }

    #[test]
    fn parse_list_students_bad_json() {
        let err = client().parse_list_students(ok("not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
