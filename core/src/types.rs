//! Domain DTOs and the response envelope for the student records API.
//!
//! # Design
//! The client passes student data through rather than enforcing a schema:
//! every field except `id` defaults when missing, and unknown fields are
//! collected in `extra` and written back unchanged.
//!
//! `Envelope<T>` is the raw wire shape. It is decoded once per response and
//! immediately turned into `Result<Reply<T>, ApiError>`, so the rest of the
//! crate never re-checks `status` strings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::format::format_gpa;

/// The only envelope status that counts as success.
pub const STATUS_SUCCESS: &str = "success";

/// A student record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Student {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub gpa: f64,
    #[serde(default)]
    pub marks: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Student {
    /// GPA rendered with two decimals, e.g. `"8.50"`.
    pub fn display_gpa(&self) -> String {
        format_gpa(self.gpa)
    }
}

/// Request payload for creating a student. With `id` absent the backend
/// assigns the next free id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewStudent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
    pub age: u32,
    pub course: String,
    pub email: String,
    pub gpa: f64,
    #[serde(default)]
    pub marks: u32,
}

/// Request payload for updating a student. Only the fields present in the
/// JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateStudent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marks: Option<u32>,
}

/// `data` of a successful create: the assigned id and the stored name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudentSummary {
    pub id: u32,
    #[serde(default)]
    pub name: String,
}

/// Raw `{status, message, data}` wrapper every response is expected to follow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// Split into the success payload or a `Rejected` error. A rejected
    /// envelope without a message (or with an empty one) uses `fallback`.
    pub fn into_result(self, fallback: &str) -> Result<Reply<T>, ApiError> {
        if self.is_success() {
            return Ok(Reply {
                message: self.message,
                data: self.data,
            });
        }
        let message = self
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        Err(ApiError::Rejected { message })
    }
}

/// The success side of an envelope, returned whole by write operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T = Value> {
    pub message: Option<String>,
    pub data: Option<T>,
}
