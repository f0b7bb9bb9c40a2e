//! Client core for the Student Records Management System API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and layers an async
//! `StudentApi` on top that runs each round-trip through a `Transport`.
//! Alongside the request wrappers sit the form helpers the front-end needs:
//! email and GPA validators, a GPA formatter, and a toast `Notifier`.
//!
//! # Design
//! - `StudentClient` is stateless; it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit and every parse path can be tested from plain data.
//! - Every response follows the `{status, message, data}` envelope, decoded
//!   once into `Result<Reply<T>, ApiError>`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod error;
pub mod format;
pub mod http;
pub mod notify;
pub mod types;
pub mod validate;

pub use api::StudentApi;
pub use client::{StudentClient, DEFAULT_BASE_URL};
pub use error::{ApiError, NotifyError, ValidationError};
pub use format::{format_gpa, format_gpa_str, parse_gpa};
#[cfg(feature = "reqwest")]
pub use http::HttpTransport;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use notify::{Notification, NotificationKind, Notifier, TracingSurface, UiSurface};
pub use types::{Envelope, NewStudent, Reply, Student, StudentSummary, UpdateStudent};
pub use validate::{validate_email, validate_gpa};
