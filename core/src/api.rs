//! Async student operations over a pluggable `Transport`.
//!
//! Each call performs exactly one round-trip: build, send, parse. There are
//! no retries, timeouts or cancellation hooks; a transport that never
//! resolves leaves the call pending. Failures are logged before they are
//! returned to the caller.

use tracing::error;

use crate::client::StudentClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{NewStudent, Reply, Student, StudentSummary, UpdateStudent};

#[derive(Debug, Clone)]
pub struct StudentApi<T> {
    client: StudentClient,
    transport: T,
}

#[cfg(feature = "reqwest")]
impl StudentApi<crate::http::HttpTransport> {
    /// An API over a fresh reqwest-backed transport.
    pub fn connect(base_url: &str) -> Self {
        Self::new(StudentClient::new(base_url), crate::http::HttpTransport::new())
    }
}

impl<T: Transport> StudentApi<T> {
    pub fn new(client: StudentClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &StudentClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        let request = self.client.build_list_students();
        self.round_trip("fetching students", Ok(request), StudentClient::parse_list_students)
            .await
    }

    pub async fn create_student(
        &self,
        input: &NewStudent,
    ) -> Result<Reply<StudentSummary>, ApiError> {
        let request = self.client.build_create_student(input);
        self.round_trip("adding student", request, StudentClient::parse_create_student)
            .await
    }

    pub async fn get_student(&self, id: u32) -> Result<Student, ApiError> {
        let request = self.client.build_get_student(id);
        self.round_trip("searching student", Ok(request), StudentClient::parse_get_student)
            .await
    }

    pub async fn update_student(&self, id: u32, input: &UpdateStudent) -> Result<Reply, ApiError> {
        let request = self.client.build_update_student(id, input);
        self.round_trip("updating student", request, StudentClient::parse_update_student)
            .await
    }

    pub async fn delete_student(&self, id: u32) -> Result<Reply, ApiError> {
        let request = self.client.build_delete_student(id);
        self.round_trip("deleting student", Ok(request), StudentClient::parse_delete_student)
            .await
    }

    async fn round_trip<R>(
        &self,
        action: &'static str,
        request: Result<HttpRequest, ApiError>,
        parse: fn(&StudentClient, HttpResponse) -> Result<R, ApiError>,
    ) -> Result<R, ApiError> {
        let result: Result<R, ApiError> = async {
            let response = self.send(request?).await?;
            parse(&self.client, response)
        }
        .await;
        if let Err(e) = &result {
            error!(action, error = %e, "student api call failed");
        }
        result
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.transport
            .send(request)
            .await
            .map_err(|source| ApiError::Unreachable {
                base_url: self.client.base_url().to_string(),
                source,
            })
    }
}
