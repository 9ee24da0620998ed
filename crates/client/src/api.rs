//! HTTP access to the student backend.

use serde::de::DeserializeOwned;
use shared_types::{AppError, ClientConfig, Student, StudentRequest};

/// Operations the controller needs from the backend.
///
/// Every method resolves to `Err(AppError)` on transport failure or a
/// non-2xx response; nothing panics or retries.
#[allow(async_fn_in_trait)]
pub trait StudentApi {
    async fn list_students(&self) -> Result<Vec<Student>, AppError>;
    async fn get_student(&self, id: i64) -> Result<Student, AppError>;
    async fn create_student(&self, req: &StudentRequest) -> Result<Student, AppError>;
    async fn update_student(&self, id: i64, req: &StudentRequest) -> Result<Student, AppError>;
    async fn delete_student(&self, id: i64) -> Result<(), AppError>;
    async fn list_departments(&self) -> Result<Vec<String>, AppError>;
}

/// `StudentApi` over REST with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpStudentApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStudentApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/students{}", self.base_url, path)
    }
}

async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response, AppError> {
    let response = request
        .send()
        .await
        .map_err(|e| AppError::network(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(AppError::from_response(status.as_u16(), &body))
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
    response
        .json::<T>()
        .await
        .map_err(|e| AppError::malformed_body(format!("Invalid response body: {e}")))
}

impl StudentApi for HttpStudentApi {
    #[tracing::instrument(skip(self))]
    async fn list_students(&self) -> Result<Vec<Student>, AppError> {
        let response = send(self.client.get(self.url(""))).await?;
        decode(response).await
    }

    #[tracing::instrument(skip(self))]
    async fn get_student(&self, id: i64) -> Result<Student, AppError> {
        let response = send(self.client.get(self.url(&format!("/{id}")))).await?;
        decode(response).await
    }

    #[tracing::instrument(skip(self, req))]
    async fn create_student(&self, req: &StudentRequest) -> Result<Student, AppError> {
        let response = send(self.client.post(self.url("")).json(req)).await?;
        decode(response).await
    }

    #[tracing::instrument(skip(self, req))]
    async fn update_student(&self, id: i64, req: &StudentRequest) -> Result<Student, AppError> {
        let response = send(self.client.put(self.url(&format!("/{id}"))).json(req)).await?;
        decode(response).await
    }

    // Response body is ignored.
    #[tracing::instrument(skip(self))]
    async fn delete_student(&self, id: i64) -> Result<(), AppError> {
        send(self.client.delete(self.url(&format!("/{id}")))).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn list_departments(&self) -> Result<Vec<String>, AppError> {
        let response = send(self.client.get(self.url("/departments"))).await?;
        decode(response).await
    }
}
