//! reqwest implementation of [`StudentApi`].

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::{ClientError, StudentApi, StudentPayload};
use crate::student::Student;

#[derive(Deserialize)]
struct DeleteConfirmation {
    id: String,
}

/// Talks to the student routes at `base_url` (e.g. `http://host:5000/api/students`).
#[derive(Clone)]
pub struct HttpStudentApi {
    base_url: String,
    client: Client,
}

impl HttpStudentApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

/// Decode a success body, or turn an error status into `ClientError::Status`
/// carrying the service's `{error}` message.
async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.json::<T>().await?);
    }

    let text = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<Value>(&text)
        .ok()
        .and_then(|body| body.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });
    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl StudentApi for HttpStudentApi {
    async fn list(&self) -> Result<Vec<Student>, ClientError> {
        let resp = self.client.get(&self.base_url).send().await?;
        read_json(resp).await
    }

    async fn create(&self, payload: &StudentPayload) -> Result<Student, ClientError> {
        let resp = self.client.post(&self.base_url).json(payload).send().await?;
        read_json(resp).await
    }

    async fn update(&self, id: &str, payload: &StudentPayload) -> Result<Student, ClientError> {
        let resp = self
            .client
            .put(self.item_url(id))
            .json(payload)
            .send()
            .await?;
        read_json(resp).await
    }

    async fn delete(&self, id: &str) -> Result<String, ClientError> {
        let resp = self.client.delete(self.item_url(id)).send().await?;
        let confirmation: DeleteConfirmation = read_json(resp).await?;
        Ok(confirmation.id)
    }
}
