use std::sync::Arc;

use log::{debug, error, warn};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use cvibe_core::{Config, CredentialStore};

use crate::envelope::{self, Envelope};
use crate::error::{ApiError, ApiResult};

/// Typed entry point for every CVibe backend call.
///
/// Holds the base URL, the shared HTTP client, and a read handle on the
/// credential store. The store is written by the session manager only; this
/// client reads the access token on each outgoing request and attaches it
/// as a bearer header when present. A missing credential is not an error
/// here, the backend is the authority on rejecting unauthenticated calls.
#[derive(Clone)]
pub struct CvibeClient {
    http: Client,
    api_base: String,
    credentials: Arc<dyn CredentialStore>,
}

impl CvibeClient {
    pub fn new(config: &Config, credentials: Arc<dyn CredentialStore>) -> Self {
        CvibeClient {
            http: Client::new(),
            api_base: config.api_base.clone(),
            credentials,
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    async fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.credentials.access_token().await {
            Some(token) => builder.header("Authorization", format!("Bearer {token}")),
            None => builder,
        }
    }

    /// Single fire-and-forget request: no retry, no caching, no timeout
    /// enforcement. Returns the status and decoded JSON body, normalizing
    /// transport and decode failures.
    async fn send(
        &self,
        builder: RequestBuilder,
    ) -> ApiResult<(reqwest::StatusCode, serde_json::Value)> {
        let builder = self.authorize(builder).await;
        let response = builder.send().await.map_err(|err| {
            error!("API request failed: {err}");
            ApiError::Network(err.to_string())
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|err| {
            error!("Failed to read response body: {err}");
            ApiError::Network(err.to_string())
        })?;

        match serde_json::from_slice::<serde_json::Value>(&body) {
            Ok(value) => Ok((status, value)),
            Err(err) if !status.is_success() => {
                // Non-JSON error page; the status line is all we have.
                warn!("Non-JSON error response ({status}): {err}");
                Err(ApiError::Status {
                    status: status.as_u16(),
                    message: format!("HTTP {status}"),
                })
            }
            Err(err) => Err(ApiError::Decode(err.to_string())),
        }
    }

    fn check_status(status: reqwest::StatusCode, value: &serde_json::Value) -> ApiResult<()> {
        if status.is_success() {
            return Ok(());
        }
        let message =
            envelope::error_message_from_value(value).unwrap_or_else(|| format!("HTTP {status}"));
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    /// Run a prepared request and decode the envelope, requiring data.
    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let (status, value) = self.send(builder).await?;
        Self::check_status(status, &value)?;

        let envelope: Envelope<T> = envelope::decode(value).map_err(ApiError::Decode)?;
        if !envelope.success {
            return Err(ApiError::Backend(envelope.error_message()));
        }
        envelope
            .data
            .ok_or_else(|| ApiError::Decode("response envelope missing data".to_string()))
    }

    /// Run a prepared request for a void operation; a successful envelope
    /// with no data is fine.
    async fn execute_unit(&self, builder: RequestBuilder) -> ApiResult<()> {
        let (status, value) = self.send(builder).await?;
        Self::check_status(status, &value)?;

        let envelope: Envelope<serde_json::Value> =
            envelope::decode(value).map_err(ApiError::Decode)?;
        if !envelope.success {
            return Err(ApiError::Backend(envelope.error_message()));
        }
        Ok(())
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        debug!("GET {path}");
        self.execute(self.http.get(self.url(path))).await
    }

    pub(crate) async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        debug!("GET {path} ({} query params)", query.len());
        self.execute(self.http.get(self.url(path)).query(query))
            .await
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &(impl Serialize + ?Sized),
    ) -> ApiResult<T> {
        debug!("POST {path}");
        self.execute(self.http.post(self.url(path)).json(body))
            .await
    }

    pub(crate) async fn post_unit(
        &self,
        path: &str,
        body: &(impl Serialize + ?Sized),
    ) -> ApiResult<()> {
        debug!("POST {path}");
        self.execute_unit(self.http.post(self.url(path)).json(body))
            .await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        debug!("POST {path}");
        self.execute(self.http.post(self.url(path))).await
    }

    pub(crate) async fn post_empty_unit(&self, path: &str) -> ApiResult<()> {
        debug!("POST {path}");
        self.execute_unit(self.http.post(self.url(path))).await
    }

    pub(crate) async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &(impl Serialize + ?Sized),
    ) -> ApiResult<T> {
        debug!("PUT {path}");
        self.execute(self.http.put(self.url(path)).json(body)).await
    }

    pub(crate) async fn put_unit(
        &self,
        path: &str,
        body: &(impl Serialize + ?Sized),
    ) -> ApiResult<()> {
        debug!("PUT {path}");
        self.execute_unit(self.http.put(self.url(path)).json(body))
            .await
    }

    pub(crate) async fn put_empty_unit(&self, path: &str) -> ApiResult<()> {
        debug!("PUT {path}");
        self.execute_unit(self.http.put(self.url(path))).await
    }

    pub(crate) async fn delete_unit(&self, path: &str) -> ApiResult<()> {
        debug!("DELETE {path}");
        self.execute_unit(self.http.delete(self.url(path))).await
    }

    /// Multipart upload: single `file` field, bearer credential attached,
    /// no JSON content type.
    pub(crate) async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ApiResult<T> {
        debug!("POST {path} (multipart, {} bytes)", bytes.len());
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);
        self.execute(self.http.post(self.url(path)).multipart(form))
            .await
    }
}
