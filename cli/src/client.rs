//! Blocking-free REST client for the ATS backend.
//!
//! Mirrors the browser client's helpers: URLs come from `ApiConfig` plus an
//! `endpoints` path, authenticated calls carry a bearer token, and non-2xx
//! responses become `ApiError::Status` with the backend's `{ message }`.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::path::Path;

use ats_core::ApiError;
use ats_core::config::ApiConfig;
use ats_core::endpoints;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::CliError;

#[derive(Clone, Debug)]
pub struct AtsClient {
    http: reqwest::Client,
    config: ApiConfig,
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

impl AtsClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { http: reqwest::Client::new(), config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn builder(&self, method: Method, path: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        let url = self.config.url(path);
        tracing::debug!(%method, %url, "request");
        let builder = self.http.request(method, url);
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let resp = builder.send().await.map_err(transport)?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::from_response(status.as_u16(), &body))
    }

    /// Send a request and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns transport, status, or decode errors.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&(impl Serialize + ?Sized)>,
    ) -> Result<T, ApiError> {
        let mut builder = self.builder(method, path, token);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let resp = self.send(builder).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Like [`Self::request`] but ignores the response body.
    ///
    /// # Errors
    ///
    /// Returns transport or status errors.
    pub async fn request_empty(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&(impl Serialize + ?Sized)>,
    ) -> Result<(), ApiError> {
        let mut builder = self.builder(method, path, token);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.send(builder).await.map(|_| ())
    }

    /// `POST /Documents/upload` with the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the upload is rejected.
    pub async fn upload_document(
        &self,
        token: &str,
        candidate_id: &str,
        document_type: &str,
        path: &Path,
    ) -> Result<(), CliError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| CliError::ReadFile { path: path.to_owned(), source })?;
        let file_name = path
            .file_name()
            .map_or_else(|| "document".to_owned(), |name| name.to_string_lossy().into_owned());
        let form = reqwest::multipart::Form::new()
            .part("file", reqwest::multipart::Part::bytes(bytes).file_name(file_name))
            .text("candidateId", candidate_id.to_owned())
            .text("documentType", document_type.to_owned());
        let builder = self.builder(Method::POST, endpoints::DOCUMENT_UPLOAD, Some(token)).multipart(form);
        self.send(builder).await?;
        Ok(())
    }
}
