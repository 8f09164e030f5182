//! HTTP client for the hosted backend.
//!
//! One shared client issues every request: row CRUD through the REST
//! surface (`/rest/v1/{table}`) and serverless function invocations
//! (`/functions/v1/{name}`). Authentication is two public headers, the
//! project anon key and the caller's bearer token; row visibility is
//! enforced server-side per authenticated user.

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use smartplan_core::errors::{Error, GatewayError, Result};

/// Default timeout for backend requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Write requests ask for the authoritative row back in the response.
const PREFER_REPRESENTATION: &str = "return=representation";

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    hint: Option<String>,
}

/// Shared HTTP client for the backend's REST tables and functions.
#[derive(Debug, Clone)]
pub struct BaasClient {
    client: reqwest::Client,
    base_url: String,
    api_key: HeaderValue,
    auth_header: HeaderValue,
}

impl BaasClient {
    /// Create a new backend client for an authenticated user.
    ///
    /// # Errors
    ///
    /// Returns an error if either key cannot form a valid header or the
    /// HTTP client cannot be initialized.
    pub fn new(base_url: &str, anon_key: &str, access_token: &str) -> Result<Self> {
        let api_key = HeaderValue::from_str(anon_key)
            .map_err(|e| Error::Unexpected(format!("Invalid anon key format: {}", e)))?;
        let auth_header = HeaderValue::from_str(&format!("Bearer {}", access_token))
            .map_err(|e| Error::Unexpected(format!("Invalid access token format: {}", e)))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            auth_header,
        })
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("apikey", self.api_key.clone());
        headers.insert(AUTHORIZATION, self.auth_header.clone());
        headers
    }

    fn table_url(&self, table: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}/rest/v1/{}", self.base_url, table)
        } else {
            format!("{}/rest/v1/{}?{}", self.base_url, table, query)
        }
    }

    /// Select rows from a table. `query` is a pre-encoded filter string.
    pub async fn select_rows<T: DeserializeOwned>(&self, table: &str, query: &str) -> Result<Vec<T>> {
        let url = self.table_url(table, query);
        debug!("[Gateway] GET {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(request_error)?;

        parse_rows(response).await
    }

    /// Insert a single row and return the authoritative created record.
    pub async fn insert_row<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.table_url(table, "");
        debug!("[Gateway] POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.headers())
            .header("Prefer", PREFER_REPRESENTATION)
            .json(body)
            .send()
            .await
            .map_err(request_error)?;

        let mut rows: Vec<T> = parse_rows(response).await?;
        if rows.is_empty() {
            return Err(GatewayError::ResponseParse(
                "Insert returned no representation".to_string(),
            )
            .into());
        }
        Ok(rows.remove(0))
    }

    /// Patch rows matching `query` and return the updated representations.
    pub async fn patch_rows<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &str,
        query: &str,
        body: &B,
    ) -> Result<Vec<T>> {
        let url = self.table_url(table, query);
        debug!("[Gateway] PATCH {}", url);

        let response = self
            .client
            .patch(&url)
            .headers(self.headers())
            .header("Prefer", PREFER_REPRESENTATION)
            .json(body)
            .send()
            .await
            .map_err(request_error)?;

        parse_rows(response).await
    }

    /// Delete rows matching `query` and return the deleted representations.
    pub async fn delete_rows<T: DeserializeOwned>(&self, table: &str, query: &str) -> Result<Vec<T>> {
        let url = self.table_url(table, query);
        debug!("[Gateway] DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .headers(self.headers())
            .header("Prefer", PREFER_REPRESENTATION)
            .send()
            .await
            .map_err(request_error)?;

        parse_rows(response).await
    }

    /// Invoke a serverless function and return the raw status and body.
    ///
    /// Functions report domain failures both as non-2xx statuses and as
    /// `{error}` payloads inside a 200, so callers decode the body
    /// themselves.
    pub async fn invoke_function<B: Serialize>(
        &self,
        name: &str,
        body: &B,
    ) -> Result<(StatusCode, String)> {
        let url = format!("{}/functions/v1/{}", self.base_url, name);
        debug!("[Gateway] POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.headers())
            .json(body)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::ResponseParse(format!("Failed to read response: {}", e)))?;
        Ok((status, body))
    }
}

fn request_error(err: reqwest::Error) -> Error {
    GatewayError::RequestFailed(err.to_string()).into()
}

async fn parse_rows<T: DeserializeOwned>(response: reqwest::Response) -> Result<Vec<T>> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| GatewayError::ResponseParse(format!("Failed to read response: {}", e)))?;

    if !status.is_success() {
        return Err(error_from_response(status, &body));
    }

    decode_rows(&body)
}

/// Decode a JSON array of rows; an empty body counts as no rows.
pub(crate) fn decode_rows<T: DeserializeOwned>(body: &str) -> Result<Vec<T>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(body).map_err(|e| {
        GatewayError::ResponseParse(format!(
            "{} - {}",
            e,
            body.chars().take(200).collect::<String>()
        ))
        .into()
    })
}

/// Map a non-success response to the uniform gateway error taxonomy.
pub(crate) fn error_from_response(status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|err| err.message.or(err.error).or(err.hint))
        .unwrap_or_else(|| format!("HTTP {}", status));

    let gateway_error = match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GatewayError::Unauthorized(message),
        StatusCode::NOT_FOUND => GatewayError::NotFound(message),
        _ => GatewayError::Api(message),
    };
    gateway_error.into()
}
