// services/api_client.rs
use reqwest::header::{self, HeaderValue};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::errors::{AppError, Result};

/// Parsed body of a successful call together with its HTTP status.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: u16,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, status: u16) -> Self {
        ApiResponse { data, status }
    }
}

/// Thin JSON-over-HTTP client shared by every adapter. It knows the base URL
/// and how to turn a response into `ApiResponse` or `AppError::Api`; it does
/// not interpret status codes beyond success and failure.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let base_url = Url::parse(&config.api_base_url).map_err(|e| {
            AppError::configuration(format!(
                "API_BASE_URL '{}' is not a valid URL: {}",
                config.api_base_url, e
            ))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::configuration(format!(
                "API_BASE_URL '{}' cannot be used as a base URL",
                config.api_base_url
            )));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(ApiClient { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL extended with percent-encoded path segments.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&'static str, String)],
        fallback_message: &str,
    ) -> Result<ApiResponse<T>> {
        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        self.send(request, fallback_message).await
    }

    pub async fn post<B, T>(&self, url: Url, body: &B, fallback_message: &str) -> Result<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.client.post(url).json(body);
        self.send(request, fallback_message).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        fallback_message: &str,
    ) -> Result<ApiResponse<T>> {
        let request_id = Uuid::new_v4();
        let mut request = request.build()?;
        request
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let method = request.method().clone();
        let url = request.url().clone();
        info!(%request_id, "{} {}", method, url);

        let response = self.client.execute(request).await.map_err(|e| {
            error!(%request_id, "{} {} failed: {}", method, url, e);
            AppError::from(e)
        })?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!(%request_id, "{} {} -> {} ({} bytes)", method, url, status, body.len());

        handle_response(status, &body, fallback_message)
    }
}

fn error_fields(body: &Value) -> (Option<String>, Option<String>) {
    let source = match body.get("error") {
        Some(nested @ Value::Object(_)) => nested,
        _ => body,
    };
    let text = |key: &str| {
        source
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    (text("code"), text("message"))
}

/// Body is parsed as JSON whatever the status; an empty body reads as `null`.
pub(crate) fn handle_response<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
    fallback_message: &str,
) -> Result<ApiResponse<T>> {
    let parsed: std::result::Result<Value, serde_json::Error> = if body.is_empty() {
        Ok(Value::Null)
    } else {
        serde_json::from_slice(body)
    };

    if !status.is_success() {
        let (code, message) = parsed.as_ref().map(error_fields).unwrap_or((None, None));
        let message = message.unwrap_or_else(|| fallback_message.to_string());
        error!("Backend answered {}: {} ({:?})", status, message, code);
        return Err(AppError::api(status.as_u16(), code, message));
    }

    let value = parsed?;
    let data = serde_json::from_value(value)?;
    Ok(ApiResponse::new(data, status.as_u16()))
}
