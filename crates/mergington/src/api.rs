use gloo_net::http::Response;

use crate::data::ErrorDetail;

#[derive(Debug, Clone, Copy)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    InternalServerError,
    #[error("Network error: {0}")]
    NetworkError(gloo_net::Error),
    #[error("Parse error: {0}")]
    ParseError(gloo_net::Error),
    #[error("Unexpected response status code: {0}")]
    UnexpectedStatusCode(u16),
}

impl ApiError {
    /// The message to show to a student. For rejected requests this is the
    /// `detail` sent by the server.
    pub fn detail(&self) -> String {
        match self {
            ApiError::NotFound(detail) | ApiError::BadRequest(detail) => detail.clone(),
            other => other.to_string(),
        }
    }
}

type ApiResult<T> = Result<T, ApiError>;

/// Maps a non-2xx status to an error, preferring the server's `detail`.
fn error_for_status(status: u16, detail: Option<String>, endpoint: &str) -> ApiError {
    match status {
        400..=499 if status != 404 => ApiError::BadRequest(
            detail.unwrap_or_else(|| format!("Bad request to {endpoint}")),
        ),
        404 => ApiError::NotFound(detail.unwrap_or_else(|| format!("{endpoint} not found"))),
        500..=599 => ApiError::InternalServerError,
        status => ApiError::UnexpectedStatusCode(status),
    }
}

async fn handle_response_status(response: Response, endpoint: &str) -> ApiResult<Response> {
    match response.status() {
        200..=299 => Ok(response),
        status => {
            // Rejections carry `{"detail": ...}`, framework errors may not.
            let detail = response
                .json::<ErrorDetail>()
                .await
                .ok()
                .map(|body| body.detail);
            Err(error_for_status(status, detail, endpoint))
        }
    }
}

async fn parse_json_response<T>(response: Response) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned,
{
    response.json::<T>().await.map_err(ApiError::ParseError)
}

async fn handle_json_response<T>(response: Response, endpoint: &str) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let validated_response = handle_response_status(response, endpoint).await?;
    parse_json_response(validated_response).await
}

#[async_trait::async_trait(?Send)]
pub trait ApiClient {
    async fn make_request(&self, method: HttpMethod, endpoint: &str) -> ApiResult<Response>;

    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned;

    /// POST without a body, all inputs travel in the path and query string.
    async fn post<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned;

    async fn delete<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned;
}

pub struct HttpApiClient {
    root_url: String,
}

impl HttpApiClient {
    /// Creates a client for `root_url`. An empty root sends requests relative
    /// to the page origin.
    pub fn new(root_url: impl Into<String>) -> Self {
        Self {
            root_url: root_url.into(),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl ApiClient for HttpApiClient {
    async fn make_request(&self, method: HttpMethod, endpoint: &str) -> ApiResult<Response> {
        let url = format!("{}{}", self.root_url, endpoint);

        let request = match method {
            HttpMethod::Get => gloo_net::http::Request::get(&url),
            HttpMethod::Post => gloo_net::http::Request::post(&url),
            HttpMethod::Delete => gloo_net::http::Request::delete(&url),
        };

        request.send().await.map_err(ApiError::NetworkError)
    }

    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.make_request(HttpMethod::Get, endpoint).await?;
        handle_json_response(response, endpoint).await
    }

    async fn post<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.make_request(HttpMethod::Post, endpoint).await?;
        handle_json_response(response, endpoint).await
    }

    async fn delete<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.make_request(HttpMethod::Delete, endpoint).await?;
        handle_json_response(response, endpoint).await
    }
}
