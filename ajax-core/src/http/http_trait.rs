use async_trait::async_trait;

use crate::error::Result;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal async HTTP client trait that can be implemented with any HTTP library.
///
/// This allows consumers to bring their own HTTP client implementation.
/// You can use any HTTP library you prefer: hyper, isahc, surf, ureq,
/// platform-specific APIs (fetch, NSURLSession, etc.), or an in-memory fake
/// in tests.
///
/// Implementations only report transport problems as errors. A response
/// that arrived is returned as an [`HttpResponse`] whatever its status;
/// judging the status is the job of [`crate::RequestClient`].
///
/// # Implementing the trait
///
/// ```ignore
/// use async_trait::async_trait;
/// use ajax_core::{HttpClient, HttpResponse, Result};
///
/// #[derive(Clone)]
/// struct MyHttpClient {
///     // Your HTTP client here
/// }
///
/// #[async_trait]
/// impl HttpClient for MyHttpClient {
///     async fn get(&self, url: &str, headers: &[(&str, String)]) -> Result<HttpResponse> {
///         Ok(HttpResponse::new(200, "{}"))
///     }
///
///     async fn post_json(
///         &self,
///         url: &str,
///         headers: &[(&str, String)],
///         json_body: &str,
///     ) -> Result<HttpResponse> {
///         Ok(HttpResponse::new(200, "{}"))
///     }
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync + Clone {
    /// Perform a GET request.
    ///
    /// # Arguments
    /// * `url` - The full URL to request
    /// * `headers` - Request headers as name/value pairs
    async fn get(&self, url: &str, headers: &[(&str, String)]) -> Result<HttpResponse>;

    /// Perform a POST request with a JSON body.
    ///
    /// # Arguments
    /// * `url` - The full URL to request
    /// * `headers` - Request headers as name/value pairs
    /// * `json_body` - The JSON body as a string
    async fn post_json(
        &self,
        url: &str,
        headers: &[(&str, String)],
        json_body: &str,
    ) -> Result<HttpResponse>;
}
