use ajax_core::{Error, HttpClient, HttpResponse, Result};
use async_trait::async_trait;

/// Async HTTP client implementation using reqwest.
///
/// This is a fully async HTTP client built on top of tokio/hyper and must be
/// driven from a tokio runtime. No request timeout is configured; pass a
/// pre-built `reqwest::Client` to [`ReqwestClient::with_client`] to change
/// that or to add cookies, proxies and the like.
///
/// # Example
///
/// ```ignore
/// use ajax_native::{ReqwestClient, RequestClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = RequestClient::new("http://localhost:8000".to_string(), ReqwestClient::new())?;
///     let task = client.get("/api/tasks/1").await?;
///     println!("{task}");
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a new reqwest HTTP client with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a new reqwest HTTP client with a custom client configuration.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn into_response(response: reqwest::Response) -> Result<HttpResponse> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| Error::ResponseBody(e.to_string()))?;
    log::trace!("response status {} ({} bytes)", status, body.len());
    Ok(HttpResponse { status, body })
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str, headers: &[(&str, String)]) -> Result<HttpResponse> {
        let mut request = self.client.get(url);

        for (name, value) in headers {
            request = request.header(*name, value.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::HttpGet(e.to_string()))?;

        into_response(response).await
    }

    async fn post_json(
        &self,
        url: &str,
        headers: &[(&str, String)],
        json_body: &str,
    ) -> Result<HttpResponse> {
        let mut request = self.client.post(url).body(json_body.to_string());

        for (name, value) in headers {
            request = request.header(*name, value.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::HttpPost(e.to_string()))?;

        into_response(response).await
    }
}
