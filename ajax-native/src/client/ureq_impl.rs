use std::io::Read;

use ajax_core::{Error, HttpClient, HttpResponse, Result};
use async_trait::async_trait;

/// Minimal HTTP client implementation using ureq.
///
/// This is a lightweight, blocking HTTP client that's perfect for basic needs.
/// Each call blocks the current thread until the response is read, so it
/// suits command-line tools driving the client with `block_on`.
///
/// An agent from [`UreqClient::new`] keeps ureq's default connect timeout
/// (30 seconds) and sets no read or overall timeout. Response bodies are
/// read without ureq's 10 MB `into_string` cap, matching [`HttpClient`]
/// implementations built on reqwest.
///
/// # Example
///
/// ```ignore
/// use ajax_native::{UreqClient, RequestClient};
/// use futures::executor::block_on;
///
/// let client = RequestClient::new("http://localhost:8000".to_string(), UreqClient::new())?;
/// let task = block_on(client.get("/api/tasks/1"))?;
/// ```
#[derive(Clone)]
pub struct UreqClient {
    agent: ureq::Agent,
}

impl UreqClient {
    /// Create a new ureq HTTP client with default settings.
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    /// Create a new ureq HTTP client from a pre-configured agent.
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::new()
    }
}

// ureq reports 4xx/5xx as errors; hand those back as plain responses so the
// status is judged in one place.
fn into_response(
    result: std::result::Result<ureq::Response, ureq::Error>,
    on_transport: fn(String) -> Error,
) -> Result<HttpResponse> {
    let response = match result {
        Ok(response) => response,
        Err(ureq::Error::Status(_, response)) => response,
        Err(e) => return Err(on_transport(e.to_string())),
    };
    let status = response.status();
    let mut body = String::new();
    response
        .into_reader()
        .read_to_string(&mut body)
        .map_err(|e| Error::ResponseBody(e.to_string()))?;
    log::trace!("response status {} ({} bytes)", status, body.len());
    Ok(HttpResponse { status, body })
}

#[async_trait]
impl HttpClient for UreqClient {
    async fn get(&self, url: &str, headers: &[(&str, String)]) -> Result<HttpResponse> {
        let mut request = self.agent.get(url);

        for (name, value) in headers {
            request = request.set(name, value.as_str());
        }

        // Perform blocking request (wrapped in async for trait compatibility)
        into_response(request.call(), Error::HttpGet)
    }

    async fn post_json(
        &self,
        url: &str,
        headers: &[(&str, String)],
        json_body: &str,
    ) -> Result<HttpResponse> {
        let mut request = self.agent.post(url);

        for (name, value) in headers {
            request = request.set(name, value.as_str());
        }

        // Perform blocking request (wrapped in async for trait compatibility)
        into_response(request.send_string(json_body), Error::HttpPost)
    }
}
