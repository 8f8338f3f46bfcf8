use std::fmt;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use url::Url;

use crate::csrf::CsrfToken;
use crate::error::{Error, RequestError, Result};
use crate::http::headers::{
    ACCEPT, APPLICATION_JSON, CONTENT_TYPE, XML_HTTP_REQUEST, X_CSRF_TOKEN, X_REQUESTED_WITH,
};
use crate::http::{HttpClient, HttpResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

/// A single call to the application server.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub url: String,
    pub method: Method,
    pub body: Option<Value>,
}

impl Request {
    pub fn get(url: impl Into<String>) -> Self {
        Request {
            url: url.into(),
            method: Method::Get,
            body: None,
        }
    }

    pub fn post(url: impl Into<String>, body: Value) -> Self {
        Request {
            url: url.into(),
            method: Method::Post,
            body: Some(body),
        }
    }
}

/// JSON client for the application server.
///
/// Generic over the HTTP client implementation, allowing consumers to provide
/// their own HTTP client by implementing the `HttpClient` trait.
///
/// Every call is a single attempt. Failures of any kind come back as a
/// [`RequestError`]; showing them to the user is left to the caller, see
/// [`crate::notify::Notifying`].
#[derive(Clone)]
pub struct RequestClient<H: HttpClient> {
    http_client: H,
    base_url: Url,
    csrf_token: Option<CsrfToken>,
}

impl<H: HttpClient> RequestClient<H> {
    /// Create a new client with a custom HTTP client implementation.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the application server
    /// * `http_client` - HTTP client implementation
    pub fn new(base_url: String, http_client: H) -> Result<Self> {
        let mut base_url = Url::parse(&base_url)?;

        // we need a trailing slash, if not present we append it
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        Ok(RequestClient {
            http_client,
            base_url,
            csrf_token: None,
        })
    }

    /// Attach the anti-forgery token sent with every POST.
    pub fn with_csrf_token(mut self, token: impl Into<CsrfToken>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    pub fn set_csrf_token(&mut self, token: Option<CsrfToken>) {
        self.csrf_token = token;
    }

    pub fn csrf_token(&self) -> Option<&CsrfToken> {
        self.csrf_token.as_ref()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch `url` and return its parsed JSON body.
    pub async fn get(&self, url: &str) -> std::result::Result<Value, RequestError> {
        self.send(&Request::get(url)).await
    }

    /// Post `data` as JSON to `url` and return the parsed JSON body.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        url: &str,
        data: &B,
    ) -> std::result::Result<Value, RequestError> {
        let body = serde_json::to_value(data)?;
        self.send(&Request::post(url, body)).await
    }

    /// Like [`RequestClient::get`], decoding the body into `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> std::result::Result<T, RequestError> {
        let value = self.get(url).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Like [`RequestClient::post`], decoding the body into `T`.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: &str,
        data: &B,
    ) -> std::result::Result<T, RequestError> {
        let value = self.post(url, data).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Execute a request and return its parsed JSON body.
    pub async fn send(&self, request: &Request) -> std::result::Result<Value, RequestError> {
        log::debug!("{} {}", request.method, request.url);
        let response = self.dispatch(request).await?;
        if !response.is_success() {
            log::debug!(
                "{} {} returned status {}",
                request.method,
                request.url,
                response.status
            );
            return Err(Error::Status(response.status).into());
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    async fn dispatch(&self, request: &Request) -> Result<HttpResponse> {
        let url = self.base_url.join(&request.url)?;
        match request.method {
            Method::Get => {
                let headers = [
                    (ACCEPT, APPLICATION_JSON.to_string()),
                    (X_REQUESTED_WITH, XML_HTTP_REQUEST.to_string()),
                ];
                self.http_client.get(url.as_str(), &headers).await
            }
            Method::Post => {
                let json_body = match &request.body {
                    Some(body) => serde_json::to_string(body)?,
                    None => Value::Null.to_string(),
                };
                let headers = [
                    (CONTENT_TYPE, APPLICATION_JSON.to_string()),
                    (ACCEPT, APPLICATION_JSON.to_string()),
                    (X_REQUESTED_WITH, XML_HTTP_REQUEST.to_string()),
                    (X_CSRF_TOKEN, self.csrf_header_value()),
                ];
                self.http_client
                    .post_json(url.as_str(), &headers, &json_body)
                    .await
            }
        }
    }

    fn csrf_header_value(&self) -> String {
        self.csrf_token
            .as_ref()
            .map(|token| token.as_str().to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone)]
    struct NoopClient;

    #[async_trait]
    impl HttpClient for NoopClient {
        async fn get(&self, _url: &str, _headers: &[(&str, String)]) -> Result<HttpResponse> {
            Ok(HttpResponse::new(200, "null"))
        }

        async fn post_json(
            &self,
            _url: &str,
            _headers: &[(&str, String)],
            _json_body: &str,
        ) -> Result<HttpResponse> {
            Ok(HttpResponse::new(200, "null"))
        }
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let client =
            RequestClient::new("http://localhost:8000/app".to_string(), NoopClient).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8000/app/");

        let client =
            RequestClient::new("http://localhost:8000".to_string(), NoopClient).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8000/");
    }

    #[test]
    fn relative_base_url_is_rejected() {
        let err = RequestClient::new("/api".to_string(), NoopClient).err().unwrap();
        assert!(matches!(err, Error::Url(_)));
    }

    #[test]
    fn csrf_header_defaults_to_empty() {
        let client = RequestClient::new("http://localhost".to_string(), NoopClient).unwrap();
        assert_eq!(client.csrf_header_value(), "");

        let mut client = client.with_csrf_token("t0k");
        assert_eq!(client.csrf_header_value(), "t0k");

        client.set_csrf_token(None);
        assert!(client.csrf_token().is_none());
    }

    #[test]
    fn method_wire_names() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
    }
}
