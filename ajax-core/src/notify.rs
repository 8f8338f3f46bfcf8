//! User-facing failure reporting.
//!
//! [`crate::RequestClient`] only ever returns a `Result`. Deciding to show a
//! failure to the user happens here: [`Notifying`] wraps a client, reports
//! each failed call exactly once through a [`Notifier`] and then hands the
//! same error back to the caller.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::client::{Request, RequestClient};
use crate::error::RequestError;
use crate::http::HttpClient;

/// Prefix put in front of the error message shown to the user.
pub const ERROR_PREFIX: &str = "Bir hata oluştu: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Notification {
            message: message.into(),
            severity,
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Danger)
    }

    /// The notification shown for a failed request.
    pub fn for_error(err: &RequestError) -> Self {
        Self::danger(format!("{ERROR_PREFIX}{err}"))
    }
}

/// Sink for transient user notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

/// Writes notifications through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        let level = match notification.severity {
            Severity::Info | Severity::Success => log::Level::Info,
            Severity::Warning => log::Level::Warn,
            Severity::Danger => log::Level::Error,
        };
        log::log!(level, "[{}] {}", notification.severity.as_str(), notification.message);
    }
}

/// Report a failed call to `notifier` and pass the result through unchanged.
pub fn report<T, N: Notifier + ?Sized>(
    result: Result<T, RequestError>,
    notifier: &N,
) -> Result<T, RequestError> {
    result.inspect_err(|err| {
        match std::error::Error::source(err) {
            Some(cause) => log::error!("API Error: {} ({})", err, cause),
            None => log::error!("API Error: {}", err),
        }
        notifier.notify(Notification::for_error(err));
    })
}

/// A [`RequestClient`] that reports every failure to a [`Notifier`] before
/// returning it.
#[derive(Clone)]
pub struct Notifying<H: HttpClient, N: Notifier> {
    client: RequestClient<H>,
    notifier: N,
}

impl<H: HttpClient, N: Notifier> Notifying<H, N> {
    pub fn new(client: RequestClient<H>, notifier: N) -> Self {
        Notifying { client, notifier }
    }

    pub async fn get(&self, url: &str) -> Result<Value, RequestError> {
        report(self.client.get(url).await, &self.notifier)
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        url: &str,
        data: &B,
    ) -> Result<Value, RequestError> {
        report(self.client.post(url, data).await, &self.notifier)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, RequestError> {
        report(self.client.get_json(url).await, &self.notifier)
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: &str,
        data: &B,
    ) -> Result<T, RequestError> {
        report(self.client.post_json(url, data).await, &self.notifier)
    }

    pub async fn send(&self, request: &Request) -> Result<Value, RequestError> {
        report(self.client.send(request).await, &self.notifier)
    }
}
