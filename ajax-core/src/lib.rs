mod client;
pub mod csrf;
pub mod error;
pub mod format;
pub mod http;
pub mod notify;
pub mod validation;

pub use client::{Method, Request, RequestClient};
pub use csrf::CsrfToken;
pub use error::{Error, RequestError, Result};
pub use http::{HttpClient, HttpResponse};
pub use notify::{LogNotifier, Notification, Notifier, Notifying, Severity};
