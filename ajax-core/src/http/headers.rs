//! Header names and values exchanged with the application server.

pub const ACCEPT: &str = "Accept";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const X_REQUESTED_WITH: &str = "X-Requested-With";
pub const X_CSRF_TOKEN: &str = "X-CSRFToken";

pub const APPLICATION_JSON: &str = "application/json";
/// Marks a request as programmatic rather than a page navigation.
pub const XML_HTTP_REQUEST: &str = "XMLHttpRequest";
