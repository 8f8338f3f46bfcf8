mod http_trait;
pub mod headers;

pub use http_trait::{HttpClient, HttpResponse};
