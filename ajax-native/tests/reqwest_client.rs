#![cfg(feature = "reqwest-client")]

mod common;

use std::sync::{Arc, Mutex};

use ajax_native::{
    Error, LogNotifier, Notification, Notifier, Notifying, ReqwestClient, RequestClient,
};
use axum::http::Method;
use serde_json::json;

#[derive(Clone, Default)]
struct Collect(Arc<Mutex<Vec<Notification>>>);

impl Notifier for Collect {
    fn notify(&self, notification: Notification) {
        self.0.lock().unwrap().push(notification);
    }
}

#[tokio::test]
async fn get_round_trip() -> anyhow::Result<()> {
    let server = common::serve(200, r#"{"id":1,"status":"PENDING"}"#).await;
    let client = RequestClient::new(server.base_url.clone(), ReqwestClient::new())?;

    let value = client.get("/api/tasks/1").await?;
    assert_eq!(value, json!({"id": 1, "status": "PENDING"}));

    let captured = server.only_request();
    assert_eq!(captured.method, Method::GET);
    assert_eq!(captured.path, "/api/tasks/1");
    assert_eq!(captured.header("accept"), Some("application/json"));
    assert_eq!(captured.header("x-requested-with"), Some("XMLHttpRequest"));
    assert_eq!(captured.header("x-csrftoken"), None);
    Ok(())
}

#[tokio::test]
async fn post_carries_token_and_json_body() -> anyhow::Result<()> {
    let server = common::serve(201, r#"{"id":5}"#).await;
    let client = RequestClient::new(server.base_url.clone(), ReqwestClient::new())?
        .with_csrf_token("csrf-abc");

    let value = client
        .post("/assembly/api/aircraft/", &json!({"aircraft_type": "AKINCI"}))
        .await?;
    assert_eq!(value, json!({"id": 5}));

    let captured = server.only_request();
    assert_eq!(captured.method, Method::POST);
    assert_eq!(captured.path, "/assembly/api/aircraft/");
    assert_eq!(captured.header("content-type"), Some("application/json"));
    assert_eq!(captured.header("accept"), Some("application/json"));
    assert_eq!(captured.header("x-requested-with"), Some("XMLHttpRequest"));
    assert_eq!(captured.header("x-csrftoken"), Some("csrf-abc"));
    let sent: serde_json::Value = serde_json::from_str(&captured.body)?;
    assert_eq!(sent, json!({"aircraft_type": "AKINCI"}));
    Ok(())
}

#[tokio::test]
async fn post_without_token_sends_empty_header() -> anyhow::Result<()> {
    let server = common::serve(200, "{}").await;
    let client = RequestClient::new(server.base_url.clone(), ReqwestClient::default())?;

    client.post("/api/tasks", &json!({"title": "x"})).await?;

    assert_eq!(server.only_request().header("x-csrftoken"), Some(""));
    Ok(())
}

#[tokio::test]
async fn server_error_is_reported_once() -> anyhow::Result<()> {
    let server = common::serve(500, r#"{"detail":"boom"}"#).await;
    let notifier = Collect::default();
    let api = Notifying::new(
        RequestClient::new(server.base_url.clone(), ReqwestClient::new())?,
        notifier.clone(),
    );

    let err = api
        .post("/api/tasks", &json!({"title": "x"}))
        .await
        .unwrap_err();
    assert!(matches!(err.cause(), Error::Status(500)));
    assert_eq!(notifier.0.lock().unwrap().len(), 1);
    assert_eq!(server.captured().len(), 1);
    Ok(())
}

#[tokio::test]
async fn unreachable_server_is_request_error() -> anyhow::Result<()> {
    let api = Notifying::new(
        RequestClient::new(common::closed_port().await, ReqwestClient::new())?,
        LogNotifier,
    );

    let err = api.get("/api/tasks/1").await.unwrap_err();
    assert_eq!(err.to_string(), "Network response was not ok");
    assert!(matches!(err.cause(), Error::HttpGet(_)));
    Ok(())
}
