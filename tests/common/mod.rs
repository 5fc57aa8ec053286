//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use reqwest::Url;
use serde_json::{json, Value};
use userfeed::adapters::{MockHttpClient, MockResponse};
use userfeed::api::UsersClient;
use userfeed::app::App;
use userfeed::scroll::ObserverOptions;
use userfeed::traits::Response;

/// A users page body with `count` users whose ids are `p{page}-u{i}`.
pub fn page_json(page: u32, count: usize) -> Value {
    let results: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "email": format!("user{}.{}@example.com", page, i),
                "login": { "uuid": format!("p{}-u{}", page, i) },
                "name": { "title": "Ms", "first": format!("User{}", i), "last": format!("Page{}", page) },
                "picture": {
                    "large": format!("https://randomuser.me/api/portraits/women/{}.jpg", i),
                    "medium": format!("https://randomuser.me/api/portraits/med/women/{}.jpg", i),
                    "thumbnail": format!("https://randomuser.me/api/portraits/thumb/women/{}.jpg", i)
                }
            })
        })
        .collect();

    json!({
        "info": { "seed": "56d27f4a53bd5441", "results": count, "page": page, "version": "1.4" },
        "results": results
    })
}

/// Mock response carrying [`page_json`].
pub fn page_response(page: u32, count: usize) -> MockResponse {
    MockResponse::Success(Response::new(200, page_json(page, count).to_string()))
}

pub fn test_base_url() -> Url {
    Url::parse("http://localhost:9999/api/").unwrap()
}

/// App wired to `mock`, with default observer options.
pub fn test_app(mock: &MockHttpClient) -> App {
    let client = UsersClient::new(Arc::new(mock.clone()), test_base_url());
    App::with_client(client, ObserverOptions::default())
}

/// Wait for the next message from the app's channel and apply it.
pub async fn pump_one(app: &mut App) {
    let mut rx = app.message_rx.take().expect("message receiver already taken");
    let msg = tokio::time::timeout(std::time::Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for app message")
        .expect("channel closed");
    app.message_rx = Some(rx);
    app.handle_message(msg);
}
