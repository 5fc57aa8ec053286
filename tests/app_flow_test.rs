//! End-to-end paging flow through the App, driven by a mock HTTP client.

mod common;

use common::{page_response, pump_one, test_app};
use ratatui::{backend::TestBackend, Terminal};
use std::time::Duration;
use userfeed::adapters::{MockHttpClient, MockResponse};
use userfeed::app::{App, AppMessage};
use userfeed::config::AppConfig;
use userfeed::traits::Response;
use userfeed::ui;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn requested_pages(mock: &MockHttpClient) -> Vec<String> {
    mock.requests()
        .iter()
        .map(|url| {
            reqwest::Url::parse(url)
                .unwrap()
                .query_pairs()
                .find(|(k, _)| k == "page")
                .map(|(_, v)| v.into_owned())
                .unwrap_or_default()
        })
        .collect()
}

fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App) {
    terminal.draw(|f| ui::render(f, app)).unwrap();
}

#[tokio::test]
async fn test_mount_fetches_first_page_once() {
    let mock = MockHttpClient::new();
    mock.push_response(page_response(1, 20));
    let mut app = test_app(&mock);

    app.mount();
    assert!(app.loading);

    pump_one(&mut app).await;

    assert!(!app.loading);
    assert_eq!(app.users.len(), 20);
    assert_eq!(app.users[0].id(), "p1-u0");
    assert_eq!(requested_pages(&mock), vec!["1"]);

    let url = reqwest::Url::parse(&mock.requests()[0]).unwrap();
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert!(pairs.contains(&("results".to_string(), "20".to_string())));
    assert!(pairs.contains(&("inc".to_string(), "login,email,name,picture".to_string())));
}

#[tokio::test]
async fn test_next_page_while_loading_is_ignored() {
    let mock = MockHttpClient::new();
    mock.push_response(page_response(1, 20));
    let mut app = test_app(&mock);

    app.mount();
    app.handle_message(AppMessage::NextPageRequested);
    app.handle_message(AppMessage::NextPageRequested);
    assert_eq!(app.page.get(), 1);

    pump_one(&mut app).await;
    assert_eq!(requested_pages(&mock), vec!["1"]);
    assert_eq!(app.users.len(), 20);
}

#[tokio::test]
async fn test_pages_accumulate_in_order() {
    let mock = MockHttpClient::new();
    mock.push_response(page_response(1, 20));
    mock.push_response(page_response(2, 20));
    let mut app = test_app(&mock);

    app.mount();
    pump_one(&mut app).await;
    assert!(app.request_next_page());
    pump_one(&mut app).await;

    assert_eq!(app.users.len(), 40);
    assert_eq!(app.users[19].id(), "p1-u19");
    assert_eq!(app.users[20].id(), "p2-u0");
    assert_eq!(app.users[39].id(), "p2-u19");
    assert_eq!(app.last_info.as_ref().map(|info| info.page), Some(2));
    assert_eq!(requested_pages(&mock), vec!["1", "2"]);
}

#[tokio::test]
async fn test_failed_page_is_skipped() {
    let mock = MockHttpClient::new();
    mock.push_response(page_response(1, 20));
    mock.push_response(MockResponse::Success(Response::new(500, "")));
    mock.push_response(page_response(3, 20));
    let mut app = test_app(&mock);

    app.mount();
    pump_one(&mut app).await;

    app.request_next_page();
    pump_one(&mut app).await;
    assert!(!app.loading);
    assert_eq!(app.users.len(), 20);
    assert_eq!(app.page.get(), 2);

    app.request_next_page();
    pump_one(&mut app).await;
    assert_eq!(app.users.len(), 40);
    assert_eq!(app.users[20].id(), "p3-u0");
    assert_eq!(requested_pages(&mock), vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_malformed_first_page_leaves_list_empty() {
    let mock = MockHttpClient::new();
    mock.push_response(MockResponse::Success(Response::new(200, r#"{"results": []}"#)));
    let mut app = test_app(&mock);

    app.mount();
    pump_one(&mut app).await;

    assert!(!app.loading);
    assert!(app.users.is_empty());
    assert!(!app.scroll.is_observing());
}

#[tokio::test]
async fn test_scrolling_to_sentinel_requests_next_page() {
    let mock = MockHttpClient::new();
    mock.push_response(page_response(1, 20));
    mock.push_response(page_response(2, 20));
    let mut app = test_app(&mock);
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

    app.mount();
    pump_one(&mut app).await;

    draw(&mut terminal, &mut app);
    assert!(!app.observe_sentinel());
    assert!(app.message_rx.as_mut().unwrap().try_recv().is_err());

    app.scroll_state.scroll_to_bottom();
    draw(&mut terminal, &mut app);
    assert!(app.observe_sentinel());

    let msg = app.message_rx.as_mut().unwrap().try_recv().unwrap();
    assert!(matches!(msg, AppMessage::NextPageRequested));

    app.handle_message(msg);
    assert!(app.loading);
    pump_one(&mut app).await;
    assert_eq!(app.users.len(), 40);
    assert_eq!(requested_pages(&mock), vec!["1", "2"]);
}

#[tokio::test]
async fn test_failed_page_with_sentinel_on_screen_requests_again() {
    let mock = MockHttpClient::new();
    mock.push_response(page_response(1, 1));
    mock.push_response(MockResponse::Success(Response::new(500, "")));
    mock.push_response(page_response(3, 1));
    let mut app = test_app(&mock);
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

    app.mount();
    pump_one(&mut app).await;

    // One card leaves the sentinel on screen.
    draw(&mut terminal, &mut app);
    assert!(app.observe_sentinel());
    pump_one(&mut app).await;
    assert_eq!(app.page.get(), 2);

    pump_one(&mut app).await;
    assert!(!app.loading);
    assert_eq!(app.users.len(), 1);

    draw(&mut terminal, &mut app);
    assert!(app.observe_sentinel());
    let msg = app.message_rx.as_mut().unwrap().try_recv().unwrap();
    assert!(matches!(msg, AppMessage::NextPageRequested));

    app.handle_message(msg);
    pump_one(&mut app).await;
    assert_eq!(app.users.len(), 2);
    assert_eq!(requested_pages(&mock), vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_sentinel_with_no_children_sends_nothing() {
    let mock = MockHttpClient::new();
    let mut app = test_app(&mock);
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

    draw(&mut terminal, &mut app);
    assert!(app.sentinel.is_some());
    assert!(!app.observe_sentinel());
    assert!(app.message_rx.as_mut().unwrap().try_recv().is_err());
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_dropping_app_mid_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::page_json(1, 20))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let url = reqwest::Url::parse(&format!("{}/api/", server.uri())).unwrap();
    let config = AppConfig::default().with_api_url(url);
    let mut app = App::new(&config).unwrap();

    app.mount();
    drop(app);

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}
