mod common;

use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{Json, Router, extract::Query, http::StatusCode, routing::get};
use serde_json::json;

use moviecli::{
    error::SearchError,
    tmdb::{SearchClient, SearchOutcome, SearchSession, TmdbClient, TmdbConfig},
};

use common::{FakeSearch, GatedSearch, IMAGE_BASE, hit};

/// Serves `router` on an ephemeral port and returns its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client(base: &str) -> TmdbClient {
    TmdbClient::new(TmdbConfig {
        api_key: "test-key".to_string(),
        search_url: format!("{}/search/movie", base),
        image_base_url: IMAGE_BASE.to_string(),
        timeout: Some(Duration::from_secs(5)),
    })
    .unwrap()
}

async fn search_movie(Query(params): Query<HashMap<String, String>>) -> (StatusCode, Json<serde_json::Value>) {
    if params.get("api_key").map(String::as_str) != Some("test-key") {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "status_message": "Invalid API key" })));
    }

    let results = match params.get("query").map(String::as_str) {
        Some("inception") => json!([{
            "id": 27205,
            "title": "Inception",
            "poster_path": "/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg",
            "release_date": "2010-07-15",
            "overview": "Cobb, a skilled thief..."
        }]),
        Some("alien & co") => json!([
            { "id": 348, "title": "Alien", "release_date": "1979-05-25" },
            { "id": 126889, "title": "Alien: Covenant", "poster_path": null },
            { "id": 8077, "title": "Alien³", "release_date": "" }
        ]),
        _ => json!([]),
    };

    (StatusCode::OK, Json(json!({ "page": 1, "results": results })))
}

#[tokio::test]
async fn test_search_parses_results() {
    let base = serve(Router::new().route("/search/movie", get(search_movie))).await;

    let results = client(&base).search_movies("inception").await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 27205);
    assert_eq!(results[0].title, "Inception");
    assert_eq!(results[0].year().as_deref(), Some("2010"));
    assert_eq!(
        results[0].poster_path.as_deref(),
        Some("/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg")
    );
}

#[tokio::test]
async fn test_search_encodes_query_and_keeps_server_order() {
    let base = serve(Router::new().route("/search/movie", get(search_movie))).await;

    let results = client(&base).search_movies("alien & co").await.unwrap();

    let ids: Vec<u64> = results.iter().map(|r| r.id).collect();
    assert_eq!(ids, [348, 126889, 8077]);
    assert!(results[1].poster_path.is_none());
    assert!(results[2].year().is_none());
}

#[tokio::test]
async fn test_search_non_ok_status_is_http_error() {
    let router = Router::new().route(
        "/search/movie",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "try later") }),
    );
    let base = serve(router).await;

    let err = client(&base).search_movies("inception").await.unwrap_err();
    assert!(matches!(err, SearchError::Http { status: 503 }));
}

#[tokio::test]
async fn test_search_wrong_key_is_http_error() {
    let base = serve(Router::new().route("/search/movie", get(search_movie))).await;
    let bad = TmdbConfig {
        api_key: "wrong".to_string(),
        search_url: format!("{}/search/movie", base),
        image_base_url: IMAGE_BASE.to_string(),
        timeout: Some(Duration::from_secs(5)),
    };

    let err = TmdbClient::new(bad)
        .unwrap()
        .search_movies("inception")
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::Http { status: 401 }));
}

#[tokio::test]
async fn test_search_unexpected_body_is_decode_error() {
    let router = Router::new().route(
        "/search/movie",
        get(|| async { Json(json!({ "page": 1, "total_results": 0 })) }),
    );
    let base = serve(router).await;

    let err = client(&base).search_movies("inception").await.unwrap_err();
    assert!(matches!(err, SearchError::Decode(_)));
}

#[tokio::test]
async fn test_search_connection_refused_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{}", addr))
        .search_movies("inception")
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::Transport(_)));
}

#[tokio::test]
async fn test_newer_query_wins_over_late_response() {
    let (client, mut started) = GatedSearch::new();
    let old_gate = client.gate("incep").await;
    let new_gate = client.gate("inception").await;
    let session = SearchSession::new(client.clone());

    let s = session.clone();
    let old = tokio::spawn(async move { s.search("incep").await });
    assert_eq!(started.recv().await.unwrap(), "incep");

    let s = session.clone();
    let new = tokio::spawn(async move { s.search("inception").await });
    assert_eq!(started.recv().await.unwrap(), "inception");

    // the newer query answers first, the older one straggles in afterwards
    new_gate
        .send(Ok(vec![hit(27205, "Inception", Some("2010-07-15"))]))
        .unwrap();
    match new.await.unwrap() {
        SearchOutcome::Current(Ok(results)) => assert_eq!(results[0].id, 27205),
        other => panic!("unexpected outcome {:?}", other),
    }

    old_gate.send(Ok(vec![hit(1, "Incep", None)])).unwrap();
    assert!(old.await.unwrap().is_stale());

    let state = session.snapshot().await;
    assert_eq!(state.query, "inception");
    assert_eq!(state.results.len(), 1);
    assert_eq!(state.results[0].id, 27205);
}

#[tokio::test]
async fn test_in_order_responses_both_apply() {
    let (client, mut started) = GatedSearch::new();
    let first_gate = client.gate("alien").await;
    let second_gate = client.gate("aliens").await;
    let session = SearchSession::new(client.clone());

    let s = session.clone();
    let first = tokio::spawn(async move { s.search("alien").await });
    assert_eq!(started.recv().await.unwrap(), "alien");

    // the first finishes before the second starts
    first_gate.send(Ok(vec![hit(348, "Alien", None)])).unwrap();
    assert!(!first.await.unwrap().is_stale());

    let s = session.clone();
    let second = tokio::spawn(async move { s.search("aliens").await });
    assert_eq!(started.recv().await.unwrap(), "aliens");
    second_gate.send(Ok(vec![hit(679, "Aliens", None)])).unwrap();
    assert!(!second.await.unwrap().is_stale());

    let state = session.snapshot().await;
    assert_eq!(state.query, "aliens");
    assert_eq!(state.results[0].id, 679);
}

#[tokio::test]
async fn test_stale_error_does_not_clobber_newer_results() {
    let (client, mut started) = GatedSearch::new();
    let old_gate = client.gate("a").await;
    let new_gate = client.gate("ab").await;
    let session = SearchSession::new(client.clone());

    let s = session.clone();
    let old = tokio::spawn(async move { s.search("a").await });
    started.recv().await.unwrap();
    let s = session.clone();
    let new = tokio::spawn(async move { s.search("ab").await });
    started.recv().await.unwrap();

    new_gate.send(Ok(vec![hit(10, "AB", None)])).unwrap();
    new.await.unwrap();
    old_gate.send(Err(500)).unwrap();
    assert!(old.await.unwrap().is_stale());

    let state = session.snapshot().await;
    assert!(state.error.is_none());
    assert_eq!(state.results[0].id, 10);
}

#[tokio::test]
async fn test_current_error_is_recorded_as_message() {
    let (client, _started) = GatedSearch::new();
    let gate = client.gate("broken").await;
    let session = SearchSession::new(client.clone());

    let s = session.clone();
    let task = tokio::spawn(async move { s.search("broken").await });
    gate.send(Err(500)).unwrap();

    match task.await.unwrap() {
        SearchOutcome::Current(Err(SearchError::Http { status })) => assert_eq!(status, 500),
        other => panic!("unexpected outcome {:?}", other),
    }

    let state = session.snapshot().await;
    assert!(state.results.is_empty());
    assert_eq!(state.error.as_deref(), Some("Failed to search: server error: 500"));
}

#[tokio::test]
async fn test_debounced_search_skips_superseded_query() {
    let client = Arc::new(FakeSearch::new(vec![hit(1, "Heat", None)]));
    let session = SearchSession::new(client.clone());

    let s = session.clone();
    let debounced =
        tokio::spawn(async move { s.search_debounced("hea", Duration::from_millis(300)).await });
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert!(!session.search("heat").await.is_stale());
    assert!(debounced.await.unwrap().is_stale());

    // the superseded query never reached the provider
    assert_eq!(client.recorded().await, vec!["heat".to_string()]);
    assert_eq!(session.snapshot().await.query, "heat");
}

#[tokio::test]
async fn test_debounced_search_runs_when_not_superseded() {
    let client = Arc::new(FakeSearch::new(vec![hit(1, "Heat", None)]));
    let session = SearchSession::new(client.clone());

    let outcome = session
        .search_debounced("heat", Duration::from_millis(10))
        .await;

    assert!(!outcome.is_stale());
    assert_eq!(client.recorded().await, vec!["heat".to_string()]);
}

#[tokio::test]
async fn test_empty_query_clears_results_without_request() {
    let client = Arc::new(FakeSearch::new(vec![hit(1, "Heat", None)]));
    let session = SearchSession::new(client.clone());

    session.search("heat").await;
    assert_eq!(session.snapshot().await.results.len(), 1);

    session.search("").await;
    assert!(session.snapshot().await.results.is_empty());
    assert_eq!(client.recorded().await.len(), 1);
}
