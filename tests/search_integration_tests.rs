use marquee::api::{ApiError, OmdbClient};
use marquee::core::action::{Action, reduce};
use marquee::core::state::AppState;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

/// A one-movie success body in the search endpoint's wire format.
fn success_body(title: &str, imdb_id: &str) -> serde_json::Value {
    serde_json::json!({
        "Search": [
            {
                "Title": title,
                "Year": "1989",
                "imdbID": imdb_id,
                "Type": "movie",
                "Poster": "https://example.com/poster.jpg"
            }
        ],
        "totalResults": "1",
        "Response": "True"
    })
}

fn failure_body() -> serde_json::Value {
    serde_json::json!({
        "Response": "False",
        "Error": "Movie not found!"
    })
}

// ============================================================================
// Client Wire Format Tests
// ============================================================================

#[tokio::test]
async fn test_search_success_returns_movies() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("Batman", "tt0096895")))
        .mount(&mock_server)
        .await;

    let client = OmdbClient::new("test-key".to_string(), Some(mock_server.uri()));

    let body = client.search("batman").await.unwrap();

    assert!(body.is_success());
    assert_eq!(body.search.len(), 1);
    assert_eq!(body.search[0].imdb_id, "tt0096895");
    assert_eq!(body.search[0].title, "Batman");
}

#[tokio::test]
async fn test_search_sends_api_key_and_term() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("apikey", "test-key"))
        .and(query_param("s", "matrix"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("The Matrix", "tt0133093")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = OmdbClient::new("test-key".to_string(), Some(mock_server.uri()));

    let body = client.search("matrix").await.unwrap();

    assert!(body.is_success());
}

#[tokio::test]
async fn test_empty_term_is_sent_verbatim() {
    let mock_server = MockServer::start().await;

    // No client-side validation: an empty term still reaches the wire
    Mock::given(method("GET"))
        .and(query_param("s", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(failure_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = OmdbClient::new("test-key".to_string(), Some(mock_server.uri()));

    let body = client.search("").await.unwrap();

    assert!(!body.is_success());
}

#[tokio::test]
async fn test_http_error_maps_to_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    let client = OmdbClient::new("test-key".to_string(), Some(mock_server.uri()));

    let result = client.search("batman").await;

    assert!(matches!(result, Err(ApiError::Api { status: 500, .. })));
}

#[tokio::test]
async fn test_malformed_body_maps_to_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = OmdbClient::new("test-key".to_string(), Some(mock_server.uri()));

    let result = client.search("batman").await;

    assert!(matches!(result, Err(ApiError::Parse(_))));
}

#[tokio::test]
async fn test_connection_refused_maps_to_network_error() {
    // Nothing listens on this port; reqwest fails before any HTTP exchange
    let client = OmdbClient::new(
        "test-key".to_string(),
        Some("http://127.0.0.1:1".to_string()),
    );

    let result = client.search("batman").await;

    assert!(matches!(result, Err(ApiError::Network(_))));
}

// ============================================================================
// Controller Scenario Tests
// ============================================================================

#[tokio::test]
async fn test_successful_search_lands_in_state() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("s", "batman"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("Batman", "tt1")))
        .mount(&mock_server)
        .await;

    let client = OmdbClient::new("test-key".to_string(), Some(mock_server.uri()));
    let state = AppState::new("batman".to_string());
    assert!(state.loading);

    let body = client.search(&state.search_term).await.unwrap();
    let state = reduce(&state, &Action::SetMovies(body.search));

    assert_eq!(state.movies.len(), 1);
    assert_eq!(state.movies[0].imdb_id, "tt1");
    assert!(!state.loading);
    assert_eq!(state.search_term, "batman");
}

#[tokio::test]
async fn test_failed_search_never_clears_loading() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(failure_body()))
        .mount(&mock_server)
        .await;

    let client = OmdbClient::new("test-key".to_string(), Some(mock_server.uri()));
    let state = AppState::new("batman".to_string());

    let body = client.search(&state.search_term).await.unwrap();

    // The controller only dispatches on a success body; a failure logs
    // the error and leaves the state untouched, loading view included.
    let state = if body.is_success() {
        reduce(&state, &Action::SetMovies(body.search))
    } else {
        state
    };

    assert!(state.loading);
    assert!(state.movies.is_empty());
    assert_eq!(body.error.as_deref(), Some("Movie not found!"));
}

#[tokio::test]
async fn test_submitting_a_term_triggers_a_matching_fetch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("s", "matrix"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("The Matrix", "tt0133093")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = OmdbClient::new("test-key".to_string(), Some(mock_server.uri()));

    // Form submission dispatches SetSearchTerm; the effect re-runs the
    // fetch with the new term once it sees the change.
    let state = AppState {
        movies: Vec::new(),
        loading: false,
        search_term: "batman".to_string(),
    };
    let state = reduce(&state, &Action::SetSearchTerm("matrix".to_string()));
    assert_eq!(state.search_term, "matrix");

    let state = reduce(&state, &Action::SetLoading(true));
    let body = client.search(&state.search_term).await.unwrap();
    let state = reduce(&state, &Action::SetMovies(body.search));

    assert_eq!(state.movies[0].title, "The Matrix");
}

#[tokio::test]
async fn test_stale_response_overwrites_newer_one() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("s", "a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("Alpha", "tt1")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("s", "b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("Bravo", "tt2")))
        .mount(&mock_server)
        .await;

    let client = OmdbClient::new("test-key".to_string(), Some(mock_server.uri()));

    let response_a = client.search("a").await.unwrap();
    let response_b = client.search("b").await.unwrap();

    // Both searches ran to completion; nothing ties a response to the
    // term currently on screen. Deliver "b" first, then the stale "a":
    // whichever is reduced last owns the grid.
    let state = AppState::new("b".to_string());
    let state = reduce(&state, &Action::SetMovies(response_b.search));
    let state = reduce(&state, &Action::SetMovies(response_a.search));

    assert_eq!(state.movies[0].title, "Alpha");
}
