//! Integration tests for the tunelib-api endpoints
//!
//! Each test boots a fresh root folder with a freshly seeded database and
//! drives the router directly with `oneshot` requests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot`
use tunelib_api::storage::FileStore;
use tunelib_api::{build_router, AppState};
use tunelib_common::db::init::init_database;

/// Test helper: seeded database + router over a temp root folder
async fn setup_app() -> (axum::Router, TempDir) {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let db_path = dir.path().join("tunelib.db");

    let pool = init_database(&db_path)
        .await
        .expect("Should initialize test database");

    let state = AppState::new(pool, FileStore::new(dir.path().to_path_buf()));
    (build_router(state), dir)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _dir) = setup_app().await;

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "tunelib-api");
    assert!(body["version"].is_string());
}

// =============================================================================
// Song listing: sort, filter, pagination
// =============================================================================

#[tokio::test]
async fn test_song_listing_first_page() {
    let (app, _dir) = setup_app().await;

    let response = app.oneshot(get("/api/songs?page=1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["totalCount"], 73);
    assert_eq!(body["page"], 1);
    assert_eq!(body["pageSize"], 8);
    assert_eq!(body["totalPages"], 10);
    assert_eq!(body["items"].as_array().unwrap().len(), 8);

    // Default order is title ascending
    assert_eq!(body["items"][0]["title"], "A Change Is Gonna Come");
}

#[tokio::test]
async fn test_song_listing_sort_by_artist_desc() {
    let (app, _dir) = setup_app().await;

    let response = app
        .oneshot(get("/api/songs?sort=ArtistNameDesc&page=1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["items"][0]["artist"], "The Doors");
    assert_eq!(body["items"][0]["title"], "Smells Like Teen Spirit");
}

#[tokio::test]
async fn test_song_listing_unrecognized_sort_falls_back() {
    let (app, _dir) = setup_app().await;

    let response = app
        .oneshot(get("/api/songs?sort=NoSuchKey&page=1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Fail-soft: same order as the default title-ascending listing
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["items"][0]["title"], "A Change Is Gonna Come");
}

#[tokio::test]
async fn test_song_listing_filter_by_artist() {
    let (app, _dir) = setup_app().await;

    // Seeded artist 2 is Elvis Presley: 5 Latin songs plus one Punk row
    let response = app
        .oneshot(get("/api/songs?artist=2&page=1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["totalCount"], 6);
    assert_eq!(body["items"].as_array().unwrap().len(), 6);
    for item in body["items"].as_array().unwrap() {
        assert_eq!(item["artist"], "Elvis Presley");
    }
}

#[tokio::test]
async fn test_song_listing_filters_combine() {
    let (app, _dir) = setup_app().await;

    // Genre 6 is Metal; both Metal rows are Led Zeppelin's
    let response = app
        .clone()
        .oneshot(get("/api/songs?genre=6&page=1"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["totalCount"], 2);

    // Adding a non-matching artist empties the result
    let response = app
        .oneshot(get("/api/songs?genre=6&artist=2&page=1"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["totalCount"], 0);
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_song_listing_page_past_the_end() {
    let (app, _dir) = setup_app().await;

    let response = app.oneshot(get("/api/songs?page=99")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert!(body["items"].as_array().unwrap().is_empty());
    assert_eq!(body["totalCount"], 73);
}

// =============================================================================
// Song CRUD policy: 201 / 404 / 400 / 204
// =============================================================================

#[tokio::test]
async fn test_song_create_and_get() {
    let (app, _dir) = setup_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/songs",
            &json!({ "title": "Brand New", "release": "2024", "genreId": 1 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = extract_json(response.into_body()).await;
    let id = created["id"].as_i64().unwrap();
    assert!(id > 73);
    assert_eq!(created["genre"], "Rock");

    let response = app
        .oneshot(get(&format!("/api/songs/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["title"], "Brand New");
}

#[tokio::test]
async fn test_song_get_missing_is_404_but_delete_is_silent() {
    let (app, _dir) = setup_app().await;

    let response = app.clone().oneshot(get("/api/songs/9999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = extract_json(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("Not found"));

    // Deleting the same absent id succeeds silently
    let response = app.oneshot(delete("/api/songs/9999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_song_update_id_mismatch_is_400() {
    let (app, _dir) = setup_app().await;

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/songs/1",
            &json!({ "id": 2, "title": "Renamed" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("id mismatch"));
}

#[tokio::test]
async fn test_song_update_missing_is_404() {
    let (app, _dir) = setup_app().await;

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/songs/9999",
            &json!({ "id": 9999, "title": "Ghost" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_song_update_is_full_replace() {
    let (app, _dir) = setup_app().await;

    // Song 1 is seeded with a genre, artist and link; the replacement
    // carries only a title, so everything else must come back null
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/songs/1",
            &json!({ "id": 1, "title": "Stripped Down" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get("/api/songs/1")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["title"], "Stripped Down");
    assert_eq!(body["genreId"], Value::Null);
    assert_eq!(body["genre"], Value::Null);
    assert_eq!(body["artistId"], Value::Null);
    assert_eq!(body["youtubeLink"], Value::Null);
}

// =============================================================================
// Other entity listings
// =============================================================================

#[tokio::test]
async fn test_genre_listing_sorted_and_paged() {
    let (app, _dir) = setup_app().await;

    let response = app.clone().oneshot(get("/api/genres?page=1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["totalCount"], 26);
    assert_eq!(body["items"].as_array().unwrap().len(), 8);
    assert_eq!(body["items"][0]["title"], "Blues");

    let response = app
        .oneshot(get("/api/genres?sort=TitleDesc&page=1"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["items"][0]["title"], "World");
}

#[tokio::test]
async fn test_role_crud_round_trip() {
    let (app, _dir) = setup_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/roles",
            &json!({ "title": "Editor" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = extract_json(response.into_body()).await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/roles/{}", id),
            &json!({ "id": id, "title": "Moderator" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(get(&format!("/api/roles/{}", id)))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["title"], "Moderator");

    let response = app
        .oneshot(delete(&format!("/api/roles/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_artist_listing_default_order() {
    let (app, _dir) = setup_app().await;

    let response = app.oneshot(get("/api/artists?page=1")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["totalCount"], 22);
    assert_eq!(body["items"][0]["name"], "Aretha Franklin");
}

// =============================================================================
// Users and login
// =============================================================================

#[tokio::test]
async fn test_user_create_hashes_plaintext_password() {
    let (app, _dir) = setup_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/users",
            &json!({ "email": "editor@example.com", "password": "hunter22", "roleId": 2 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = extract_json(response.into_body()).await;
    assert_eq!(created["email"], "editor@example.com");
    assert_eq!(created["role"], "User");
    // Stored as digest + salt, not the plaintext
    assert_ne!(created["password"], "hunter22");
    assert_eq!(created["salt"].as_str().unwrap().len(), 32);

    // The plaintext credentials now log in
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/users/login",
            &json!({ "email": "editor@example.com", "password": "hunter22" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["email"], "editor@example.com");

    // A wrong password does not
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/users/login",
            &json!({ "email": "editor@example.com", "password": "wrong" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_email_is_401() {
    let (app, _dir) = setup_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/users/login",
            &json!({ "email": "nobody@example.com", "password": "whatever" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_seeded_admin_is_listed() {
    let (app, _dir) = setup_app().await;

    let response = app.oneshot(get("/api/users?page=1")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["totalCount"], 1);
    assert_eq!(body["items"][0]["email"], "admin@admin.com");
    assert_eq!(body["items"][0]["role"], "Admin");
}

// =============================================================================
// Audio upload and deletion
// =============================================================================

fn multipart_upload(uri: &str, file_name: &str, bytes: &[u8]) -> Request<Body> {
    let boundary = "tunelib-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
            boundary, file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_audio_upload_stores_file_and_row() {
    let (app, dir) = setup_app().await;

    let response = app
        .clone()
        .oneshot(multipart_upload("/api/audios", "track.mp3", b"fake audio"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = extract_json(response.into_body()).await;
    assert_eq!(created["fileName"], "track.mp3");
    assert_eq!(created["path"], "files/track.mp3");

    // Bytes landed in the store
    let stored = dir.path().join("files/track.mp3");
    assert_eq!(std::fs::read(&stored).unwrap(), b"fake audio");

    // Row is listed
    let response = app.clone().oneshot(get("/api/audios?page=1")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["totalCount"], 1);

    // Deleting the row removes the file too
    let id = created["id"].as_i64().unwrap();
    let response = app
        .oneshot(delete(&format!("/api/audios/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(!stored.exists());
}

#[tokio::test]
async fn test_audio_upload_without_file_field_is_400() {
    let (app, _dir) = setup_app().await;

    let boundary = "tunelib-test-boundary";
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nvalue\r\n--{b}--\r\n",
        b = boundary
    );
    let request = Request::builder()
        .method("POST")
        .uri("/api/audios")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
