//! tunelib-api library - music catalog REST service
//!
//! Serves the catalog (songs, artists, genres, audio files, users, roles)
//! as JSON for the admin panel. All state lives in the SQLite pool and the
//! audio file store.

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod services;
pub mod storage;

use services::artists::ArtistService;
use services::audios::AudioService;
use services::genres::GenreService;
use services::roles::RoleService;
use services::songs::SongService;
use services::users::UserService;
use storage::FileStore;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Store for uploaded audio files
    pub files: FileStore,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool, files: FileStore) -> Self {
        Self { db, files }
    }

    pub fn songs(&self) -> SongService {
        SongService::new(self.db.clone())
    }

    pub fn genres(&self) -> GenreService {
        GenreService::new(self.db.clone())
    }

    pub fn artists(&self) -> ArtistService {
        ArtistService::new(self.db.clone())
    }

    pub fn roles(&self) -> RoleService {
        RoleService::new(self.db.clone())
    }

    pub fn users(&self) -> UserService {
        UserService::new(self.db.clone())
    }

    pub fn audios(&self) -> AudioService {
        AudioService::new(self.db.clone())
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    // The admin panel runs on its own dev server
    let cors = CorsLayer::new()
        .allow_origin([
            HeaderValue::from_static("http://localhost:5173"),
            HeaderValue::from_static("http://localhost:3000"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        .route("/health", get(api::health::health))
        .route(
            "/api/songs",
            get(api::songs::list_songs).post(api::songs::create_song),
        )
        .route(
            "/api/songs/:id",
            get(api::songs::get_song)
                .put(api::songs::update_song)
                .delete(api::songs::delete_song),
        )
        .route(
            "/api/genres",
            get(api::genres::list_genres).post(api::genres::create_genre),
        )
        .route(
            "/api/genres/:id",
            get(api::genres::get_genre)
                .put(api::genres::update_genre)
                .delete(api::genres::delete_genre),
        )
        .route(
            "/api/artists",
            get(api::artists::list_artists).post(api::artists::create_artist),
        )
        .route(
            "/api/artists/:id",
            get(api::artists::get_artist)
                .put(api::artists::update_artist)
                .delete(api::artists::delete_artist),
        )
        .route(
            "/api/roles",
            get(api::roles::list_roles).post(api::roles::create_role),
        )
        .route(
            "/api/roles/:id",
            get(api::roles::get_role)
                .put(api::roles::update_role)
                .delete(api::roles::delete_role),
        )
        .route(
            "/api/users",
            get(api::users::list_users).post(api::users::create_user),
        )
        .route("/api/users/login", post(api::users::login))
        .route(
            "/api/users/:id",
            get(api::users::get_user)
                .put(api::users::update_user)
                .delete(api::users::delete_user),
        )
        .route(
            "/api/audios",
            get(api::audios::list_audios).post(api::audios::upload_audio),
        )
        .route(
            "/api/audios/:id",
            get(api::audios::get_audio)
                .put(api::audios::update_audio)
                .delete(api::audios::delete_audio),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
