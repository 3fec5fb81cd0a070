//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use encore_server::{api, state::AppState};
use encore_storage::LocalStorageContext;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Router over a fresh SQLite file; the directory lives as long as the app
pub struct TestApp {
    pub router: Router,
    pub db: Arc<LocalStorageContext>,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let db_url = format!("sqlite://{}", temp_dir.path().join("encore.db").display());

        let pool = encore_storage::create_pool(&db_url).await.unwrap();
        encore_storage::run_migrations(&pool).await.unwrap();
        let db = Arc::new(LocalStorageContext::new(pool));

        let router = api::router(AppState::new(db.clone()));

        Self {
            router,
            db,
            _temp_dir: temp_dir,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// POST an `application/x-www-form-urlencoded` body
    pub async fn post_form(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }
}

/// Form fixtures
pub mod fixtures {
    pub const MUSICAL_HOP: &str = "name=The+Musical+Hop&city=San+Francisco&state=CA\
        &address=1015+Folsom+Street&phone=123-123-1234&genres=Jazz&genres=Reggae\
        &genres=Swing&seeking_talent=y&seeking_description=Looking+for+local+artists";

    pub const DUELING_PIANOS: &str =
        "name=The+Dueling+Pianos+Bar&city=New+York&state=NY&address=335+Delancey+Street&genres=Classical";

    pub const PARK_SQUARE: &str =
        "name=Park+Square+Live+Music+%26+Coffee&city=San+Francisco&state=CA&address=34+Whiskey+Moore+Ave";

    pub const GUNS_N_PETALS: &str =
        "name=Guns+N+Petals&city=San+Francisco&state=CA&genres=Rock+n+Roll&seeking_venue=y";

    pub const WILD_SAX: &str = "name=The+Wild+Sax+Band&city=San+Francisco&state=CA&genres=Jazz";
}
