//! Common test utilities

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::util::ServiceExt;

use squirrel_server::{api, db, NewSquirrel, Squirrel, SquirrelStore};

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Setup a fresh store backed by a private in-memory database
pub async fn setup_test_store() -> SquirrelStore {
    let pool = db::connect_in_memory()
        .await
        .expect("Failed to open in-memory database");

    SquirrelStore::new(pool)
}

/// Full application router over a fresh store
pub async fn setup_test_app() -> (Router, SquirrelStore) {
    let store = setup_test_store().await;
    let app = api::build_router(store.clone());
    (app, store)
}

/// Seed a squirrel directly through the store
pub async fn make_a_squirrel(store: &SquirrelStore, name: &str, size: &str) -> Squirrel {
    store
        .create(NewSquirrel::new(name, size).expect("Invalid seed squirrel"))
        .await
        .expect("Failed to seed squirrel")
}

/// Send a request with an optional form body
pub async fn send(app: &Router, method: &str, uri: &str, form: Option<&str>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);

    let request = match form {
        Some(form) => builder
            .header("content-type", FORM_CONTENT_TYPE)
            .body(Body::from(form.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

/// Collect a response body
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
