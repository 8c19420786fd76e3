pub mod api;

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use log::info;
use tokio::sync::Mutex;

use crate::{
    error::ApiError,
    storage::{Entries, Storage},
    structs::EntryParams,
};

pub struct ApiAppState {
    storage: Box<dyn Storage>,
}

pub type SharedState = Arc<Mutex<ApiAppState>>;

type ApiResult = Result<(StatusCode, Json<Entries>), ApiError>;

type ParamsResult = Result<Query<EntryParams>, QueryRejection>;

pub fn router(storage: impl Storage + 'static) -> Router {
    let state = Arc::new(Mutex::new(ApiAppState {
        storage: Box::new(storage),
    }));

    Router::new()
        .route(
            "/",
            get(read_entries)
                .post(create_entry)
                .put(update_entry)
                .delete(delete_entry),
        )
        .with_state(state)
}

fn required(param: Option<String>, name: &'static str) -> Result<String, ApiError> {
    param.ok_or(ApiError::MissingParameter(name))
}

async fn read_entries(State(state): State<SharedState>, params: ParamsResult) -> ApiResult {
    let Query(params) = params?;
    // An empty `key=` reads the whole mapping, same as leaving it out.
    let key = params.key.as_deref().filter(|key| !key.is_empty());

    let app_state = state.lock().await;
    let entries = api::read(app_state.storage.as_ref(), key)?;

    Ok((StatusCode::OK, Json(entries)))
}

async fn create_entry(State(state): State<SharedState>, params: ParamsResult) -> ApiResult {
    let Query(params) = params?;
    let key = required(params.key, "key")?;
    let value = required(params.value, "value")?;

    let mut app_state = state.lock().await;
    let entry = api::create(app_state.storage.as_mut(), &key, &value)?;
    info!("created {key:?}");

    Ok((StatusCode::CREATED, Json(entry)))
}

async fn update_entry(State(state): State<SharedState>, params: ParamsResult) -> ApiResult {
    let Query(params) = params?;
    let key = required(params.key, "key")?;
    let value = required(params.value, "value")?;

    let mut app_state = state.lock().await;
    let entry = api::update(app_state.storage.as_mut(), &key, &value)?;
    info!("updated {key:?}");

    Ok((StatusCode::OK, Json(entry)))
}

async fn delete_entry(State(state): State<SharedState>, params: ParamsResult) -> ApiResult {
    let Query(params) = params?;
    let key = required(params.key, "key")?;

    let mut app_state = state.lock().await;
    let remaining = api::delete(app_state.storage.as_mut(), &key)?;
    info!("deleted {key:?}, {} entries left", remaining.len());

    Ok((StatusCode::OK, Json(remaining)))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::storage::MemoryStorage;

    use super::*;

    async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn seeded() -> Router {
        router(MemoryStorage::with_seed("data1", "value1"))
    }

    #[tokio::test]
    async fn get_returns_whole_mapping() {
        let app = seeded();

        let (status, body) = send(&app, Method::GET, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "data1": "value1" }));
    }

    #[tokio::test]
    async fn get_single_key() {
        let app = seeded();

        let (status, body) = send(&app, Method::GET, "/?key=data1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "data1": "value1" }));
    }

    #[tokio::test]
    async fn get_missing_key_is_not_found() {
        let app = seeded();

        let (status, body) = send(&app, Method::GET, "/?key=data4").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Entry does not exist." }));
    }

    #[tokio::test]
    async fn post_creates_then_rejects_duplicate() {
        let app = seeded();

        let (status, body) = send(&app, Method::POST, "/?key=data4&value=value4").await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({ "data4": "value4" }));

        let (status, body) = send(&app, Method::POST, "/?key=data4&value=other").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Entry already exists." }));

        let (_, body) = send(&app, Method::GET, "/?key=data4").await;
        assert_eq!(body, json!({ "data4": "value4" }));
    }

    #[tokio::test]
    async fn put_replaces_existing_value() {
        let app = seeded();

        let (status, body) = send(&app, Method::PUT, "/?key=data1&value=new%20value%21").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "data1": "new value!" }));

        let (status, body) = send(&app, Method::PUT, "/?key=missing&value=x").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Entry does not exist." }));

        let (_, body) = send(&app, Method::GET, "/").await;
        assert_eq!(body, json!({ "data1": "new value!" }));
    }

    #[tokio::test]
    async fn delete_returns_remaining_mapping() {
        let app = seeded();
        send(&app, Method::POST, "/?key=data2&value=value2").await;

        let (status, body) = send(&app, Method::DELETE, "/?key=data1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "data2": "value2" }));

        let (status, body) = send(&app, Method::DELETE, "/?key=data1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Entry does not exist." }));
    }

    #[tokio::test]
    async fn empty_key_reads_whole_mapping() {
        let app = seeded();
        send(&app, Method::POST, "/?key=data2&value=value2").await;

        let (status, body) = send(&app, Method::GET, "/?key=").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "data1": "value1", "data2": "value2" }));
    }

    async fn assert_missing(app: &Router, method: Method, uri: &str, param: &str) {
        let (status, body) = send(app, method, uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": format!("Missing required parameter: {param}.") }));
    }

    #[tokio::test]
    async fn missing_parameters_are_bad_requests() {
        let app = seeded();

        assert_missing(&app, Method::POST, "/?key=data4", "value").await;
        assert_missing(&app, Method::POST, "/?value=value4", "key").await;
        assert_missing(&app, Method::PUT, "/?key=data1", "value").await;
        assert_missing(&app, Method::PUT, "/?value=changed", "key").await;
        assert_missing(&app, Method::PUT, "/", "key").await;
        assert_missing(&app, Method::DELETE, "/", "key").await;

        let (_, body) = send(&app, Method::GET, "/").await;
        assert_eq!(body, json!({ "data1": "value1" }));
    }

    #[tokio::test]
    async fn unparsable_query_gets_json_error() {
        let app = seeded();

        let (status, body) = send(&app, Method::POST, "/?key=a&key=b&value=v").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message = body["error"].as_str().unwrap();
        assert!(message.starts_with("Invalid query string"), "{message}");

        let (_, body) = send(&app, Method::GET, "/").await;
        assert_eq!(body, json!({ "data1": "value1" }));
    }
}
