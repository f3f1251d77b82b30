//! Local stand-in for the remote API.
//!
//! [`contract_router`] answers every built-in case the way the live service
//! is expected to; tests tweak single routes to simulate drift.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock server");
    let addr = listener.local_addr().expect("Failed to read local address");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Mock server failed");
    });
    format!("http://{addr}")
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr: SocketAddr = listener.local_addr().expect("Failed to read local address");
    drop(listener);
    format!("http://{addr}")
}

/// Routes matching every built-in case.
///
/// `user_delete_status` is what `DELETE /users/{id}` answers; the contract
/// says 404.
pub fn contract_router(user_delete_status: StatusCode) -> Router {
    Router::new()
        .route("/users", post(create_user).get(list))
        .route("/users/{id}", delete(move || async move { user_delete_status }))
        .route("/company", get(company))
        .route("/company/{company_id}/products/{product_id}", put(not_found))
        .route("/produtos", get(list))
        .route("/produtos/{id}", get(item))
        .route("/clients", get(list))
        .route("/clients/{id}", get(item))
        .route("/credit", post(bad_request))
        .route("/eventos", post(created))
        .route("/herois-inuteis", post(bad_request))
        .route("/animes", post(created))
        .route("/animes/{id}", put(bad_request).delete(not_found))
}

/// Routes exercising the HTTP adapter itself.
pub fn adapter_router() -> Router {
    Router::new()
        .route("/echo", post(echo).put(echo))
        .route("/status/teapot", get(|| async { StatusCode::IM_A_TEAPOT }))
        .route("/text", get(|| async { "plain text" }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Json(json!({"late": true}))
            }),
        )
}

async fn create_user(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let mut user = body;
    if let Some(object) = user.as_object_mut() {
        object.insert("id".to_string(), json!(101));
    }
    (StatusCode::CREATED, Json(user))
}

async fn echo(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({"received": body}))
}

async fn list() -> Json<Value> {
    Json(json!([{"id": 1}, {"id": 2}]))
}

async fn item() -> Json<Value> {
    Json(json!({"id": 1}))
}

async fn company() -> Json<Value> {
    Json(json!({"id": 1, "name": "ACME", "products": []}))
}

async fn created(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    (StatusCode::CREATED, Json(body))
}

async fn bad_request() -> (StatusCode, Json<Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({"error": "invalid data"})))
}

async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({"error": "not found"})))
}
