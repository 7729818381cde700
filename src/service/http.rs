//! HTTP transport for the student service.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET    /api/students`     - list all records
//! - `GET    /api/students/:id` - one record
//! - `POST   /api/students`     - create from a JSON body
//! - `PUT    /api/students/:id` - update from a JSON body (any subset of fields)
//! - `DELETE /api/students/:id` - delete
//! - `GET    /health`           - `{ "ok": true }`

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::{ServiceResponse, StudentService, STUDENTS_PATH};
use crate::model::ModelStore;
use crate::student::StudentError;

type SharedService<S> = State<Arc<StudentService<S>>>;

impl IntoResponse for ServiceResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.body)).into_response()
    }
}

/// Build an axum `Router` serving the student routes from the given service.
pub fn router<S: ModelStore + 'static>(service: Arc<StudentService<S>>) -> Router {
    let item_path = format!("{}/:id", STUDENTS_PATH);
    Router::new()
        .route("/health", get(health_handler))
        .route(
            STUDENTS_PATH,
            get(list_handler::<S>).post(create_handler::<S>),
        )
        .route(
            &item_path,
            get(get_handler::<S>)
                .put(update_handler::<S>)
                .delete(delete_handler::<S>),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Serve the service over HTTP at the given address (e.g. `"0.0.0.0:5000"`).
pub async fn serve<S: ModelStore + 'static>(
    service: Arc<StudentService<S>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("server is running on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}

/// `GET /health`
async fn health_handler() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

async fn list_handler<S: ModelStore + 'static>(State(service): SharedService<S>) -> ServiceResponse {
    blocking(service, |service| service.list()).await
}

async fn get_handler<S: ModelStore + 'static>(
    State(service): SharedService<S>,
    Path(id): Path<String>,
) -> ServiceResponse {
    blocking(service, move |service| service.get(&id)).await
}

async fn create_handler<S: ModelStore + 'static>(
    State(service): SharedService<S>,
    body: Result<Json<Value>, JsonRejection>,
) -> ServiceResponse {
    match body {
        Ok(Json(body)) => blocking(service, move |service| service.create(&body)).await,
        Err(rejection) => malformed_body(rejection),
    }
}

async fn update_handler<S: ModelStore + 'static>(
    State(service): SharedService<S>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ServiceResponse {
    match body {
        Ok(Json(body)) => blocking(service, move |service| service.update(&id, &body)).await,
        Err(rejection) => malformed_body(rejection),
    }
}

async fn delete_handler<S: ModelStore + 'static>(
    State(service): SharedService<S>,
    Path(id): Path<String>,
) -> ServiceResponse {
    blocking(service, move |service| service.delete(&id)).await
}

/// Run a store operation on the blocking pool; the file backend does
/// synchronous disk writes.
async fn blocking<S, F>(service: Arc<StudentService<S>>, op: F) -> ServiceResponse
where
    S: ModelStore + 'static,
    F: FnOnce(&StudentService<S>) -> ServiceResponse + Send + 'static,
{
    match tokio::task::spawn_blocking(move || op(&service)).await {
        Ok(response) => response,
        Err(err) => ServiceResponse::from_error(StudentError::Unexpected(err.to_string())),
    }
}

/// A body axum could not read as JSON is a client error, reported as `{error}`.
fn malformed_body(rejection: JsonRejection) -> ServiceResponse {
    let message = rejection.body_text();
    warn!("malformed request body: {}", message);
    ServiceResponse {
        status: StatusCode::BAD_REQUEST.as_u16(),
        body: json!({ "error": message }),
    }
}
