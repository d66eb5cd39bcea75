//! Mock Employee API
//!
//! Serves the same routes and status codes as the production records
//! backend so clients cannot tell the two apart.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use shared::models::{Employee, EmployeeCreate};

use crate::store::EmployeeStore;

/// Employee router over a shared store
pub fn router(store: Arc<EmployeeStore>) -> Router {
    Router::new()
        .route("/api/Employee", get(list).post(create))
        .route(
            "/api/Employee/{id}",
            axum::routing::put(update).delete(delete),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(store)
}

/// List all employees
async fn list(State(store): State<Arc<EmployeeStore>>) -> Json<Vec<Employee>> {
    Json(store.list().await)
}

/// Create a new employee
async fn create(
    State(store): State<Arc<EmployeeStore>>,
    Json(payload): Json<EmployeeCreate>,
) -> (StatusCode, Json<Employee>) {
    let employee = store.create(payload).await;
    tracing::info!("Created employee {}", employee.id);
    (StatusCode::CREATED, Json(employee))
}

/// Update an employee
async fn update(
    State(store): State<Arc<EmployeeStore>>,
    Path(id): Path<i64>,
    Json(payload): Json<Employee>,
) -> Result<Json<Employee>, StatusCode> {
    match store.update(id, payload).await {
        Some(employee) => {
            tracing::info!("Updated employee {id}");
            Ok(Json(employee))
        }
        None => {
            tracing::warn!("Update for unknown employee {id}");
            Err(StatusCode::NOT_FOUND)
        }
    }
}

/// Delete an employee
async fn delete(State(store): State<Arc<EmployeeStore>>, Path(id): Path<i64>) -> StatusCode {
    if store.delete(id).await {
        tracing::info!("Deleted employee {id}");
        StatusCode::NO_CONTENT
    } else {
        tracing::warn!("Delete for unknown employee {id}");
        StatusCode::NOT_FOUND
    }
}
