use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::registry::{RegistryError, SharedRegistry};
use crate::services::signup_service;

pub async fn list_activities_handler(State(registry): State<SharedRegistry>) -> impl IntoResponse {
    Json(signup_service::list_activities(&registry))
}

#[derive(Debug, Deserialize, Default)]
pub struct ParticipantQuery {
    pub email: Option<String>,
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(registry): State<SharedRegistry>,
) -> impl IntoResponse {
    let Some(email) = query.email.as_deref() else {
        return missing_email();
    };

    match signup_service::signup(&registry, &activity_name, email) {
        Ok(message) => Json(json!({ "message": message })).into_response(),
        Err(e) => {
            warn!("Signup rejected for {}: {}", activity_name, e);
            rejection(e)
        }
    }
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(registry): State<SharedRegistry>,
) -> impl IntoResponse {
    let Some(email) = query.email.as_deref() else {
        return missing_email();
    };

    match signup_service::unregister(&registry, &activity_name, email) {
        Ok(message) => Json(json!({ "message": message })).into_response(),
        Err(e) => {
            warn!("Unregister rejected for {}: {}", activity_name, e);
            rejection(e)
        }
    }
}

fn missing_email() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "detail": "Missing email" })),
    )
        .into_response()
}

fn rejection(err: RegistryError) -> Response {
    let status = match err {
        RegistryError::ActivityNotFound => StatusCode::NOT_FOUND,
        RegistryError::AlreadyRegistered { .. }
        | RegistryError::CapacityExceeded { .. }
        | RegistryError::NotRegistered { .. } => StatusCode::BAD_REQUEST,
    };
    (status, Json(json!({ "detail": err.to_string() }))).into_response()
}
