use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::get_conn;
use crate::ownership::{self, OwnershipCheck};
use crate::schema::applications;
use crate::types::ApplicationStatus;
use crate::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateApplicationRequest {
    /// New status; subject to the configured transition policy
    pub status: Option<ApplicationStatus>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UpdateApplicationResponse {
    pub id: Uuid,
    pub status: ApplicationStatus,
    pub notes: Option<String>,
}

#[utoipa::path(
    patch,
    path = "/api/applications/{id}",
    tag = "applications",
    params(
        ("id" = Uuid, Path, description = "Application ID")
    ),
    request_body = UpdateApplicationRequest,
    responses(
        (status = 200, description = "Application updated", body = UpdateApplicationResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Application not found or unauthorized", body = ErrorResponse),
        (status = 409, description = "Transition refused by status policy", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_application(
    AuthUser(user): AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateApplicationRequest>,
) -> impl IntoResponse {
    if request.status.is_none() && request.notes.is_none() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Nothing to update".to_string(),
            }),
        )
            .into_response();
    }

    let mut conn = get_conn!(state);

    let application = match ownership::check_application(&mut conn, id, user.id) {
        Ok(OwnershipCheck::Authorized(app)) => app,
        Ok(_) => return ownership::denial("Application"),
        Err(e) => {
            tracing::error!("Failed to check application ownership: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update application".to_string(),
                }),
            )
                .into_response();
        }
    };

    let current = ApplicationStatus::from_str(&application.status).unwrap_or_default();
    let new_status = request.status.unwrap_or(current);

    if !state.status_policy.allows(current, new_status) {
        return (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: format!(
                    "Status change {} -> {} refused by policy",
                    current.as_str(),
                    new_status.as_str()
                ),
            }),
        )
            .into_response();
    }

    let new_notes = request.notes.or(application.notes);

    let result = diesel::update(applications::table.find(id))
        .set((
            applications::status.eq(new_status.as_str()),
            applications::notes.eq(new_notes.as_deref()),
        ))
        .execute(&mut conn);

    match result {
        Ok(_) => (
            StatusCode::OK,
            Json(UpdateApplicationResponse {
                id,
                status: new_status,
                notes: new_notes,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to update application: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update application".to_string(),
                }),
            )
                .into_response()
        }
    }
}
