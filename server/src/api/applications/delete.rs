use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::get_conn;
use crate::ownership::{self, OwnershipCheck};
use crate::schema::applications;
use crate::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use uuid::Uuid;

#[utoipa::path(
    delete,
    path = "/api/applications/{id}",
    tag = "applications",
    params(
        ("id" = Uuid, Path, description = "Application ID")
    ),
    responses(
        (status = 204, description = "Application deleted successfully"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Application not found or unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_application(
    AuthUser(user): AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = get_conn!(state);

    match ownership::check_application(&mut conn, id, user.id) {
        Ok(OwnershipCheck::Authorized(_)) => {}
        Ok(_) => return ownership::denial("Application"),
        Err(e) => {
            tracing::error!("Failed to check application ownership: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to delete application".to_string(),
                }),
            )
                .into_response();
        }
    }

    // Hard delete; interviews, reminders, documents and folder assignments
    // go with it via FK cascades.
    match diesel::delete(applications::table.find(id)).execute(&mut conn) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!("Failed to delete application: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to delete application".to_string(),
                }),
            )
                .into_response()
        }
    }
}
