use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::get_conn;
use crate::ownership::{self, OwnershipCheck};
use crate::schema::folder_assignments;
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
    path = "/api/folders/{id}/applications/{application_id}",
    tag = "folders",
    params(
        ("id" = Uuid, Path, description = "Folder ID"),
        ("application_id" = Uuid, Path, description = "Application ID")
    ),
    responses(
        (status = 204, description = "Application removed from folder"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Folder, application or assignment not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn unassign_application(
    AuthUser(user): AuthUser,
    State(state): State<SharedState>,
    Path((id, application_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    let mut conn = get_conn!(state);

    match ownership::check_pair(&mut conn, application_id, id, user.id) {
        Ok(OwnershipCheck::Authorized(_)) => {}
        Ok(_) => return ownership::denial("Folder or application"),
        Err(e) => {
            tracing::error!("Failed to check assignment ownership: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to remove application from folder".to_string(),
                }),
            )
                .into_response();
        }
    }

    let deleted = match diesel::delete(
        folder_assignments::table
            .filter(folder_assignments::application_id.eq(application_id))
            .filter(folder_assignments::folder_id.eq(id)),
    )
    .execute(&mut conn)
    {
        Ok(count) => count,
        Err(e) => {
            tracing::error!("Failed to remove application from folder: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to remove application from folder".to_string(),
                }),
            )
                .into_response();
        }
    };

    // Removing a pair that was never assigned is a plain not-found; both
    // entities are already known to be the caller's.
    if deleted == 0 {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Application is not in this folder".to_string(),
            }),
        )
            .into_response();
    }

    StatusCode::NO_CONTENT.into_response()
}
