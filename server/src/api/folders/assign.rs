use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::get_conn;
use crate::models::NewFolderAssignment;
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
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AssignmentResponse {
    pub application_id: Uuid,
    pub folder_id: Uuid,
}

#[utoipa::path(
    put,
    path = "/api/folders/{id}/applications/{application_id}",
    tag = "folders",
    params(
        ("id" = Uuid, Path, description = "Folder ID"),
        ("application_id" = Uuid, Path, description = "Application ID")
    ),
    responses(
        (status = 201, description = "Application assigned to folder", body = AssignmentResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Folder or application not found or unauthorized", body = ErrorResponse),
        (status = 409, description = "Application already in this folder", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn assign_application(
    AuthUser(user): AuthUser,
    State(state): State<SharedState>,
    Path((id, application_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    let mut conn = get_conn!(state);

    // Both sides of the link must belong to the caller.
    match ownership::check_pair(&mut conn, application_id, id, user.id) {
        Ok(OwnershipCheck::Authorized(_)) => {}
        Ok(_) => return ownership::denial("Folder or application"),
        Err(e) => {
            tracing::error!("Failed to check assignment ownership: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to assign application".to_string(),
                }),
            )
                .into_response();
        }
    }

    // The composite primary key turns a duplicate assignment into a
    // unique violation; it is rejected, not merged.
    let result = diesel::insert_into(folder_assignments::table)
        .values(NewFolderAssignment {
            application_id,
            folder_id: id,
        })
        .execute(&mut conn);

    match result {
        Ok(_) => (
            StatusCode::CREATED,
            Json(AssignmentResponse {
                application_id,
                folder_id: id,
            }),
        )
            .into_response(),
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: "Application already in this folder".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to assign application: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to assign application".to_string(),
                }),
            )
                .into_response()
        }
    }
}
