use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::get_conn;
use crate::ownership::{self, OwnershipCheck};
use crate::schema::folders;
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
pub struct UpdateFolderRequest {
    pub name: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UpdateFolderResponse {
    pub id: Uuid,
    pub name: String,
    pub color: Option<String>,
}

#[utoipa::path(
    patch,
    path = "/api/folders/{id}",
    tag = "folders",
    params(
        ("id" = Uuid, Path, description = "Folder ID")
    ),
    request_body = UpdateFolderRequest,
    responses(
        (status = 200, description = "Folder updated", body = UpdateFolderResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Folder not found or unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_folder(
    AuthUser(user): AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateFolderRequest>,
) -> impl IntoResponse {
    if request.name.is_none() && request.color.is_none() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Nothing to update".to_string(),
            }),
        )
            .into_response();
    }

    if let Some(ref name) = request.name {
        if name.trim().is_empty() {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Folder name cannot be empty".to_string(),
                }),
            )
                .into_response();
        }
    }

    let mut conn = get_conn!(state);

    let folder = match ownership::check_folder(&mut conn, id, user.id) {
        Ok(OwnershipCheck::Authorized(folder)) => folder,
        Ok(_) => return ownership::denial("Folder"),
        Err(e) => {
            tracing::error!("Failed to check folder ownership: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update folder".to_string(),
                }),
            )
                .into_response();
        }
    };

    // Names need not be unique per owner, so no duplicate check here.
    let new_name = request
        .name
        .map(|n| n.trim().to_string())
        .unwrap_or(folder.name);
    let new_color = request.color.or(folder.color);

    let result = diesel::update(folders::table.find(id))
        .set((folders::name.eq(&new_name), folders::color.eq(new_color.as_deref())))
        .execute(&mut conn);

    match result {
        Ok(_) => (
            StatusCode::OK,
            Json(UpdateFolderResponse {
                id,
                name: new_name,
                color: new_color,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to update folder: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update folder".to_string(),
                }),
            )
                .into_response()
        }
    }
}
