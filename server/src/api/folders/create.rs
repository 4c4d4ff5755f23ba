use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::get_conn;
use crate::models::NewFolder;
use crate::schema::folders;
use crate::SharedState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateFolderRequest {
    pub name: String,
    /// Optional display color, e.g. "#4285F4"
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreateFolderResponse {
    pub id: Uuid,
    pub name: String,
    pub color: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/folders",
    tag = "folders",
    request_body = CreateFolderRequest,
    responses(
        (status = 201, description = "Folder created successfully", body = CreateFolderResponse),
        (status = 400, description = "Invalid request (empty name)", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_folder(
    AuthUser(user): AuthUser,
    State(state): State<SharedState>,
    Json(request): Json<CreateFolderRequest>,
) -> impl IntoResponse {
    let name = request.name.trim();

    if name.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Folder name cannot be empty".to_string(),
            }),
        )
            .into_response();
    }

    let mut conn = get_conn!(state);

    // Duplicate names per owner are allowed, so this is a plain insert.
    let result: Result<(Uuid, String, Option<String>), _> = diesel::insert_into(folders::table)
        .values(NewFolder {
            user_id: user.id,
            name,
            color: request.color.as_deref(),
        })
        .returning((folders::id, folders::name, folders::color))
        .get_result(&mut conn);

    match result {
        Ok((id, name, color)) => (
            StatusCode::CREATED,
            Json(CreateFolderResponse { id, name, color }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to create folder: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create folder".to_string(),
                }),
            )
                .into_response()
        }
    }
}
