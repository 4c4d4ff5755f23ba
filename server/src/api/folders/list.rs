use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::get_conn;
use crate::schema::{folder_assignments, folders};
use crate::SharedState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use diesel::dsl::count;
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FolderItem {
    pub id: Uuid,
    pub name: String,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Number of applications assigned to this folder
    pub application_count: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListFoldersResponse {
    pub folders: Vec<FolderItem>,
}

// Type alias for query result row
type FolderRow = (Uuid, String, Option<String>, DateTime<Utc>, i64);

#[utoipa::path(
    get,
    path = "/api/folders",
    tag = "folders",
    responses(
        (status = 200, description = "The caller's folders with application counts", body = ListFoldersResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_folders(
    AuthUser(user): AuthUser,
    State(state): State<SharedState>,
) -> impl IntoResponse {
    let mut conn = get_conn!(state);

    let rows: Vec<FolderRow> = match folders::table
        .left_join(folder_assignments::table)
        .filter(folders::user_id.eq(user.id))
        .group_by((
            folders::id,
            folders::name,
            folders::color,
            folders::created_at,
        ))
        .select((
            folders::id,
            folders::name,
            folders::color,
            folders::created_at,
            count(folder_assignments::application_id.nullable()),
        ))
        .order(folders::name.asc())
        .load(&mut conn)
    {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Failed to fetch folders: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch folders".to_string(),
                }),
            )
                .into_response();
        }
    };

    let folders = rows
        .into_iter()
        .map(|(id, name, color, created_at, application_count)| FolderItem {
            id,
            name,
            color,
            created_at,
            application_count,
        })
        .collect();

    (StatusCode::OK, Json(ListFoldersResponse { folders })).into_response()
}
