pub mod assign;
pub mod create;
pub mod delete;
pub mod list;
pub mod unassign;
pub mod update;

use crate::SharedState;
use axum::routing::{get, patch, put};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/folders endpoints (mounted at /api/folders)
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(list::list_folders).post(create::create_folder))
        .route(
            "/{id}",
            patch(update::update_folder).delete(delete::delete_folder),
        )
        .route(
            "/{id}/applications/{application_id}",
            put(assign::assign_application).delete(unassign::unassign_application),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_folder,
        list::list_folders,
        update::update_folder,
        delete::delete_folder,
        assign::assign_application,
        unassign::unassign_application,
    ),
    components(schemas(
        create::CreateFolderRequest,
        create::CreateFolderResponse,
        list::FolderItem,
        list::ListFoldersResponse,
        update::UpdateFolderRequest,
        update::UpdateFolderResponse,
        assign::AssignmentResponse,
    ))
)]
pub struct ApiDoc;
