pub mod create;
pub mod delete;
pub mod documents;
pub mod get;
pub mod interviews;
pub mod list;
pub mod reminders;
pub mod update;

use crate::SharedState;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/applications endpoints (mounted at /api/applications)
pub fn router() -> Router<SharedState> {
    Router::new()
        .route(
            "/",
            get(list::list_applications).post(create::create_application),
        )
        .route(
            "/{id}",
            get(get::get_application)
                .patch(update::update_application)
                .delete(delete::delete_application),
        )
        .route(
            "/{id}/interviews",
            get(interviews::list_interviews).post(interviews::create_interview),
        )
        .route(
            "/{id}/reminders",
            get(reminders::list_reminders).post(reminders::create_reminder),
        )
        .route(
            "/{id}/documents",
            get(documents::list_documents)
                .post(documents::upload_document)
                .layer(DefaultBodyLimit::max(documents::MAX_DOCUMENT_SIZE + 1024)),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_application,
        list::list_applications,
        get::get_application,
        update::update_application,
        delete::delete_application,
        interviews::list_interviews,
        interviews::create_interview,
        reminders::list_reminders,
        reminders::create_reminder,
        documents::list_documents,
        documents::upload_document,
    ),
    components(schemas(
        create::CreateApplicationRequest,
        create::CreateApplicationResponse,
        list::ListApplicationsResponse,
        list::ApplicationSummary,
        list::Direction,
        get::ApplicationDetailResponse,
        get::FolderSummary,
        update::UpdateApplicationRequest,
        update::UpdateApplicationResponse,
        interviews::CreateInterviewRequest,
        interviews::InterviewResponse,
        interviews::InterviewsResponse,
        reminders::CreateReminderRequest,
        reminders::ReminderResponse,
        reminders::RemindersResponse,
        documents::UploadDocumentRequest,
        documents::DocumentResponse,
        documents::DocumentsResponse,
    ))
)]
pub struct ApiDoc;
