use crate::api::applications::documents::DocumentResponse;
use crate::api::applications::interviews::InterviewResponse;
use crate::api::applications::reminders::ReminderResponse;
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::get_conn;
use crate::models::{Document, Folder, Interview, JobPosting, Reminder};
use crate::ownership::{self, OwnershipCheck};
use crate::schema::{documents, folder_assignments, folders, interviews, job_postings, reminders};
use crate::types::{ApplicationStatus, PostingResponse};
use crate::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FolderSummary {
    pub id: Uuid,
    pub name: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApplicationDetailResponse {
    pub id: Uuid,
    pub status: ApplicationStatus,
    pub notes: Option<String>,
    pub applied_at: DateTime<Utc>,
    pub posting: PostingResponse,
    pub folders: Vec<FolderSummary>,
    pub interviews: Vec<InterviewResponse>,
    pub reminders: Vec<ReminderResponse>,
    pub documents: Vec<DocumentResponse>,
}

#[utoipa::path(
    get,
    path = "/api/applications/{id}",
    tag = "applications",
    params(
        ("id" = Uuid, Path, description = "Application ID")
    ),
    responses(
        (status = 200, description = "Application details", body = ApplicationDetailResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Application not found or unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_application(
    AuthUser(user): AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = get_conn!(state);

    let application = match ownership::check_application(&mut conn, id, user.id) {
        Ok(OwnershipCheck::Authorized(app)) => app,
        Ok(_) => return ownership::denial("Application"),
        Err(e) => {
            tracing::error!("Failed to check application ownership: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch application".to_string(),
                }),
            )
                .into_response();
        }
    };

    let detail: Result<ApplicationDetailResponse, diesel::result::Error> = (|| {
        let posting: JobPosting = job_postings::table
            .find(application.job_url.as_str())
            .select(JobPosting::as_select())
            .first(&mut conn)?;

        let folder_rows: Vec<Folder> = folders::table
            .inner_join(folder_assignments::table)
            .filter(folder_assignments::application_id.eq(application.id))
            .select(Folder::as_select())
            .order(folders::name.asc())
            .load(&mut conn)?;

        let interview_rows: Vec<Interview> = interviews::table
            .filter(interviews::application_id.eq(application.id))
            .select(Interview::as_select())
            .order(interviews::scheduled_at.asc())
            .load(&mut conn)?;

        let reminder_rows: Vec<Reminder> = reminders::table
            .filter(reminders::application_id.eq(application.id))
            .select(Reminder::as_select())
            .order(reminders::remind_at.asc())
            .load(&mut conn)?;

        let document_rows: Vec<Document> = documents::table
            .filter(documents::application_id.eq(application.id))
            .select(Document::as_select())
            .order(documents::uploaded_at.desc())
            .load(&mut conn)?;

        Ok(ApplicationDetailResponse {
            id: application.id,
            status: ApplicationStatus::from_str(&application.status).unwrap_or_default(),
            notes: application.notes,
            applied_at: application.applied_at,
            posting: posting.into(),
            folders: folder_rows
                .into_iter()
                .map(|f| FolderSummary {
                    id: f.id,
                    name: f.name,
                    color: f.color,
                })
                .collect(),
            interviews: interview_rows.into_iter().map(Into::into).collect(),
            reminders: reminder_rows.into_iter().map(Into::into).collect(),
            documents: document_rows.into_iter().map(Into::into).collect(),
        })
    })();

    match detail {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch application detail: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch application".to_string(),
                }),
            )
                .into_response()
        }
    }
}
