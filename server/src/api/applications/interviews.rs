use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::get_conn;
use crate::models::{Interview, NewInterview};
use crate::ownership::{self, OwnershipCheck};
use crate::schema::interviews;
use crate::types::InterviewType;
use crate::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateInterviewRequest {
    pub interview_type: InterviewType,
    pub scheduled_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub outcome: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InterviewResponse {
    pub id: Uuid,
    pub interview_type: Option<InterviewType>,
    pub scheduled_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub outcome: Option<String>,
}

impl From<Interview> for InterviewResponse {
    fn from(interview: Interview) -> Self {
        InterviewResponse {
            id: interview.id,
            interview_type: InterviewType::from_str(&interview.interview_type),
            scheduled_at: interview.scheduled_at,
            notes: interview.notes,
            outcome: interview.outcome,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InterviewsResponse {
    pub interviews: Vec<InterviewResponse>,
}

#[utoipa::path(
    get,
    path = "/api/applications/{id}/interviews",
    tag = "interviews",
    params(
        ("id" = Uuid, Path, description = "Application ID")
    ),
    responses(
        (status = 200, description = "Interviews for the application, soonest first", body = InterviewsResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Application not found or unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_interviews(
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
                    error: "Failed to fetch interviews".to_string(),
                }),
            )
                .into_response();
        }
    }

    let rows: Vec<Interview> = match interviews::table
        .filter(interviews::application_id.eq(id))
        .select(Interview::as_select())
        .order(interviews::scheduled_at.asc())
        .load(&mut conn)
    {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to fetch interviews: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch interviews".to_string(),
                }),
            )
                .into_response();
        }
    };

    (
        StatusCode::OK,
        Json(InterviewsResponse {
            interviews: rows.into_iter().map(Into::into).collect(),
        }),
    )
        .into_response()
}

#[utoipa::path(
    post,
    path = "/api/applications/{id}/interviews",
    tag = "interviews",
    params(
        ("id" = Uuid, Path, description = "Application ID")
    ),
    request_body = CreateInterviewRequest,
    responses(
        (status = 201, description = "Interview scheduled", body = InterviewResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Application not found or unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_interview(
    AuthUser(user): AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CreateInterviewRequest>,
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
                    error: "Failed to create interview".to_string(),
                }),
            )
                .into_response();
        }
    }

    let new_interview = NewInterview {
        application_id: id,
        interview_type: request.interview_type.as_str(),
        scheduled_at: request.scheduled_at,
        notes: request.notes.as_deref(),
        outcome: request.outcome.as_deref(),
    };

    let result: Result<Interview, _> = diesel::insert_into(interviews::table)
        .values(&new_interview)
        .returning(Interview::as_returning())
        .get_result(&mut conn);

    match result {
        Ok(row) => (StatusCode::CREATED, Json(InterviewResponse::from(row))).into_response(),
        Err(e) => {
            tracing::error!("Failed to create interview: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create interview".to_string(),
                }),
            )
                .into_response()
        }
    }
}
