use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::get_conn;
use crate::models::{NewApplication, NewJobPosting};
use crate::schema::{applications, job_postings};
use crate::types::{salary_range_valid, ApplicationStatus, LocationType};
use crate::SharedState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateApplicationRequest {
    pub job_url: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub location_type: Option<LocationType>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    /// Initial status, defaults to INTERESTED
    pub status: Option<ApplicationStatus>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreateApplicationResponse {
    pub id: Uuid,
}

#[utoipa::path(
    post,
    path = "/api/applications",
    tag = "applications",
    request_body = CreateApplicationRequest,
    responses(
        (status = 201, description = "Application created successfully", body = CreateApplicationResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_application(
    AuthUser(user): AuthUser,
    State(state): State<SharedState>,
    Json(request): Json<CreateApplicationRequest>,
) -> impl IntoResponse {
    let job_url = request.job_url.trim();
    let title = request.title.trim();
    let company = request.company.trim();

    if job_url.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Job URL cannot be empty".to_string(),
            }),
        )
            .into_response();
    }

    if title.is_empty() || company.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Title and company cannot be empty".to_string(),
            }),
        )
            .into_response();
    }

    if !salary_range_valid(request.salary_min, request.salary_max) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "salary_min cannot exceed salary_max".to_string(),
            }),
        )
            .into_response();
    }

    let status = request.status.unwrap_or_default();

    let mut conn = get_conn!(state);

    // Upsert the posting, then insert the application, in one transaction
    // so a failure between the two steps leaves nothing behind. Multiple
    // users applying to the same url share one posting row; an existing
    // row's attributes are left untouched.
    let result: Result<Uuid, diesel::result::Error> = conn.transaction(|conn| {
        let new_posting = NewJobPosting {
            job_url,
            title,
            company,
            location: request.location.as_deref(),
            location_type: request.location_type.map(|lt| lt.as_str()),
            salary_min: request.salary_min,
            salary_max: request.salary_max,
        };

        diesel::insert_into(job_postings::table)
            .values(&new_posting)
            .on_conflict(job_postings::job_url)
            .do_nothing()
            .execute(conn)?;

        let new_application = NewApplication {
            user_id: user.id,
            job_url,
            status: status.as_str(),
            notes: request.notes.as_deref(),
        };

        diesel::insert_into(applications::table)
            .values(&new_application)
            .returning(applications::id)
            .get_result(conn)
    });

    match result {
        Ok(id) => (StatusCode::CREATED, Json(CreateApplicationResponse { id })).into_response(),
        Err(e) => {
            tracing::error!("Failed to create application: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create application".to_string(),
                }),
            )
                .into_response()
        }
    }
}
