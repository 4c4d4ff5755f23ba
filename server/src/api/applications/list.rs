use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::get_conn;
use crate::ownership::{self, OwnershipCheck};
use crate::schema::{applications, folder_assignments, job_postings};
use crate::types::{ApplicationStatus, LocationType, PostingResponse};
use crate::SharedState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Sort direction for applied_at
#[derive(Debug, Default, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Descending (newest first)
    #[default]
    Desc,
    /// Ascending (oldest first)
    Asc,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListApplicationsParams {
    /// Number of items to return (default: 20, max: 1000)
    pub limit: Option<i64>,
    /// Number of items to skip (default: 0)
    pub offset: Option<i64>,
    /// Only applications in this status
    pub status: Option<ApplicationStatus>,
    /// Only applications assigned to this folder (must be the caller's)
    pub folder_id: Option<Uuid>,
    /// Case-insensitive substring match on posting title or company
    pub q: Option<String>,
    /// Sort direction on applied_at (default: desc)
    #[serde(default)]
    pub sort_dir: Direction,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginationMetadata {
    /// Total number of items available
    pub total: i64,
    /// Number of items requested (limit)
    pub limit: i64,
    /// Number of items skipped (offset)
    pub offset: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApplicationSummary {
    pub id: Uuid,
    pub status: ApplicationStatus,
    pub notes: Option<String>,
    pub applied_at: DateTime<Utc>,
    pub posting: PostingResponse,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListApplicationsResponse {
    pub applications: Vec<ApplicationSummary>,
    pub pagination: PaginationMetadata,
}

#[derive(Queryable)]
struct ApplicationForList {
    id: Uuid,
    status: String,
    notes: Option<String>,
    applied_at: DateTime<Utc>,
    job_url: String,
    title: String,
    company: String,
    location: Option<String>,
    location_type: Option<String>,
    salary_min: Option<i32>,
    salary_max: Option<i32>,
    /// Total count of all matching rows (from window function)
    total_count: i64,
}

#[utoipa::path(
    get,
    path = "/api/applications",
    tag = "applications",
    params(ListApplicationsParams),
    responses(
        (status = 200, description = "List of the caller's applications", body = ListApplicationsResponse),
        (status = 400, description = "Invalid parameters", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Folder not found or unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_applications(
    AuthUser(user): AuthUser,
    State(state): State<SharedState>,
    Query(params): Query<ListApplicationsParams>,
) -> impl IntoResponse {
    let limit = params.limit.unwrap_or(20).clamp(1, 1000);
    let offset = params.offset.unwrap_or(0).max(0);

    let mut conn = get_conn!(state);

    // Filtering by a folder is a read through that folder, so it gets the
    // same guard as any other folder access.
    if let Some(folder_id) = params.folder_id {
        match ownership::check_folder(&mut conn, folder_id, user.id) {
            Ok(OwnershipCheck::Authorized(_)) => {}
            Ok(_) => return ownership::denial("Folder"),
            Err(e) => {
                tracing::error!("Failed to check folder ownership: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Failed to fetch applications".to_string(),
                    }),
                )
                    .into_response();
            }
        }
    }

    let text_pattern = params.q.as_deref().and_then(|q| {
        let q = q.trim();
        if q.is_empty() {
            None
        } else {
            Some(format!("%{}%", q.replace('%', "\\%").replace('_', "\\_")))
        }
    });

    let mut query = applications::table
        .inner_join(job_postings::table)
        .filter(applications::user_id.eq(user.id))
        .into_boxed();

    if let Some(status) = params.status {
        query = query.filter(applications::status.eq(status.as_str()));
    }

    if let Some(folder_id) = params.folder_id {
        query = query.filter(
            applications::id.eq_any(
                folder_assignments::table
                    .filter(folder_assignments::folder_id.eq(folder_id))
                    .select(folder_assignments::application_id),
            ),
        );
    }

    if let Some(ref pattern) = text_pattern {
        query = query.filter(
            job_postings::title
                .ilike(pattern)
                .or(job_postings::company.ilike(pattern)),
        );
    }

    let query = match params.sort_dir {
        Direction::Desc => query.order(applications::applied_at.desc()),
        Direction::Asc => query.order(applications::applied_at.asc()),
    };

    // COUNT(*) OVER() carries the total matching count on every row, so one
    // round trip serves both the page and the pagination metadata.
    let results: Vec<ApplicationForList> = match query
        .select((
            applications::id,
            applications::status,
            applications::notes,
            applications::applied_at,
            job_postings::job_url,
            job_postings::title,
            job_postings::company,
            job_postings::location,
            job_postings::location_type,
            job_postings::salary_min,
            job_postings::salary_max,
            sql::<BigInt>("COUNT(*) OVER()"),
        ))
        .limit(limit)
        .offset(offset)
        .load(&mut conn)
    {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to fetch applications: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch applications".to_string(),
                }),
            )
                .into_response();
        }
    };

    let total = results.first().map(|r| r.total_count).unwrap_or(0);

    let applications = results
        .into_iter()
        .map(|r| ApplicationSummary {
            id: r.id,
            status: ApplicationStatus::from_str(&r.status).unwrap_or_default(),
            notes: r.notes,
            applied_at: r.applied_at,
            posting: PostingResponse {
                location_type: r.location_type.as_deref().and_then(LocationType::from_str),
                job_url: r.job_url,
                title: r.title,
                company: r.company,
                location: r.location,
                salary_min: r.salary_min,
                salary_max: r.salary_max,
            },
        })
        .collect();

    (
        StatusCode::OK,
        Json(ListApplicationsResponse {
            applications,
            pagination: PaginationMetadata {
                total,
                limit,
                offset,
            },
        }),
    )
        .into_response()
}
