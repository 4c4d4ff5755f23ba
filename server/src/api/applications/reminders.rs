use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::get_conn;
use crate::models::{NewReminder, Reminder};
use crate::ownership::{self, OwnershipCheck};
use crate::schema::reminders;
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
pub struct CreateReminderRequest {
    pub remind_at: DateTime<Utc>,
    pub title: String,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReminderResponse {
    pub id: Uuid,
    pub remind_at: DateTime<Utc>,
    pub title: String,
    pub message: Option<String>,
}

impl From<Reminder> for ReminderResponse {
    fn from(reminder: Reminder) -> Self {
        ReminderResponse {
            id: reminder.id,
            remind_at: reminder.remind_at,
            title: reminder.title,
            message: reminder.message,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RemindersResponse {
    pub reminders: Vec<ReminderResponse>,
}

#[utoipa::path(
    get,
    path = "/api/applications/{id}/reminders",
    tag = "reminders",
    params(
        ("id" = Uuid, Path, description = "Application ID")
    ),
    responses(
        (status = 200, description = "Reminders for the application, soonest first", body = RemindersResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Application not found or unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_reminders(
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
                    error: "Failed to fetch reminders".to_string(),
                }),
            )
                .into_response();
        }
    }

    let rows: Vec<Reminder> = match reminders::table
        .filter(reminders::application_id.eq(id))
        .select(Reminder::as_select())
        .order(reminders::remind_at.asc())
        .load(&mut conn)
    {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to fetch reminders: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch reminders".to_string(),
                }),
            )
                .into_response();
        }
    };

    (
        StatusCode::OK,
        Json(RemindersResponse {
            reminders: rows.into_iter().map(Into::into).collect(),
        }),
    )
        .into_response()
}

#[utoipa::path(
    post,
    path = "/api/applications/{id}/reminders",
    tag = "reminders",
    params(
        ("id" = Uuid, Path, description = "Application ID")
    ),
    request_body = CreateReminderRequest,
    responses(
        (status = 201, description = "Reminder created", body = ReminderResponse),
        (status = 400, description = "Invalid request (empty title)", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Application not found or unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_reminder(
    AuthUser(user): AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CreateReminderRequest>,
) -> impl IntoResponse {
    let title = request.title.trim();

    if title.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Reminder title cannot be empty".to_string(),
            }),
        )
            .into_response();
    }

    let mut conn = get_conn!(state);

    match ownership::check_application(&mut conn, id, user.id) {
        Ok(OwnershipCheck::Authorized(_)) => {}
        Ok(_) => return ownership::denial("Application"),
        Err(e) => {
            tracing::error!("Failed to check application ownership: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create reminder".to_string(),
                }),
            )
                .into_response();
        }
    }

    let new_reminder = NewReminder {
        application_id: id,
        remind_at: request.remind_at,
        title,
        message: request.message.as_deref(),
    };

    let result: Result<Reminder, _> = diesel::insert_into(reminders::table)
        .values(&new_reminder)
        .returning(Reminder::as_returning())
        .get_result(&mut conn);

    match result {
        Ok(row) => (StatusCode::CREATED, Json(ReminderResponse::from(row))).into_response(),
        Err(e) => {
            tracing::error!("Failed to create reminder: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create reminder".to_string(),
                }),
            )
                .into_response()
        }
    }
}
