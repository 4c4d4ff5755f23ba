use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::get_conn;
use crate::models::{Document, NewDocument};
use crate::ownership::{self, OwnershipCheck};
use crate::schema::documents;
use crate::types::DocumentType;
use crate::SharedState;
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

pub const MAX_DOCUMENT_SIZE: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DocumentResponse {
    pub id: Uuid,
    pub document_type: Option<DocumentType>,
    pub file_path: String,
    pub uploaded_at: DateTime<Utc>,
}

impl From<Document> for DocumentResponse {
    fn from(document: Document) -> Self {
        DocumentResponse {
            id: document.id,
            document_type: DocumentType::from_str(&document.document_type),
            file_path: document.file_path,
            uploaded_at: document.uploaded_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DocumentsResponse {
    pub documents: Vec<DocumentResponse>,
}

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadDocumentRequest {
    /// One of RESUME, COVER_LETTER, OTHER
    pub document_type: String,
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

#[utoipa::path(
    get,
    path = "/api/applications/{id}/documents",
    tag = "documents",
    params(
        ("id" = Uuid, Path, description = "Application ID")
    ),
    responses(
        (status = 200, description = "Documents for the application, newest first", body = DocumentsResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Application not found or unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_documents(
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
                    error: "Failed to fetch documents".to_string(),
                }),
            )
                .into_response();
        }
    }

    let rows: Vec<Document> = match documents::table
        .filter(documents::application_id.eq(id))
        .select(Document::as_select())
        .order(documents::uploaded_at.desc())
        .load(&mut conn)
    {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to fetch documents: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch documents".to_string(),
                }),
            )
                .into_response();
        }
    };

    (
        StatusCode::OK,
        Json(DocumentsResponse {
            documents: rows.into_iter().map(Into::into).collect(),
        }),
    )
        .into_response()
}

#[utoipa::path(
    post,
    path = "/api/applications/{id}/documents",
    tag = "documents",
    params(
        ("id" = Uuid, Path, description = "Application ID")
    ),
    request_body(content_type = "multipart/form-data", content = UploadDocumentRequest),
    responses(
        (status = 201, description = "Document uploaded", body = DocumentResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Application not found or unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn upload_document(
    AuthUser(user): AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    {
        let mut conn = get_conn!(state);

        match ownership::check_application(&mut conn, id, user.id) {
            Ok(OwnershipCheck::Authorized(_)) => {}
            Ok(_) => return ownership::denial("Application"),
            Err(e) => {
                tracing::error!("Failed to check application ownership: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Failed to upload document".to_string(),
                    }),
                )
                    .into_response();
            }
        }
    }

    let mut document_type: Option<DocumentType> = None;
    let mut file_name: Option<String> = None;
    let mut data: Option<Vec<u8>> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("Multipart read error: {}", e);
                let error_msg = if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    format!("File too large. Maximum size is {} bytes", MAX_DOCUMENT_SIZE)
                } else {
                    format!("Failed to read multipart data: {}", e.body_text())
                };
                return (e.status(), Json(ErrorResponse { error: error_msg })).into_response();
            }
        };

        let field_name = field.name().map(|n| n.to_string());

        match field_name.as_deref() {
            Some("document_type") => {
                let value = match field.text().await {
                    Ok(v) => v,
                    Err(e) => {
                        return (
                            e.status(),
                            Json(ErrorResponse {
                                error: format!("Failed to read document_type: {}", e.body_text()),
                            }),
                        )
                            .into_response()
                    }
                };
                document_type = DocumentType::from_str(value.trim());
                if document_type.is_none() {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorResponse {
                            error: format!("Unknown document type: {}", value.trim()),
                        }),
                    )
                        .into_response();
                }
            }
            Some("file") => {
                file_name = field.file_name().map(|n| n.to_string());
                let bytes = match field.bytes().await {
                    Ok(b) => b,
                    Err(e) => {
                        tracing::warn!("Field read error: {}", e);
                        let error_msg = if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                            format!("File too large. Maximum size is {} bytes", MAX_DOCUMENT_SIZE)
                        } else {
                            format!("Failed to read file data: {}", e.body_text())
                        };
                        return (e.status(), Json(ErrorResponse { error: error_msg }))
                            .into_response();
                    }
                };
                data = Some(bytes.to_vec());
            }
            _ => {}
        }
    }

    let Some(document_type) = document_type else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No document_type provided".to_string(),
            }),
        )
            .into_response();
    };

    let Some(data) = data else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No file provided".to_string(),
            }),
        )
            .into_response();
    };

    if data.len() > MAX_DOCUMENT_SIZE {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("File too large. Maximum size is {} bytes", MAX_DOCUMENT_SIZE),
            }),
        )
            .into_response();
    }

    let file_name = file_name.unwrap_or_default();

    // The store owns naming; only the relative path it hands back is kept.
    let file_path = match state.documents.save(id, &file_name, &data).await {
        Ok(path) => path,
        Err(e) => {
            tracing::error!("Failed to store document: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to store document".to_string(),
                }),
            )
                .into_response();
        }
    };

    let mut conn = get_conn!(state);

    let new_document = NewDocument {
        application_id: id,
        document_type: document_type.as_str(),
        file_path: &file_path,
    };

    let result: Result<Document, _> = diesel::insert_into(documents::table)
        .values(&new_document)
        .returning(Document::as_returning())
        .get_result(&mut conn);

    match result {
        Ok(row) => (StatusCode::CREATED, Json(DocumentResponse::from(row))).into_response(),
        Err(e) => {
            tracing::error!("Failed to save document record: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to save document record".to_string(),
                }),
            )
                .into_response()
        }
    }
}
