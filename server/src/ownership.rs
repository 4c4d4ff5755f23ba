//! Per-request ownership checks for user-owned resources.
//!
//! Every read or mutation of an application or folder goes through one of
//! these guards instead of re-implementing the id+owner filter pair in each
//! handler.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use diesel::prelude::*;
use uuid::Uuid;

use crate::api::ErrorResponse;
use crate::models::{Application, Folder};
use crate::schema::{applications, folders};

/// Outcome of resolving a resource id against the requesting identity.
///
/// `NotFound` and `Forbidden` are distinct internally but MUST be surfaced
/// through [`denial`] so a requester cannot tell a foreign resource from a
/// missing one.
#[derive(Debug)]
pub enum OwnershipCheck<T> {
    Authorized(T),
    NotFound,
    Forbidden,
}

impl<T> OwnershipCheck<T> {
    /// Combine two checks into one over the pair. Used by folder-assignment
    /// operations, which require both referenced entities to belong to the
    /// same requester.
    pub fn zip<U>(self, other: OwnershipCheck<U>) -> OwnershipCheck<(T, U)> {
        match (self, other) {
            (OwnershipCheck::Authorized(a), OwnershipCheck::Authorized(b)) => {
                OwnershipCheck::Authorized((a, b))
            }
            (OwnershipCheck::NotFound, _) | (_, OwnershipCheck::NotFound) => {
                OwnershipCheck::NotFound
            }
            _ => OwnershipCheck::Forbidden,
        }
    }
}

pub fn check_application(
    conn: &mut PgConnection,
    id: Uuid,
    requester: Uuid,
) -> QueryResult<OwnershipCheck<Application>> {
    let row = applications::table
        .filter(applications::id.eq(id))
        .select(Application::as_select())
        .first(conn)
        .optional()?;

    Ok(match row {
        None => OwnershipCheck::NotFound,
        Some(app) if app.user_id != requester => OwnershipCheck::Forbidden,
        Some(app) => OwnershipCheck::Authorized(app),
    })
}

pub fn check_folder(
    conn: &mut PgConnection,
    id: Uuid,
    requester: Uuid,
) -> QueryResult<OwnershipCheck<Folder>> {
    let row = folders::table
        .filter(folders::id.eq(id))
        .select(Folder::as_select())
        .first(conn)
        .optional()?;

    Ok(match row {
        None => OwnershipCheck::NotFound,
        Some(folder) if folder.user_id != requester => OwnershipCheck::Forbidden,
        Some(folder) => OwnershipCheck::Authorized(folder),
    })
}

pub fn check_pair(
    conn: &mut PgConnection,
    application_id: Uuid,
    folder_id: Uuid,
    requester: Uuid,
) -> QueryResult<OwnershipCheck<(Application, Folder)>> {
    let application = check_application(conn, application_id, requester)?;
    let folder = check_folder(conn, folder_id, requester)?;
    Ok(application.zip(folder))
}

/// The merged denial response: a missing resource and a foreign resource
/// produce the same status and body.
pub fn denial(resource: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("{} not found or unauthorized", resource),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authorized() -> OwnershipCheck<u8> {
        OwnershipCheck::Authorized(1)
    }

    #[test]
    fn test_zip_requires_both_authorized() {
        assert!(matches!(
            authorized().zip(authorized()),
            OwnershipCheck::Authorized((1, 1))
        ));
        assert!(matches!(
            authorized().zip(OwnershipCheck::<u8>::NotFound),
            OwnershipCheck::NotFound
        ));
        assert!(matches!(
            OwnershipCheck::<u8>::Forbidden.zip(authorized()),
            OwnershipCheck::Forbidden
        ));
        assert!(matches!(
            OwnershipCheck::<u8>::Forbidden.zip(OwnershipCheck::<u8>::NotFound),
            OwnershipCheck::NotFound
        ));
    }

    #[test]
    fn test_denial_is_a_404() {
        let response = denial("Application");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
