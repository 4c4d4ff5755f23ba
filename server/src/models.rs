use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub name: &'a str,
    pub password_hash: &'a str,
    pub phone: Option<&'a str>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::sessions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct Session {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::sessions)]
pub struct NewSession<'a> {
    pub user_id: Uuid,
    pub token_hash: &'a str,
    pub expires_at: DateTime<Utc>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::job_postings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct JobPosting {
    pub job_url: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub location_type: Option<String>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::job_postings)]
pub struct NewJobPosting<'a> {
    pub job_url: &'a str,
    pub title: &'a str,
    pub company: &'a str,
    pub location: Option<&'a str>,
    pub location_type: Option<&'a str>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::applications)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Application {
    pub id: Uuid,
    pub user_id: Uuid,
    pub job_url: String,
    pub status: String,
    pub notes: Option<String>,
    pub applied_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::applications)]
pub struct NewApplication<'a> {
    pub user_id: Uuid,
    pub job_url: &'a str,
    pub status: &'a str,
    pub notes: Option<&'a str>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::folders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Folder {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::folders)]
pub struct NewFolder<'a> {
    pub user_id: Uuid,
    pub name: &'a str,
    pub color: Option<&'a str>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::folder_assignments)]
pub struct NewFolderAssignment {
    pub application_id: Uuid,
    pub folder_id: Uuid,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::interviews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Interview {
    pub id: Uuid,
    pub application_id: Uuid,
    pub interview_type: String,
    pub scheduled_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub outcome: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::interviews)]
pub struct NewInterview<'a> {
    pub application_id: Uuid,
    pub interview_type: &'a str,
    pub scheduled_at: DateTime<Utc>,
    pub notes: Option<&'a str>,
    pub outcome: Option<&'a str>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::reminders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Reminder {
    pub id: Uuid,
    pub application_id: Uuid,
    pub remind_at: DateTime<Utc>,
    pub title: String,
    pub message: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::reminders)]
pub struct NewReminder<'a> {
    pub application_id: Uuid,
    pub remind_at: DateTime<Utc>,
    pub title: &'a str,
    pub message: Option<&'a str>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::documents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Document {
    pub id: Uuid,
    pub application_id: Uuid,
    pub document_type: String,
    pub file_path: String,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::documents)]
pub struct NewDocument<'a> {
    pub application_id: Uuid,
    pub document_type: &'a str,
    pub file_path: &'a str,
}
