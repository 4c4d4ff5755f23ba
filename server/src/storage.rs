//! Filesystem-backed store for uploaded application documents.
//!
//! The application row keeps only the relative path returned by
//! [`DocumentStore::save`]; serving the bytes back is the job of whatever
//! fronts the uploads directory.

use std::path::{Path, PathBuf};

use chrono::Utc;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct DocumentStore {
    root: PathBuf,
}

impl DocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DocumentStore { root: root.into() }
    }

    #[allow(dead_code)]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write the uploaded bytes and return the relative path persisted on
    /// the document row. Files are grouped per application and prefixed
    /// with the upload timestamp so re-uploads of the same name never
    /// collide.
    pub async fn save(
        &self,
        application_id: Uuid,
        original_name: &str,
        bytes: &[u8],
    ) -> std::io::Result<String> {
        let name = sanitize_file_name(original_name);
        let relative = format!(
            "{}/{}_{}",
            application_id,
            Utc::now().timestamp_millis(),
            name
        );
        let full = self.root.join(&relative);

        if let Some(parent) = full.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&full, bytes).await?;

        Ok(relative)
    }
}

/// Keep only the final path component of the client-supplied name and
/// replace anything that could escape the store root or upset a filesystem.
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or("");
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = cleaned.trim_matches('.');

    if trimmed.is_empty() {
        "file".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_ordinary_names() {
        assert_eq!(sanitize_file_name("resume.pdf"), "resume.pdf");
        assert_eq!(sanitize_file_name("cover-letter_v2.docx"), "cover-letter_v2.docx");
    }

    #[test]
    fn test_sanitize_strips_directories() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\Users\\me\\resume.pdf"), "resume.pdf");
    }

    #[test]
    fn test_sanitize_replaces_odd_characters() {
        assert_eq!(sanitize_file_name("my resume (final).pdf"), "my_resume__final_.pdf");
    }

    #[test]
    fn test_sanitize_never_returns_empty() {
        assert_eq!(sanitize_file_name(""), "file");
        assert_eq!(sanitize_file_name("..."), "file");
        assert_eq!(sanitize_file_name("docs/"), "file");
    }

    #[tokio::test]
    async fn test_save_writes_under_application_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path());
        let application_id = Uuid::new_v4();

        let relative = store
            .save(application_id, "resume.pdf", b"%PDF-1.4 fake")
            .await
            .unwrap();

        assert!(relative.starts_with(&application_id.to_string()));
        assert!(relative.ends_with("_resume.pdf"));

        let written = tokio::fs::read(dir.path().join(&relative)).await.unwrap();
        assert_eq!(written, b"%PDF-1.4 fake");
    }
}
