use crate::models::JobPosting;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Pipeline stage of an application. Stored as its SCREAMING_SNAKE_CASE
/// string in the applications.status column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    #[default]
    Interested,
    Applied,
    OnlineAssessment,
    PhoneScreen,
    Onsite,
    Offer,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Interested => "INTERESTED",
            ApplicationStatus::Applied => "APPLIED",
            ApplicationStatus::OnlineAssessment => "ONLINE_ASSESSMENT",
            ApplicationStatus::PhoneScreen => "PHONE_SCREEN",
            ApplicationStatus::Onsite => "ONSITE",
            ApplicationStatus::Offer => "OFFER",
            ApplicationStatus::Rejected => "REJECTED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "INTERESTED" => Some(ApplicationStatus::Interested),
            "APPLIED" => Some(ApplicationStatus::Applied),
            "ONLINE_ASSESSMENT" => Some(ApplicationStatus::OnlineAssessment),
            "PHONE_SCREEN" => Some(ApplicationStatus::PhoneScreen),
            "ONSITE" => Some(ApplicationStatus::Onsite),
            "OFFER" => Some(ApplicationStatus::Offer),
            "REJECTED" => Some(ApplicationStatus::Rejected),
            _ => None,
        }
    }
}

/// Where a posting expects the work to happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationType {
    Remote,
    Hybrid,
    Onsite,
}

impl LocationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationType::Remote => "REMOTE",
            LocationType::Hybrid => "HYBRID",
            LocationType::Onsite => "ONSITE",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "REMOTE" => Some(LocationType::Remote),
            "HYBRID" => Some(LocationType::Hybrid),
            "ONSITE" => Some(LocationType::Onsite),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterviewType {
    Phone,
    Video,
    Onsite,
    Technical,
    Behavioral,
}

impl InterviewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewType::Phone => "PHONE",
            InterviewType::Video => "VIDEO",
            InterviewType::Onsite => "ONSITE",
            InterviewType::Technical => "TECHNICAL",
            InterviewType::Behavioral => "BEHAVIORAL",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "PHONE" => Some(InterviewType::Phone),
            "VIDEO" => Some(InterviewType::Video),
            "ONSITE" => Some(InterviewType::Onsite),
            "TECHNICAL" => Some(InterviewType::Technical),
            "BEHAVIORAL" => Some(InterviewType::Behavioral),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    Resume,
    CoverLetter,
    Other,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Resume => "RESUME",
            DocumentType::CoverLetter => "COVER_LETTER",
            DocumentType::Other => "OTHER",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "RESUME" => Some(DocumentType::Resume),
            "COVER_LETTER" => Some(DocumentType::CoverLetter),
            "OTHER" => Some(DocumentType::Other),
            _ => None,
        }
    }
}

/// A posting's advertised salary band must not be inverted. Either bound
/// may be absent.
pub fn salary_range_valid(salary_min: Option<i32>, salary_max: Option<i32>) -> bool {
    match (salary_min, salary_max) {
        (Some(min), Some(max)) => min <= max,
        _ => true,
    }
}

/// Posting fields as returned by list/detail endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PostingResponse {
    pub job_url: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub location_type: Option<LocationType>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
}

impl From<JobPosting> for PostingResponse {
    fn from(posting: JobPosting) -> Self {
        PostingResponse {
            location_type: posting
                .location_type
                .as_deref()
                .and_then(LocationType::from_str),
            job_url: posting.job_url,
            title: posting.title,
            company: posting.company,
            location: posting.location,
            salary_min: posting.salary_min,
            salary_max: posting.salary_max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            ApplicationStatus::Interested,
            ApplicationStatus::Applied,
            ApplicationStatus::OnlineAssessment,
            ApplicationStatus::PhoneScreen,
            ApplicationStatus::Onsite,
            ApplicationStatus::Offer,
            ApplicationStatus::Rejected,
        ] {
            assert_eq!(ApplicationStatus::from_str(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_status_rejects_unknown() {
        assert_eq!(ApplicationStatus::from_str("GHOSTED"), None);
        assert_eq!(ApplicationStatus::from_str(""), None);
    }

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!(
            ApplicationStatus::from_str("phone_screen"),
            Some(ApplicationStatus::PhoneScreen)
        );
    }

    #[test]
    fn test_status_default_is_interested() {
        assert_eq!(ApplicationStatus::default(), ApplicationStatus::Interested);
    }

    #[test]
    fn test_status_serde_uses_stored_form() {
        let json = serde_json::to_string(&ApplicationStatus::OnlineAssessment).unwrap();
        assert_eq!(json, "\"ONLINE_ASSESSMENT\"");
        let parsed: ApplicationStatus = serde_json::from_str("\"ONLINE_ASSESSMENT\"").unwrap();
        assert_eq!(parsed, ApplicationStatus::OnlineAssessment);
    }

    #[test]
    fn test_interview_type_round_trip() {
        for kind in [
            InterviewType::Phone,
            InterviewType::Video,
            InterviewType::Onsite,
            InterviewType::Technical,
            InterviewType::Behavioral,
        ] {
            assert_eq!(InterviewType::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_document_type_round_trip() {
        for kind in [
            DocumentType::Resume,
            DocumentType::CoverLetter,
            DocumentType::Other,
        ] {
            assert_eq!(DocumentType::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(DocumentType::from_str("TRANSCRIPT"), None);
    }

    #[test]
    fn test_salary_range_validation() {
        assert!(salary_range_valid(None, None));
        assert!(salary_range_valid(Some(80_000), None));
        assert!(salary_range_valid(None, Some(120_000)));
        assert!(salary_range_valid(Some(80_000), Some(120_000)));
        assert!(salary_range_valid(Some(100_000), Some(100_000)));
        assert!(!salary_range_valid(Some(120_000), Some(80_000)));
    }
}
