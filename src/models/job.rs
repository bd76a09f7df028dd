//! Job model matching the frontend Job interface.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Recruitment category of a job posting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobCategory {
    Bank,
    Railway,
    Police,
    Ssc,
    Upsc,
    StateGovt,
    #[default]
    Other,
}

impl JobCategory {
    pub const ALL: [JobCategory; 7] = [
        JobCategory::Bank,
        JobCategory::Railway,
        JobCategory::Police,
        JobCategory::Ssc,
        JobCategory::Upsc,
        JobCategory::StateGovt,
        JobCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobCategory::Bank => "Bank",
            JobCategory::Railway => "Railway",
            JobCategory::Police => "Police",
            JobCategory::Ssc => "SSC",
            JobCategory::Upsc => "UPSC",
            JobCategory::StateGovt => "State Govt",
            JobCategory::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl From<String> for JobCategory {
    fn from(value: String) -> Self {
        JobCategory::from_str(&value).unwrap_or_default()
    }
}

impl From<JobCategory> for String {
    fn from(value: JobCategory) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for JobCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single job posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub department: String,
    pub qualification: String,
    /// State, or "All India"
    pub location: String,
    /// Application deadline, `YYYY-MM-DD` or RFC 3339
    pub last_date: String,
    pub apply_link: String,
    pub notification_link: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: JobCategory,
    /// Creation timestamp, never changed after the first save
    pub posted_date: String,
}

/// Generate a new job identifier.
///
/// UUIDv7 orders by creation time and carries random bits, so ids from rapid
/// successive calls stay distinct.
pub fn generate_job_id() -> String {
    uuid::Uuid::now_v7().simple().to_string()
}

/// Render a timestamp the way postedDate and defaulted lastDate are stored.
pub fn to_iso_string(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Request body for adding or editing a job.
///
/// Blank fields are replaced with defaults when the draft becomes a [`Job`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub qualification: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub last_date: Option<String>,
    #[serde(default)]
    pub apply_link: Option<String>,
    #[serde(default)]
    pub notification_link: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<JobCategory>,
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl JobDraft {
    /// Build a job from this draft.
    ///
    /// `id` and `posted_date` come from the caller: fresh values on add, the
    /// existing record's values on edit.
    pub fn into_job(self, id: String, posted_date: String, now: DateTime<Utc>) -> Job {
        Job {
            id,
            title: or_default(self.title, "Untitled"),
            department: or_default(self.department, "Unknown"),
            qualification: or_default(self.qualification, "Any"),
            location: or_default(self.location, "All India"),
            last_date: or_default(self.last_date, &to_iso_string(now)),
            apply_link: or_default(self.apply_link, "#"),
            notification_link: or_default(self.notification_link, "#"),
            description: self.description.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            posted_date,
        }
    }
}
