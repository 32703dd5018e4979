//! Request and response shapes of the external REST API

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewsletterRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Admin profile returned on login and kept next to the token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AdminProfile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl AdminProfile {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// Payload of a successful `/admin/login`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoginSuccess {
    pub token: String,
    #[serde(default)]
    pub admin: AdminProfile,
}

/// Success payload with nothing but an optional message
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

/// Employment type. The API stores free text, so labels outside the
/// usual three are kept as they are.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(from = "Option<String>", into = "String")]
pub enum JobType {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Other(String),
}

impl JobType {
    pub const ALL: [JobType; 3] = [JobType::FullTime, JobType::PartTime, JobType::Contract];

    pub fn as_str(&self) -> &str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Other(label) => label,
        }
    }

    /// Blank labels read as full-time
    pub fn from_label(s: &str) -> Self {
        match s.trim() {
            "" | "Full-time" => JobType::FullTime,
            "Part-time" => JobType::PartTime,
            "Contract" => JobType::Contract,
            other => JobType::Other(other.to_string()),
        }
    }
}

impl From<Option<String>> for JobType {
    fn from(label: Option<String>) -> Self {
        label.as_deref().map(JobType::from_label).unwrap_or_default()
    }
}

impl From<JobType> for String {
    fn from(job_type: JobType) -> Self {
        job_type.as_str().to_string()
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Job {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "type", default)]
    pub job_type: JobType,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_active() -> bool {
    true
}

/// Body of job create/update
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct JobInput {
    pub title: String,
    pub department: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub description: String,
}

impl From<&Job> for JobInput {
    fn from(job: &Job) -> Self {
        JobInput {
            title: job.title.clone(),
            department: job.department.clone(),
            location: job.location.clone(),
            job_type: job.job_type.clone(),
            description: job.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TeamMember {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of team member create/update
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct TeamMemberInput {
    pub name: String,
    pub role: String,
    pub image: String,
    pub description: String,
}

impl From<&TeamMember> for TeamMemberInput {
    fn from(member: &TeamMember) -> Self {
        TeamMemberInput {
            name: member.name.clone(),
            role: member.role.clone(),
            image: member.image.clone(),
            description: member.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct JobList {
    #[serde(default)]
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TeamList {
    #[serde(default)]
    pub data: Vec<TeamMember>,
}

/// Human readable posting date, falling back to the raw value
pub fn format_posted_date(raw: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format("%b %-d, %Y").to_string();
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return dt.format("%b %-d, %Y").to_string();
    }
    if let Ok(d) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format("%b %-d, %Y").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_type_wire_names() {
        let input = JobInput {
            job_type: JobType::PartTime,
            ..Default::default()
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["type"], "Part-time");

        let job: Job = serde_json::from_str(
            r#"{"id":3,"title":"Tutor","department":"Academics","location":"Remote","type":"Contract","description":"d"}"#,
        )
        .unwrap();
        assert_eq!(job.job_type, JobType::Contract);
        assert!(job.is_active);
        assert!(job.created_at.is_none());
    }

    #[test]
    fn test_job_input_from_job() {
        let job: Job = serde_json::from_str(
            r#"{"id":1,"title":"Designer","type":"Full-time","is_active":false}"#,
        )
        .unwrap();
        let input = JobInput::from(&job);
        assert_eq!(input.title, "Designer");
        assert_eq!(input.job_type, JobType::FullTime);
        assert!(!job.is_active);
    }

    #[test]
    fn test_job_type_from_label() {
        for t in JobType::ALL {
            assert_eq!(JobType::from_label(t.as_str()), t);
        }
        assert_eq!(JobType::from_label("  "), JobType::FullTime);
        assert_eq!(
            JobType::from_label("Internship"),
            JobType::Other("Internship".to_string())
        );
    }

    #[test]
    fn test_unfamiliar_job_types_still_decode() {
        let list: JobList = serde_json::from_str(
            r#"{"jobs":[
                {"id":1,"title":"Intern","type":"Internship"},
                {"id":2,"title":"Mentor","type":null},
                {"id":3,"title":"Tutor","type":"Part-time"}
            ]}"#,
        )
        .unwrap();
        let types: Vec<&str> = list.jobs.iter().map(|j| j.job_type.as_str()).collect();
        assert_eq!(types, ["Internship", "Full-time", "Part-time"]);

        let input = JobInput::from(&list.jobs[0]);
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["type"], "Internship");
    }

    #[test]
    fn test_format_posted_date() {
        assert_eq!(format_posted_date("2024-03-05T10:00:00Z"), "Mar 5, 2024");
        assert_eq!(format_posted_date("2024-12-25 08:30:00"), "Dec 25, 2024");
        assert_eq!(format_posted_date("2024-01-31"), "Jan 31, 2024");
        assert_eq!(format_posted_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_admin_display_name() {
        let admin = AdminProfile {
            email: "ops@edutalks.in".to_string(),
            ..Default::default()
        };
        assert_eq!(admin.display_name(), "ops@edutalks.in");
    }
}
