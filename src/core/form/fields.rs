//! Field values and client-side validation for each form.
//!
//! `validate` turns the raw input into a request body or reports which
//! required fields are missing. Nothing is sent while errors remain.

use std::collections::BTreeMap;

use crate::core::api::models::{
    ContactRequest, Job, JobInput, JobType, LoginRequest, NewsletterRequest, TeamMember,
    TeamMemberInput,
};

pub const REQUIRED: &str = "This field is required";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";

/// Field name to message
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn require(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.0.insert(field, REQUIRED);
        }
    }

    fn require_email(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.0.insert(field, REQUIRED);
        } else if !is_valid_email(value.trim()) {
            self.0.insert(field, INVALID_EMAIL);
        }
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() { Ok(value()) } else { Err(self) }
    }
}

/// Loose shape check: one `@`, something before it, a dot after it
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

fn trimmed(s: &str) -> String {
    s.trim().to_string()
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactRequest, FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.require("name", &self.name);
        errors.require_email("email", &self.email);
        errors.require("message", &self.message);
        errors.into_result(|| ContactRequest {
            name: trimmed(&self.name),
            email: trimmed(&self.email),
            phone: trimmed(&self.phone),
            message: trimmed(&self.message),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewsletterForm {
    pub email: String,
}

impl NewsletterForm {
    pub fn validate(&self) -> Result<NewsletterRequest, FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.require_email("email", &self.email);
        errors.into_result(|| NewsletterRequest {
            email: trimmed(&self.email),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.require_email("email", &self.email);
        errors.require("password", &self.password);
        // Passwords are sent exactly as typed
        errors.into_result(|| LoginRequest {
            email: trimmed(&self.email),
            password: self.password.clone(),
        })
    }
}

/// Job editor. `id` is set when editing an existing posting.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JobForm {
    pub id: Option<i64>,
    pub title: String,
    pub department: String,
    pub location: String,
    pub job_type: JobType,
    pub description: String,
}

impl JobForm {
    pub fn edit(job: &Job) -> Self {
        let input = JobInput::from(job);
        Self {
            id: Some(job.id),
            title: input.title,
            department: input.department,
            location: input.location,
            job_type: input.job_type,
            description: input.description,
        }
    }

    pub fn validate(&self) -> Result<JobInput, FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.require("title", &self.title);
        errors.require("department", &self.department);
        errors.require("location", &self.location);
        errors.require("description", &self.description);
        errors.into_result(|| JobInput {
            title: trimmed(&self.title),
            department: trimmed(&self.department),
            location: trimmed(&self.location),
            job_type: self.job_type.clone(),
            description: trimmed(&self.description),
        })
    }
}

/// Team member editor. `id` is set when editing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MemberForm {
    pub id: Option<i64>,
    pub name: String,
    pub role: String,
    pub image: String,
    pub description: String,
}

impl MemberForm {
    pub fn edit(member: &TeamMember) -> Self {
        let input = TeamMemberInput::from(member);
        Self {
            id: Some(member.id),
            name: input.name,
            role: input.role,
            image: input.image,
            description: input.description,
        }
    }

    pub fn validate(&self) -> Result<TeamMemberInput, FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.require("name", &self.name);
        errors.require("role", &self.role);
        errors.into_result(|| TeamMemberInput {
            name: trimmed(&self.name),
            role: trimmed(&self.role),
            image: trimmed(&self.image),
            description: trimmed(&self.description),
        })
    }
}

/// Course enquiry on the services page. Not sent anywhere; the dialog
/// confirms and closes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnquiryForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub course: String,
}

impl EnquiryForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.require("name", &self.name);
        errors.require("phone", &self.phone);
        errors.require_email("email", &self.email);
        errors.into_result(|| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@edutalks.in"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@.co"));
    }

    #[test]
    fn test_contact_required_fields() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.get("name"), Some(REQUIRED));
        assert_eq!(errors.get("email"), Some(REQUIRED));
        assert_eq!(errors.get("message"), Some(REQUIRED));
        // Phone is optional
        assert!(errors.get("phone").is_none());
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_contact_trims() {
        let form = ContactForm {
            name: "  Asha ".to_string(),
            email: "asha@example.com ".to_string(),
            phone: String::new(),
            message: " Hi ".to_string(),
        };
        let request = form.validate().unwrap();
        assert_eq!(request.name, "Asha");
        assert_eq!(request.email, "asha@example.com");
        assert_eq!(request.message, "Hi");
    }

    #[test]
    fn test_newsletter_invalid_email() {
        let form = NewsletterForm {
            email: "not-an-email".to_string(),
        };
        assert_eq!(form.validate().unwrap_err().get("email"), Some(INVALID_EMAIL));
    }

    #[test]
    fn test_login_keeps_password_verbatim() {
        let form = LoginForm {
            email: "admin@edutalks.in".to_string(),
            password: " pass ".to_string(),
        };
        assert_eq!(form.validate().unwrap().password, " pass ");
        let errors = LoginForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_job_form_edit_and_validate() {
        let job: Job = serde_json::from_str(
            r#"{"id":9,"title":"Trainer","department":"Academics","location":"Hyderabad","type":"Part-time","description":"Teach"}"#,
        )
        .unwrap();
        let form = JobForm::edit(&job);
        assert_eq!(form.id, Some(9));
        let input = form.validate().unwrap();
        assert_eq!(input.job_type, JobType::PartTime);

        let blank = JobForm {
            title: "Trainer".to_string(),
            ..Default::default()
        };
        let errors = blank.validate().unwrap_err();
        assert!(errors.get("title").is_none());
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_member_form_requires_name_and_role() {
        let form = MemberForm {
            name: "Ravi".to_string(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("role"), Some(REQUIRED));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_enquiry_form() {
        let form = EnquiryForm {
            name: "Asha".to_string(),
            phone: "+91 98765 43210".to_string(),
            email: "asha@example.com".to_string(),
            course: "Web Development".to_string(),
        };
        assert!(form.validate().is_ok());
        assert!(EnquiryForm::default().validate().is_err());
    }
}
