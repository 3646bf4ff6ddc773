//! Job application value objects and the checks run before submission.

use std::collections::BTreeMap;

use bytes::Bytes;

/// Field name to messages, in the shape the content API reports them.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

pub const FIELD_FULL_NAME: &str = "full_name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_MESSAGE: &str = "message";
pub const FIELD_RESUME: &str = "resume";

pub const RESUME_MISSING: &str = "Please upload your resume.";
pub const RESUME_BAD_TYPE: &str = "Please upload a PDF, DOC or DOCX file.";
pub const RESUME_TOO_LARGE: &str = "Resume exceeds the maximum allowed size.";
pub const FIELD_REQUIRED: &str = "This field is required.";

const RESUME_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl ResumeFile {
    pub fn extension(&self) -> Option<String> {
        let (_, extension) = self.file_name.rsplit_once('.')?;
        Some(extension.to_ascii_lowercase())
    }

    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// A validated application, ready to be sent exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobApplication {
    pub full_name: String,
    pub email: String,
    pub message: String,
    pub resume: ResumeFile,
    pub job_title: String,
}

/// Raw form input as collected from the apply form.
#[derive(Debug, Clone, Default)]
pub struct ApplicationDraft {
    pub full_name: String,
    pub email: String,
    pub message: String,
    pub resume: Option<ResumeFile>,
    pub job_title: String,
    pub job_id: Option<i64>,
}

impl ApplicationDraft {
    /// Check the draft locally; the content API still has the final word.
    pub fn validate(self, max_resume_bytes: u64) -> Result<JobApplication, FieldErrors> {
        let mut errors = FieldErrors::new();

        for (field, value) in [
            (FIELD_FULL_NAME, &self.full_name),
            (FIELD_EMAIL, &self.email),
            (FIELD_MESSAGE, &self.message),
        ] {
            if value.trim().is_empty() {
                push_error(&mut errors, field, FIELD_REQUIRED);
            }
        }

        let resume = match self.resume {
            Some(resume) if !resume.is_empty() => Some(resume),
            _ => {
                push_error(&mut errors, FIELD_RESUME, RESUME_MISSING);
                None
            }
        };

        if let Some(resume) = &resume {
            let accepted = resume
                .extension()
                .is_some_and(|extension| RESUME_EXTENSIONS.contains(&extension.as_str()));
            if !accepted {
                push_error(&mut errors, FIELD_RESUME, RESUME_BAD_TYPE);
            } else if resume.len() > max_resume_bytes {
                push_error(&mut errors, FIELD_RESUME, RESUME_TOO_LARGE);
            }
        }

        match resume {
            Some(resume) if errors.is_empty() => Ok(JobApplication {
                full_name: self.full_name.trim().to_string(),
                email: self.email.trim().to_string(),
                message: self.message,
                resume,
                job_title: self.job_title,
            }),
            _ => Err(errors),
        }
    }
}

fn push_error(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}

/// First message per field, which is all the form shows inline.
pub fn first_errors(errors: &FieldErrors) -> BTreeMap<String, String> {
    errors
        .iter()
        .filter_map(|(field, messages)| {
            messages
                .first()
                .map(|message| (field.clone(), message.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: u64 = 1024;

    fn resume(name: &str, size: usize) -> ResumeFile {
        ResumeFile {
            file_name: name.to_string(),
            content_type: Some("application/pdf".to_string()),
            bytes: Bytes::from(vec![b'%'; size]),
        }
    }

    fn draft(resume: Option<ResumeFile>) -> ApplicationDraft {
        ApplicationDraft {
            full_name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            message: "Keen to join.".to_string(),
            resume,
            job_title: "Interior Designer".to_string(),
            job_id: Some(3),
        }
    }

    #[test]
    fn complete_draft_validates() {
        let application = draft(Some(resume("cv.PDF", 10)))
            .validate(LIMIT)
            .expect("valid draft");
        assert_eq!(application.job_title, "Interior Designer");
        assert_eq!(application.resume.file_name, "cv.PDF");
    }

    #[test]
    fn missing_or_empty_resume_is_rejected() {
        for resume in [None, Some(resume("cv.pdf", 0))] {
            let errors = draft(resume).validate(LIMIT).expect_err("no resume");
            assert_eq!(errors[FIELD_RESUME], vec![RESUME_MISSING.to_string()]);
        }
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        for name in ["cv.png", "cv", "pdf"] {
            let errors = draft(Some(resume(name, 10)))
                .validate(LIMIT)
                .expect_err("bad type");
            assert_eq!(errors[FIELD_RESUME], vec![RESUME_BAD_TYPE.to_string()]);
        }
    }

    #[test]
    fn oversize_resume_is_rejected() {
        let errors = draft(Some(resume("cv.docx", 2048)))
            .validate(LIMIT)
            .expect_err("too large");
        assert_eq!(errors[FIELD_RESUME], vec![RESUME_TOO_LARGE.to_string()]);
    }

    #[test]
    fn blank_text_fields_are_required() {
        let mut draft = draft(Some(resume("cv.doc", 10)));
        draft.full_name = "   ".to_string();
        draft.email.clear();

        let errors = draft.validate(LIMIT).expect_err("blank fields");
        assert_eq!(
            errors.keys().map(String::as_str).collect::<Vec<_>>(),
            vec![FIELD_EMAIL, FIELD_FULL_NAME]
        );
    }

    #[test]
    fn first_errors_keeps_one_message_per_field() {
        let mut errors = FieldErrors::new();
        errors.insert(
            "email".to_string(),
            vec!["Enter a valid email address.".to_string(), "Too long.".to_string()],
        );
        errors.insert("resume".to_string(), Vec::new());

        let first = first_errors(&errors);
        assert_eq!(first.len(), 1);
        assert_eq!(first["email"], "Enter a valid email address.");
    }
}
