use crate::error::ContactError;
use crate::form::{ContactField, ContactForm, ContactMessage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}

impl SubmitStatus {
    /// Text under the form, if any.
    #[must_use]
    pub const fn banner(self) -> Option<&'static str> {
        match self {
            Self::Idle | Self::Submitting => None,
            Self::Success => Some("✓ Message sent successfully! I'll get back to you soon."),
            Self::Failed => {
                Some("✗ Something went wrong. Please try again or contact me directly.")
            }
        }
    }

    #[must_use]
    pub const fn is_busy(self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Label of the submit button.
    #[must_use]
    pub const fn button_label(self) -> &'static str {
        if self.is_busy() { "Sending..." } else { "Send Message" }
    }
}

/// A submission handed out by [`ContactSession::begin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Increases with every accepted submission.
    pub id: u64,
    pub message: ContactMessage,
}

/// The form plus where its last submission stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSession {
    pub form: ContactForm,
    status: SubmitStatus,
    submissions: u64,
    rejection: Option<String>,
}

impl ContactSession {
    #[must_use]
    pub const fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Why the last attempt was refused by validation. Cleared by any edit.
    #[must_use]
    pub fn rejection(&self) -> Option<&str> {
        self.rejection.as_deref()
    }

    /// Updates one field and drops a stale validation message.
    pub fn edit(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set(field, value);
        self.rejection = None;
    }

    /// Starts a submission.
    ///
    /// # Errors
    /// [`ContactError::Busy`] while another submission is in flight, or the
    /// validation error of the form, which is also kept as [`Self::rejection`].
    /// The status is left untouched on error.
    pub fn begin(&mut self) -> Result<Submission, ContactError> {
        if self.status.is_busy() {
            return Err(ContactError::Busy);
        }
        let message = self.form.validate().inspect_err(|e| {
            self.rejection = Some(e.to_string());
        })?;

        self.rejection = None;
        self.status = SubmitStatus::Submitting;
        self.submissions += 1;
        tracing::info!(id = self.submissions, subject = %message.subject, "Contact submission started");
        Ok(Submission { id: self.submissions, message })
    }

    /// Records the transport outcome. Success clears the form; failure keeps it for a retry.
    pub fn finish(&mut self, outcome: Result<(), ContactError>) {
        match outcome {
            Ok(()) => {
                self.form.clear();
                self.status = SubmitStatus::Success;
                tracing::info!(id = self.submissions, "Contact submission delivered");
            }
            Err(e) => {
                self.status = SubmitStatus::Failed;
                tracing::warn!(id = self.submissions, error = %e, "Contact submission failed");
            }
        }
    }

    /// Hides the banner left by submission `id`.
    ///
    /// Ignored while a submission is in flight or once a newer one has started.
    pub fn expire(&mut self, id: u64) {
        if id == self.submissions && !self.status.is_busy() {
            self.status = SubmitStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready() -> ContactSession {
        let mut session = ContactSession::default();
        session.form.set(ContactField::Name, "Grace");
        session.form.set(ContactField::Email, "grace@navy.mil");
        session.form.set(ContactField::Subject, "COBOL");
        session.form.set(ContactField::Message, "Hello");
        session
    }

    #[test]
    fn begin_rejects_invalid_form_without_state_change() {
        let mut session = ContactSession::default();
        assert!(matches!(session.begin(), Err(ContactError::Validation { .. })));
        assert_eq!(session.status(), SubmitStatus::Idle);
    }

    #[test]
    fn begin_rejects_while_busy() {
        let mut session = ready();
        session.begin().unwrap();
        assert_eq!(session.status().button_label(), "Sending...");
        assert!(matches!(session.begin(), Err(ContactError::Busy)));
    }

    #[test]
    fn success_clears_form() {
        let mut session = ready();
        session.begin().unwrap();
        session.finish(Ok(()));
        assert_eq!(session.status(), SubmitStatus::Success);
        assert!(session.form.is_empty());
        assert!(session.status().banner().unwrap().contains("Message sent successfully"));
    }

    #[test]
    fn failure_keeps_form() {
        let mut session = ready();
        session.begin().unwrap();
        session.finish(Err("smtp down".into()));
        assert_eq!(session.status(), SubmitStatus::Failed);
        assert_eq!(session.form.get(ContactField::Name), "Grace");
    }

    #[test]
    fn expire_waits_for_in_flight_submission() {
        let mut session = ready();
        let first = session.begin().unwrap();
        session.expire(first.id);
        assert_eq!(session.status(), SubmitStatus::Submitting);
        session.finish(Ok(()));
        session.expire(first.id);
        assert_eq!(session.status(), SubmitStatus::Idle);
        assert_eq!(session.status().banner(), None);
    }

    #[test]
    fn earlier_timer_keeps_newer_banner() {
        let mut session = ready();
        let first = session.begin().unwrap();
        session.finish(Err("smtp down".into()));

        let second = session.begin().unwrap();
        assert!(second.id > first.id);
        session.finish(Ok(()));

        session.expire(first.id);
        assert_eq!(session.status(), SubmitStatus::Success);
        session.expire(second.id);
        assert_eq!(session.status(), SubmitStatus::Idle);
    }

    #[test]
    fn editing_clears_rejection() {
        let mut session = ContactSession::default();
        assert!(session.begin().is_err());
        assert_eq!(session.rejection(), Some("Full Name: Full Name is required"));

        session.edit(ContactField::Name, "Ada");
        assert_eq!(session.rejection(), None);
        assert_eq!(session.form.get(ContactField::Name), "Ada");
    }

    #[test]
    fn busy_is_not_a_rejection() {
        let mut session = ready();
        session.begin().unwrap();
        assert!(matches!(session.begin(), Err(ContactError::Busy)));
        assert_eq!(session.rejection(), None);
    }
}
