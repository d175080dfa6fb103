use crate::error::ContactError;
use serde::Serialize;
use strum_macros::{AsRefStr, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// Element id and form name.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email Address",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your full name",
            Self::Email => "your.email@example.com",
            Self::Subject => "What's this about?",
            Self::Message => "Tell me about your project or idea...",
        }
    }

    /// HTML input type; the message is a textarea.
    #[must_use]
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            _ => "text",
        }
    }
}

/// Raw field values as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A validated, trimmed message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Checks every field in form order and returns the first problem.
    ///
    /// # Errors
    /// [`ContactError::Validation`] naming the offending field.
    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        let required = |field: ContactField| {
            let value = self.get(field).trim();
            if value.is_empty() { Err(ContactError::required(field)) } else { Ok(value.to_owned()) }
        };

        let name = required(ContactField::Name)?;
        let email = required(ContactField::Email)?;
        if !is_valid_email(&email) {
            return Err(ContactError::Validation {
                field: ContactField::Email,
                message: "Please enter a valid email address".into(),
            });
        }
        let subject = required(ContactField::Subject)?;
        let message = required(ContactField::Message)?;

        Ok(ContactMessage { name, email, subject, message })
    }

    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }
}

/// `local@label.label`, no whitespace, exactly one `@`.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn filled() -> ContactForm {
        ContactForm {
            name: "  Ada Lovelace ".to_owned(),
            email: "ada@example.com".to_owned(),
            subject: "Engine".to_owned(),
            message: "Let's build it.".to_owned(),
        }
    }

    #[test]
    fn valid_form_is_trimmed() {
        let msg = filled().validate().unwrap();
        assert_eq!(msg.name, "Ada Lovelace");
        assert_eq!(msg.email, "ada@example.com");
    }

    #[test]
    fn each_blank_field_is_reported() {
        for field in ContactField::iter() {
            let mut form = filled();
            form.set(field, "   ");
            let err = form.validate().unwrap_err();
            assert_eq!(err.field(), Some(field));
            assert!(err.to_string().contains("is required"));
        }
    }

    #[test]
    fn email_shapes() {
        for good in ["a@b.co", "first.last@sub.example.org"] {
            assert!(is_valid_email(good), "{good}");
        }
        for bad in ["plain", "@example.com", "a@b", "a@@b.com", "a@b.", "a@.com", "a b@c.com"] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn invalid_email_message() {
        let mut form = filled();
        form.set(ContactField::Email, "not-an-email");
        let err = form.validate().unwrap_err();
        assert_eq!(err.to_string(), "Email Address: Please enter a valid email address");
    }

    #[test]
    fn set_get_clear() {
        let mut form = ContactForm::default();
        assert!(form.is_empty());
        form.set(ContactField::Subject, "Hi");
        assert_eq!(form.get(ContactField::Subject), "Hi");
        form.clear();
        assert!(form.is_empty());
    }

    #[test]
    fn field_metadata() {
        assert_eq!(ContactField::Email.input_type(), "email");
        assert_eq!(ContactField::Message.as_ref(), ContactField::Message.id());
        assert_eq!(ContactField::Name.placeholder(), "Your full name");
    }
}
