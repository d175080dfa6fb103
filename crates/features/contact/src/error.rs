use crate::form::ContactField;
use std::borrow::Cow;

#[folio_derive::folio_error]
pub enum ContactError {
    #[error("{}: {message}", .field.label())]
    Validation { field: ContactField, message: Cow<'static, str> },

    #[error("A message is already being sent")]
    Busy,

    #[error("Delivery failed{}: {message}", format_context(.context))]
    Transport { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ContactError {
    pub(crate) fn required(field: ContactField) -> Self {
        Self::Validation { field, message: format!("{} is required", field.label()).into() }
    }

    /// Field the error points at, if any.
    #[must_use]
    pub const fn field(&self) -> Option<ContactField> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}
