//! Contact feature slice.
//!
//! [`ContactSession`] owns the form and the submission status; a
//! [`ContactTransport`] does the actual delivery. The page ships with
//! [`SimulatedTransport`], which waits and reports success.

mod error;
mod form;
mod session;
mod transport;

pub use error::{ContactError, ContactErrorExt};
pub use form::{ContactField, ContactForm, ContactMessage};
pub use session::{ContactSession, SubmitStatus, Submission};
pub use transport::{ContactTransport, SimulatedTransport, submit};
