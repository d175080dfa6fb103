use crate::error::{ContactError, ContactErrorExt};
use crate::form::ContactMessage;
use crate::session::Submission;
use std::time::Duration;

/// Delivers a validated message somewhere.
pub trait ContactTransport {
    /// # Errors
    /// [`ContactError::Transport`] when the message could not be delivered.
    fn deliver(
        &self,
        message: &ContactMessage,
    ) -> impl Future<Output = Result<(), ContactError>>;
}

/// Waits a fixed delay and reports success. There is no backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedTransport {
    pub delay: Duration,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self { delay: Duration::from_millis(2000) }
    }
}

impl ContactTransport for SimulatedTransport {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), ContactError> {
        tracing::debug!(to = %message.email, delay_ms = self.delay.as_millis(), "Simulating delivery");
        folio_kernel::time::sleep(self.delay).await;
        Ok(())
    }
}

/// Delivers the message of an accepted submission.
///
/// Transport errors gain the submission id as context; hand the result to
/// [`ContactSession::finish`](crate::ContactSession::finish).
///
/// # Errors
/// Whatever the transport reports.
pub async fn submit<T: ContactTransport>(
    transport: &T,
    submission: &Submission,
) -> Result<(), ContactError> {
    tracing::debug!(id = submission.id, "Delivering contact message");
    transport.deliver(&submission.message).await.context(format!("submission #{}", submission.id))
}
