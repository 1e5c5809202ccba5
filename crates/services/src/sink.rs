use assignment_core::{Marked, Notifier};

use crate::error::ServiceError;

/// The one capability a child unit gets from its parent: "I am done".
///
/// Implementations are bound to a single id at construction, so a child
/// can never mark anything but itself. The notifier is lent so the parent
/// may announce its own reaction.
pub trait CompletionSink {
    /// # Errors
    ///
    /// Returns `ServiceError` if the parent cannot record the completion.
    fn notify_complete(&mut self, notifier: &mut dyn Notifier) -> Result<Marked, ServiceError>;
}
