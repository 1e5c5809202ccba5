use assignment_core::model::{SectionDescriptor, SectionId, assignment_sections};
use assignment_core::{CompletionTracker, Marked, Notifier};
use tracing::info;

use crate::error::ServiceError;
use crate::sink::CompletionSink;

/// Top-level owner of which sections are complete.
///
/// Children never touch the tracker; they get a [`SectionSink`] bound to
/// their own id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentProgress {
    sections: &'static [SectionDescriptor],
    tracker: CompletionTracker<SectionId>,
}

impl Default for AssignmentProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl AssignmentProgress {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sections: assignment_sections(),
            tracker: CompletionTracker::for_sections(),
        }
    }

    #[must_use]
    pub fn sections(&self) -> &'static [SectionDescriptor] {
        self.sections
    }

    #[must_use]
    pub fn tracker(&self) -> &CompletionTracker<SectionId> {
        &self.tracker
    }

    #[must_use]
    pub fn is_complete(&self, id: SectionId) -> bool {
        self.tracker.is_complete(id)
    }

    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.tracker.ratio()
    }

    /// Idempotent: a section already complete stays complete and nothing else happens.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if `id` is not tracked.
    pub fn mark_complete(&mut self, id: SectionId) -> Result<Marked, ServiceError> {
        let marked = self.tracker.mark_complete(id)?;
        if marked.is_new() {
            info!(
                section = id.as_str(),
                done = self.tracker.completed_count(),
                total = self.tracker.total(),
                "section completed"
            );
        }
        Ok(marked)
    }

    /// Sink handed to the unit rendering section `id`.
    pub fn section_sink(&mut self, id: SectionId) -> SectionSink<'_> {
        SectionSink { progress: self, id }
    }
}

/// Completion capability for one section.
pub struct SectionSink<'a> {
    progress: &'a mut AssignmentProgress,
    id: SectionId,
}

impl SectionSink<'_> {
    #[must_use]
    pub fn id(&self) -> SectionId {
        self.id
    }
}

impl CompletionSink for SectionSink<'_> {
    fn notify_complete(&mut self, _notifier: &mut dyn Notifier) -> Result<Marked, ServiceError> {
        self.progress.mark_complete(self.id)
    }
}
