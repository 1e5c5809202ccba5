use assignment_core::model::{SectionId, TaskId};
use assignment_core::{Clock, Marked, Notice, Notifier};
use dioxus::prelude::*;
use services::{
    AssignmentProgress, CompletionSink, FinishOutcome, FormSpec, FormUnit, PracticalSection,
    ServiceError, SubmitOutcome,
};
use tracing::error;

use crate::vm::ToastStack;

/// Page-wide state shared by every section through context.
///
/// Sections never get the progress signal itself, only sinks bound to
/// their own id.
#[derive(Clone, Copy)]
pub struct PageState {
    progress: Signal<AssignmentProgress>,
    practical: Signal<PracticalSection>,
    toasts: Signal<ToastStack>,
    clock: Clock,
}

impl PageState {
    #[must_use]
    pub fn new(
        progress: Signal<AssignmentProgress>,
        practical: Signal<PracticalSection>,
        toasts: Signal<ToastStack>,
        clock: Clock,
    ) -> Self {
        Self {
            progress,
            practical,
            toasts,
            clock,
        }
    }

    /// Snapshot of section completion; subscribes the calling component.
    #[must_use]
    pub fn progress(&self) -> AssignmentProgress {
        self.progress.read().clone()
    }

    #[must_use]
    pub fn practical(&self) -> PracticalSection {
        self.practical.read().clone()
    }

    #[must_use]
    pub fn toasts(&self) -> ToastStack {
        self.toasts.read().clone()
    }

    pub fn dismiss_toast(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().dismiss(id);
    }

    fn notifier(&self) -> ToastNotifier {
        ToastNotifier {
            toasts: self.toasts,
            clock: self.clock,
        }
    }

    /// "Submit clicked" for a section that reports straight to the page.
    pub fn submit_section<F: FormSpec>(
        &self,
        id: SectionId,
        unit: &FormUnit<F>,
    ) -> Option<SubmitOutcome> {
        let mut sink = PageSectionSink {
            progress: self.progress,
            id,
        };
        log_failure(unit.submit(&mut sink, &mut self.notifier()))
    }

    /// "Submit clicked" for one of the practical tasks.
    pub fn submit_task<F: FormSpec>(
        &self,
        task: TaskId,
        unit: &FormUnit<F>,
    ) -> Option<SubmitOutcome> {
        let mut sink = PracticalTaskSink {
            practical: self.practical,
            task,
        };
        log_failure(unit.submit(&mut sink, &mut self.notifier()))
    }

    /// "Finish section" for the practical section.
    pub fn finish_practical(&self) -> Option<FinishOutcome> {
        let mut sink = PageSectionSink {
            progress: self.progress,
            id: SectionId::Practical,
        };
        let section = self.practical.read();
        log_failure(section.finish(&mut sink, &mut self.notifier()))
    }
}

fn log_failure<T>(result: Result<T, ServiceError>) -> Option<T> {
    result
        .inspect_err(|err| error!(%err, "completion could not be recorded"))
        .ok()
}

struct PageSectionSink {
    progress: Signal<AssignmentProgress>,
    id: SectionId,
}

impl CompletionSink for PageSectionSink {
    fn notify_complete(&mut self, notifier: &mut dyn Notifier) -> Result<Marked, ServiceError> {
        self.progress
            .write()
            .section_sink(self.id)
            .notify_complete(notifier)
    }
}

struct PracticalTaskSink {
    practical: Signal<PracticalSection>,
    task: TaskId,
}

impl CompletionSink for PracticalTaskSink {
    fn notify_complete(&mut self, notifier: &mut dyn Notifier) -> Result<Marked, ServiceError> {
        self.practical.write().complete_task(self.task, notifier)
    }
}

/// Notifier that stacks notices as toasts.
struct ToastNotifier {
    toasts: Signal<ToastStack>,
    clock: Clock,
}

impl Notifier for ToastNotifier {
    fn show(&mut self, notice: Notice) {
        self.toasts.write().push(notice, &self.clock);
    }
}
