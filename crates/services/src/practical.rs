use assignment_core::model::{TaskDescriptor, TaskId, practical_tasks};
use assignment_core::{CompletionTracker, Marked, Notice, Notifier};
use tracing::{info, warn};

use crate::error::ServiceError;
use crate::sink::CompletionSink;

/// Outcome of the "finish section" action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinishOutcome {
    Finished(Marked),
    TasksRemaining(usize),
}

/// The practical section: three tasks that must each complete before the
/// section may report itself to its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticalSection {
    tasks: CompletionTracker<TaskId>,
}

impl Default for PracticalSection {
    fn default() -> Self {
        Self::new()
    }
}

impl PracticalSection {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: CompletionTracker::for_tasks(),
        }
    }

    #[must_use]
    pub fn descriptors(&self) -> &'static [TaskDescriptor] {
        practical_tasks()
    }

    #[must_use]
    pub fn tasks(&self) -> &CompletionTracker<TaskId> {
        &self.tasks
    }

    #[must_use]
    pub fn is_task_complete(&self, task: TaskId) -> bool {
        self.tasks.is_complete(task)
    }

    #[must_use]
    pub fn can_finish(&self) -> bool {
        self.tasks.is_all_complete()
    }

    /// Record a finished task and announce it.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if `task` is not tracked.
    pub fn complete_task(
        &mut self,
        task: TaskId,
        notifier: &mut dyn Notifier,
    ) -> Result<Marked, ServiceError> {
        let marked = self.tasks.mark_complete(task)?;
        if marked.is_new() {
            info!(
                task = task.as_str(),
                done = self.tasks.completed_count(),
                "practical task completed"
            );
        }
        notifier.show(Notice::success(
            "Task Completed!",
            format!("Task {} has been completed successfully.", task.number()),
        ));
        Ok(marked)
    }

    /// Sink handed to the form of `task`.
    pub fn task_sink(&mut self, task: TaskId) -> TaskSink<'_> {
        TaskSink {
            section: self,
            task,
        }
    }

    /// "Finish section": report to `parent` only once all tasks are done.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if the parent cannot record completion.
    pub fn finish(
        &self,
        parent: &mut (impl CompletionSink + ?Sized),
        notifier: &mut dyn Notifier,
    ) -> Result<FinishOutcome, ServiceError> {
        let remaining = self.tasks.remaining();
        if remaining > 0 {
            warn!(remaining, "practical section finish rejected");
            notifier.show(Notice::failure(
                "Tasks Remaining",
                format!(
                    "{remaining} of {} tasks still to complete before finishing this section.",
                    self.tasks.total()
                ),
            ));
            return Ok(FinishOutcome::TasksRemaining(remaining));
        }

        let marked = parent.notify_complete(notifier)?;
        notifier.show(Notice::success(
            "Practical Section Completed!",
            "All practical tasks have been completed. Excellent work!",
        ));
        Ok(FinishOutcome::Finished(marked))
    }
}

/// Completion capability for one practical task.
pub struct TaskSink<'a> {
    section: &'a mut PracticalSection,
    task: TaskId,
}

impl CompletionSink for TaskSink<'_> {
    fn notify_complete(&mut self, notifier: &mut dyn Notifier) -> Result<Marked, ServiceError> {
        self.section.complete_task(self.task, notifier)
    }
}

#[cfg(test)]
mod tests {
    use assignment_core::NoticeKind;

    use super::*;

    #[derive(Default)]
    struct ParentProbe {
        calls: usize,
    }

    impl CompletionSink for ParentProbe {
        fn notify_complete(&mut self, _notifier: &mut dyn Notifier) -> Result<Marked, ServiceError> {
            self.calls += 1;
            Ok(Marked::Newly)
        }
    }

    #[test]
    fn finish_with_two_of_three_tasks_is_refused() {
        let mut section = PracticalSection::new();
        let mut notices = Vec::new();
        section
            .complete_task(TaskId::CodeCompletion, &mut notices)
            .unwrap();
        section
            .complete_task(TaskId::AutomatedTesting, &mut notices)
            .unwrap();

        let mut parent = ParentProbe::default();
        notices.clear();
        let outcome = section.finish(&mut parent, &mut notices).unwrap();

        assert_eq!(outcome, FinishOutcome::TasksRemaining(1));
        assert!(!section.can_finish());
        assert_eq!(parent.calls, 0);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Failure);
        assert!(notices[0].description.starts_with("1 of 3"));
    }

    #[test]
    fn finish_after_all_tasks_reports_to_parent() {
        let mut section = PracticalSection::new();
        let mut notices = Vec::new();
        for task in TaskId::ALL {
            section.task_sink(task).notify_complete(&mut notices).unwrap();
        }
        assert!(section.can_finish());

        let mut parent = ParentProbe::default();
        let outcome = section.finish(&mut parent, &mut notices).unwrap();
        assert_eq!(outcome, FinishOutcome::Finished(Marked::Newly));
        assert_eq!(parent.calls, 1);
    }

    #[test]
    fn repeated_task_completion_is_announced_but_not_double_counted() {
        let mut section = PracticalSection::new();
        let mut notices = Vec::new();
        let first = section
            .complete_task(TaskId::PredictiveAnalytics, &mut notices)
            .unwrap();
        let second = section
            .complete_task(TaskId::PredictiveAnalytics, &mut notices)
            .unwrap();
        assert_eq!((first, second), (Marked::Newly, Marked::Already));
        assert_eq!(section.tasks().completed_count(), 1);
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[1].description, "Task 3 has been completed successfully.");
    }
}
