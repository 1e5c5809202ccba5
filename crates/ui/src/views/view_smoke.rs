use assignment_core::model::{CodeCompletionField, FieldKey, SectionId, TaskId, TheoreticalField};
use services::{
    AssignmentProgress, CodeCompletionForm, FinishOutcome, FormUnit, PracticalSection,
    SubmitOutcome, TheoreticalForm,
};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_state};

fn progress_with(done: &[SectionId]) -> AssignmentProgress {
    let mut progress = AssignmentProgress::new();
    for id in done {
        progress.mark_complete(*id).expect("known section");
    }
    progress
}

fn practical_with(done: &[TaskId]) -> PracticalSection {
    let mut section = PracticalSection::new();
    let mut notices = Vec::new();
    for task in done {
        section.complete_task(*task, &mut notices).expect("known task");
    }
    section
}

fn answered_theoretical() -> FormUnit<TheoreticalForm> {
    let mut unit = FormUnit::new();
    for field in TheoreticalField::ALL {
        unit.set(*field, "x".repeat(60));
    }
    unit
}

#[test]
fn header_smoke_renders_title_and_completed_count() {
    let mut harness = setup_view_harness_with_state(
        ViewKind::Header,
        progress_with(&[SectionId::Theoretical]),
        PracticalSection::new(),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Test Assignment"), "missing title in {html}");
    assert!(html.contains("1/4 Completed"), "missing count in {html}");
    assert!(html.contains("width: 25%"), "missing bar width in {html}");
}

#[test]
fn tracker_smoke_marks_completed_sections() {
    let mut harness = setup_view_harness_with_state(
        ViewKind::Tracker,
        progress_with(&[SectionId::Ethical, SectionId::Bonus]),
        PracticalSection::new(),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Assignment Progress"), "missing heading in {html}");
    assert!(html.contains("50% weight"), "missing weight in {html}");
    assert_eq!(html.matches("checklist-item--done").count(), 2, "{html}");
}

#[test]
fn theoretical_smoke_renders_every_question() {
    let mut harness = setup_view_harness(ViewKind::Section(SectionId::Theoretical));
    harness.rebuild();
    let html = harness.render();
    for field in TheoreticalField::ALL {
        assert!(html.contains(field.label()), "missing {} in {html}", field.label());
    }
    assert!(html.contains("Complete Theoretical Analysis"), "{html}");
}

#[test]
fn practical_smoke_shows_progress_and_locked_finish() {
    let mut harness = setup_view_harness_with_state(
        ViewKind::Section(SectionId::Practical),
        AssignmentProgress::new(),
        practical_with(&[TaskId::CodeCompletion, TaskId::PredictiveAnalytics]),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Progress: 2/3 tasks completed"), "{html}");
    assert!(html.contains("button--disabled"), "finish should be locked in {html}");
    assert!(html.contains("AI-Powered Code Completion"), "missing task title in {html}");
}

#[test]
fn practical_smoke_unlocks_finish_when_all_tasks_done() {
    let mut harness = setup_view_harness_with_state(
        ViewKind::Section(SectionId::Practical),
        AssignmentProgress::new(),
        practical_with(&[
            TaskId::CodeCompletion,
            TaskId::AutomatedTesting,
            TaskId::PredictiveAnalytics,
        ]),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Progress: 3/3 tasks completed"), "{html}");
    assert!(!html.contains("button--disabled"), "{html}");
}

#[test]
fn rejected_submit_leaves_progress_and_shows_toast() {
    let mut harness = setup_view_harness(ViewKind::Section(SectionId::Theoretical));
    harness.rebuild();
    let page = harness.page();

    let mut unit = answered_theoretical();
    unit.set(TheoreticalField::Q2, "too short");
    let outcome = harness
        .dom
        .in_runtime(|| page.submit_section(SectionId::Theoretical, &unit));
    harness.drive();

    assert!(matches!(outcome, Some(SubmitOutcome::Rejected(_))));
    let progress = harness.dom.in_runtime(|| page.progress());
    assert!(!progress.is_complete(SectionId::Theoretical));
    let html = harness.render();
    assert!(html.contains("Incomplete Answers"), "missing toast in {html}");
}

#[test]
fn accepted_submit_marks_section_and_shows_toast() {
    let mut harness = setup_view_harness(ViewKind::Section(SectionId::Theoretical));
    harness.rebuild();
    let page = harness.page();

    let unit = answered_theoretical();
    let outcome = harness
        .dom
        .in_runtime(|| page.submit_section(SectionId::Theoretical, &unit));
    harness.drive();

    assert!(matches!(outcome, Some(SubmitOutcome::Accepted(_))));
    let progress = harness.dom.in_runtime(|| page.progress());
    assert!(progress.is_complete(SectionId::Theoretical));
    assert!((progress.ratio() - 0.25).abs() < f64::EPSILON);
    let html = harness.render();
    assert!(html.contains("Theoretical Section Completed!"), "missing toast in {html}");
}

#[test]
fn task_submit_updates_practical_progress() {
    let mut harness = setup_view_harness(ViewKind::Section(SectionId::Practical));
    harness.rebuild();
    let page = harness.page();

    let mut unit = FormUnit::<CodeCompletionForm>::new();
    for field in CodeCompletionField::ALL {
        unit.set(*field, "def sort_by_key(items, key): ...");
    }
    let outcome = harness
        .dom
        .in_runtime(|| page.submit_task(TaskId::CodeCompletion, &unit));
    harness.drive();

    assert!(matches!(outcome, Some(SubmitOutcome::Accepted(marked)) if marked.is_new()));
    let practical = harness.dom.in_runtime(|| page.practical());
    assert!(practical.is_task_complete(TaskId::CodeCompletion));
    let progress = harness.dom.in_runtime(|| page.progress());
    assert!(!progress.is_complete(SectionId::Practical));

    let html = harness.render();
    assert!(html.contains("Progress: 1/3 tasks completed"), "{html}");
    assert!(html.contains("Task 1 Completed!"), "{html}");
    assert!(html.contains("Task 1 has been completed successfully."), "{html}");
}

#[test]
fn finishing_practical_early_is_refused() {
    let mut harness = setup_view_harness_with_state(
        ViewKind::Section(SectionId::Practical),
        AssignmentProgress::new(),
        practical_with(&[TaskId::CodeCompletion]),
    );
    harness.rebuild();
    let page = harness.page();

    let outcome = harness.dom.in_runtime(|| page.finish_practical());
    harness.drive();

    assert_eq!(outcome, Some(FinishOutcome::TasksRemaining(2)));
    let progress = harness.dom.in_runtime(|| page.progress());
    assert!(!progress.is_complete(SectionId::Practical));
    assert!(harness.render().contains("Tasks Remaining"));
}

#[test]
fn finishing_practical_reports_to_the_page() {
    let mut harness = setup_view_harness_with_state(
        ViewKind::Header,
        AssignmentProgress::new(),
        practical_with(&[
            TaskId::CodeCompletion,
            TaskId::AutomatedTesting,
            TaskId::PredictiveAnalytics,
        ]),
    );
    harness.rebuild();
    let page = harness.page();

    let outcome = harness.dom.in_runtime(|| page.finish_practical());
    harness.drive();

    assert!(matches!(outcome, Some(FinishOutcome::Finished(marked)) if marked.is_new()));
    let html = harness.render();
    assert!(html.contains("1/4 Completed"), "{html}");
    assert!(html.contains("Practical Section Completed!"), "{html}");
}

#[test]
fn dismissing_a_toast_removes_it() {
    let mut harness = setup_view_harness(ViewKind::Section(SectionId::Theoretical));
    harness.rebuild();
    let page = harness.page();

    let unit = FormUnit::<TheoreticalForm>::new();
    harness
        .dom
        .in_runtime(|| page.submit_section(SectionId::Theoretical, &unit));
    harness.drive();
    let toasts = harness.dom.in_runtime(|| page.toasts());
    let id = toasts.items()[0].id;

    harness.dom.in_runtime(|| page.dismiss_toast(id));
    harness.drive();
    assert!(!harness.render().contains("Incomplete Answers"));
}
