use dioxus::prelude::*;

use super::state::PageState;
use crate::context::AppContext;
use crate::vm::{ProgressChecklistVm, map_progress_checklist};

#[component]
pub fn PageHeader() -> Element {
    let ctx = use_context::<AppContext>();
    let page = use_context::<PageState>();
    let progress = page.progress();
    let vm = map_progress_checklist(progress.sections(), progress.tracker());

    rsx! {
        header { class: "page-header",
            h1 { "{ctx.title()}" }
            p { class: "subtitle", "Building Intelligent Software Solutions" }
            div { class: "badge-row badge-row--center",
                span { class: "badge badge--outline", "Week 4 Assignment" }
                span { class: "badge badge--outline", "{vm.completed_label}" }
            }
            ProgressBar { percent: vm.percent }
        }
    }
}

#[component]
fn ProgressBar(percent: u8) -> Element {
    rsx! {
        div {
            class: "progress",
            role: "progressbar",
            "aria-valuenow": "{percent}",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            div { class: "progress-fill", style: "width: {percent}%" }
        }
    }
}

/// Checklist of every section with its weight and completion state.
#[component]
pub fn ProgressTracker() -> Element {
    let page = use_context::<PageState>();
    let progress = page.progress();
    let vm = map_progress_checklist(progress.sections(), progress.tracker());

    rsx! {
        ProgressChecklist { vm }
    }
}

#[component]
fn ProgressChecklist(vm: ProgressChecklistVm) -> Element {
    rsx! {
        section { class: "card progress-tracker",
            h3 { "Assignment Progress" }
            ul { class: "checklist",
                for row in vm.rows {
                    li {
                        key: "{row.id}",
                        class: if row.completed { "checklist-item checklist-item--done" } else { "checklist-item" },
                        span { class: "checklist-mark",
                            if row.completed { "✓" } else { "○" }
                        }
                        div {
                            span { class: "checklist-title", "{row.title}" }
                            span { class: "checklist-weight", "{row.weight_label}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SubmissionGuidelines() -> Element {
    rsx! {
        section { class: "card guidelines",
            h3 { "Submission Guidelines" }
            p { class: "card-description", "Remember to submit all required deliverables" }
            div { class: "guideline-grid",
                div { class: "guideline",
                    h4 { "Code" }
                    p { "Well-commented scripts/notebooks shared on GitHub" }
                }
                div { class: "guideline",
                    h4 { "Report" }
                    p { "PDF with answers, screenshots, and reflections" }
                }
                div { class: "guideline",
                    h4 { "Presentation" }
                    p { "3-minute video demo of AI implementation" }
                }
            }
        }
    }
}
