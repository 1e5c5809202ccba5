use assignment_core::model::{SectionId, TaskId, section_descriptor};
use dioxus::prelude::*;

use super::components::{SectionHeader, SubmitBar};
use super::state::PageState;
use super::tasks::{AutomatedTestingTask, CodeCompletionTask, PredictiveAnalyticsTask};
use crate::vm::map_practical;

#[component]
pub fn PracticalView() -> Element {
    let page = use_context::<PageState>();
    let mut active = use_signal(|| TaskId::CodeCompletion);
    let vm = map_practical(&page.practical());
    let descriptor = section_descriptor(SectionId::Practical);

    rsx! {
        div { class: "section",
            SectionHeader {
                title: format!("{} ({})", descriptor.title, descriptor.weight),
                description: "Complete three hands-on tasks demonstrating AI applications in software engineering.",
                badges: Vec::new(),
                div { class: "badge-row",
                    for badge in vm.badges.iter() {
                        span {
                            key: "{badge.id}",
                            class: if badge.completed { "badge badge--done" } else { "badge badge--outline" },
                            if badge.completed {
                                span { class: "check", "✓" }
                            }
                            "{badge.title}"
                        }
                    }
                }
                p { class: "muted", "{vm.progress_label}" }
            }

            nav { class: "tabs tabs--tasks",
                for badge in vm.badges.iter().cloned() {
                    button {
                        key: "{badge.id}",
                        class: if active() == badge.id { "tab tab--active" } else { "tab" },
                        r#type: "button",
                        onclick: move |_| active.set(badge.id),
                        if badge.completed {
                            span { class: "check", "✓" }
                        }
                        "{badge.tab_label}"
                    }
                }
            }

            match active() {
                TaskId::CodeCompletion => rsx! { CodeCompletionTask {} },
                TaskId::AutomatedTesting => rsx! { AutomatedTestingTask {} },
                TaskId::PredictiveAnalytics => rsx! { PredictiveAnalyticsTask {} },
            }

            SubmitBar {
                label: "Complete Practical Section",
                disabled: !vm.can_finish,
                on_submit: move |()| {
                    page.finish_practical();
                },
            }
        }
    }
}
