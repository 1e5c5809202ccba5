use assignment_core::model::{FieldKey, SectionId, TheoreticalField, section_descriptor};
use dioxus::prelude::*;
use services::{FormUnit, THEORETICAL_MIN_CHARS, TheoreticalForm};

use super::components::{SectionHeader, SubmitBar, TextField};
use super::state::PageState;

fn prompt(field: TheoreticalField) -> &'static str {
    match field {
        TheoreticalField::Q1 => {
            "Explain how AI-driven code generation tools (e.g., GitHub Copilot) reduce development time. What are their limitations?"
        }
        TheoreticalField::Q2 => {
            "Compare supervised and unsupervised learning in the context of automated bug detection."
        }
        TheoreticalField::Q3 => {
            "Why is bias mitigation critical when using AI for user experience personalization?"
        }
        TheoreticalField::CaseStudy => {
            "Read \"AI in DevOps: Automating Deployment Pipelines\". How does AIOps improve software deployment efficiency? Provide two examples."
        }
    }
}

fn placeholder(field: TheoreticalField) -> &'static str {
    match field {
        TheoreticalField::Q1 => "Discuss efficiency benefits, time savings, and key limitations...",
        TheoreticalField::Q2 => "Compare approaches, strengths, weaknesses, and use cases...",
        TheoreticalField::Q3 => {
            "Discuss ethical implications, fairness concerns, and impact on users..."
        }
        TheoreticalField::CaseStudy => {
            "Analyze AIOps benefits with specific examples of efficiency improvements..."
        }
    }
}

#[component]
pub fn TheoreticalView() -> Element {
    let page = use_context::<PageState>();
    let mut unit = use_signal(FormUnit::<TheoreticalForm>::new);
    let descriptor = section_descriptor(SectionId::Theoretical);

    rsx! {
        div { class: "section",
            SectionHeader {
                title: format!("{} ({})", descriptor.title, descriptor.weight),
                description: "Demonstrate your understanding of AI applications in software engineering through comprehensive analysis.",
                badges: vec!["Short Answers", "Case Study", "Critical Analysis"],
                p { class: "muted", "Each answer needs at least {THEORETICAL_MIN_CHARS} characters." }
            }

            div { class: "card",
                for field in TheoreticalField::ALL.iter().copied() {
                    TextField {
                        key: "{field.name()}",
                        id: field.name(),
                        label: field.label(),
                        prompt: prompt(field),
                        placeholder: placeholder(field),
                        value: unit.read().value(field).to_string(),
                        rows: 6,
                        on_input: move |text: String| unit.write().set(field, text),
                    }
                }
            }

            SubmitBar {
                label: "Complete Theoretical Analysis",
                on_submit: move |()| {
                    page.submit_section(SectionId::Theoretical, &unit.read());
                },
            }
        }
    }
}
