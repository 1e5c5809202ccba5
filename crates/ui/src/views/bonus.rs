use assignment_core::model::{BonusField, FieldKey, SectionId};
use dioxus::prelude::*;
use services::{BonusForm, FormUnit};

use super::components::{SectionHeader, SubmitBar, TextField, TipList};
use super::state::PageState;

const EXAMPLE_IDEAS: [&str; 6] = [
    "Automated documentation generation from code comments",
    "AI-powered code review assistant",
    "Smart dependency vulnerability scanner",
    "Automated API documentation generator",
    "Intelligent code refactoring suggestions",
    "AI-driven performance optimization recommendations",
];

fn placeholder(field: BonusField) -> &'static str {
    match field {
        BonusField::ToolName => "e.g., CodeDocAI, SmartRefactor, VulnGuard",
        BonusField::Problem => "What specific problem does this solve?",
        BonusField::Purpose => "Describe the tool's main purpose and what it aims to achieve...",
        BonusField::Workflow => {
            "Explain how the tool works, its workflow, and implementation approach..."
        }
        BonusField::Impact => {
            "Describe the expected benefits, metrics for success, and potential impact on software development..."
        }
        BonusField::TechnicalDetails => {
            "Additional technical considerations, technologies, APIs, or implementation details..."
        }
    }
}

fn rows(field: BonusField) -> u8 {
    match field {
        BonusField::ToolName | BonusField::Problem => 0,
        BonusField::TechnicalDetails => 3,
        BonusField::Purpose | BonusField::Workflow | BonusField::Impact => 4,
    }
}

#[component]
pub fn BonusView() -> Element {
    let page = use_context::<PageState>();
    let mut unit = use_signal(FormUnit::<BonusForm>::new);

    rsx! {
        div { class: "section",
            SectionHeader {
                title: "Bonus Task: Innovation Challenge (Extra 10%)".to_string(),
                description: "Propose an AI tool to solve a software engineering problem not covered in class. This is your chance to showcase creativity and innovation!",
                badges: vec!["1-page proposal outlining purpose, workflow, and impact"],
                div { class: "tip-grid",
                    TipList {
                        title: "Example Ideas",
                        tone: "purple",
                        items: EXAMPLE_IDEAS.to_vec(),
                    }
                    TipList {
                        title: "Success Criteria",
                        tone: "green",
                        items: vec![
                            "Addresses a real problem",
                            "Technically feasible",
                            "Clear value proposition",
                            "Innovative approach",
                            "Measurable impact",
                        ],
                    }
                }
            }

            div { class: "card",
                h3 { class: "card-title", "Tool Proposal" }
                for field in BonusField::ALL.iter().copied() {
                    TextField {
                        key: "{field.name()}",
                        id: field.name(),
                        label: field.label(),
                        placeholder: placeholder(field),
                        value: unit.read().value(field).to_string(),
                        rows: rows(field),
                        on_input: move |text: String| unit.write().set(field, text),
                    }
                }
            }

            SubmitBar {
                label: "Submit Innovation Proposal",
                on_submit: move |()| {
                    page.submit_section(SectionId::Bonus, &unit.read());
                },
            }
        }
    }
}
