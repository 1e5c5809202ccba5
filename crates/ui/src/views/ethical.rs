use assignment_core::model::{EthicalField, FieldKey, SectionId, section_descriptor};
use dioxus::prelude::*;
use services::{EthicalForm, FormUnit};

use super::components::{SectionHeader, SubmitBar, TextField, TipList};
use super::state::PageState;

fn prompt(field: EthicalField) -> &'static str {
    match field {
        EthicalField::Biases => "Identify potential biases in the Kaggle Breast Cancer Dataset.",
        EthicalField::FairnessTools => "How IBM AI Fairness 360 could address identified biases.",
        EthicalField::CompanyImpact => "Ethical considerations for company-wide AI deployment.",
    }
}

fn placeholder(field: EthicalField) -> &'static str {
    match field {
        EthicalField::Biases => {
            "Analyze potential biases in the dataset, such as underrepresented demographic groups, geographic limitations, or systemic healthcare access issues..."
        }
        EthicalField::FairnessTools => {
            "Explain how specific features of IBM AI Fairness 360 (bias detection, mitigation algorithms, fairness metrics) could be implemented to address the biases you identified..."
        }
        EthicalField::CompanyImpact => {
            "Discuss the broader ethical implications of deploying AI for resource allocation in a company, including employee trust, governance structures, and long-term organizational impact..."
        }
    }
}

#[component]
pub fn EthicalView() -> Element {
    let page = use_context::<PageState>();
    let mut unit = use_signal(FormUnit::<EthicalForm>::new);
    let descriptor = section_descriptor(SectionId::Ethical);

    rsx! {
        div { class: "section",
            SectionHeader {
                title: format!("{} ({})", descriptor.title, descriptor.weight),
                description: "Analyze the ethical implications of deploying your predictive model in a real-world company environment.",
                badges: vec!["Bias Analysis", "Fairness Tools", "Corporate Ethics", "AI Governance"],
                p { class: "context-note",
                    strong { "Context: " }
                    "Your predictive model from Task 3 is deployed in a company for resource allocation decisions. Consider the broader implications of AI in workplace decision-making."
                }
            }

            div { class: "card tip-grid",
                TipList {
                    title: "Common Dataset Biases",
                    tone: "red",
                    items: vec![
                        "Demographic underrepresentation",
                        "Geographic sampling limitations",
                        "Socioeconomic access barriers",
                        "Temporal data inconsistencies",
                        "Selection and survival biases",
                    ],
                }
                TipList {
                    title: "Ethical Principles",
                    tone: "green",
                    items: vec![
                        "Transparency in AI decision-making",
                        "Accountability and governance",
                        "Privacy protection and consent",
                        "Fair treatment and equal opportunity",
                        "Human oversight and control",
                    ],
                }
            }

            div { class: "card",
                for field in EthicalField::ALL.iter().copied() {
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
                label: "Complete Ethical Reflection",
                on_submit: move |()| {
                    page.submit_section(SectionId::Ethical, &unit.read());
                },
            }
        }
    }
}
