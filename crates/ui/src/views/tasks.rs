use assignment_core::model::{
    AutomatedTestingField, CodeCompletionField, FieldKey, PredictiveAnalyticsField, TaskId,
    task_descriptor,
};
use dioxus::prelude::*;
use services::{AutomatedTestingForm, CodeCompletionForm, FormUnit, PredictiveAnalyticsForm};

use super::components::{SubmitBar, TextField, TipList};
use super::state::PageState;
use crate::vm::map_metrics_summary;

#[component]
fn TaskHeader(task: TaskId, goal: &'static str) -> Element {
    let descriptor = task_descriptor(task);
    rsx! {
        div { class: "card-header",
            h3 { class: "card-title", "Task {task.number()}: {descriptor.title}" }
            p { class: "card-description", "{goal}" }
        }
    }
}

fn code_completion_placeholder(field: CodeCompletionField) -> &'static str {
    match field {
        CodeCompletionField::AiCode => "Paste your AI-generated code here...",
        CodeCompletionField::ManualCode => "Write your manual implementation here...",
        CodeCompletionField::Analysis => {
            "Compare the two implementations. Consider factors like readability, efficiency, error handling, maintainability, and correctness. Which approach is better and why?"
        }
    }
}

#[component]
pub(super) fn CodeCompletionTask() -> Element {
    let page = use_context::<PageState>();
    let mut unit = use_signal(FormUnit::<CodeCompletionForm>::new);

    rsx! {
        div { class: "card",
            TaskHeader {
                task: TaskId::CodeCompletion,
                goal: "Use an AI code completion tool to write a function that sorts a list of dictionaries by a specific key, then compare it with a manual implementation.",
            }
            for field in CodeCompletionField::ALL.iter().copied() {
                TextField {
                    key: "{field.name()}",
                    id: field.name(),
                    label: field.label(),
                    placeholder: code_completion_placeholder(field),
                    value: unit.read().value(field).to_string(),
                    rows: 8,
                    on_input: move |text: String| unit.write().set(field, text),
                }
            }
            div { class: "tip-grid",
                TipList {
                    title: "AI Code Benefits",
                    tone: "blue",
                    items: vec!["Faster to produce", "Idiomatic library calls", "Fewer typos"],
                }
                TipList {
                    title: "Manual Code Benefits",
                    tone: "green",
                    items: vec!["Full control over edge cases", "Easier to reason about", "No hidden assumptions"],
                }
            }
            SubmitBar {
                label: "Complete Task 1",
                on_submit: move |()| {
                    page.submit_task(TaskId::CodeCompletion, &unit.read());
                },
            }
        }
    }
}

fn automated_testing_placeholder(field: AutomatedTestingField) -> &'static str {
    match field {
        AutomatedTestingField::TestScript => "Paste your automated test script here...",
        AutomatedTestingField::ValidCredentials => "e.g., PASSED - Login successful",
        AutomatedTestingField::InvalidCredentials => "e.g., PASSED - Error message displayed",
        AutomatedTestingField::SuccessRate => "e.g., 95%",
        AutomatedTestingField::FailureRate => "e.g., 5%",
        AutomatedTestingField::Summary => {
            "Analyze how AI-powered testing tools improve test coverage, reduce manual effort, and enhance test reliability compared to traditional manual testing approaches..."
        }
    }
}

fn automated_testing_rows(field: AutomatedTestingField) -> u8 {
    match field {
        AutomatedTestingField::TestScript => 8,
        AutomatedTestingField::Summary => 5,
        _ => 0,
    }
}

#[component]
pub(super) fn AutomatedTestingTask() -> Element {
    let page = use_context::<PageState>();
    let mut unit = use_signal(FormUnit::<AutomatedTestingForm>::new);

    rsx! {
        div { class: "card",
            TaskHeader {
                task: TaskId::AutomatedTesting,
                goal: "Automate a login page test (valid and invalid credentials) with an AI-assisted testing tool and record the results.",
            }
            for field in AutomatedTestingField::ALL.iter().copied() {
                TextField {
                    key: "{field.name()}",
                    id: field.name(),
                    label: field.label(),
                    placeholder: automated_testing_placeholder(field),
                    value: unit.read().value(field).to_string(),
                    rows: automated_testing_rows(field),
                    on_input: move |text: String| unit.write().set(field, text),
                }
            }
            p { class: "tip tip--blue",
                "Take screenshots of the test run and its results for your report."
            }
            SubmitBar {
                label: "Complete Task 2",
                on_submit: move |()| {
                    page.submit_task(TaskId::AutomatedTesting, &unit.read());
                },
            }
        }
    }
}

fn predictive_placeholder(field: PredictiveAnalyticsField) -> &'static str {
    match field {
        PredictiveAnalyticsField::DataPreprocessing => {
            "Paste your data preprocessing code here (cleaning, labeling, train/test split)..."
        }
        PredictiveAnalyticsField::ModelCode => {
            "Paste your model training code here (Random Forest implementation, training, predictions)..."
        }
        PredictiveAnalyticsField::Accuracy => "e.g., 0.95",
        PredictiveAnalyticsField::F1Score => "e.g., 0.92",
        PredictiveAnalyticsField::Precision => "e.g., 0.93",
        PredictiveAnalyticsField::Recall => "e.g., 0.91",
        PredictiveAnalyticsField::Evaluation => {
            "Analyze your model's performance. Discuss the accuracy and F1-score results, potential improvements, feature importance, and readiness for deployment in a real-world scenario..."
        }
    }
}

fn predictive_rows(field: PredictiveAnalyticsField) -> u8 {
    match field {
        PredictiveAnalyticsField::DataPreprocessing | PredictiveAnalyticsField::ModelCode => 8,
        PredictiveAnalyticsField::Evaluation => 5,
        _ => 0,
    }
}

#[component]
pub(super) fn PredictiveAnalyticsTask() -> Element {
    let page = use_context::<PageState>();
    let mut unit = use_signal(FormUnit::<PredictiveAnalyticsForm>::new);
    let metrics = map_metrics_summary(
        unit.read().value(PredictiveAnalyticsField::Accuracy),
        unit.read().value(PredictiveAnalyticsField::F1Score),
    );

    rsx! {
        div { class: "card",
            TaskHeader {
                task: TaskId::PredictiveAnalytics,
                goal: "Train a Random Forest on the Kaggle Breast Cancer Dataset to predict issue priority and report its performance.",
            }
            for field in PredictiveAnalyticsField::ALL.iter().copied() {
                TextField {
                    key: "{field.name()}",
                    id: field.name(),
                    label: field.label(),
                    placeholder: predictive_placeholder(field),
                    value: unit.read().value(field).to_string(),
                    rows: predictive_rows(field),
                    on_input: move |text: String| unit.write().set(field, text),
                }
            }
            dl { class: "metrics",
                dt { "Accuracy" }
                dd { "{metrics.accuracy}" }
                dt { "F1-Score" }
                dd { "{metrics.f1_score}" }
                dt { "Deployment Ready" }
                dd { "{metrics.deployment_ready}" }
            }
            SubmitBar {
                label: "Complete Task 3",
                on_submit: move |()| {
                    page.submit_task(TaskId::PredictiveAnalytics, &unit.read());
                },
            }
        }
    }
}
