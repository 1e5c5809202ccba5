//! Rules and wording of every form in the assignment.

use assignment_core::model::{
    AutomatedTestingField, BonusField, CodeCompletionField, EthicalField, FieldKey,
    PredictiveAnalyticsField, TheoreticalField,
};
use assignment_core::{FailureCategory, Notice, ValidationFailure, ValidationRule};

use crate::unit::FormSpec;

/// Minimum trimmed length of each theoretical answer.
pub const THEORETICAL_MIN_CHARS: usize = 50;

/// Minimum trimmed length of each ethical reflection.
pub const ETHICAL_MIN_CHARS: usize = 100;

fn detail_hint(failure: &ValidationFailure, noun: &str) -> String {
    match failure.category {
        FailureCategory::TooShort { min_len } => {
            format!("Please provide detailed {noun} (minimum {min_len} characters each).")
        }
        FailureCategory::MissingRequired => {
            format!("Please fill in all {noun} before submitting.")
        }
    }
}

pub struct TheoreticalForm;

impl FormSpec for TheoreticalForm {
    type Field = TheoreticalField;
    const NAME: &'static str = "theoretical";

    fn rule() -> ValidationRule<TheoreticalField> {
        ValidationRule::all_fields(THEORETICAL_MIN_CHARS)
    }

    fn success_notice() -> Notice {
        Notice::success(
            "Theoretical Section Completed!",
            "All questions have been answered comprehensively.",
        )
    }

    fn failure_notice(failure: &ValidationFailure) -> Notice {
        Notice::failure("Incomplete Answers", detail_hint(failure, "answers"))
    }
}

pub struct EthicalForm;

impl FormSpec for EthicalForm {
    type Field = EthicalField;
    const NAME: &'static str = "ethical";

    fn rule() -> ValidationRule<EthicalField> {
        ValidationRule::all_fields(ETHICAL_MIN_CHARS)
    }

    fn success_notice() -> Notice {
        Notice::success(
            "Ethical Reflection Completed!",
            "Your ethical analysis demonstrates thoughtful consideration of AI bias and fairness.",
        )
    }

    fn failure_notice(failure: &ValidationFailure) -> Notice {
        Notice::failure("Incomplete Reflection", detail_hint(failure, "responses"))
    }
}

pub struct BonusForm;

impl FormSpec for BonusForm {
    type Field = BonusField;
    const NAME: &'static str = "bonus";

    fn rule() -> ValidationRule<BonusField> {
        let required = BonusField::ALL
            .iter()
            .copied()
            .filter(|field| *field != BonusField::TechnicalDetails);
        ValidationRule::new(required, 1)
    }

    fn success_notice() -> Notice {
        Notice::success(
            "Bonus Task Completed!",
            "Your innovative AI tool proposal has been submitted. Excellent creativity!",
        )
    }

    fn failure_notice(_failure: &ValidationFailure) -> Notice {
        Notice::failure(
            "Incomplete Proposal",
            "Please complete all required fields before submitting.",
        )
    }
}

fn incomplete_task() -> Notice {
    Notice::failure(
        "Incomplete Task",
        "Please complete all sections before submitting.",
    )
}

pub struct CodeCompletionForm;

impl FormSpec for CodeCompletionForm {
    type Field = CodeCompletionField;
    const NAME: &'static str = "task1";

    fn rule() -> ValidationRule<CodeCompletionField> {
        ValidationRule::all_fields(1)
    }

    fn success_notice() -> Notice {
        Notice::success(
            "Task 1 Completed!",
            "Code completion comparison has been documented.",
        )
    }

    fn failure_notice(_failure: &ValidationFailure) -> Notice {
        incomplete_task()
    }
}

pub struct AutomatedTestingForm;

impl FormSpec for AutomatedTestingForm {
    type Field = AutomatedTestingField;
    const NAME: &'static str = "task2";

    fn rule() -> ValidationRule<AutomatedTestingField> {
        ValidationRule::all_fields(1)
    }

    fn success_notice() -> Notice {
        Notice::success(
            "Task 2 Completed!",
            "Automated testing implementation has been documented.",
        )
    }

    fn failure_notice(_failure: &ValidationFailure) -> Notice {
        incomplete_task()
    }
}

pub struct PredictiveAnalyticsForm;

impl FormSpec for PredictiveAnalyticsForm {
    type Field = PredictiveAnalyticsField;
    const NAME: &'static str = "task3";

    fn rule() -> ValidationRule<PredictiveAnalyticsField> {
        ValidationRule::all_fields(1)
    }

    fn success_notice() -> Notice {
        Notice::success(
            "Task 3 Completed!",
            "Predictive analytics implementation has been documented.",
        )
    }

    fn failure_notice(_failure: &ValidationFailure) -> Notice {
        incomplete_task()
    }
}

#[cfg(test)]
mod tests {
    use assignment_core::model::FieldValues;
    use assignment_core::validate;

    use super::*;

    #[test]
    fn theoretical_answers_need_fifty_chars() {
        let almost = "x".repeat(THEORETICAL_MIN_CHARS - 1);
        let enough = "x".repeat(THEORETICAL_MIN_CHARS);
        let mut values: FieldValues<TheoreticalField> = TheoreticalField::ALL
            .iter()
            .map(|field| (*field, enough.clone()))
            .collect();
        assert!(validate(&values, &TheoreticalForm::rule()));

        values.set(TheoreticalField::CaseStudy, format!("  {almost}  "));
        assert!(!validate(&values, &TheoreticalForm::rule()));
    }

    #[test]
    fn ethical_failure_mentions_minimum() {
        let failure = ValidationFailure {
            category: FailureCategory::TooShort {
                min_len: ETHICAL_MIN_CHARS,
            },
            unmet: 2,
        };
        let notice = EthicalForm::failure_notice(&failure);
        assert_eq!(notice.title, "Incomplete Reflection");
        assert!(notice.description.contains("minimum 100 characters"));
    }

    #[test]
    fn bonus_rule_skips_technical_details() {
        let rule = BonusForm::rule();
        assert!(!rule.is_required(BonusField::TechnicalDetails));
        assert_eq!(rule.required().len(), 5);
        assert_eq!(rule.min_len(), 1);
    }

    #[test]
    fn task_rules_require_every_field() {
        assert_eq!(
            AutomatedTestingForm::rule().required(),
            AutomatedTestingField::ALL
        );
        assert_eq!(
            PredictiveAnalyticsForm::rule().required(),
            PredictiveAnalyticsField::ALL
        );
        assert_eq!(CodeCompletionForm::rule().required(), CodeCompletionField::ALL);
    }
}
