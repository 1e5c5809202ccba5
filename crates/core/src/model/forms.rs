//! Field sets of every form in the assignment.

use crate::model::FieldKey;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TheoreticalField {
    Q1,
    Q2,
    Q3,
    CaseStudy,
}

impl FieldKey for TheoreticalField {
    const ALL: &'static [Self] = &[Self::Q1, Self::Q2, Self::Q3, Self::CaseStudy];

    fn name(self) -> &'static str {
        match self {
            Self::Q1 => "q1",
            Self::Q2 => "q2",
            Self::Q3 => "q3",
            Self::CaseStudy => "caseStudy",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Q1 => "Q1: AI-Driven Code Generation",
            Self::Q2 => "Q2: Machine Learning in Bug Detection",
            Self::Q3 => "Q3: Bias Mitigation in UX Personalization",
            Self::CaseStudy => "Case Study Analysis",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EthicalField {
    Biases,
    FairnessTools,
    CompanyImpact,
}

impl FieldKey for EthicalField {
    const ALL: &'static [Self] = &[Self::Biases, Self::FairnessTools, Self::CompanyImpact];

    fn name(self) -> &'static str {
        match self {
            Self::Biases => "biases",
            Self::FairnessTools => "fairnessTools",
            Self::CompanyImpact => "companyImpact",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Biases => "Dataset Bias Analysis",
            Self::FairnessTools => "Fairness Tool Implementation",
            Self::CompanyImpact => "Corporate Deployment Ethics",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BonusField {
    ToolName,
    Problem,
    Purpose,
    Workflow,
    Impact,
    TechnicalDetails,
}

impl FieldKey for BonusField {
    const ALL: &'static [Self] = &[
        Self::ToolName,
        Self::Problem,
        Self::Purpose,
        Self::Workflow,
        Self::Impact,
        Self::TechnicalDetails,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::ToolName => "toolName",
            Self::Problem => "problem",
            Self::Purpose => "purpose",
            Self::Workflow => "workflow",
            Self::Impact => "impact",
            Self::TechnicalDetails => "technicalDetails",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::ToolName => "Tool Name *",
            Self::Problem => "Problem Statement *",
            Self::Purpose => "Purpose & Objectives *",
            Self::Workflow => "Workflow & Implementation *",
            Self::Impact => "Expected Impact *",
            Self::TechnicalDetails => "Technical Details (Optional)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CodeCompletionField {
    AiCode,
    ManualCode,
    Analysis,
}

impl FieldKey for CodeCompletionField {
    const ALL: &'static [Self] = &[Self::AiCode, Self::ManualCode, Self::Analysis];

    fn name(self) -> &'static str {
        match self {
            Self::AiCode => "aiCode",
            Self::ManualCode => "manualCode",
            Self::Analysis => "analysis",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::AiCode => "AI-Generated Code",
            Self::ManualCode => "Manual Implementation",
            Self::Analysis => "Comparative Analysis",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AutomatedTestingField {
    TestScript,
    ValidCredentials,
    InvalidCredentials,
    SuccessRate,
    FailureRate,
    Summary,
}

impl FieldKey for AutomatedTestingField {
    const ALL: &'static [Self] = &[
        Self::TestScript,
        Self::ValidCredentials,
        Self::InvalidCredentials,
        Self::SuccessRate,
        Self::FailureRate,
        Self::Summary,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::TestScript => "testScript",
            Self::ValidCredentials => "validCredentials",
            Self::InvalidCredentials => "invalidCredentials",
            Self::SuccessRate => "successRate",
            Self::FailureRate => "failureRate",
            Self::Summary => "summary",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::TestScript => "Test Script",
            Self::ValidCredentials => "Valid Credentials Test",
            Self::InvalidCredentials => "Invalid Credentials Test",
            Self::SuccessRate => "Success Rate",
            Self::FailureRate => "Failure Rate",
            Self::Summary => "AI Testing Summary",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PredictiveAnalyticsField {
    DataPreprocessing,
    ModelCode,
    Accuracy,
    F1Score,
    Precision,
    Recall,
    Evaluation,
}

impl FieldKey for PredictiveAnalyticsField {
    const ALL: &'static [Self] = &[
        Self::DataPreprocessing,
        Self::ModelCode,
        Self::Accuracy,
        Self::F1Score,
        Self::Precision,
        Self::Recall,
        Self::Evaluation,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::DataPreprocessing => "dataPreprocessing",
            Self::ModelCode => "modelCode",
            Self::Accuracy => "accuracy",
            Self::F1Score => "f1Score",
            Self::Precision => "precision",
            Self::Recall => "recall",
            Self::Evaluation => "evaluation",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::DataPreprocessing => "Data Preprocessing",
            Self::ModelCode => "Model Training",
            Self::Accuracy => "Accuracy",
            Self::F1Score => "F1-Score",
            Self::Precision => "Precision",
            Self::Recall => "Recall",
            Self::Evaluation => "Performance Evaluation",
        }
    }
}

/// Minimum accuracy for a trained model to be called deployment ready.
pub const DEPLOYMENT_ACCURACY_THRESHOLD: f64 = 0.8;

/// Verdict shown next to the reported model metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeploymentReadiness {
    Ready,
    NeedsImprovement,
}

impl DeploymentReadiness {
    /// Judge readiness from the raw accuracy input. Unparseable input counts as zero.
    #[must_use]
    pub fn from_accuracy(raw: &str) -> Self {
        let accuracy = raw.trim().parse::<f64>().unwrap_or(0.0);
        if accuracy > DEPLOYMENT_ACCURACY_THRESHOLD {
            Self::Ready
        } else {
            Self::NeedsImprovement
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ready => "Yes",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }
}
