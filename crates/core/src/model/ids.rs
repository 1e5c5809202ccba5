use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseIdError {
    #[error("unknown section id: {0}")]
    UnknownSection(String),
    #[error("unknown task id: {0}")]
    UnknownTask(String),
}

/// Identifier of one of the four graded parts of the assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Theoretical,
    Practical,
    Ethical,
    Bonus,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Theoretical,
        SectionId::Practical,
        SectionId::Ethical,
        SectionId::Bonus,
    ];

    /// Stable string id, also used in routes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SectionId::Theoretical => "theoretical",
            SectionId::Practical => "practical",
            SectionId::Ethical => "ethical",
            SectionId::Bonus => "bonus",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseIdError::UnknownSection(s.to_string()))
    }
}

/// Identifier of a sub-task inside the practical section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TaskId {
    CodeCompletion,
    AutomatedTesting,
    PredictiveAnalytics,
}

impl TaskId {
    pub const ALL: [TaskId; 3] = [
        TaskId::CodeCompletion,
        TaskId::AutomatedTesting,
        TaskId::PredictiveAnalytics,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TaskId::CodeCompletion => "task1",
            TaskId::AutomatedTesting => "task2",
            TaskId::PredictiveAnalytics => "task3",
        }
    }

    /// 1-based position shown to the student ("Task 2").
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            TaskId::CodeCompletion => 1,
            TaskId::AutomatedTesting => 2,
            TaskId::PredictiveAnalytics => 3,
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        TaskId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseIdError::UnknownTask(s.to_string()))
    }
}
