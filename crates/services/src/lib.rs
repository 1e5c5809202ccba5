#![forbid(unsafe_code)]

pub mod assignment;
pub mod error;
pub mod forms;
pub mod practical;
pub mod sink;
pub mod unit;

pub use assignment_core::Clock;

pub use assignment::{AssignmentProgress, SectionSink};
pub use error::ServiceError;
pub use forms::{
    AutomatedTestingForm, BonusForm, CodeCompletionForm, ETHICAL_MIN_CHARS, EthicalForm,
    PredictiveAnalyticsForm, THEORETICAL_MIN_CHARS, TheoreticalForm,
};
pub use practical::{FinishOutcome, PracticalSection, TaskSink};
pub use sink::CompletionSink;
pub use unit::{FormSpec, FormUnit, SubmitOutcome};
