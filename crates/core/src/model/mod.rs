mod fields;
mod forms;
mod ids;
mod section;

pub use fields::{FieldKey, FieldValues};
pub use forms::{
    AutomatedTestingField, BonusField, CodeCompletionField, DEPLOYMENT_ACCURACY_THRESHOLD,
    DeploymentReadiness, EthicalField, PredictiveAnalyticsField, TheoreticalField,
};
pub use ids::{ParseIdError, SectionId, TaskId};
pub use section::{
    SectionDescriptor, TaskDescriptor, Weight, assignment_sections, practical_tasks,
    section_descriptor, task_descriptor,
};
