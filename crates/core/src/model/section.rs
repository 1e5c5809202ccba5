use std::fmt;

use crate::model::{SectionId, TaskId};

/// Advisory grading weight in percent. Displayed only; totals are not checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Weight(u8);

impl Weight {
    #[must_use]
    pub const fn percent(value: u8) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Static metadata for one graded section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub id: SectionId,
    pub title: &'static str,
    pub short_title: &'static str,
    pub weight: Weight,
}

/// Static metadata for one practical sub-task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskDescriptor {
    pub id: TaskId,
    pub title: &'static str,
}

const SECTIONS: [SectionDescriptor; 4] = [
    SectionDescriptor {
        id: SectionId::Theoretical,
        title: "Theoretical Analysis",
        short_title: "Theoretical",
        weight: Weight::percent(30),
    },
    SectionDescriptor {
        id: SectionId::Practical,
        title: "Practical Implementation",
        short_title: "Practical",
        weight: Weight::percent(50),
    },
    SectionDescriptor {
        id: SectionId::Ethical,
        title: "Ethical Reflection",
        short_title: "Ethical",
        weight: Weight::percent(10),
    },
    SectionDescriptor {
        id: SectionId::Bonus,
        title: "Bonus Task",
        short_title: "Bonus",
        weight: Weight::percent(10),
    },
];

const TASKS: [TaskDescriptor; 3] = [
    TaskDescriptor {
        id: TaskId::CodeCompletion,
        title: "AI-Powered Code Completion",
    },
    TaskDescriptor {
        id: TaskId::AutomatedTesting,
        title: "Automated Testing with AI",
    },
    TaskDescriptor {
        id: TaskId::PredictiveAnalytics,
        title: "Predictive Analytics",
    },
];

/// The fixed, ordered section list of the assignment.
#[must_use]
pub fn assignment_sections() -> &'static [SectionDescriptor] {
    &SECTIONS
}

/// The fixed, ordered task list of the practical section.
#[must_use]
pub fn practical_tasks() -> &'static [TaskDescriptor] {
    &TASKS
}

#[must_use]
pub fn section_descriptor(id: SectionId) -> &'static SectionDescriptor {
    match id {
        SectionId::Theoretical => &SECTIONS[0],
        SectionId::Practical => &SECTIONS[1],
        SectionId::Ethical => &SECTIONS[2],
        SectionId::Bonus => &SECTIONS[3],
    }
}

#[must_use]
pub fn task_descriptor(id: TaskId) -> &'static TaskDescriptor {
    match id {
        TaskId::CodeCompletion => &TASKS[0],
        TaskId::AutomatedTesting => &TASKS[1],
        TaskId::PredictiveAnalytics => &TASKS[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_cover_every_section_in_order() {
        let ids: Vec<SectionId> = assignment_sections().iter().map(|s| s.id).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());
        for id in SectionId::ALL {
            assert_eq!(section_descriptor(id).id, id);
        }
    }

    #[test]
    fn task_lookup_matches_table() {
        for id in TaskId::ALL {
            assert_eq!(task_descriptor(id).id, id);
        }
        assert_eq!(practical_tasks().len(), 3);
    }

    #[test]
    fn weight_renders_as_percent() {
        assert_eq!(section_descriptor(SectionId::Practical).weight.to_string(), "50%");
    }
}
