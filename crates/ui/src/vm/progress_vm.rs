use assignment_core::CompletionTracker;
use assignment_core::model::{SectionDescriptor, SectionId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressRowVm {
    pub id: SectionId,
    pub title: &'static str,
    pub weight_label: String,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressChecklistVm {
    pub rows: Vec<ProgressRowVm>,
    pub percent: u8,
    pub completed_label: String,
}

/// Checklist rows in descriptor order plus the aggregate progress.
#[must_use]
pub fn map_progress_checklist(
    sections: &[SectionDescriptor],
    tracker: &CompletionTracker<SectionId>,
) -> ProgressChecklistVm {
    let rows = sections
        .iter()
        .map(|section| ProgressRowVm {
            id: section.id,
            title: section.title,
            weight_label: format!("{} weight", section.weight),
            completed: tracker.is_complete(section.id),
        })
        .collect();

    ProgressChecklistVm {
        rows,
        percent: tracker.percent(),
        completed_label: format!(
            "{}/{} Completed",
            tracker.completed_count(),
            tracker.total()
        ),
    }
}

/// Tab caption such as "Practical (50%)".
#[must_use]
pub fn section_tab_label(section: &SectionDescriptor) -> String {
    format!("{} ({})", section.short_title, section.weight)
}
