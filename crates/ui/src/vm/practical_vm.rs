use assignment_core::model::{DeploymentReadiness, TaskId};
use services::PracticalSection;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskBadgeVm {
    pub id: TaskId,
    pub title: &'static str,
    pub tab_label: String,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticalVm {
    pub badges: Vec<TaskBadgeVm>,
    pub progress_label: String,
    pub can_finish: bool,
}

#[must_use]
pub fn map_practical(section: &PracticalSection) -> PracticalVm {
    let badges = section
        .descriptors()
        .iter()
        .map(|task| TaskBadgeVm {
            id: task.id,
            title: task.title,
            tab_label: format!("Task {}", task.id.number()),
            completed: section.is_task_complete(task.id),
        })
        .collect();

    let tasks = section.tasks();
    PracticalVm {
        badges,
        progress_label: format!(
            "Progress: {}/{} tasks completed",
            tasks.completed_count(),
            tasks.total()
        ),
        can_finish: section.can_finish(),
    }
}

/// Read-only summary of the metrics typed into the predictive analytics task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricsSummaryVm {
    pub accuracy: String,
    pub f1_score: String,
    pub deployment_ready: &'static str,
}

#[must_use]
pub fn map_metrics_summary(accuracy: &str, f1_score: &str) -> MetricsSummaryVm {
    let or_na = |raw: &str| {
        if raw.is_empty() {
            "N/A".to_string()
        } else {
            raw.to_string()
        }
    };
    MetricsSummaryVm {
        accuracy: or_na(accuracy),
        f1_score: or_na(f1_score),
        deployment_ready: DeploymentReadiness::from_accuracy(accuracy).label(),
    }
}
