mod practical_vm;
mod progress_vm;
mod toast_vm;

pub use practical_vm::{
    MetricsSummaryVm, PracticalVm, TaskBadgeVm, map_metrics_summary, map_practical,
};
pub use progress_vm::{
    ProgressChecklistVm, ProgressRowVm, map_progress_checklist, section_tab_label,
};
pub use toast_vm::{ToastStack, ToastVm};
