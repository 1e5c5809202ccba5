use assignment_core::time::time_label;
use assignment_core::{Clock, Notice, NoticeKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastVm {
    pub id: u64,
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
    pub time_label: String,
}

/// Visible notices, newest first. Each push is independent; nothing is merged or queued.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastStack {
    next_id: u64,
    items: Vec<ToastVm>,
}

impl ToastStack {
    pub fn push(&mut self, notice: Notice, clock: &Clock) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.insert(
            0,
            ToastVm {
                id,
                kind: notice.kind,
                title: notice.title,
                description: notice.description,
                time_label: time_label(clock, clock.now()),
            },
        );
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    #[must_use]
    pub fn items(&self) -> &[ToastVm] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use assignment_core::time::fixed_clock;

    use super::*;

    #[test]
    fn identical_notices_stay_separate() {
        let clock = fixed_clock();
        let mut stack = ToastStack::default();
        let first = stack.push(Notice::failure("Incomplete Task", "x"), &clock);
        let second = stack.push(Notice::failure("Incomplete Task", "x"), &clock);

        assert_ne!(first, second);
        assert_eq!(stack.items().len(), 2);
        assert_eq!(stack.items()[0].id, second);
        assert_eq!(stack.items()[0].time_label, "22:13:20");
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let clock = fixed_clock();
        let mut stack = ToastStack::default();
        let keep = stack.push(Notice::success("a", "a"), &clock);
        let gone = stack.push(Notice::success("b", "b"), &clock);

        stack.dismiss(gone);
        assert_eq!(stack.items().len(), 1);
        assert_eq!(stack.items()[0].id, keep);

        stack.dismiss(gone);
        assert_eq!(stack.items().len(), 1);
        stack.dismiss(keep);
        assert!(stack.is_empty());
    }
}
