/// Whether a notice reports progress or a rejected action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// A user-facing message emitted after a submit or finish action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    #[must_use]
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    #[must_use]
    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            title: title.into(),
            description: description.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}

/// Presentation collaborator for notices. Fire-and-forget: nothing is returned.
pub trait Notifier {
    fn show(&mut self, notice: Notice);
}

/// Collects notices in order; useful as a headless notifier.
impl Notifier for Vec<Notice> {
    fn show(&mut self, notice: Notice) {
        self.push(notice);
    }
}
