use std::sync::Arc;

use assignment_core::Clock;
use assignment_core::model::SectionId;

/// What the composition root supplies to the UI.
pub trait UiApp: Send + Sync {
    fn title(&self) -> String;
    fn initial_section(&self) -> SectionId;
    fn clock(&self) -> Clock;
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppContext {
    title: String,
    initial_section: SectionId,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            title: app.title(),
            initial_section: app.initial_section(),
            clock: app.clock(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Section shown on `/` before the student picks a tab.
    #[must_use]
    pub fn initial_section(&self) -> SectionId {
        self.initial_section
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
