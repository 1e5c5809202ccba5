use std::fmt::Debug;

use thiserror::Error;

use crate::model::{SectionId, TaskId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CompletionError {
    #[error("a completion tracker needs at least one id")]
    Empty,
    #[error("duplicate id in tracker: {0}")]
    DuplicateId(String),
    #[error("id is not tracked: {0}")]
    UnknownId(String),
}

/// Result of a `mark_complete` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marked {
    Newly,
    Already,
}

impl Marked {
    #[must_use]
    pub fn is_new(self) -> bool {
        matches!(self, Marked::Newly)
    }
}

/// Monotonic set of completed ids drawn from a fixed, non-empty id list.
///
/// Ids are kept in the order they first completed. There is no way to
/// un-complete an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionTracker<K> {
    all: Vec<K>,
    completed: Vec<K>,
}

impl<K: Copy + Eq + Debug> CompletionTracker<K> {
    /// Track completion over `all`.
    ///
    /// # Errors
    ///
    /// Returns `CompletionError::Empty` for an empty list and
    /// `CompletionError::DuplicateId` if an id appears twice.
    pub fn new(all: impl IntoIterator<Item = K>) -> Result<Self, CompletionError> {
        let mut ids: Vec<K> = Vec::new();
        for id in all {
            if ids.contains(&id) {
                return Err(CompletionError::DuplicateId(format!("{id:?}")));
            }
            ids.push(id);
        }
        if ids.is_empty() {
            return Err(CompletionError::Empty);
        }
        Ok(Self {
            all: ids,
            completed: Vec::new(),
        })
    }

    /// Mark `id` complete. Marking an already completed id changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `CompletionError::UnknownId` if `id` is not part of this tracker.
    pub fn mark_complete(&mut self, id: K) -> Result<Marked, CompletionError> {
        if !self.all.contains(&id) {
            return Err(CompletionError::UnknownId(format!("{id:?}")));
        }
        if self.completed.contains(&id) {
            return Ok(Marked::Already);
        }
        self.completed.push(id);
        Ok(Marked::Newly)
    }

    #[must_use]
    pub fn is_complete(&self, id: K) -> bool {
        self.completed.contains(&id)
    }

    /// Tracked ids in their fixed order.
    #[must_use]
    pub fn ids(&self) -> &[K] {
        &self.all
    }

    /// Completed ids in the order they completed.
    #[must_use]
    pub fn completed(&self) -> &[K] {
        &self.completed
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.all.len()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total() - self.completed_count()
    }

    #[must_use]
    pub fn is_all_complete(&self) -> bool {
        self.remaining() == 0
    }

    /// Completed fraction in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self) -> f64 {
        self.completed_count() as f64 / self.total() as f64
    }

    /// `ratio()` as a whole percentage, rounded to nearest.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(&self) -> u8 {
        (self.ratio() * 100.0).round() as u8
    }
}

impl CompletionTracker<SectionId> {
    /// Tracker over the four assignment sections.
    #[must_use]
    pub fn for_sections() -> Self {
        Self {
            all: SectionId::ALL.to_vec(),
            completed: Vec::new(),
        }
    }
}

impl CompletionTracker<TaskId> {
    /// Tracker over the three practical tasks.
    #[must_use]
    pub fn for_tasks() -> Self {
        Self {
            all: TaskId::ALL.to_vec(),
            completed: Vec::new(),
        }
    }
}
