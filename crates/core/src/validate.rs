//! Required-field and minimum-length checks applied before a form may report completion.

use crate::model::{FieldKey, FieldValues};

/// Which fields must be filled and how long each must be once trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRule<K: FieldKey> {
    required: Vec<K>,
    min_len: usize,
}

impl<K: FieldKey> ValidationRule<K> {
    #[must_use]
    pub fn new(required: impl IntoIterator<Item = K>, min_len: usize) -> Self {
        Self {
            required: required.into_iter().collect(),
            min_len,
        }
    }

    /// Every field of the form is required.
    #[must_use]
    pub fn all_fields(min_len: usize) -> Self {
        Self::new(K::ALL.iter().copied(), min_len)
    }

    #[must_use]
    pub fn required(&self) -> &[K] {
        &self.required
    }

    #[must_use]
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    #[must_use]
    pub fn is_required(&self, key: K) -> bool {
        self.required.contains(&key)
    }

    fn is_satisfied_by(&self, values: &FieldValues<K>, key: K) -> bool {
        values.trimmed_len(key) >= self.min_len
    }
}

/// The kind of condition a submission missed; carries no per-field detail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureCategory {
    MissingRequired,
    TooShort { min_len: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationFailure {
    pub category: FailureCategory,
    pub unmet: usize,
}

/// True iff every required field holds at least `min_len` characters after trimming.
///
/// A required field that was never set counts as empty.
#[must_use]
pub fn validate<K: FieldKey>(values: &FieldValues<K>, rule: &ValidationRule<K>) -> bool {
    rule.required
        .iter()
        .all(|key| rule.is_satisfied_by(values, *key))
}

/// Like [`validate`], but reports what kind of condition was missed.
///
/// # Errors
///
/// Returns `ValidationFailure` when at least one required field is too short.
pub fn check<K: FieldKey>(
    values: &FieldValues<K>,
    rule: &ValidationRule<K>,
) -> Result<(), ValidationFailure> {
    let unmet = rule
        .required
        .iter()
        .filter(|key| !rule.is_satisfied_by(values, **key))
        .count();
    if unmet == 0 {
        return Ok(());
    }

    let category = if rule.min_len <= 1 {
        FailureCategory::MissingRequired
    } else {
        FailureCategory::TooShort {
            min_len: rule.min_len,
        }
    };
    Err(ValidationFailure { category, unmet })
}
