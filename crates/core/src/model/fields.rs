use std::collections::BTreeMap;
use std::fmt::Debug;

/// A statically known field of one form.
pub trait FieldKey: Copy + Ord + Debug + 'static {
    /// Every field of the form, in display order.
    const ALL: &'static [Self];

    /// Stable machine name (`"caseStudy"`).
    fn name(self) -> &'static str;

    /// Human label shown next to the input.
    fn label(self) -> &'static str;
}

/// Current contents of a form, keyed by its field enum.
///
/// Fields that were never edited read as the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValues<K: FieldKey> {
    values: BTreeMap<K, String>,
}

impl<K: FieldKey> Default for FieldValues<K> {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }
}

impl<K: FieldKey> FieldValues<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: K, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    #[must_use]
    pub fn with(mut self, key: K, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Raw value, `None` when the field was never set.
    #[must_use]
    pub fn get(&self, key: K) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    #[must_use]
    pub fn value(&self, key: K) -> &str {
        self.get(key).unwrap_or("")
    }

    /// Character count after trimming surrounding whitespace.
    #[must_use]
    pub fn trimmed_len(&self, key: K) -> usize {
        self.value(key).trim().chars().count()
    }
}

impl<K: FieldKey> FromIterator<(K, String)> for FieldValues<K> {
    fn from_iter<I: IntoIterator<Item = (K, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BonusField;

    #[test]
    fn unset_fields_read_empty() {
        let values = FieldValues::<BonusField>::new();
        assert_eq!(values.get(BonusField::ToolName), None);
        assert_eq!(values.value(BonusField::ToolName), "");
        assert_eq!(values.trimmed_len(BonusField::ToolName), 0);
    }

    #[test]
    fn trimmed_len_counts_chars_not_bytes() {
        let values = FieldValues::new().with(BonusField::Problem, "  héllo wörld \n");
        assert_eq!(values.trimmed_len(BonusField::Problem), 11);
    }

    #[test]
    fn set_overwrites_previous_value() {
        let mut values = FieldValues::new();
        values.set(BonusField::Impact, "first");
        values.set(BonusField::Impact, "second");
        assert_eq!(values.value(BonusField::Impact), "second");
    }
}
