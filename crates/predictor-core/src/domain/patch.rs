//! Presence wrapper for partial updates.
//!
//! `Patch<T>` tells an omitted field apart from a field explicitly set to
//! an empty or zero value. An empty surname or an age of `0` is a real
//! assignment, never a "not provided" marker.

use serde::{Deserialize, Deserializer};

/// A single field of a partial update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Patch<T> {
    /// Leave the stored value untouched.
    #[default]
    Absent,
    /// Overwrite the stored value.
    Provided(T),
}

impl<T> Patch<T> {
    /// Returns `true` if a value was provided.
    pub const fn is_provided(&self) -> bool {
        matches!(self, Self::Provided(_))
    }
}

/// A field that is present in the input always deserializes as `Provided`.
///
/// Missing fields fall back to `Absent` through `#[serde(default)]` on the
/// containing struct. For `Patch<Option<T>>` an explicit `null` becomes
/// `Provided(None)`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::Provided)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Sample {
        label: Patch<String>,
        note: Patch<Option<String>>,
        count: Patch<i32>,
    }

    #[test]
    fn test_missing_fields_are_absent() {
        let sample: Sample = serde_json::from_str("{}").unwrap();
        assert_eq!(sample.label, Patch::Absent);
        assert_eq!(sample.note, Patch::Absent);
        assert_eq!(sample.count, Patch::Absent);
    }

    #[test]
    fn test_empty_and_zero_values_are_provided() {
        let sample: Sample = serde_json::from_str(r#"{"label": "", "count": 0}"#).unwrap();
        assert_eq!(sample.label, Patch::Provided(String::new()));
        assert_eq!(sample.count, Patch::Provided(0));
    }

    #[test]
    fn test_explicit_null_clears_optional_field() {
        let sample: Sample = serde_json::from_str(r#"{"note": null}"#).unwrap();
        assert_eq!(sample.note, Patch::Provided(None));
    }
}
