//! Declaration of the target (output) fields a stage appends to each token.
//!
//! A stage declares its targets either as a plain list of names, all
//! initialised to one shared default value, or as an explicit map of
//! name to initial value. At least one of the two forms must be given.
//! When both are given the explicit map is used and the list is ignored.

use indexmap::IndexMap;

use crate::error::{Result, WordError};

/// Target field declaration for one pipeline stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetSpec {
    /// Target names, each initialised to `value_default`.
    pub fields: Option<Vec<String>>,
    /// Target names with explicit initial values. Takes precedence over `fields`.
    pub inits: Option<IndexMap<String, String>>,
    /// Initial value for every target of the list form.
    pub value_default: String,
}

impl TargetSpec {
    /// Declare targets as a list of names initialised to the empty string.
    pub fn fields<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::default().with_fields(names)
    }

    /// Declare targets with explicit initial values.
    pub fn inits<I, K, V>(inits: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::default().with_inits(inits)
    }

    pub fn with_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_inits<I, K, V>(mut self, inits: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.inits = Some(
            inits
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Set the initial value used by the list form.
    pub fn with_value_default(mut self, value: impl Into<String>) -> Self {
        self.value_default = value.into();
        self
    }

    /// Resolve the declaration into an ordered map of target name to initial value.
    ///
    /// Fails with [`WordError::MissingTargets`] when neither form was given.
    pub fn resolve(self) -> Result<IndexMap<String, String>> {
        match (self.inits, self.fields) {
            (Some(inits), _) => Ok(inits),
            (None, Some(fields)) => {
                let mut targets = IndexMap::with_capacity(fields.len());
                for name in fields {
                    targets
                        .entry(name)
                        .or_insert_with(|| self.value_default.clone());
                }
                Ok(targets)
            }
            (None, None) => Err(WordError::MissingTargets),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_use_empty_default() {
        let targets = TargetSpec::fields(["output"]).resolve().unwrap();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets["output"], "");
    }

    #[test]
    fn test_fields_use_value_default() {
        let targets = TargetSpec::fields(["lemma", "xpostag"])
            .with_value_default("_")
            .resolve()
            .unwrap();
        let pairs: Vec<_> = targets.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(pairs, vec![("lemma", "_"), ("xpostag", "_")]);
    }

    #[test]
    fn test_inits_used_verbatim() {
        let targets = TargetSpec::inits([("output", "foo"), ("extra", "")])
            .with_value_default("ignored")
            .resolve()
            .unwrap();
        let keys: Vec<_> = targets.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["output", "extra"]);
        assert_eq!(targets["output"], "foo");
        assert_eq!(targets["extra"], "");
    }

    #[test]
    fn test_inits_win_over_fields() {
        let targets = TargetSpec::fields(["bar"])
            .with_inits([("output", "foo")])
            .resolve()
            .unwrap();
        assert!(!targets.contains_key("bar"));
        assert_eq!(targets["output"], "foo");
    }

    #[test]
    fn test_empty_forms_are_valid() {
        let empty: [&str; 0] = [];
        assert!(TargetSpec::fields(empty).resolve().unwrap().is_empty());

        let no_inits: [(&str, &str); 0] = [];
        assert!(TargetSpec::inits(no_inits).resolve().unwrap().is_empty());
    }

    #[test]
    fn test_missing_targets() {
        assert_eq!(
            TargetSpec::default().resolve(),
            Err(WordError::MissingTargets)
        );
        assert_eq!(
            TargetSpec::default().with_value_default("-").resolve(),
            Err(WordError::MissingTargets)
        );
    }

    #[test]
    fn test_duplicate_field_keeps_first_position() {
        let targets = TargetSpec::fields(["a", "b", "a"]).resolve().unwrap();
        let keys: Vec<_> = targets.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
