//! Per-token record with schema-ordered fields.
//!
//! A [`Word`] holds the official fields of one xtsv token (the stage's
//! input fields followed by its target fields) in a fixed order, plus a
//! separate scratch store for ad-hoc attributes. Only the official
//! fields take part in `len()`, iteration, `keys()`/`values()`/`items()`
//! and the `Display` form, so scratch data never leaks into the output row.

use std::fmt;
use std::ops::Index;

use indexmap::IndexMap;

/// One token of an xtsv stream.
///
/// Fields are read and written by name with [`Word::get`] and
/// [`Word::set`], or looked up with `word["form"]`. Iterating a word
/// yields the current values of the official fields in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Word {
    fields: IndexMap<String, String>,
    extra: IndexMap<String, String>,
}

impl Word {
    /// Create a word whose official fields are the entries of `fields`, in order.
    pub fn new(fields: IndexMap<String, String>) -> Self {
        Self {
            fields,
            extra: IndexMap::new(),
        }
    }

    /// Value of an official field or ad-hoc attribute.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .or_else(|| self.extra.get(name))
            .map(String::as_str)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut String> {
        match self.fields.get_mut(name) {
            Some(value) => Some(value),
            None => self.extra.get_mut(name),
        }
    }

    /// Assign a field, returning its previous value.
    ///
    /// Names outside the schema are stored as ad-hoc attributes: they can
    /// be read back by name but are never part of the official views.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.fields.get_mut(&name) {
            Some(slot) => Some(std::mem::replace(slot, value)),
            None => self.extra.insert(name, value),
        }
    }

    /// Whether `name` is an official field or an ad-hoc attribute.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name) || self.extra.contains_key(name)
    }

    /// Whether `name` is one of the official fields fixed at construction.
    pub fn is_official(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of official fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Current values of the official fields, in column order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.fields.values(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    pub fn values(&self) -> Iter<'_> {
        self.iter()
    }

    pub fn items(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Consume the word, keeping only the official values in column order.
    pub fn into_values(self) -> Vec<String> {
        self.fields.into_values().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Word
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Panics if no field or attribute named `name` exists.
impl Index<&str> for Word {
    type Output = str;

    fn index(&self, name: &str) -> &str {
        match self.get(name) {
            Some(value) => value,
            None => panic!("word has no field named {name:?}"),
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Word(")?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={value:?}")?;
        }
        f.write_str(")")
    }
}

/// Iterator over the official values of a [`Word`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: indexmap::map::Values<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.inner.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(String::as_str)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Word {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
