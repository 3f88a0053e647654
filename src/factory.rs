//! Stage schema and word construction.
//!
//! A [`WordFactory`] is built once per pipeline stage from the columns the
//! stage receives and the target columns it adds. It is then asked for one
//! [`Word`] per input row.

use std::fmt;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{Result, WordError};
use crate::targets::TargetSpec;
use crate::word::Word;

/// One entry of a stage's declared input columns.
///
/// Columns can be declared by name or by position. Only named columns
/// become input fields of the words a factory builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldDecl {
    Name(String),
    Position(usize),
}

impl From<&str> for FieldDecl {
    fn from(name: &str) -> Self {
        FieldDecl::Name(name.to_string())
    }
}

impl From<String> for FieldDecl {
    fn from(name: String) -> Self {
        FieldDecl::Name(name)
    }
}

impl From<&String> for FieldDecl {
    fn from(name: &String) -> Self {
        FieldDecl::Name(name.clone())
    }
}

impl From<usize> for FieldDecl {
    fn from(pos: usize) -> Self {
        FieldDecl::Position(pos)
    }
}

/// Builds [`Word`]s for one pipeline stage.
///
/// Every word has the input fields first, in declaration order, followed
/// by the target fields in the order they were declared. A declared input
/// that is also a target is dropped from the inputs: the stage overwrites
/// that column, so it starts from the target's initial value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFactory {
    input_fields: Vec<String>,
    target_fields: IndexMap<String, String>,
}

impl WordFactory {
    /// Create a factory from the stage's input columns and target declaration.
    ///
    /// Fails with [`WordError::MissingTargets`] when `targets` declares
    /// neither target names nor initial values.
    pub fn new<I, F>(input_field_names: I, targets: TargetSpec) -> Result<Self>
    where
        I: IntoIterator<Item = F>,
        F: Into<FieldDecl>,
    {
        let target_fields = targets.resolve()?;

        let mut input_fields = Vec::new();
        for decl in input_field_names {
            let decl: FieldDecl = decl.into();
            match decl {
                FieldDecl::Name(name) if target_fields.contains_key(&name) => {
                    debug!(field = %name, "input field shadowed by target field");
                }
                FieldDecl::Name(name) => input_fields.push(name),
                FieldDecl::Position(pos) => {
                    debug!(position = pos, "ignoring positional input field");
                }
            }
        }

        debug!(
            inputs = input_fields.len(),
            targets = target_fields.len(),
            "word factory ready"
        );

        Ok(Self {
            input_fields,
            target_fields,
        })
    }

    /// Create a factory whose targets all start as the empty string.
    pub fn with_fields<I, F, T, S>(input_field_names: I, target_fields: T) -> Result<Self>
    where
        I: IntoIterator<Item = F>,
        F: Into<FieldDecl>,
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(input_field_names, TargetSpec::fields(target_fields))
    }

    /// Create a factory with explicit initial values for the targets.
    pub fn with_inits<I, F, T, K, V>(input_field_names: I, target_inits: T) -> Result<Self>
    where
        I: IntoIterator<Item = F>,
        F: Into<FieldDecl>,
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(input_field_names, TargetSpec::inits(target_inits))
    }

    /// Input field names, in column order.
    pub fn input_fields(&self) -> &[String] {
        &self.input_fields
    }

    /// Target field names with their initial values, in column order.
    pub fn target_fields(&self) -> &IndexMap<String, String> {
        &self.target_fields
    }

    /// Number of columns in every word this factory builds.
    pub fn width(&self) -> usize {
        self.input_fields.len() + self.target_fields.len()
    }

    /// Build a word from the values of one input row.
    ///
    /// `values` must hold exactly one value per input field, in column
    /// order. Target fields take the factory's initial values.
    pub fn get_word<I, S>(&self, values: I) -> Result<Word>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.len() != self.input_fields.len() {
            debug!(
                expected = self.input_fields.len(),
                provided = values.len(),
                "row does not match input fields"
            );
            return Err(WordError::ValueCount {
                expected: self.input_fields.len(),
                provided: values.len(),
                fields: self.input_fields.clone(),
                values,
            });
        }

        let mut fields = IndexMap::with_capacity(self.width());
        fields.extend(self.input_fields.iter().cloned().zip(values));
        fields.extend(
            self.target_fields
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        Ok(Word::new(fields))
    }
}

impl fmt::Display for WordFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WordFactory(input_fields={:?}, target_fields={:?})",
            self.input_fields, self.target_fields
        )
    }
}
