//! # xtsv-word
//!
//! Schema-ordered token records for xtsv annotation pipelines.
//!
//! An xtsv stream is tab-separated text with one token per row and one
//! feature per column. Each pipeline stage reads some input columns and
//! appends its own target columns. This library gives a stage two pieces:
//!
//! - [`WordFactory`]: the stage's column schema, built once at setup from
//!   the input column names and a [`TargetSpec`].
//! - [`Word`]: one token, built by the factory from the raw values of a
//!   row. Fields are read and written by name; iterating the word yields
//!   the values back in column order, ready to be written out.
//!
//! Ad-hoc attributes set on a word under names outside the schema are
//! kept apart from the official fields and never appear in the output row.
//!
//! ## Example
//!
//! ```
//! use xtsv_word::{TargetSpec, WordFactory};
//!
//! let factory = WordFactory::new(
//!     ["form", "wsafter"],
//!     TargetSpec::fields(["lemma"]).with_value_default("_"),
//! )
//! .unwrap();
//!
//! let mut word = factory.get_word(["dogs", " "]).unwrap();
//! let lemma = word["form"].trim_end_matches('s').to_string();
//! word.set("lemma", lemma);
//! word.set("seen", "1");
//!
//! let row: Vec<&str> = word.iter().collect();
//! assert_eq!(row, vec!["dogs", " ", "dog"]);
//! assert_eq!(word.len(), factory.width());
//! ```

pub mod error;
pub mod factory;
pub mod targets;
pub mod word;

pub use error::{Result, WordError};
pub use factory::{FieldDecl, WordFactory};
pub use targets::TargetSpec;
pub use word::Word;
