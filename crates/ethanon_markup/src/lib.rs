//! Sectioned markup for engine project files
//!
//! Application settings live in a brace-delimited text format that groups
//! key/value pairs into named sections, one per scope or target platform:
//!
//! ```text
//! default
//! {
//!     width = 1024;
//!     title = "My Game";
//! }
//! windows { vsync = false; }
//! ```
//!
//! `//` and `/* */` comments are allowed between tokens. A value runs from
//! `=` to the first `;` and is trimmed; a double-quoted value keeps its
//! inner text verbatim (including `;` and surrounding whitespace). Comment
//! markers inside a value are taken literally. Duplicate keys and duplicate
//! sections merge, last writer wins.

mod parser;

pub use parser::ParseError;

use std::collections::BTreeMap;

/// A parsed document: named sections of key/value pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub(crate) sections: BTreeMap<String, Section>,
}

impl Document {
    /// Parse a document from text. Empty input is a valid empty document.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parser::parse(input)
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Shorthand for `section(name)` + `get(key)`.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section).and_then(|s| s.get(key))
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, s)| (name.as_str(), s))
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// One named section: key/value pairs, values stored as raw strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    pub(crate) entries: BTreeMap<String, String>,
}

impl Section {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Value as `u32` if present, non-empty and well-formed. A malformed
    /// value reads as absent; callers decide what absence means.
    pub fn get_u32(&self, key: &str) -> Option<u32> {
        self.get(key).filter(|v| !v.is_empty())?.parse().ok()
    }

    /// Value as `f32` under the same present-and-well-formed contract as
    /// [`Section::get_u32`].
    pub fn get_f32(&self, key: &str) -> Option<f32> {
        self.get(key).filter(|v| !v.is_empty())?.parse().ok()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split a comma-separated value into trimmed tokens, dropping empties.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Case-insensitive `"true"`, or `"1"`. Everything else is false.
pub fn is_true(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}
