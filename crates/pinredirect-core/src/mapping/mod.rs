//! Prefix mappings and the ordered table they live in.
//!
//! A table is scanned front to back and the first entry whose `match_prefix`
//! is a literal prefix of the input wins. Later entries are never consulted
//! once one has matched.

mod builtin;
mod error;

pub use builtin::{builtin, PINNED_COMMIT};
pub use error::MappingError;

use serde::{Deserialize, Serialize};

/// One `match_prefix -> replacement_prefix` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixMapping {
    pub match_prefix: String,
    pub replacement_prefix: String,
}

impl PrefixMapping {
    pub fn new(match_prefix: impl Into<String>, replacement_prefix: impl Into<String>) -> Self {
        Self {
            match_prefix: match_prefix.into(),
            replacement_prefix: replacement_prefix.into(),
        }
    }

    /// Returns `url` with the leading `match_prefix` swapped for
    /// `replacement_prefix`, or `None` if `url` does not start with it.
    ///
    /// Case-sensitive, no normalization. Only the leading segment is touched;
    /// later occurrences of the prefix inside `url` are left alone.
    pub fn apply(&self, url: &str) -> Option<String> {
        let rest = url.strip_prefix(self.match_prefix.as_str())?;
        let mut out = String::with_capacity(self.replacement_prefix.len() + rest.len());
        out.push_str(&self.replacement_prefix);
        out.push_str(rest);
        Some(out)
    }
}

/// Ordered sequence of [`PrefixMapping`]s. Order is the tie-break.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MappingTable {
    entries: Vec<PrefixMapping>,
}

impl MappingTable {
    pub fn new(entries: Vec<PrefixMapping>) -> Self {
        Self { entries }
    }

    /// Build a table from user-supplied entries, rejecting entries that
    /// would match every input.
    pub fn validated(entries: Vec<PrefixMapping>) -> Result<Self, MappingError> {
        if let Some(index) = entries.iter().position(|m| m.match_prefix.is_empty()) {
            return Err(MappingError::EmptyPrefix { index });
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[PrefixMapping] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose `match_prefix` starts `url`, with its position.
    pub fn find(&self, url: &str) -> Option<(usize, &PrefixMapping)> {
        self.entries
            .iter()
            .enumerate()
            .find(|(_, m)| url.starts_with(m.match_prefix.as_str()))
    }
}

impl<'a> IntoIterator for &'a MappingTable {
    type Item = &'a PrefixMapping;
    type IntoIter = std::slice::Iter<'a, PrefixMapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
