use std::collections::HashSet;

use serde::Deserialize;

use crate::types::{BlockId, is_empty_name};

/// Decides which block ids an area scan keeps. Empty spellings are always
/// dropped; `skip` adds further names (e.g. `minecraft:water`).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BlockFilter {
    #[serde(default)]
    skip: HashSet<String>,
}

impl BlockFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skipped<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            skip: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn skip(&mut self, name: impl Into<String>) -> &mut Self {
        self.skip.insert(name.into());
        self
    }

    #[inline]
    pub fn keeps(&self, id: &BlockId) -> bool {
        let name = id.as_str();
        !is_empty_name(name) && !self.skip.contains(name)
    }

    pub fn skipped(&self) -> impl Iterator<Item = &str> {
        self.skip.iter().map(String::as_str)
    }

    /// True when nothing beyond the empty spellings is skipped.
    pub fn only_drops_air(&self) -> bool {
        self.skip.iter().all(|name| is_empty_name(name))
    }
}
