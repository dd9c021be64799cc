//! Global class-name indexing
//!
//! Class ids are positions in the lexicographically sorted, deduplicated
//! list of every class name seen across all splits. The index is built only
//! after the whole corpus has been parsed; assigning ids incrementally
//! during a streaming pass would make them depend on file order.

use dashmap::DashSet;
use std::collections::HashMap;

use crate::error::ConvertError;

/// The run-wide class-name to id mapping.
#[derive(Debug, Clone)]
pub struct LabelIndex {
    names: Vec<String>,
    ids: HashMap<String, usize>,
}

impl LabelIndex {
    /// Build the index from the collected vocabulary. Duplicates are
    /// removed, names are sorted, and ids 0..N-1 follow sorted order.
    pub fn from_names<I>(names: I) -> Result<Self, ConvertError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut names: Vec<String> = names.into_iter().collect();
        names.sort();
        names.dedup();
        if names.is_empty() {
            return Err(ConvertError::EmptyClassSet);
        }

        let ids = names
            .iter()
            .enumerate()
            .map(|(id, name)| (name.clone(), id))
            .collect();

        Ok(Self { names, ids })
    }

    /// Drain the concurrent vocabulary set filled during the parse phase.
    pub fn from_vocabulary(vocabulary: DashSet<String>) -> Result<Self, ConvertError> {
        Self::from_names(vocabulary.into_iter())
    }

    pub fn id(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    /// Class names in id order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
