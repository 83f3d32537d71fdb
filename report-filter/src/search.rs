//! Free-text search over a report.
//!
//! Unlike filtering, search looks at every node regardless of type and keeps
//! per-field occurrence counts, which a viewer uses to highlight hits and to
//! step from one occurrence to the next.

use crate::error::FilterError;
use crate::filter::fields::FieldVisitor;
use crate::filter::fields::FilterTarget;
use crate::keys::NodeKey;
use crate::keys::split_node_key;
use crate::model::Action;
use crate::model::ActionNode;
use crate::model::TestCase;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;
use serde_with::DeserializeFromStr;
use serde_with::SerializeDisplay;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

const ENTRIES_SEGMENT: &str = "entries-";

/// A search entry key split into its node and the field path inside that
/// node, e.g. `action-1-verification-2` and `entries-0-1-name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct SearchKey {
    pub node: NodeKey,
    pub field: String,
}

impl SearchKey {
    pub fn new(node: NodeKey, field: impl Into<String>) -> Self {
        Self {
            node,
            field: field.into(),
        }
    }

    /// Indices of the verification entries leading to the field, outermost
    /// first. `None` outside a verification's entries.
    pub fn entry_path(&self) -> Option<Vec<usize>> {
        if !matches!(self.node, NodeKey::Verification { .. }) {
            return None;
        }
        let rest = self.field.strip_prefix(ENTRIES_SEGMENT)?;
        let path: Vec<usize> = rest
            .split('-')
            .map_while(|segment| segment.parse().ok())
            .collect();
        (!path.is_empty()).then_some(path)
    }
}

impl fmt::Display for SearchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.node, self.field)
    }
}

impl FromStr for SearchKey {
    type Err = FilterError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match split_node_key(raw) {
            Some((node, field)) if !field.is_empty() => Ok(Self::new(node, field)),
            _ => Err(FilterError::InvalidKey(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    query: String,
    /// `{node key}-{field path}` to occurrence count, in document order.
    entries: IndexMap<String, usize>,
}

impl SearchResults {
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Number of fields with at least one occurrence.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of occurrences across the whole report.
    pub fn total(&self) -> usize {
        self.entries.values().sum()
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.entries.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(key, count)| (key.as_str(), *count))
    }

    /// Global index of the first occurrence inside `key`.
    pub fn start_index(&self, key: &str) -> Option<usize> {
        let position = self.entries.get_index_of(key)?;
        Some(
            self.entries
                .values()
                .take(position)
                .sum(),
        )
    }

    /// Key holding the `index`-th occurrence (zero based).
    pub fn key_for_index(&self, index: usize) -> Option<&str> {
        let mut remaining = index;
        for (key, count) in &self.entries {
            if remaining < *count {
                return Some(key.as_str());
            }
            remaining -= count;
        }
        None
    }

    pub fn search_key_for_index(&self, index: usize) -> Option<SearchKey> {
        self.key_for_index(index)?.parse().ok()
    }

    /// Entry rows of one verification table to expand so the `index`-th
    /// occurrence is visible. Empty when it lies anywhere else.
    pub fn verification_expand_path(
        &self,
        index: usize,
        action_id: u32,
        verification_id: u32,
    ) -> Vec<usize> {
        self.search_key_for_index(index)
            .filter(|key| key.node == NodeKey::verification(action_id, verification_id))
            .and_then(|key| key.entry_path())
            .unwrap_or_default()
    }
}

/// Counts case-insensitive, non-overlapping occurrences of `query` in every
/// field of every node.
pub fn search(test_case: &TestCase, query: &str) -> SearchResults {
    let needle = query.trim().to_lowercase();
    let mut results = SearchResults {
        query: query.trim().to_string(),
        entries: IndexMap::new(),
    };
    if needle.is_empty() {
        return results;
    }

    let mut searcher = Searcher {
        needle: &needle,
        entries: &mut results.entries,
    };
    for action in &test_case.actions {
        searcher.search_action(action);
    }
    for message in &test_case.messages {
        searcher.search_node(NodeKey::message(message.id), message);
    }

    let total = results.total();
    let fields = results.len();
    debug!("search matched {total} occurrences in {fields} fields");
    results
}

struct Searcher<'a> {
    needle: &'a str,
    entries: &'a mut IndexMap<String, usize>,
}

impl Searcher<'_> {
    fn search_action(&mut self, action: &Action) {
        self.search_node(NodeKey::action(action.id), action);
        for node in &action.sub_nodes {
            match node {
                ActionNode::Action(sub_action) => self.search_action(sub_action),
                ActionNode::Verification(verification) => self.search_node(
                    NodeKey::verification(action.id, verification.id),
                    verification,
                ),
            }
        }
    }

    fn search_node(&mut self, key: NodeKey, node: &dyn FilterTarget) {
        let needle = self.needle;
        let entries = &mut *self.entries;
        let mut sink = |path: &str, value: &str| {
            let count = value.to_lowercase().matches(needle).count();
            if count > 0 {
                entries.insert(format!("{key}-{path}"), count);
            }
        };
        node.visit_fields(&mut FieldVisitor::new(&mut sink));
    }
}
