//! Compiles a [`FilterConfig`] and walks a report tree with it.

use crate::error::FilterError;
use crate::error::Result;
use crate::filter::config::FilterConfig;
use crate::filter::config::FilterPath;
use crate::filter::config::FilterType;
use crate::filter::fields::FilterTarget;
use crate::filter::fields::all_text;
use crate::filter::fields::service_text;
use crate::filter::results::FilterResults;
use crate::keys::NodeKey;
use crate::model::Action;
use crate::model::ActionNode;
use crate::model::StatusType;
use crate::model::TestCase;
use crate::model::Verification;
use indexmap::IndexSet;
use std::collections::HashSet;
use tracing::debug;
use tracing::trace;

/// Returns the keys of every node of `test_case` that passes `config`, plus
/// the actions enclosing them.
pub fn filtrate(test_case: &TestCase, config: &FilterConfig) -> Result<FilterResults> {
    let filters = FilterSet::new(config)?;
    Ok(filters.apply(test_case))
}

/// A [`FilterConfig`] with its values normalized, ready to be applied to any
/// number of reports.
#[derive(Debug, Clone)]
pub struct FilterSet {
    types: HashSet<FilterType>,
    blocks: Vec<BlockMatcher>,
}

#[derive(Debug, Clone)]
enum BlockMatcher {
    All(Vec<String>),
    Service(Vec<String>),
    Status(HashSet<StatusType>),
}

impl FilterSet {
    pub fn new(config: &FilterConfig) -> Result<Self> {
        let mut blocks = Vec::with_capacity(config.blocks.len());
        for block in &config.blocks {
            let values: Vec<&str> = block
                .values
                .iter()
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .collect();
            if values.is_empty() {
                continue;
            }
            let matcher = match block.path {
                FilterPath::All => BlockMatcher::All(lowercase_all(&values)),
                FilterPath::Service => BlockMatcher::Service(lowercase_all(&values)),
                FilterPath::Status => BlockMatcher::Status(parse_statuses(&values)?),
            };
            blocks.push(matcher);
        }
        debug!(
            "compiled filter: types {:?}, {} active of {} blocks",
            config.types,
            blocks.len(),
            config.blocks.len()
        );
        Ok(Self {
            types: config.types.iter().copied().collect(),
            blocks,
        })
    }

    pub fn accepts(&self, filter_type: FilterType) -> bool {
        self.types.contains(&filter_type)
    }

    pub fn apply(&self, test_case: &TestCase) -> FilterResults {
        let mut keys = IndexSet::new();
        for action in &test_case.actions {
            self.visit_action(action, &mut keys);
        }
        if self.accepts(FilterType::Message) {
            for message in &test_case.messages {
                if self.matches(message) {
                    trace!("message {} matched", message.id);
                    keys.insert(NodeKey::message(message.id));
                }
            }
        }
        let matched = keys.len();
        debug!("filter matched {matched} report nodes");
        FilterResults::new(keys)
    }

    /// Children are visited before the action itself is decided; a matching
    /// child pulls the action in even when the action fails the filter.
    fn visit_action(&self, action: &Action, keys: &mut IndexSet<NodeKey>) -> bool {
        let position = keys.len();
        let mut descendant_matched = false;
        for node in &action.sub_nodes {
            let matched = match node {
                ActionNode::Action(sub_action) => self.visit_action(sub_action, keys),
                ActionNode::Verification(verification) => {
                    self.visit_verification(action.id, verification, keys)
                }
            };
            descendant_matched |= matched;
        }

        let matched = self.accepts(FilterType::Action) && self.matches(action);
        if !matched && !descendant_matched {
            return false;
        }
        trace!(
            "action {} kept (self: {matched}, descendants: {descendant_matched})",
            action.id
        );
        let key = NodeKey::action(action.id);
        // Ids are unique per test case; a duplicate keeps its first position.
        if !keys.contains(&key) {
            keys.shift_insert(position, key);
        }
        true
    }

    fn visit_verification(
        &self,
        action_id: u32,
        verification: &Verification,
        keys: &mut IndexSet<NodeKey>,
    ) -> bool {
        if !self.accepts(FilterType::Verification) || !self.matches(verification) {
            return false;
        }
        trace!("verification {action_id}/{} matched", verification.id);
        keys.insert(NodeKey::verification(action_id, verification.id));
        true
    }

    /// AND across blocks, OR across the values of one block.
    fn matches(&self, target: &dyn FilterTarget) -> bool {
        let mut all_haystack: Option<String> = None;
        let mut service_haystack: Option<Option<String>> = None;
        self.blocks.iter().all(|block| match block {
            BlockMatcher::All(needles) => {
                let haystack = all_haystack.get_or_insert_with(|| all_text(target));
                contains_any(haystack, needles)
            }
            BlockMatcher::Service(needles) => service_haystack
                .get_or_insert_with(|| service_text(target))
                .as_deref()
                .is_some_and(|haystack| contains_any(haystack, needles)),
            BlockMatcher::Status(statuses) => target
                .status()
                .is_some_and(|status| statuses.contains(&status)),
        })
    }
}

fn contains_any(haystack: &str, needles: &[String]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle.as_str()))
}

fn lowercase_all(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_lowercase()).collect()
}

fn parse_statuses(values: &[&str]) -> Result<HashSet<StatusType>> {
    values
        .iter()
        .map(|value| {
            value
                .parse::<StatusType>()
                .map_err(|_| FilterError::UnknownStatus((*value).to_string()))
        })
        .collect()
}
