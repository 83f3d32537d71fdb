use crate::keys::NodeKey;
use indexmap::IndexSet;
use serde::Deserialize;
use serde::Serialize;

/// Keys of the nodes a filter kept, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterResults {
    keys: IndexSet<NodeKey>,
}

impl FilterResults {
    pub fn new(keys: IndexSet<NodeKey>) -> Self {
        Self { keys }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, key: &NodeKey) -> bool {
        self.keys.contains(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeKey> {
        self.keys.iter()
    }

    pub fn is_action_matched(&self, id: u32) -> bool {
        self.contains(&NodeKey::action(id))
    }

    pub fn is_verification_matched(&self, action_id: u32, id: u32) -> bool {
        self.contains(&NodeKey::verification(action_id, id))
    }

    pub fn is_message_matched(&self, id: u32) -> bool {
        self.contains(&NodeKey::message(id))
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.keys.iter().map(ToString::to_string).collect()
    }

    pub fn into_keys(self) -> Vec<NodeKey> {
        self.keys.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a FilterResults {
    type Item = &'a NodeKey;
    type IntoIter = indexmap::set::Iter<'a, NodeKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

impl FromIterator<NodeKey> for FilterResults {
    fn from_iter<I: IntoIterator<Item = NodeKey>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}
