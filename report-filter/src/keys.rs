//! Stable identifiers for report nodes.
//!
//! The string forms are what a viewer uses to find a node again, so they must
//! not change between releases:
//!
//! - `action-{id}`
//! - `action-{action_id}-verification-{id}`
//! - `msg-{id}`

use crate::error::FilterError;
use serde_with::DeserializeFromStr;
use serde_with::SerializeDisplay;
use std::fmt;
use std::str::FromStr;

const ACTION_PREFIX: &str = "action-";
const VERIFICATION_SEPARATOR: &str = "-verification-";
const VERIFICATION_SEGMENT: &str = "verification-";
const MESSAGE_PREFIX: &str = "msg-";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub enum NodeKey {
    Action { id: u32 },
    Verification { action_id: u32, id: u32 },
    Message { id: u32 },
}

impl NodeKey {
    pub const fn action(id: u32) -> Self {
        NodeKey::Action { id }
    }

    /// Verification ids are only unique inside their owning action.
    pub const fn verification(action_id: u32, id: u32) -> Self {
        NodeKey::Verification { action_id, id }
    }

    pub const fn message(id: u32) -> Self {
        NodeKey::Message { id }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Action { id } => write!(f, "{ACTION_PREFIX}{id}"),
            NodeKey::Verification { action_id, id } => {
                write!(f, "{ACTION_PREFIX}{action_id}{VERIFICATION_SEPARATOR}{id}")
            }
            NodeKey::Message { id } => write!(f, "{MESSAGE_PREFIX}{id}"),
        }
    }
}

impl FromStr for NodeKey {
    type Err = FilterError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || FilterError::InvalidKey(raw.to_string());
        if let Some(rest) = raw.strip_prefix(MESSAGE_PREFIX) {
            return parse_id(rest).map(NodeKey::message).ok_or_else(invalid);
        }
        let rest = raw.strip_prefix(ACTION_PREFIX).ok_or_else(invalid)?;
        match rest.split_once(VERIFICATION_SEPARATOR) {
            Some((action_id, id)) => match (parse_id(action_id), parse_id(id)) {
                (Some(action_id), Some(id)) => Ok(NodeKey::verification(action_id, id)),
                _ => Err(invalid()),
            },
            None => parse_id(rest).map(NodeKey::action).ok_or_else(invalid),
        }
    }
}

// `u32::from_str` accepts a leading '+', which would make two spellings of one key.
fn parse_id(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Splits `{node key}-{rest}` into the node key and `rest`.
pub(crate) fn split_node_key(raw: &str) -> Option<(NodeKey, &str)> {
    if let Some(rest) = raw.strip_prefix(MESSAGE_PREFIX) {
        let (id, rest) = take_id(rest)?;
        return Some((NodeKey::message(id), rest));
    }
    let (action_id, rest) = take_id(raw.strip_prefix(ACTION_PREFIX)?)?;
    match rest.strip_prefix(VERIFICATION_SEGMENT) {
        Some(rest) => {
            let (id, rest) = take_id(rest)?;
            Some((NodeKey::verification(action_id, id), rest))
        }
        None => Some((NodeKey::action(action_id), rest)),
    }
}

fn take_id(raw: &str) -> Option<(u32, &str)> {
    let (id, rest) = raw.split_once('-')?;
    Some((parse_id(id)?, rest))
}

pub fn key_for_action(id: u32) -> String {
    NodeKey::action(id).to_string()
}

pub fn key_for_verification(action_id: u32, id: u32) -> String {
    NodeKey::verification(action_id, id).to_string()
}

pub fn key_for_message(id: u32) -> String {
    NodeKey::message(id).to_string()
}
