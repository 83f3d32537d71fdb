use crate::error::FilterError;
use serde::Deserialize;
use serde::Serialize;
use serde_with::DeserializeFromStr;
use serde_with::SerializeDisplay;
use std::fmt;
use std::str::FromStr;

/// Node kinds a filter is applied to. JSON uses the same tokens as [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub enum FilterType {
    Action,
    Verification,
    Message,
}

impl FilterType {
    pub const ALL: [FilterType; 3] = [
        FilterType::Action,
        FilterType::Verification,
        FilterType::Message,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            FilterType::Action => "action",
            FilterType::Verification => "verification",
            FilterType::Message => "message",
        }
    }
}

impl FromStr for FilterType {
    type Err = FilterError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "action" | "actions" => Ok(FilterType::Action),
            "verification" | "verifications" => Ok(FilterType::Verification),
            "message" | "messages" | "msg" => Ok(FilterType::Message),
            other => Err(FilterError::UnknownType(other.to_string())),
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field selector of a filter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub enum FilterPath {
    /// Every textual field of the node.
    All,
    /// Service name of an action, source and destination of a message.
    Service,
    /// Exact status of the node.
    Status,
}

impl FilterPath {
    pub const fn as_str(&self) -> &'static str {
        match self {
            FilterPath::All => "all",
            FilterPath::Service => "service",
            FilterPath::Status => "status",
        }
    }
}

impl FromStr for FilterPath {
    type Err = FilterError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "all" | "*" => Ok(FilterPath::All),
            "service" | "servicename" | "service_name" => Ok(FilterPath::Service),
            "status" => Ok(FilterPath::Status),
            other => Err(FilterError::UnknownPath(other.to_string())),
        }
    }
}

impl fmt::Display for FilterPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterBlock {
    pub path: FilterPath,
    #[serde(default)]
    pub values: Vec<String>,
}

impl FilterBlock {
    pub fn new<I, S>(path: FilterPath, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_values(&self) -> bool {
        self.values.iter().any(|value| !value.trim().is_empty())
    }
}

/// Parses `PATH=VALUE[,VALUE...]`, e.g. `service=one,two`.
impl FromStr for FilterBlock {
    type Err = FilterError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (path, values) = raw
            .split_once('=')
            .ok_or_else(|| FilterError::InvalidBlock(raw.to_string()))?;
        let path = path.parse::<FilterPath>()?;
        Ok(Self::new(
            path,
            values
                .split(',')
                .map(str::trim)
                .filter(|value| !value.is_empty()),
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub types: Vec<FilterType>,
    pub blocks: Vec<FilterBlock>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            types: FilterType::ALL.to_vec(),
            blocks: Vec::new(),
        }
    }
}

impl FilterConfig {
    pub fn new(types: Vec<FilterType>, blocks: Vec<FilterBlock>) -> Self {
        Self { types, blocks }
    }

    pub fn with_types(mut self, types: impl IntoIterator<Item = FilterType>) -> Self {
        self.types.clear();
        for filter_type in types {
            if !self.types.contains(&filter_type) {
                self.types.push(filter_type);
            }
        }
        self
    }

    pub fn with_block(mut self, block: FilterBlock) -> Self {
        self.blocks.push(block);
        self
    }

    /// A config without any value narrows nothing.
    pub fn is_active(&self) -> bool {
        self.blocks.iter().any(FilterBlock::has_values)
    }
}
