use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown filter type '{0}'")]
    UnknownType(String),

    #[error("unknown filter path '{0}'")]
    UnknownPath(String),

    #[error("invalid filter block '{0}': expected PATH=VALUE[,VALUE...]")]
    InvalidBlock(String),

    #[error("unknown status '{0}'")]
    UnknownStatus(String),

    #[error("invalid node key '{0}'")]
    InvalidKey(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;
