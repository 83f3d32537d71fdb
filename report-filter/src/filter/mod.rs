//! Hierarchical filtering of a report tree.
//!
//! A node passes a [`FilterConfig`] when its type is selected and it passes
//! every block; a block passes when the selected field(s) contain any one of
//! its values. Actions are also kept when any node below them passes, so the
//! path to every match stays reachable.

mod config;
pub(crate) mod fields;
mod matcher;
mod results;

pub use config::FilterBlock;
pub use config::FilterConfig;
pub use config::FilterPath;
pub use config::FilterType;
pub use matcher::FilterSet;
pub use matcher::filtrate;
pub use results::FilterResults;
