// src/config/options.rs
use super::consts::*;
use crate::check::SortDirection;

/// Where the timestamps live in the markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorSpec {
    /// Class of the element carrying the timestamp attribute.
    pub timestamp_class: String,
    /// Attribute holding the raw timestamp string.
    pub timestamp_attr: String,
    /// Class of the anchor that loads the next page.
    pub more_link_class: String,
}

impl Default for SelectorSpec {
    fn default() -> Self {
        Self {
            timestamp_class: s!(TIMESTAMP_CLASS),
            timestamp_attr: s!(TIMESTAMP_ATTR),
            more_link_class: s!(MORE_LINK_CLASS),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CheckOptions {
    pub source: String,
    pub count: usize,
    pub direction: SortDirection,
    pub selectors: SelectorSpec,
    pub quiet: bool,
}

impl CheckOptions {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            count: DEFAULT_COUNT,
            direction: SortDirection::Descending,
            selectors: SelectorSpec::default(),
            quiet: false,
        }
    }
}
