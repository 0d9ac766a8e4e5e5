use serde::{Deserialize, Serialize};

use crate::builder::{ElementBuilder, impl_element_target};
use crate::r4::{DateTime, Extension};

/// A time range defined by start and end datetimes, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Period {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    /// Starting time, boundary inclusive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime>,
    /// End time, boundary inclusive; absent means ongoing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime>,
}

impl_element_target!(Extension => Period);

impl Period {
    pub fn builder() -> ElementBuilder<Period> {
        ElementBuilder::new()
    }
}

impl ElementBuilder<Period> {
    pub fn start(mut self, start: impl Into<DateTime>) -> Self {
        self.target.start = Some(start.into());
        self
    }

    pub fn end(mut self, end: impl Into<DateTime>) -> Self {
        self.target.end = Some(end.into());
        self
    }
}
