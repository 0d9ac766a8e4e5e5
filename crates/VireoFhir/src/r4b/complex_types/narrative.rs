use serde::{Deserialize, Serialize};

use crate::builder::impl_element_target;
use crate::element::Element;
use crate::r4b::{Extension, FhirString};

/// Human-readable summary of a resource.
///
/// Both `status` and `div` are required by the specification; as everywhere
/// in this crate, conformance of the actual values is not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Narrative {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    /// How much of the resource content the narrative covers
    pub status: Element<NarrativeStatus, Extension>,
    /// Limited XHTML content
    pub div: FhirString,
}

/// Fixed value set for [`Narrative::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NarrativeStatus {
    Generated,
    Extensions,
    Additional,
    Empty,
}

impl_element_target!(Extension => Narrative);

impl Narrative {
    /// Creates a narrative from its two required parts.
    pub fn new(status: NarrativeStatus, div: impl Into<FhirString>) -> Self {
        Narrative {
            id: None,
            extension: None,
            status: status.into(),
            div: div.into(),
        }
    }
}
