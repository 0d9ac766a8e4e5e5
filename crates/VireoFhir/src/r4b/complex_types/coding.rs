use serde::{Deserialize, Serialize};

use crate::builder::{ElementBuilder, impl_element_target};
use crate::r4b::{Boolean, Code, Extension, FhirString, Uri};

/// A reference to a code defined by a terminology system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Coding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    /// Identity of the terminology system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<Uri>,
    /// Version of the system, if relevant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<FhirString>,
    /// Symbol in syntax defined by the system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<Code>,
    /// Representation defined by the system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<FhirString>,
    /// Whether this coding was chosen directly by the user
    #[serde(rename = "userSelected", skip_serializing_if = "Option::is_none")]
    pub user_selected: Option<Boolean>,
}

impl_element_target!(Extension => Coding);

impl Coding {
    pub fn builder() -> ElementBuilder<Coding> {
        ElementBuilder::new()
    }
}

impl ElementBuilder<Coding> {
    pub fn system(mut self, system: impl Into<Uri>) -> Self {
        self.target.system = Some(system.into());
        self
    }

    pub fn code(mut self, code: impl Into<Code>) -> Self {
        self.target.code = Some(code.into());
        self
    }

    pub fn display(mut self, display: impl Into<FhirString>) -> Self {
        self.target.display = Some(display.into());
        self
    }
}
