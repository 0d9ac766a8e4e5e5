use serde::{Deserialize, Serialize};

use crate::builder::{ElementBuilder, impl_element_target};
use crate::r4b::{Extension, FhirString, Identifier, Uri};

/// A reference from one resource to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Reference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    /// Literal reference: relative, internal, or absolute URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<FhirString>,
    /// Expected type of the target
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<Uri>,
    /// Logical reference when no literal reference exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Box<Identifier>>,
    /// Text alternative for the target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<FhirString>,
}

impl_element_target!(Extension => Reference);

impl Reference {
    pub fn builder() -> ElementBuilder<Reference> {
        ElementBuilder::new()
    }
}

impl ElementBuilder<Reference> {
    pub fn reference(mut self, reference: impl Into<FhirString>) -> Self {
        self.target.reference = Some(reference.into());
        self
    }

    pub fn type_(mut self, type_: impl Into<Uri>) -> Self {
        self.target.type_ = Some(type_.into());
        self
    }

    pub fn identifier(mut self, identifier: Identifier) -> Self {
        self.target.identifier = Some(Box::new(identifier));
        self
    }

    pub fn display(mut self, display: impl Into<FhirString>) -> Self {
        self.target.display = Some(display.into());
        self
    }
}
