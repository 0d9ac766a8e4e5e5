use serde::{Deserialize, Serialize};

use crate::builder::{ElementBuilder, impl_element_target};
use crate::element::Element;
use crate::r4::{CodeableConcept, Extension, FhirString, Period, Reference, Uri};

/// A business identifier for an object within a given system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Identifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    /// Purpose of this identifier
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<Element<IdentifierUse, Extension>>,
    /// Description of the identifier
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<CodeableConcept>,
    /// Namespace for the identifier value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<Uri>,
    /// The value, unique within the system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<FhirString>,
    /// Time period when the identifier is/was valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    /// Organization that issued the identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigner: Option<Box<Reference>>,
}

/// Fixed value set for [`Identifier::use_`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierUse {
    Usual,
    Official,
    Temp,
    Secondary,
    Old,
}

impl_element_target!(Extension => Identifier);

impl Identifier {
    pub fn builder() -> ElementBuilder<Identifier> {
        ElementBuilder::new()
    }
}

impl ElementBuilder<Identifier> {
    pub fn use_(mut self, use_: IdentifierUse) -> Self {
        self.target.use_ = Some(use_.into());
        self
    }

    pub fn system(mut self, system: impl Into<Uri>) -> Self {
        self.target.system = Some(system.into());
        self
    }

    pub fn value(mut self, value: impl Into<FhirString>) -> Self {
        self.target.value = Some(value.into());
        self
    }
}
