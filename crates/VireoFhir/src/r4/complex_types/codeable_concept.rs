use serde::{Deserialize, Serialize};

use crate::builder::{ElementBuilder, impl_element_target};
use crate::r4::{Coding, Extension, FhirString};

/// A concept, potentially represented by one or more codings plus free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CodeableConcept {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    /// Codes defined by terminology systems
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coding: Option<Vec<Coding>>,
    /// Plain text representation of the concept
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<FhirString>,
}

impl_element_target!(Extension => CodeableConcept);

impl CodeableConcept {
    pub fn builder() -> ElementBuilder<CodeableConcept> {
        ElementBuilder::new()
    }
}

impl ElementBuilder<CodeableConcept> {
    /// Appends one coding.
    pub fn coding(mut self, coding: Coding) -> Self {
        self.target.coding.get_or_insert_with(Vec::new).push(coding);
        self
    }

    pub fn text(mut self, text: impl Into<FhirString>) -> Self {
        self.target.text = Some(text.into());
        self
    }
}
