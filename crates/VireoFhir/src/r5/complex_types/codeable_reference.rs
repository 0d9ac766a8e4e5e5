use serde::{Deserialize, Serialize};

use crate::builder::{ElementBuilder, impl_element_target};
use crate::r5::{CodeableConcept, Extension, Reference};

/// Reference to a resource or a concept, new in R5. Either (or both) of
/// `concept` and `reference` may be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CodeableReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    /// Reference to a concept (by class)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept: Option<CodeableConcept>,
    /// Reference to a resource (by instance)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Reference>,
}

impl_element_target!(Extension => CodeableReference);

impl CodeableReference {
    pub fn builder() -> ElementBuilder<CodeableReference> {
        ElementBuilder::new()
    }
}

impl ElementBuilder<CodeableReference> {
    pub fn concept(mut self, concept: CodeableConcept) -> Self {
        self.target.concept = Some(concept);
        self
    }

    pub fn reference(mut self, reference: Reference) -> Self {
        self.target.reference = Some(reference);
        self
    }
}
