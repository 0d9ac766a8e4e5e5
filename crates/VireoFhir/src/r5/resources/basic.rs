use serde::{Deserialize, Serialize};

use crate::builder::{ResourceBuilder, impl_domain_resource_target};
use crate::element::Element;
use crate::r5::{
    CodeableConcept, DateTime, Extension, Identifier, Meta, Narrative, Reference, Resource, Uri,
};

/// Resource for concepts not yet covered by a dedicated resource type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Basic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(rename = "implicitRules", skip_serializing_if = "Option::is_none")]
    pub implicit_rules: Option<Uri>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Element<String, Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Narrative>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contained: Option<Vec<Resource>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(rename = "modifierExtension", skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,
    /// Kind of resource this entry stands in for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,
    /// When this record was created (full dateTime as of R5)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Reference>,
}

impl_domain_resource_target!(Extension, Meta, Narrative, Resource => Basic);

impl Basic {
    pub fn builder() -> ResourceBuilder<Basic> {
        ResourceBuilder::new()
    }
}

impl ResourceBuilder<Basic> {
    pub fn identifier(mut self, identifier: Identifier) -> Self {
        self.target
            .identifier
            .get_or_insert_with(Vec::new)
            .push(identifier);
        self
    }

    pub fn code(mut self, code: CodeableConcept) -> Self {
        self.target.code = Some(code);
        self
    }

    pub fn subject(mut self, subject: Reference) -> Self {
        self.target.subject = Some(subject);
        self
    }

    pub fn created(mut self, created: impl Into<DateTime>) -> Self {
        self.target.created = Some(created.into());
        self
    }

    pub fn author(mut self, author: Reference) -> Self {
        self.target.author = Some(author);
        self
    }
}
