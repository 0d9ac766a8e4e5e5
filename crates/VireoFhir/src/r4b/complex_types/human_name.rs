use serde::{Deserialize, Serialize};

use crate::builder::{ElementBuilder, impl_element_target};
use crate::element::Element;
use crate::r4b::{Extension, FhirString, Period};

/// A name of a human, with the parts that compose it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HumanName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    /// Purpose of this name
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<Element<NameUse, Extension>>,
    /// Full text representation of the name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<FhirString>,
    /// Family name, often called surname
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<FhirString>,
    /// Given names, in order of appearance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given: Option<Vec<FhirString>>,
    /// Parts that come before the name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<Vec<FhirString>>,
    /// Parts that come after the name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<Vec<FhirString>>,
    /// Time period when the name was/is in use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

/// Fixed value set for [`HumanName::use_`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameUse {
    Usual,
    Official,
    Temp,
    Nickname,
    Anonymous,
    Old,
    Maiden,
}

impl_element_target!(Extension => HumanName);

impl HumanName {
    pub fn builder() -> ElementBuilder<HumanName> {
        ElementBuilder::new()
    }
}

impl ElementBuilder<HumanName> {
    pub fn use_(mut self, use_: NameUse) -> Self {
        self.target.use_ = Some(use_.into());
        self
    }

    pub fn text(mut self, text: impl Into<FhirString>) -> Self {
        self.target.text = Some(text.into());
        self
    }

    pub fn family(mut self, family: impl Into<FhirString>) -> Self {
        self.target.family = Some(family.into());
        self
    }

    /// Appends one given name, preserving order.
    pub fn given(mut self, given: impl Into<FhirString>) -> Self {
        self.target.given.get_or_insert_with(Vec::new).push(given.into());
        self
    }

    /// Appends one name prefix.
    pub fn prefix(mut self, prefix: impl Into<FhirString>) -> Self {
        self.target
            .prefix
            .get_or_insert_with(Vec::new)
            .push(prefix.into());
        self
    }

    pub fn period(mut self, period: Period) -> Self {
        self.target.period = Some(period);
        self
    }
}
