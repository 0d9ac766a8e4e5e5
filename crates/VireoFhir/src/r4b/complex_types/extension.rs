use serde::{Deserialize, Serialize};

use crate::builder::{ElementBuilder, impl_element_target};
use crate::choice::{ChoiceField, impl_choice_field};
use crate::r4b::{
    Boolean, Code, CodeableConcept, Coding, DateTime, Decimal, FhirString, Integer, Period,
    Quantity, Reference, Uri,
};

/// Optional additional content attached to an element.
///
/// An extension is a URI-keyed key/value pair: `url` identifies the meaning,
/// and exactly one of the `value[x]` fields carries the typed payload.
/// Exclusivity of the value fields is enforced when building through
/// [`ExtensionValue`]; no runtime check is applied to hand-assembled values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Extension {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Nested extensions (used when no value is present)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    /// Identity of the extension, required
    pub url: String,
    #[serde(rename = "valueBoolean", skip_serializing_if = "Option::is_none")]
    pub value_boolean: Option<Boolean>,
    #[serde(rename = "valueCode", skip_serializing_if = "Option::is_none")]
    pub value_code: Option<Code>,
    #[serde(rename = "valueCodeableConcept", skip_serializing_if = "Option::is_none")]
    pub value_codeable_concept: Option<CodeableConcept>,
    #[serde(rename = "valueCoding", skip_serializing_if = "Option::is_none")]
    pub value_coding: Option<Coding>,
    #[serde(rename = "valueDateTime", skip_serializing_if = "Option::is_none")]
    pub value_date_time: Option<DateTime>,
    #[serde(rename = "valueDecimal", skip_serializing_if = "Option::is_none")]
    pub value_decimal: Option<Decimal>,
    #[serde(rename = "valueInteger", skip_serializing_if = "Option::is_none")]
    pub value_integer: Option<Integer>,
    #[serde(rename = "valuePeriod", skip_serializing_if = "Option::is_none")]
    pub value_period: Option<Period>,
    #[serde(rename = "valueQuantity", skip_serializing_if = "Option::is_none")]
    pub value_quantity: Option<Quantity>,
    #[serde(rename = "valueReference", skip_serializing_if = "Option::is_none")]
    pub value_reference: Option<Reference>,
    #[serde(rename = "valueString", skip_serializing_if = "Option::is_none")]
    pub value_string: Option<FhirString>,
    #[serde(rename = "valueUri", skip_serializing_if = "Option::is_none")]
    pub value_uri: Option<Uri>,
}

/// The `value[x]` choice of [`Extension`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionValue {
    Boolean(Boolean),
    Code(Code),
    CodeableConcept(CodeableConcept),
    Coding(Coding),
    DateTime(DateTime),
    Decimal(Decimal),
    Integer(Integer),
    Period(Period),
    Quantity(Quantity),
    Reference(Reference),
    String(FhirString),
    Uri(Uri),
}

impl_choice_field!(ExtensionValue, "value", Extension {
    Boolean / "Boolean" => value_boolean,
    Code / "Code" => value_code,
    CodeableConcept / "CodeableConcept" => value_codeable_concept,
    Coding / "Coding" => value_coding,
    DateTime / "DateTime" => value_date_time,
    Decimal / "Decimal" => value_decimal,
    Integer / "Integer" => value_integer,
    Period / "Period" => value_period,
    Quantity / "Quantity" => value_quantity,
    Reference / "Reference" => value_reference,
    String / "String" => value_string,
    Uri / "Uri" => value_uri,
});

impl_element_target!(Extension => Extension);

impl Extension {
    /// Starts a builder with the required `url` already set.
    pub fn builder(url: impl Into<String>) -> ElementBuilder<Extension> {
        let mut builder = ElementBuilder::<Extension>::new();
        builder.target.url = url.into();
        builder
    }
}

impl ElementBuilder<Extension> {
    /// Overwrites the extension url.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.target.url = url.into();
        self
    }

    /// Sets the typed value, clearing any previously set `value[x]` sibling.
    pub fn value(mut self, value: ExtensionValue) -> Self {
        value.assign(&mut self.target);
        self
    }
}
