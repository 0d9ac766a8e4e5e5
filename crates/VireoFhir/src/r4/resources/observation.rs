use serde::{Deserialize, Serialize};

use crate::builder::{ResourceBuilder, impl_domain_resource_target};
use crate::choice::{ChoiceField, impl_choice_field};
use crate::element::Element;
use crate::r4::{
    Boolean, CodeableConcept, DateTime, Extension, FhirString, Identifier, Instant, Integer, Meta,
    Narrative, Period, Quantity, Reference, Resource, Uri,
};

/// Measurements and simple assertions made about a patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Observation {
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
    /// Business identifiers for this observation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,
    /// Status of the result value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Element<ObservationStatus, Extension>>,
    /// Type of observation (code / type)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,
    /// Who/what the observation is about
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,
    #[serde(rename = "effectiveDateTime", skip_serializing_if = "Option::is_none")]
    pub effective_date_time: Option<DateTime>,
    #[serde(rename = "effectivePeriod", skip_serializing_if = "Option::is_none")]
    pub effective_period: Option<Period>,
    #[serde(rename = "effectiveInstant", skip_serializing_if = "Option::is_none")]
    pub effective_instant: Option<Instant>,
    /// When the result was made available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued: Option<Instant>,
    #[serde(rename = "valueQuantity", skip_serializing_if = "Option::is_none")]
    pub value_quantity: Option<Quantity>,
    #[serde(rename = "valueCodeableConcept", skip_serializing_if = "Option::is_none")]
    pub value_codeable_concept: Option<CodeableConcept>,
    #[serde(rename = "valueString", skip_serializing_if = "Option::is_none")]
    pub value_string: Option<FhirString>,
    #[serde(rename = "valueBoolean", skip_serializing_if = "Option::is_none")]
    pub value_boolean: Option<Boolean>,
    #[serde(rename = "valueInteger", skip_serializing_if = "Option::is_none")]
    pub value_integer: Option<Integer>,
    #[serde(rename = "valuePeriod", skip_serializing_if = "Option::is_none")]
    pub value_period: Option<Period>,
}

/// Fixed value set for [`Observation::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObservationStatus {
    Registered,
    Preliminary,
    Final,
    Amended,
    Corrected,
    Cancelled,
    #[serde(rename = "entered-in-error")]
    EnteredInError,
    Unknown,
}

/// The `effective[x]` choice of [`Observation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservationEffective {
    DateTime(DateTime),
    Period(Period),
    Instant(Instant),
}

impl_choice_field!(ObservationEffective, "effective", Observation {
    DateTime / "DateTime" => effective_date_time,
    Period / "Period" => effective_period,
    Instant / "Instant" => effective_instant,
});

/// The `value[x]` choice of [`Observation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservationValue {
    Quantity(Quantity),
    CodeableConcept(CodeableConcept),
    String(FhirString),
    Boolean(Boolean),
    Integer(Integer),
    Period(Period),
}

impl_choice_field!(ObservationValue, "value", Observation {
    Quantity / "Quantity" => value_quantity,
    CodeableConcept / "CodeableConcept" => value_codeable_concept,
    String / "String" => value_string,
    Boolean / "Boolean" => value_boolean,
    Integer / "Integer" => value_integer,
    Period / "Period" => value_period,
});

impl_domain_resource_target!(Extension, Meta, Narrative, Resource => Observation);

impl Observation {
    pub fn builder() -> ResourceBuilder<Observation> {
        ResourceBuilder::new()
    }
}

impl ResourceBuilder<Observation> {
    /// Appends one business identifier.
    pub fn identifier(mut self, identifier: Identifier) -> Self {
        self.target
            .identifier
            .get_or_insert_with(Vec::new)
            .push(identifier);
        self
    }

    pub fn status(mut self, status: ObservationStatus) -> Self {
        self.target.status = Some(status.into());
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

    /// Sets the `effective[x]` choice, clearing any previously set variant.
    pub fn effective(mut self, effective: ObservationEffective) -> Self {
        effective.assign(&mut self.target);
        self
    }

    pub fn issued(mut self, issued: impl Into<Instant>) -> Self {
        self.target.issued = Some(issued.into());
        self
    }

    /// Sets the `value[x]` choice, clearing any previously set variant.
    pub fn value(mut self, value: ObservationValue) -> Self {
        value.assign(&mut self.target);
        self
    }
}
