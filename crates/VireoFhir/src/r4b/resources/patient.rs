use serde::{Deserialize, Serialize};

use crate::builder::{
    ElementBuilder, ResourceBuilder, impl_backbone_target, impl_domain_resource_target,
};
use crate::choice::{ChoiceField, impl_choice_field};
use crate::element::Element;
use crate::r4b::{
    Boolean, CodeableConcept, Date, DateTime, Extension, HumanName, Identifier, Meta, Narrative,
    Period, Resource, Uri,
};

/// Demographics and administrative information about a person receiving care.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Patient {
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
    /// Business identifiers for this patient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,
    /// Whether this patient record is in active use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<Boolean>,
    /// Names associated with the patient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Vec<HumanName>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Element<AdministrativeGender, Extension>>,
    #[serde(rename = "birthDate", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<Date>,
    #[serde(rename = "deceasedBoolean", skip_serializing_if = "Option::is_none")]
    pub deceased_boolean: Option<Boolean>,
    #[serde(rename = "deceasedDateTime", skip_serializing_if = "Option::is_none")]
    pub deceased_date_time: Option<DateTime>,
    /// Contact parties (guardian, partner, friend) for the patient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vec<PatientContact>>,
}

/// Fixed value set for [`Patient::gender`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdministrativeGender {
    Male,
    Female,
    Other,
    Unknown,
}

/// The `deceased[x]` choice of [`Patient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatientDeceased {
    Boolean(Boolean),
    DateTime(DateTime),
}

impl_choice_field!(PatientDeceased, "deceased", Patient {
    Boolean / "Boolean" => deceased_boolean,
    DateTime / "DateTime" => deceased_date_time,
});

/// A contact party for the patient. Backbone element: carries modifier
/// extensions of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PatientContact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(rename = "modifierExtension", skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Kind of relationship to the patient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<Vec<CodeableConcept>>,
    /// Name associated with the contact person
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<HumanName>,
    /// Period during which this contact was/is valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

impl_domain_resource_target!(Extension, Meta, Narrative, Resource => Patient);
impl_backbone_target!(Extension => PatientContact);

impl Patient {
    pub fn builder() -> ResourceBuilder<Patient> {
        ResourceBuilder::new()
    }
}

impl ResourceBuilder<Patient> {
    /// Appends one business identifier.
    pub fn identifier(mut self, identifier: Identifier) -> Self {
        self.target
            .identifier
            .get_or_insert_with(Vec::new)
            .push(identifier);
        self
    }

    pub fn active(mut self, active: impl Into<Boolean>) -> Self {
        self.target.active = Some(active.into());
        self
    }

    /// Appends one name.
    pub fn name(mut self, name: HumanName) -> Self {
        self.target.name.get_or_insert_with(Vec::new).push(name);
        self
    }

    pub fn gender(mut self, gender: AdministrativeGender) -> Self {
        self.target.gender = Some(gender.into());
        self
    }

    pub fn birth_date(mut self, birth_date: impl Into<Date>) -> Self {
        self.target.birth_date = Some(birth_date.into());
        self
    }

    /// Sets the `deceased[x]` choice, clearing any previously set variant.
    pub fn deceased(mut self, deceased: PatientDeceased) -> Self {
        deceased.assign(&mut self.target);
        self
    }

    /// Appends one contact party.
    pub fn contact(mut self, contact: PatientContact) -> Self {
        self.target
            .contact
            .get_or_insert_with(Vec::new)
            .push(contact);
        self
    }
}

impl PatientContact {
    pub fn builder() -> ElementBuilder<PatientContact> {
        ElementBuilder::new()
    }
}

impl ElementBuilder<PatientContact> {
    /// Appends one relationship kind.
    pub fn relationship(mut self, relationship: CodeableConcept) -> Self {
        self.target
            .relationship
            .get_or_insert_with(Vec::new)
            .push(relationship);
        self
    }

    pub fn name(mut self, name: HumanName) -> Self {
        self.target.name = Some(name);
        self
    }

    pub fn period(mut self, period: Period) -> Self {
        self.target.period = Some(period);
        self
    }
}
