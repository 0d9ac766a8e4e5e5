use serde::{Deserialize, Serialize};

use crate::builder::{ElementBuilder, impl_element_target};
use crate::element::Element;
use crate::r4b::{Code, Decimal, Extension, FhirString, Uri};

/// A measured amount, potentially approximate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Quantity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    /// Numerical value, with implicit precision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
    /// How to understand the value, e.g. `<` for "less than"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparator: Option<Element<QuantityComparator, Extension>>,
    /// Unit representation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<FhirString>,
    /// System that defines the coded unit form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<Uri>,
    /// Coded form of the unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<Code>,
}

/// Fixed value set for [`Quantity::comparator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantityComparator {
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "<=")]
    LessOrEqual,
    #[serde(rename = ">=")]
    GreaterOrEqual,
    #[serde(rename = ">")]
    GreaterThan,
}

impl_element_target!(Extension => Quantity);

impl Quantity {
    pub fn builder() -> ElementBuilder<Quantity> {
        ElementBuilder::new()
    }
}

impl ElementBuilder<Quantity> {
    pub fn value(mut self, value: impl Into<Decimal>) -> Self {
        self.target.value = Some(value.into());
        self
    }

    pub fn comparator(mut self, comparator: QuantityComparator) -> Self {
        self.target.comparator = Some(comparator.into());
        self
    }

    pub fn unit(mut self, unit: impl Into<FhirString>) -> Self {
        self.target.unit = Some(unit.into());
        self
    }

    pub fn system(mut self, system: impl Into<Uri>) -> Self {
        self.target.system = Some(system.into());
        self
    }

    pub fn code(mut self, code: impl Into<Code>) -> Self {
        self.target.code = Some(code.into());
        self
    }
}
