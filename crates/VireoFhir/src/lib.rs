//! FHIR data models and builders for R4, R4B, and R5.
//!
//! Each supported FHIR specification version lives in its own feature-gated
//! module (`r4`, `r4b`, `r5`) containing primitive type aliases, complex
//! datatypes, and resource definitions. On top of the data model sits a small
//! generic builder core ([`builder`]) providing a uniform, chainable way to
//! assemble deeply nested, partially optional FHIR structures while keeping
//! the absent-means-absent serialization discipline intact.
//!
//! The library performs no validation: builders accumulate whatever they are
//! given, and conformance checking belongs to a separate layer.

pub mod builder;
pub mod choice;
pub mod date_time;
pub mod fhir_version;
pub mod precise_decimal;
#[cfg(feature = "R4")]
pub mod r4;
#[cfg(feature = "R4B")]
pub mod r4b;
#[cfg(feature = "R5")]
pub mod r5;
mod element;

pub use builder::{
    BackboneTarget, DomainResourceTarget, ElementBuilder, ElementTarget, ResourceBuilder,
    ResourceTarget,
};
pub use choice::{ChoiceElement, ChoiceField};
pub use date_time::{
    DatePrecision, DateTimePrecision, PrecisionDate, PrecisionDateTime, PrecisionInstant,
};
pub use element::Element;
pub use fhir_version::{FhirResource, FhirVersion};
pub use precise_decimal::PreciseDecimal;
