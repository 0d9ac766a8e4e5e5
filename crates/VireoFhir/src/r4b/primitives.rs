//! Type aliases for the FHIR R4B primitive types.
//!
//! Every primitive is an [`Element`] so it can carry an id and extensions
//! alongside its value (the `_field` shadow of the wire format).

use crate::date_time::{PrecisionDate, PrecisionDateTime, PrecisionInstant};
use crate::element::Element;
use crate::precise_decimal::PreciseDecimal;
use crate::r4b::Extension;

pub type Base64Binary = Element<String, Extension>;
pub type Boolean = Element<bool, Extension>;
pub type Canonical = Element<String, Extension>;
pub type Code = Element<String, Extension>;
pub type Date = Element<PrecisionDate, Extension>;
pub type DateTime = Element<PrecisionDateTime, Extension>;
pub type Decimal = Element<PreciseDecimal, Extension>;
/// FHIR `string`; named to avoid shadowing [`std::string::String`].
pub type FhirString = Element<String, Extension>;
pub type Id = Element<String, Extension>;
pub type Instant = Element<PrecisionInstant, Extension>;
pub type Integer = Element<i32, Extension>;
pub type Markdown = Element<String, Extension>;
pub type PositiveInt = Element<u32, Extension>;
pub type UnsignedInt = Element<u32, Extension>;
pub type Uri = Element<String, Extension>;
pub type Url = Element<String, Extension>;
