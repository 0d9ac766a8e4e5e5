#[cfg(feature = "R4")]
use crate::r4;
#[cfg(feature = "R4B")]
use crate::r4b;
#[cfg(feature = "R5")]
use crate::r5;

/// Multi-version FHIR resource container.
///
/// Wraps a resource from any enabled specification version behind one type so
/// that applications can carry resources of mixed versions while keeping the
/// version-specific types intact underneath. Each variant exists only when
/// the corresponding Cargo feature is enabled.
#[derive(Debug, Clone, PartialEq)]
pub enum FhirResource {
    /// FHIR 4.0.1 (normative) resource
    #[cfg(feature = "R4")]
    R4(Box<r4::Resource>),
    /// FHIR 4.3.0 (ballot) resource
    #[cfg(feature = "R4B")]
    R4B(Box<r4b::Resource>),
    /// FHIR 5.0.0 resource
    #[cfg(feature = "R5")]
    R5(Box<r5::Resource>),
}

impl FhirResource {
    /// Returns the FHIR specification version of the wrapped resource.
    pub fn version(&self) -> FhirVersion {
        match self {
            #[cfg(feature = "R4")]
            FhirResource::R4(_) => FhirVersion::R4,
            #[cfg(feature = "R4B")]
            FhirResource::R4B(_) => FhirVersion::R4B,
            #[cfg(feature = "R5")]
            FhirResource::R5(_) => FhirVersion::R5,
        }
    }
}

/// Enumeration of supported FHIR specification versions.
///
/// Each version is gated by a Cargo feature flag of the same name; only
/// enabled versions exist as variants. `R4` is the default feature and the
/// default version, being the current normative release.
///
/// The enum implements [`clap::ValueEnum`] so downstream command-line tools
/// can accept a version argument directly:
///
/// ```rust,ignore
/// #[derive(clap::Parser)]
/// struct Args {
///     #[arg(value_enum, default_value_t = FhirVersion::default())]
///     version: FhirVersion,
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FhirVersion {
    /// FHIR 4.0.1 (normative)
    #[cfg(feature = "R4")]
    R4,
    /// FHIR 4.3.0 (ballot)
    #[cfg(feature = "R4B")]
    R4B,
    /// FHIR 5.0.0
    #[cfg(feature = "R5")]
    R5,
}

impl FhirVersion {
    /// Returns the standard version identifier as used in FHIR documentation
    /// and package names.
    pub fn as_str(&self) -> &'static str {
        match self {
            #[cfg(feature = "R4")]
            FhirVersion::R4 => "R4",
            #[cfg(feature = "R4B")]
            FhirVersion::R4B => "R4B",
            #[cfg(feature = "R5")]
            FhirVersion::R5 => "R5",
        }
    }
}

impl std::fmt::Display for FhirVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(feature = "R4")]
impl Default for FhirVersion {
    fn default() -> Self {
        FhirVersion::R4
    }
}

impl clap::ValueEnum for FhirVersion {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            #[cfg(feature = "R4")]
            FhirVersion::R4,
            #[cfg(feature = "R4B")]
            FhirVersion::R4B,
            #[cfg(feature = "R5")]
            FhirVersion::R5,
        ]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}

#[cfg(all(test, feature = "R4"))]
mod tests {
    use super::*;

    #[test]
    fn version_detection_and_display() {
        let patient = r4::Patient::builder().id("example").build();
        let resource = FhirResource::R4(Box::new(r4::Resource::Patient(patient)));
        assert_eq!(resource.version(), FhirVersion::R4);
        assert_eq!(resource.version().to_string(), "R4");
        assert_eq!(FhirVersion::default(), FhirVersion::R4);
    }
}
