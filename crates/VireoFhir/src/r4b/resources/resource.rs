use serde::{Deserialize, Serialize};

use crate::r4b::{Basic, Observation, Patient};

/// Top-level container for any supported R4 resource type.
///
/// Serialized with the standard `resourceType` discriminator, so a contained
/// or standalone resource always carries its type on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "resourceType")]
pub enum Resource {
    Basic(Basic),
    Observation(Observation),
    Patient(Patient),
}

impl From<Basic> for Resource {
    fn from(resource: Basic) -> Self {
        Resource::Basic(resource)
    }
}

impl From<Observation> for Resource {
    fn from(resource: Observation) -> Self {
        Resource::Observation(resource)
    }
}

impl From<Patient> for Resource {
    fn from(resource: Patient) -> Self {
        Resource::Patient(resource)
    }
}
