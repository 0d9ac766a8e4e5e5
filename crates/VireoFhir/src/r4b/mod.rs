//! FHIR R4B (4.3.0) data model: primitive aliases, complex datatypes, and
//! resources, together with their builder entry points.

pub mod complex_types;
pub use complex_types::*;

pub mod primitives;
pub use primitives::*;

pub mod resources;
pub use resources::*;
