use serde::{Deserialize, Serialize};

use crate::builder::{ElementBuilder, impl_element_target};
use crate::r4b::{Canonical, Coding, Extension, Id, Instant, Uri};

/// Metadata maintained by the infrastructure about a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    /// Version-specific identifier, changed on each update
    #[serde(rename = "versionId", skip_serializing_if = "Option::is_none")]
    pub version_id: Option<Id>,
    /// When the resource version last changed
    #[serde(rename = "lastUpdated", skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<Instant>,
    /// Where the resource comes from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Uri>,
    /// Profiles this resource claims to conform to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Vec<Canonical>>,
    /// Security labels applied to the resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<Coding>>,
    /// Tags applied to the resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<Vec<Coding>>,
}

impl_element_target!(Extension => Meta);

impl Meta {
    pub fn builder() -> ElementBuilder<Meta> {
        ElementBuilder::new()
    }
}

impl ElementBuilder<Meta> {
    pub fn version_id(mut self, version_id: impl Into<Id>) -> Self {
        self.target.version_id = Some(version_id.into());
        self
    }

    pub fn last_updated(mut self, last_updated: impl Into<Instant>) -> Self {
        self.target.last_updated = Some(last_updated.into());
        self
    }

    pub fn source(mut self, source: impl Into<Uri>) -> Self {
        self.target.source = Some(source.into());
        self
    }

    /// Appends one profile declaration.
    pub fn profile(mut self, profile: impl Into<Canonical>) -> Self {
        self.target
            .profile
            .get_or_insert_with(Vec::new)
            .push(profile.into());
        self
    }

    /// Appends one tag.
    pub fn tag(mut self, tag: Coding) -> Self {
        self.target.tag.get_or_insert_with(Vec::new).push(tag);
        self
    }
}
