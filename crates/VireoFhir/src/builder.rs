//! Generic builders for incremental construction of FHIR structures.
//!
//! FHIR's base hierarchy (Element → BackboneElement, Resource →
//! DomainResource) is expressed here as small capability traits rather than an
//! inheritance chain: a concrete type opts into the fields it actually
//! carries, and the two generic builders ([`ElementBuilder`],
//! [`ResourceBuilder`]) unlock the corresponding chainable operations through
//! trait-gated impl blocks. The same core is instantiated by every FHIR
//! version module, so version drift in the base shapes (such as R5's
//! intermediate DataType base) never forces a copied hierarchy.
//!
//! Builders are flat accumulators: every operation is an in-memory field
//! assignment, nothing can fail, and no validation is performed. Fields that
//! are never touched stay `None` and sequence fields are allocated lazily on
//! first use, so built values serialize without `null`s or empty arrays.
//!
//! A builder owns its target exclusively; methods consume and return the
//! builder, and [`build`](ElementBuilder::build) hands the target back by
//! value. Sharing one builder across threads is therefore ruled out by
//! ownership rather than by locking.

use crate::element::Element;

/// Capability trait for shapes carrying the two universal element fields.
///
/// Implemented by complex datatypes, backbone elements, and the generic
/// [`Element`] container itself.
pub trait ElementTarget: Default {
    /// Extension type of the owning FHIR version.
    type Extension;

    /// Mutable access to the element id.
    fn id_mut(&mut self) -> &mut Option<String>;

    /// Mutable access to the extension sequence.
    fn extension_mut(&mut self) -> &mut Option<Vec<Self::Extension>>;
}

/// Capability trait for backbone elements, which additionally carry modifier
/// extensions tracked separately from plain extensions.
pub trait BackboneTarget: ElementTarget {
    /// Mutable access to the modifier extension sequence.
    fn modifier_extension_mut(&mut self) -> &mut Option<Vec<Self::Extension>>;
}

/// Capability trait for top-level resources.
///
/// A resource id is a plain string: unlike an element id it participates in
/// referencing and versioning, and it never carries an extension shadow.
pub trait ResourceTarget: Default {
    /// Extension type of the owning FHIR version.
    type Extension;
    /// Meta type of the owning FHIR version.
    type Meta;

    /// Mutable access to the resource id.
    fn id_mut(&mut self) -> &mut Option<String>;

    /// Mutable access to the resource metadata.
    fn meta_mut(&mut self) -> &mut Option<Self::Meta>;

    /// Mutable access to the implicit-rules URI.
    fn implicit_rules_mut(&mut self) -> &mut Option<Element<String, Self::Extension>>;

    /// Mutable access to the content language code.
    fn language_mut(&mut self) -> &mut Option<Element<String, Self::Extension>>;
}

/// Capability trait for domain resources: narrative text, inline contained
/// resources, and extension support at the resource level.
pub trait DomainResourceTarget: ResourceTarget {
    /// Narrative type of the owning FHIR version.
    type Narrative;
    /// Contained resource type (the version's `Resource` enum).
    type Contained;

    /// Mutable access to the narrative.
    fn text_mut(&mut self) -> &mut Option<Self::Narrative>;

    /// Mutable access to the contained resource sequence.
    fn contained_mut(&mut self) -> &mut Option<Vec<Self::Contained>>;

    /// Mutable access to the extension sequence.
    fn extension_mut(&mut self) -> &mut Option<Vec<Self::Extension>>;

    /// Mutable access to the modifier extension sequence.
    fn modifier_extension_mut(&mut self) -> &mut Option<Vec<Self::Extension>>;
}

/// Chainable builder for element-level shapes.
///
/// The base operations ([`id`](Self::id), [`extension`](Self::extension))
/// are available for any [`ElementTarget`];
/// [`modifier_extension`](Self::modifier_extension) additionally requires a
/// [`BackboneTarget`]. Concrete datatype and backbone builders in the version
/// modules add their own field setters on top of these.
///
/// ```rust,ignore
/// let name = ElementBuilder::<HumanName>::new()
///     .family("Chalmers")
///     .given("Peter")
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ElementBuilder<T> {
    pub(crate) target: T,
}

impl<T: ElementTarget> ElementBuilder<T> {
    /// Creates a builder over a fresh, all-absent target.
    pub fn new() -> Self {
        ElementBuilder {
            target: T::default(),
        }
    }

    /// Sets (or overwrites) the element id. No format validation is applied.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        *self.target.id_mut() = Some(id.into());
        self
    }

    /// Appends one extension, creating the sequence on first use.
    pub fn extension(mut self, extension: T::Extension) -> Self {
        self.target
            .extension_mut()
            .get_or_insert_with(Vec::new)
            .push(extension);
        self
    }

    /// Returns the accumulated target. Untouched fields remain absent.
    pub fn build(self) -> T {
        self.target
    }
}

impl<T: BackboneTarget> ElementBuilder<T> {
    /// Appends one modifier extension. The sequence is tracked independently
    /// from [`extension`](Self::extension) and the two are never merged.
    pub fn modifier_extension(mut self, extension: T::Extension) -> Self {
        self.target
            .modifier_extension_mut()
            .get_or_insert_with(Vec::new)
            .push(extension);
        self
    }
}

impl<V, E> ElementBuilder<Element<V, E>> {
    /// Sets the primitive value of a generic [`Element`] target.
    pub fn value(mut self, value: V) -> Self {
        self.target.value = Some(value);
        self
    }
}

impl<V, E> ElementTarget for Element<V, E> {
    type Extension = E;

    fn id_mut(&mut self) -> &mut Option<String> {
        &mut self.id
    }

    fn extension_mut(&mut self) -> &mut Option<Vec<E>> {
        &mut self.extension
    }
}

/// Chainable builder for resource-level shapes.
///
/// Resource metadata setters are available for any [`ResourceTarget`]; the
/// domain-resource operations ([`text`](Self::text),
/// [`contained`](Self::contained), [`extension`](Self::extension),
/// [`modifier_extension`](Self::modifier_extension)) require a
/// [`DomainResourceTarget`]. Per-resource builders in the version modules add
/// clinical field setters on top.
///
/// ```rust,ignore
/// let patient = Patient::builder()
///     .id("example")
///     .active(true)
///     .name(name)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResourceBuilder<T> {
    pub(crate) target: T,
}

impl<T: ResourceTarget> ResourceBuilder<T> {
    /// Creates a builder over a fresh, all-absent target.
    pub fn new() -> Self {
        ResourceBuilder {
            target: T::default(),
        }
    }

    /// Sets (or overwrites) the logical resource id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        *self.target.id_mut() = Some(id.into());
        self
    }

    /// Sets the resource metadata (version, lastUpdated, tags, profiles).
    pub fn meta(mut self, meta: T::Meta) -> Self {
        *self.target.meta_mut() = Some(meta);
        self
    }

    /// Sets the URI of the rule set this content was created under.
    pub fn implicit_rules(mut self, uri: impl Into<Element<String, T::Extension>>) -> Self {
        *self.target.implicit_rules_mut() = Some(uri.into());
        self
    }

    /// Sets the content language.
    pub fn language(mut self, code: impl Into<Element<String, T::Extension>>) -> Self {
        *self.target.language_mut() = Some(code.into());
        self
    }

    /// Returns the accumulated resource. Untouched fields remain absent.
    pub fn build(self) -> T {
        self.target
    }
}

impl<T: DomainResourceTarget> ResourceBuilder<T> {
    /// Sets the human-readable narrative.
    pub fn text(mut self, narrative: T::Narrative) -> Self {
        *self.target.text_mut() = Some(narrative);
        self
    }

    /// Appends one fully-built contained resource.
    ///
    /// The nested resource must already be complete: call `build()` on its
    /// builder first. Contained lifecycles are never managed recursively.
    pub fn contained(mut self, resource: impl Into<T::Contained>) -> Self {
        self.target
            .contained_mut()
            .get_or_insert_with(Vec::new)
            .push(resource.into());
        self
    }

    /// Appends one extension at the resource level.
    pub fn extension(mut self, extension: T::Extension) -> Self {
        self.target
            .extension_mut()
            .get_or_insert_with(Vec::new)
            .push(extension);
        self
    }

    /// Appends one modifier extension at the resource level.
    pub fn modifier_extension(mut self, extension: T::Extension) -> Self {
        self.target
            .modifier_extension_mut()
            .get_or_insert_with(Vec::new)
            .push(extension);
        self
    }
}

/// Implements [`ElementTarget`] for types with literal `id` / `extension`
/// fields. Used by the version modules for their complex datatypes.
macro_rules! impl_element_target {
    ($extension:ty => $($ty:ty),+ $(,)?) => {$(
        impl $crate::builder::ElementTarget for $ty {
            type Extension = $extension;

            fn id_mut(&mut self) -> &mut Option<String> {
                &mut self.id
            }

            fn extension_mut(&mut self) -> &mut Option<Vec<$extension>> {
                &mut self.extension
            }
        }
    )+};
}

/// Implements [`ElementTarget`] and [`BackboneTarget`] for backbone element
/// types with literal `id` / `extension` / `modifier_extension` fields.
macro_rules! impl_backbone_target {
    ($extension:ty => $($ty:ty),+ $(,)?) => {$(
        $crate::builder::impl_element_target!($extension => $ty);

        impl $crate::builder::BackboneTarget for $ty {
            fn modifier_extension_mut(&mut self) -> &mut Option<Vec<$extension>> {
                &mut self.modifier_extension
            }
        }
    )+};
}

/// Implements [`ResourceTarget`] for types with the four resource-level
/// metadata fields.
macro_rules! impl_resource_target {
    ($extension:ty, $meta:ty => $($ty:ty),+ $(,)?) => {$(
        impl $crate::builder::ResourceTarget for $ty {
            type Extension = $extension;
            type Meta = $meta;

            fn id_mut(&mut self) -> &mut Option<String> {
                &mut self.id
            }

            fn meta_mut(&mut self) -> &mut Option<$meta> {
                &mut self.meta
            }

            fn implicit_rules_mut(
                &mut self,
            ) -> &mut Option<$crate::element::Element<String, $extension>> {
                &mut self.implicit_rules
            }

            fn language_mut(
                &mut self,
            ) -> &mut Option<$crate::element::Element<String, $extension>> {
                &mut self.language
            }
        }
    )+};
}

/// Implements [`ResourceTarget`] and [`DomainResourceTarget`] for domain
/// resource types.
macro_rules! impl_domain_resource_target {
    ($extension:ty, $meta:ty, $narrative:ty, $contained:ty => $($ty:ty),+ $(,)?) => {$(
        $crate::builder::impl_resource_target!($extension, $meta => $ty);

        impl $crate::builder::DomainResourceTarget for $ty {
            type Narrative = $narrative;
            type Contained = $contained;

            fn text_mut(&mut self) -> &mut Option<$narrative> {
                &mut self.text
            }

            fn contained_mut(&mut self) -> &mut Option<Vec<$contained>> {
                &mut self.contained
            }

            fn extension_mut(&mut self) -> &mut Option<Vec<$extension>> {
                &mut self.extension
            }

            fn modifier_extension_mut(&mut self) -> &mut Option<Vec<$extension>> {
                &mut self.modifier_extension
            }
        }
    )+};
}

pub(crate) use {
    impl_backbone_target, impl_domain_resource_target, impl_element_target, impl_resource_target,
};

#[cfg(all(test, feature = "R4"))]
mod tests {
    use super::*;
    use crate::r4::{Extension, ExtensionValue, Patient, PatientContact};

    fn ext(url: &str) -> Extension {
        Extension::builder(url)
            .value(ExtensionValue::String("x".into()))
            .build()
    }

    #[test]
    fn extensions_preserve_count_and_order() {
        let built = ElementBuilder::<Element<String, Extension>>::new()
            .extension(ext("http://example.org/a"))
            .extension(ext("http://example.org/b"))
            .extension(ext("http://example.org/c"))
            .build();

        let urls: Vec<&str> = built
            .extension
            .as_deref()
            .unwrap()
            .iter()
            .map(|e| e.url.as_str())
            .collect();
        assert_eq!(
            urls,
            [
                "http://example.org/a",
                "http://example.org/b",
                "http://example.org/c"
            ]
        );
    }

    #[test]
    fn untouched_extension_sequence_stays_absent() {
        let built = ElementBuilder::<Element<bool, Extension>>::new()
            .value(true)
            .build();
        assert!(built.extension.is_none());
    }

    #[test]
    fn backbone_tracks_extensions_and_modifiers_independently() {
        let built = ElementBuilder::<PatientContact>::new()
            .extension(ext("http://example.org/1"))
            .extension(ext("http://example.org/2"))
            .modifier_extension(ext("http://example.org/do-not-ignore"))
            .build();

        assert_eq!(built.extension.as_deref().unwrap().len(), 2);
        assert_eq!(built.modifier_extension.as_deref().unwrap().len(), 1);
        assert_eq!(
            built.modifier_extension.as_deref().unwrap()[0].url,
            "http://example.org/do-not-ignore"
        );
    }

    #[test]
    fn overwrite_setters_are_last_write_wins() {
        let element = ElementBuilder::<Element<String, Extension>>::new()
            .id("a")
            .id("b")
            .build();
        assert_eq!(element.id.as_deref(), Some("b"));

        let patient = Patient::builder().id("a").id("b").build();
        assert_eq!(patient.id.as_deref(), Some("b"));
    }

    #[test]
    fn resource_setters_accumulate_without_touching_domain_fields() {
        let patient = Patient::builder()
            .id("p1")
            .implicit_rules("http://example.org/rules")
            .language("en-US")
            .build();

        assert_eq!(patient.id.as_deref(), Some("p1"));
        assert_eq!(
            patient.implicit_rules.as_ref().unwrap().value.as_deref(),
            Some("http://example.org/rules")
        );
        assert!(patient.text.is_none());
        assert!(patient.contained.is_none());
        assert!(patient.extension.is_none());
        assert!(patient.modifier_extension.is_none());
    }
}
