use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Generic container for FHIR primitive elements.
///
/// Every FHIR primitive can carry an element `id` and a list of extensions in
/// addition to its value. This container holds all three, so a primitive field
/// and its "underscore shadow" live together in memory; splitting them into
/// the `field` / `_field` wire pair is the serializer's concern, not this
/// type's.
///
/// # Type Parameters
///
/// * `V` - The value type (e.g. `String`, `bool`, [`crate::PreciseDecimal`])
/// * `E` - The extension type of the owning FHIR version
///
/// # Serialization
///
/// - Only `value` present: serializes as the bare primitive.
/// - `id` or `extension` present: serializes as an object.
/// - Nothing present: serializes as `null`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Element<V, E> {
    /// Identifier for inter-element referencing within one resource instance
    pub id: Option<String>,
    /// Extensions attached to this element
    pub extension: Option<Vec<E>>,
    /// The primitive value itself
    pub value: Option<V>,
}

// Manual impl so that `V: Default` / `E: Default` are not required.
impl<V, E> Default for Element<V, E> {
    fn default() -> Self {
        Element {
            id: None,
            extension: None,
            value: None,
        }
    }
}

impl<V, E> Element<V, E> {
    /// Returns `true` if no value, id, or extensions are present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.id.is_none() && self.extension.is_none()
    }
}

impl<V, E> From<V> for Element<V, E> {
    fn from(value: V) -> Self {
        Element {
            id: None,
            extension: None,
            value: Some(value),
        }
    }
}

impl<E> From<&str> for Element<String, E> {
    fn from(value: &str) -> Self {
        Element {
            id: None,
            extension: None,
            value: Some(value.to_string()),
        }
    }
}

/// Visitor for the object form of an element (`id` / `extension` / `value`).
struct ElementObjectVisitor<V, E>(PhantomData<(V, E)>);

impl<'de, V, E> Visitor<'de> for ElementObjectVisitor<V, E>
where
    V: Deserialize<'de>,
    E: Deserialize<'de>,
{
    type Value = Element<V, E>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("an Element object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut id: Option<String> = None;
        let mut extension: Option<Vec<E>> = None;
        let mut value: Option<V> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "id" => {
                    if id.is_some() {
                        return Err(de::Error::duplicate_field("id"));
                    }
                    id = Some(map.next_value()?);
                }
                "extension" => {
                    if extension.is_some() {
                        return Err(de::Error::duplicate_field("extension"));
                    }
                    extension = Some(map.next_value()?);
                }
                "value" => {
                    if value.is_some() {
                        return Err(de::Error::duplicate_field("value"));
                    }
                    value = Some(map.next_value()?);
                }
                // Unknown fields are skipped, not rejected
                _ => {
                    let _ = map.next_value::<de::IgnoredAny>()?;
                }
            }
        }

        Ok(Element {
            id,
            extension,
            value,
        })
    }
}

impl<'de, V, E> Deserialize<'de> for Element<V, E>
where
    V: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // An element can arrive as a bare primitive, an object, or null.
        struct AnyValueVisitor<V, E>(PhantomData<(V, E)>);

        impl<'de, V, E> Visitor<'de> for AnyValueVisitor<V, E>
        where
            V: Deserialize<'de>,
            E: Deserialize<'de>,
        {
            type Value = Element<V, E>;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter
                    .write_str("a primitive value (string, number, boolean), an object, or null")
            }

            fn visit_bool<Er>(self, v: bool) -> Result<Self::Value, Er>
            where
                Er: de::Error,
            {
                V::deserialize(de::value::BoolDeserializer::new(v)).map(Element::from_value)
            }

            fn visit_i64<Er>(self, v: i64) -> Result<Self::Value, Er>
            where
                Er: de::Error,
            {
                V::deserialize(de::value::I64Deserializer::new(v)).map(Element::from_value)
            }

            fn visit_u64<Er>(self, v: u64) -> Result<Self::Value, Er>
            where
                Er: de::Error,
            {
                V::deserialize(de::value::U64Deserializer::new(v)).map(Element::from_value)
            }

            fn visit_f64<Er>(self, v: f64) -> Result<Self::Value, Er>
            where
                Er: de::Error,
            {
                V::deserialize(de::value::F64Deserializer::new(v)).map(Element::from_value)
            }

            fn visit_str<Er>(self, v: &str) -> Result<Self::Value, Er>
            where
                Er: de::Error,
            {
                V::deserialize(de::value::StrDeserializer::new(v)).map(Element::from_value)
            }

            fn visit_string<Er>(self, v: String) -> Result<Self::Value, Er>
            where
                Er: de::Error,
            {
                V::deserialize(de::value::StringDeserializer::new(v)).map(Element::from_value)
            }

            fn visit_borrowed_str<Er>(self, v: &'de str) -> Result<Self::Value, Er>
            where
                Er: de::Error,
            {
                V::deserialize(de::value::BorrowedStrDeserializer::new(v)).map(Element::from_value)
            }

            fn visit_none<Er>(self) -> Result<Self::Value, Er>
            where
                Er: de::Error,
            {
                Ok(Element::default())
            }

            fn visit_unit<Er>(self) -> Result<Self::Value, Er>
            where
                Er: de::Error,
            {
                Ok(Element::default())
            }

            fn visit_some<De>(self, deserializer: De) -> Result<Self::Value, De::Error>
            where
                De: Deserializer<'de>,
            {
                deserializer.deserialize_any(self)
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let map_deserializer = de::value::MapAccessDeserializer::new(map);
                map_deserializer.deserialize_map(ElementObjectVisitor(PhantomData))
            }

            fn visit_seq<A>(self, _seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                Err(de::Error::invalid_type(de::Unexpected::Seq, &self))
            }
        }

        deserializer.deserialize_any(AnyValueVisitor(PhantomData))
    }
}

impl<V, E> Element<V, E> {
    #[inline]
    fn from_value(value: V) -> Self {
        Element {
            id: None,
            extension: None,
            value: Some(value),
        }
    }
}

impl<V, E> Serialize for Element<V, E>
where
    V: Serialize,
    E: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Unadorned elements collapse to the bare primitive.
        if self.id.is_none() && self.extension.is_none() {
            match &self.value {
                Some(val) => val.serialize(serializer),
                None => serializer.serialize_none(),
            }
        } else {
            let mut len = 0;
            if self.id.is_some() {
                len += 1;
            }
            if self.extension.is_some() {
                len += 1;
            }
            if self.value.is_some() {
                len += 1;
            }

            let mut state = serializer.serialize_struct("Element", len)?;
            if let Some(id) = &self.id {
                state.serialize_field("id", id)?;
            }
            if let Some(extension) = &self.extension {
                state.serialize_field("extension", extension)?;
            }
            if let Some(value) = &self.value {
                state.serialize_field("value", value)?;
            }
            state.end()
        }
    }
}

#[cfg(all(test, feature = "R4"))]
mod tests {
    use super::*;
    use crate::r4::Extension;

    #[test]
    fn bare_value_round_trip() {
        let element: Element<String, Extension> = "active".into();
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json, serde_json::json!("active"));

        let back: Element<String, Extension> = serde_json::from_value(json).unwrap();
        assert_eq!(back, element);
    }

    #[test]
    fn adorned_element_serializes_as_object() {
        let element = Element::<bool, Extension> {
            id: Some("flag-1".to_string()),
            extension: None,
            value: Some(true),
        };
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "flag-1", "value": true }));
    }

    #[test]
    fn empty_element_is_empty() {
        let element = Element::<String, Extension>::default();
        assert!(element.is_empty());
        assert!(element.id.is_none());
        assert!(element.extension.is_none());
    }

    #[test]
    fn object_form_deserializes_with_unknown_fields_ignored() {
        let json = serde_json::json!({
            "id": "e1",
            "value": 42,
            "unexpected": { "nested": true }
        });
        let element: Element<i32, Extension> = serde_json::from_value(json).unwrap();
        assert_eq!(element.id.as_deref(), Some("e1"));
        assert_eq!(element.value, Some(42));
        assert!(element.extension.is_none());
    }
}
