//! Support for FHIR choice types (`value[x]` and friends).
//!
//! A choice field family ("exactly one of N typed fields may be set") is
//! represented as one enum per family, with one variant per permitted type.
//! On the wire each family occupies a group of sibling fields whose names are
//! the fixed prefix plus a type suffix (`valueQuantity`, `valueString`, ...);
//! the builder setter derived through [`ChoiceField`] writes exactly the
//! field named by the supplied variant and clears every sibling, so at most
//! one member of the family is ever populated.

/// Discriminant information for a choice-type enum.
///
/// The wire field name is computed exactly as the FHIR specification does:
/// the fixed family prefix concatenated with the type suffix of the variant
/// currently held.
pub trait ChoiceElement {
    /// The fixed field-name prefix of this family (e.g. `"value"`).
    fn prefix() -> &'static str;

    /// The type suffix of the variant currently held (e.g. `"Quantity"`).
    fn suffix(&self) -> &'static str;

    /// The full wire field name, prefix + suffix (e.g. `"valueQuantity"`).
    fn field_name(&self) -> String {
        format!("{}{}", Self::prefix(), self.suffix())
    }
}

/// Assignment of a choice value into its owning shape.
///
/// `assign` clears every sibling field of the family before setting the one
/// selected by the variant, enforcing the at-most-one invariant on every
/// write rather than trusting caller discipline.
pub trait ChoiceField<T>: ChoiceElement {
    /// Writes this value into `target`, clearing all sibling choice fields.
    fn assign(self, target: &mut T);
}

/// Implements [`ChoiceElement`] and [`ChoiceField`] for a choice enum whose
/// owning struct stores one `Option` field per variant.
macro_rules! impl_choice_field {
    (
        $choice:ty, $prefix:literal, $target:ty {
            $($variant:ident / $suffix:literal => $field:ident),+ $(,)?
        }
    ) => {
        impl $crate::choice::ChoiceElement for $choice {
            fn prefix() -> &'static str {
                $prefix
            }

            fn suffix(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => $suffix,)+
                }
            }
        }

        impl $crate::choice::ChoiceField<$target> for $choice {
            fn assign(self, target: &mut $target) {
                $(target.$field = None;)+
                match self {
                    $(Self::$variant(value) => target.$field = Some(value),)+
                }
            }
        }
    };
}

pub(crate) use impl_choice_field;
