//! Field access capability implemented by every exportable record.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use uuid::Uuid;

use super::cell_value::{CellValue, FieldMap};

/// A node reached while walking a field path.
pub enum FieldNode<'a> {
    /// A nested record that exposes its own fields.
    Record(&'a dyn FieldAccess),
    /// A non-empty list of records.
    Records(Vec<&'a dyn FieldAccess>),
    /// A plain value. Map values are walked further by key.
    Value(CellValue),
}

/// Named field access over a typed record.
///
/// Implemented through [`field_record!`](crate::field_record) for the
/// domain records in this crate.
pub trait FieldAccess: Send + Sync {
    /// Returns the named field, or `None` when the record has no such field
    /// or the field is unset.
    fn try_get_field(&self, name: &str) -> Option<FieldNode<'_>>;

    /// Flattens the record into a shallow name → value map. Nested records
    /// become [`CellValue::Map`], lists become [`CellValue::List`].
    fn to_field_map(&self) -> FieldMap;
}

/// Conversion of a field into a [`CellValue`] for flattening.
pub trait ToCellValue {
    fn to_cell_value(&self) -> CellValue;
}

/// Conversion of a field into a walkable [`FieldNode`].
pub trait ToFieldNode {
    fn to_field_node(&self) -> Option<FieldNode<'_>>;
}

macro_rules! impl_value_field {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl ToCellValue for $ty {
                fn to_cell_value(&self) -> CellValue {
                    CellValue::$variant(self.clone().into())
                }
            }

            impl ToFieldNode for $ty {
                fn to_field_node(&self) -> Option<FieldNode<'_>> {
                    Some(FieldNode::Value(self.to_cell_value()))
                }
            }
        )*
    };
}

impl_value_field!(
    bool => Bool,
    i32 => Int,
    i64 => Int,
    u32 => Int,
    f64 => Float,
    Decimal => Decimal,
    String => Text,
    NaiveDate => Date,
    DateTime<Utc> => DateTime,
    Uuid => Uuid,
);

impl<T: ToCellValue> ToCellValue for Option<T> {
    fn to_cell_value(&self) -> CellValue {
        match self {
            Some(value) => value.to_cell_value(),
            None => CellValue::Null,
        }
    }
}

impl<T: ToFieldNode> ToFieldNode for Option<T> {
    fn to_field_node(&self) -> Option<FieldNode<'_>> {
        self.as_ref().and_then(ToFieldNode::to_field_node)
    }
}

impl<T: ToCellValue> ToCellValue for Vec<T> {
    fn to_cell_value(&self) -> CellValue {
        CellValue::List(self.iter().map(ToCellValue::to_cell_value).collect())
    }
}

impl<T: FieldAccess> ToFieldNode for Vec<T> {
    fn to_field_node(&self) -> Option<FieldNode<'_>> {
        if self.is_empty() {
            return None;
        }
        Some(FieldNode::Records(
            self.iter().map(|item| item as &dyn FieldAccess).collect(),
        ))
    }
}

impl<T: ToCellValue> ToCellValue for BTreeMap<String, T> {
    fn to_cell_value(&self) -> CellValue {
        CellValue::Map(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_cell_value()))
                .collect(),
        )
    }
}

// Keyed mappings are walked by key through the map value.
impl<T: ToCellValue> ToFieldNode for BTreeMap<String, T> {
    fn to_field_node(&self) -> Option<FieldNode<'_>> {
        if self.is_empty() {
            return None;
        }
        Some(FieldNode::Value(self.to_cell_value()))
    }
}

impl ToCellValue for serde_json::Value {
    fn to_cell_value(&self) -> CellValue {
        CellValue::from(self)
    }
}

impl ToFieldNode for serde_json::Value {
    fn to_field_node(&self) -> Option<FieldNode<'_>> {
        if self.is_null() {
            return None;
        }
        Some(FieldNode::Value(self.to_cell_value()))
    }
}

/// Implements [`FieldAccess`], [`ToCellValue`] and [`ToFieldNode`] for a
/// record struct by listing the fields it exposes.
///
/// ```rust,ignore
/// field_record!(Account { total, currency });
/// ```
#[macro_export]
macro_rules! field_record {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::fields::FieldAccess for $ty {
            fn try_get_field(&self, name: &str) -> Option<$crate::fields::FieldNode<'_>> {
                match name {
                    $(stringify!($field) => $crate::fields::ToFieldNode::to_field_node(&self.$field),)*
                    _ => None,
                }
            }

            fn to_field_map(&self) -> $crate::fields::FieldMap {
                let mut fields = $crate::fields::FieldMap::new();
                $(
                    fields.insert(
                        stringify!($field).to_string(),
                        $crate::fields::ToCellValue::to_cell_value(&self.$field),
                    );
                )*
                fields
            }
        }

        impl $crate::fields::ToCellValue for $ty {
            fn to_cell_value(&self) -> $crate::fields::CellValue {
                $crate::fields::CellValue::Map($crate::fields::FieldAccess::to_field_map(self))
            }
        }

        impl $crate::fields::ToFieldNode for $ty {
            fn to_field_node(&self) -> Option<$crate::fields::FieldNode<'_>> {
                Some($crate::fields::FieldNode::Record(self))
            }
        }
    };
}

/// Exposes an enum as a text field through its `Display` form.
#[macro_export]
macro_rules! text_field {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::fields::ToCellValue for $ty {
                fn to_cell_value(&self) -> $crate::fields::CellValue {
                    $crate::fields::CellValue::Text(self.to_string())
                }
            }

            impl $crate::fields::ToFieldNode for $ty {
                fn to_field_node(&self) -> Option<$crate::fields::FieldNode<'_>> {
                    Some($crate::fields::FieldNode::Value(
                        $crate::fields::ToCellValue::to_cell_value(self),
                    ))
                }
            }
        )*
    };
}
