//! Field access over typed records.
//!
//! Records expose their fields by name through [`FieldAccess`] and flatten
//! themselves into [`FieldMap`]s. The export engine never inspects record
//! types directly.

mod cell_value;
mod field_traits;

pub use cell_value::{CellValue, FieldMap};
pub use field_traits::{FieldAccess, FieldNode, ToCellValue, ToFieldNode};
