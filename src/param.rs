//! Parameter slot metadata.

use crate::bounds;

/// Metadata for one editable parameter slot (index 1..=7) of a command.
///
/// Built once by the loader and owned by its [`crate::CommandDescriptor`].
/// When an override supplies a descriptor for the same slot, the whole
/// instance is replaced during merge, never merged field by field.
#[derive(Debug, Clone)]
pub struct ParamDescriptor {
    /// Display string for the parameter. Required in the document.
    pub label: String,
    /// Slot index, 1..=7, fixed at creation.
    pub param_index: u8,
    /// Decimal places to show when editing. `None` means unknown.
    pub decimal_places: Option<u32>,
    /// Units string, possibly empty.
    pub units: String,
    /// When true, NaN is a valid sentinel value meaning "leave the
    /// field as currently set" rather than an invalid number.
    pub nan_unchanged: bool,
    /// Lower bound; the type-wide default unless the document narrows it.
    pub min: f64,
    /// Upper bound; the type-wide default unless the document narrows it.
    pub max: f64,
    /// Default value; the NaN sentinel when `nan_unchanged` and no
    /// explicit default was given.
    pub default_value: f64,
    /// Display labels for a closed value set; index-aligned with
    /// `enum_values`. Both empty means free numeric entry.
    pub enum_strings: Vec<String>,
    /// Numeric values for a closed value set; index-aligned with
    /// `enum_strings`. Equal length is enforced at load time.
    pub enum_values: Vec<f64>,
}

impl ParamDescriptor {
    /// Create a slot descriptor with type-wide bounds and no default.
    #[must_use]
    pub fn new(param_index: u8, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            param_index,
            decimal_places: None,
            units: String::new(),
            nan_unchanged: false,
            min: bounds::DOUBLE_MIN,
            max: bounds::DOUBLE_MAX,
            default_value: 0.0,
            enum_strings: Vec::new(),
            enum_values: Vec::new(),
        }
    }

    /// Whether this parameter offers a closed set of selectable values.
    #[must_use]
    pub fn has_enumeration(&self) -> bool {
        !self.enum_values.is_empty()
    }

    /// Index-aligned (display label, numeric value) pairs.
    pub fn enum_pairs(&self) -> impl Iterator<Item = (&str, f64)> {
        self.enum_strings
            .iter()
            .map(String::as_str)
            .zip(self.enum_values.iter().copied())
    }

    /// Whether the default is the NaN "leave unchanged" sentinel.
    #[must_use]
    pub fn default_is_unchanged(&self) -> bool {
        self.nan_unchanged && self.default_value.is_nan()
    }
}

// Bitwise comparison for the floating fields: the NaN sentinel must
// compare equal to itself so repeated identical merges stay idempotent.
impl PartialEq for ParamDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
            && self.param_index == other.param_index
            && self.decimal_places == other.decimal_places
            && self.units == other.units
            && self.nan_unchanged == other.nan_unchanged
            && self.min.to_bits() == other.min.to_bits()
            && self.max.to_bits() == other.max.to_bits()
            && self.default_value.to_bits() == other.default_value.to_bits()
            && self.enum_strings == other.enum_strings
            && self.enum_values.len() == other.enum_values.len()
            && self
                .enum_values
                .iter()
                .zip(&other.enum_values)
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}
