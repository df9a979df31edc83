//! Fixed key/type schema for command-level and param-level objects.
//!
//! Command documents are strictly validated: any key outside the
//! recognized set (other than the always-allowed `comment`) is an
//! error, as is a recognized key with a value of the wrong kind. The
//! validator is a pure predicate over an already-parsed object.

use serde_json::{Map, Value};

use crate::error::{CmdInfoError, Result};

/// Expected kind of a schema key's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    String,
    Bool,
    Object,
    /// Any JSON value, including `null`. Used for the param `default`
    /// field, where `null` encodes the NaN sentinel.
    Any,
}

/// One recognized key and the kind its value must have when present.
#[derive(Debug, Clone, Copy)]
pub struct KeySpec {
    pub key: &'static str,
    pub kind: ValueKind,
}

const fn spec(key: &'static str, kind: ValueKind) -> KeySpec {
    KeySpec { key, kind }
}

// Command-level keys.
pub const ID_KEY: &str = "id";
pub const RAW_NAME_KEY: &str = "rawName";
pub const FRIENDLY_NAME_KEY: &str = "friendlyName";
pub const DESCRIPTION_KEY: &str = "description";
pub const CATEGORY_KEY: &str = "category";
pub const STANDALONE_COORDINATE_KEY: &str = "standaloneCoordinate";
pub const SPECIFIES_COORDINATE_KEY: &str = "specifiesCoordinate";
pub const SPECIFIES_ALTITUDE_ONLY_KEY: &str = "specifiesAltitudeOnly";
pub const IS_LAND_COMMAND_KEY: &str = "isLandCommand";
pub const IS_TAKEOFF_COMMAND_KEY: &str = "isTakeoffCommand";
pub const IS_LOITER_COMMAND_KEY: &str = "isLoiterCommand";
pub const FRIENDLY_EDIT_KEY: &str = "friendlyEdit";
pub const PARAM_REMOVE_KEY: &str = "paramRemove";

// Param-level keys.
pub const LABEL_KEY: &str = "label";
pub const DECIMAL_PLACES_KEY: &str = "decimalPlaces";
pub const ENUM_STRINGS_KEY: &str = "enumStrings";
pub const ENUM_VALUES_KEY: &str = "enumValues";
pub const UNITS_KEY: &str = "units";
pub const NAN_UNCHANGED_KEY: &str = "nanUnchanged";
pub const MIN_KEY: &str = "min";
pub const MAX_KEY: &str = "max";
pub const DEFAULT_KEY: &str = "default";

/// Allowed in every object and ignored everywhere.
pub const COMMENT_KEY: &str = "comment";

/// Schema for the command-level object.
pub const COMMAND_SCHEMA: &[KeySpec] = &[
    spec(ID_KEY, ValueKind::Number),
    spec(RAW_NAME_KEY, ValueKind::String),
    spec(FRIENDLY_NAME_KEY, ValueKind::String),
    spec(DESCRIPTION_KEY, ValueKind::String),
    spec(CATEGORY_KEY, ValueKind::String),
    spec(STANDALONE_COORDINATE_KEY, ValueKind::Bool),
    spec(SPECIFIES_COORDINATE_KEY, ValueKind::Bool),
    spec(SPECIFIES_ALTITUDE_ONLY_KEY, ValueKind::Bool),
    spec(IS_LAND_COMMAND_KEY, ValueKind::Bool),
    spec(IS_TAKEOFF_COMMAND_KEY, ValueKind::Bool),
    spec(IS_LOITER_COMMAND_KEY, ValueKind::Bool),
    spec(FRIENDLY_EDIT_KEY, ValueKind::Bool),
    spec("param1", ValueKind::Object),
    spec("param2", ValueKind::Object),
    spec("param3", ValueKind::Object),
    spec("param4", ValueKind::Object),
    spec("param5", ValueKind::Object),
    spec("param6", ValueKind::Object),
    spec("param7", ValueKind::Object),
    spec(PARAM_REMOVE_KEY, ValueKind::String),
];

/// Schema for a nested `paramN` object.
pub const PARAM_SCHEMA: &[KeySpec] = &[
    spec(LABEL_KEY, ValueKind::String),
    spec(DECIMAL_PLACES_KEY, ValueKind::Number),
    spec(ENUM_STRINGS_KEY, ValueKind::String),
    spec(ENUM_VALUES_KEY, ValueKind::String),
    spec(UNITS_KEY, ValueKind::String),
    spec(NAN_UNCHANGED_KEY, ValueKind::Bool),
    spec(MIN_KEY, ValueKind::Number),
    spec(MAX_KEY, ValueKind::Number),
    spec(DEFAULT_KEY, ValueKind::Any),
];

/// Document key for parameter slot `index`.
///
/// # Panics
/// Panics if `index` is outside 1..=7.
#[must_use]
pub fn param_key(index: u8) -> &'static str {
    match index {
        1 => "param1",
        2 => "param2",
        3 => "param3",
        4 => "param4",
        5 => "param5",
        6 => "param6",
        7 => "param7",
        _ => unreachable!("param index out of range: {index}"),
    }
}

fn kind_matches(kind: ValueKind, value: &Value) -> bool {
    match kind {
        ValueKind::Number => value.is_number(),
        ValueKind::String => value.is_string(),
        ValueKind::Bool => value.is_boolean(),
        ValueKind::Object => value.is_object(),
        ValueKind::Any => true,
    }
}

/// Validate `object` against `schema`.
///
/// Checks, in order: no unknown keys (`comment` excepted), all
/// `required` keys present, every recognized key present has a value of
/// the expected kind. `command` is the error-message prefix, empty when
/// the command's raw name is not yet known.
pub fn validate(
    object: &Map<String, Value>,
    schema: &[KeySpec],
    required: &[&str],
    command: &str,
) -> Result<()> {
    for key in object.keys() {
        if key != COMMENT_KEY && !schema.iter().any(|entry| entry.key == key) {
            return Err(CmdInfoError::UnknownKey {
                command: command.to_string(),
                key: key.clone(),
            });
        }
    }

    for &key in required {
        if !object.contains_key(key) {
            return Err(CmdInfoError::MissingRequiredKey {
                command: command.to_string(),
                key: key.to_string(),
            });
        }
    }

    for entry in schema {
        if let Some(value) = object.get(entry.key) {
            if !kind_matches(entry.kind, value) {
                return Err(CmdInfoError::WrongValueType {
                    command: command.to_string(),
                    key: entry.key.to_string(),
                });
            }
        }
    }

    Ok(())
}
