//! Document loading: strict schema validation, defaulting for base
//! definitions, and construction of command descriptors.
//!
//! A command dictionary loads one full (base) document per command,
//! then zero or more partial (override) documents merged in order via
//! [`CommandDescriptor::apply_override`]. Any validation failure aborts
//! the whole document: the UI must never see a partially populated
//! descriptor for a command that edits real mission parameters.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::command::{ADVANCED_CATEGORY, CommandDescriptor};
use crate::error::{CmdInfoError, Result};
use crate::list::split_translated_list;
use crate::param::ParamDescriptor;
use crate::schema;

/// Which kind of document is being loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadMode {
    /// Base definition: all defaultable facts are filled in and the
    /// friendly-edit consistency rule is enforced.
    Full,
    /// Override fragment: only explicitly present facts are captured,
    /// for later merging onto a base.
    Partial,
}

/// Load one command document into a [`CommandDescriptor`].
///
/// The document must be an object satisfying the command-level schema.
/// In [`LoadMode::Full`] the result has every fact populated; in
/// [`LoadMode::Partial`] only the facts the document provides are set.
pub fn load(document: &Value, mode: LoadMode) -> Result<CommandDescriptor> {
    let object = document.as_object().ok_or_else(|| CmdInfoError::NotAnObject {
        command: String::new(),
        what: "command document".to_string(),
    })?;

    let required: &[&str] = match mode {
        LoadMode::Full => &[schema::ID_KEY, schema::RAW_NAME_KEY],
        LoadMode::Partial => &[schema::ID_KEY],
    };
    schema::validate(object, schema::COMMAND_SCHEMA, required, "")?;

    // Name facts are defined once, at the base, never re-specified.
    if mode == LoadMode::Partial
        && (object.contains_key(schema::RAW_NAME_KEY)
            || object.contains_key(schema::FRIENDLY_NAME_KEY))
    {
        return Err(CmdInfoError::RawNameInPartial {
            command: String::new(),
        });
    }

    let mut descriptor = CommandDescriptor::default();

    // Schema pass guarantees id is a number.
    descriptor.command_id = object
        .get(schema::ID_KEY)
        .and_then(Value::as_f64)
        .unwrap_or_default() as u32;

    descriptor.info.category = string_fact(object, schema::CATEGORY_KEY);
    descriptor.info.raw_name = string_fact(object, schema::RAW_NAME_KEY);
    descriptor.info.friendly_name = string_fact(object, schema::FRIENDLY_NAME_KEY);
    descriptor.info.description = string_fact(object, schema::DESCRIPTION_KEY);
    descriptor.info.standalone_coordinate = bool_fact(object, schema::STANDALONE_COORDINATE_KEY);
    descriptor.info.specifies_coordinate = bool_fact(object, schema::SPECIFIES_COORDINATE_KEY);
    descriptor.info.specifies_altitude_only =
        bool_fact(object, schema::SPECIFIES_ALTITUDE_ONLY_KEY);
    descriptor.info.is_land_command = bool_fact(object, schema::IS_LAND_COMMAND_KEY);
    descriptor.info.is_takeoff_command = bool_fact(object, schema::IS_TAKEOFF_COMMAND_KEY);
    descriptor.info.is_loiter_command = bool_fact(object, schema::IS_LOITER_COMMAND_KEY);
    descriptor.info.friendly_edit = bool_fact(object, schema::FRIENDLY_EDIT_KEY);

    // All later errors carry the command's raw name when it is known.
    let command = descriptor.info.raw_name.clone().unwrap_or_default();

    if mode == LoadMode::Full {
        // The base of the hierarchy must hold valid values for every
        // fact, so fill the ones still absent.
        let explicit_description = descriptor.info.description.is_some();

        let info = &mut descriptor.info;
        if info.category.is_none() {
            info.category = Some(ADVANCED_CATEGORY.to_string());
        }
        if info.friendly_name.is_none() {
            info.friendly_name = info.raw_name.clone();
        }
        if info.description.is_none() {
            info.description = Some(String::new());
        }
        if info.standalone_coordinate.is_none() {
            info.standalone_coordinate = Some(false);
        }
        if info.specifies_coordinate.is_none() {
            info.specifies_coordinate = Some(false);
        }
        if info.specifies_altitude_only.is_none() {
            info.specifies_altitude_only = Some(false);
        }
        if info.is_land_command.is_none() {
            info.is_land_command = Some(false);
        }
        if info.is_takeoff_command.is_none() {
            info.is_takeoff_command = Some(false);
        }
        if info.is_loiter_command.is_none() {
            info.is_loiter_command = Some(false);
        }
        if info.friendly_edit.is_none() {
            info.friendly_edit = Some(false);
        }

        // A human-curated form must actually supply a human-facing
        // name and description distinct from the raw identifiers.
        if descriptor.info.friendly_edit == Some(true) {
            if !explicit_description {
                return Err(CmdInfoError::FriendlyEditInconsistent {
                    command,
                    reason: "missing description for friendly edit".to_string(),
                });
            }
            if descriptor.info.friendly_name == descriptor.info.raw_name {
                return Err(CmdInfoError::FriendlyEditInconsistent {
                    command,
                    reason: "friendlyName must differ from rawName for friendly edit"
                        .to_string(),
                });
            }
        }
    }

    if let Some(raw) = object.get(schema::PARAM_REMOVE_KEY).and_then(Value::as_str) {
        for token in raw.split(',') {
            let index: u8 =
                token
                    .trim()
                    .parse()
                    .map_err(|_| CmdInfoError::MalformedRemoveToken {
                        command: command.clone(),
                        token: token.to_string(),
                    })?;
            descriptor.param_remove_list.insert(index);
        }
    }

    debug!(
        command = command.as_str(),
        id = descriptor.command_id,
        category = descriptor.category(),
        friendly_edit = descriptor.friendly_edit(),
        removed = descriptor.param_remove_list.len(),
        "loaded command facts"
    );

    for index in 1..=7u8 {
        let key = schema::param_key(index);
        let Some(value) = object.get(key) else {
            continue;
        };
        let param_object = value.as_object().ok_or_else(|| CmdInfoError::NotAnObject {
            command: command.clone(),
            what: key.to_string(),
        })?;

        schema::validate(param_object, schema::PARAM_SCHEMA, &[], &command)?;

        // Presence of any parameter implies a friendly-editable form,
        // in both modes, even over an explicit false. The consistency
        // check above intentionally ran before this point.
        descriptor.info.friendly_edit = Some(true);

        let Some(label) = param_object.get(schema::LABEL_KEY).and_then(Value::as_str) else {
            return Err(CmdInfoError::MissingParamLabel {
                command,
                param_key: key.to_string(),
            });
        };

        let mut param = ParamDescriptor::new(index, label);

        param.decimal_places = param_object
            .get(schema::DECIMAL_PLACES_KEY)
            .and_then(Value::as_u64)
            .and_then(|places| u32::try_from(places).ok());
        param.units = param_object
            .get(schema::UNITS_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        param.nan_unchanged = param_object
            .get(schema::NAN_UNCHANGED_KEY)
            .and_then(Value::as_bool)
            .unwrap_or(false);

        // Bounds were defaulted at construction; only narrow them when
        // the document provides a numeric value.
        if let Some(min) = param_object.get(schema::MIN_KEY).and_then(Value::as_f64) {
            param.min = min;
        }
        if let Some(max) = param_object.get(schema::MAX_KEY).and_then(Value::as_f64) {
            param.max = max;
        }

        param.default_value = match param_object.get(schema::DEFAULT_KEY) {
            Some(value) if param.nan_unchanged => nan_aware_f64(value),
            Some(Value::Null) => {
                return Err(CmdInfoError::NullDefaultNotAllowed {
                    command,
                    param_index: index,
                });
            }
            Some(value) => value.as_f64().unwrap_or(0.0),
            None if param.nan_unchanged => f64::NAN,
            None => 0.0,
        };

        let raw_strings = param_object
            .get(schema::ENUM_STRINGS_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default();
        let raw_values = param_object
            .get(schema::ENUM_VALUES_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default();

        param.enum_strings = split_translated_list(raw_strings);
        for token in split_translated_list(raw_values) {
            let value: f64 =
                token
                    .trim()
                    .parse()
                    .map_err(|_| CmdInfoError::MalformedEnumToken {
                        command: command.clone(),
                        token: token.clone(),
                    })?;
            param.enum_values.push(value);
        }

        if param.enum_values.len() != param.enum_strings.len() {
            return Err(CmdInfoError::EnumCountMismatch {
                command,
                label: param.label,
                strings: raw_strings.to_string(),
                string_count: param.enum_strings.len(),
                values: raw_values.to_string(),
                value_count: param.enum_values.len(),
            });
        }

        debug!(
            command = command.as_str(),
            index,
            label = param.label.as_str(),
            default = param.default_value,
            nan_unchanged = param.nan_unchanged,
            enums = param.enum_values.len(),
            "loaded param descriptor"
        );

        descriptor.params.insert(index, param);
    }

    Ok(descriptor)
}

/// Decode a default value for a parameter whose NaN sentinel is valid:
/// JSON `null` encodes the sentinel, anything non-numeric decodes to it.
fn nan_aware_f64(value: &Value) -> f64 {
    value.as_f64().unwrap_or(f64::NAN)
}

fn string_fact(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_string)
}

fn bool_fact(object: &Map<String, Value>, key: &str) -> Option<bool> {
    object.get(key).and_then(Value::as_bool)
}
