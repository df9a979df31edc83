//! Error handling for cmdinfo.
//!
//! Every failure is a static authoring defect in a command document.
//! Nothing here is recoverable or retried: a single bad key aborts the
//! load of that command's entire document so the UI never sees a
//! partially validated descriptor.

use thiserror::Error;

/// Prefixes an error message with the owning command's raw name once it
/// is known. Before the raw name has been read the prefix is empty.
fn ctx(command: &str) -> String {
    if command.is_empty() {
        String::new()
    } else {
        format!("{command}: ")
    }
}

/// Main error type for command document loading.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CmdInfoError {
    #[error("{}unknown key: {key}", ctx(.command))]
    UnknownKey { command: String, key: String },

    #[error("{}missing required key: {key}", ctx(.command))]
    MissingRequiredKey { command: String, key: String },

    #[error("{}wrong value type for key: {key}", ctx(.command))]
    WrongValueType { command: String, key: String },

    #[error("{}expected an object for {what}", ctx(.command))]
    NotAnObject { command: String, what: String },

    #[error("{}only the full object may specify rawName or friendlyName", ctx(.command))]
    RawNameInPartial { command: String },

    #[error("{}{reason}", ctx(.command))]
    FriendlyEditInconsistent { command: String, reason: String },

    #[error("{}param object missing label key: {param_key}", ctx(.command))]
    MissingParamLabel { command: String, param_key: String },

    #[error(
        "{}param {param_index} default value was null but NaN is not a valid sentinel for this parameter",
        ctx(.command)
    )]
    NullDefaultNotAllowed { command: String, param_index: u8 },

    #[error("{}bad paramRemove index: {token}", ctx(.command))]
    MalformedRemoveToken { command: String, token: String },

    #[error("{}bad enumValue: {token}", ctx(.command))]
    MalformedEnumToken { command: String, token: String },

    #[error(
        "{}enum strings/values count mismatch - label: '{label}' strings: '{strings}'[{string_count}] values: '{values}'[{value_count}]",
        ctx(.command)
    )]
    EnumCountMismatch {
        command: String,
        label: String,
        strings: String,
        string_count: usize,
        values: String,
        value_count: usize,
    },
}

/// Result type alias using [`CmdInfoError`].
pub type Result<T> = std::result::Result<T, CmdInfoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_prefixed_with_command_name() {
        let err = CmdInfoError::UnknownKey {
            command: "MAV_CMD_NAV_WAYPOINT".into(),
            key: "bogus".into(),
        };
        assert_eq!(
            err.to_string(),
            "MAV_CMD_NAV_WAYPOINT: unknown key: bogus"
        );
    }

    #[test]
    fn test_empty_prefix_before_name_is_known() {
        let err = CmdInfoError::MissingRequiredKey {
            command: String::new(),
            key: "id".into(),
        };
        assert_eq!(err.to_string(), "missing required key: id");
    }

    #[test]
    fn test_enum_count_mismatch_names_both_counts() {
        let err = CmdInfoError::EnumCountMismatch {
            command: "CMD".into(),
            label: "Mode".into(),
            strings: "Low,High".into(),
            string_count: 2,
            values: "1".into(),
            value_count: 1,
        };
        let message = err.to_string();
        assert!(message.contains("'Low,High'[2]"));
        assert!(message.contains("'1'[1]"));
    }
}
