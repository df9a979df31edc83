//! End-to-end scenarios: base loads, override layering, and the
//! fail-closed validation rules, driven through the public API only.

use cmdinfo::{CmdInfoError, LoadMode, load};
use serde_json::json;

#[test]
fn base_document_with_name_only_gets_all_defaults() {
    let descriptor = load(
        &json!({ "id": 16, "rawName": "MAV_CMD_NAV_WAYPOINT" }),
        LoadMode::Full,
    )
    .unwrap();

    assert_eq!(descriptor.command_id, 16);
    assert_eq!(descriptor.category(), "Advanced");
    assert_eq!(descriptor.friendly_name(), "MAV_CMD_NAV_WAYPOINT");
    assert_eq!(descriptor.description(), "");
    assert!(!descriptor.friendly_edit());
    assert!(!descriptor.is_standalone_coordinate());
    assert!(!descriptor.specifies_coordinate());
    assert!(!descriptor.specifies_altitude_only());
    assert!(!descriptor.is_land_command());
    assert!(!descriptor.is_takeoff_command());
    assert!(!descriptor.is_loiter_command());
}

#[test]
fn bare_param_gets_slot_defaults_and_forces_friendly_edit() {
    let descriptor = load(
        &json!({
            "id": 16,
            "rawName": "MAV_CMD_NAV_WAYPOINT",
            "param1": { "label": "Hold Time" }
        }),
        LoadMode::Full,
    )
    .unwrap();

    assert!(descriptor.friendly_edit());
    let (param, visible) = descriptor.param_info(1);
    let param = param.unwrap();
    assert!(visible);
    assert_eq!(param.label, "Hold Time");
    assert_eq!(param.default_value, 0.0);
    assert!(param.decimal_places.is_none());
    assert!(!param.nan_unchanged);
    assert!(!param.has_enumeration());
}

#[test]
fn friendly_edit_without_description_is_rejected() {
    let err = load(
        &json!({
            "id": 16,
            "rawName": "MAV_CMD_NAV_WAYPOINT",
            "friendlyEdit": true
        }),
        LoadMode::Full,
    )
    .unwrap_err();

    assert!(matches!(err, CmdInfoError::FriendlyEditInconsistent { .. }));
    assert!(err.to_string().contains("description"));
}

#[test]
fn friendly_edit_with_unchanged_name_is_rejected() {
    let err = load(
        &json!({
            "id": 16,
            "rawName": "MAV_CMD_NAV_WAYPOINT",
            "friendlyEdit": true,
            "description": "Navigate to a waypoint."
        }),
        LoadMode::Full,
    )
    .unwrap_err();

    assert!(matches!(err, CmdInfoError::FriendlyEditInconsistent { .. }));
    assert!(err.to_string().contains("friendlyName"));
}

#[test]
fn enum_count_mismatch_names_both_counts() {
    let err = load(
        &json!({
            "id": 16,
            "rawName": "MAV_CMD_NAV_WAYPOINT",
            "param1": {
                "label": "Mode",
                "enumStrings": "Low,High",
                "enumValues": "1"
            }
        }),
        LoadMode::Full,
    )
    .unwrap_err();

    match err {
        CmdInfoError::EnumCountMismatch {
            label,
            string_count,
            value_count,
            ..
        } => {
            assert_eq!(label, "Mode");
            assert_eq!(string_count, 2);
            assert_eq!(value_count, 1);
        }
        other => panic!("expected EnumCountMismatch, got {other:?}"),
    }
}

#[test]
fn enum_pair_loads_index_aligned() {
    let descriptor = load(
        &json!({
            "id": 16,
            "rawName": "MAV_CMD_NAV_WAYPOINT",
            "param2": {
                "label": "Mode",
                "enumStrings": "Low,High",
                "enumValues": "1,2"
            }
        }),
        LoadMode::Full,
    )
    .unwrap();

    let (param, _) = descriptor.param_info(2);
    let pairs: Vec<_> = param.unwrap().enum_pairs().collect();
    assert_eq!(pairs, vec![("Low", 1.0), ("High", 2.0)]);
}

#[test]
fn unknown_key_rejected_in_both_modes() {
    for mode in [LoadMode::Full, LoadMode::Partial] {
        let err = load(
            &json!({ "id": 16, "rawName": "CMD", "bogusKey": true }),
            mode,
        )
        .unwrap_err();
        assert_eq!(
            err,
            CmdInfoError::UnknownKey {
                command: String::new(),
                key: "bogusKey".into()
            }
        );
    }
}

#[test]
fn override_layering_hides_then_reveals_params() {
    let mut base = load(
        &json!({
            "id": 16,
            "rawName": "MAV_CMD_NAV_WAYPOINT",
            "param3": { "label": "Radius" },
            "param4": { "label": "Yaw" }
        }),
        LoadMode::Full,
    )
    .unwrap();

    let removal = load(&json!({ "id": 16, "paramRemove": "3,4" }), LoadMode::Partial).unwrap();
    base.apply_override(removal);

    let (_, visible3) = base.param_info(3);
    let (_, visible4) = base.param_info(4);
    assert!(!visible3);
    assert!(!visible4);

    let reveal = load(
        &json!({ "id": 16, "param3": { "label": "X" } }),
        LoadMode::Partial,
    )
    .unwrap();
    base.apply_override(reveal);

    let (param3, visible3) = base.param_info(3);
    let (param4, visible4) = base.param_info(4);
    assert!(visible3);
    assert_eq!(param3.unwrap().label, "X");
    assert!(!visible4);
    assert!(param4.is_some());
}

#[test]
fn override_replaces_facts_whole_value() {
    let mut base = load(
        &json!({
            "id": 21,
            "rawName": "MAV_CMD_NAV_LAND",
            "category": "Basic",
            "isLandCommand": true
        }),
        LoadMode::Full,
    )
    .unwrap();

    let fragment = load(
        &json!({ "id": 21, "category": "VTOL", "specifiesCoordinate": true }),
        LoadMode::Partial,
    )
    .unwrap();
    base.apply_override(fragment);

    assert_eq!(base.category(), "VTOL");
    assert!(base.specifies_coordinate());
    assert!(base.is_land_command());
    assert_eq!(base.raw_name(), "MAV_CMD_NAV_LAND");
    assert_eq!(base.command_id, 21);
}

#[test]
fn nan_sentinel_survives_layering() {
    let mut base = load(
        &json!({
            "id": 115,
            "rawName": "MAV_CMD_CONDITION_YAW",
            "param1": { "label": "Heading", "nanUnchanged": true }
        }),
        LoadMode::Full,
    )
    .unwrap();

    let fragment = load(
        &json!({
            "id": 115,
            "param1": { "label": "Heading", "nanUnchanged": true, "default": null }
        }),
        LoadMode::Partial,
    )
    .unwrap();
    base.apply_override(fragment);

    let (param, visible) = base.param_info(1);
    assert!(visible);
    assert!(param.unwrap().default_is_unchanged());
}
