//! Command descriptor aggregate: UI-facing facts, parameter slots, the
//! removal list, override merging, and the visibility query.

use std::collections::{BTreeMap, BTreeSet};

use crate::param::ParamDescriptor;

/// Category assigned to a command whose document does not name one.
pub const ADVANCED_CATEGORY: &str = "Advanced";

/// UI-facing facts for one command, one field per fact.
///
/// Each fact is tri-state through `Option`: a *partial* descriptor holds
/// `Some` only for facts its source document explicitly provided, which
/// is exactly what the override merge needs to know; a *full* descriptor
/// holds `Some` for every fact after the defaulting pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandInfo {
    pub category: Option<String>,
    pub raw_name: Option<String>,
    pub friendly_name: Option<String>,
    pub description: Option<String>,
    pub standalone_coordinate: Option<bool>,
    pub specifies_coordinate: Option<bool>,
    pub specifies_altitude_only: Option<bool>,
    pub is_land_command: Option<bool>,
    pub is_takeoff_command: Option<bool>,
    pub is_loiter_command: Option<bool>,
    pub friendly_edit: Option<bool>,
}

impl CommandInfo {
    /// Overwrite every fact the source explicitly provides. Whole-value
    /// replace per fact, never a partial merge of a single fact.
    fn overlay(&mut self, source: Self) {
        if source.category.is_some() {
            self.category = source.category;
        }
        if source.raw_name.is_some() {
            self.raw_name = source.raw_name;
        }
        if source.friendly_name.is_some() {
            self.friendly_name = source.friendly_name;
        }
        if source.description.is_some() {
            self.description = source.description;
        }
        if source.standalone_coordinate.is_some() {
            self.standalone_coordinate = source.standalone_coordinate;
        }
        if source.specifies_coordinate.is_some() {
            self.specifies_coordinate = source.specifies_coordinate;
        }
        if source.specifies_altitude_only.is_some() {
            self.specifies_altitude_only = source.specifies_altitude_only;
        }
        if source.is_land_command.is_some() {
            self.is_land_command = source.is_land_command;
        }
        if source.is_takeoff_command.is_some() {
            self.is_takeoff_command = source.is_takeoff_command;
        }
        if source.is_loiter_command.is_some() {
            self.is_loiter_command = source.is_loiter_command;
        }
        if source.friendly_edit.is_some() {
            self.friendly_edit = source.friendly_edit;
        }
    }
}

/// Effective UI metadata for one command.
///
/// Lifecycle: built by [`crate::loader::load`] in one pass, optionally
/// mutated in place by [`Self::apply_override`] for each override
/// fragment, then treated as immutable and shared by readers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandDescriptor {
    /// Stable command id. Meaningful from a full (base) load; a partial
    /// fragment carries it only so the dictionary can find its target.
    pub command_id: u32,
    /// The command's facts.
    pub info: CommandInfo,
    /// Slot indices hidden for this command even when a descriptor
    /// exists for them.
    pub param_remove_list: BTreeSet<u8>,
    /// Sparse map from slot index (1..=7) to its descriptor.
    pub params: BTreeMap<u8, ParamDescriptor>,
}

impl CommandDescriptor {
    /// Command category, defaulting to [`ADVANCED_CATEGORY`].
    #[must_use]
    pub fn category(&self) -> &str {
        self.info.category.as_deref().unwrap_or(ADVANCED_CATEGORY)
    }

    /// Raw identifier name, empty until a base document supplies it.
    #[must_use]
    pub fn raw_name(&self) -> &str {
        self.info.raw_name.as_deref().unwrap_or_default()
    }

    /// Human-facing name, empty when not provided.
    #[must_use]
    pub fn friendly_name(&self) -> &str {
        self.info.friendly_name.as_deref().unwrap_or_default()
    }

    /// Description text, empty when not provided.
    #[must_use]
    pub fn description(&self) -> &str {
        self.info.description.as_deref().unwrap_or_default()
    }

    /// Whether the command is edited through a human-curated form.
    #[must_use]
    pub fn friendly_edit(&self) -> bool {
        self.info.friendly_edit.unwrap_or(false)
    }

    #[must_use]
    pub fn is_standalone_coordinate(&self) -> bool {
        self.info.standalone_coordinate.unwrap_or(false)
    }

    #[must_use]
    pub fn specifies_coordinate(&self) -> bool {
        self.info.specifies_coordinate.unwrap_or(false)
    }

    #[must_use]
    pub fn specifies_altitude_only(&self) -> bool {
        self.info.specifies_altitude_only.unwrap_or(false)
    }

    #[must_use]
    pub fn is_land_command(&self) -> bool {
        self.info.is_land_command.unwrap_or(false)
    }

    #[must_use]
    pub fn is_takeoff_command(&self) -> bool {
        self.info.is_takeoff_command.unwrap_or(false)
    }

    #[must_use]
    pub fn is_loiter_command(&self) -> bool {
        self.info.is_loiter_command.unwrap_or(false)
    }

    /// Merge a partial override fragment onto this descriptor.
    ///
    /// Consumes the fragment: ownership of every overriding
    /// [`ParamDescriptor`] transfers to this descriptor, so no slot is
    /// ever aliased by two owners. `command_id` is never copied from
    /// the source. Supplying an override parameter for a slot makes a
    /// previously removed slot visible again; the override's own
    /// removal list only ever adds.
    pub fn apply_override(&mut self, source: Self) {
        self.info.overlay(source.info);

        self.param_remove_list.extend(source.param_remove_list);

        for (index, param) in source.params {
            self.param_remove_list.remove(&index);
            self.params.insert(index, param);
        }
    }

    /// Look up the descriptor for a slot together with its visibility.
    ///
    /// `visible` is true iff a descriptor exists for `index` and the
    /// index is not in the removal list. This is the only read path a
    /// consumer needs to decide whether to render a control.
    #[must_use]
    pub fn param_info(&self, index: u8) -> (Option<&ParamDescriptor>, bool) {
        let param = self.params.get(&index);
        let visible = param.is_some() && !self.param_remove_list.contains(&index);
        (param, visible)
    }
}
