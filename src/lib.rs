//! Layered metadata loader for command descriptors.
//!
//! A command dictionary is authored as one *full* (base) document per
//! command plus zero or more *partial* (override) documents layered on
//! top. This crate validates those documents against a fixed schema,
//! fills defaults for the base, and merges overrides in order to
//! produce the effective [`CommandDescriptor`] a parameter-editing UI
//! queries. Document parsing itself is out of scope: the loader takes
//! an already-parsed `serde_json::Value` tree.

pub mod bounds;
pub mod command;
pub mod error;
pub mod list;
pub mod loader;
pub mod param;
pub mod schema;

pub use command::{CommandDescriptor, CommandInfo};
pub use error::{CmdInfoError, Result};
pub use loader::{LoadMode, load};
pub use param::ParamDescriptor;

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
