//! Ghadi configuration page documents
//!
//! Each watchface skin has a configuration document: an ordered list of
//! descriptors the companion app's web view renders as a settings form. The
//! form posts toggle values back under each toggle's `messageKey`; the watch
//! binds to those exact keys, so a skin's key set is part of its contract.
//!
//! The documents are declarative data. The only logic here is the load-time
//! shape check (`ConfigSchema::validate`) and defaults extraction.

mod schema;
pub mod skins;

pub use schema::{ConfigSchema, SchemaError, SchemaItem};
