//! Host-cluster object naming for mirrored resources.
//!
//! A resource `name` in `namespace` of a virtual cluster is mirrored into the host
//! cluster under a single derived name. The derivation is pure and stable across
//! releases: names already created in a host cluster must keep resolving.

pub mod concat;
pub mod config;
pub mod digest;
pub mod errors;
pub mod label;
pub mod translator;

// Convenience re-exports
pub use concat::{safe_concat_name, DEFAULT_MAX_LENGTH, MIN_MAX_LENGTH};
pub use config::TranslatorConfig;
pub use errors::{LabelError, NameError};
pub use label::{is_valid_label, validate_label, MAX_LABEL_LENGTH};
pub use translator::{Identity, NameTranslator};
