//! Exit codes of the `mirrorname` binary. Scripts depend on these values.

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INVALID_NAME: i32 = 1; // `check` found a name that is not a valid label
pub const EXIT_CONFIG_ERROR: i32 = 2; // Bad flags, unreadable or invalid config
