//! CLI command: mirrorname check
//!
//! Prints `ok <name>` or `invalid <name>: <reason>` per name.

use mirrorname_core::validate_label;

use crate::cli::args::CheckArgs;
use crate::exit_codes::{EXIT_INVALID_NAME, EXIT_SUCCESS};

pub fn run(args: CheckArgs) -> i32 {
    let mut invalid = 0usize;
    for name in &args.names {
        match validate_label(name) {
            Ok(()) => println!("ok {name}"),
            Err(e) => {
                invalid += 1;
                println!("invalid {name}: {e}");
            }
        }
    }

    if invalid > 0 {
        tracing::warn!(invalid, total = args.names.len(), "names failed label validation");
        EXIT_INVALID_NAME
    } else {
        EXIT_SUCCESS
    }
}
