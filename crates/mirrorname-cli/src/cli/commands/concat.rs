//! CLI command: mirrorname concat
//!
//! Usage:
//!   mirrorname concat --max-length 34 my-release postgresql headless

use anyhow::{ensure, Result};
use mirrorname_core::{safe_concat_name, MIN_MAX_LENGTH};

use crate::cli::args::ConcatArgs;
use crate::exit_codes::EXIT_SUCCESS;

pub fn run(args: ConcatArgs) -> Result<i32> {
    ensure!(
        args.max_length >= MIN_MAX_LENGTH,
        "max length {} is below the minimum of {}",
        args.max_length,
        MIN_MAX_LENGTH
    );
    println!("{}", safe_concat_name(args.max_length, &args.parts));
    Ok(EXIT_SUCCESS)
}
