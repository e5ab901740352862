use super::args::*;

pub mod check;
pub mod concat;
pub mod translate;

use crate::exit_codes::EXIT_SUCCESS;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Translate(args) => translate::run(args),
        Command::Concat(args) => concat::run(args),
        Command::Check(args) => Ok(check::run(args)),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(EXIT_SUCCESS)
        }
    }
}
