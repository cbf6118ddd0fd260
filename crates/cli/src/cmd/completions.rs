//! Shell completion generation.

use std::io;

use clap::CommandFactory;
use clap_complete::generate;

use crate::{Cli, CompletionsArgs};

pub fn run(args: &CompletionsArgs) {
    let mut command = Cli::command();
    generate(args.shell, &mut command, "kdb", &mut io::stdout());
}
