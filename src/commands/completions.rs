//! Shell completions and man page generation

use std::io::Write;
use std::path::PathBuf;

use clap::CommandFactory;

use crate::cli::{Cli, CompletionsArgs};
use crate::error::{RaindropError, Result};

/// Print completions for the requested shell
pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(args.shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}

/// Print the roff man page
pub fn manpage() -> Result<()> {
    let mut buf = Vec::new();
    clap_mangen::Man::new(Cli::command())
        .render(&mut buf)
        .and_then(|_| std::io::stdout().write_all(&buf))
        .map_err(|source| RaindropError::Io {
            path: PathBuf::from("<stdout>"),
            source,
        })
}
