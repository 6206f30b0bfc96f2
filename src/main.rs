use std::process::ExitCode;

use clap::Parser;
use saas_setup::cli;

fn main() -> anyhow::Result<ExitCode> {
    let cli = cli::Cli::parse();
    cli.run()
}
