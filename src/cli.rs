use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::console::TerminalConsole;
use crate::settings::SetupSettings;
use crate::tools::ProcessRunner;
use crate::workflow::run_setup;

#[derive(Parser, Debug)]
#[command(name = "saas-setup")]
#[command(
    about = "Provision Stripe and Turso credentials and write them to a .env file",
    version
)]
pub struct Cli {
    #[arg(long, help = "Environment file to write, relative to the current directory.")]
    env_file: Option<PathBuf>,
    #[arg(long, help = "BASE_URL written to the environment file.")]
    base_url: Option<String>,
    #[arg(long, help = "Enable debug logging on stderr.")]
    debug: bool,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<ExitCode> {
        init_tracing(self.debug)?;
        let cwd = std::env::current_dir().context("resolve current directory")?;
        let settings =
            SetupSettings::resolve(&cwd, self.env_file.as_deref(), self.base_url.as_deref());

        let mut console = TerminalConsole::new();
        match run_setup(&settings, &ProcessRunner, &mut console) {
            Ok(_) => Ok(ExitCode::SUCCESS),
            Err(err) => {
                error!(kind = err.kind(), "setup failed");
                eprintln!("Error: {err}");
                Ok(ExitCode::from(err.exit_code()))
            }
        }
    }
}

fn init_tracing(debug: bool) -> anyhow::Result<()> {
    let default_filter = if debug {
        "saas_setup=debug"
    } else {
        "saas_setup=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize logging: {err}"))
}
