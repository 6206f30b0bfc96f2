//! Checks that an external CLI is installed and, when required, logged in.

use tracing::{info, warn};

use crate::console::{Console, ask_yes_no};
use crate::error::{SetupError, SetupResult};
use crate::tools::{Tool, ToolRunner};

/// How to verify one tool and what to tell the operator when it is not ready.
#[derive(Clone, Debug)]
pub struct ToolCheck {
    pub tool: Tool,
    pub version_args: Vec<&'static str>,
    pub auth: Option<AuthCheck>,
    pub install_instructions: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct AuthCheck {
    pub args: Vec<&'static str>,
    pub login_command: String,
}

impl ToolCheck {
    pub fn stripe(tool: Tool) -> Self {
        Self {
            tool,
            version_args: vec!["--version"],
            auth: Some(AuthCheck {
                args: vec!["config", "--list"],
                login_command: "stripe login".to_string(),
            }),
            install_instructions: vec![
                "To install Stripe CLI, follow these steps:".to_string(),
                "1. Visit: https://docs.stripe.com/stripe-cli".to_string(),
                "2. Download and install the Stripe CLI for your operating system".to_string(),
                "3. After installation, run: stripe login".to_string(),
                "After installation and authentication, please run this setup script again."
                    .to_string(),
            ],
        }
    }

    pub fn turso(tool: Tool) -> Self {
        Self {
            tool,
            version_args: vec!["--version"],
            auth: None,
            install_instructions: vec![
                "To install Turso CLI, follow these steps:".to_string(),
                "1. Visit: https://docs.turso.tech/cli/installation".to_string(),
                "2. After installation, run: turso auth login".to_string(),
                "After installation and authentication, please run this setup script again."
                    .to_string(),
            ],
        }
    }
}

/// Verify the tool is installed, then authenticated if an auth probe is set.
///
/// A failed auth probe gets one remediation prompt and exactly one re-check.
pub fn ensure_tool_ready(
    check: &ToolCheck,
    runner: &dyn ToolRunner,
    console: &mut dyn Console,
) -> SetupResult<()> {
    let name = check.tool.name.as_str();
    if !check.tool.probe(runner, &check.version_args) {
        warn!(tool = name, "version probe failed");
        console.say(&format!(
            "{name} CLI is not installed. Please install it and try again."
        ));
        for line in &check.install_instructions {
            console.say(line);
        }
        return Err(SetupError::MissingTool {
            tool: name.to_string(),
        });
    }
    console.say(&format!("{name} CLI is installed."));

    let Some(auth) = &check.auth else {
        return Ok(());
    };
    if check.tool.probe(runner, &auth.args) {
        console.say(&format!("{name} CLI is authenticated."));
        return Ok(());
    }

    info!(tool = name, "auth probe failed, asking operator to log in");
    console.say(&format!(
        "{name} CLI is not authenticated or the authentication has expired."
    ));
    console.say(&format!("Please run: {}", auth.login_command));
    let done = ask_yes_no(console, "Have you completed the authentication? (y/n): ")?;
    if !done {
        console.say(&format!(
            "Please authenticate with {name} CLI and run this script again."
        ));
        return Err(SetupError::Unauthenticated {
            tool: name.to_string(),
        });
    }

    if !check.tool.probe(runner, &auth.args) {
        warn!(tool = name, "auth probe failed after operator confirmation");
        console.say(&format!(
            "Failed to verify {name} CLI authentication. Please try again."
        ));
        return Err(SetupError::Unauthenticated {
            tool: name.to_string(),
        });
    }
    console.say(&format!("{name} CLI authentication confirmed."));
    Ok(())
}
