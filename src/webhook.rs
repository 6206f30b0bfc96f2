use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{error, info};

use crate::console::Console;
use crate::error::{SetupError, SetupResult};
use crate::tools::{Tool, ToolRunner};

static WEBHOOK_SECRET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"whsec_[a-zA-Z0-9]+").expect("webhook secret pattern is valid"));

/// Pull the first `whsec_...` token out of free-form CLI output.
pub fn extract_webhook_secret(output: &str) -> SetupResult<String> {
    WEBHOOK_SECRET
        .find(output)
        .map(|found| found.as_str().to_string())
        .ok_or(SetupError::Extraction)
}

/// Start `stripe listen --print-secret` and scrape the signing secret it prints.
pub fn register_webhook(
    stripe: &Tool,
    runner: &dyn ToolRunner,
    console: &mut dyn Console,
) -> SetupResult<String> {
    let output = stripe
        .invoke(runner, &["listen", "--print-secret"], "stripe listen")
        .inspect_err(|err| {
            error!(error = %err, "webhook session failed");
            console.say(&format!("Failed to create Stripe webhook: {err}"));
            if cfg!(windows) {
                console.say(
                    "Note: On Windows, you may need to run this script as an administrator.",
                );
            }
        })?;
    let secret = extract_webhook_secret(&output.stdout)?;
    info!("stripe webhook secret captured");
    console.say("Stripe webhook created.");
    Ok(secret)
}
