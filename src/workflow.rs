//! The end-to-end setup run.
//!
//! Steps execute strictly in order and the first failure aborts the run.
//! Nothing is written to disk until every value has been collected, and
//! external resources created before a failure are left in place.

use std::path::PathBuf;

use tracing::info_span;

use crate::console::Console;
use crate::env_file::{
    AUTH_SECRET_KEY, BASE_URL_KEY, DATABASE_AUTH_TOKEN_KEY, DATABASE_URL_KEY, EnvConfig,
    STRIPE_SECRET_KEY, STRIPE_WEBHOOK_SECRET_KEY, write_env_file,
};
use crate::error::SetupResult;
use crate::preflight::{ToolCheck, ensure_tool_ready};
use crate::provision::{DataStore, provision_data_store};
use crate::secrets::{collect_secret, generate_secret};
use crate::settings::SetupSettings;
use crate::tools::ToolRunner;
use crate::webhook::register_webhook;

#[derive(Clone, Debug)]
pub struct SetupOutcome {
    pub env_file: PathBuf,
    pub data_store: DataStore,
    pub config: EnvConfig,
}

pub fn run_setup(
    settings: &SetupSettings,
    runner: &dyn ToolRunner,
    console: &mut dyn Console,
) -> SetupResult<SetupOutcome> {
    console.say("Step 1: Checking if Stripe CLI is installed and authenticated...");
    {
        let _span = info_span!("preflight").entered();
        ensure_tool_ready(&ToolCheck::stripe(settings.stripe.clone()), runner, console)?;
    }

    console.say("Step 2: Setting up the database...");
    let data_store = {
        let _span = info_span!("provision").entered();
        provision_data_store(&settings.turso, runner, console)?
    };

    console.say("Step 3: Getting Stripe Secret Key");
    console.say("You can find your Stripe Secret Key at: https://dashboard.stripe.com/test/apikeys");
    let stripe_secret_key = collect_secret(console, "Enter your Stripe Secret Key: ")?;

    console.say("Step 4: Creating Stripe webhook...");
    let webhook_secret = {
        let _span = info_span!("webhook").entered();
        register_webhook(&settings.stripe, runner, console)?
    };

    console.say("Step 5: Generating AUTH_SECRET...");
    let auth_secret = generate_secret();

    let config = build_env_config(
        &data_store,
        stripe_secret_key,
        webhook_secret,
        &settings.base_url,
        auth_secret,
    );

    console.say(&format!(
        "Step 6: Writing environment variables to {}",
        settings.env_file.display()
    ));
    write_env_file(&settings.env_file, &config)?;
    console.say("Setup completed successfully!");

    Ok(SetupOutcome {
        env_file: settings.env_file.clone(),
        data_store,
        config,
    })
}

/// Assemble the artifact entries. The auth token key is present only for a
/// remote data store.
pub fn build_env_config(
    data_store: &DataStore,
    stripe_secret_key: String,
    webhook_secret: String,
    base_url: &str,
    auth_secret: String,
) -> EnvConfig {
    let mut config = EnvConfig::new();
    config.set(DATABASE_URL_KEY, data_store.url.clone());
    config.set(STRIPE_SECRET_KEY, stripe_secret_key);
    config.set(STRIPE_WEBHOOK_SECRET_KEY, webhook_secret);
    config.set(BASE_URL_KEY, base_url);
    config.set(AUTH_SECRET_KEY, auth_secret);
    if let Some(token) = &data_store.auth_token {
        config.set(DATABASE_AUTH_TOKEN_KEY, token.clone());
    }
    config
}
