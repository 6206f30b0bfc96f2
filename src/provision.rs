use tracing::{info, warn};

use crate::console::Console;
use crate::error::SetupResult;
use crate::preflight::{ToolCheck, ensure_tool_ready};
use crate::tools::{Tool, ToolRunner};

pub const LOCAL_DATABASE_URL: &str = "file:local.db";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataStoreChoice {
    Local,
    Remote,
}

impl DataStoreChoice {
    /// `l` selects local, every other answer selects remote.
    pub fn from_answer(answer: &str) -> Self {
        if answer.trim().eq_ignore_ascii_case("l") {
            DataStoreChoice::Local
        } else {
            DataStoreChoice::Remote
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataStore {
    pub url: String,
    pub auth_token: Option<String>,
}

impl DataStore {
    pub fn is_remote(&self) -> bool {
        self.auth_token.is_some()
    }
}

pub fn provision_data_store(
    turso: &Tool,
    runner: &dyn ToolRunner,
    console: &mut dyn Console,
) -> SetupResult<DataStore> {
    let answer = console.ask(
        "Do you want to use a local SQLite database (L) or a remote Turso database (R)? (L/R): ",
    )?;
    match DataStoreChoice::from_answer(&answer) {
        DataStoreChoice::Local => {
            console.say("Using a local SQLite database file.");
            Ok(DataStore {
                url: LOCAL_DATABASE_URL.to_string(),
                auth_token: None,
            })
        }
        DataStoreChoice::Remote => provision_remote(turso, runner, console),
    }
}

fn provision_remote(
    turso: &Tool,
    runner: &dyn ToolRunner,
    console: &mut dyn Console,
) -> SetupResult<DataStore> {
    ensure_tool_ready(&ToolCheck::turso(turso.clone()), runner, console)?;

    let name = console.ask("Enter a name for your Turso database: ")?;
    console.say(&format!("Creating Turso database {name}..."));
    turso
        .invoke(runner, &["db", "create", &name], "turso db create")
        .inspect_err(|err| {
            warn!(database = %name, error = %err, "database creation failed");
            console.say(&format!("Failed to create Turso database: {err}"));
        })?;
    info!(database = %name, "turso database created");

    let output = turso
        .invoke(runner, &["db", "show", &name, "--url"], "turso db show")
        .inspect_err(|err| {
            console.say(&format!("Failed to fetch Turso database URL: {err}"));
        })?;
    let url = output.stdout.trim().to_string();
    if url.is_empty() {
        warn!(database = %name, "turso returned an empty database URL");
    }
    console.say(&format!("Turso database URL: {url}"));

    let auth_token = console.ask_secret(&format!(
        "Enter your Turso auth token (create one with: turso db tokens create {name}): "
    ))?;
    Ok(DataStore {
        url,
        auth_token: Some(auth_token),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_l_selects_local() {
        assert_eq!(DataStoreChoice::from_answer("l"), DataStoreChoice::Local);
        assert_eq!(DataStoreChoice::from_answer(" L "), DataStoreChoice::Local);
        assert_eq!(DataStoreChoice::from_answer("r"), DataStoreChoice::Remote);
        assert_eq!(DataStoreChoice::from_answer(""), DataStoreChoice::Remote);
        assert_eq!(DataStoreChoice::from_answer("local"), DataStoreChoice::Remote);
    }
}
