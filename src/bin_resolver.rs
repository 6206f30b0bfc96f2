use std::path::PathBuf;

pub const ENV_PREFIX: &str = "SAAS_SETUP_BINARY_";

/// Resolve the program to spawn for an external CLI.
///
/// `SAAS_SETUP_BINARY_<NAME>` wins when set. Otherwise the bare name is
/// returned and `PATH` lookup happens at spawn time, so a missing tool
/// surfaces as a failed version probe.
pub fn resolve_binary(name: &str) -> PathBuf {
    env_binary_override(name).unwrap_or_else(|| PathBuf::from(binary_name(name)))
}

pub fn env_key(name: &str) -> String {
    format!("{ENV_PREFIX}{}", normalize_env_key(name))
}

fn env_binary_override(name: &str) -> Option<PathBuf> {
    std::env::var_os(env_key(name))
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn binary_name(name: &str) -> String {
    if cfg!(windows) && !name.ends_with(".exe") {
        format!("{name}.exe")
    } else {
        name.to_string()
    }
}

fn normalize_env_key(name: &str) -> String {
    name.chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect::<String>()
}
