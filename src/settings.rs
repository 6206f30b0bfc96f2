use std::path::{Path, PathBuf};

use crate::bin_resolver::resolve_binary;
use crate::env_file::DEFAULT_FILE_NAME;
use crate::tools::Tool;

pub const BASE_URL_ENV: &str = "SAAS_SETUP_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Clone, Debug)]
pub struct SetupSettings {
    pub env_file: PathBuf,
    pub base_url: String,
    pub stripe: Tool,
    pub turso: Tool,
}

impl SetupSettings {
    /// Resolve settings for a run rooted at `cwd`.
    pub fn resolve(cwd: &Path, env_file: Option<&Path>, base_url: Option<&str>) -> Self {
        let env_file = env_file.unwrap_or(Path::new(DEFAULT_FILE_NAME));
        let env_file = if env_file.is_absolute() {
            env_file.to_path_buf()
        } else {
            cwd.join(env_file)
        };
        let base_url = base_url
            .map(str::to_string)
            .or_else(|| std::env::var(BASE_URL_ENV).ok().filter(|v| !v.is_empty()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            env_file,
            base_url,
            stripe: Tool::new("Stripe", resolve_binary("stripe")),
            turso: Tool::new("Turso", resolve_binary("turso")),
        }
    }
}
