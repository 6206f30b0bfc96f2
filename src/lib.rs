pub mod bin_resolver;
pub mod cli;
pub mod console;
pub mod env_file;
pub mod error;
pub mod preflight;
pub mod provision;
pub mod secrets;
pub mod settings;
pub mod tools;
pub mod webhook;
pub mod workflow;

pub use error::{SetupError, SetupResult};
