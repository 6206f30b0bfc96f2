use crate::console::Console;
use crate::error::SetupResult;

pub const AUTH_SECRET_BYTES: usize = 32;

/// Prompt for an operator-supplied secret. The answer is not validated.
pub fn collect_secret(console: &mut dyn Console, prompt: &str) -> SetupResult<String> {
    console.ask_secret(prompt)
}

/// 32 bytes from the thread-local CSPRNG, lowercase hex encoded.
pub fn generate_secret() -> String {
    let bytes: [u8; AUTH_SECRET_BYTES] = rand::random();
    hex::encode(bytes)
}
