//! Display tokens identifying a run

use crate::io::configuration::TOKEN_LENGTH;
use uuid::Uuid;

/// Mint a token from the first 16 characters of an upper-case v4 UUID
///
/// Tokens are for display only; nothing checks or stores their uniqueness.
pub fn mint_token() -> String {
    Uuid::new_v4()
        .to_string()
        .to_uppercase()
        .chars()
        .take(TOKEN_LENGTH)
        .collect()
}
