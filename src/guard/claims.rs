use serde::{Deserialize, Serialize};

/// Kind of account on the marketplace, carried in the token payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Client,
    Freelancer,
}

/// Decoded bearer-token payload used for authorization decisions.
///
/// Every field except `exp` is required; a token missing one of them fails
/// decoding instead of defaulting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub sub: String, // principal identifier
    pub role: Role,
    #[serde(rename = "isVerified")]
    pub is_verified: bool,
    /// Expiration (unix timestamp). Absent for non-expiring tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<usize>,
}
