use jsonwebtoken::{decode, errors::ErrorKind, DecodingKey, Validation};
use thiserror::Error;
use tracing::debug;

use crate::config::JwtConfig;

use super::claims::Claims;

/// Why a presented token could not be turned into [`Claims`].
///
/// The guard treats every variant the same way (fail closed), but keeping
/// them apart makes log lines useful.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("token expired")]
    Expired,
    #[error("malformed token: {0}")]
    Malformed(#[source] jsonwebtoken::errors::Error),
}

/// Turns a raw bearer token into claims, or fails.
pub trait TokenCodec {
    fn decode(&self, token: &str) -> Result<Claims, DecodeError>;
}

impl<C: TokenCodec + ?Sized> TokenCodec for &C {
    fn decode(&self, token: &str) -> Result<Claims, DecodeError> {
        (**self).decode(token)
    }
}

impl<C: TokenCodec + ?Sized> TokenCodec for std::sync::Arc<C> {
    fn decode(&self, token: &str) -> Result<Claims, DecodeError> {
        (**self).decode(token)
    }
}

/// Production codec: HMAC-signed JWTs.
pub struct JwtCodec {
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtCodec {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::default();
        // `exp` is optional in marketplace tokens but still enforced when present.
        validation.required_spec_claims.clear();
        validation.validate_exp = true;
        validation.leeway = config.leeway_secs;
        Self {
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        }
    }
}

impl TokenCodec for JwtCodec {
    fn decode(&self, token: &str) -> Result<Claims, DecodeError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => DecodeError::Expired,
                _ => DecodeError::Malformed(e),
            }
        })?;
        debug!(sub = %data.claims.sub, role = ?data.claims.role, "token decoded");
        Ok(data.claims)
    }
}
