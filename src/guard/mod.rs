//! Route-authorization guard.
//!
//! Stateless gate in front of protected pages: reads the bearer token from
//! a [`TokenStore`], decodes it with a [`TokenCodec`] and produces exactly
//! one [`Decision`]. Every evaluation stands alone; nothing is cached
//! between calls and nothing is ever surfaced to the caller as an error.

use tracing::{debug, warn};

mod claims;
mod codec;
mod store;

pub use claims::{Claims, Role};
pub use codec::{DecodeError, JwtCodec, TokenCodec};
pub use store::{BearerHeaderStore, MemoryStore, TokenStore};

/// Where unauthenticated viewers are sent.
pub const LOGIN_PATH: &str = "/login";
/// Where authenticated-but-wrong-role viewers are sent.
pub const HOME_PATH: &str = "/";

/// Outcome of one guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision<T> {
    /// Protected content may be shown.
    Render(T),
    /// Navigate to the given path instead.
    Redirect(&'static str),
    /// Show the pending-verification view in place of the content.
    Fallback,
}

/// The guard itself: a token store, a codec and the key the token lives
/// under. Evaluation is a pure function of the store's current contents.
pub struct RouteGuard<S, C> {
    store: S,
    codec: C,
    token_key: String,
}

impl<S: TokenStore, C: TokenCodec> RouteGuard<S, C> {
    pub fn new(store: S, codec: C) -> Self {
        Self {
            store,
            codec,
            token_key: "token".into(),
        }
    }

    pub fn with_token_key(mut self, key: impl Into<String>) -> Self {
        self.token_key = key.into();
        self
    }

    /// Decide whether `children` may render for a viewer holding the stored
    /// token. An empty stored token counts as no token, and a token the
    /// codec rejects is indistinguishable from absence: both fail closed to
    /// the login redirect.
    pub fn evaluate<T>(&self, required_role: Option<Role>, children: T) -> Decision<T> {
        self.evaluate_with(required_role, |_| children)
    }

    /// Like [`evaluate`](Self::evaluate), but builds the content from the
    /// decoded claims once the viewer is authorized.
    pub fn evaluate_with<T>(
        &self,
        required_role: Option<Role>,
        children: impl FnOnce(&Claims) -> T,
    ) -> Decision<T> {
        let token = match self.store.get(&self.token_key) {
            Some(t) if !t.is_empty() => t,
            _ => {
                debug!("no token in store");
                return Decision::Redirect(LOGIN_PATH);
            }
        };

        let claims = match self.codec.decode(&token) {
            Ok(claims) => claims,
            Err(e) => {
                warn!(error = %e, "token rejected");
                return Decision::Redirect(LOGIN_PATH);
            }
        };

        if let Some(required) = required_role {
            if claims.role != required {
                debug!(sub = %claims.sub, have = ?claims.role, want = ?required, "role mismatch");
                return Decision::Redirect(HOME_PATH);
            }
        }

        // Verification gates every role once authentication and role are
        // satisfied, admins included.
        if !claims.is_verified {
            debug!(sub = %claims.sub, "principal not verified");
            return Decision::Fallback;
        }

        Decision::Render(children(&claims))
    }
}
