use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    /// Clock-skew allowance when checking `exp`, in seconds.
    pub leeway_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub jwt: JwtConfig,
    /// Key the client keeps its token under in its storage.
    pub token_key: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            leeway_secs: std::env::var("JWT_LEEWAY_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(60),
        };
        let token_key = std::env::var("TOKEN_KEY").unwrap_or_else(|_| "token".into());
        Ok(Self { jwt, token_key })
    }
}
