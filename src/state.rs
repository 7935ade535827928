use std::sync::Arc;

use crate::config::AppConfig;
use crate::guard::JwtCodec;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub codec: Arc<JwtCodec>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let codec = Arc::new(JwtCodec::new(&config.jwt));
        Ok(Self { config, codec })
    }

    /// Test state with a fixed secret, no environment needed.
    pub fn fake() -> Self {
        let config = Arc::new(AppConfig {
            jwt: crate::config::JwtConfig {
                secret: "test".into(),
                leeway_secs: 0,
            },
            token_key: "token".into(),
        });
        let codec = Arc::new(JwtCodec::new(&config.jwt));
        Self { config, codec }
    }
}
