// Gateway configuration

use crate::errors::ConfigError;
use crate::provider::SubProvider;
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.edenai.run";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_millis(500);
pub const DEFAULT_MAX_BACKOFF: Duration = Duration::from_secs(8);

/// Eden AI API key. `Debug` never prints the secret.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Retry policy for transient provider failures.
///
/// Delay before retry `n` (0-based) is `initial_backoff * 2^n`, capped at
/// `max_backoff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl RetryPolicy {
    /// Single attempt, no retries
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            initial_backoff: DEFAULT_INITIAL_BACKOFF,
            max_backoff: DEFAULT_MAX_BACKOFF,
        }
    }

    pub fn with_retries(max_retries: u32, initial_backoff: Duration) -> Self {
        Self {
            max_retries,
            initial_backoff,
            max_backoff: DEFAULT_MAX_BACKOFF.max(initial_backoff),
        }
    }

    pub fn backoff_for(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry);
        self.initial_backoff
            .checked_mul(factor)
            .unwrap_or(self.max_backoff)
            .min(self.max_backoff)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}

/// Everything the gateway needs to reach Eden AI
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub api_key: Option<ApiKey>,
    pub base_url: String,
    pub provider: SubProvider,
    pub timeout: Duration,
    pub retry: RetryPolicy,
    /// Honour HTTP(S)_PROXY environment variables
    pub use_system_proxy: bool,
}

impl GatewayConfig {
    pub fn new(api_key: Option<ApiKey>) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            provider: SubProvider::default(),
            timeout: DEFAULT_TIMEOUT,
            retry: RetryPolicy::none(),
            use_system_proxy: true,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_provider(mut self, provider: SubProvider) -> Self {
        self.provider = provider;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn without_system_proxy(mut self) -> Self {
        self.use_system_proxy = false;
        self
    }

    /// Read configuration from the process environment.
    ///
    /// A missing or blank `EDEN_AI_API_KEY` is not an error here; every
    /// removal fails with a configuration error instead.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("EDEN_AI_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .map(ApiKey::new);

        let mut config = Self::new(api_key);

        if let Some(base_url) = non_empty_var("EDEN_AI_BASE_URL") {
            config = config.with_base_url(base_url);
        }
        if let Some(provider) = non_empty_var("EDEN_AI_PROVIDER") {
            config = config.with_provider(provider.parse()?);
        }
        if let Some(secs) = non_empty_var("EDEN_AI_TIMEOUT_SECS") {
            let secs = parse_number::<u64>("EDEN_AI_TIMEOUT_SECS", &secs)?;
            if secs == 0 {
                return Err(ConfigError::InvalidValue {
                    name: "EDEN_AI_TIMEOUT_SECS",
                    value: secs.to_string(),
                });
            }
            config = config.with_timeout(Duration::from_secs(secs));
        }

        let max_retries = match non_empty_var("EDEN_AI_MAX_RETRIES") {
            Some(value) => parse_number::<u32>("EDEN_AI_MAX_RETRIES", &value)?,
            None => 0,
        };
        let initial_backoff = match non_empty_var("EDEN_AI_RETRY_BACKOFF_MS") {
            Some(value) => Duration::from_millis(parse_number::<u64>("EDEN_AI_RETRY_BACKOFF_MS", &value)?),
            None => DEFAULT_INITIAL_BACKOFF,
        };
        config = config.with_retry_policy(RetryPolicy::with_retries(max_retries, initial_backoff));

        Ok(config)
    }

    /// Background-removal endpoint URL
    pub fn endpoint(&self) -> String {
        format!("{}/v2/image/background_removal", self.base_url)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}
