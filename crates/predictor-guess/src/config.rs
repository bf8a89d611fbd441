//! Public configuration for the demographics client.

use std::time::Duration;

/// Configuration for the demographics client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use predictor_guess::GuessClientConfig;
/// use std::time::Duration;
///
/// let config = GuessClientConfig::new()
///     .with_timeout(Duration::from_secs(5))
///     .with_max_retries(1);
/// ```
#[derive(Debug, Clone)]
pub struct GuessClientConfig {
    /// Age guessing endpoint
    pub(crate) agify_url: String,
    /// Gender guessing endpoint
    pub(crate) genderize_url: String,
    /// Nationality guessing endpoint
    pub(crate) nationalize_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Per-request timeout
    pub(crate) timeout: Duration,
    /// Maximum number of retry attempts for transient errors
    pub(crate) max_retries: u8,
    /// Base delay for exponential backoff
    pub(crate) retry_base_delay: Duration,
}

impl Default for GuessClientConfig {
    fn default() -> Self {
        Self {
            agify_url: "https://api.agify.io".to_string(),
            genderize_url: "https://api.genderize.io".to_string(),
            nationalize_url: "https://api.nationalize.io".to_string(),
            user_agent: concat!("predictor-guess/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(10),
            max_retries: 3,
            retry_base_delay: Duration::from_millis(200),
        }
    }
}

impl GuessClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the age endpoint. Defaults to `https://api.agify.io`.
    #[must_use]
    pub fn with_agify_url(mut self, url: impl Into<String>) -> Self {
        self.agify_url = url.into();
        self
    }

    /// Set the gender endpoint. Defaults to `https://api.genderize.io`.
    #[must_use]
    pub fn with_genderize_url(mut self, url: impl Into<String>) -> Self {
        self.genderize_url = url.into();
        self
    }

    /// Set the nationality endpoint. Defaults to `https://api.nationalize.io`.
    #[must_use]
    pub fn with_nationalize_url(mut self, url: impl Into<String>) -> Self {
        self.nationalize_url = url.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the per-request timeout.
    ///
    /// Defaults to 10 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retry attempts for transient errors.
    ///
    /// Defaults to 3 retries.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base delay for exponential backoff retries.
    ///
    /// Defaults to 200ms.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }
}
