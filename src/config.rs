pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_WIKIPEDIA_API_BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1";
pub const DEFAULT_SEP_BASE_URL: &str = "https://plato.stanford.edu";

/// Runtime settings read once at startup.
///
/// The model identifier and sampling parameters are not configurable; they
/// are constants of the call sites in [`crate::agent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// `None` leaves the completion gateway unconfigured; the server still
    /// starts and answers 500 on every endpoint that needs the model.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub wikipedia_base_url: String,
    pub sep_base_url: String,
    pub static_dir: Option<String>,
}

impl Config {
    /// Build the config from the process environment.
    ///
    /// - `PORT` (default 3001)
    /// - `OPENAI_API_KEY`
    /// - `OPENAI_BASE_URL`
    /// - `WIKIPEDIA_API_BASE_URL`
    /// - `SEP_BASE_URL`
    /// - `STATIC_DIR`: serve the built frontend from this directory
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let base_url = |key: &str, default: &str| {
            non_empty(key)
                .unwrap_or_else(|| default.to_string())
                .trim_end_matches('/')
                .to_string()
        };

        Self {
            port: non_empty("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            openai_api_key: non_empty("OPENAI_API_KEY"),
            openai_base_url: base_url("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
            wikipedia_base_url: base_url("WIKIPEDIA_API_BASE_URL", DEFAULT_WIKIPEDIA_API_BASE_URL),
            sep_base_url: base_url("SEP_BASE_URL", DEFAULT_SEP_BASE_URL),
            static_dir: non_empty("STATIC_DIR"),
        }
    }
}
