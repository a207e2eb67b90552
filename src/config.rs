use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub github: GithubConfig,
    pub wakatime: WakatimeConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubConfig {
    /// Account whose profile and repositories the dashboard shows.
    pub username: String,
    #[serde(default = "default_github_api_url")]
    pub api_url: String,
    #[serde(default = "default_github_graphql_url")]
    pub graphql_url: String,
    /// From GITHUB_TOKEN; absence surfaces per request, not at startup.
    #[serde(skip)]
    pub token: Option<String>,
}

fn default_github_api_url() -> String {
    "https://api.github.com".into()
}

fn default_github_graphql_url() -> String {
    "https://api.github.com/graphql".into()
}

#[derive(Debug, Clone, Deserialize)]
pub struct WakatimeConfig {
    #[serde(default = "default_wakatime_api_url")]
    pub api_url: String,
    /// From WAKATIME_API_KEY; absence surfaces per request, not at startup.
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_wakatime_api_url() -> String {
    "https://wakatime.com/api/v1".into()
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Response validity window in seconds; both /api routes share it.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

fn default_ttl_secs() -> u64 {
    3600
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        let mut config = Self::load_from_str(&s)?;
        config.github.token = env_secret("GITHUB_TOKEN");
        config.wakatime.api_key = env_secret("WAKATIME_API_KEY");
        Ok(config)
    }

    /// Parse and validate config from a string (e.g. for tests). Secrets are
    /// not read from the environment here; set them on the returned value.
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.github.username.is_empty(),
            "github.username must be non-empty"
        );
        anyhow::ensure!(
            !self.github.api_url.is_empty(),
            "github.api_url must be non-empty"
        );
        anyhow::ensure!(
            !self.github.graphql_url.is_empty(),
            "github.graphql_url must be non-empty"
        );
        anyhow::ensure!(
            !self.wakatime.api_url.is_empty(),
            "wakatime.api_url must be non-empty"
        );
        anyhow::ensure!(
            self.cache.ttl_secs > 0,
            "cache.ttl_secs must be > 0, got {}",
            self.cache.ttl_secs
        );
        Ok(())
    }
}

fn env_secret(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
