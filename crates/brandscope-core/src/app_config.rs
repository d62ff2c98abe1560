use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub chrome_path: Option<PathBuf>,
    pub nav_timeout_secs: u64,
    pub network_idle_ms: u64,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub max_concurrent_scrapes: usize,
    pub sections_path: PathBuf,
    pub output_dir: PathBuf,
    pub anthropic_api_key: Option<String>,
    pub rewrite_model: String,
    pub rewrite_base_url: String,
    pub rewrite_timeout_secs: u64,
    pub rewrite_max_tokens: u32,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("chrome_path", &self.chrome_path)
            .field("nav_timeout_secs", &self.nav_timeout_secs)
            .field("network_idle_ms", &self.network_idle_ms)
            .field("viewport_width", &self.viewport_width)
            .field("viewport_height", &self.viewport_height)
            .field("max_concurrent_scrapes", &self.max_concurrent_scrapes)
            .field("sections_path", &self.sections_path)
            .field("output_dir", &self.output_dir)
            .field(
                "anthropic_api_key",
                &self.anthropic_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("rewrite_model", &self.rewrite_model)
            .field("rewrite_base_url", &self.rewrite_base_url)
            .field("rewrite_timeout_secs", &self.rewrite_timeout_secs)
            .field("rewrite_max_tokens", &self.rewrite_max_tokens)
            .finish()
    }
}
