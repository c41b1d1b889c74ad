use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct DownloadConfig {
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub download: DownloadConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: None,
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let base_url = env::var("ROOMGEN_API_URL").ok();
        let timeout_secs = env::var("ROOMGEN_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok());

        ApiConfig {
            base_url,
            timeout_secs,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Base URL with any trailing slash stripped, ready for `format!` joins.
    pub fn resolved_base_url(&self) -> String {
        let base = self
            .base_url
            .clone()
            .unwrap_or_else(|| "http://localhost:8000/api".to_string());
        base.trim_end_matches('/').to_string()
    }
}

impl Default for DownloadConfig {
    fn default() -> Self {
        DownloadConfig { output_dir: None }
    }
}

impl DownloadConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let output_dir = env::var("ROOMGEN_DOWNLOAD_DIR").ok().map(PathBuf::from);

        DownloadConfig { output_dir }
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn resolved_output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("downloads"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api: ApiConfig::default(),
            download: DownloadConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        Config {
            api: ApiConfig::from_env(),
            download: DownloadConfig::from_env(),
        }
    }

    pub fn with_api(mut self, api: ApiConfig) -> Self {
        self.api = api;
        self
    }

    pub fn with_download(mut self, download: DownloadConfig) -> Self {
        self.download = download;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let config = ApiConfig::new().with_base_url("http://host:8000/api/");
        assert_eq!(config.resolved_base_url(), "http://host:8000/api");
    }

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(
            config.api.resolved_base_url(),
            "http://localhost:8000/api"
        );
        assert_eq!(
            config.download.resolved_output_dir(),
            PathBuf::from("downloads")
        );
    }
}
