use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Origin serving `/upload/<category>`; falls back to `base_url`.
    #[serde(default)]
    pub upload_base_url: Option<String>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), upload_base_url: None, user_agent: default_user_agent() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_session_path")]
    pub path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { path: default_session_path() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { format: default_log_format() }
    }
}

fn default_base_url() -> String { "http://127.0.0.1:8000/api".into() }
fn default_user_agent() -> String { concat!("sitecms/", env!("CARGO_PKG_VERSION")).into() }
fn default_session_path() -> String { "data/session.json".into() }
fn default_log_format() -> String { "compact".into() }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load from `$CONFIG_PATH` (or `config.toml`), falling back to defaults
    /// when the file does not exist, then apply env overrides and validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = match load_default() {
            Ok(cfg) => cfg,
            Err(e) if is_not_found(&e) => AppConfig::default(),
            Err(e) => return Err(e),
        };
        cfg.apply_env();
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("SITE_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(url) = std::env::var("SITE_UPLOAD_URL") {
            self.api.upload_base_url = Some(url);
        }
        if let Ok(path) = std::env::var("SITE_SESSION_PATH") {
            self.session.path = path;
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.api.normalize()?;
        self.session.validate()?;
        self.logging.normalize();
        Ok(())
    }
}

fn is_not_found(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .map(|io| io.kind() == std::io::ErrorKind::NotFound)
        .unwrap_or(false)
}

fn validate_http_url(field: &str, url: &str) -> Result<()> {
    let lower = url.to_ascii_lowercase();
    if !(lower.starts_with("http://") || lower.starts_with("https://")) {
        return Err(anyhow!("{field} must start with http:// or https:// (got {url:?})"));
    }
    Ok(())
}

impl ApiConfig {
    fn normalize(&mut self) -> Result<()> {
        self.base_url = self.base_url.trim().trim_end_matches('/').to_string();
        if self.base_url.is_empty() {
            self.base_url = default_base_url();
        }
        validate_http_url("api.base_url", &self.base_url)?;

        self.upload_base_url = self
            .upload_base_url
            .take()
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty());
        if let Some(u) = &self.upload_base_url {
            validate_http_url("api.upload_base_url", u)?;
        }
        if self.user_agent.trim().is_empty() {
            self.user_agent = default_user_agent();
        }
        Ok(())
    }

    /// Base used for `/upload/<category>`.
    pub fn upload_base(&self) -> &str {
        self.upload_base_url.as_deref().unwrap_or(&self.base_url)
    }
}

impl SessionConfig {
    fn validate(&self) -> Result<()> {
        if self.path.trim().is_empty() {
            return Err(anyhow!("session.path is empty"));
        }
        Ok(())
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        let f = self.format.trim().to_ascii_lowercase();
        self.format = if f == "json" { f } else { default_log_format() };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() -> Result<()> {
        let mut cfg = load_from_str("")?;
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.api.base_url, "http://127.0.0.1:8000/api");
        assert_eq!(cfg.api.upload_base(), "http://127.0.0.1:8000/api");
        assert_eq!(cfg.session.path, "data/session.json");
        assert_eq!(cfg.logging.format, "compact");
        Ok(())
    }

    #[test]
    fn trailing_slashes_are_trimmed() -> Result<()> {
        let mut cfg = load_from_str(
            r#"
            [api]
            base_url = "https://cms.example.com/api/"
            upload_base_url = "https://cms.example.com/"
            "#,
        )?;
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.api.base_url, "https://cms.example.com/api");
        assert_eq!(cfg.api.upload_base(), "https://cms.example.com");
        Ok(())
    }

    #[test]
    fn blank_upload_base_falls_back() -> Result<()> {
        let mut cfg = load_from_str("[api]\nupload_base_url = \"  \"\n")?;
        cfg.normalize_and_validate()?;
        assert!(cfg.api.upload_base_url.is_none());
        Ok(())
    }

    #[test]
    fn rejects_non_http_base() {
        let mut cfg = load_from_str("[api]\nbase_url = \"ftp://nope\"\n").unwrap();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn unknown_log_format_becomes_compact() -> Result<()> {
        let mut cfg = load_from_str("[logging]\nformat = \"JSON\"\n")?;
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.logging.format, "json");
        let mut cfg = load_from_str("[logging]\nformat = \"pretty\"\n")?;
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.logging.format, "compact");
        Ok(())
    }

    #[test]
    fn missing_file_is_not_found() {
        let path = std::env::temp_dir().join(format!("no_such_{}.toml", uuid::Uuid::new_v4()));
        let err = load_from_file(path.to_str().unwrap()).unwrap_err();
        assert!(is_not_found(&err));
    }
}
