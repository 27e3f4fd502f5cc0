//! Configuration management for sesame.
//!
//! Loads configuration from ${SESAME_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

pub mod paths {
    //! Path resolution for sesame configuration and data directories.
    //!
    //! SESAME_HOME resolution order:
    //! 1. SESAME_HOME environment variable (if set)
    //! 2. ~/.config/sesame (default)
    //! 3. ./.sesame when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the sesame home directory.
    pub fn sesame_home() -> PathBuf {
        if let Ok(home) = std::env::var("SESAME_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".sesame"),
            |h| h.join(".config").join("sesame"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        sesame_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        sesame_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Origin of the authentication service.
    pub base_url: String,

    /// User-Agent header sent with every request.
    pub user_agent: String,

    /// Log filter used when `SESAME_LOG` is not set.
    pub log_level: String,
}

impl Config {
    const DEFAULT_BASE_URL: &str = "https://ic56xdo6p-test-api-rn.herokuapp.com";
    const DEFAULT_USER_AGENT: &str = concat!("sesame/", env!("CARGO_PKG_VERSION"));
    const DEFAULT_LOG_LEVEL: &str = "info";

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Returns the service origin as a parsed URL.
    ///
    /// # Errors
    /// Returns an error if `base_url` is not an absolute http(s) URL.
    pub fn base_url(&self) -> Result<Url> {
        let url = Url::parse(self.base_url.trim())
            .with_context(|| format!("Invalid base_url '{}'", self.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!(
                "Invalid base_url '{}': expected an http or https origin",
                self.base_url
            );
        }
        Ok(url)
    }

    /// Creates a default config file at the given path.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Generates a fresh config TOML from Rust defaults.
    ///
    /// Uses the embedded template for structure/comments and overwrites
    /// its values with the ones from `Config::default()`.
    ///
    /// # Errors
    /// Returns an error if the template or the generated TOML fails to parse.
    pub fn generate() -> Result<String> {
        use toml_edit::{DocumentMut, Item};

        let generated_toml = toml::to_string(&Config::default())
            .context("Failed to serialize default config to TOML")?;

        let mut doc: DocumentMut = default_config_template()
            .parse()
            .context("Failed to parse default config template")?;
        let generated_doc: DocumentMut = generated_toml
            .parse()
            .context("Failed to parse generated config")?;

        for (key, value) in generated_doc.as_table().iter() {
            if let Item::Value(v) = value {
                doc[key] = Item::Value(v.clone());
            }
        }

        Ok(doc.to_string())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            user_agent: Self::DEFAULT_USER_AGENT.to_string(),
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(
            config.base_url,
            "https://ic56xdo6p-test-api-rn.herokuapp.com"
        );
    }

    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "base_url = \"http://localhost:3000\"\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.log_level, "info");
        assert!(config.user_agent.starts_with("sesame/"));
    }

    #[test]
    fn test_load_invalid_toml_reports_path() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "base_url = [").unwrap();

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn test_init_creates_config_with_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        assert!(config_path.exists());
        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("base_url ="));
        assert!(contents.contains("# user_agent ="));

        let loaded = Config::load_from(&config_path).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "# existing").unwrap();

        let err = Config::init(&config_path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&config_path).unwrap(), "# existing");
    }

    #[test]
    fn test_generate_keeps_comments_and_defaults() {
        let generated = Config::generate().unwrap();
        assert!(generated.contains("# sesame configuration"));

        let parsed: Config = toml::from_str(&generated).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_base_url_parses_origin() {
        let config = Config {
            base_url: "http://127.0.0.1:8080".to_string(),
            ..Config::default()
        };
        let url = config.base_url().unwrap();
        assert_eq!(url.host_str(), Some("127.0.0.1"));
        assert_eq!(url.port(), Some(8080));
    }

    #[test]
    fn test_base_url_rejects_garbage_and_other_schemes() {
        let config = Config {
            base_url: "not a url".to_string(),
            ..Config::default()
        };
        assert!(config.base_url().is_err());

        let config = Config {
            base_url: "ftp://example.com".to_string(),
            ..Config::default()
        };
        let err = config.base_url().unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }
}
