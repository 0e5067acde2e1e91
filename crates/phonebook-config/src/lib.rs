use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "phonebook";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_PROMPT: &str = "> ";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub prompt: String,
    pub show_listing_after_change: bool,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    pub phone_case_sensitive: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            show_listing_after_change: true,
            search: SearchConfig::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid prompt value: {0:?}")]
    InvalidPrompt(String),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    prompt: Option<String>,
    show_listing_after_change: Option<bool>,
    search: Option<SearchFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SearchFile {
    phone_case_sensitive: Option<bool>,
}

/// Loads the file named on the command line, or the default file when one
/// exists. Without either the defaults apply.
pub fn load(explicit: Option<PathBuf>) -> Result<AppConfig> {
    if let Some(path) = explicit {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidConfigPath(path));
        }
        return read_config(&path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => read_config(&path),
        _ => Ok(AppConfig::default()),
    }
}

/// `$XDG_CONFIG_HOME/phonebook/config.toml`, falling back to `~/.config`.
pub fn default_config_path() -> Option<PathBuf> {
    let base = match env::var_os("XDG_CONFIG_HOME").filter(|dir| !dir.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => dirs::home_dir()?.join(".config"),
    };
    Some(base.join(APP_DIR).join(CONFIG_FILENAME))
}

fn read_config(path: &Path) -> Result<AppConfig> {
    let contents = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ConfigError::MissingConfigFile(path.to_path_buf()),
        _ => ConfigError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    merge_config(parsed)
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(prompt) = parsed.prompt {
        if prompt.trim().is_empty() || prompt.contains(['\n', '\r']) {
            return Err(ConfigError::InvalidPrompt(prompt));
        }
        config.prompt = prompt;
    }

    if let Some(show) = parsed.show_listing_after_change {
        config.show_listing_after_change = show;
    }

    if let Some(search) = parsed.search {
        if let Some(case_sensitive) = search.phone_case_sensitive {
            config.search.phone_case_sensitive = case_sensitive;
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{load, merge_config, read_config, ConfigFile, SearchFile};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            prompt: Some("phonebook> ".to_string()),
            show_listing_after_change: Some(false),
            search: Some(SearchFile {
                phone_case_sensitive: Some(true),
            }),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.prompt, "phonebook> ");
        assert!(!merged.show_listing_after_change);
        assert!(merged.search.phone_case_sensitive);
    }

    #[test]
    fn merge_config_rejects_blank_prompt() {
        let parsed = ConfigFile {
            prompt: Some("  ".to_string()),
            show_listing_after_change: None,
            search: None,
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(err.to_string().contains("invalid prompt"));
    }

    #[test]
    fn merge_config_rejects_multiline_prompt() {
        let parsed = ConfigFile {
            prompt: Some("a\nb".to_string()),
            show_listing_after_change: None,
            search: None,
        };
        assert!(merge_config(parsed).is_err());
    }

    #[test]
    fn load_requires_explicit_file() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load(Some(missing)).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn load_rejects_empty_explicit_path() {
        let err = load(Some(PathBuf::new())).unwrap_err();
        assert!(err.to_string().contains("invalid config path"));
    }

    #[test]
    fn read_config_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "prompt = \"pb> \"\n[search]\nphone_case_sensitive = true\n",
        )
        .expect("write config");

        let config = load(Some(path)).expect("load");
        assert_eq!(config.prompt, "pb> ");
        assert!(config.show_listing_after_change);
        assert!(config.search.phone_case_sensitive);
    }

    #[test]
    fn read_config_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "colour = \"red\"\n").expect("write config");

        let err = read_config(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse config file"));
    }
}
