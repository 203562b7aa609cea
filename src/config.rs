//! Application configuration: TOML file loading, CLI overrides, and defaults.
//!
//! Resolution order (first found wins, values merge/override):
//! 1. CLI flags (`--config`, `--tab`, `--log-file`, positional storage root)
//! 2. `$ARCHIVE_CONFIG` environment variable (path to config file)
//! 3. Project-local `.archive.toml` in the current working directory
//! 4. Global `~/.config/archive-browser/config.toml`
//! 5. Built-in defaults

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::browser::lister::{ListLimits, DEFAULT_MAX_FILES, DEFAULT_MAX_NAME_LEN};
use crate::browser::tabs::Tab;
use crate::error::{AppError, Result};

// ── Section configs ──────────────────────────────────────────────────────────

/// Storage backend settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Host directory that device paths (`/any/...`) resolve into.
    pub root: Option<String>,
}

/// Browser limits and start-up tab.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct BrowserConfig {
    /// Maximum entries kept per listing.
    pub max_files: Option<usize>,
    /// Maximum entry name length in bytes.
    pub max_name_len: Option<usize>,
    /// Tab shown on start: "favorites", "ibutton", "nfc", ...
    pub start_tab: Option<String>,
}

/// Application launcher settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoaderConfig {
    /// App name (e.g. "NFC") → host command started with the file path.
    pub apps: Option<HashMap<String, String>>,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LogConfig {
    /// `env_logger` filter, e.g. "info" or "archive=debug".
    pub level: Option<String>,
    /// Log file path.
    pub file: Option<String>,
}

// ── Top-level config ─────────────────────────────────────────────────────────

/// Top-level application configuration.
///
/// All fields are optional so that partial configs from different sources
/// can be merged together (CLI overrides file, file overrides defaults).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub browser: BrowserConfig,
    pub loader: LoaderConfig,
    pub log: LogConfig,
}

// ── Default constants ────────────────────────────────────────────────────────

/// Default storage root, relative to the working directory.
pub const DEFAULT_STORAGE_ROOT: &str = "sdcard";
/// Default log filter.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ── Config file locator ──────────────────────────────────────────────────────

/// Return the list of candidate config file paths in priority order.
///
/// Does NOT include the CLI `--config` path; that one is handled separately.
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var("ARCHIVE_CONFIG") {
        paths.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(".archive.toml"));
    }

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("archive-browser").join("config.toml"));
    }

    paths
}

/// Try to read and parse a TOML config file. Returns `None` if the file
/// doesn't exist or can't be parsed (with a warning printed to stderr).
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return None,
    };
    match toml::from_str::<AppConfig>(&content) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            eprintln!(
                "Warning: failed to parse config file {}: {}",
                path.display(),
                e
            );
            None
        }
    }
}

// ── Merge logic ──────────────────────────────────────────────────────────────

impl AppConfig {
    /// Merge `other` on top of `self`; `other`'s `Some` values win.
    pub fn merge(self, other: &AppConfig) -> AppConfig {
        AppConfig {
            storage: StorageConfig {
                root: other.storage.root.clone().or(self.storage.root),
            },
            browser: BrowserConfig {
                max_files: other.browser.max_files.or(self.browser.max_files),
                max_name_len: other.browser.max_name_len.or(self.browser.max_name_len),
                start_tab: other
                    .browser
                    .start_tab
                    .clone()
                    .or(self.browser.start_tab),
            },
            loader: LoaderConfig {
                apps: match (self.loader.apps, &other.loader.apps) {
                    (Some(mut base), Some(over)) => {
                        base.extend(over.iter().map(|(k, v)| (k.clone(), v.clone())));
                        Some(base)
                    }
                    (base, None) => base,
                    (None, Some(over)) => Some(over.clone()),
                },
            },
            log: LogConfig {
                level: other.log.level.clone().or(self.log.level),
                file: other.log.file.clone().or(self.log.file),
            },
        }
    }

    /// Load the final merged configuration.
    ///
    /// `cli_config_path` is an explicit config file path from `--config`.
    /// `cli_overrides` are partial overrides derived from CLI flags.
    pub fn load(cli_config_path: Option<&Path>, cli_overrides: Option<&AppConfig>) -> AppConfig {
        let mut config = AppConfig::default();

        // Walk in reverse so that highest-priority (env var) overwrites lower.
        let paths = candidate_paths();
        for path in paths.iter().rev() {
            if let Some(file_cfg) = load_file(path) {
                config = config.merge(&file_cfg);
            }
        }

        if let Some(cli_path) = cli_config_path {
            if let Some(file_cfg) = load_file(cli_path) {
                config = config.merge(&file_cfg);
            }
        }

        if let Some(overrides) = cli_overrides {
            config = config.merge(overrides);
        }

        config
    }

    // ── Convenience getters with built-in defaults ──────────────────────────

    /// Host directory backing device paths.
    pub fn storage_root(&self) -> PathBuf {
        PathBuf::from(
            self.storage
                .root
                .as_deref()
                .unwrap_or(DEFAULT_STORAGE_ROOT),
        )
    }

    /// Listing limits. Zero values are rejected.
    pub fn list_limits(&self) -> Result<ListLimits> {
        let max_files = self.browser.max_files.unwrap_or(DEFAULT_MAX_FILES);
        let max_name_len = self.browser.max_name_len.unwrap_or(DEFAULT_MAX_NAME_LEN);
        if max_files == 0 || max_name_len == 0 {
            return Err(AppError::Config(
                "max_files and max_name_len must be at least 1".into(),
            ));
        }
        Ok(ListLimits {
            max_files,
            max_name_len,
        })
    }

    /// Tab shown on start.
    pub fn start_tab(&self) -> Result<Tab> {
        match self.browser.start_tab.as_deref() {
            None => Ok(Tab::default()),
            Some(name) => {
                Tab::from_name(name).ok_or_else(|| AppError::Config(format!("unknown tab {}", name)))
            }
        }
    }

    /// App name → host command table.
    pub fn loader_apps(&self) -> HashMap<String, String> {
        self.loader.apps.clone().unwrap_or_default()
    }

    /// Log filter.
    pub fn log_level(&self) -> &str {
        self.log.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Log file, defaulting to the user cache directory.
    pub fn log_file(&self) -> PathBuf {
        match &self.log.file {
            Some(file) => PathBuf::from(file),
            None => dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("archive-browser")
                .join("archive.log"),
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_values() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.storage_root(), PathBuf::from("sdcard"));
        assert_eq!(cfg.list_limits().unwrap(), ListLimits::default());
        assert_eq!(cfg.start_tab().unwrap(), Tab::Favorites);
        assert!(cfg.loader_apps().is_empty());
        assert_eq!(cfg.log_level(), "info");
        assert!(cfg.log_file().ends_with("archive-browser/archive.log"));
    }

    #[test]
    fn test_toml_parsing_full() {
        let toml = r#"
[storage]
root = "/mnt/flipper"

[browser]
max_files = 50
max_name_len = 64
start_tab = "nfc"

[loader.apps]
NFC = "nfc-emulate"
"Sub-GHz" = "subghz-tx"

[log]
level = "debug"
file = "/tmp/archive.log"
"#;
        let cfg: AppConfig = toml::from_str(toml).expect("parse failed");
        assert_eq!(cfg.storage_root(), PathBuf::from("/mnt/flipper"));
        assert_eq!(
            cfg.list_limits().unwrap(),
            ListLimits {
                max_files: 50,
                max_name_len: 64
            }
        );
        assert_eq!(cfg.start_tab().unwrap(), Tab::Nfc);
        let apps = cfg.loader_apps();
        assert_eq!(apps.get("NFC").map(String::as_str), Some("nfc-emulate"));
        assert_eq!(apps.get("Sub-GHz").map(String::as_str), Some("subghz-tx"));
        assert_eq!(cfg.log_level(), "debug");
        assert_eq!(cfg.log_file(), PathBuf::from("/tmp/archive.log"));
    }

    #[test]
    fn test_toml_parsing_partial() {
        let toml = r#"
[browser]
max_files = 10
"#;
        let cfg: AppConfig = toml::from_str(toml).expect("parse failed");
        assert_eq!(cfg.list_limits().unwrap().max_files, 10);
        assert_eq!(cfg.list_limits().unwrap().max_name_len, 255);
        assert_eq!(cfg.start_tab().unwrap(), Tab::Favorites);
    }

    #[test]
    fn test_toml_parsing_empty() {
        let cfg: AppConfig = toml::from_str("").expect("parse failed");
        assert_eq!(cfg.storage_root(), PathBuf::from("sdcard"));
    }

    #[test]
    fn test_unknown_tab_is_config_error() {
        let cfg: AppConfig = toml::from_str("[browser]\nstart_tab = \"music\"").expect("parse");
        assert!(matches!(cfg.start_tab(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_zero_limits_rejected() {
        let cfg: AppConfig = toml::from_str("[browser]\nmax_files = 0").expect("parse");
        assert!(cfg.list_limits().is_err());
    }

    #[test]
    fn test_merge_overrides() {
        let base = AppConfig {
            storage: StorageConfig {
                root: Some("/base".into()),
            },
            browser: BrowserConfig {
                max_files: Some(20),
                max_name_len: Some(100),
                ..Default::default()
            },
            ..Default::default()
        };

        let over = AppConfig {
            browser: BrowserConfig {
                max_files: Some(40),
                ..Default::default()
            },
            ..Default::default()
        };

        let merged = base.merge(&over);
        assert_eq!(merged.storage_root(), PathBuf::from("/base")); // from base
        assert_eq!(merged.list_limits().unwrap().max_files, 40); // overridden
        assert_eq!(merged.list_limits().unwrap().max_name_len, 100); // from base
    }

    #[test]
    fn test_merge_combines_loader_tables() {
        let mut base_apps = HashMap::new();
        base_apps.insert("NFC".to_string(), "a".to_string());
        base_apps.insert("Infrared".to_string(), "ir".to_string());
        let mut over_apps = HashMap::new();
        over_apps.insert("NFC".to_string(), "b".to_string());

        let base = AppConfig {
            loader: LoaderConfig {
                apps: Some(base_apps),
            },
            ..Default::default()
        };
        let over = AppConfig {
            loader: LoaderConfig {
                apps: Some(over_apps),
            },
            ..Default::default()
        };
        let apps = base.merge(&over).loader_apps();
        assert_eq!(apps.get("NFC").map(String::as_str), Some("b"));
        assert_eq!(apps.get("Infrared").map(String::as_str), Some("ir"));
    }

    #[test]
    fn test_merge_none_does_not_clear_some() {
        let base = AppConfig {
            log: LogConfig {
                level: Some("warn".into()),
                file: Some("/var/log/a.log".into()),
            },
            ..Default::default()
        };
        let merged = base.merge(&AppConfig::default());
        assert_eq!(merged.log_level(), "warn");
        assert_eq!(merged.log_file(), PathBuf::from("/var/log/a.log"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg_path = dir.path().join("test-config.toml");
        let mut f = std::fs::File::create(&cfg_path).expect("create");
        writeln!(
            f,
            r#"
[storage]
root = "/mnt/sd"

[browser]
start_tab = "infrared"
"#
        )
        .expect("write");

        let cfg = load_file(&cfg_path).expect("load");
        assert_eq!(cfg.storage_root(), PathBuf::from("/mnt/sd"));
        assert_eq!(cfg.start_tab().unwrap(), Tab::Infrared);
        assert_eq!(cfg.list_limits().unwrap().max_files, 100);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_file(Path::new("/nonexistent/config.toml")).is_none());
    }

    #[test]
    fn test_load_invalid_toml_returns_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg_path = dir.path().join("bad.toml");
        std::fs::write(&cfg_path, "this is { not valid toml").expect("write");
        assert!(load_file(&cfg_path).is_none());
    }

    #[test]
    fn test_load_with_cli_overrides() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg_path = dir.path().join("config.toml");
        std::fs::write(
            &cfg_path,
            r#"
[storage]
root = "/from/file"

[browser]
max_files = 30
"#,
        )
        .expect("write");

        let cli_overrides = AppConfig {
            storage: StorageConfig {
                root: Some("/from/cli".into()),
            },
            ..Default::default()
        };

        let cfg = AppConfig::load(Some(&cfg_path), Some(&cli_overrides));
        assert_eq!(cfg.storage_root(), PathBuf::from("/from/cli"));
        assert_eq!(cfg.list_limits().unwrap().max_files, 30);
    }
}
