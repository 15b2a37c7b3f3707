// Configuration loading and parsing (statline.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Name of the configuration file inside `config/` and `defaults/`.
pub const CONFIG_FILE_NAME: &str = "statline.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

/// The fully assembled and validated configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub http_port: u16,
    pub ws_port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Path to the season-stats CSV. Relative paths resolve against the base
    /// directory.
    pub path: String,
    /// Write a synthetic sample file to `path` when it does not exist.
    #[serde(default)]
    pub generate_sample_if_missing: bool,
    #[serde(default)]
    pub sample_seed: Option<u64>,
}

/// Initial control values for the dashboard page.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    pub default_stats: Vec<String>,
    pub radar_stats: Vec<String>,
    /// Season slider bounds used when the data has no `Season` column.
    pub fallback_season_min: i32,
    pub fallback_season_max: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Log to this file instead of stderr.
    #[serde(default)]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: default_log_filter(),
            file: None,
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_log_filter() -> String {
    "statline=info,warn".to_string()
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/statline.toml` relative to `base_dir`.
///
/// Does not touch `defaults/`; `load_config` copies missing files first.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE_NAME);
    let text = read_file(&path)?;
    let config = parse_config(&text, &path)?;
    validate(&config)?;
    Ok(config)
}

/// Parse config text without touching the filesystem. `path` is only used
/// for error reporting.
pub fn parse_config(text: &str, path: &Path) -> Result<Config, ConfigError> {
    toml::from_str(text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Copy every file in `defaults/` that has no counterpart in `config/`.
///
/// Existing config files always win and `*.example` files are never copied.
/// A missing `defaults/` is fine as long as `config/` exists. Returns the
/// paths written.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    match (defaults_dir.is_dir(), config_dir.is_dir()) {
        (false, true) => return Ok(Vec::new()),
        (false, false) => {
            return Err(copy_error(format!(
                "no defaults/ or config/ directory under {}",
                base_dir.display()
            )))
        }
        _ => {}
    }

    std::fs::create_dir_all(&config_dir)
        .map_err(|e| copy_error(format!("cannot create {}: {e}", config_dir.display())))?;

    let mut copied = Vec::new();
    for source in default_files(&defaults_dir)? {
        let Some(name) = source.file_name() else {
            continue;
        };
        let target = config_dir.join(name);
        if target.exists() {
            continue;
        }
        std::fs::copy(&source, &target).map_err(|e| {
            copy_error(format!(
                "cannot copy {} to {}: {e}",
                source.display(),
                target.display()
            ))
        })?;
        info!("Created {} from defaults", target.display());
        copied.push(target);
    }

    Ok(copied)
}

/// Copy missing defaults into `base_dir/config`, then load from there.
pub fn load_config(base_dir: &Path) -> Result<Config, ConfigError> {
    ensure_config_files(base_dir)?;
    load_config_from(base_dir)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Regular files in `dir`, sorted, without `*.example` templates.
fn default_files(dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let read_err = |e: std::io::Error| copy_error(format!("cannot read {}: {e}", dir.display()));
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        let is_template = path.extension().is_some_and(|ext| ext == "example");
        if path.is_file() && !is_template {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn copy_error(message: String) -> ConfigError {
    ConfigError::DefaultsCopyError { message }
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check cross-field constraints. Also run after CLI overrides are applied.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    let server = &config.server;
    let port_fields: &[(&str, u16)] = &[
        ("server.http_port", server.http_port),
        ("server.ws_port", server.ws_port),
    ];
    for (name, val) in port_fields {
        if *val == 0 {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: "must be greater than 0".into(),
            });
        }
    }

    if server.http_port == server.ws_port {
        return Err(ConfigError::ValidationError {
            field: "server.ws_port".into(),
            message: format!("must differ from server.http_port ({})", server.http_port),
        });
    }

    if server.host.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "server.host".into(),
            message: "must not be empty".into(),
        });
    }

    if config.data.path.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "data.path".into(),
            message: "must not be empty".into(),
        });
    }

    let dash = &config.dashboard;
    if dash.fallback_season_min > dash.fallback_season_max {
        return Err(ConfigError::ValidationError {
            field: "dashboard.fallback_season_min".into(),
            message: format!(
                "must not exceed fallback_season_max ({} > {})",
                dash.fallback_season_min, dash.fallback_season_max
            ),
        });
    }

    let stat_lists: &[(&str, &[String])] = &[
        ("dashboard.default_stats", &dash.default_stats),
        ("dashboard.radar_stats", &dash.radar_stats),
    ];
    for (name, stats) in stat_lists {
        if stats.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: "stat names must not be empty".into(),
            });
        }
    }

    if dash.radar_stats.is_empty() {
        return Err(ConfigError::ValidationError {
            field: "dashboard.radar_stats".into(),
            message: "must list at least one stat".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    /// The repository-level `defaults/` directory, two levels above this crate.
    fn repo_defaults() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../defaults")
    }

    fn fresh_dir(name: &str) -> PathBuf {
        let tmp = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(tmp.join("config")).unwrap();
        tmp
    }

    fn default_text() -> String {
        fs::read_to_string(repo_defaults().join(CONFIG_FILE_NAME)).unwrap()
    }

    fn write_config(dir: &Path, text: &str) {
        fs::write(dir.join("config").join(CONFIG_FILE_NAME), text).unwrap();
    }

    fn expect_validation_field(err: ConfigError, expected: &str) {
        match &err {
            ConfigError::ValidationError { field, .. } => assert_eq!(field, expected),
            other => panic!("expected ValidationError, got: {other}"),
        }
    }

    #[test]
    fn load_shipped_defaults() {
        let tmp = fresh_dir("statline_config_defaults");
        write_config(&tmp, &default_text());

        let config = load_config_from(&tmp).expect("shipped defaults should be valid");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.http_port, 8050);
        assert_eq!(config.server.ws_port, 8051);
        assert_eq!(config.data.path, "data/sample_baseball_data.csv");
        assert!(config.data.generate_sample_if_missing);
        assert_eq!(config.data.sample_seed, None);
        assert_eq!(config.dashboard.default_stats, vec!["OBP", "AVG", "SLUG"]);
        assert_eq!(config.dashboard.radar_stats, vec!["AVG", "OBP", "SLUG", "OPS"]);
        assert_eq!(config.dashboard.fallback_season_min, 2020);
        assert_eq!(config.dashboard.fallback_season_max, 2023);
        assert_eq!(config.logging.filter, "statline=info,warn");
        assert!(config.logging.file.is_none());

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn logging_section_is_optional() {
        let text = r#"
[server]
http_port = 9000
ws_port = 9001

[data]
path = "stats.csv"

[dashboard]
default_stats = []
radar_stats = ["AVG"]
fallback_season_min = 2020
fallback_season_max = 2020
"#;
        let config = parse_config(text, Path::new("inline.toml")).unwrap();
        validate(&config).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(!config.data.generate_sample_if_missing);
        assert_eq!(config.logging.filter, "statline=info,warn");
    }

    #[test]
    fn rejects_zero_port() {
        let tmp = fresh_dir("statline_config_zero_port");
        write_config(&tmp, &default_text().replace("http_port = 8050", "http_port = 0"));

        let err = load_config_from(&tmp).unwrap_err();
        expect_validation_field(err, "server.http_port");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_shared_ports() {
        let tmp = fresh_dir("statline_config_shared_ports");
        write_config(&tmp, &default_text().replace("ws_port = 8051", "ws_port = 8050"));

        let err = load_config_from(&tmp).unwrap_err();
        expect_validation_field(err, "server.ws_port");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_reversed_fallback_seasons() {
        let tmp = fresh_dir("statline_config_reversed_seasons");
        write_config(
            &tmp,
            &default_text().replace("fallback_season_min = 2020", "fallback_season_min = 2030"),
        );

        let err = load_config_from(&tmp).unwrap_err();
        expect_validation_field(err, "dashboard.fallback_season_min");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_empty_data_path() {
        let tmp = fresh_dir("statline_config_empty_path");
        write_config(
            &tmp,
            &default_text().replace(
                "path = \"data/sample_baseball_data.csv\"",
                "path = \"  \"",
            ),
        );

        let err = load_config_from(&tmp).unwrap_err();
        expect_validation_field(err, "data.path");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn file_not_found_for_missing_config() {
        let tmp = fresh_dir("statline_config_missing");

        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::FileNotFound { path } => assert!(path.ends_with(CONFIG_FILE_NAME)),
            other => panic!("expected FileNotFound, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn parse_error_for_invalid_toml() {
        let tmp = fresh_dir("statline_config_invalid");
        write_config(&tmp, "this is not valid [[[ toml");

        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::ParseError { path, .. } => assert!(path.ends_with(CONFIG_FILE_NAME)),
            other => panic!("expected ParseError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn ensure_config_files_copies_missing_files() {
        let tmp = std::env::temp_dir().join("statline_config_ensure_copies");
        let _ = fs::remove_dir_all(&tmp);
        let defaults_dir = tmp.join("defaults");
        fs::create_dir_all(&defaults_dir).unwrap();

        fs::write(defaults_dir.join(CONFIG_FILE_NAME), default_text()).unwrap();
        fs::write(defaults_dir.join("statline.toml.example"), "# example\n").unwrap();

        let copied = ensure_config_files(&tmp).expect("should succeed");
        assert_eq!(copied, vec![tmp.join("config").join(CONFIG_FILE_NAME)]);
        assert!(tmp.join("config").join(CONFIG_FILE_NAME).exists());
        assert!(!tmp.join("config/statline.toml.example").exists());

        let config = load_config(&tmp).expect("copied defaults should load");
        assert_eq!(config.server.http_port, 8050);

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn ensure_config_files_skips_existing() {
        let tmp = std::env::temp_dir().join("statline_config_ensure_skips");
        let _ = fs::remove_dir_all(&tmp);
        let defaults_dir = tmp.join("defaults");
        let config_dir = tmp.join("config");
        fs::create_dir_all(&defaults_dir).unwrap();
        fs::create_dir_all(&config_dir).unwrap();

        fs::write(defaults_dir.join(CONFIG_FILE_NAME), default_text()).unwrap();
        fs::write(config_dir.join(CONFIG_FILE_NAME), "# custom\n").unwrap();

        assert!(ensure_config_files(&tmp).unwrap().is_empty());
        assert_eq!(
            fs::read_to_string(config_dir.join(CONFIG_FILE_NAME)).unwrap(),
            "# custom\n"
        );

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn config_dir_alone_is_enough() {
        let tmp = fresh_dir("statline_config_no_defaults");
        assert!(ensure_config_files(&tmp).unwrap().is_empty());
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn ensure_config_files_errors_when_both_dirs_missing() {
        let tmp = std::env::temp_dir().join("statline_config_both_missing");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&tmp).unwrap();

        let err = ensure_config_files(&tmp).unwrap_err();
        match &err {
            ConfigError::DefaultsCopyError { message } => {
                assert!(message.contains("no defaults/ or config/"));
            }
            other => panic!("expected DefaultsCopyError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }
}
