//! Configuration management for design elements.
//!
//! Parses `design-elements.toml` with serde and discovers the file in the
//! current directory or any of its parents. CLI overrides are applied via
//! [`CliSettings`] after loading.
//!
//! ## Environment Variable Expansion
//!
//! These string settings accept `${VAR}` and `${VAR:-default}`:
//!
//! - `linktree.project`
//! - `linktree.root_doc`
//! - `linktree.strip_from_label`

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "design-elements.toml";

/// Default capacity of the page title cache.
pub const DEFAULT_TITLE_CAPACITY: usize = 8192;

/// CLI settings that override configuration file values.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the current project identity.
    pub project: Option<String>,
    /// Override the root document name.
    pub root_doc: Option<String>,
    /// Override the toctree depth.
    pub maxdepth: Option<i32>,
    /// Enable or disable page title lookups.
    pub titles_enabled: Option<bool>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Reference classification settings.
    pub references: ReferencesConfig,
    /// Link tree settings.
    pub linktree: LinkTreeConfig,
    /// Page title lookup settings.
    pub titles: TitlesConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Scheme sets driving reference classification.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ReferencesConfig {
    /// Schemes treated as external URLs.
    pub url_schemes: Vec<String>,
    /// Schemes treated as namespaced (MyST-style) references.
    pub internal_schemes: Vec<String>,
}

impl Default for ReferencesConfig {
    fn default() -> Self {
        Self {
            url_schemes: ["http", "https", "mailto", "ftp"]
                .map(str::to_owned)
                .to_vec(),
            internal_schemes: ["inv", "path", "project"].map(str::to_owned).to_vec(),
        }
    }
}

/// Link tree settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LinkTreeConfig {
    /// Name of the project being built; its section gets the `current` class.
    pub project: Option<String>,
    /// Root document of the project.
    pub root_doc: String,
    /// Substring removed from labels taken from inventories.
    pub strip_from_label: Option<String>,
    /// Toctree depth, `-1` for unlimited.
    pub maxdepth: i32,
}

impl Default for LinkTreeConfig {
    fn default() -> Self {
        Self {
            project: None,
            root_doc: "index".to_owned(),
            strip_from_label: None,
            maxdepth: -1,
        }
    }
}

/// Page title lookup settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TitlesConfig {
    /// Whether URL references may fetch page titles.
    pub enabled: bool,
    /// Maximum number of cached titles.
    pub capacity: usize,
    /// HTTP timeout in seconds. Unset means the client default.
    pub timeout_secs: Option<u64>,
}

impl Default for TitlesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            capacity: DEFAULT_TITLE_CAPACITY,
            timeout_secs: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`linktree.project`").
        field: String,
        /// Error message (e.g., "${`PROJECT`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration with optional CLI settings.
    ///
    /// Uses `config_path` when given, otherwise searches for
    /// `design-elements.toml` in the current directory and its parents, and
    /// falls back to defaults when nothing is found.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist, or if
    /// parsing, expansion or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Parse configuration from a TOML string, expanding and validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing, expansion or validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(project) = &settings.project {
            self.linktree.project = Some(project.clone());
        }
        if let Some(root_doc) = &settings.root_doc {
            self.linktree.root_doc.clone_from(root_doc);
        }
        if let Some(maxdepth) = settings.maxdepth {
            self.linktree.maxdepth = maxdepth;
        }
        if let Some(enabled) = settings.titles_enabled {
            self.titles.enabled = enabled;
        }
    }

    /// Search for the config file in the current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        discover_from(&current)
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_references()?;
        self.validate_linktree()?;
        self.validate_titles()?;
        Ok(())
    }

    fn validate_references(&self) -> Result<(), ConfigError> {
        let refs = &self.references;
        require_schemes(&refs.url_schemes, "references.url_schemes")?;
        require_schemes(&refs.internal_schemes, "references.internal_schemes")?;

        if let Some(shared) = refs
            .internal_schemes
            .iter()
            .find(|scheme| refs.url_schemes.contains(scheme))
        {
            return Err(ConfigError::Validation(format!(
                "scheme '{shared}' cannot be both internal and a URL scheme"
            )));
        }
        // Normalized cross-project references use `inv:`.
        if !refs.internal_schemes.iter().any(|s| s == "inv") {
            return Err(ConfigError::Validation(
                "references.internal_schemes must contain 'inv'".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_linktree(&self) -> Result<(), ConfigError> {
        if self.linktree.root_doc.is_empty() {
            return Err(ConfigError::Validation(
                "linktree.root_doc cannot be empty".to_owned(),
            ));
        }
        if self.linktree.maxdepth < -1 {
            return Err(ConfigError::Validation(
                "linktree.maxdepth must be -1 (unlimited) or greater".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_titles(&self) -> Result<(), ConfigError> {
        if self.titles.capacity == 0 {
            return Err(ConfigError::Validation(
                "titles.capacity must be greater than 0".to_owned(),
            ));
        }
        if self.titles.timeout_secs == Some(0) {
            return Err(ConfigError::Validation(
                "titles.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_opt(&mut self.linktree.project, "linktree.project")?;
        self.linktree.root_doc = expand::expand_env(&self.linktree.root_doc, "linktree.root_doc")?;
        expand::expand_opt(
            &mut self.linktree.strip_from_label,
            "linktree.strip_from_label",
        )?;
        Ok(())
    }
}

/// Walk from `start` upwards looking for the config file.
fn discover_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Require a non-empty list of well-formed scheme names.
fn require_schemes(schemes: &[String], field: &str) -> Result<(), ConfigError> {
    if schemes.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    for scheme in schemes {
        if !is_scheme_name(scheme) {
            return Err(ConfigError::Validation(format!(
                "{field} contains invalid scheme '{scheme}'"
            )));
        }
    }
    Ok(())
}

/// Scheme grammar: a letter, then letters, digits, `+`, `.` or `-`.
fn is_scheme_name(value: &str) -> bool {
    let mut chars = value.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(
            config.references.url_schemes,
            vec!["http", "https", "mailto", "ftp"]
        );
        assert_eq!(
            config.references.internal_schemes,
            vec!["inv", "path", "project"]
        );
        assert_eq!(config.linktree.root_doc, "index");
        assert_eq!(config.linktree.maxdepth, -1);
        assert!(config.linktree.project.is_none());
        assert!(config.titles.enabled);
        assert_eq!(config.titles.capacity, DEFAULT_TITLE_CAPACITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.linktree.root_doc, "index");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[references]
url_schemes = ["https", "sftp"]
internal_schemes = ["inv"]

[linktree]
project = "CrateDB"
root_doc = "start"
strip_from_label = " - CrateDB"
maxdepth = 2

[titles]
enabled = false
capacity = 16
timeout_secs = 5
"#;
        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.references.url_schemes, vec!["https", "sftp"]);
        assert_eq!(config.references.internal_schemes, vec!["inv"]);
        assert_eq!(config.linktree.project.as_deref(), Some("CrateDB"));
        assert_eq!(config.linktree.root_doc, "start");
        assert_eq!(
            config.linktree.strip_from_label.as_deref(),
            Some(" - CrateDB")
        );
        assert_eq!(config.linktree.maxdepth, 2);
        assert!(!config.titles.enabled);
        assert_eq!(config.titles.capacity, 16);
        assert_eq!(config.titles.timeout_secs, Some(5));
    }

    #[test]
    fn test_project_env_expansion() {
        // SAFETY: the variable name is unique to this test
        unsafe {
            std::env::set_var("SDE_CONFIG_TEST_PROJECT", "Guide");
        }
        let toml = r#"
[linktree]
project = "${SDE_CONFIG_TEST_PROJECT}"
"#;
        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.linktree.project.as_deref(), Some("Guide"));
        unsafe {
            std::env::remove_var("SDE_CONFIG_TEST_PROJECT");
        }
    }

    #[test]
    fn test_overlapping_schemes_rejected() {
        let toml = r#"
[references]
url_schemes = ["https", "inv"]
internal_schemes = ["inv"]
"#;
        let err = Config::from_toml(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("'inv'"));
    }

    #[test]
    fn test_internal_schemes_require_inv() {
        let toml = r#"
[references]
internal_schemes = ["path", "project"]
"#;
        let err = Config::from_toml(toml).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: references.internal_schemes must contain 'inv'"
        );
    }

    #[test]
    fn test_invalid_scheme_rejected() {
        let toml = r#"
[references]
url_schemes = ["1http"]
"#;
        let err = Config::from_toml(toml).unwrap_err();
        assert!(err.to_string().contains("invalid scheme '1http'"));
    }

    #[test]
    fn test_empty_schemes_rejected() {
        let toml = r"
[references]
internal_schemes = []
";
        let err = Config::from_toml(toml).unwrap_err();
        assert!(err.to_string().contains("references.internal_schemes"));
    }

    #[test]
    fn test_maxdepth_below_unlimited_rejected() {
        let toml = r"
[linktree]
maxdepth = -2
";
        assert!(Config::from_toml(toml).is_err());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let toml = r"
[titles]
capacity = 0
";
        let err = Config::from_toml(toml).unwrap_err();
        assert!(err.to_string().contains("titles.capacity"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let toml = r"
[titles]
timeout_secs = 0
";
        assert!(Config::from_toml(toml).is_err());
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default();
        let overrides = CliSettings {
            project: Some("CrateDB".to_owned()),
            maxdepth: Some(1),
            titles_enabled: Some(false),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.linktree.project.as_deref(), Some("CrateDB"));
        assert_eq!(config.linktree.maxdepth, 1);
        assert!(!config.titles.enabled);
        assert_eq!(config.linktree.root_doc, "index"); // Unchanged
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/design-elements.toml")), None)
            .unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_explicit_file_records_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[linktree]\nproject = \"Docs\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.linktree.project.as_deref(), Some("Docs"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_discover_from_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();
        let nested = dir.path().join("docs").join("guide");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(discover_from(&nested), Some(path));
    }

    #[test]
    fn test_scheme_name_grammar() {
        assert!(is_scheme_name("svn+ssh"));
        assert!(is_scheme_name("x-custom.v2"));
        assert!(!is_scheme_name(""));
        assert!(!is_scheme_name("-http"));
        assert!(!is_scheme_name("ht_tp"));
    }
}
