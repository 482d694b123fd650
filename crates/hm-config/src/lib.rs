//! Configuration management for hyper-marked.
//!
//! Parses `hyper-marked.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## File Format
//!
//! ```toml
//! [page]
//! title = "Handbook"
//! css_file = "theme.css"
//! no_default_styles = false
//! before_head_end = '<link rel="icon" href="/favicon.ico">'
//! after_body_start = "<header>Handbook</header>"
//! before_body_end = "<footer>${FOOTER_TEXT:-}</footer>"
//!
//! [renderer]
//! heading_ids = true
//! mangle = false
//! gfm = true
//! smart_punctuation = false
//! ```
//!
//! ## Environment Variable Expansion
//!
//! String values in `[page]` support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use hm_renderer::RendererOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override page title.
    pub title: Option<String>,
    /// Override custom CSS file.
    pub css_file: Option<PathBuf>,
    /// Override the default stylesheet switch.
    pub no_default_styles: Option<bool>,
    /// Override markup injected before `</head>`.
    pub before_head_end: Option<String>,
    /// Override markup injected after `<body>`.
    pub after_body_start: Option<String>,
    /// Override markup injected before `</body>`.
    pub before_body_end: Option<String>,
    /// Override heading id generation.
    pub heading_ids: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "hyper-marked.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Page configuration (paths are relative strings from TOML).
    page: PageConfigRaw,
    /// Options passed through to the markdown renderer.
    pub renderer: RendererOptions,

    /// Resolved page configuration (set after loading).
    #[serde(skip)]
    pub page_resolved: PageConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Raw page configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct PageConfigRaw {
    title: Option<String>,
    css_file: Option<String>,
    no_default_styles: Option<bool>,
    before_head_end: Option<String>,
    after_body_start: Option<String>,
    before_body_end: Option<String>,
}

/// Resolved page configuration with absolute paths.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// Page title override.
    pub title: Option<String>,
    /// Custom CSS file to append to the page styles.
    pub css_file: Option<PathBuf>,
    /// Whether the built-in stylesheet is disabled.
    pub no_default_styles: bool,
    /// Markup injected before `</head>`.
    pub before_head_end: Option<String>,
    /// Markup injected after `<body>`.
    pub after_body_start: Option<String>,
    /// Markup injected before `</body>`.
    pub before_body_end: Option<String>,
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
        /// Config field path (e.g., "`page.title`").
        field: String,
        /// Error message (e.g., "${`SITE_TITLE`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `hyper-marked.toml` in current directory and parents.
    /// Without any file the defaults are used.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
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
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        let page = &mut self.page_resolved;
        if let Some(title) = &settings.title {
            page.title = Some(title.clone());
        }
        if let Some(css_file) = &settings.css_file {
            page.css_file = Some(css_file.clone());
        }
        if let Some(no_default_styles) = settings.no_default_styles {
            page.no_default_styles = no_default_styles;
        }
        if let Some(html) = &settings.before_head_end {
            page.before_head_end = Some(html.clone());
        }
        if let Some(html) = &settings.after_body_start {
            page.after_body_start = Some(html.clone());
        }
        if let Some(html) = &settings.before_body_end {
            page.before_body_end = Some(html.clone());
        }
        if let Some(heading_ids) = settings.heading_ids {
            self.renderer.heading_ids = heading_ids;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
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

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir)?;
        config.config_path = Some(path.to_path_buf());

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        let page = &mut self.page;
        expand::expand_opt(&mut page.title, "page.title")?;
        expand::expand_opt(&mut page.css_file, "page.css_file")?;
        expand::expand_opt(&mut page.before_head_end, "page.before_head_end")?;
        expand::expand_opt(&mut page.after_body_start, "page.after_body_start")?;
        expand::expand_opt(&mut page.before_body_end, "page.before_body_end")?;
        Ok(())
    }

    /// Resolve relative paths against the config directory.
    ///
    /// Validates that `css_file`, when given, is not empty.
    fn resolve_paths(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        if let Some(css_file) = &self.page.css_file {
            require_non_empty(css_file, "page.css_file")?;
        }

        let page = &self.page;
        self.page_resolved = PageConfig {
            title: page.title.clone(),
            css_file: page.css_file.as_deref().map(|f| config_dir.join(f)),
            no_default_styles: page.no_default_styles.unwrap_or(false),
            before_head_end: page.before_head_end.clone(),
            after_body_start: page.after_body_start.clone(),
            before_body_end: page.before_body_end.clone(),
        };

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.page_resolved, PageConfig::default());
        assert_eq!(config.renderer, RendererOptions::default());
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.renderer, RendererOptions::default());
        assert!(config.page.title.is_none());
    }

    #[test]
    fn test_parse_page_config() {
        let toml = r#"
[page]
title = "Handbook"
css_file = "theme.css"
no_default_styles = true
before_head_end = '<link rel="icon" href="/favicon.ico">'
after_body_start = "<header>Top</header>"
before_body_end = "<footer>Bottom</footer>"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project")).unwrap();

        assert_eq!(
            config.page_resolved,
            PageConfig {
                title: Some("Handbook".to_owned()),
                css_file: Some(PathBuf::from("/project/theme.css")),
                no_default_styles: true,
                before_head_end: Some(r#"<link rel="icon" href="/favicon.ico">"#.to_owned()),
                after_body_start: Some("<header>Top</header>".to_owned()),
                before_body_end: Some("<footer>Bottom</footer>".to_owned()),
            }
        );
    }

    #[test]
    fn test_parse_partial_renderer_keeps_defaults() {
        let toml = r"
[renderer]
heading_ids = true
";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.renderer.heading_ids);
        assert!(!config.renderer.mangle);
        assert!(config.renderer.gfm);
        assert!(!config.renderer.smart_punctuation);
    }

    #[test]
    fn test_parse_full_renderer() {
        let toml = r"
[renderer]
heading_ids = true
mangle = true
gfm = false
smart_punctuation = true
";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.renderer,
            RendererOptions {
                heading_ids: true,
                mangle: true,
                gfm: false,
                smart_punctuation: true,
            }
        );
    }

    #[test]
    fn test_parse_invalid_type() {
        let toml = r#"
[renderer]
gfm = "yes"
"#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_empty_css_file_is_invalid() {
        let toml = r#"
[page]
css_file = ""
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.resolve_paths(Path::new("/project")).unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        assert!(err.to_string().contains("page.css_file"));
    }

    #[test]
    fn test_apply_cli_settings_title() {
        let mut config = Config::default();
        config.page_resolved.title = Some("From File".to_owned());
        let overrides = CliSettings {
            title: Some("From CLI".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.page_resolved.title.as_deref(), Some("From CLI"));
        assert!(!config.page_resolved.no_default_styles); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_multiple() {
        let mut config = Config::default();
        let overrides = CliSettings {
            css_file: Some(PathBuf::from("/custom/style.css")),
            no_default_styles: Some(true),
            before_head_end: Some("<meta name=\"x\">".to_owned()),
            after_body_start: Some("<nav></nav>".to_owned()),
            before_body_end: Some("<script></script>".to_owned()),
            heading_ids: Some(true),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.page_resolved.css_file,
            Some(PathBuf::from("/custom/style.css"))
        );
        assert!(config.page_resolved.no_default_styles);
        assert_eq!(
            config.page_resolved.before_head_end.as_deref(),
            Some("<meta name=\"x\">")
        );
        assert_eq!(config.page_resolved.after_body_start.as_deref(), Some("<nav></nav>"));
        assert_eq!(
            config.page_resolved.before_body_end.as_deref(),
            Some("<script></script>")
        );
        assert!(config.renderer.heading_ids);
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default();
        config.page_resolved.title = Some("Kept".to_owned());
        config.renderer.heading_ids = true;

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.page_resolved.title.as_deref(), Some("Kept"));
        assert!(config.renderer.heading_ids);
    }

    #[test]
    fn test_expand_env_vars_page() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("HM_TEST_SITE_TITLE", "Expanded");
        }

        let toml = r#"
[page]
title = "${HM_TEST_SITE_TITLE}"
before_body_end = "<footer>${HM_TEST_FOOTER_UNSET:-none}</footer>"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.page.title.as_deref(), Some("Expanded"));
        assert_eq!(
            config.page.before_body_end.as_deref(),
            Some("<footer>none</footer>")
        );

        unsafe {
            std::env::remove_var("HM_TEST_SITE_TITLE");
        }
    }

    #[test]
    fn test_expand_env_vars_missing() {
        let toml = r#"
[page]
css_file = "${HM_TEST_CSS_DIR_UNSET}/theme.css"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { ref field, .. } if field == "page.css_file"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            "[page]\ntitle = \"Loaded\"\ncss_file = \"site.css\"\n\n[renderer]\nmangle = true\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.page_resolved.title.as_deref(), Some("Loaded"));
        assert_eq!(config.page_resolved.css_file, Some(dir.path().join("site.css")));
        assert!(config.renderer.mangle);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_with_cli_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[page]\ntitle = \"File Title\"\n").unwrap();

        let settings = CliSettings {
            title: Some("CLI Title".to_owned()),
            heading_ids: Some(true),
            ..Default::default()
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.page_resolved.title.as_deref(), Some("CLI Title"));
        assert!(config.renderer.heading_ids);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[page\ntitle = ").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
