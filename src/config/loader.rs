//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::RouterConfig;
use crate::config::validation::{validate_config, ValidationErrors};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<RouterConfig, ConfigError> {
    let config: RouterConfig = toml::from_str(content)?;
    validate_config(&config)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RouterConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;

    tracing::debug!(
        path = %path.display(),
        routes = config.routes.len(),
        redirects = config.redirects.len(),
        "Configuration file loaded"
    );

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validation::ValidationError;
    use crate::routing::history::HistoryMode;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [history]
            mode = "hash"
            base = "/forms"

            [[routes]]
            path = "/profile"
            view = "profile"
            name = "profile"

            [[routes]]
            path = "/feedback"
            view = "feedback"
            name = "feedback"

            [[redirects]]
            from = "/"
            to = "/feedback"
            "#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.history.mode, HistoryMode::Hash);
        assert_eq!(config.history.base, "/forms");
        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.redirects[0].to, "/feedback");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_parse_error() {
        let result = parse_config("[[routes]\npath = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validation_error_is_fatal() {
        let result = parse_config(
            r#"
            [[routes]]
            path = "/order"
            view = "order"
            name = "order"

            [[redirects]]
            from = "/"
            to = "/profile"
            "#,
        );

        match result {
            Err(ConfigError::Validation(errors)) => assert_eq!(
                errors.errors(),
                &[ValidationError::RedirectTargetMissing { from: "/".into(), to: "/profile".into() }]
            ),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
