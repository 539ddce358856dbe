use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Prefix for environment overrides (`GEOFEED__OUTPUT__PRECISION=3`).
pub const ENV_PREFIX: &str = "GEOFEED";
/// Separator between nested keys in environment overrides.
pub const ENV_SEPARATOR: &str = "__";
/// Base name of the configuration file looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "geofeed";

/// Custom error type for config loading.
#[geofeed_derive::geofeed_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file with environment overrides on top.
///
/// 1. **Base File**: the given `path` is required to exist. Without a path, the
///    optional `geofeed` file (any format the `config` crate recognises, e.g.
///    `geofeed.toml`) is read from the working directory if present.
/// 2. **Environment Overrides**: variables prefixed with `GEOFEED__`. Nested keys
///    use double underscores (`GEOFEED__LOGGING__LEVEL` maps to `logging.level`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicitly requested file is missing,
/// a source is malformed, or the merged values do not deserialize into `T`.
///
/// # Example
/// ```rust,no_run
/// use geofeed_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     precision: usize,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_with_environment(path, environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
}

fn load_with_environment<T>(
    path: Option<impl AsRef<Path>>,
    environment: Environment,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    debug!(path = %effective_path.display(), required, "Loading configuration");

    let config = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(environment)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geofeed_domain::config::{AppConfig, OutputFormat};
    use std::fs;
    use tempfile::tempdir;

    fn fake_env(pairs: &[(&str, &str)]) -> Environment {
        let map = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        environment().source(Some(map))
    }

    #[test]
    fn file_values_are_loaded() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("geofeed.toml");
        fs::write(&path, "[output]\nformat = \"json\"\nprecision = 4\n")?;

        let cfg: AppConfig = load_with_environment(Some(&path), fake_env(&[]))?;
        assert_eq!(cfg.output.format, OutputFormat::Json);
        assert_eq!(cfg.output.precision, 4);
        assert_eq!(cfg.logging.level, "info");
        Ok(())
    }

    #[test]
    fn environment_overrides_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("geofeed.toml");
        fs::write(&path, "[logging]\nlevel = \"warn\"\n")?;

        let env = fake_env(&[
            ("GEOFEED__LOGGING__LEVEL", "debug"),
            ("GEOFEED__OUTPUT__PRECISION", "2"),
        ]);
        let cfg: AppConfig = load_with_environment(Some(&path), env)?;
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.output.precision, 2);
        Ok(())
    }

    #[test]
    fn unrelated_variables_are_ignored() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("geofeed.toml");
        fs::write(&path, "")?;

        let env = fake_env(&[("OTHER__OUTPUT__PRECISION", "1")]);
        let cfg: AppConfig = load_with_environment(Some(&path), env)?;
        assert_eq!(cfg.output.precision, 6);
        Ok(())
    }

    #[test]
    fn malformed_values_are_reported() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("geofeed.toml");
        fs::write(&path, "[output]\nprecision = \"many\"\n")?;

        let err = load_with_environment::<AppConfig>(Some(&path), fake_env(&[]))
            .expect_err("precision must be a number");
        assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
        Ok(())
    }
}
