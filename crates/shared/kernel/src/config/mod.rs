use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix for environment overrides (`KENNEL__DOG__OBEDIENCE=3`).
pub const ENV_PREFIX: &str = "KENNEL";

/// Base name of the config file looked up when no path is given.
pub const DEFAULT_CONFIG_NAME: &str = "kennel";

/// Custom error type for config loading.
#[kennel_derive::kennel_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads layered configuration: a file source overlaid with environment variables.
///
/// 1. **Base File**: the given path is required to exist. Without a path, a
///    `kennel.{toml,json,yaml,...}` file in the working directory is used if present.
/// 2. **Environment Overrides**: variables prefixed with `KENNEL__`, nested with
///    double underscores (`KENNEL__SCHOOL__CURRICULUM=fake_dead,shake_hand`).
///    The curriculum accepts a comma-separated list.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicitly named file is missing or the
/// merged sources do not deserialize into `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_NAME), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake)
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("school.curriculum"),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
