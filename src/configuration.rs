use std::path::Path;

use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Configuration {
    pub application: ApplicationSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub name: String,
    pub log_level: String,
}

/// Reads `configuration/base.yaml` from the current directory, then applies
/// `APP_` prefixed environment overrides (e.g. `APP_APPLICATION__LOG_LEVEL=debug`).
pub fn get_config() -> Result<Configuration, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {e}"))
    })?;

    get_config_from(base_path.join("configuration"))
}

pub fn get_config_from(directory: impl AsRef<Path>) -> Result<Configuration, config::ConfigError> {
    load(directory.as_ref(), app_environment())
}

// `APP_APPLICATION__LOG_LEVEL` maps to `application.log_level`.
fn app_environment() -> config::Environment {
    config::Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
}

fn load(
    directory: &Path,
    environment: config::Environment,
) -> Result<Configuration, config::ConfigError> {
    let base_file = directory.join("base.yaml");

    let configs = config::Config::builder()
        .add_source(config::File::from(base_file).format(config::FileFormat::Yaml))
        .add_source(environment)
        .build()?;

    configs.try_deserialize::<Configuration>()
}
