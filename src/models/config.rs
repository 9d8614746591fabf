//! Configuration model loaded from external sources.

use std::path::PathBuf;

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across the prediction apps.
pub struct AppConfig {
    pub artifacts_dir: PathBuf,
    pub omdb_base_url: String,
    pub omdb_api_key: String,
}

impl AppConfig {
    /// Load configuration from an optional file, overridable through
    /// `PREDICTORS_*` environment variables.
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("artifacts_dir", "artifacts")?
            .set_default("omdb_base_url", "http://www.omdbapi.com/")?
            .set_default("omdb_api_key", "your_api_key_here")?
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("PREDICTORS"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::AppConfig;

    #[test]
    fn defaults_apply_when_no_file_is_present() {
        let config = AppConfig::load("definitely-missing-config").expect("defaults should load");
        assert_eq!(config.artifacts_dir, std::path::PathBuf::from("artifacts"));
        assert_eq!(config.omdb_base_url, "http://www.omdbapi.com/");
    }
}
