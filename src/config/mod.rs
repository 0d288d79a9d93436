mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/scorecard/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("scorecard")
}

/// Get the default config file path (~/.config/scorecard/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file
///
/// With an explicit `path`, a missing file is an error. With the default
/// path, a missing file just means defaults: every key is optional.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let (config_path, explicit) = match path {
        Some(p) => (p, true),
        None => (get_config_path(), false),
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_explicit_missing_path_is_error() {
        let missing = env::temp_dir().join("scorecard_test_no_such_config.yaml");
        let _ = fs::remove_file(&missing);
        assert!(load_config(Some(missing)).is_err());
    }

    #[test]
    fn test_load_explicit_config() {
        let path = env::temp_dir().join("scorecard_test_config.yaml");
        fs::write(&path, "data_dir: /tmp/scorecard-data\ncurrency: XAF\n").unwrap();

        let config = load_config(Some(path.clone())).unwrap();
        assert_eq!(
            config.data_dir.as_deref(),
            Some(std::path::Path::new("/tmp/scorecard-data"))
        );
        assert_eq!(config.currency.as_deref(), Some("XAF"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_config_is_error() {
        let path = env::temp_dir().join("scorecard_test_bad_config.yaml");
        fs::write(&path, "data_dir: [not: a: path\n").unwrap();
        assert!(load_config(Some(path.clone())).is_err());
        let _ = fs::remove_file(&path);
    }
}
