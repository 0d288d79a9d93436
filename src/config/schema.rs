use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Where clients.json and decisions.json live.
    /// Defaults to the config directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Display-only currency label for amounts (e.g. "XAF", "EUR").
    /// No rate logic depends on it.
    #[serde(default)]
    pub currency: Option<String>,
}

impl Config {
    /// Resolved data directory.
    pub fn resolve_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(crate::config::get_config_dir)
    }

    pub fn clients_path(&self) -> PathBuf {
        self.resolve_data_dir().join("clients.json")
    }

    pub fn decisions_path(&self) -> PathBuf {
        self.resolve_data_dir().join("decisions.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert!(config.data_dir.is_none());
        assert!(config.currency.is_none());
    }

    #[test]
    fn test_data_dir_override() {
        let config = Config {
            data_dir: Some(PathBuf::from("/var/lib/scorecard")),
            currency: None,
        };
        assert_eq!(
            config.clients_path(),
            PathBuf::from("/var/lib/scorecard/clients.json")
        );
        assert_eq!(
            config.decisions_path(),
            PathBuf::from("/var/lib/scorecard/decisions.json")
        );
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result: Result<Config, _> = serde_saphyr::from_str("annual_rate: 0.05\n");
        assert!(result.is_err());
    }
}
