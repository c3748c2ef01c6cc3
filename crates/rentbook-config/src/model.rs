use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Stores operator-configurable preferences and metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_branding")]
    pub branding: String,
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for ledger records and exports.
    /// Defaults to `<platform data dir>/rentbook`.
    pub data_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            branding: Self::default_branding(),
            currency_symbol: Self::default_currency_symbol(),
            data_root: None,
        }
    }
}

impl Config {
    pub fn default_branding() -> String {
        "SAINI TRADERS".into()
    }

    pub fn default_currency_symbol() -> String {
        "\u{20b9}".into()
    }

    pub fn resolve_data_root(&self) -> PathBuf {
        if let Some(path) = &self.data_root {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("rentbook")
    }
}
