use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "msgidgen.config.json";

/// Msgidgen configuration file format
///
/// Every field can also be set on the command line; explicit flags win over
/// the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Source directory containing .proto files
    #[serde(default = "default_dir")]
    pub src_dir: String,

    /// Directory receiving the generated tag table
    #[serde(default = "default_dir")]
    pub tag_dir: String,

    /// Package name substituted into generated files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,

    /// Upper-case extracted name words before hashing
    #[serde(default)]
    pub upper: bool,

    /// Prefix prepended to every message name
    #[serde(default)]
    pub prefix: String,
}

fn default_dir() -> String {
    ".".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: default_dir(),
            tag_dir: default_dir(),
            package_name: None,
            upper: false,
            prefix: String::new(),
        }
    }
}
