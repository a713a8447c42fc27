use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Output format: "plain" or "pretty"
    pub format: String,

    /// Show the Key/Value header row unless overridden on the command line
    pub show_head: bool,

    /// Use ANSI colors for status and error messages
    pub use_color: bool,

    /// Truncate values longer than this in pretty tables (0 = no limit)
    pub max_value_width: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Sort environment listings by key
    pub sort_env: bool,

    /// Infer number/bool types when loading CSV values
    pub infer_csv_types: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: "plain".to_string(),
            show_head: false,
            use_color: true,
            max_value_width: 0,
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            sort_env: true,
            infer_csv_types: true,
        }
    }
}

impl Config {
    /// Load config from the default location
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            // Create default config if it doesn't exist
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&contents)?;

        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the default config file path
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("kv-cli").join("config.toml"))
    }

    /// Create a default config file with comments
    pub fn create_default_with_comments() -> String {
        r#"# kv-cli Configuration File
# Location: ~/.config/kv-cli/config.toml (Linux/macOS)
#           %APPDATA%\kv-cli\config.toml (Windows)

[display]
# Output format: "plain" (aligned text) or "pretty" (bordered table)
format = "plain"

# Show the Key/Value header row by default
# The --head flag turns it on for a single run
show_head = false

# Use ANSI colors for status and error messages
use_color = true

# Truncate values longer than this in pretty tables (0 = no limit)
max_value_width = 0

[behavior]
# Sort environment listings by key (process env has no stable order)
sort_env = true

# Infer number/bool types when loading CSV values
# Set to false to keep every CSV value as text
infer_csv_types = true
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.display.format, "plain");
        assert!(!config.display.show_head);
        assert!(config.behavior.sort_env);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.display.format, parsed.display.format);
        assert_eq!(config.display.max_value_width, parsed.display.max_value_width);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: Config = toml::from_str("[display]\nformat = \"pretty\"\n").unwrap();
        assert_eq!(parsed.display.format, "pretty");
        assert!(parsed.display.use_color);
        assert!(parsed.behavior.infer_csv_types);
    }

    #[test]
    fn test_commented_default_parses() {
        let parsed: Config = toml::from_str(&Config::create_default_with_comments()).unwrap();
        assert_eq!(parsed.display.format, "plain");
        assert!(!parsed.display.show_head);
    }
}
