use colored::*;
use drsa_index::SymbolIndex;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Documentation base URL override, for forks or locally served docs
    #[serde(default)]
    pub doc_url: Option<String>,
    /// Source repository URL override
    #[serde(default)]
    pub git_url: Option<String>,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_max_results() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            doc_url: None,
            git_url: None,
            max_results: default_max_results(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let config_path = PathBuf::from("drsa-index.toml");

        if config_path.exists() {
            match fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => {
                        return config;
                    }
                    Err(e) => {
                        eprintln!("{} Failed to parse drsa-index.toml: {}", "⚠️".yellow(), e);
                        eprintln!("   Using default configuration");
                    }
                },
                Err(e) => {
                    eprintln!("{} Failed to read drsa-index.toml: {}", "⚠️".yellow(), e);
                    eprintln!("   Using default configuration");
                }
            }
        }

        Config::default()
    }

    /// Documentation base URL, preferring the config override
    pub fn doc_base<'a>(&'a self, index: &'a SymbolIndex) -> &'a str {
        self.doc_url.as_deref().unwrap_or_else(|| index.doc_url())
    }

    /// Repository URL, preferring the config override
    pub fn git_base<'a>(&'a self, index: &'a SymbolIndex) -> &'a str {
        self.git_url.as_deref().unwrap_or_else(|| index.git_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.doc_url, None);
        assert_eq!(config.git_url, None);
        assert_eq!(config.max_results, 10);
    }

    #[test]
    fn test_parse_overrides() {
        let config: Config = toml::from_str(
            r#"
doc_url = "http://localhost:8000/"
max_results = 5
"#,
        )
        .unwrap();

        assert_eq!(config.doc_url.as_deref(), Some("http://localhost:8000/"));
        assert_eq!(config.git_url, None);
        assert_eq!(config.max_results, 5);
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.max_results, 10);
    }
}
