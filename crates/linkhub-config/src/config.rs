//! Configuration document parsing.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Root of the configuration document (`config/config.yml`).
///
/// Field names serialize exactly as they are spelled in the document, so
/// templates address values as `Params.Theme.Background`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(rename = "Params")]
    pub params: Params,
}

/// Profile data rendered into the hub page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Params {
    /// URL or project-relative path to the avatar image
    pub avatar: String,

    /// Display name
    pub name: String,

    /// Short tagline shown under the name
    pub headline: String,

    /// Color palette
    pub theme: Theme,

    /// Social icons, in display order
    pub socials: Vec<Social>,

    /// Link buttons, in display order
    pub links: Vec<Link>,
}

/// Color palette. Values are passed through to CSS untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Theme {
    pub background: String,
    pub text: String,
    pub button: String,
    pub button_text: String,
    pub button_hover: String,
}

/// A social profile icon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Social {
    /// Icon identifier consumed by the template (e.g. an icon-font class)
    #[serde(rename = "Icon")]
    pub icon: String,

    #[serde(rename = "URL")]
    pub url: String,
}

/// A link button.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "URL")]
    pub url: String,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl Config {
    /// Parse a configuration document from a string.
    ///
    /// `path` is only used to label errors.
    pub fn from_yaml(source: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_yaml::from_str(source).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Load configuration from `path`.
///
/// There is no fallback: a missing file is an error, as is a document whose
/// structure cannot be coerced into [`Config`]. Absent keys are filled with
/// empty values.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config = Config::from_yaml(&content, path)?;
    tracing::debug!("Loaded config from {}", path.display());

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    const FULL: &str = r##"Params:
  Avatar: "static/images/avatar.png"
  Name: "Ada Lovelace"
  Headline: "First programmer"
  Theme:
    Background: "#101010"
    Text: "white"
    Button: "rgb(10, 20, 30)"
    ButtonText: "#fff"
    ButtonHover: "#333"
  Socials:
    - Icon: "fa-brands fa-github"
      URL: "https://github.com/ada"
    - Icon: "fa-brands fa-mastodon"
      URL: "https://mastodon.social/@ada"
  Links:
    - Name: "Notes"
      URL: "https://example.com/notes"
    - Name: "Engine"
      URL: "https://example.com/engine"
    - Name: "Letters"
      URL: "https://example.com/letters"
"##;

    #[test]
    fn parses_full_document() {
        let config = Config::from_yaml(FULL, Path::new("config.yml")).unwrap();
        let params = &config.params;

        assert_eq!(params.name, "Ada Lovelace");
        assert_eq!(params.avatar, "static/images/avatar.png");
        assert_eq!(params.theme.button, "rgb(10, 20, 30)");
        assert_eq!(params.theme.button_text, "#fff");
        assert_eq!(params.socials.len(), 2);
        assert_eq!(params.socials[1].url, "https://mastodon.social/@ada");
    }

    #[test]
    fn preserves_link_order() {
        let config = Config::from_yaml(FULL, Path::new("config.yml")).unwrap();
        let names: Vec<&str> = config.params.links.iter().map(|l| l.name.as_str()).collect();

        assert_eq!(names, vec!["Notes", "Engine", "Letters"]);
    }

    #[test]
    fn tolerates_missing_fields() {
        let source = "Params:\n  Name: \"Solo\"\n";
        let config = Config::from_yaml(source, Path::new("config.yml")).unwrap();

        assert_eq!(config.params.name, "Solo");
        assert_eq!(config.params.avatar, "");
        assert_eq!(config.params.headline, "");
        assert_eq!(config.params.theme, Theme::default());
        assert!(config.params.socials.is_empty());
        assert!(config.params.links.is_empty());
    }

    #[test]
    fn accepts_empty_social_entry() {
        let source = "Params:\n  Socials:\n    - {}\n";
        let config = Config::from_yaml(source, Path::new("config.yml")).unwrap();

        assert_eq!(config.params.socials, vec![Social::default()]);
    }

    #[test]
    fn rejects_scalar_where_mapping_expected() {
        let source = "Params: \"just a string\"\n";
        let result = Config::from_yaml(source, Path::new("config.yml"));

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn rejects_malformed_yaml() {
        let source = "Params:\n  Links: [unclosed\n";
        let result = Config::from_yaml(source, Path::new("config.yml"));

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn serializes_with_document_keys() {
        let config = Config::from_yaml(FULL, Path::new("config.yml")).unwrap();
        let yaml = serde_yaml::to_string(&config).unwrap();

        assert!(yaml.contains("Params:"));
        assert!(yaml.contains("ButtonHover:"));
        assert!(yaml.contains("URL:"));
    }

    #[test]
    fn load_reports_missing_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yml");

        let result = load_config(&path);

        match result {
            Err(ConfigError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn loads_from_disk() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, FULL).unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.params.headline, "First programmer");
    }
}
