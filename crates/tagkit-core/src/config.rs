use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::tag::MAX_TAG_NAME_LEN;

/// Global configuration loaded from `~/.config/tagkit/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagkitConfig {
    /// Re-escape entities already present in text (`&amp;` becomes `&amp;amp;`).
    #[serde(default = "default_double_encode")]
    pub double_encode: bool,
    /// Status code used by `redirect` when none is given.
    #[serde(default = "default_redirect_status")]
    pub redirect_status: u16,
    /// Print URL components as JSON instead of the assembled string.
    #[serde(default)]
    pub json_output: bool,
    /// Longest tag name the CLI will render; longer names are truncated.
    #[serde(default = "default_max_tag_name_len")]
    pub max_tag_name_len: usize,
}

fn default_double_encode() -> bool {
    true
}

fn default_redirect_status() -> u16 {
    302
}

fn default_max_tag_name_len() -> usize {
    MAX_TAG_NAME_LEN
}

impl Default for TagkitConfig {
    fn default() -> Self {
        Self {
            double_encode: default_double_encode(),
            redirect_status: default_redirect_status(),
            json_output: false,
            max_tag_name_len: default_max_tag_name_len(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tagkit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TagkitConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = TagkitConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<TagkitConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: TagkitConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = TagkitConfig::default();
        assert!(cfg.double_encode);
        assert_eq!(cfg.redirect_status, 302);
        assert!(!cfg.json_output);
        assert_eq!(cfg.max_tag_name_len, 50);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = TagkitConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: TagkitConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            double_encode = false
            redirect_status = 301
            json_output = true
            max_tag_name_len = 10
        "#;
        let cfg: TagkitConfig = toml::from_str(toml).unwrap();
        assert!(!cfg.double_encode);
        assert_eq!(cfg.redirect_status, 301);
        assert!(cfg.json_output);
        assert_eq!(cfg.max_tag_name_len, 10);
    }

    #[test]
    fn config_toml_missing_fields_use_defaults() {
        let cfg: TagkitConfig = toml::from_str("json_output = true").unwrap();
        assert!(cfg.double_encode);
        assert_eq!(cfg.redirect_status, 302);
        assert!(cfg.json_output);
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"redirect_status = 303\n").unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.redirect_status, 303);
    }

    #[test]
    fn load_from_rejects_bad_toml() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"redirect_status = \"soon\"\n").unwrap();
        f.flush().unwrap();
        assert!(load_from(f.path()).is_err());
    }
}
