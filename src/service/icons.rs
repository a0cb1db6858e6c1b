//! Skill name to display symbol table.
//!
//! Pure presentation data: a built-in TOML table that a deployment may
//! replace with its own file.

use crate::error::HubError;
use figment::{
    Figment,
    providers::{Format, Toml},
};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

const BUILTIN_ICONS: &str = include_str!("../../assets/skill_icons.toml");

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillIcons {
    icons: BTreeMap<String, String>,
}

impl SkillIcons {
    pub fn builtin() -> Result<Self, HubError> {
        Self::from_figment(Figment::from(Toml::string(BUILTIN_ICONS)))
    }

    /// Load the table from `path`, or the built-in one when no path is configured.
    pub fn load(path: Option<&Path>) -> Result<Self, HubError> {
        match path {
            Some(path) => {
                let icons = Self::from_figment(Figment::from(Toml::file(path)))?;
                info!(path = %path.display(), count = icons.len(), "skill icons loaded");
                Ok(icons)
            }
            None => Self::builtin(),
        }
    }

    fn from_figment(figment: Figment) -> Result<Self, HubError> {
        let icons = figment.extract_inner::<BTreeMap<String, String>>("icons")?;
        Ok(Self { icons })
    }

    pub fn icon_for(&self, skill: &str) -> Option<&str> {
        self.icons.get(skill).map(String::as_str)
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.icons
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_parses() {
        let icons = SkillIcons::builtin().unwrap();
        assert_eq!(icons.len(), 14);
        assert_eq!(icons.icon_for("Python"), Some("🐍"));
        assert_eq!(icons.icon_for("HTML/CSS"), Some("🖌️"));
        assert_eq!(icons.icon_for("Телеграм"), Some("✈️"));
    }

    #[test]
    fn lookup_is_exact() {
        let icons = SkillIcons::builtin().unwrap();
        assert_eq!(icons.icon_for("python"), None);
        assert_eq!(icons.icon_for("Rust"), None);
    }

    #[test]
    fn custom_file_replaces_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icons.toml");
        std::fs::write(&path, "[icons]\n\"Rust\" = \"🦀\"\n").unwrap();

        let icons = SkillIcons::load(Some(&path)).unwrap();
        assert_eq!(icons.len(), 1);
        assert_eq!(icons.icon_for("Rust"), Some("🦀"));
        assert_eq!(icons.icon_for("Python"), None);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(SkillIcons::load(Some(&dir.path().join("nope.toml"))).is_err());
    }
}
