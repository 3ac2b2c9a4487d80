use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Appearance preference chosen in settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
    System,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::System,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
            ThemePreference::System => "System",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ThemePreference::Light => "☀️",
            ThemePreference::Dark => "🌙",
            ThemePreference::System => "💻",
        }
    }

    /// CSS class to put on `<html>`, given the OS preference
    pub fn resolve(&self, system_prefers_dark: bool) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System if system_prefers_dark => "dark",
            ThemePreference::System => "light",
        }
    }
}

impl FromStr for ThemePreference {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub theme: ThemePreference,
    pub notifications: bool,
    pub memory_enabled: bool,
    #[serde(default)]
    pub api_endpoint: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::Dark,
            notifications: true,
            memory_enabled: true,
            api_endpoint: None,
        }
    }
}

/// Partial update applied by `ChatStore::update_settings`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsPatch {
    pub theme: Option<ThemePreference>,
    pub notifications: Option<bool>,
    pub memory_enabled: Option<bool>,
}

impl Settings {
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
        if let Some(notifications) = patch.notifications {
            self.notifications = notifications;
        }
        if let Some(memory_enabled) = patch.memory_enabled {
            self.memory_enabled = memory_enabled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_str() {
        assert_eq!("light".parse::<ThemePreference>(), Ok(ThemePreference::Light));
        assert_eq!("system".parse::<ThemePreference>(), Ok(ThemePreference::System));
        assert!("golden".parse::<ThemePreference>().is_err());
    }

    #[test]
    fn test_system_theme_follows_os() {
        assert_eq!(ThemePreference::System.resolve(true), "dark");
        assert_eq!(ThemePreference::System.resolve(false), "light");
        assert_eq!(ThemePreference::Light.resolve(true), "light");
    }

    #[test]
    fn test_patch_only_touches_given_fields() {
        let mut settings = Settings::default();
        settings.apply(SettingsPatch {
            memory_enabled: Some(false),
            ..Default::default()
        });
        assert!(!settings.memory_enabled);
        assert!(settings.notifications);
        assert_eq!(settings.theme, ThemePreference::Dark);
    }
}
