use serde::{Deserialize, Serialize};

/// Where the active theme is written on the root element.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeAttribute {
    #[default]
    #[serde(rename = "class")]
    Class,
    #[serde(rename = "data-theme")]
    DataTheme,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    pub attribute: ThemeAttribute,
    pub default_theme: String,
    pub enable_system: bool,
    pub disable_transition_on_change: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            attribute: ThemeAttribute::Class,
            default_theme: "system".to_string(),
            enable_system: true,
            disable_transition_on_change: false,
        }
    }
}

/// Wraps page content in theme context. The configuration is handed to the
/// provider exactly as received.
#[derive(Debug, Clone)]
pub struct ThemeShell<C> {
    config: ThemeConfig,
    children: C,
}

impl<C> ThemeShell<C> {
    pub fn new(config: ThemeConfig, children: C) -> Self {
        Self { config, children }
    }

    pub fn provider_props(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn children(&self) -> &C {
        &self.children
    }
}
