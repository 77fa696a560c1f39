use crate::shell::ThemeConfig;
use anyhow::Context;
use colored::{Color, ColoredString, Style};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::{collections::HashMap, fmt::Display};

const DEFAULT_PROFILE: &str = "local";
const DEFAULT_SERVER: &str = "http://localhost:8080";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Profile {
    server: String,
    #[serde(default = "default_color")]
    color: String,
    #[serde(default)]
    theme: ThemeConfig,
}

fn default_color() -> String {
    "green".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub current_profile: String,
    profile: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        let mut profile = HashMap::new();
        profile.insert(
            DEFAULT_PROFILE.to_string(),
            Profile {
                server: DEFAULT_SERVER.to_string(),
                color: default_color(),
                theme: ThemeConfig::default(),
            },
        );

        Config {
            current_profile: DEFAULT_PROFILE.to_string(),
            profile,
        }
    }
}

fn config_dir() -> anyhow::Result<PathBuf> {
    Ok(dirs::home_dir()
        .context("could not determine the home directory")?
        .join(".folio"))
}

impl Config {
    pub fn parse(config_str: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(config_str)?;
        if !config.profile.contains_key(&config.current_profile) {
            anyhow::bail!(
                "Current profile '{}' is not defined in the configuration",
                config.current_profile
            );
        }
        Ok(config)
    }

    pub async fn load() -> anyhow::Result<Self> {
        let config_file = config_dir()?.join("config.toml");
        let config_str = tokio::fs::read_to_string(config_file).await?;
        Config::parse(&config_str)
    }

    pub async fn save(&self) -> anyhow::Result<()> {
        let dir = config_dir()?;
        tokio::fs::create_dir_all(&dir).await?;

        let config_file = dir.join("config.toml.save");
        let config_str = toml::to_string(&self)?;
        tokio::fs::write(&config_file, config_str).await?;
        tokio::fs::rename(config_file, dir.join("config.toml")).await?;
        Ok(())
    }

    pub async fn change_profile(&mut self, profile: String) -> anyhow::Result<()> {
        if !self.profile.contains_key(&profile) {
            return Err(anyhow::anyhow!("Profile '{}' does not exist", profile));
        }

        self.current_profile = profile;
        self.save().await?;

        Ok(())
    }

    fn current(&self) -> &Profile {
        // `parse` and `change_profile` only accept profiles that exist.
        &self.profile[&self.current_profile]
    }

    pub fn current_domain(&self) -> String {
        self.current().server.trim_end_matches('/').to_string()
    }

    pub fn theme(&self) -> ThemeConfig {
        self.current().theme.clone()
    }
}

impl Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let current_profile = self.current();
        let color = Color::from(current_profile.color.as_str());
        let mut colored_string = ColoredString::from(self.current_profile.as_str());
        colored_string.fgcolor = Some(color);
        colored_string.style = Style::default().bold();
        let mut colored_server = ColoredString::from(current_profile.server.as_str());
        colored_server.fgcolor = Some(color);
        write!(f, "{} {}", colored_string, colored_server)
    }
}
