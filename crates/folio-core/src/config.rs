// File: src/config.rs
// Purpose: Site behavior configuration parsed from TOML

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Page behavior configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub typing: TypingConfig,

    #[serde(default)]
    pub reveal: RevealConfig,

    #[serde(default)]
    pub back_to_top: BackToTopConfig,

    #[serde(default)]
    pub skills: SkillsConfig,

    #[serde(default)]
    pub form: FormConfig,
}

/// Theme persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Local storage key holding the preference
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

/// Typewriter effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypingConfig {
    #[serde(default = "default_phrases")]
    pub phrases: Vec<String>,

    #[serde(default = "default_type_delay_ms")]
    pub type_delay_ms: u32,

    #[serde(default = "default_delete_delay_ms")]
    pub delete_delay_ms: u32,

    /// Pause once a phrase is fully typed
    #[serde(default = "default_hold_delay_ms")]
    pub hold_delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Visible ratio at which a section is revealed
    #[serde(default = "default_reveal_threshold")]
    pub threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackToTopConfig {
    /// Scroll offset in pixels past which the button shows
    #[serde(default = "default_back_to_top_threshold")]
    pub threshold_px: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsConfig {
    #[serde(default = "default_skills_threshold")]
    pub threshold: f64,
}

/// Status texts for the contact form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_error_status")]
    pub error_status: String,

    #[serde(default = "default_success_status")]
    pub success_status: String,
}

// Default values
fn default_storage_key() -> String {
    "theme".to_string()
}

fn default_phrases() -> Vec<String> {
    vec![
        "Securing modern web apps".to_string(),
        "Building DAST tooling".to_string(),
        "Reducing false positives".to_string(),
        "Exploring OWASP Top 10".to_string(),
    ]
}

fn default_type_delay_ms() -> u32 {
    90
}

fn default_delete_delay_ms() -> u32 {
    40
}

fn default_hold_delay_ms() -> u32 {
    1500
}

fn default_reveal_threshold() -> f64 {
    0.18
}

fn default_back_to_top_threshold() -> f64 {
    380.0
}

fn default_skills_threshold() -> f64 {
    0.2
}

fn default_error_status() -> String {
    "Please fix the highlighted fields and try again.".to_string()
}

fn default_success_status() -> String {
    "Message validated locally. Plug this form into your backend or a service to receive emails."
        .to_string()
}

// Default implementations
impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            phrases: default_phrases(),
            type_delay_ms: default_type_delay_ms(),
            delete_delay_ms: default_delete_delay_ms(),
            hold_delay_ms: default_hold_delay_ms(),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: default_reveal_threshold(),
        }
    }
}

impl Default for BackToTopConfig {
    fn default() -> Self {
        Self {
            threshold_px: default_back_to_top_threshold(),
        }
    }
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            threshold: default_skills_threshold(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            error_status: default_error_status(),
            success_status: default_success_status(),
        }
    }
}

impl SiteConfig {
    /// Parse configuration from TOML text; blank text yields the defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: SiteConfig =
            toml::from_str(content).context("Failed to parse site configuration")?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load config file: {:?}", path))
    }
}
