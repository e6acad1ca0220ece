//! Light/dark theme preference

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    /// Stored preference wins; otherwise follow the color-scheme media query
    pub fn initial(stored: Option<&str>, prefers_dark: bool) -> Self {
        stored.and_then(Self::parse).unwrap_or(if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        })
    }

    /// Theme after a toggle, given the root's current `data-theme` value.
    /// A missing or unknown value counts as dark.
    pub fn toggled_from(current: Option<&str>) -> Self {
        current
            .and_then(Self::parse)
            .unwrap_or(Theme::Dark)
            .opposite()
    }

    pub fn opposite(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
