//! Display preferences.

use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl FontSize {
    pub fn as_str(self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
            FontSize::ExtraLarge => "extra-large",
        }
    }

    /// Display-scale token the UI applies to text containers.
    pub fn css_class(self) -> &'static str {
        match self {
            FontSize::Small => "text-sm",
            FontSize::Medium => "text-base",
            FontSize::Large => "text-lg",
            FontSize::ExtraLarge => "text-xl",
        }
    }
}

/// Error returned when parsing an unknown theme or font size name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown value '{0}'")]
pub struct UnknownVariant(pub String);

impl FromStr for Theme {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

impl FromStr for FontSize {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(FontSize::Small),
            "medium" => Ok(FontSize::Medium),
            "large" => Ok(FontSize::Large),
            "extra-large" => Ok(FontSize::ExtraLarge),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// Scale token for a font size name; unknown names get the medium scale.
pub fn font_size_class(name: &str) -> &'static str {
    name.parse::<FontSize>()
        .unwrap_or(FontSize::Medium)
        .css_class()
}

/// The persisted `app-settings` record.
///
/// Missing or unrecognized fields take their defaults one by one, so an
/// unknown font size does not discard a valid theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    #[serde(deserialize_with = "lenient")]
    pub theme: Theme,
    #[serde(deserialize_with = "lenient")]
    pub font_size: FontSize,
}

fn lenient<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: FromStr + Default,
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    match raw.as_str().map(str::parse::<T>) {
        Some(Ok(value)) => Ok(value),
        _ => {
            warn!("Ignoring unrecognized setting value {raw}");
            Ok(T::default())
        }
    }
}
