use std::str::FromStr;

use crate::errors::AppError;

/// Presentation variant of the page. Only the stylesheet changes; the
/// pipeline is identical under every theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Glass,
    Minimal,
}

impl Theme {
    pub fn css_class(&self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
            Theme::Glass => "theme-glass",
            Theme::Minimal => "theme-minimal",
        }
    }
}

impl FromStr for Theme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "glass" => Ok(Theme::Glass),
            "minimal" => Ok(Theme::Minimal),
            other => Err(AppError::Validation(format!(
                "THEME must be one of light, dark, glass, minimal (got '{other}')"
            ))),
        }
    }
}
