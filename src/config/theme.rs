use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use tracing::warn;

use crate::Result;
use crate::ValidationError;

/// Theme-renderer configuration surface
///
/// Everything the external theme renderer reads on every page render: the
/// logo asset, the footer line, the color-mode policy and the optional
/// navbar links.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ThemeConfig {
    /// Logo asset rendered in the site header
    #[serde(default)]
    pub logo: Logo,

    /// Footer options
    #[serde(default)]
    pub footer: FooterConfig,

    /// Light/dark/system color-mode policy
    #[serde(default)]
    pub color: ColorModeConfig,

    /// Project repository link shown in the navbar
    #[serde(default)]
    pub project_link: Option<String>,

    /// Community chat link shown in the navbar
    #[serde(default)]
    pub chat_link: Option<String>,

    /// Base URL for "edit this page" links
    #[serde(default)]
    pub docs_repository_base: Option<String>,
}

impl ThemeConfig {
    /// Builds a theme configuration from its required parts.
    ///
    /// The optional navbar links start unset; supply them through the
    /// configuration file or environment overrides. Pure: no side effects.
    ///
    /// # Errors
    /// - `ValidationError::EmptyField` when `logo_path` is empty
    /// - `ValidationError::InvalidDimension` when `width` or `height` is zero
    /// - `ValidationError::InvalidMode` when `default_mode` is outside
    ///   {light, dark, system}
    pub fn from_parts(
        logo_path: impl Into<String>,
        width: u32,
        height: u32,
        footer_text: impl Into<String>,
        default_mode: &str,
    ) -> Result<Self> {
        let logo = Logo {
            path: logo_path.into(),
            width,
            height,
            alt: default_logo_alt(),
        };
        logo.validate()?;
        let default_mode = ColorMode::from_str(default_mode)?;

        Ok(Self {
            logo,
            footer: FooterConfig {
                text: footer_text.into(),
            },
            color: ColorModeConfig {
                default_mode,
                forced_mode: None,
            },
            project_link: None,
            chat_link: None,
            docs_repository_base: None,
        })
    }

    /// Validates theme configuration consistency
    /// # Errors
    /// Returns `Error::Validation` if any configuration rules are violated
    pub fn validate(&self) -> Result<()> {
        self.logo.validate()?;

        validate_link("theme.project_link", self.project_link.as_deref())?;
        validate_link("theme.chat_link", self.chat_link.as_deref())?;
        validate_link(
            "theme.docs_repository_base",
            self.docs_repository_base.as_deref(),
        )?;

        if let Some(forced) = self.color.forced_mode {
            warn!(%forced, "forced color mode overrides reader preference");
        }

        Ok(())
    }
}

/// Renderable logo asset reference
///
/// A plain data record the rendering layer consumes; the renderer resolves
/// `path` against its own asset pipeline.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Logo {
    /// Asset path resolved by the renderer
    #[serde(default = "default_logo_path")]
    pub path: String,

    /// Rendered width in pixels
    #[serde(default = "default_logo_edge")]
    pub width: u32,

    /// Rendered height in pixels
    #[serde(default = "default_logo_edge")]
    pub height: u32,

    /// Alternative text for accessibility
    #[serde(default = "default_logo_alt")]
    pub alt: String,
}
impl Default for Logo {
    fn default() -> Self {
        Self {
            path: default_logo_path(),
            width: default_logo_edge(),
            height: default_logo_edge(),
            alt: default_logo_alt(),
        }
    }
}

impl Logo {
    /// Validates the asset reference
    /// # Errors
    /// Returns `Error::Validation` when the path is empty or a dimension is zero
    pub fn validate(&self) -> Result<()> {
        if self.path.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "theme.logo.path",
            }
            .into());
        }
        if self.width == 0 {
            return Err(ValidationError::InvalidDimension {
                dimension: "width",
                value: self.width,
            }
            .into());
        }
        if self.height == 0 {
            return Err(ValidationError::InvalidDimension {
                dimension: "height",
                value: self.height,
            }
            .into());
        }
        Ok(())
    }
}

/// Footer options
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct FooterConfig {
    /// Text shown in the page footer
    #[serde(default)]
    pub text: String,
}

/// Color-mode policy for the theme renderer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorModeConfig {
    /// Mode applied before the reader expresses a preference
    #[serde(default)]
    pub default_mode: ColorMode,

    /// Mode forced onto every reader, overriding stored preference
    #[serde(default)]
    pub forced_mode: Option<ColorMode>,
}

/// Light/dark/system display preference
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
    System,
}

impl FromStr for ColorMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            _ => Err(ValidationError::InvalidMode(s.to_owned())),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        })
    }
}

/// Requires an absolute http(s) URL when the optional link is present.
fn validate_link(
    field: &'static str,
    value: Option<&str>,
) -> Result<()> {
    if let Some(link) = value {
        let rest = link
            .strip_prefix("https://")
            .or_else(|| link.strip_prefix("http://"));
        match rest {
            Some(r) if !r.is_empty() => {}
            _ => {
                return Err(ValidationError::InvalidLink {
                    field,
                    value: link.to_owned(),
                }
                .into())
            }
        }
    }
    Ok(())
}

fn default_logo_path() -> String {
    "/logo.png".into()
}
fn default_logo_edge() -> u32 {
    140
}
fn default_logo_alt() -> String {
    "logo".into()
}
