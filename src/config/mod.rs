//! Configuration management module for the documentation site shell.
//!
//! Provides hierarchical configuration loading and validation with:
//! - Default values as code base
//! - Configuration file support
//! - Environment variable overrides
//! - Component-wise validation
mod site;
mod theme;

pub use site::*;
pub use theme::*;
#[cfg(test)]
mod config_test;
use std::env;

use config::Config;
use config::Environment;
use config::File;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::Result;

/// Main configuration container for the documentation site
///
/// Combines the build and theme surfaces with hierarchical override support:
/// 1. Default values from code implementation
/// 2. Configuration file specified by `CONFIG_PATH`
/// 3. Environment variables (highest priority)
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct DocsiteConfig {
    /// Build-tool surface: theme module and image-host allow-list
    #[serde(default)]
    pub site: SiteConfig,
    /// Theme-renderer surface: logo, footer and color-mode policy
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl DocsiteConfig {
    /// Loads configuration from hierarchical sources without validation.
    ///
    /// Configuration sources are merged in the following order (later sources override earlier):
    /// 1. Type defaults (lowest priority)
    /// 2. Configuration file from `CONFIG_PATH` environment variable (if set)
    /// 3. Environment variables with `DOCSITE__` prefix (highest priority)
    ///
    /// # Note
    /// This method does NOT validate the configuration. Validation is deferred to allow
    /// further overrides via `with_override_config()`. Callers MUST call `validate()`
    /// before handing the configuration to a renderer.
    ///
    /// # Returns
    /// Merged configuration instance or error if config file parsing fails.
    ///
    /// # Examples
    /// ```ignore
    /// // Load with default values only
    /// let cfg = DocsiteConfig::new()?.validate()?;
    ///
    /// // Load with config file and environment variables
    /// std::env::set_var("CONFIG_PATH", "config/docsite.toml");
    /// std::env::set_var("DOCSITE__THEME__FOOTER__TEXT", "My Project");
    /// let cfg = DocsiteConfig::new()?.validate()?;
    /// ```
    pub fn new() -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Ok(config_path) = env::var("CONFIG_PATH") {
            builder = builder.add_source(File::with_name(&config_path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("DOCSITE")
                .separator("__")
                .ignore_empty(true)
                .try_parsing(true),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        Ok(config) // No validation - deferred to validate()
    }

    /// Applies additional configuration overrides from file without validation.
    ///
    /// Merging order (later sources override earlier):
    /// 1. Current configuration values
    /// 2. New configuration file
    /// 3. Latest environment variables (highest priority)
    ///
    /// # Note
    /// This method does NOT validate the configuration. Callers MUST call `validate()`
    /// after all overrides are applied.
    pub fn with_override_config(
        &self,
        path: &str,
    ) -> Result<Self> {
        let config: Self = Config::builder()
            .add_source(Config::try_from(self)?)
            .add_source(File::with_name(path))
            .add_source(
                Environment::with_prefix("DOCSITE")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        Ok(config) // No validation - deferred to validate()
    }

    /// Validates configuration and returns validated instance.
    ///
    /// Consumes self and performs validation of all surfaces. Must be called
    /// after all configuration overrides to ensure the final config is valid.
    /// The returned value is the single source of truth for the renderer; no
    /// mutation happens past this point.
    ///
    /// # Errors
    /// Returns validation errors from any surface:
    /// - Malformed or duplicate image hosts
    /// - Zero logo dimensions
    /// - Navbar links that are not absolute http(s) URLs
    pub fn validate(self) -> Result<Self> {
        self.site.validate()?;
        self.theme.validate()?;
        debug!(
            theme = %self.site.theme,
            image_hosts = self.site.image_hosts.len(),
            "docsite configuration assembled"
        );
        Ok(self)
    }
}
