use std::collections::HashSet;

use serde::Deserialize;
use serde::Serialize;

use crate::Result;
use crate::ValidationError;

// RFC 1123 limits for hostname tokens
const MAX_HOST_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Build-tool configuration surface
///
/// Mirrors the options the external static-site build tool recognizes: the
/// documentation theme module to load and the external hosts its image
/// optimizer is permitted to fetch from.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    /// Documentation theme module loaded by the build tool
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Ordered allow-list of external image hosts (bare hostnames, no scheme)
    #[serde(default)]
    pub image_hosts: Vec<String>,
}
impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            image_hosts: vec![],
        }
    }
}

impl SiteConfig {
    /// Builds a site configuration from raw allow-list entries.
    ///
    /// Entries are trimmed of surrounding whitespace, checked against the
    /// bare-hostname format and deduplicated preserving first-seen order.
    /// Pure: no side effects, deterministic for a given input.
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidHost` when an entry is empty after
    /// trimming or is not a well-formed bare hostname. Scheme-prefixed
    /// entries such as `https://example.com` are rejected outright rather
    /// than silently mixed with bare hostnames.
    pub fn from_raw_hosts<I, S>(
        theme: impl Into<String>,
        raw_hosts: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut image_hosts = Vec::new();
        for raw in raw_hosts {
            let host = raw.as_ref().trim();
            validate_host(host)?;
            if seen.insert(host.to_owned()) {
                image_hosts.push(host.to_owned());
            }
        }

        let config = Self {
            theme: theme.into(),
            image_hosts,
        };
        config.validate_theme()?;
        Ok(config)
    }

    /// Validates site configuration consistency
    /// # Errors
    /// Returns `Error::Validation` if any configuration rules are violated
    pub fn validate(&self) -> Result<()> {
        self.validate_theme()?;

        // Deserialized instances never went through the dedup pass in
        // `from_raw_hosts`, so the no-duplicates invariant is enforced here.
        let mut seen = HashSet::new();
        for host in &self.image_hosts {
            validate_host(host)?;
            if !seen.insert(host.as_str()) {
                return Err(ValidationError::InvalidHost {
                    host: host.clone(),
                    reason: "duplicate allow-list entry",
                }
                .into());
            }
        }

        Ok(())
    }

    fn validate_theme(&self) -> Result<()> {
        if self.theme.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "site.theme" }.into());
        }
        Ok(())
    }
}

/// Checks a single allow-list entry against the bare-hostname format.
///
/// Accepts RFC 1123 hostname tokens only: dot-separated labels of ASCII
/// alphanumerics and hyphens. URL schemes, paths, ports and userinfo all
/// belong to the consuming renderer's URL handling, not to the allow-list.
fn validate_host(host: &str) -> Result<()> {
    let invalid = |reason: &'static str| ValidationError::InvalidHost {
        host: host.to_owned(),
        reason,
    };

    if host.is_empty() {
        return Err(invalid("entry is empty").into());
    }
    if host.contains("://") {
        return Err(invalid("URL scheme is not allowed, use the bare hostname").into());
    }
    if host.contains('/') {
        return Err(invalid("path segments are not allowed").into());
    }
    if host.contains(':') {
        return Err(invalid("port numbers are not allowed").into());
    }
    if host.contains('@') {
        return Err(invalid("userinfo is not allowed").into());
    }
    if host.chars().any(|c| c.is_whitespace()) {
        return Err(invalid("embedded whitespace").into());
    }
    if host.len() > MAX_HOST_LEN {
        return Err(invalid("hostname exceeds 253 characters").into());
    }

    for label in host.split('.') {
        if label.is_empty() {
            return Err(invalid("empty label between dots").into());
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(invalid("label exceeds 63 characters").into());
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(invalid("label cannot start or end with a hyphen").into());
        }
        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(invalid("label contains characters outside [A-Za-z0-9-]").into());
        }
    }

    Ok(())
}

fn default_theme() -> String {
    "docs".into()
}
