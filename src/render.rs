//! Render surface consumed by the external documentation renderer.
//!
//! Configuration values that end up as page chrome implement [`Renderable`]
//! and produce self-contained HTML fragments. The renderer decides where a
//! fragment lands; this module only guarantees it is well-formed.

use crate::FooterConfig;
use crate::Logo;

/// Capability interface for configuration values the renderer places on a page
pub trait Renderable {
    /// Produces a self-contained HTML fragment for this value
    fn render(&self) -> String;
}

impl Renderable for Logo {
    fn render(&self) -> String {
        format!(
            r#"<img src="{}" width="{}" height="{}" alt="{}">"#,
            escape_attr(&self.path),
            self.width,
            self.height,
            escape_attr(&self.alt),
        )
    }
}

impl Renderable for FooterConfig {
    fn render(&self) -> String {
        format!("<footer>{}</footer>", escape_text(&self.text))
    }
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
