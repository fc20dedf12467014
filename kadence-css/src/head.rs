//! `<head>` markup for a rendered page.

use crate::config::RenderConfig;
use crate::walker::RenderOutput;

impl RenderOutput {
    /// The inline `<style>` element, or `None` if no block produced CSS.
    pub fn style_tag(&self, config: &RenderConfig) -> Option<String> {
        if self.css.is_empty() {
            return None;
        }
        Some(format!(
            r#"<style type="text/css" media="all" id="{}">{}</style>"#,
            escape_attr(&config.style_id),
            self.css.replace("</", "<\\/")
        ))
    }

    /// The Google Fonts stylesheet `<link>`, unless fonts are disabled or
    /// nothing was registered.
    pub fn font_link(&self, config: &RenderConfig) -> Option<String> {
        self.fonts.link_tag(config)
    }

    /// Style element followed by the font link, one per line.
    pub fn head_html(&self, config: &RenderConfig) -> String {
        [self.style_tag(config), self.font_link(config)]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub(crate) fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
