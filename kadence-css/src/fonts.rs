//! Google Fonts registry.
//!
//! Collects every family/variant/subset the rendered blocks ask for so the
//! page can load them with a single stylesheet request. One registry lives
//! for exactly one render.

use log::debug;
use serde::Serialize;
use std::collections::HashMap;

use crate::attrs::Attrs;
use crate::config::RenderConfig;
use crate::head::escape_attr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontEntry {
    pub family: String,
    pub variants: Vec<String>,
    pub subsets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FontRegistry {
    entries: Vec<FontEntry>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Families in first-seen order.
    pub fn entries(&self) -> &[FontEntry] {
        &self.entries
    }

    pub fn get(&self, family: &str) -> Option<&FontEntry> {
        self.index.get(family).map(|&i| &self.entries[i])
    }

    /// Record a family with an optional variant and subset. Repeats are
    /// ignored; new variants/subsets are appended in the order first seen.
    pub fn register(&mut self, family: &str, variant: Option<&str>, subset: Option<&str>) {
        let variant = variant.filter(|v| !v.is_empty());
        let subset = subset.filter(|s| !s.is_empty());

        let i = match self.index.get(family).copied() {
            Some(i) => i,
            None => {
                debug!("registering google font '{}'", family);
                self.index.insert(family.to_string(), self.entries.len());
                self.entries.push(FontEntry {
                    family: family.to_string(),
                    variants: Vec::new(),
                    subsets: Vec::new(),
                });
                self.entries.len() - 1
            }
        };
        let entry = &mut self.entries[i];
        push_unique(&mut entry.variants, variant);
        push_unique(&mut entry.subsets, subset);
    }

    /// Register the font a block's attributes opt into, if any.
    ///
    /// A block opts in with `googleFont` set, `loadGoogleFont` absent or set,
    /// and a non-empty `typography` family.
    pub fn register_block(&mut self, attrs: &Attrs) -> bool {
        if !attrs.flag("googleFont") {
            return false;
        }
        if attrs.has("loadGoogleFont") && !attrs.flag("loadGoogleFont") {
            return false;
        }
        let Some(family) = attrs.filled("typography") else {
            return false;
        };
        let variant = attrs.filled("fontVariant");
        let subset = attrs.filled("fontSubset");
        self.register(&family, variant.as_deref(), subset.as_deref());
        true
    }

    /// Subsets of every family, deduplicated into one list.
    pub fn subsets(&self) -> Vec<String> {
        let mut subsets: Vec<String> = Vec::new();
        for entry in &self.entries {
            for subset in &entry.subsets {
                if !subsets.contains(subset) {
                    subsets.push(subset.clone());
                }
            }
        }
        subsets
    }

    /// The `family=` query value: `A:400,700%7CB`, plus `&subset=` if any.
    pub fn query(&self) -> String {
        let families: Vec<String> = self
            .entries
            .iter()
            .map(|entry| {
                if entry.variants.is_empty() {
                    entry.family.clone()
                } else {
                    format!("{}:{}", entry.family, entry.variants.join(","))
                }
            })
            .collect();
        let mut query = families.join("|").replace('|', "%7C");
        let subsets = self.subsets();
        if !subsets.is_empty() {
            query.push_str("&subset=");
            query.push_str(&subsets.join(","));
        }
        query
    }

    /// Full stylesheet URL against `host`, or `None` when nothing was registered.
    pub fn stylesheet_href(&self, host: &str) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(format!("{}?family={}", host, self.query()))
    }

    /// The stylesheet `<link>` element, unless `print_google_fonts` is off
    /// or nothing was registered.
    pub fn link_tag(&self, config: &RenderConfig) -> Option<String> {
        if !config.print_google_fonts {
            return None;
        }
        let href = self.stylesheet_href(&config.font_host)?;
        Some(format!(
            r#"<link href="{}" rel="stylesheet">"#,
            escape_attr(&href)
        ))
    }
}

fn push_unique(list: &mut Vec<String>, value: Option<&str>) {
    if let Some(value) = value {
        if !list.iter().any(|v| v == value) {
            list.push(value.to_string());
        }
    }
}
