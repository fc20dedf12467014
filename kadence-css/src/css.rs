//! CSS building blocks shared by the block emitters.

use crate::attrs::format_float;

/// Responsive breakpoint a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Desktop,
    Tablet,
    Mobile,
}

impl Tier {
    pub fn media_query(self) -> Option<&'static str> {
        match self {
            Tier::Desktop => None,
            Tier::Tablet => Some("@media (min-width: 767px) and (max-width: 1024px)"),
            Tier::Mobile => Some("@media (max-width: 767px)"),
        }
    }
}

/// A single selector with its declarations, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct CssRule {
    pub selector: String,
    pub declarations: Vec<(String, String)>,
}

impl CssRule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    /// Add `property:value` when a value is present.
    pub fn push(&mut self, property: &str, value: Option<String>) -> &mut Self {
        if let Some(value) = value {
            self.declarations.push((property.to_string(), value));
        }
        self
    }

    pub fn with(mut self, property: &str, value: Option<String>) -> Self {
        self.push(property, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    fn write(&self, css: &mut String) {
        css.push_str(&self.selector);
        css.push_str(" {");
        for (prop, val) in &self.declarations {
            css.push_str(prop);
            css.push(':');
            css.push_str(val);
            css.push(';');
        }
        css.push('}');
    }
}

/// Accumulates rendered rules. Empty rules and empty media blocks are dropped.
#[derive(Debug, Default)]
pub struct CssBuffer {
    css: String,
}

impl CssBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(&mut self, rule: CssRule) {
        if !rule.is_empty() {
            rule.write(&mut self.css);
        }
    }

    /// Write `rules` under the media query of `tier`.
    pub fn media(&mut self, tier: Tier, rules: impl IntoIterator<Item = CssRule>) {
        let rules: Vec<CssRule> = rules.into_iter().filter(|r| !r.is_empty()).collect();
        if rules.is_empty() {
            return;
        }
        match tier.media_query() {
            None => rules.into_iter().for_each(|r| self.rule(r)),
            Some(query) => {
                self.css.push_str(query);
                self.css.push_str(" {");
                for rule in &rules {
                    rule.write(&mut self.css);
                }
                self.css.push('}');
            }
        }
    }

    pub fn into_string(self) -> String {
        self.css
    }
}

pub fn px(value: String) -> String {
    format!("{}px", value)
}

pub fn percent(value: String) -> String {
    format!("{}%", value)
}

/// `[top, right, bottom, left]` as a four-value shorthand in pixels.
pub fn sides(values: [String; 4]) -> String {
    let [top, right, bottom, left] = values;
    format!("{}px {}px {}px {}px", top, right, bottom, left)
}

/// Percentage opacity (0-100) as a CSS opacity value.
///
/// Single digits are zero padded (`5` -> `0.05`); `50` becomes `0.50`.
/// Input is rounded to a whole percentage within 0-100 first, so fractional
/// or negative values still produce a valid number.
pub fn opacity(value: f64) -> String {
    let value = if value.is_nan() {
        0.0
    } else {
        value.round().clamp(0.0, 100.0)
    };
    if value < 10.0 {
        format!("0.0{}", format_float(value))
    } else if value >= 100.0 {
        "1".to_string()
    } else {
        format!("0.{}", format_float(value))
    }
}
