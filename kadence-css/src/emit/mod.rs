//! Per-block CSS emitters.
//!
//! Each emitter maps one block's attributes to a CSS string. They are pure:
//! font registration and script requirements are handled by the walker.

pub mod button;
pub mod column;
pub mod heading;
pub mod row;
pub mod tabs;

pub use button::advanced_button_css;
pub use column::column_css;
pub use heading::advanced_heading_css;
pub use row::row_layout_css;
pub use tabs::{tabs_css, TABS_SCRIPT};

use crate::attrs::Attrs;
use crate::css::{CssBuffer, CssRule, Tier};

/// `value` followed by the unit stored under `unit_key` (`px` if unset).
fn with_unit(attrs: &Attrs, value: Option<String>, unit_key: &str) -> Option<String> {
    let unit = attrs.value(unit_key).unwrap_or_else(|| "px".to_string());
    value.map(|v| format!("{}{}", v, unit))
}

/// Tablet and mobile font-size/line-height overrides for `selector`.
fn responsive_type(css: &mut CssBuffer, attrs: &Attrs, selector: &str) {
    for (tier, prefix) in [(Tier::Tablet, "tab"), (Tier::Mobile, "mobile")] {
        let rule = CssRule::new(selector)
            .with(
                "font-size",
                with_unit(attrs, attrs.value(&format!("{}Size", prefix)), "sizeType"),
            )
            .with(
                "line-height",
                with_unit(attrs, attrs.value(&format!("{}LineHeight", prefix)), "lineType"),
            );
        css.media(tier, [rule]);
    }
}
