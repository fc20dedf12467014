use super::{responsive_type, with_unit};
use crate::attrs::Attrs;
use crate::css::{CssBuffer, CssRule};

/// CSS for an advanced heading, scoped to `#kt-adv-heading{unique_id}`.
pub fn advanced_heading_css(attrs: &Attrs, unique_id: &str) -> String {
    let selector = format!("#kt-adv-heading{}", unique_id);
    let mut css = CssBuffer::new();

    css.rule(
        CssRule::new(selector.as_str())
            .with("font-size", with_unit(attrs, attrs.filled("size"), "sizeType"))
            .with("line-height", with_unit(attrs, attrs.filled("lineHeight"), "lineType"))
            .with("font-weight", attrs.filled("fontWeight"))
            .with("font-style", attrs.filled("fontStyle"))
            .with("font-family", attrs.filled("typography")),
    );
    responsive_type(&mut css, attrs, &selector);

    css.into_string()
}
