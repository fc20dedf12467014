use crate::attrs::Attrs;
use crate::css::{px, CssBuffer, CssRule, Tier};

/// CSS for the `index`-th (1-based) column of the row `row_id`.
pub fn column_css(attrs: &Attrs, row_id: &str, index: usize) -> String {
    let selector = format!(
        "#kt-layout-id{} > .kt-row-column-wrap > .inner-column-{} > .kt-inside-inner-col",
        row_id, index
    );
    let mut css = CssBuffer::new();
    for (tier, suffix) in [(Tier::Desktop, ""), (Tier::Mobile, "M")] {
        let mut rule = CssRule::new(selector.as_str());
        for (property, key) in [
            ("padding-top", "topPadding"),
            ("padding-bottom", "bottomPadding"),
            ("padding-left", "leftPadding"),
            ("padding-right", "rightPadding"),
            ("margin-top", "topMargin"),
            ("margin-bottom", "bottomMargin"),
        ] {
            rule.push(property, attrs.value(&format!("{}{}", key, suffix)).map(px));
        }
        css.media(tier, [rule]);
    }
    css.into_string()
}
