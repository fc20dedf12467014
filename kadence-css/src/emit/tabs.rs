use super::{responsive_type, with_unit};
use crate::attrs::Attrs;
use crate::css::{px, sides, CssBuffer, CssRule};

/// Script handle a page needs for interactive tabs.
pub const TABS_SCRIPT: &str = "kadence-frontend-tabs-js";

/// CSS for a tabs block, scoped to `.kt-tabs-id{unique_id}`.
pub fn tabs_css(attrs: &Attrs, unique_id: &str) -> String {
    let id = format!(".kt-tabs-id{}", unique_id);
    let mut css = CssBuffer::new();

    css.rule(
        CssRule::new(format!("{} .wp-block-kadence-tab", id))
            .with("border-width", attrs.sides("contentBorder").map(sides))
            .with("padding", attrs.sides("innerPadding").map(sides))
            .with("min-height", attrs.filled("minHeight").map(px))
            .with("border-color", attrs.filled("contentBorderColor"))
            .with("background", attrs.filled("contentBgColor")),
    );

    css.rule(
        CssRule::new(format!(".wp-block-kadence-tabs {} .kt-tabs-title-list li", id))
            .with("margin", attrs.sides("titleMargin").map(sides)),
    );

    css.rule(
        CssRule::new(format!(
            ".wp-block-kadence-tabs {0} .kt-tabs-title-list li .kt-tab-title, {0} .kt-tabs-accordion-title .kt-tab-title",
            id
        ))
        .with("font-size", with_unit(attrs, attrs.filled("size"), "sizeType"))
        .with("line-height", with_unit(attrs, attrs.filled("lineHeight"), "lineType"))
        .with("font-family", attrs.filled("typography"))
        .with("border-width", attrs.sides("titleBorderWidth").map(sides))
        .with("border-radius", attrs.sides("titleBorderRadius").map(sides))
        .with("padding", attrs.sides("titlePadding").map(sides))
        .with("border-color", attrs.filled("titleBorder"))
        .with("color", attrs.filled("titleColor"))
        .with("background", attrs.filled("titleBg")),
    );

    css.rule(
        title_state(
            attrs,
            format!(
                "{0} .kt-tabs-title-list li .kt-tab-title:hover, {0} .kt-tabs-content-wrap .kt-tabs-accordion-title .kt-tab-title:hover",
                id
            ),
            "Hover",
        ),
    );
    css.rule(
        title_state(
            attrs,
            format!(
                "{0} .kt-tabs-title-list li.kt-tab-title-active .kt-tab-title, {0} .kt-tabs-content-wrap .kt-tabs-accordion-title.kt-tab-title-active .kt-tab-title",
                id
            ),
            "Active",
        ),
    );

    responsive_type(
        &mut css,
        attrs,
        &format!("{} .kt-tabs-title-list li .kt-tab-title", id),
    );

    css.into_string()
}

/// Border, text and background colours for a title state (`Hover`, `Active`).
fn title_state(attrs: &Attrs, selector: String, state: &str) -> CssRule {
    CssRule::new(selector)
        .with("border-color", attrs.filled(&format!("titleBorder{}", state)))
        .with("color", attrs.filled(&format!("titleColor{}", state)))
        .with("background", attrs.filled(&format!("titleBg{}", state)))
}
