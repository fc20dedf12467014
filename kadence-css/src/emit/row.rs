use crate::attrs::Attrs;
use crate::css::{opacity, percent, px, CssBuffer, CssRule, Tier};

const SEPARATOR_TIERS: [(Tier, &str); 3] = [
    (Tier::Desktop, ""),
    (Tier::Tablet, "Tablet"),
    (Tier::Mobile, "Mobile"),
];

/// CSS for a row layout block, scoped to `#kt-layout-id{unique_id}`.
pub fn row_layout_css(attrs: &Attrs, unique_id: &str) -> String {
    let id = format!("#kt-layout-id{}", unique_id);
    let mut css = CssBuffer::new();

    let mut row = CssRule::new(id.as_str());
    row.push("margin-top", attrs.value("topMargin").map(px))
        .push("margin-bottom", attrs.value("bottomMargin").map(px))
        .push("background-color", attrs.value("bgColor"));
    push_background_image(&mut row, attrs, "bgImg");
    css.rule(row);

    separator(&mut css, attrs, &id, "bottomSep", "kt-row-layout-bottom-sep");
    separator(&mut css, attrs, &id, "topSep", "kt-row-layout-top-sep");

    let mut wrap = column_wrap(attrs, &id, "");
    wrap.push("min-height", attrs.value("minHeight").map(px));
    if let Some(max_width) = attrs.value("maxWidth") {
        wrap.push("max-width", Some(px(max_width)))
            .push("margin-left", Some("auto".to_string()))
            .push("margin-right", Some("auto".to_string()));
    }
    css.rule(wrap);

    if attrs.has_any(&["overlay", "overlayBgImg", "overlaySecond"]) {
        css.rule(overlay(attrs, &id));
    }

    css.media(
        Tier::Mobile,
        [
            CssRule::new(id.as_str())
                .with("margin-top", attrs.value("topMarginM").map(px))
                .with("margin-bottom", attrs.value("bottomMarginM").map(px)),
            column_wrap(attrs, &id, "M"),
        ],
    );

    css.into_string()
}

fn column_wrap(attrs: &Attrs, id: &str, suffix: &str) -> CssRule {
    let mut rule = CssRule::new(format!("{} > .kt-row-column-wrap", id));
    for side in ["top", "bottom", "left", "right"] {
        rule.push(
            &format!("padding-{}", side),
            attrs.value(&format!("{}Padding{}", side, suffix)).map(px),
        );
    }
    rule
}

/// Image plus its size/position/attachment/repeat, read from `{key}`,
/// `{key}Size`, `{key}Position`, `{key}Attachment` and `{key}Repeat`.
fn push_background_image(rule: &mut CssRule, attrs: &Attrs, key: &str) {
    let Some(image) = attrs.value(key) else {
        return;
    };
    let or = |suffix: &str, default: &str| {
        Some(
            attrs
                .value(&format!("{}{}", key, suffix))
                .unwrap_or_else(|| default.to_string()),
        )
    };
    rule.push("background-image", Some(format!("url({})", image)))
        .push("background-size", or("Size", "cover"))
        .push("background-position", or("Position", "center center"))
        .push("background-attachment", or("Attachment", "scroll"))
        .push("background-repeat", or("Repeat", "no-repeat"));
}

fn separator(css: &mut CssBuffer, attrs: &Attrs, id: &str, key: &str, class: &str) {
    match attrs.value(key) {
        Some(style) if style != "none" => {}
        _ => return,
    }
    for (tier, suffix) in SEPARATOR_TIERS {
        css.media(
            tier,
            [
                CssRule::new(format!("{} .{}", id, class)).with(
                    "height",
                    attrs.value(&format!("{}Height{}", key, suffix)).map(px),
                ),
                CssRule::new(format!("{} .{} svg", id, class)).with(
                    "width",
                    attrs.value(&format!("{}Width{}", key, suffix)).map(percent),
                ),
            ],
        );
    }
}

fn overlay(attrs: &Attrs, id: &str) -> CssRule {
    let mut rule = CssRule::new(format!("{} > .kt-row-layout-overlay", id));
    rule.push("opacity", attrs.number("overlayOpacity").map(opacity));

    if attrs.value("currentOverlayTab").as_deref() == Some("grad") {
        rule.push("background-image", Some(gradient(attrs)));
    } else {
        rule.push("background-color", attrs.value("overlay"));
        push_background_image(&mut rule, attrs, "overlayBgImg");
    }

    rule.push("mix-blend-mode", attrs.value("overlayBlendMode"));
    rule
}

fn gradient(attrs: &Attrs) -> String {
    let or = |key: &str, default: &str| attrs.value(key).unwrap_or_else(|| default.to_string());
    let kind = or("overlayGradType", "linear");
    let angle = if kind == "radial" {
        format!("at {}", or("overlayBgImgPosition", "center center"))
    } else {
        format!("{}deg", or("overlayGradAngle", "180"))
    };
    format!(
        "{}-gradient({}, {} {}%, {} {}%)",
        kind,
        angle,
        or("overlay", "transparent"),
        or("overlayGradLoc", "0"),
        or("overlaySecond", "#00B5E2"),
        or("overlayGradLocSecond", "100"),
    )
}
