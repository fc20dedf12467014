use crate::attrs::Attrs;
use crate::css::{CssBuffer, CssRule};

/// CSS for an advanced button group, scoped to `.kt-btns{unique_id}`.
///
/// Each entry of `btns` gets a base rule and a `:hover`/`:focus` rule keyed
/// by its 0-based position.
pub fn advanced_button_css(attrs: &Attrs, unique_id: &str) -> String {
    let group = format!(".kt-btns{}", unique_id);
    let mut css = CssBuffer::new();

    if attrs.has("typography") {
        css.rule(
            CssRule::new(group.as_str())
                .with("font-family", attrs.filled("typography"))
                .with("font-weight", attrs.filled("fontWeight"))
                .with("font-style", attrs.filled("fontStyle")),
        );
    }

    for (i, btn) in attrs.list("btns").unwrap_or_default().iter().enumerate() {
        if !btn.is_object() {
            continue;
        }
        let btn = Attrs::from_value(btn.clone());
        let button = format!("{} .kt-btn-wrap-{} .kt-button", group, i);

        css.rule(
            CssRule::new(button.as_str())
                .with("color", btn.filled("color"))
                .with("background", btn.filled("background"))
                .with("border-color", btn.filled("border")),
        );
        css.rule(
            CssRule::new(format!("{0}:hover, {0}:focus", button))
                .with("color", btn.filled("colorHover"))
                .with("background", btn.filled("backgroundHover"))
                .with("border-color", btn.filled("borderHover")),
        );
    }

    css.into_string()
}
