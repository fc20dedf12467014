use kadence_css::{
    parse_blocks, parse_content, render_blocks, render_content, Attrs, Block, EmptyStore,
    MemoryStore, RenderConfig, Renderer,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::fs;
use std::path::PathBuf;

fn fixture(filename: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("fixtures");
    path.push(filename);
    fs::read_to_string(&path).unwrap()
}

fn store() -> MemoryStore {
    MemoryStore::from_yaml(&fixture("store.yaml")).unwrap()
}

fn block(name: &str, attrs: serde_json::Value) -> Block {
    Block::new(name, Attrs::from_value(attrs))
}

const PAGE_CSS: &str = "#kt-layout-id_a1 {margin-top:20px;background-color:#f5f5f5;}\
    #kt-layout-id_a1 > .kt-row-column-wrap > .inner-column-1 > .kt-inside-inner-col {padding-top:10px;}\
    #kt-adv-heading_h1 {font-size:32px;font-family:Roboto;}\
    .wp-block-kadence-tabs .kt-tabs-id_t1 .kt-tabs-title-list li .kt-tab-title, \
    .kt-tabs-id_t1 .kt-tabs-accordion-title .kt-tab-title {color:#444;}\
    .kt-btns_b1 {font-family:Lato;}\
    .kt-btns_b1 .kt-btn-wrap-0 .kt-button {color:#fff;background:#222;}";

// Worked examples

#[test]
fn test_row_layout_example() {
    let out = render_blocks(&[block(
        "kadence/rowlayout",
        json!({ "uniqueID": "x1", "bgColor": "#fff", "topMargin": 10, "bottomMargin": 20 }),
    )]);
    assert_eq!(
        out.css,
        "#kt-layout-idx1 {margin-top:10px;margin-bottom:20px;background-color:#fff;}"
    );
}

#[test]
fn test_heading_example_registers_bare_family() {
    let out = render_blocks(&[block(
        "kadence/advancedheading",
        json!({ "uniqueID": "h1", "size": 24, "sizeType": "px", "typography": "Roboto", "googleFont": true }),
    )]);
    assert_eq!(out.css, "#kt-adv-headingh1 {font-size:24px;font-family:Roboto;}");

    let roboto = out.fonts.get("Roboto").unwrap();
    assert!(roboto.variants.is_empty());
    assert!(roboto.subsets.is_empty());
}

#[test]
fn test_variants_accumulate_per_family() {
    let heading = |id: &str, variant: &str| {
        block(
            "kadence/advancedheading",
            json!({ "uniqueID": id, "typography": "Roboto", "googleFont": true, "fontVariant": variant }),
        )
    };
    let out = render_blocks(&[heading("a", "400"), heading("b", "700"), heading("c", "400")]);
    assert_eq!(out.fonts.len(), 1);
    assert_eq!(out.fonts.get("Roboto").unwrap().variants, vec!["400", "700"]);
}

// Fixture pages

#[test]
fn test_markup_page() {
    let config = RenderConfig::default();
    let out = render_content(&fixture("page.html"), &config, &store());

    assert_eq!(out.css, PAGE_CSS);
    assert_eq!(out.blocks_visited, 8);
    assert_eq!(out.scripts, vec!["kadence-frontend-tabs-js".to_string()]);
    let families: Vec<&str> = out.fonts.entries().iter().map(|e| e.family.as_str()).collect();
    assert_eq!(families, vec!["Roboto", "Lato"]);
}

#[test]
fn test_json_tree_renders_like_markup() {
    let config = RenderConfig::default();
    let from_markup = render_content(&fixture("page.html"), &config, &store());
    let from_json = render_content(&fixture("page.json"), &config, &store());

    assert_eq!(from_json.css, from_markup.css);
    assert_eq!(from_json.fonts, from_markup.fonts);
    // The JSON tree also carries the freeform whitespace between blocks.
    assert_eq!(from_json.blocks_visited, 9);
}

#[test]
fn test_head_html() {
    let config = RenderConfig::default();
    let out = render_content(&fixture("page.html"), &config, &store());
    assert_eq!(
        out.head_html(&config),
        format!(
            "<style type=\"text/css\" media=\"all\" id=\"kadence-blocks-frontend\">{}</style>\n\
             <link href=\"//fonts.googleapis.com/css?family=Roboto:700%7CLato:regular&amp;subset=latin\" rel=\"stylesheet\">",
            PAGE_CSS
        )
    );
}

#[test]
fn test_config_file_disables_font_link() {
    let config = RenderConfig::from_yaml(&fixture("config.yaml")).unwrap();
    assert!(!config.print_google_fonts);

    let out = render_content(&fixture("page.html"), &config, &store());
    // Fonts are still collected; only the link is suppressed.
    assert_eq!(out.fonts.len(), 2);
    assert_eq!(out.font_link(&config), None);

    let html = out.head_html(&config);
    assert!(html.starts_with(r#"<style type="text/css" media="all" id="site-blocks">"#));
    assert!(!html.contains("<link"));
}

// Reusable blocks

#[test]
fn test_reusable_without_store_is_skipped() {
    let config = RenderConfig::default();
    let out = render_content(&fixture("page.html"), &config, &EmptyStore);
    assert!(!out.css.contains(".kt-btns_b1"));
    assert_eq!(out.fonts.len(), 1);
}

#[test]
fn test_reusable_must_be_wp_block() {
    let out = Renderer::new(RenderConfig::default(), &store())
        .render(&[block("core/block", json!({ "ref": "40" }))]);
    assert_eq!(out.css, "");
    assert_eq!(out.blocks_visited, 1);
}

// Malformed markup

#[test]
fn test_unclosed_block_still_renders() {
    let out = render_blocks(&parse_blocks(
        "<!-- wp:kadence/rowlayout {\"uniqueID\":\"_a\",\"topMargin\":5} -->\n<div></div>",
    ));
    assert_eq!(out.css, "#kt-layout-id_a {margin-top:5px;}");
}

#[test]
fn test_bad_attribute_json_keeps_sibling_css() {
    let config = RenderConfig::default();
    let page = "<!-- wp:kadence/rowlayout {\"uniqueID\":\"_a\",\"bgColor\":\"#fff\"} -->\n\
                <!-- /wp:kadence/rowlayout -->\n\
                <!-- wp:core/paragraph {\"x\":} /-->";
    let out = render_content(page, &config, &EmptyStore);
    assert_eq!(out.css, "#kt-layout-id_a {background-color:#fff;}");
    assert_eq!(out.blocks_visited, 2);
}

#[test]
fn test_stray_closer_keeps_sibling_css() {
    let config = RenderConfig::default();
    let page = "<!-- wp:kadence/rowlayout {\"uniqueID\":\"_a\",\"bgColor\":\"#fff\"} -->\n\
                <!-- /wp:kadence/rowlayout -->\n\
                <!-- /wp:paragraph -->";
    let out = render_content(page, &config, &EmptyStore);
    assert_eq!(out.css, "#kt-layout-id_a {background-color:#fff;}");
}

#[test]
fn test_leading_shortcode_is_not_a_json_tree() {
    let config = RenderConfig::default();
    let page = "[gallery ids=\"1,2\"]\n\
                <!-- wp:kadence/advancedheading {\"uniqueID\":\"_h\",\"size\":20} /-->";
    let out = render_content(page, &config, &EmptyStore);
    assert_eq!(out.css, "#kt-adv-heading_h {font-size:20px;}");
}

#[test]
fn test_plain_html_has_no_head_output() {
    let config = RenderConfig::default();
    let out = render_content("<p>No blocks here.</p>", &config, &EmptyStore);
    assert_eq!(out.blocks_visited, 0);
    assert_eq!(out.head_html(&config), "");
}

#[test]
fn test_repeated_renders_do_not_share_fonts() {
    let config = RenderConfig::default();
    let store = store();
    let renderer = Renderer::new(config.clone(), &store);
    let page = parse_content(&fixture("page.html"));

    let first = renderer.render(&page);
    let second = renderer.render(&page);
    assert_eq!(first, second);

    let empty = renderer.render(&[]);
    assert_eq!(empty.font_link(&config), None);
}
