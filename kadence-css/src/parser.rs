//! Block markup parser.
//!
//! Stored post content delimits blocks with HTML comments:
//!
//! ```text
//! <!-- wp:kadence/rowlayout {"uniqueID":"_a1"} -->
//!   <!-- wp:kadence/column /-->
//! <!-- /wp:kadence/rowlayout -->
//! ```
//!
//! Names without a namespace belong to `core/`. The HTML between the
//! delimiters is not needed for head CSS and is dropped.

use log::{debug, warn};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

use crate::attrs::Attrs;
use crate::block::{blocks_from_json, Block};

const DEFAULT_NAMESPACE: &str = "core/";

fn delimiter_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?s)<!--\s+(?P<closer>/)?wp:(?P<namespace>[a-z][a-z0-9_-]*/)?(?P<name>[a-z][a-z0-9_-]*)\s+(?P<attrs>\{.*?\}\s+)?(?P<void>/)?-->",
        )
        .unwrap()
    })
}

struct OpenBlock {
    block: Block,
    offset: usize,
}

/// Parse serialized block markup into a block tree.
///
/// Never fails: attribute JSON that does not parse reads as an empty bag, a
/// closer that does not match the innermost open block is skipped, and
/// blocks still open at the end of the content are closed there.
pub fn parse_blocks(content: &str) -> Vec<Block> {
    let mut roots: Vec<Block> = Vec::new();
    let mut stack: Vec<OpenBlock> = Vec::new();

    for caps in delimiter_regex().captures_iter(content) {
        let offset = caps.get(0).map(|m| m.start()).unwrap_or_default();
        let namespace = caps
            .name("namespace")
            .map(|m| m.as_str())
            .unwrap_or(DEFAULT_NAMESPACE);
        let name = format!("{}{}", namespace, &caps["name"]);

        if caps.name("closer").is_some() {
            if !stack.last().is_some_and(|open| open.block.name == name) {
                warn!("unexpected closer for '{}' at byte {}; skipping", name, offset);
                continue;
            }
            if let Some(open) = stack.pop() {
                attach(&mut roots, &mut stack, open.block);
            }
            continue;
        }

        let attrs = match caps.name("attrs") {
            Some(m) => parse_attrs(&name, m.as_str(), offset),
            None => Attrs::new(),
        };
        let block = Block::new(name, attrs);

        if caps.name("void").is_some() {
            attach(&mut roots, &mut stack, block);
        } else {
            stack.push(OpenBlock { block, offset });
        }
    }

    while let Some(open) = stack.pop() {
        warn!(
            "block '{}' opened at byte {} is never closed",
            open.block.name, open.offset
        );
        attach(&mut roots, &mut stack, open.block);
    }

    debug!("parsed {} top-level blocks", roots.len());
    roots
}

/// Parse page content in either form: a JSON block tree or serialized block
/// markup. Content is only read as JSON when it is a JSON array; anything
/// else, such as a post opening with a `[shortcode]`, goes to the markup
/// parser.
pub fn parse_content(content: &str) -> Vec<Block> {
    if content.trim_start().starts_with('[') {
        match blocks_from_json(content) {
            Ok(blocks) => return blocks,
            Err(e) => debug!("content is not a JSON block tree ({}); reading as markup", e),
        }
    }
    parse_blocks(content)
}

fn attach(roots: &mut Vec<Block>, stack: &mut [OpenBlock], block: Block) {
    match stack.last_mut() {
        Some(parent) => parent.block.inner_blocks.push(block),
        None => roots.push(block),
    }
}

fn parse_attrs(name: &str, raw: &str, offset: usize) -> Attrs {
    match serde_json::from_str::<Value>(raw.trim()) {
        Ok(Value::Object(map)) => Attrs::from(map),
        Ok(other) => {
            warn!(
                "attributes of '{}' at byte {} are not an object ({}); ignoring them",
                name, offset, other
            );
            Attrs::new()
        }
        Err(e) => {
            warn!(
                "attributes of '{}' at byte {} are not valid JSON ({}); ignoring them",
                name, offset, e
            );
            Attrs::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockKind;

    #[test]
    fn parses_nested_blocks() {
        let content = r#"
<!-- wp:kadence/rowlayout {"uniqueID":"_r1","columns":2} -->
<div class="kt-row-layout">
<!-- wp:kadence/column {"topPadding":10} -->
<!-- wp:paragraph --><p>hi</p><!-- /wp:paragraph -->
<!-- /wp:kadence/column -->
<!-- wp:kadence/column /-->
</div>
<!-- /wp:kadence/rowlayout -->
<!-- wp:kadence/spacer {"spacerHeight":40} /-->
"#;
        let blocks = parse_blocks(content);
        assert_eq!(blocks.len(), 2);
        let row = &blocks[0];
        assert_eq!(row.kind(), BlockKind::RowLayout);
        assert_eq!(row.unique_id(), Some("_r1".to_string()));
        assert_eq!(row.inner_blocks.len(), 2);
        assert_eq!(row.inner_blocks[0].attrs.value("topPadding"), Some("10".into()));
        assert_eq!(row.inner_blocks[0].inner_blocks[0].name, "core/paragraph");
        assert_eq!(blocks[1].kind(), BlockKind::Spacer);
    }

    #[test]
    fn nested_json_attributes() {
        let content = r##"<!-- wp:kadence/advancedbtn {"uniqueID":"_b","btns":[{"color":"#111"},{"color":"#222"}]} /-->"##;
        let blocks = parse_blocks(content);
        assert_eq!(blocks[0].attrs.list("btns").map(|b| b.len()), Some(2));
    }

    #[test]
    fn reusable_reference_defaults_to_core_namespace() {
        let blocks = parse_blocks(r#"<!-- wp:block {"ref":12} /-->"#);
        assert_eq!(blocks[0].kind(), BlockKind::Reusable);
        assert_eq!(blocks[0].reusable_ref(), Some("12".to_string()));
    }

    #[test]
    fn stray_closer_is_skipped() {
        let blocks = parse_blocks(
            "<!-- wp:group --><!-- /wp:columns --><!-- wp:spacer /--><!-- /wp:group -->",
        );
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name, "core/group");
        assert_eq!(blocks[0].inner_blocks[0].name, "core/spacer");
    }

    #[test]
    fn closer_without_opener_is_skipped() {
        let blocks = parse_blocks("<!-- /wp:paragraph --><!-- wp:kadence/tabs /-->");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind(), BlockKind::Tabs);
    }

    #[test]
    fn unclosed_blocks_close_at_end_of_content() {
        let blocks = parse_blocks(
            r#"<!-- wp:kadence/rowlayout {"uniqueID":"_r"} --><!-- wp:kadence/column --><!-- wp:spacer /-->"#,
        );
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind(), BlockKind::RowLayout);
        let column = &blocks[0].inner_blocks[0];
        assert_eq!(column.kind(), BlockKind::Column);
        assert_eq!(column.inner_blocks[0].name, "core/spacer");
    }

    #[test]
    fn invalid_attributes_read_as_empty() {
        let blocks = parse_blocks(
            r#"<!-- wp:group {"a":1} /--><!-- wp:heading {"a":} /--><!-- wp:kadence/tabs {"uniqueID":"_t"} /-->"#,
        );
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].attrs.value("a"), Some("1".to_string()));
        assert!(blocks[1].attrs.is_empty());
        assert_eq!(blocks[2].unique_id(), Some("_t".to_string()));
    }

    #[test]
    fn plain_html_has_no_blocks() {
        assert!(parse_blocks("<p>classic content</p>").is_empty());
    }

    #[test]
    fn content_detects_json_trees() {
        let blocks = parse_content(r#"[{"blockName":"kadence/tabs","attrs":{}}]"#);
        assert_eq!(blocks[0].kind(), BlockKind::Tabs);
    }

    #[test]
    fn leading_shortcode_is_read_as_markup() {
        let blocks = parse_content(
            "[gallery ids=\"1,2\"]\n<!-- wp:kadence/advancedheading {\"uniqueID\":\"_h\",\"size\":20} /-->",
        );
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind(), BlockKind::AdvancedHeading);
        assert_eq!(blocks[0].attrs.value("size"), Some("20".to_string()));
    }
}
