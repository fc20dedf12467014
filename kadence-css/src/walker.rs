//! Block tree walker.
//!
//! Visits a page's blocks in document order, children before the next
//! sibling, and concatenates the CSS of every block it recognises. Reusable
//! block references are resolved through a [`ContentStore`] and walked in
//! place.

use log::{debug, warn};

use crate::attrs::Attrs;
use crate::block::{Block, BlockKind};
use crate::config::RenderConfig;
use crate::emit::{
    advanced_button_css, advanced_heading_css, column_css, row_layout_css, tabs_css, TABS_SCRIPT,
};
use crate::fonts::FontRegistry;
use crate::parser::parse_content;
use crate::store::ContentStore;

/// Everything one render produces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOutput {
    /// Concatenated CSS for the whole page.
    pub css: String,
    /// Google fonts referenced by the rendered blocks.
    pub fonts: FontRegistry,
    /// Client-side script handles the page needs, first-seen order.
    pub scripts: Vec<String>,
    /// Number of blocks visited, reusable content included.
    pub blocks_visited: usize,
}

impl RenderOutput {
    fn require_script(&mut self, handle: &str) {
        if !self.scripts.iter().any(|s| s == handle) {
            self.scripts.push(handle.to_string());
        }
    }
}

pub struct Renderer<'a> {
    config: RenderConfig,
    store: &'a dyn ContentStore,
}

impl<'a> Renderer<'a> {
    pub fn new(config: RenderConfig, store: &'a dyn ContentStore) -> Self {
        Self { config, store }
    }

    /// Render a block tree. Each call starts from an empty font registry.
    pub fn render(&self, blocks: &[Block]) -> RenderOutput {
        let mut walk = Walk {
            renderer: self,
            out: RenderOutput::default(),
            expanding: Vec::new(),
        };
        walk.blocks(blocks, 0);
        debug!(
            "rendered {} blocks: {} bytes of css, {} font families",
            walk.out.blocks_visited,
            walk.out.css.len(),
            walk.out.fonts.len()
        );
        walk.out
    }
}

struct Walk<'r, 'a> {
    renderer: &'r Renderer<'a>,
    out: RenderOutput,
    /// Reusable ids currently being expanded, outermost first.
    expanding: Vec<String>,
}

impl Walk<'_, '_> {
    fn blocks(&mut self, blocks: &[Block], depth: usize) {
        if depth >= self.renderer.config.max_depth {
            warn!(
                "block nesting exceeds {} levels; skipping {} blocks",
                self.renderer.config.max_depth,
                blocks.len()
            );
            return;
        }
        for block in blocks {
            self.visit(block, depth);
        }
    }

    fn visit(&mut self, block: &Block, depth: usize) {
        self.out.blocks_visited += 1;

        match block.kind() {
            BlockKind::RowLayout => {
                if let Some(id) = block.unique_id() {
                    self.out.css.push_str(&row_layout_css(&block.attrs, &id));
                    for (i, child) in block.inner_blocks.iter().enumerate() {
                        if child.kind() == BlockKind::Column {
                            self.out.css.push_str(&column_css(&child.attrs, &id, i + 1));
                        }
                    }
                }
            }
            BlockKind::AdvancedHeading => {
                self.styled(block, advanced_heading_css);
            }
            BlockKind::AdvancedButton => {
                self.styled(block, advanced_button_css);
            }
            BlockKind::Tabs => {
                if self.styled(block, tabs_css) {
                    self.out.require_script(TABS_SCRIPT);
                }
            }
            BlockKind::Reusable => self.reusable(block, depth),
            BlockKind::Column | BlockKind::Spacer | BlockKind::Other => {}
        }

        self.blocks(&block.inner_blocks, depth + 1);
    }

    /// Register the block's font, then emit CSS scoped by its unique id.
    /// Returns false when the block has no id.
    fn styled(&mut self, block: &Block, emit: fn(&Attrs, &str) -> String) -> bool {
        self.out.fonts.register_block(&block.attrs);
        let Some(id) = block.unique_id() else {
            debug!("{} without uniqueID; no css emitted", block.name);
            return false;
        };
        self.out.css.push_str(&emit(&block.attrs, &id));
        true
    }

    fn reusable(&mut self, block: &Block, depth: usize) {
        let Some(id) = block.reusable_ref() else {
            return;
        };
        if self.expanding.contains(&id) {
            warn!(
                "reusable block {} references itself (via {}); skipping",
                id,
                self.expanding.join(" -> ")
            );
            return;
        }
        let Some(post) = self.renderer.store.fetch(&id) else {
            debug!("reusable block {} not found", id);
            return;
        };
        if !post.is_reusable() {
            debug!("post {} is a '{}', not a reusable block", id, post.post_type);
            return;
        }
        let tree = parse_content(&post.content);

        self.expanding.push(id);
        self.blocks(&tree, depth + 1);
        self.expanding.pop();
    }
}
