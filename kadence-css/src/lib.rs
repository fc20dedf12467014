//! # Kadence block CSS
//!
//! Walks a page's block tree and produces the CSS for the Kadence layout
//! blocks it contains, along with the Google Fonts those blocks ask for.
//!
//! ## Features
//! - Block markup parser (`<!-- wp:name {...} -->`) and JSON parse-tree loader
//! - Per-block CSS for row layouts, columns, headings, buttons and tabs
//! - Reusable block resolution through a pluggable content store
//! - One font registry per render, printed as a single stylesheet link
//!
//! ## Example
//! ```ignore
//! use kadence_css::{render_content, EmptyStore, RenderConfig};
//!
//! let post = r#"<!-- wp:kadence/advancedheading {"uniqueID":"_1","size":32} /-->"#;
//! let config = RenderConfig::default();
//! let out = render_content(post, &config, &EmptyStore);
//! println!("{}", out.head_html(&config));
//! ```

pub mod attrs;
pub mod block;
pub mod config;
pub mod css;
pub mod emit;
pub mod error;
pub mod fonts;
pub mod head;
pub mod parser;
pub mod store;
pub mod walker;

// --- Core types ---
pub use attrs::Attrs;
pub use block::{Block, BlockKind};
pub use config::RenderConfig;
pub use error::{BlockError, BlockResult};
pub use fonts::{FontEntry, FontRegistry};
pub use walker::{RenderOutput, Renderer};

// --- Content sources ---
pub use parser::{parse_blocks, parse_content};
pub use store::{ContentStore, EmptyStore, MemoryStore, StoredPost};

/// Render a block tree with the default configuration and no reusable blocks.
pub fn render_blocks(blocks: &[Block]) -> RenderOutput {
    Renderer::new(RenderConfig::default(), &EmptyStore).render(blocks)
}

/// Parse post content (block markup or a JSON parse tree) and render it.
///
/// Malformed markup never fails the render; blocks that can be read still
/// produce their CSS.
pub fn render_content(
    content: &str,
    config: &RenderConfig,
    store: &dyn ContentStore,
) -> RenderOutput {
    let blocks = parse_content(content);
    Renderer::new(config.clone(), store).render(&blocks)
}
