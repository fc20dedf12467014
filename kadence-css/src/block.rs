use serde::{Deserialize, Deserializer, Serialize};

use crate::attrs::{scalar_string, Attrs};

pub const ROW_LAYOUT: &str = "kadence/rowlayout";
pub const COLUMN: &str = "kadence/column";
pub const ADVANCED_HEADING: &str = "kadence/advancedheading";
pub const ADVANCED_BUTTON: &str = "kadence/advancedbtn";
pub const TABS: &str = "kadence/tabs";
pub const SPACER: &str = "kadence/spacer";
pub const REUSABLE: &str = "core/block";

/// One node of a page's block tree.
///
/// Deserializes from the host parser's JSON shape
/// (`blockName` / `attrs` / `innerBlocks`); freeform content has no name and
/// comes through with an empty one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(rename = "blockName", default, deserialize_with = "nullable_name")]
    pub name: String,
    #[serde(default)]
    pub attrs: Attrs,
    #[serde(rename = "innerBlocks", default)]
    pub inner_blocks: Vec<Block>,
}

/// The block types the renderer knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    RowLayout,
    Column,
    AdvancedHeading,
    AdvancedButton,
    Tabs,
    /// Styled inline by its saved markup; no head CSS.
    Spacer,
    Reusable,
    Other,
}

impl Block {
    pub fn new(name: impl Into<String>, attrs: Attrs) -> Self {
        Self {
            name: name.into(),
            attrs,
            inner_blocks: Vec::new(),
        }
    }

    pub fn with_inner(mut self, inner_blocks: Vec<Block>) -> Self {
        self.inner_blocks = inner_blocks;
        self
    }

    pub fn kind(&self) -> BlockKind {
        match self.name.as_str() {
            ROW_LAYOUT => BlockKind::RowLayout,
            COLUMN => BlockKind::Column,
            ADVANCED_HEADING => BlockKind::AdvancedHeading,
            ADVANCED_BUTTON => BlockKind::AdvancedButton,
            TABS => BlockKind::Tabs,
            SPACER => BlockKind::Spacer,
            REUSABLE => BlockKind::Reusable,
            _ => BlockKind::Other,
        }
    }

    /// The `uniqueID` used to scope this block's selectors.
    pub fn unique_id(&self) -> Option<String> {
        self.attrs.value("uniqueID")
    }

    /// The stored-content id a reusable block points at.
    pub fn reusable_ref(&self) -> Option<String> {
        if self.kind() != BlockKind::Reusable {
            return None;
        }
        self.attrs.raw("ref").and_then(scalar_string).filter(|s| !s.is_empty())
    }
}

fn nullable_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a JSON block tree (an array of blocks, as the host parser emits it).
pub fn blocks_from_json(json: &str) -> crate::BlockResult<Vec<Block>> {
    Ok(serde_json::from_str(json)?)
}
