use serde::{Deserialize, Serialize};

use crate::error::{BlockError, BlockResult};

pub const DEFAULT_FONT_HOST: &str = "//fonts.googleapis.com/css";
pub const DEFAULT_STYLE_ID: &str = "kadence-blocks-frontend";
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Settings for one page render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Emit the Google Fonts `<link>`; sites that self-host fonts turn this off.
    pub print_google_fonts: bool,
    /// Stylesheet endpoint the font query is appended to.
    pub font_host: String,
    /// `id` of the generated `<style>` element.
    pub style_id: String,
    /// Deepest block nesting the walker will descend into.
    pub max_depth: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            print_google_fonts: true,
            font_host: DEFAULT_FONT_HOST.to_string(),
            style_id: DEFAULT_STYLE_ID.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RenderConfig {
    /// Load from YAML; missing keys keep their defaults.
    pub fn from_yaml(yaml: &str) -> BlockResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: RenderConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> BlockResult<()> {
        if self.max_depth == 0 {
            return Err(BlockError::InvalidConfig {
                field: "max_depth".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.font_host.trim().is_empty() {
            return Err(BlockError::InvalidConfig {
                field: "font_host".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
