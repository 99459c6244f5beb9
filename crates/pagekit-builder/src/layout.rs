//! Serialization and deserialization for page layouts.
//!
//! `LayoutItem` is the flat wire record the storage collaborator consumes:
//! insertion order is z-order, positions and sizes are unit-suffixed pixel
//! strings (`"120px"`, a deliberate contract — the consumer applies them
//! directly as visual offsets), and style values are raw strings with the
//! empty string meaning "unset". `LayoutFile` is the versioned JSON envelope
//! the file store writes.

use chrono::{DateTime, Utc};
use pagekit_core::constants::PX_SUFFIX;
use pagekit_core::{LayoutError, Position, Size, StorageError};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::block::{Block, BlockKind};
use crate::style::StyleMap;

/// Layout file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// One persisted canvas block in wire form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutItem {
    /// Block kind as a wire string; validated on restore.
    #[serde(rename = "type")]
    pub kind: String,
    /// Opaque payload: plain text or a serialized markup fragment.
    pub content: String,
    /// `"<n>px"` offset from the canvas origin.
    pub left: String,
    /// `"<n>px"` offset from the canvas origin.
    pub top: String,
    /// `"<n>px"`; absent means intrinsic width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    /// `"<n>px"`; absent means intrinsic height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    /// Style values; omitted on the wire when every property is unset,
    /// which deserializes back to the same all-empty map.
    #[serde(default, skip_serializing_if = "StyleMap::is_empty")]
    pub styles: StyleMap,
}

/// Formats a pixel count as its wire string.
pub fn format_px(value: i64) -> String {
    format!("{value}{PX_SUFFIX}")
}

/// Parses a `"<n>px"` wire string into a signed pixel count.
pub fn parse_px(field: &str, value: &str) -> Result<i32, LayoutError> {
    value
        .trim()
        .strip_suffix(PX_SUFFIX)
        .and_then(|n| n.trim().parse::<i32>().ok())
        .ok_or_else(|| LayoutError::InvalidPixelValue {
            field: field.to_string(),
            value: value.to_string(),
        })
}

/// Parses a `"<n>px"` wire string into an unsigned dimension.
pub fn parse_px_dim(field: &str, value: &str) -> Result<u32, LayoutError> {
    let px = parse_px(field, value)?;
    u32::try_from(px).map_err(|_| LayoutError::InvalidPixelValue {
        field: field.to_string(),
        value: value.to_string(),
    })
}

impl LayoutItem {
    /// Captures a block exactly as currently rendered.
    pub fn from_block(block: &Block) -> LayoutItem {
        LayoutItem {
            kind: block.kind.as_str().to_string(),
            content: block.content.clone(),
            left: format_px(block.position.left as i64),
            top: format_px(block.position.top as i64),
            width: block.size.map(|s| format_px(s.width as i64)),
            height: block.size.map(|s| format_px(s.height as i64)),
            styles: block.styles.clone(),
        }
    }

    /// Rebuilds a live block under the given id.
    ///
    /// Rejects unknown kinds and malformed pixel fields with a validation
    /// error; the caller decides whether to skip the item or abort the
    /// batch.
    pub fn to_block(&self, id: u64) -> Result<Block, LayoutError> {
        let kind = BlockKind::parse(&self.kind).ok_or_else(|| LayoutError::UnknownBlockKind {
            kind: self.kind.clone(),
        })?;
        let position = Position::new(parse_px("left", &self.left)?, parse_px("top", &self.top)?);
        let size = match (&self.width, &self.height) {
            (Some(w), Some(h)) => Some(Size::new(
                parse_px_dim("width", w)?,
                parse_px_dim("height", h)?,
            )),
            (None, None) => None,
            (Some(_), None) => {
                return Err(LayoutError::IncompleteSize {
                    present: "width".to_string(),
                    missing: "height".to_string(),
                })
            }
            (None, Some(_)) => {
                return Err(LayoutError::IncompleteSize {
                    present: "height".to_string(),
                    missing: "width".to_string(),
                })
            }
        };

        Ok(Block {
            id,
            kind,
            content: self.content.clone(),
            position,
            size,
            styles: self.styles.clone(),
        })
    }
}

/// Layout metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

/// Complete layout file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutFile {
    pub version: String,
    pub metadata: LayoutMetadata,
    pub items: Vec<LayoutItem>,
}

impl LayoutFile {
    /// Create a new layout file with default values
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: LayoutMetadata {
                name: name.into(),
                created: now,
                modified: now,
                author: String::new(),
                description: String::new(),
            },
            items: Vec::new(),
        }
    }

    /// Save layout to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(self).map_err(|e| StorageError::Encode {
            reason: e.to_string(),
        })?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// Load layout from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let layout: LayoutFile =
            serde_json::from_str(&content).map_err(|e| StorageError::Decode {
                reason: e.to_string(),
            })?;
        Ok(layout)
    }
}
