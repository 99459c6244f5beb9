//! Block model: the live canvas item and its closed set of kinds.

use pagekit_core::{Position, Size};

use crate::style::StyleMap;

/// Kind of a canvas block.
///
/// This is the closed set of recognized block kinds; anything else is
/// rejected at creation and at the deserialization boundary. Simple kinds
/// carry plain text content, composite kinds carry a serialized markup
/// fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Text,
    Heading,
    Image,
    Button,
    Divider,
    Container,
    List,
    Input,
    Hero,
    Features,
    Testimonials,
    Pricing,
    Team,
    Newsletter,
    Footer,
}

impl BlockKind {
    /// All recognized kinds, in palette order.
    pub const ALL: [BlockKind; 15] = [
        BlockKind::Text,
        BlockKind::Heading,
        BlockKind::Image,
        BlockKind::Button,
        BlockKind::Divider,
        BlockKind::Container,
        BlockKind::List,
        BlockKind::Input,
        BlockKind::Hero,
        BlockKind::Features,
        BlockKind::Testimonials,
        BlockKind::Pricing,
        BlockKind::Team,
        BlockKind::Newsletter,
        BlockKind::Footer,
    ];

    /// Get kind as its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Text => "text",
            BlockKind::Heading => "heading",
            BlockKind::Image => "image",
            BlockKind::Button => "button",
            BlockKind::Divider => "divider",
            BlockKind::Container => "container",
            BlockKind::List => "list",
            BlockKind::Input => "input",
            BlockKind::Hero => "hero",
            BlockKind::Features => "features",
            BlockKind::Testimonials => "testimonials",
            BlockKind::Pricing => "pricing",
            BlockKind::Team => "team",
            BlockKind::Newsletter => "newsletter",
            BlockKind::Footer => "footer",
        }
    }

    /// Parse from a wire string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "text" => Some(BlockKind::Text),
            "heading" => Some(BlockKind::Heading),
            "image" => Some(BlockKind::Image),
            "button" => Some(BlockKind::Button),
            "divider" => Some(BlockKind::Divider),
            "container" => Some(BlockKind::Container),
            "list" => Some(BlockKind::List),
            "input" => Some(BlockKind::Input),
            "hero" => Some(BlockKind::Hero),
            "features" => Some(BlockKind::Features),
            "testimonials" => Some(BlockKind::Testimonials),
            "pricing" => Some(BlockKind::Pricing),
            "team" => Some(BlockKind::Team),
            "newsletter" => Some(BlockKind::Newsletter),
            "footer" => Some(BlockKind::Footer),
            _ => None,
        }
    }

    /// Whether the kind's content is a markup fragment rather than plain text.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            BlockKind::Container
                | BlockKind::List
                | BlockKind::Hero
                | BlockKind::Features
                | BlockKind::Testimonials
                | BlockKind::Pricing
                | BlockKind::Team
                | BlockKind::Newsletter
                | BlockKind::Footer
        )
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A block on the canvas that can be selected and manipulated.
///
/// Blocks are owned by exactly one canvas. Identity (`id`) is stable across
/// delete/undo: a delete command's undo restores the same block, so later
/// commands referencing the id stay valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub id: u64,
    pub kind: BlockKind,
    /// Plain text for simple kinds, serialized markup for composite kinds.
    pub content: String,
    pub position: Position,
    /// `None` means intrinsic dimensions.
    pub size: Option<Size>,
    pub styles: StyleMap,
}

impl Block {
    /// Creates a new block with no explicit size and no styles set.
    pub fn new(id: u64, kind: BlockKind, content: impl Into<String>, position: Position) -> Self {
        Self {
            id,
            kind,
            content: content.into(),
            position,
            size: None,
            styles: StyleMap::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_strings_round_trip() {
        for kind in BlockKind::ALL {
            assert_eq!(BlockKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn unknown_kind_rejected() {
        assert_eq!(BlockKind::parse("carousel"), None);
        assert_eq!(BlockKind::parse("Text"), None);
        assert_eq!(BlockKind::parse(""), None);
    }
}
