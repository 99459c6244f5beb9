//! Per-kind defaults used when a block is dropped onto the canvas.
//!
//! Simple kinds start with placeholder text; composite kinds start with a
//! small markup fragment the shell renders as-is. Content is opaque to the
//! core either way.

use pagekit_core::{Position, Size};

use crate::block::{Block, BlockKind};

/// Placeholder image shown until the user picks a real one.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";

/// Default content for a freshly dropped block of the given kind.
pub fn default_content(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::Text => "Double click to edit",
        BlockKind::Heading => "Heading",
        BlockKind::Image => PLACEHOLDER_IMAGE_URL,
        BlockKind::Button => "Button",
        BlockKind::Divider => "",
        BlockKind::Container => "<div class=\"container\"></div>",
        BlockKind::List => "<ul><li>First item</li><li>Second item</li></ul>",
        BlockKind::Input => "",
        BlockKind::Hero => {
            "<section class=\"hero\"><h1>Build something great</h1>\
             <p>Describe your product in one sentence.</p></section>"
        }
        BlockKind::Features => {
            "<section class=\"features\"><div>Feature one</div>\
             <div>Feature two</div><div>Feature three</div></section>"
        }
        BlockKind::Testimonials => {
            "<section class=\"testimonials\"><blockquote>It just works.</blockquote></section>"
        }
        BlockKind::Pricing => {
            "<section class=\"pricing\"><div>Free</div><div>Pro</div><div>Team</div></section>"
        }
        BlockKind::Team => "<section class=\"team\"><div>Add a team member</div></section>",
        BlockKind::Newsletter => {
            "<section class=\"newsletter\"><input placeholder=\"Email address\">\
             <button>Subscribe</button></section>"
        }
        BlockKind::Footer => "<footer><p>\u{a9} Your Company</p></footer>",
    }
}

/// Default explicit size for a freshly dropped block, `None` for kinds that
/// render at their intrinsic size.
pub fn default_size(kind: BlockKind) -> Option<Size> {
    match kind {
        BlockKind::Text
        | BlockKind::Heading
        | BlockKind::Image
        | BlockKind::Button
        | BlockKind::Input => None,
        BlockKind::Divider => Some(Size::new(400, 2)),
        BlockKind::Container => Some(Size::new(400, 300)),
        BlockKind::List => None,
        BlockKind::Hero => Some(Size::new(960, 320)),
        BlockKind::Features => Some(Size::new(960, 240)),
        BlockKind::Testimonials => Some(Size::new(960, 200)),
        BlockKind::Pricing => Some(Size::new(960, 280)),
        BlockKind::Team => Some(Size::new(960, 240)),
        BlockKind::Newsletter => Some(Size::new(600, 120)),
        BlockKind::Footer => Some(Size::new(960, 160)),
    }
}

/// Instantiates a block of the given kind from its template.
pub fn instantiate(id: u64, kind: BlockKind, position: Position) -> Block {
    let mut block = Block::new(id, kind, default_content(kind), position);
    block.size = default_size(kind);
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_instantiates() {
        for (i, kind) in BlockKind::ALL.into_iter().enumerate() {
            let block = instantiate(i as u64 + 1, kind, Position::new(10, 20));
            assert_eq!(block.kind, kind);
            assert_eq!(block.position, Position::new(10, 20));
            if kind.is_composite() {
                assert!(block.content.starts_with('<'), "{kind} should carry markup");
            }
        }
    }
}
