//! Reversible commands over the canvas.
//!
//! Every user-visible mutation is one of these variants. A command captures
//! the "before" state it needs at construction time (old position, old text,
//! prior style values), never at undo time; that is what makes redo after
//! unrelated edits safe. Commands whose target block has gone missing
//! out-of-band degrade to a logged no-op rather than panicking.

use pagekit_core::Position;
use tracing::warn;

use crate::block::Block;
use crate::canvas::Canvas;
use crate::style::StylePatch;

/// A reversible unit of mutation with paired apply/undo effects.
#[derive(Debug, Clone)]
pub enum BuilderCommand {
    AddBlock(AddBlock),
    RemoveBlock(RemoveBlock),
    MoveBlock(MoveBlock),
    EditText(EditText),
    ApplyStyle(ApplyStyle),
}

/// Appends a freshly created block at the top of the z-order.
#[derive(Debug, Clone)]
pub struct AddBlock {
    pub id: u64,
    /// `Some` before apply and while undone, `None` while on the canvas.
    pub block: Option<Block>,
}

/// Removes a block, remembering where it sat so undo can put it back.
#[derive(Debug, Clone)]
pub struct RemoveBlock {
    pub id: u64,
    /// Block plus its original z-order index; `Some` while removed.
    pub slot: Option<(Block, usize)>,
}

/// Repositions a block. Both endpoints are captured at construction.
#[derive(Debug, Clone)]
pub struct MoveBlock {
    pub id: u64,
    pub from: Position,
    pub to: Position,
}

/// Replaces a block's text content. The old text is supplied by the caller
/// that owned the edit session, not re-read at undo time.
#[derive(Debug, Clone)]
pub struct EditText {
    pub id: u64,
    pub old_text: String,
    pub new_text: String,
}

/// Merges a style patch into a block. `previous` holds the prior values of
/// exactly the touched properties, snapshotted at construction.
#[derive(Debug, Clone)]
pub struct ApplyStyle {
    pub id: u64,
    pub patch: StylePatch,
    pub previous: StylePatch,
}

impl BuilderCommand {
    /// Returns the name of the command for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            BuilderCommand::AddBlock(_) => "Add Block",
            BuilderCommand::RemoveBlock(_) => "Delete Block",
            BuilderCommand::MoveBlock(_) => "Move Block",
            BuilderCommand::EditText(_) => "Edit Text",
            BuilderCommand::ApplyStyle(_) => "Apply Style",
        }
    }

    /// Returns the id of the block the command targets.
    pub fn target_id(&self) -> u64 {
        match self {
            BuilderCommand::AddBlock(cmd) => cmd.id,
            BuilderCommand::RemoveBlock(cmd) => cmd.id,
            BuilderCommand::MoveBlock(cmd) => cmd.id,
            BuilderCommand::EditText(cmd) => cmd.id,
            BuilderCommand::ApplyStyle(cmd) => cmd.id,
        }
    }

    /// Applies the command's forward effect.
    pub fn apply(&mut self, canvas: &mut Canvas) {
        let name = self.name();
        match self {
            BuilderCommand::AddBlock(cmd) => {
                if let Some(block) = cmd.block.take() {
                    canvas.push_block(block);
                } else {
                    warn!(id = cmd.id, command = name, "block already on canvas; skipping");
                }
            }
            BuilderCommand::RemoveBlock(cmd) => {
                if let Some(slot) = canvas.remove_block_return(cmd.id) {
                    cmd.slot = Some(slot);
                } else {
                    warn!(id = cmd.id, command = name, "target block missing; skipping");
                }
            }
            BuilderCommand::MoveBlock(cmd) => {
                if let Some(block) = canvas.get_block_mut(cmd.id) {
                    block.position = cmd.to;
                } else {
                    warn!(id = cmd.id, command = name, "target block missing; skipping");
                }
            }
            BuilderCommand::EditText(cmd) => {
                if let Some(block) = canvas.get_block_mut(cmd.id) {
                    block.content = cmd.new_text.clone();
                } else {
                    warn!(id = cmd.id, command = name, "target block missing; skipping");
                }
            }
            BuilderCommand::ApplyStyle(cmd) => {
                if let Some(block) = canvas.get_block_mut(cmd.id) {
                    block.styles.merge(&cmd.patch);
                } else {
                    warn!(id = cmd.id, command = name, "target block missing; skipping");
                }
            }
        }
    }

    /// Reverses the command's effect.
    pub fn undo(&mut self, canvas: &mut Canvas) {
        let name = self.name();
        match self {
            BuilderCommand::AddBlock(cmd) => {
                if let Some((block, _)) = canvas.remove_block_return(cmd.id) {
                    cmd.block = Some(block);
                } else {
                    warn!(id = cmd.id, command = name, "target block missing; skipping");
                }
            }
            BuilderCommand::RemoveBlock(cmd) => {
                // Re-insert at the original index, not at the end.
                if let Some((block, index)) = cmd.slot.take() {
                    canvas.insert_block_at(index, block);
                } else {
                    warn!(id = cmd.id, command = name, "block already on canvas; skipping");
                }
            }
            BuilderCommand::MoveBlock(cmd) => {
                if let Some(block) = canvas.get_block_mut(cmd.id) {
                    block.position = cmd.from;
                } else {
                    warn!(id = cmd.id, command = name, "target block missing; skipping");
                }
            }
            BuilderCommand::EditText(cmd) => {
                if let Some(block) = canvas.get_block_mut(cmd.id) {
                    block.content = cmd.old_text.clone();
                } else {
                    warn!(id = cmd.id, command = name, "target block missing; skipping");
                }
            }
            BuilderCommand::ApplyStyle(cmd) => {
                if let Some(block) = canvas.get_block_mut(cmd.id) {
                    block.styles.merge(&cmd.previous);
                } else {
                    warn!(id = cmd.id, command = name, "target block missing; skipping");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockKind;

    #[test]
    fn move_on_missing_target_is_a_noop() {
        let mut canvas = Canvas::new();
        let mut cmd = BuilderCommand::MoveBlock(MoveBlock {
            id: 7,
            from: Position::new(0, 0),
            to: Position::new(10, 10),
        });
        cmd.apply(&mut canvas);
        cmd.undo(&mut canvas);
        assert!(canvas.is_empty());
    }

    #[test]
    fn add_undo_stashes_block_for_redo() {
        let mut canvas = Canvas::new();
        let block = Block::new(1, BlockKind::Button, "Button", Position::new(5, 5));
        let mut cmd = BuilderCommand::AddBlock(AddBlock {
            id: 1,
            block: Some(block),
        });
        cmd.apply(&mut canvas);
        assert_eq!(canvas.block_count(), 1);
        cmd.undo(&mut canvas);
        assert_eq!(canvas.block_count(), 0);
        cmd.apply(&mut canvas);
        assert_eq!(canvas.block_count(), 1);
        assert_eq!(canvas.get_block(1).unwrap().content, "Button");
    }
}
