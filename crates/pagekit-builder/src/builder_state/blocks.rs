//! Block operations (drop, delete, text edit, style) for the builder state.

use pagekit_core::Position;
use tracing::warn;

use super::{BuilderState, TextEditSession};
use crate::commands::{AddBlock, ApplyStyle, EditText, RemoveBlock};
use crate::style::StylePatch;
use crate::templates;
use crate::{BlockKind, BuilderCommand};

impl BuilderState {
    /// Drops a new block of the given kind at the given canvas position.
    /// Returns the new block's id.
    pub fn drop_block(&mut self, kind: BlockKind, left: i32, top: i32) -> u64 {
        let id = self.canvas.generate_id();
        let block = templates::instantiate(id, kind, Position::new(left, top));
        self.push_command(BuilderCommand::AddBlock(AddBlock {
            id,
            block: Some(block),
        }));
        id
    }

    /// Deletes a block by id. Returns false when no such block exists.
    pub fn delete_block(&mut self, id: u64) -> bool {
        if self.canvas.get_block(id).is_none() {
            return false;
        }
        if self.text_edit.as_ref().is_some_and(|s| s.block_id == id) {
            self.text_edit = None;
        }
        self.push_command(BuilderCommand::RemoveBlock(RemoveBlock { id, slot: None }));
        true
    }

    /// Deletes the selected block, if any.
    pub fn delete_selected(&mut self) -> bool {
        match self.canvas.selected_id() {
            Some(id) => self.delete_block(id),
            None => false,
        }
    }

    /// Moves a block to an absolute position as one command, capturing the
    /// current position as the undo target. Used for programmatic moves
    /// (keyboard nudges); pointer drags go through the drag state machine.
    pub fn move_block(&mut self, id: u64, to: Position) -> bool {
        let Some(from) = self.canvas.block_position(id) else {
            return false;
        };
        self.push_command(BuilderCommand::MoveBlock(crate::commands::MoveBlock {
            id,
            from,
            to,
        }));
        true
    }

    /// Opens a text edit session, capturing the block's current text.
    /// Refused while another edit session or a drag is active.
    pub fn begin_text_edit(&mut self, id: u64) -> bool {
        if self.text_edit.is_some() || self.drag.is_some() {
            return false;
        }
        let Some(block) = self.canvas.get_block(id) else {
            return false;
        };
        self.text_edit = Some(TextEditSession {
            block_id: id,
            original: block.content.clone(),
        });
        true
    }

    /// Commits the open text edit session as one command. A commit with
    /// unchanged text still records a command; the caller decides whether to
    /// call this or `cancel_text_edit`.
    pub fn commit_text_edit(&mut self, new_text: impl Into<String>) -> bool {
        let Some(session) = self.text_edit.take() else {
            warn!("text edit commit without an open session; ignoring");
            return false;
        };
        self.push_command(BuilderCommand::EditText(EditText {
            id: session.block_id,
            old_text: session.original,
            new_text: new_text.into(),
        }));
        true
    }

    /// Abandons the open text edit session without recording a command.
    pub fn cancel_text_edit(&mut self) {
        self.text_edit = None;
    }

    /// True while a text edit session is open.
    pub fn is_editing_text(&self) -> bool {
        self.text_edit.is_some()
    }

    /// Applies a style patch to a block as one command, snapshotting the
    /// prior values of exactly the touched properties.
    pub fn apply_style(&mut self, id: u64, patch: StylePatch) -> bool {
        if patch.is_empty() {
            return false;
        }
        let Some(block) = self.canvas.get_block(id) else {
            return false;
        };
        let previous = block.styles.snapshot_of(&patch);
        self.push_command(BuilderCommand::ApplyStyle(ApplyStyle {
            id,
            patch,
            previous,
        }));
        true
    }

    /// Applies a style patch to the selected block.
    pub fn apply_style_to_selected(&mut self, patch: StylePatch) -> bool {
        match self.canvas.selected_id() {
            Some(id) => self.apply_style(id, patch),
            None => false,
        }
    }
}
