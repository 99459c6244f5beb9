//! Pointer interaction: drag state machine, selection, live resize.
//!
//! Drag is a three-state gesture: Idle -> (mousedown) -> Dragging ->
//! (mousemove)* -> (mouseup) -> Idle. Mid-drag position updates are live and
//! visual-only; exactly one move command is committed on drop, capturing the
//! pre-drag position against the final one. A drag that loses pointer
//! capture still commits on the eventual `end_drag`.

use pagekit_core::{Position, Size};
use tracing::warn;

use super::{BuilderState, DragState};
use crate::commands::MoveBlock;
use crate::BuilderCommand;

impl BuilderState {
    /// Starts dragging a block. Captures the pointer-to-block offset and the
    /// pre-drag position. Refused while a text edit session is open, while
    /// another drag is active, or for an unknown block.
    pub fn begin_drag(&mut self, id: u64, pointer_x: i32, pointer_y: i32) -> bool {
        if self.drag.is_some() || self.text_edit.is_some() {
            return false;
        }
        let Some(block) = self.canvas.get_block(id) else {
            return false;
        };
        self.drag = Some(DragState {
            block_id: id,
            offset_x: pointer_x - block.position.left,
            offset_y: pointer_y - block.position.top,
            origin: block.position,
        });
        true
    }

    /// Updates the dragged block's live position from the pointer. Not yet
    /// committed to history.
    pub fn drag_to(&mut self, pointer_x: i32, pointer_y: i32) {
        let Some(drag) = &self.drag else {
            return;
        };
        let position = Position::new(pointer_x - drag.offset_x, pointer_y - drag.offset_y);
        let id = drag.block_id;
        if let Some(block) = self.canvas.get_block_mut(id) {
            block.position = position;
        }
    }

    /// Ends the drag, committing exactly one move command from the pre-drag
    /// position to the final one.
    pub fn end_drag(&mut self) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        let Some(to) = self.canvas.block_position(drag.block_id) else {
            warn!(id = drag.block_id, "dragged block vanished; dropping gesture");
            return false;
        };
        self.push_command(BuilderCommand::MoveBlock(MoveBlock {
            id: drag.block_id,
            from: drag.origin,
            to,
        }));
        true
    }

    /// True while a drag gesture is in flight.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Resizes a block live. Deliberately not command-wrapped: resizes are
    /// not undoable, matching the reference behavior.
    pub fn resize_block(&mut self, id: u64, size: Size) -> bool {
        let Some(block) = self.canvas.get_block_mut(id) else {
            return false;
        };
        block.size = Some(size);
        self.is_modified = true;
        true
    }

    /// Selects a block, deselecting any previous selection.
    pub fn select_block(&mut self, id: u64) -> bool {
        self.canvas.select_block(id)
    }

    /// Clears the selection (click on empty canvas).
    pub fn clear_selection(&mut self) {
        self.canvas.clear_selection();
    }
}
