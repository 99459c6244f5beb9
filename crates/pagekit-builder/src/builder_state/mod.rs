//! Builder state manager for shell integration.
//! Owns the canvas and the command history and turns raw interaction events
//! into exactly one command per user-visible action.
//!
//! This module is split into submodules:
//! - `blocks`: drop, delete, text-edit and style entry points
//! - `interaction`: drag state machine, selection, live resize
//! - `file_io`: save/load through a layout store
//!
//! No shell code path mutates a block directly; the two sanctioned live
//! mutations inside this module are mid-drag position updates (committed as
//! one move command on drop) and resize, which is not command-wrapped.

mod blocks;
mod file_io;
mod interaction;

pub use file_io::LoadReport;

use pagekit_core::Position;

use crate::canvas::Canvas;
use crate::commands::BuilderCommand;
use crate::history::History;

/// In-flight drag gesture state.
#[derive(Debug, Clone)]
pub(crate) struct DragState {
    pub block_id: u64,
    /// Pointer-to-block offset captured on mousedown.
    pub offset_x: i32,
    pub offset_y: i32,
    /// Position before the drag started, for the move command.
    pub origin: Position,
}

/// In-flight text edit session. The original text is captured when the
/// session opens; the edit command carries it instead of re-reading at undo
/// time.
#[derive(Debug, Clone)]
pub(crate) struct TextEditSession {
    pub block_id: u64,
    pub original: String,
}

/// Page-builder state for shell integration.
#[derive(Debug, Clone)]
pub struct BuilderState {
    pub canvas: Canvas,
    pub(crate) history: History,
    pub is_modified: bool,
    pub layout_name: String,
    pub(crate) drag: Option<DragState>,
    pub(crate) text_edit: Option<TextEditSession>,
}

impl BuilderState {
    /// Creates a new builder state with an empty canvas.
    pub fn new() -> Self {
        Self {
            canvas: Canvas::new(),
            history: History::new(),
            is_modified: false,
            layout_name: "Untitled".to_string(),
            drag: None,
            text_edit: None,
        }
    }

    /// Applies a command and records it in the history.
    pub fn push_command(&mut self, cmd: BuilderCommand) {
        self.history.execute(cmd, &mut self.canvas);
        self.is_modified = true;
    }

    /// Undo last change
    pub fn undo(&mut self) -> bool {
        if self.history.undo(&mut self.canvas) {
            self.is_modified = true;
            true
        } else {
            false
        }
    }

    /// Redo last undo
    pub fn redo(&mut self) -> bool {
        if self.history.redo(&mut self.canvas) {
            self.is_modified = true;
            true
        } else {
            false
        }
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Total number of commands in the history log.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Number of currently applied commands.
    pub fn history_cursor(&self) -> usize {
        self.history.cursor()
    }

    /// Drops the command history.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Mark layout as modified.
    pub fn mark_modified(&mut self) {
        self.is_modified = true;
    }

    /// Get display name for the layout, with a dirty marker.
    pub fn display_name(&self) -> String {
        if self.is_modified {
            format!("{}*", self.layout_name)
        } else {
            self.layout_name.clone()
        }
    }
}

impl Default for BuilderState {
    fn default() -> Self {
        Self::new()
    }
}
