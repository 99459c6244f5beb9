//! Linear undo/redo history.
//!
//! The history is one ordered command log plus a cursor counting the applied
//! prefix: `commands[..cursor]` are done, `commands[cursor..]` are the
//! redoable tail. Executing a fresh command truncates that tail first, so an
//! undone-but-not-redone branch is discarded permanently; there is no redo
//! tree.

use pagekit_core::constants::MAX_HISTORY_ENTRIES;
use tracing::debug;

use crate::canvas::Canvas;
use crate::commands::BuilderCommand;

/// Ordered log of executed commands with an undo/redo cursor.
#[derive(Debug, Clone)]
pub struct History {
    commands: Vec<BuilderCommand>,
    cursor: usize,
    limit: usize,
}

impl History {
    /// Creates an empty history with the default depth limit.
    pub fn new() -> Self {
        Self::with_limit(MAX_HISTORY_ENTRIES)
    }

    /// Creates an empty history with an explicit depth limit.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            commands: Vec::new(),
            cursor: 0,
            limit,
        }
    }

    /// Applies a command and records it, discarding any redoable tail.
    pub fn execute(&mut self, mut cmd: BuilderCommand, canvas: &mut Canvas) {
        debug!(command = cmd.name(), id = cmd.target_id(), "executing command");
        cmd.apply(canvas);
        self.commands.truncate(self.cursor);
        self.commands.push(cmd);
        self.cursor += 1;
        // Evict the oldest entry once over the depth limit.
        if self.commands.len() > self.limit {
            self.commands.remove(0);
            self.cursor -= 1;
        }
    }

    /// Undoes the last applied command. Returns false when there is nothing
    /// to undo.
    pub fn undo(&mut self, canvas: &mut Canvas) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.commands[self.cursor].undo(canvas);
        true
    }

    /// Re-applies the next undone command. Returns false when there is
    /// nothing to redo.
    pub fn redo(&mut self, canvas: &mut Canvas) -> bool {
        if self.cursor == self.commands.len() {
            return false;
        }
        self.commands[self.cursor].apply(canvas);
        self.cursor += 1;
        true
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.cursor < self.commands.len()
    }

    /// Total number of commands in the log, applied or undone.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when the log is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of currently applied commands.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Drops the whole log (after a load or a new document).
    pub fn clear(&mut self) {
        self.commands.clear();
        self.cursor = 0;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Block, BlockKind};
    use crate::commands::AddBlock;
    use pagekit_core::Position;

    fn add(id: u64) -> BuilderCommand {
        BuilderCommand::AddBlock(AddBlock {
            id,
            block: Some(Block::new(id, BlockKind::Text, "t", Position::new(0, 0))),
        })
    }

    #[test]
    fn execute_after_undo_discards_redo_tail() {
        let mut canvas = Canvas::new();
        let mut history = History::new();
        history.execute(add(1), &mut canvas);
        history.execute(add(2), &mut canvas);
        history.undo(&mut canvas);
        assert!(history.can_redo());

        history.execute(add(3), &mut canvas);
        assert!(!history.can_redo());
        assert_eq!(history.len(), history.cursor());
        let ids: Vec<u64> = canvas.blocks().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn undo_redo_at_bounds_are_noops() {
        let mut canvas = Canvas::new();
        let mut history = History::new();
        assert!(!history.undo(&mut canvas));
        assert!(!history.redo(&mut canvas));
        history.execute(add(1), &mut canvas);
        assert!(!history.redo(&mut canvas));
        assert!(history.undo(&mut canvas));
        assert!(!history.undo(&mut canvas));
    }

    #[test]
    fn depth_limit_evicts_oldest_entry() {
        let mut canvas = Canvas::new();
        let mut history = History::with_limit(2);
        for id in 1..=3 {
            history.execute(add(id), &mut canvas);
        }
        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), 2);

        // Only the two newest adds can be unwound.
        while history.undo(&mut canvas) {}
        let ids: Vec<u64> = canvas.blocks().map(|b| b.id).collect();
        assert_eq!(ids, vec![1]);
    }
}
