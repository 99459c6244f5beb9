//! Canvas: the ordered collection of blocks being composed.
//!
//! Block order in the backing vector is the z/DOM order; it is significant
//! for rendering and must survive a save/load round trip. Selection is a
//! single-item model and is pure UI state, never part of the undo history.

use pagekit_core::Position;

use crate::block::Block;

/// Canvas state managing blocks and selection.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    blocks: Vec<Block>,
    selected: Option<u64>,
    next_id: u64,
}

impl Canvas {
    /// Creates a new empty canvas.
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            selected: None,
            next_id: 1,
        }
    }

    /// Generates a new unique block id.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Returns the number of blocks on the canvas.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true when the canvas holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterates blocks in z-order (back to front).
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    /// Gets a reference to a block by id.
    pub fn get_block(&self, id: u64) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Gets a mutable reference to a block by id.
    pub fn get_block_mut(&mut self, id: u64) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    /// Returns the z-order index of a block.
    pub fn index_of(&self, id: u64) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    /// Returns a block's current position.
    pub fn block_position(&self, id: u64) -> Option<Position> {
        self.get_block(id).map(|b| b.position)
    }

    /// Appends a block at the top of the z-order.
    pub fn push_block(&mut self, block: Block) {
        self.bump_next_id(block.id);
        self.blocks.push(block);
    }

    /// Inserts a block at a specific z-order index (used for undo of
    /// delete). The index is clamped to the current length.
    pub fn insert_block_at(&mut self, index: usize, block: Block) {
        self.bump_next_id(block.id);
        let index = index.min(self.blocks.len());
        self.blocks.insert(index, block);
    }

    /// Removes a block and returns it together with its original z-order
    /// index (used for undo/redo).
    pub fn remove_block_return(&mut self, id: u64) -> Option<(Block, usize)> {
        let index = self.index_of(id)?;
        let block = self.blocks.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some((block, index))
    }

    /// Selects a block, deselecting any previous selection. Returns false
    /// when no such block exists.
    pub fn select_block(&mut self, id: u64) -> bool {
        if self.get_block(id).is_some() {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    /// Clears the selection (clicking empty canvas).
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Gets the selected block id.
    pub fn selected_id(&self) -> Option<u64> {
        self.selected
    }

    /// Gets the selected block.
    pub fn selected_block(&self) -> Option<&Block> {
        self.selected.and_then(|id| self.get_block(id))
    }

    /// Removes all blocks and clears the selection.
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.selected = None;
    }

    fn bump_next_id(&mut self, id: u64) {
        if id >= self.next_id {
            self.next_id = id + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockKind;

    fn block(id: u64) -> Block {
        Block::new(id, BlockKind::Text, "t", Position::new(0, 0))
    }

    #[test]
    fn remove_reports_original_index() {
        let mut canvas = Canvas::new();
        for id in 1..=3 {
            canvas.push_block(block(id));
        }
        let (removed, index) = canvas.remove_block_return(2).unwrap();
        assert_eq!(removed.id, 2);
        assert_eq!(index, 1);
        canvas.insert_block_at(index, removed);
        let order: Vec<u64> = canvas.blocks().map(|b| b.id).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn removing_selected_block_clears_selection() {
        let mut canvas = Canvas::new();
        canvas.push_block(block(1));
        assert!(canvas.select_block(1));
        canvas.remove_block_return(1);
        assert_eq!(canvas.selected_id(), None);
    }

    #[test]
    fn restored_ids_do_not_collide_with_generated_ones() {
        let mut canvas = Canvas::new();
        canvas.push_block(block(40));
        assert_eq!(canvas.generate_id(), 41);
    }

    #[test]
    fn selecting_missing_block_is_refused() {
        let mut canvas = Canvas::new();
        assert!(!canvas.select_block(9));
        assert_eq!(canvas.selected_id(), None);
    }
}
