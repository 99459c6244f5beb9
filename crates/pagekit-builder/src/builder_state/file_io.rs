//! Save/load through a layout store for the builder state.
//!
//! Load is staged: the layout is fetched and validated before the canvas is
//! touched, so a failed fetch leaves the canvas exactly as it was. A
//! successful load wholesale-replaces the block set; there is no merge.

use anyhow::Context;
use tracing::warn;

use super::BuilderState;
use crate::layout::LayoutItem;
use crate::storage::LayoutStore;

/// Outcome of restoring a layout batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Items restored onto the canvas.
    pub restored: usize,
    /// Items rejected by validation and skipped.
    pub rejected: usize,
}

impl BuilderState {
    /// Serializes the full ordered block list to wire form.
    pub fn serialize_layout(&self) -> Vec<LayoutItem> {
        self.canvas.blocks().map(LayoutItem::from_block).collect()
    }

    /// Replaces the canvas contents with a layout batch.
    ///
    /// Items are validated before the canvas is cleared. An item that fails
    /// validation (unknown kind, malformed pixel field) is rejected and
    /// logged; the rest of the batch continues. Restoring clears the
    /// selection, the history and the dirty flag.
    pub fn restore_layout(&mut self, items: &[LayoutItem]) -> LoadReport {
        let mut report = LoadReport::default();
        let mut blocks = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match item.to_block(0) {
                Ok(block) => blocks.push(block),
                Err(e) => {
                    warn!(index, error = %e, "rejecting layout item");
                    report.rejected += 1;
                }
            }
        }

        self.canvas.clear();
        self.clear_history();
        self.drag = None;
        self.text_edit = None;
        for mut block in blocks {
            block.id = self.canvas.generate_id();
            self.canvas.push_block(block);
            report.restored += 1;
        }
        self.is_modified = false;
        report
    }

    /// Saves the current layout through the store. On success the dirty flag
    /// is cleared; on failure the canvas and history are untouched.
    pub fn save_to_store(&mut self, store: &mut dyn LayoutStore) -> anyhow::Result<()> {
        let items = self.serialize_layout();
        store
            .save_layout(&items)
            .context("Failed to save layout")?;
        self.is_modified = false;
        Ok(())
    }

    /// Loads a layout through the store, replacing the canvas contents.
    /// A fetch failure aborts before the canvas is cleared.
    pub fn load_from_store(&mut self, store: &dyn LayoutStore) -> anyhow::Result<LoadReport> {
        let items = store.load_layout().context("Failed to load layout")?;
        Ok(self.restore_layout(&items))
    }
}
