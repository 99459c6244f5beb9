//! Shared constants for the page builder.

/// Maximum number of commands kept in the undo history.
///
/// When the history is full, the oldest entry is evicted; the canvas state
/// it produced becomes the new baseline and cannot be undone past.
pub const MAX_HISTORY_ENTRIES: usize = 50;

/// Unit suffix used for positions and sizes on the wire ("120px").
pub const PX_SUFFIX: &str = "px";
