//! # PageKit Builder
//!
//! This crate provides the core of a visual page builder: an ordered canvas
//! of blocks that callers drop, move, style and edit, with every mutation
//! recorded as a reversible command.
//!
//! ## Core Components
//!
//! ### Canvas Model
//! - **Blocks**: Closed set of block kinds (text, image, button, hero, ...)
//! - **Canvas**: Ordered block list (order is z-order) with single selection
//! - **Templates**: Per-kind defaults used when a block is dropped
//!
//! ### Command Core
//! - **Commands**: Add, remove, move, text-edit and style commands with
//!   paired apply/undo effects; "before" state is captured up front
//! - **History**: Linear command log with a cursor; a fresh command discards
//!   the undone tail
//!
//! ### Persistence
//! - **Layout**: Flat wire records (`LayoutItem`) that round-trip the canvas
//! - **Storage**: External store collaborator trait plus a JSON file store
//!
//! ## Architecture
//!
//! ```text
//! BuilderState (entry points for every user-visible action)
//!   ├── Canvas (ordered blocks + selection)
//!   ├── History (command log + cursor)
//!   └── LayoutStore (save/load collaborator)
//! ```
//!
//! The UI shell never mutates blocks directly; it calls `BuilderState` entry
//! points, each of which produces exactly one command. The two sanctioned
//! live mutations are mid-drag position updates (committed as one move
//! command on drop) and resize, which is not command-wrapped.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagekit_builder::{BlockKind, BuilderState};
//!
//! let mut state = BuilderState::new();
//! let id = state.drop_block(BlockKind::Text, 10, 10);
//! state.move_block(id, pagekit_core::Position::new(50, 60));
//! state.undo();
//! ```

pub mod block;
pub mod builder_state;
pub mod canvas;
pub mod commands;
pub mod history;
pub mod layout;
pub mod storage;
pub mod style;
pub mod templates;

pub use block::{Block, BlockKind};
pub use builder_state::{BuilderState, LoadReport};
pub use canvas::Canvas;
pub use commands::BuilderCommand;
pub use history::History;
pub use layout::{LayoutFile, LayoutItem, LayoutMetadata};
pub use storage::{JsonFileStore, LayoutStore, MemoryStore};
pub use style::{StyleMap, StylePatch, StyleProperty};

pub use pagekit_core::{Error, LayoutError, Position, Result, Size, StorageError};
