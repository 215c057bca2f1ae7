//! A headless windowed-rendering engine for long lists.
//!
//! Given tens of thousands of items with individual, possibly non-uniform sizes, the engine
//! works out which few of them intersect (or are near) the viewport, so only those get rendered.
//! It keeps scroll metrics, selection and item identity coherent across re-renders, data
//! changes and configuration changes.
//!
//! The pieces, leaves first:
//! - [`PositionIndex`]: prefix offsets over item sizes, offset → index by binary search.
//! - [`compute_range`]: the buffered, inclusive [`VisibleRange`] for a [`ScrollState`].
//! - [`ScrollController`]: scroll position, viewport size, axis, threshold checks.
//! - [`SelectionStore`]: selected keys, independent of what is rendered.
//! - [`VirtualList`]: the orchestrator, emitting [`ListEvent`]s.
//!
//! It is UI-agnostic. The host provides viewport sizes, scroll positions and pointer events, and
//! draws the [`RenderItem`] descriptors it gets back.
//!
//! For adapter-level utilities (anchoring, tweens), see the `virtual-list-adapter` crate.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod config;
mod error;
mod event;
mod item;
mod key;
mod list;
mod position;
mod range;
mod render;
mod scroll;
mod selection;


pub use config::{
    DEFAULT_BUFFER, DEFAULT_ITEM_SIZE, DEFAULT_REACH_END_THRESHOLD, ListConfig, MAX_BUFFER,
    MAX_ITEM_SIZE, Size,
};
pub use error::{ConfigError, Error, ItemError, Result};
pub use event::{EventListener, ListEvent, PointerButton, PointerEvent};
pub use item::Item;
pub use key::Key;
pub use list::{Phase, ScrollInfo, ViewState, VirtualList};
pub use position::{PositionEntry, PositionIndex};
pub use range::{VisibleRange, compute_range};
pub use render::{ItemStyle, RenderItem};
pub use scroll::{
    Align, Axis, ScrollController, ScrollDirection, ScrollState, reached_threshold,
    scroll_percentage, scroll_to_index_position,
};
pub use selection::{SelectionMode, SelectionStore};
