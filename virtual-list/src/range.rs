use core::cmp;

use crate::{PositionIndex, ScrollState};

/// An inclusive range of item indexes to render.
///
/// Ranges are never empty: an empty list is represented by `None` from [`compute_range`], so
/// `VisibleRange { start: 0, end: 0 }` always means "render item 0".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize, // inclusive
}

impl VisibleRange {
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    pub fn iter(&self) -> core::ops::RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// Computes the buffered range of indexes intersecting the viewport.
///
/// The raw range spans the items at `scroll.position` and at `scroll.position +
/// scroll.viewport_size`; `buffer` extra items are added on each side and the result is clamped
/// to the item count. Returns `None` for an empty index.
pub fn compute_range(
    index: &PositionIndex,
    scroll: &ScrollState,
    buffer: usize,
) -> Option<VisibleRange> {
    let raw_start = index.index_at_offset(scroll.position)?;
    let raw_end = index.index_at_offset(scroll.end())?;
    let last = index.len() - 1;
    Some(VisibleRange {
        start: raw_start.saturating_sub(buffer),
        end: cmp::min(last, raw_end.saturating_add(buffer)),
    })
}
