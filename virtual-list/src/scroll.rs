use core::cmp;

use crate::PositionIndex;

/// The scroll axis. Only one axis is virtualized at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

impl Axis {
    /// Picks the component along this axis from an `(x, y)` pair.
    pub fn main<V>(self, x: V, y: V) -> V {
        match self {
            Self::Vertical => y,
            Self::Horizontal => x,
        }
    }

    /// Picks the component across this axis from an `(x, y)` pair.
    pub fn cross<V>(self, x: V, y: V) -> V {
        match self {
            Self::Vertical => x,
            Self::Horizontal => y,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
    /// Keep the current position if the item is fully visible, otherwise scroll the minimal
    /// distance to reveal it.
    Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// Scroll position and viewport size along the scroll axis.
///
/// The position is not clamped to the content size; that is the scroll container's job.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub position: u64,
    pub viewport_size: u32,
    pub axis: Axis,
}

impl ScrollState {
    pub fn end(&self) -> u64 {
        self.position.saturating_add(self.viewport_size as u64)
    }
}

/// Owns the scroll state of one list.
///
/// Every transition is a pure state update; recomputing the visible range is left to the caller.
#[derive(Clone, Debug, Default)]
pub struct ScrollController {
    state: ScrollState,
    direction: Option<ScrollDirection>,
}

impl ScrollController {
    pub fn new(axis: Axis) -> Self {
        Self {
            state: ScrollState {
                axis,
                ..ScrollState::default()
            },
            direction: None,
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn position(&self) -> u64 {
        self.state.position
    }

    pub fn viewport_size(&self) -> u32 {
        self.state.viewport_size
    }

    pub fn axis(&self) -> Axis {
        self.state.axis
    }

    pub fn direction(&self) -> Option<ScrollDirection> {
        self.direction
    }

    pub fn on_scroll(&mut self, position: u64) -> ScrollState {
        let prev = self.state.position;
        self.state.position = position;
        self.direction = match position.cmp(&prev) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => self.direction,
        };
        self.state
    }

    /// Applies a raw two-dimensional scroll position, keeping the component along the axis.
    pub fn on_scroll_xy(&mut self, x: u64, y: u64) -> ScrollState {
        let position = self.state.axis.main(x, y);
        self.on_scroll(position)
    }

    pub fn set_viewport_size(&mut self, size: u32) -> ScrollState {
        self.state.viewport_size = size;
        self.state
    }

    /// Applies a resize notification given as a `(width, height)` pair.
    pub fn set_viewport_rect(&mut self, width: u32, height: u32) -> ScrollState {
        let size = self.state.axis.main(width, height);
        self.set_viewport_size(size)
    }

    /// Switches the scroll axis. Position and direction are reset since they belong to the
    /// previous axis.
    pub fn set_axis(&mut self, axis: Axis) -> ScrollState {
        if self.state.axis != axis {
            self.state.axis = axis;
            self.state.position = 0;
            self.direction = None;
        }
        self.state
    }

    pub fn scroll_percentage(&self, index: &PositionIndex) -> f64 {
        scroll_percentage(index, &self.state)
    }

    pub fn scroll_to_index(
        &self,
        index: &PositionIndex,
        target: usize,
        align: Align,
    ) -> Option<u64> {
        scroll_to_index_position(
            index,
            target,
            align,
            self.state.viewport_size,
            self.state.position,
        )
    }
}

/// Fraction of the content that has been scrolled into view, in `[0, 1]`.
///
/// Returns `1.0` when the content fits entirely within the viewport.
pub fn scroll_percentage(index: &PositionIndex, scroll: &ScrollState) -> f64 {
    let total = index.total_extent();
    if total <= scroll.viewport_size as u64 {
        return 1.0;
    }
    let seen = scroll.end() as f64 / total as f64;
    seen.clamp(0.0, 1.0)
}

pub fn reached_threshold(percentage: f64, threshold: f64) -> bool {
    percentage >= threshold
}

/// Computes the scroll position that places item `target` at `align` within the viewport.
///
/// `current` is only consulted for [`Align::Auto`]. Out-of-range targets return `None`; the
/// result is never clamped to the maximum scroll position.
pub fn scroll_to_index_position(
    index: &PositionIndex,
    target: usize,
    align: Align,
    viewport_size: u32,
    current: u64,
) -> Option<u64> {
    let start = index.offset_of(target)?;
    let size = index.size_of(target)? as u64;
    let end = start.saturating_add(size);
    let view = viewport_size as u64;

    let position = match align {
        Align::Start => start,
        Align::End => end.saturating_sub(view),
        Align::Center => start.saturating_add(size / 2).saturating_sub(view / 2),
        Align::Auto => {
            let cur_end = current.saturating_add(view);
            if start >= current && end <= cur_end {
                current
            } else if start < current {
                start
            } else {
                end.saturating_sub(view)
            }
        }
    };
    Some(position)
}
