use crate::{Axis, Item};

/// Placement of a rendered item along the scroll axis.
///
/// For vertical lists `offset`/`size` map to `top`/`height`, for horizontal ones to
/// `left`/`width`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStyle {
    pub axis: Axis,
    pub offset: u64,
    pub size: u32,
}

impl ItemStyle {
    pub fn end(&self) -> u64 {
        self.offset.saturating_add(self.size as u64)
    }

    pub fn top(&self) -> Option<u64> {
        (self.axis == Axis::Vertical).then_some(self.offset)
    }

    pub fn left(&self) -> Option<u64> {
        (self.axis == Axis::Horizontal).then_some(self.offset)
    }

    pub fn height(&self) -> Option<u32> {
        (self.axis == Axis::Vertical).then_some(self.size)
    }

    pub fn width(&self) -> Option<u32> {
        (self.axis == Axis::Horizontal).then_some(self.size)
    }
}

/// One entry of the render set handed to the host renderer.
#[derive(Debug, PartialEq)]
pub struct RenderItem<'a, T> {
    pub item: &'a Item<T>,
    pub index: usize,
    pub style: ItemStyle,
    pub selected: bool,
}

impl<T> Clone for RenderItem<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RenderItem<'_, T> {}
