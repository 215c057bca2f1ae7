use virtual_list::{Align, ConfigError, Item, ItemError, Key, ListConfig, ViewState, VirtualList};

use crate::{Easing, ScrollAnchor, Tween, apply_anchor, capture_first_visible_anchor};

/// A framework-neutral controller that wraps a [`VirtualList`] and provides common adapter
/// workflows (anchoring, tween-driven scrolling).
///
/// Adapters drive it by calling:
/// - `on_viewport_size` / `on_scroll` when UI events occur
/// - `tick(now_ms)` each frame while `is_animating()` is true
///
/// Tween frames go through [`VirtualList::on_scroll`], so scroll and reach-end events fire as if
/// the user had scrolled. The adapter applies the returned position to its scroll container.
#[derive(Debug)]
pub struct Controller<T> {
    list: VirtualList<T>,
    tween: Option<Tween>,
}

impl<T> Controller<T> {
    pub fn new(config: ListConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_list(VirtualList::new(config)?))
    }

    pub fn from_list(list: VirtualList<T>) -> Self {
        Self { list, tween: None }
    }

    pub fn list(&self) -> &VirtualList<T> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut VirtualList<T> {
        &mut self.list
    }

    pub fn into_list(self) -> VirtualList<T> {
        self.list
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn tween(&self) -> Option<&Tween> {
        self.tween.as_ref()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    pub fn on_viewport_size(&mut self, size: u32) -> ViewState {
        self.list.set_viewport_size(size)
    }

    /// Call this when the UI reports a scroll position change (e.g. user wheel/drag).
    ///
    /// This cancels any active tween.
    pub fn on_scroll(&mut self, position: u64) -> ViewState {
        self.cancel_animation();
        self.list.on_scroll(position)
    }

    /// Advances the active tween, if any, and returns the resulting view.
    pub fn tick(&mut self, now_ms: u64) -> Option<ViewState> {
        let tween = self.tween?;
        let view = self.list.on_scroll(tween.sample(now_ms));
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        Some(view)
    }

    /// Jumps to an index immediately (no animation). The target is clamped to the content.
    ///
    /// Returns the applied position, or `None` for an out-of-range index.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> Option<u64> {
        let target = self.list.scroll_to_index_position(index, align)?;
        let position = self.list.clamp_position(target);
        self.cancel_animation();
        self.list.scroll_to_position(position);
        Some(position)
    }

    /// Starts a tween to an index. Returns the clamped target, or `None` for an out-of-range
    /// index (no tween is started).
    pub fn start_tween_to_index(
        &mut self,
        index: usize,
        align: Align,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Option<u64> {
        let target = self.list.scroll_to_index_position(index, align)?;
        let to = self.start_tween_to_position(target, now_ms, duration_ms, easing);
        Some(to)
    }

    /// Starts a tween to the item with identity `key`.
    pub fn start_tween_to_key(
        &mut self,
        key: &Key,
        align: Align,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Option<u64> {
        let index = self.list.index_of_key(key)?;
        self.start_tween_to_index(index, align, now_ms, duration_ms, easing)
    }

    /// Starts a tween to a position. Returns the clamped target.
    ///
    /// A tween already in flight is retargeted from its current sample.
    pub fn start_tween_to_position(
        &mut self,
        position: u64,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> u64 {
        let to = self.list.clamp_position(position);
        if let Some(tween) = self.tween.as_mut().filter(|t| t.easing == easing) {
            tween.retarget(now_ms, to, duration_ms);
        } else {
            let from = self.list.scroll_state().position;
            self.tween = Some(Tween::new(from, to, now_ms, duration_ms, easing));
        }
        to
    }

    pub fn capture_first_visible_anchor(&self) -> Option<ScrollAnchor> {
        capture_first_visible_anchor(&self.list)
    }

    /// Applies a previously captured anchor. This cancels any active tween.
    pub fn apply_anchor(&mut self, anchor: &ScrollAnchor) -> bool {
        self.cancel_animation();
        apply_anchor(&mut self.list, anchor)
    }

    /// Replaces the items while keeping the first visible item where it is on screen.
    ///
    /// On a validation error nothing changes.
    pub fn replace_items_anchored(&mut self, items: Vec<Item<T>>) -> Result<ViewState, ItemError> {
        let anchor = self.capture_first_visible_anchor();
        let view = self.list.set_items(items)?;
        if let Some(anchor) = anchor {
            if self.apply_anchor(&anchor) {
                return Ok(self.list.recompute());
            }
        }
        Ok(view)
    }
}
