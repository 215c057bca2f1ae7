use core::fmt;
use std::sync::Arc;

use crate::item::{KeyIndex, index_items};
use crate::scroll::{reached_threshold, scroll_to_index_position};
use crate::{
    Align, Axis, ConfigError, EventListener, Item, ItemError, ItemStyle, Key, ListConfig,
    ListEvent, PointerEvent, PositionIndex, RenderItem, ScrollController, ScrollDirection,
    ScrollState, SelectionStore, VisibleRange, compute_range,
};

/// Lifecycle of a [`VirtualList`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// No items.
    #[default]
    Idle,
    /// The position index is built over a non-empty item list.
    Indexed,
}

/// Scroll metrics as reported by [`VirtualList::scroll_info`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollInfo {
    pub position: u64,
    pub viewport_size: u32,
    pub total_extent: u64,
    pub percentage: f64,
    pub axis: Axis,
    pub direction: Option<ScrollDirection>,
}

/// The derived view after a state change: what to render and where the scroll stands.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewState {
    /// `None` when there is nothing to render.
    pub range: Option<VisibleRange>,
    pub scroll: ScrollInfo,
}

/// A headless virtual list.
///
/// The list owns its items, the position index built over them, the scroll state and the
/// selection. It holds no UI objects: the host feeds it viewport sizes, scroll positions and
/// pointer events, and renders the `RenderItem`s it hands back.
///
/// Every mutating call recomputes the derived [`ViewState`] and returns it. Events go to the
/// optional listener, synchronously and in order.
pub struct VirtualList<T> {
    config: ListConfig,
    items: Vec<Item<T>>,
    keys: KeyIndex,
    positions: PositionIndex,
    scroll: ScrollController,
    selection: SelectionStore,
    phase: Phase,
    load_requested: bool,
    on_event: Option<EventListener<T>>,
}

impl<T> VirtualList<T> {
    /// Creates an empty list. Fails if `config` does not validate.
    pub fn new(config: ListConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        vdebug!(
            item_size = config.item_size.get(),
            buffer = config.buffer,
            "VirtualList::new"
        );
        Ok(Self {
            scroll: ScrollController::new(config.axis),
            selection: SelectionStore::new(config.selection_mode),
            config,
            items: Vec::new(),
            keys: KeyIndex::new(),
            positions: PositionIndex::default(),
            phase: Phase::Idle,
            load_requested: false,
            on_event: None,
        })
    }

    /// Creates a list and assigns `items` in one step.
    pub fn with_items(config: ListConfig, items: Vec<Item<T>>) -> crate::Result<Self> {
        let mut list = Self::new(config)?;
        list.set_items(items)?;
        Ok(list)
    }

    pub fn with_listener(
        mut self,
        listener: impl Fn(&ListEvent<T>) + Send + Sync + 'static,
    ) -> Self {
        self.on_event = Some(Arc::new(listener));
        self
    }

    pub fn set_listener(
        &mut self,
        listener: Option<impl Fn(&ListEvent<T>) + Send + Sync + 'static>,
    ) {
        self.on_event = listener.map(|f| Arc::new(f) as _);
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn positions(&self) -> &PositionIndex {
        &self.positions
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll.state()
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    /// Replaces all items.
    ///
    /// Items are validated first; on error nothing changes. Selection is kept by key.
    ///
    /// Any change to the key sequence (new, removed or reordered keys) counts as new data and
    /// clears a pending load-more request. A refresh with the same keys in the same order keeps it.
    pub fn set_items(&mut self, items: Vec<Item<T>>) -> Result<ViewState, ItemError> {
        let keys = index_items(&items, None, 0)?;
        if !same_identities(&self.items, &items) {
            self.load_requested = false;
        }
        self.items = items;
        self.keys = keys;
        self.rebuild_index();
        Ok(self.recompute())
    }

    /// Appends items at the end (infinite scroll), clearing a pending load-more request.
    ///
    /// New keys must not collide with existing ones; on error nothing changes.
    pub fn append_items(&mut self, items: Vec<Item<T>>) -> Result<ViewState, ItemError> {
        let base = self.items.len();
        let keys = index_items(&items, Some(&self.keys), base)?;
        if !items.is_empty() {
            self.load_requested = false;
        }
        self.items.extend(items);
        self.keys.extend(keys);
        self.rebuild_index();
        Ok(self.recompute())
    }

    /// Applies a new configuration. On error the previous configuration is kept.
    pub fn set_config(&mut self, config: ListConfig) -> Result<ViewState, ConfigError> {
        config.validate()?;
        let prev = core::mem::replace(&mut self.config, config);
        vdebug!(
            item_size = self.config.item_size.get(),
            buffer = self.config.buffer,
            axis = ?self.config.axis,
            "VirtualList::set_config"
        );
        if self.config.axis != prev.axis {
            self.scroll.set_axis(self.config.axis);
        }
        if self.config.selection_mode != prev.selection_mode {
            self.selection.set_mode(self.config.selection_mode);
        }
        if self.config.item_size != prev.item_size {
            self.rebuild_index();
        }
        Ok(self.recompute())
    }

    /// Clones the current configuration, applies `f`, then delegates to `set_config`.
    pub fn update_config(
        &mut self,
        f: impl FnOnce(&mut ListConfig),
    ) -> Result<ViewState, ConfigError> {
        let mut next = self.config.clone();
        f(&mut next);
        self.set_config(next)
    }

    /// Resize notification: the viewport size along the scroll axis.
    pub fn set_viewport_size(&mut self, size: u32) -> ViewState {
        self.scroll.set_viewport_size(size);
        self.recompute()
    }

    /// Resize notification given as `(width, height)`.
    pub fn set_viewport_rect(&mut self, width: u32, height: u32) -> ViewState {
        self.scroll.set_viewport_rect(width, height);
        self.recompute()
    }

    /// Handles a scroll event from the host scroll container.
    ///
    /// Emits `Scroll`, then `ReachEnd` when the threshold is reached and no load is pending.
    pub fn on_scroll(&mut self, position: u64) -> ViewState {
        vtrace!(position, "on_scroll");
        self.scroll.on_scroll(position);
        self.after_scroll()
    }

    /// Same as [`Self::on_scroll`] for hosts reporting both scroll coordinates.
    pub fn on_scroll_xy(&mut self, x: u64, y: u64) -> ViewState {
        vtrace!(x, y, "on_scroll_xy");
        self.scroll.on_scroll_xy(x, y);
        self.after_scroll()
    }

    fn after_scroll(&mut self) -> ViewState {
        let view = self.recompute();
        self.emit(|| ListEvent::Scroll {
            scroll_position: view.scroll.position,
            scroll_percentage: view.scroll.percentage,
        });
        self.maybe_request_more(&view.scroll);
        view
    }

    fn maybe_request_more(&mut self, info: &ScrollInfo) {
        if self.phase != Phase::Indexed || self.load_requested {
            return;
        }
        let Some(threshold) = self.config.reach_end_threshold else {
            return;
        };
        if !reached_threshold(info.percentage, threshold) {
            return;
        }
        self.load_requested = true;
        vdebug!(
            position = info.position,
            percentage = info.percentage,
            "reach end"
        );
        self.emit(|| ListEvent::ReachEnd {
            scroll_position: info.position,
        });
    }

    /// Whether a `ReachEnd` was emitted and no new items have arrived since.
    pub fn is_loading_more(&self) -> bool {
        self.load_requested
    }

    /// Clears a pending load-more request (e.g. the fetch failed or returned nothing), so the
    /// next scroll past the threshold fires `ReachEnd` again.
    pub fn finish_loading(&mut self) {
        self.load_requested = false;
    }

    /// Recomputes the derived view from the current state.
    pub fn recompute(&self) -> ViewState {
        ViewState {
            range: self.visible_range(),
            scroll: self.scroll_info(),
        }
    }

    pub fn visible_range(&self) -> Option<VisibleRange> {
        compute_range(&self.positions, &self.scroll.state(), self.config.buffer)
    }

    pub fn scroll_info(&self) -> ScrollInfo {
        let state = self.scroll.state();
        ScrollInfo {
            position: state.position,
            viewport_size: state.viewport_size,
            total_extent: self.positions.total_extent(),
            percentage: self.scroll.scroll_percentage(&self.positions),
            axis: state.axis,
            direction: self.scroll.direction(),
        }
    }

    pub fn total_extent(&self) -> u64 {
        self.positions.total_extent()
    }

    pub fn max_scroll_position(&self) -> u64 {
        let view = self.scroll.viewport_size() as u64;
        self.positions.total_extent().saturating_sub(view)
    }

    pub fn clamp_position(&self, position: u64) -> u64 {
        position.min(self.max_scroll_position())
    }

    /// Computes the position that would place `index` at `align`, without scrolling.
    pub fn scroll_to_index_position(&self, index: usize, align: Align) -> Option<u64> {
        let state = self.scroll.state();
        scroll_to_index_position(
            &self.positions,
            index,
            align,
            state.viewport_size,
            state.position,
        )
    }

    /// Programmatically moves the scroll position (no events).
    ///
    /// The host is expected to apply the position to its scroll container; the scroll event it
    /// reports back then goes through [`Self::on_scroll`] as usual.
    pub fn scroll_to_position(&mut self, position: u64) -> ViewState {
        self.scroll.on_scroll(position);
        self.recompute()
    }

    /// Programmatically scrolls to an index (no animation, no events).
    ///
    /// An out-of-range index is ignored and returns `None`. The applied position is not clamped
    /// to the maximum scroll position.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> Option<ViewState> {
        let Some(position) = self.scroll_to_index_position(index, align) else {
            vdebug!(index, count = self.items.len(), "scroll_to_index: out of range");
            return None;
        };
        Some(self.scroll_to_position(position))
    }

    /// Scrolls to the item with identity `key`. Unknown keys are ignored.
    pub fn scroll_to_key(&mut self, key: &Key, align: Align) -> Option<ViewState> {
        let Some(index) = self.index_of_key(key) else {
            vdebug!(%key, "scroll_to_key: unknown key");
            return None;
        };
        self.scroll_to_index(index, align)
    }

    pub fn index_of_key(&self, key: &Key) -> Option<usize> {
        self.keys.get(key).copied()
    }

    pub fn item(&self, index: usize) -> Option<&Item<T>> {
        self.items.get(index)
    }

    pub fn item_by_key(&self, key: &Key) -> Option<&Item<T>> {
        self.index_of_key(key).and_then(|i| self.items.get(i))
    }

    pub fn item_offset(&self, index: usize) -> Option<u64> {
        self.positions.offset_of(index)
    }

    pub fn item_size(&self, index: usize) -> Option<u32> {
        self.positions.size_of(index)
    }

    /// Index of the item covering `offset` (clamped to the last item).
    pub fn item_at_offset(&self, offset: u64) -> Option<usize> {
        self.positions.index_at_offset(offset)
    }

    pub fn item_style(&self, index: usize) -> Option<ItemStyle> {
        Some(ItemStyle {
            axis: self.scroll.axis(),
            offset: self.positions.offset_of(index)?,
            size: self.positions.size_of(index)?,
        })
    }

    /// Calls `f` for every item of the current render set, in index order.
    pub fn for_each_rendered<'a>(&'a self, mut f: impl FnMut(RenderItem<'a, T>)) {
        let Some(range) = self.visible_range() else {
            return;
        };
        let axis = self.scroll.axis();
        for (entry, item) in self.positions.entries()[range.iter()]
            .iter()
            .zip(&self.items[range.iter()])
        {
            let size = self.positions.size_of(entry.index).unwrap_or_default();
            f(RenderItem {
                item,
                index: entry.index,
                style: ItemStyle {
                    axis,
                    offset: entry.offset,
                    size,
                },
                selected: self.selection.is_selected(item.identity()),
            });
        }
    }

    /// Collects the render set into `out` (clears `out` first).
    pub fn collect_rendered<'a>(&'a self, out: &mut Vec<RenderItem<'a, T>>) {
        out.clear();
        self.for_each_rendered(|it| out.push(it));
    }

    /// Maps the render set through a custom renderer.
    pub fn render_with<'a, R>(&'a self, mut render: impl FnMut(RenderItem<'a, T>) -> R) -> Vec<R> {
        let mut out = Vec::with_capacity(self.visible_range().map_or(0, |r| r.len()));
        self.for_each_rendered(|it| out.push(render(it)));
        out
    }

    pub fn is_selected(&self, key: &Key) -> bool {
        self.selection.is_selected(key)
    }

    pub fn selected_keys(&self) -> Vec<Key> {
        self.selection.to_vec()
    }

    /// Selected items that are present in the current item list, in selection order.
    pub fn get_selected_items(&self) -> Vec<&Item<T>> {
        self.selection
            .keys()
            .filter_map(|k| self.item_by_key(k))
            .collect()
    }

    /// Replaces the selection. Keys need not be loaded; in single mode only the first key is
    /// kept.
    pub fn select_items<K: Into<Key>>(&mut self, keys: impl IntoIterator<Item = K>) -> ViewState {
        self.selection.assign(keys.into_iter().map(Into::into));
        self.recompute()
    }

    /// Unions `keys` into the selection (multiple mode only).
    pub fn select_all<K: Into<Key>>(&mut self, keys: impl IntoIterator<Item = K>) -> ViewState {
        self.selection.select_all(keys.into_iter().map(Into::into));
        self.recompute()
    }

    /// Unions the keys of the current render set into the selection (multiple mode only).
    pub fn select_all_rendered(&mut self) -> ViewState {
        let mut keys = Vec::new();
        self.for_each_rendered(|it| keys.push(it.item.identity().clone()));
        self.selection.select_all(keys);
        self.recompute()
    }

    pub fn clear_selection(&mut self) -> ViewState {
        self.selection.clear();
        self.recompute()
    }

    fn rebuild_index(&mut self) {
        self.positions = PositionIndex::build(&self.items, self.config.item_size.get());
        self.phase = if self.items.is_empty() {
            Phase::Idle
        } else {
            Phase::Indexed
        };
        vdebug!(
            count = self.items.len(),
            total_extent = self.positions.total_extent(),
            "rebuild_index"
        );
    }

    fn emit(&self, event: impl FnOnce() -> ListEvent<T>) {
        if let Some(cb) = &self.on_event {
            cb(&event());
        }
    }
}

fn same_identities<T>(old: &[Item<T>], new: &[Item<T>]) -> bool {
    old.len() == new.len()
        && old
            .iter()
            .zip(new)
            .all(|(a, b)| a.identity() == b.identity())
}

impl<T: Clone> VirtualList<T> {
    /// Toggles the selection of the item at `index` and emits `ItemSelect`.
    ///
    /// Returns whether the item is selected afterwards, or `None` for an out-of-range index.
    pub fn toggle_item(&mut self, index: usize) -> Option<bool> {
        let key = self.items.get(index)?.identity().clone();
        let selected = self.selection.toggle(key.clone());
        self.emit(|| ListEvent::ItemSelect {
            item: self.items[index].clone(),
            index,
            key,
            selected_keys: self.selection.to_vec(),
        });
        Some(selected)
    }

    /// Handles a pointer click on the item at `index`.
    ///
    /// Emits `ItemClick`, then toggles the selection (emitting `ItemSelect`) when the list is
    /// selectable. Returns `false` for an out-of-range index.
    pub fn click_item(&mut self, index: usize, original_event: PointerEvent) -> bool {
        let Some(item) = self.items.get(index) else {
            return false;
        };
        self.emit(|| ListEvent::ItemClick {
            item: item.clone(),
            index,
            original_event,
        });
        if self.config.selectable {
            self.toggle_item(index);
        }
        true
    }
}

impl<T: Clone> Clone for VirtualList<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            items: self.items.clone(),
            keys: self.keys.clone(),
            positions: self.positions.clone(),
            scroll: self.scroll.clone(),
            selection: self.selection.clone(),
            phase: self.phase,
            load_requested: self.load_requested,
            on_event: self.on_event.clone(),
        }
    }
}

impl<T> fmt::Debug for VirtualList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualList")
            .field("config", &self.config)
            .field("len", &self.items.len())
            .field("phase", &self.phase)
            .field("scroll", &self.scroll.state())
            .field("selected", &self.selection.len())
            .field("load_requested", &self.load_requested)
            .finish_non_exhaustive()
    }
}
