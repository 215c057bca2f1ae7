use virtual_list::{Key, VirtualList};

/// A scroll anchor that preserves the visual position of an item across data changes.
///
/// Typical use cases:
/// - chat/timeline "prepend" (load older messages above) without content jumping
/// - any reorder/replace where the viewport should stay on the same item identity
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAnchor {
    pub key: Key,
    /// Distance from the anchor item's start to the scroll position.
    pub offset_in_viewport: u64,
}

/// Captures an anchor for the item at the top (or left) edge of the viewport.
///
/// Returns `None` for an empty list.
pub fn capture_first_visible_anchor<T>(list: &VirtualList<T>) -> Option<ScrollAnchor> {
    let position = list.scroll_state().position;
    let index = list.item_at_offset(position)?;
    let start = list.item_offset(index)?;
    let key = list.item(index)?.identity().clone();
    Some(ScrollAnchor {
        key,
        offset_in_viewport: position.saturating_sub(start),
    })
}

/// Scrolls so the anchored item sits where it was when the anchor was captured.
///
/// The target is clamped to the content. Returns `false` when the anchored key is no longer in
/// the list.
pub fn apply_anchor<T>(list: &mut VirtualList<T>, anchor: &ScrollAnchor) -> bool {
    let Some(start) = list
        .index_of_key(&anchor.key)
        .and_then(|index| list.item_offset(index))
    else {
        return false;
    };
    let target = list.clamp_position(start.saturating_add(anchor.offset_in_viewport));
    list.scroll_to_position(target);
    true
}
