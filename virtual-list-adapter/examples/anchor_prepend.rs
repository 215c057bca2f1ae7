use virtual_list::{Item, ListConfig};
use virtual_list_adapter::Controller;

fn messages(ids: impl IntoIterator<Item = i64>) -> Vec<Item<String>> {
    ids.into_iter()
        .map(|id| {
            let height = 20 + (id % 4) as u32 * 8;
            Item::new(id, format!("message {id}")).with_height(height)
        })
        .collect()
}

fn main() {
    // Example: keep the visual scroll position across a prepend (chat/timeline loading older
    // messages).
    //
    // `replace_items_anchored` does the usual adapter flow in one call:
    // 1) capture an anchor (key + offset_in_viewport) before data changes
    // 2) replace the items
    // 3) scroll so the same item stays in the same place
    let mut c = Controller::new(ListConfig::default()).expect("valid config");
    c.list_mut()
        .set_items(messages(1000..1100))
        .expect("valid items");
    c.on_viewport_size(240);
    c.on_scroll(1_234);

    let anchor = c
        .capture_first_visible_anchor()
        .expect("list must not be empty");
    println!(
        "before prepend: pos={} anchor={anchor:?}",
        c.list().scroll_state().position
    );

    // Prepend 10 older messages; old items shift by +10 indexes.
    let view = c
        .replace_items_anchored(messages((990..1000).chain(1000..1100)))
        .expect("valid items");

    println!(
        "after prepend: pos={} range={:?}",
        view.scroll.position, view.range
    );
}
