// Example: minimal usage, render set and scroll-to helper.
use virtual_list::{Align, Item, ListConfig, VirtualList};

fn main() {
    let items = (0..100_000)
        .map(|i| Item::new(i, format!("row {i}")))
        .collect();
    let mut list = VirtualList::with_items(ListConfig::default(), items).expect("valid items");
    list.set_viewport_size(400);
    let view = list.on_scroll(123_456);

    println!("total_extent={}", list.total_extent());
    println!("visible_range={:?}", view.range);
    for row in list.render_with(|it| format!("{} @ {:?}px", it.item.data, it.style.top())) {
        println!("  {row}");
    }

    let pos = list
        .scroll_to_index_position(99_999, Align::End)
        .expect("index in range");
    list.scroll_to_position(list.clamp_position(pos));
    println!(
        "after scroll_to_index: position={}",
        list.scroll_state().position
    );
}
