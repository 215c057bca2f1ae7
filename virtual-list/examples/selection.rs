// Example: keyed selection that survives reorders.
use virtual_list::{Item, ListConfig, PointerEvent, SelectionMode, VirtualList};

fn main() {
    let config = ListConfig::default().with_selection_mode(SelectionMode::Multiple);
    let items: Vec<Item<&str>> = ["alpha", "beta", "gamma", "delta", "epsilon"]
        .into_iter()
        .map(|name| Item::new(name, name))
        .collect();
    let mut list = VirtualList::with_items(config, items.clone()).expect("valid items");
    list.set_viewport_size(500);

    list.click_item(1, PointerEvent::default());
    list.toggle_item(3);
    println!("selected={:?}", list.selected_keys());

    let mut reversed = items;
    reversed.reverse();
    list.set_items(reversed).expect("valid items");
    for it in list.render_with(|it| (it.index, it.item.data, it.selected)) {
        println!("  {it:?}");
    }

    list.select_all_rendered();
    println!("after select_all_rendered: {}", list.selected_keys().len());
}
