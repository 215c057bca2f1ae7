// Example: load-more on reaching the end of the list.
use std::sync::{Arc, Mutex};

use virtual_list::{Item, ListConfig, ListEvent, VirtualList};

fn page(start: u32, len: u32) -> Vec<Item<u32>> {
    (start..start + len)
        .map(|i| Item::new(i, i).with_height(30 + i % 3 * 10))
        .collect()
}

fn main() {
    let config = ListConfig::default()
        .with_buffer(3)
        .with_reach_end_threshold(Some(0.9));
    let mut list = VirtualList::with_items(config, page(0, 50)).expect("valid items");
    list.set_viewport_size(300);

    let pending = Arc::new(Mutex::new(0usize));
    let sink = Arc::clone(&pending);
    list.set_listener(Some(move |e: &ListEvent<u32>| {
        if let ListEvent::ReachEnd { scroll_position } = e {
            println!("reach end at {scroll_position}");
            *sink.lock().unwrap() += 1;
        }
    }));

    let mut position = 0;
    while list.len() < 200 {
        position += 120;
        let view = list.on_scroll(position);

        let requests = std::mem::take(&mut *pending.lock().unwrap());
        if requests > 0 {
            let next = list.len() as u32;
            list.append_items(page(next, 50)).expect("fresh keys");
            println!(
                "loaded page: len={} range={:?} loading={}",
                list.len(),
                view.range,
                list.is_loading_more()
            );
        }
    }
}
