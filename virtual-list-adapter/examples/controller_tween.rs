use virtual_list::{Align, Item, ListConfig};
use virtual_list_adapter::{Controller, Easing};

fn main() {
    // Example: smooth scrolling via the adapter controller.
    let config = ListConfig::default().with_item_size(1u32);
    let mut c = Controller::new(config).expect("valid config");
    c.list_mut()
        .set_items((0..10_000).map(|i| Item::new(i, ())).collect())
        .expect("valid items");
    c.on_viewport_size(10);

    let to = c
        .start_tween_to_index(5_000, Align::Start, 0, 200, Easing::SmoothStep)
        .expect("index in range");
    println!("tween target={to}");

    for now_ms in (0..=200).step_by(16) {
        if let Some(view) = c.tick(now_ms) {
            let pos = view.scroll.position;
            println!("t={now_ms}ms pos={pos} range={:?}", view.range);
        }
    }
    // Finish at exactly the target.
    c.tick(200);
    println!("final pos={}", c.list().scroll_state().position);
}
