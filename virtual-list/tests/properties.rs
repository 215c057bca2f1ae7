//! Property-based invariant tests for the virtual list engine.
//!
//! 1. Prefix sums: every entry's offset is the sum of all preceding sizes.
//! 2. Lookup: `index_at_offset` returns the greatest index whose offset is <= the target.
//! 3. Containment: the computed range holds every item intersecting the viewport.
//! 4. Determinism: identical inputs give identical ranges and scroll targets.
//! 5. Selection identity: reordering items never changes which keys are selected.
//! 6. Single mode never holds more than one key.
//! 7. Reach-end fires at most once without new data.

use proptest::prelude::*;
use virtual_list::{
    Align, Axis, Item, Key, ListConfig, ListEvent, PositionIndex, ScrollState, SelectionMode,
    SelectionStore, VirtualList, compute_range,
};

use std::sync::{Arc, Mutex};

// ── Helpers ─────────────────────────────────────────────────────────────

fn sizes_strategy() -> impl Strategy<Value = Vec<u32>> {
    proptest::collection::vec(0u32..=120, 1..=300)
}

fn align_strategy() -> impl Strategy<Value = Align> {
    prop_oneof![
        Just(Align::Start),
        Just(Align::Center),
        Just(Align::End),
        Just(Align::Auto),
    ]
}

fn items_from_sizes(sizes: &[u32]) -> Vec<Item<usize>> {
    sizes
        .iter()
        .enumerate()
        .map(|(i, &h)| Item::new(format!("item-{i}"), i).with_height(h))
        .collect()
}

// ═════════════════════════════════════════════════════════════════════════
// Position index
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn offsets_are_prefix_sums(sizes in sizes_strategy()) {
        let idx = PositionIndex::from_sizes(sizes.iter().copied());
        let mut sum = 0u64;
        for (i, entry) in idx.entries().iter().enumerate() {
            prop_assert_eq!(entry.index, i);
            prop_assert_eq!(entry.offset, sum);
            sum += sizes[i] as u64;
        }
        prop_assert_eq!(idx.total_extent(), sum);
    }

    #[test]
    fn index_at_offset_is_greatest_at_or_before(
        sizes in sizes_strategy(),
        target in 0u64..50_000,
    ) {
        let idx = PositionIndex::from_sizes(sizes.iter().copied());
        let found = idx.index_at_offset(target).unwrap();
        prop_assert!(idx.entries()[found].offset <= target);
        if let Some(next) = idx.entries().get(found + 1) {
            prop_assert!(next.offset > target);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Visible range
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn range_contains_every_intersecting_item(
        sizes in sizes_strategy(),
        position in 0u64..40_000,
        viewport_size in 0u32..2_000,
        buffer in 0usize..10,
    ) {
        let idx = PositionIndex::from_sizes(sizes.iter().copied());
        let scroll = ScrollState { position, viewport_size, axis: Axis::Vertical };
        let range = compute_range(&idx, &scroll, buffer).unwrap();

        prop_assert!(range.start <= range.end);
        prop_assert!(range.end < sizes.len());
        for (i, entry) in idx.entries().iter().enumerate() {
            let end = entry.offset + sizes[i] as u64;
            if entry.offset < scroll.end() && end > scroll.position {
                prop_assert!(range.contains(i), "item {} missing from {:?}", i, range);
            }
        }
    }

    #[test]
    fn range_is_deterministic(
        sizes in sizes_strategy(),
        position in 0u64..40_000,
        viewport_size in 0u32..2_000,
    ) {
        let idx = PositionIndex::from_sizes(sizes.iter().copied());
        let scroll = ScrollState { position, viewport_size, axis: Axis::Vertical };
        prop_assert_eq!(compute_range(&idx, &scroll, 3), compute_range(&idx, &scroll, 3));
    }

    #[test]
    fn scroll_targets_are_reproducible(
        sizes in sizes_strategy(),
        pick in any::<prop::sample::Index>(),
        align in align_strategy(),
        viewport_size in 1u32..2_000,
    ) {
        let mut list = VirtualList::with_items(ListConfig::default(), items_from_sizes(&sizes))
            .unwrap();
        list.set_viewport_size(viewport_size);
        let index = pick.index(sizes.len());

        let a = list.scroll_to_index_position(index, align);
        let b = list.scroll_to_index_position(index, align);
        prop_assert_eq!(a, b);
        prop_assert!(a.is_some());
        prop_assert_eq!(list.scroll_to_index_position(sizes.len(), align), None);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Selection
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reordering_keeps_selection_identity(
        sizes in sizes_strategy(),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 0..20),
        seed in any::<u64>(),
    ) {
        let items = items_from_sizes(&sizes);
        let config = ListConfig::default().with_selection_mode(SelectionMode::Multiple);
        let mut list = VirtualList::with_items(config, items.clone()).unwrap();
        let chosen: Vec<Key> = picks
            .iter()
            .map(|p| items[p.index(items.len())].identity().clone())
            .collect();
        list.select_items(chosen.clone());

        let before: Vec<bool> = items.iter().map(|it| list.is_selected(it.identity())).collect();

        let mut shuffled = items.clone();
        let n = shuffled.len();
        let mut state = seed;
        for i in (1..n).rev() {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            shuffled.swap(i, (state % (i as u64 + 1)) as usize);
        }
        list.set_items(shuffled).unwrap();

        let after: Vec<bool> = items.iter().map(|it| list.is_selected(it.identity())).collect();
        prop_assert_eq!(before, after);
        for key in &chosen {
            prop_assert!(list.is_selected(key));
        }
    }

    #[test]
    fn single_mode_holds_at_most_one_key(
        ops in proptest::collection::vec((0u8..4, 0i64..10), 0..50),
    ) {
        let mut store = SelectionStore::new(SelectionMode::Single);
        for (op, k) in ops {
            match op {
                0 => { store.toggle(Key::from(k)); }
                1 => store.select_all((0..k).map(Key::from)),
                2 => store.assign((0..k).map(Key::from)),
                _ => { store.deselect(&Key::from(k)); }
            }
            prop_assert!(store.len() <= 1);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Infinite scroll
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reach_end_fires_at_most_once_without_new_items(
        positions in proptest::collection::vec(0u64..6_000, 1..40),
    ) {
        let items = (0..100).map(|i| Item::new(i, i)).collect();
        let mut list = VirtualList::with_items(ListConfig::default(), items).unwrap();
        list.set_viewport_size(200);

        let count = Arc::new(Mutex::new(0usize));
        let sink = Arc::clone(&count);
        list.set_listener(Some(move |e: &ListEvent<i32>| {
            if matches!(e, ListEvent::ReachEnd { .. }) {
                *sink.lock().unwrap() += 1;
            }
        }));

        let crossed = positions.iter().any(|&p| (p + 200) as f64 / 5000.0 >= 0.8);
        for p in positions {
            list.on_scroll(p);
        }
        let fired = *count.lock().unwrap();
        prop_assert!(fired <= 1);
        prop_assert_eq!(fired == 1, crossed);
    }
}
