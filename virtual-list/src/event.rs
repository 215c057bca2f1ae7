use std::sync::Arc;

use crate::{Item, Key};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

/// The host's pointer event, forwarded untouched in [`ListEvent::ItemClick`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub button: PointerButton,
    pub shift: bool,
    pub ctrl: bool,
    pub meta: bool,
}

/// Events emitted by [`crate::VirtualList`], delivered synchronously in emission order.
#[derive(Clone, Debug, PartialEq)]
pub enum ListEvent<T> {
    Scroll {
        scroll_position: u64,
        scroll_percentage: f64,
    },
    /// The reach-end threshold was crossed. Fires once until new items are appended or loading
    /// is finished explicitly.
    ReachEnd { scroll_position: u64 },
    ItemSelect {
        item: Item<T>,
        index: usize,
        key: Key,
        selected_keys: Vec<Key>,
    },
    ItemClick {
        item: Item<T>,
        index: usize,
        original_event: PointerEvent,
    },
}

/// A callback receiving every [`ListEvent`].
pub type EventListener<T> = Arc<dyn Fn(&ListEvent<T>) + Send + Sync>;
