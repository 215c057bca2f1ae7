//! Adapter utilities for the `virtual-list` crate.
//!
//! The `virtual-list` crate is UI-agnostic and focuses on the core math and state. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Scroll anchoring (e.g. prepend in chat/timelines without visual jumps)
//! - Tween-based smooth scrolling helpers (optional; adapter-driven)
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![forbid(unsafe_code)]

mod anchor;
mod controller;
mod tween;


pub use anchor::{ScrollAnchor, apply_anchor, capture_first_visible_anchor};
pub use controller::Controller;
pub use tween::{Easing, Tween};
