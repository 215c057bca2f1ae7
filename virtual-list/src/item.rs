use std::collections::HashMap;

use crate::config::MAX_ITEM_SIZE;
use crate::{ItemError, Key};

/// A list item as supplied by the host application.
///
/// `id` is required; `key` optionally overrides it as the identity used for selection and
/// anchoring. `height` is the size along the scroll axis (height for vertical lists, width for
/// horizontal ones) and falls back to the configured `item_size` when `None`. A height of `0`
/// is a collapsed row: it occupies no space and shares its offset with the next item.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item<T> {
    pub id: Key,
    pub data: T,
    #[cfg_attr(feature = "serde", serde(default))]
    pub height: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub key: Option<Key>,
}

impl<T> Item<T> {
    pub fn new(id: impl Into<Key>, data: T) -> Self {
        Self {
            id: id.into(),
            data,
            height: None,
            key: None,
        }
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_key(mut self, key: impl Into<Key>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// The identity of this item: `key` when set, `id` otherwise.
    pub fn identity(&self) -> &Key {
        self.key.as_ref().unwrap_or(&self.id)
    }

    pub fn size_or(&self, default_size: u32) -> u32 {
        self.height.unwrap_or(default_size)
    }
}

pub(crate) type KeyIndex = HashMap<Key, usize>;

/// Validates `items` and returns the identity → index map.
///
/// `existing` holds identities already present in front of `items` (used when appending);
/// indexes in errors and in the returned map are offset by `base`.
pub(crate) fn index_items<T>(
    items: &[Item<T>],
    existing: Option<&KeyIndex>,
    base: usize,
) -> Result<KeyIndex, ItemError> {
    let mut map = KeyIndex::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let index = base + i;
        if item.id.is_blank() {
            return Err(ItemError::MissingId { index });
        }
        if let Some(height) = item.height.filter(|&h| h > MAX_ITEM_SIZE) {
            return Err(ItemError::InvalidHeight { index, height });
        }
        let key = item.identity();
        if key.is_blank() {
            return Err(ItemError::MissingId { index });
        }
        let prior = existing
            .and_then(|m| m.get(key))
            .or_else(|| map.get(key))
            .copied();
        if let Some(first) = prior {
            return Err(ItemError::DuplicateKey {
                key: key.clone(),
                first,
                second: index,
            });
        }
        map.insert(key.clone(), index);
    }
    Ok(map)
}
