use indexmap::IndexSet;

use crate::Key;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SelectionMode {
    #[default]
    Single,
    Multiple,
}

/// Selected item keys, independent of which items are currently rendered.
///
/// Keys are kept in selection order. In [`SelectionMode::Single`] at most one key is selected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionStore {
    mode: SelectionMode,
    selected: IndexSet<Key>,
}

impl SelectionStore {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: IndexSet::new(),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Switches mode; moving to `Single` keeps only the first selected key.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
        if mode == SelectionMode::Single && self.selected.len() > 1 {
            vwarn!(
                dropped = self.selected.len() - 1,
                "single selection mode: keeping only the first selected key"
            );
            self.selected.truncate(1);
        }
    }

    /// Toggles `key`. Returns whether `key` is selected afterwards.
    ///
    /// In single mode the selection becomes exactly `{key}`; in multiple mode `key` is added or
    /// removed.
    pub fn toggle(&mut self, key: Key) -> bool {
        match self.mode {
            SelectionMode::Single => {
                self.select(key);
                true
            }
            SelectionMode::Multiple => {
                if self.selected.shift_remove(&key) {
                    return false;
                }
                self.selected.insert(key);
                true
            }
        }
    }

    pub fn select(&mut self, key: Key) {
        if self.mode == SelectionMode::Single {
            self.selected.clear();
        }
        self.selected.insert(key);
    }

    pub fn deselect(&mut self, key: &Key) -> bool {
        self.selected.shift_remove(key)
    }

    /// Unions `keys` into the selection. No-op in single mode.
    ///
    /// Only the given keys are affected: items that are not passed (e.g. not loaded or not
    /// rendered) are never selected implicitly.
    pub fn select_all(&mut self, keys: impl IntoIterator<Item = Key>) {
        if self.mode == SelectionMode::Single {
            return;
        }
        self.selected.extend(keys);
    }

    /// Replaces the selection with `keys`.
    ///
    /// In single mode only the first key is kept and a warning is logged.
    pub fn assign(&mut self, keys: impl IntoIterator<Item = Key>) {
        self.selected.clear();
        let mut keys = keys.into_iter();
        match self.mode {
            SelectionMode::Multiple => self.selected.extend(keys),
            SelectionMode::Single => {
                if let Some(first) = keys.next() {
                    self.selected.insert(first);
                }
                let dropped = keys.count();
                if dropped > 0 {
                    vwarn!(
                        dropped,
                        "single selection mode: keeping only the first of the assigned keys"
                    );
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, key: &Key) -> bool {
        self.selected.contains(key)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &Key> + '_ {
        self.selected.iter()
    }

    pub fn to_vec(&self) -> Vec<Key> {
        self.selected.iter().cloned().collect()
    }
}
