use crate::Item;

/// Start offset of one item along the scroll axis.
///
/// `offset` is the cumulative size of all preceding items, so for consecutive entries
/// `next.offset == offset + size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionEntry {
    pub index: usize,
    pub offset: u64,
}

/// Prefix offsets over per-item sizes.
///
/// The index is rebuilt wholesale (one `O(n)` pass) whenever the item list or any item size
/// changes; offset → index lookups are a binary search (`O(log n)`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PositionIndex {
    entries: Vec<PositionEntry>,
    sizes: Vec<u32>,
    total: u64,
}

impl PositionIndex {
    /// Builds the index from items, using each item's `height` or `default_size`.
    pub fn build<T>(items: &[Item<T>], default_size: u32) -> Self {
        Self::from_sizes(items.iter().map(|it| it.size_or(default_size)))
    }

    pub fn from_sizes(sizes: impl IntoIterator<Item = u32>) -> Self {
        let sizes = sizes.into_iter();
        let (lower, _) = sizes.size_hint();
        let mut entries = Vec::with_capacity(lower);
        let mut out_sizes = Vec::with_capacity(lower);
        let mut offset = 0u64;
        for (index, size) in sizes.enumerate() {
            entries.push(PositionEntry { index, offset });
            out_sizes.push(size);
            offset = offset.saturating_add(size as u64);
        }
        Self {
            entries,
            sizes: out_sizes,
            total: offset,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PositionEntry] {
        &self.entries
    }

    /// Sum of all item sizes (the size of the scrollable content region).
    pub fn total_extent(&self) -> u64 {
        self.total
    }

    pub fn offset_of(&self, index: usize) -> Option<u64> {
        self.entries.get(index).map(|e| e.offset)
    }

    pub fn size_of(&self, index: usize) -> Option<u32> {
        self.sizes.get(index).copied()
    }

    pub fn end_of(&self, index: usize) -> Option<u64> {
        let start = self.offset_of(index)?;
        let size = self.size_of(index)?;
        Some(start.saturating_add(size as u64))
    }

    /// Returns the greatest index whose offset is `<= target`.
    ///
    /// Offsets past the end clamp to the last index. Returns `None` when the index is empty.
    pub fn index_at_offset(&self, target: u64) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        // entries[0].offset == 0, so at least one entry always satisfies the predicate.
        let consumed = self.entries.partition_point(|e| e.offset <= target);
        Some(consumed.saturating_sub(1))
    }
}
