use core::fmt;
use core::str::FromStr;

use crate::{Axis, ConfigError, SelectionMode};

pub const DEFAULT_ITEM_SIZE: u32 = 50;
pub const DEFAULT_BUFFER: usize = 5;
pub const DEFAULT_REACH_END_THRESHOLD: f64 = 0.8;

/// Upper bound for any single item size (configured or per item).
pub const MAX_ITEM_SIZE: u32 = 1_000_000;
/// Upper bound for the per-side buffer.
pub const MAX_BUFFER: usize = 1_000;

/// A size along the scroll axis, in pixels.
///
/// Parses from plain integers (`"48"`) and pixel strings (`"48px"`, `" 48 px "`). Other units are
/// rejected since the engine has no notion of font or container metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SizeRepr", into = "u32"))]
pub struct Size(u32);

impl Size {
    pub const fn new(px: u32) -> Self {
        Self(px)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for Size {
    fn default() -> Self {
        Self(DEFAULT_ITEM_SIZE)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

impl From<u32> for Size {
    fn from(px: u32) -> Self {
        Self(px)
    }
}

impl From<Size> for u32 {
    fn from(size: Size) -> Self {
        size.0
    }
}

impl FromStr for Size {
    type Err = ConfigError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let malformed = || ConfigError::MalformedSize {
            input: input.to_owned(),
        };
        let s = input.trim();
        let digits = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        if digits == 0 {
            return Err(malformed());
        }
        let (number, unit) = s.split_at(digits);
        let unit = unit.trim_start();
        if !unit.is_empty() && !unit.eq_ignore_ascii_case("px") {
            if unit.chars().all(|c| c.is_ascii_alphabetic() || c == '%') {
                return Err(ConfigError::UnsupportedUnit {
                    input: input.to_owned(),
                    unit: unit.to_owned(),
                });
            }
            return Err(malformed());
        }
        number.parse::<u32>().map(Self).map_err(|_| malformed())
    }
}

impl TryFrom<&str> for Size {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum SizeRepr {
    Px(u32),
    Text(String),
}

#[cfg(feature = "serde")]
impl TryFrom<SizeRepr> for Size {
    type Error = ConfigError;

    fn try_from(value: SizeRepr) -> Result<Self, Self::Error> {
        match value {
            SizeRepr::Px(px) => Ok(Self(px)),
            SizeRepr::Text(s) => s.parse(),
        }
    }
}

/// Configuration for [`crate::VirtualList`].
///
/// All fields have documented defaults; use the `with_*` builders to override a few of them.
/// A config is validated as a whole when it is applied.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ListConfig {
    /// Size of items that carry no explicit `height`. Default: `50px`.
    pub item_size: Size,
    /// Extra items rendered on each side of the viewport. Default: `5`.
    pub buffer: usize,
    /// Scroll axis. Default: vertical.
    pub axis: Axis,
    /// Fraction of the content that must be in view before `ReachEnd` fires.
    ///
    /// `None` disables infinite-scroll notifications. Default: `Some(0.8)`.
    pub reach_end_threshold: Option<f64>,
    /// Default: single.
    pub selection_mode: SelectionMode,
    /// Whether clicking an item toggles its selection. Default: `true`.
    pub selectable: bool,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            item_size: Size::default(),
            buffer: DEFAULT_BUFFER,
            axis: Axis::default(),
            reach_end_threshold: Some(DEFAULT_REACH_END_THRESHOLD),
            selection_mode: SelectionMode::default(),
            selectable: true,
        }
    }
}

impl ListConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item_size(mut self, item_size: impl Into<Size>) -> Self {
        self.item_size = item_size.into();
        self
    }

    /// Parses `item_size` from a string such as `"40px"`.
    pub fn with_item_size_str(mut self, item_size: &str) -> Result<Self, ConfigError> {
        self.item_size = item_size.parse()?;
        Ok(self)
    }

    pub fn with_buffer(mut self, buffer: usize) -> Self {
        self.buffer = buffer;
        self
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_reach_end_threshold(mut self, threshold: Option<f64>) -> Self {
        self.reach_end_threshold = threshold;
        self
    }

    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.item_size.get();
        if size == 0 || size > MAX_ITEM_SIZE {
            return Err(ConfigError::InvalidItemSize {
                size,
                max: MAX_ITEM_SIZE,
            });
        }
        if self.buffer > MAX_BUFFER {
            return Err(ConfigError::InvalidBuffer {
                buffer: self.buffer,
                max: MAX_BUFFER,
            });
        }
        if let Some(threshold) = self.reach_end_threshold {
            // NaN fails both comparisons and is rejected too.
            if !(threshold > 0.0 && threshold <= 1.0) {
                return Err(ConfigError::InvalidThreshold { threshold });
            }
        }
        Ok(())
    }
}
