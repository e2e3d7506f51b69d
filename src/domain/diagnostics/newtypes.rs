// SPDX-License-Identifier: MPL-2.0
//! Validated settings for the diagnostics buffer.

/// Accepted number of retained diagnostic events.
pub mod buffer_capacity_bounds {
    pub const MIN: usize = 100;
    pub const MAX: usize = 10_000;
    pub const DEFAULT: usize = 1_000;
}

/// How many diagnostic events are kept before the oldest is evicted.
///
/// Always within [`buffer_capacity_bounds::MIN`]..=[`buffer_capacity_bounds::MAX`];
/// out-of-range requests are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    /// Capacity from an optional user setting, falling back to the default.
    #[must_use]
    pub fn from_setting(setting: Option<usize>) -> Self {
        setting.map_or_else(Self::default, Self::new)
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}
