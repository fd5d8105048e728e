//! Configuration of the node arena.

/// Policy deciding the capacity of the next storage block once the arena runs out of slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Growth {
    /// Every new block holds `increment` more slots than the previous one (`200, 400, 600, ...`
    /// for an increment of 200).
    Linear {
        /// Slots added on top of the previous block.
        increment: usize,
    },
    /// The first block holds `initial` slots, every following one `factor` times the previous.
    Geometric {
        /// Size of the first block.
        initial: usize,
        /// Multiplier applied to the previous block.
        factor: usize,
    },
}

impl Default for Growth {
    fn default() -> Self {
        Growth::Linear { increment: 200 }
    }
}

/// Largest block the arena grows by. Policies asking for more are clamped to it.
pub const MAX_BLOCK: usize = 1 << 20;

impl Growth {
    /// Capacity of the block that follows a block of `previous` slots (`0` if there is none yet).
    /// The result is at least one and grows past `previous` up to [`MAX_BLOCK`], which it never
    /// exceeds.
    pub fn next_block(&self, previous: usize) -> usize {
        let next = match *self {
            Growth::Linear { increment } => previous.saturating_add(increment),
            Growth::Geometric { initial, .. } if previous == 0 => initial,
            Growth::Geometric { factor, .. } => previous.saturating_mul(factor),
        };
        next.max(previous.saturating_add(1)).clamp(1, MAX_BLOCK)
    }
}

/// Configuration of a [`RadixTree`](crate::RadixTree).
///
/// ```
/// # use ip_radix::*;
/// let config = Config::default()
///     .capacity(1024)
///     .growth(Growth::Geometric { initial: 1024, factor: 2 });
/// let tree: RadixTree<u32> = RadixTree::with_config(config);
/// assert_eq!(tree.stats().allocated, 1024);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Number of node slots reserved eagerly when the tree is created. `0` reserves the first
    /// block lazily according to `growth`.
    pub capacity: usize,
    /// Growth policy of the node storage.
    pub growth: Growth,
}

impl Config {
    /// Set the number of node slots reserved on creation.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the growth policy.
    pub fn growth(mut self, growth: Growth) -> Self {
        self.growth = growth;
        self
    }
}
