//! A [`RadixTree`] behind a single lock, shareable between threads.

use ipnet::IpNet;
use parking_lot::Mutex;

use crate::{Config, RadixTree, Result, Stats, WalkFamily};

/// Thread-safe wrapper around a [`RadixTree`]. Every operation takes one coarse lock for its
/// whole duration. Lookups return cloned values, since references cannot outlive the lock.
///
/// ```
/// # use std::sync::Arc;
/// # use ip_radix::*;
/// let tree = Arc::new(SyncRadixTree::new());
/// let handles: Vec<_> = (0..4u32)
///     .map(|i| {
///         let tree = tree.clone();
///         std::thread::spawn(move || tree.add_cidr(&format!("10.{i}.0.0/16"), i))
///     })
///     .collect();
/// for h in handles {
///     h.join().unwrap().unwrap();
/// }
/// assert_eq!(tree.find_cidr("10.2.3.4"), Ok(Some(2)));
/// assert_eq!(tree.stats().valued, 4);
/// ```
pub struct SyncRadixTree<T> {
    inner: Mutex<RadixTree<T>>,
}

impl<T> Default for SyncRadixTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<RadixTree<T>> for SyncRadixTree<T> {
    fn from(tree: RadixTree<T>) -> Self {
        Self {
            inner: Mutex::new(tree),
        }
    }
}

impl<T> SyncRadixTree<T> {
    /// Create an empty tree.
    pub fn new() -> Self {
        RadixTree::new().into()
    }

    /// Create an empty tree whose node storage is set up according to `config`.
    pub fn with_config(config: Config) -> Self {
        RadixTree::with_config(config).into()
    }

    /// Unwrap the tree.
    pub fn into_inner(self) -> RadixTree<T> {
        self.inner.into_inner()
    }

    /// Run `f` on the tree while holding the lock.
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut RadixTree<T>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// See [`RadixTree::stats`].
    pub fn stats(&self) -> Stats {
        self.inner.lock().stats()
    }

    /// See [`RadixTree::add_cidr`].
    pub fn add_cidr(&self, cidr: &str, value: T) -> Result<()> {
        self.inner.lock().add_cidr(cidr, value)
    }

    /// See [`RadixTree::set_cidr`].
    pub fn set_cidr(&self, cidr: &str, value: T) -> Result<Option<T>> {
        self.inner.lock().set_cidr(cidr, value)
    }

    /// See [`RadixTree::delete_cidr`].
    pub fn delete_cidr(&self, cidr: &str) -> Result<T> {
        self.inner.lock().delete_cidr(cidr)
    }

    /// See [`RadixTree::delete_whole_range_cidr`].
    pub fn delete_whole_range_cidr(&self, cidr: &str) -> Result<usize> {
        self.inner.lock().delete_whole_range_cidr(cidr)
    }

    /// See [`RadixTree::walk`]. The lock is held until the walk ends, so `f` must not call back
    /// into this tree.
    pub fn walk<E, F>(&self, family: WalkFamily, f: F) -> std::result::Result<(), E>
    where
        F: FnMut(IpNet, &T) -> std::result::Result<bool, E>,
    {
        self.inner.lock().walk(family, f)
    }
}

impl<T: Clone> SyncRadixTree<T> {
    /// See [`RadixTree::find_cidr`].
    pub fn find_cidr(&self, cidr: &str) -> Result<Option<T>> {
        Ok(self.inner.lock().find_cidr(cidr)?.cloned())
    }

    /// See [`RadixTree::find_exact_cidr`].
    pub fn find_exact_cidr(&self, cidr: &str) -> Result<T> {
        self.inner.lock().find_exact_cidr(cidr).cloned()
    }

    /// See [`RadixTree::find_all_cidr`].
    pub fn find_all_cidr(&self, cidr: &str) -> Result<Vec<T>> {
        let tree = self.inner.lock();
        let all = tree.find_all_cidr(cidr)?;
        Ok(all.into_iter().cloned().collect())
    }
}
