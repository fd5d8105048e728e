//! Implementation of the radix tree.

use ipnet::IpNet;

use crate::arena::{Arena, NodeId, Stats};
use crate::cidr::parse_cidr;
use crate::joint::{dispatch, JointPrefix};
use crate::{Config, Result};

mod find;
mod insert;
mod iter;
mod remove;
mod walk;

pub use iter::*;

/// Radix tree mapping IPv4 and IPv6 prefixes to values.
///
/// Every node stands for one bit of the address: the root matches everything, its left child all
/// addresses starting with `0`, its right child all addresses starting with `1`, and so on. A
/// prefix of length `n` is stored in the node at depth `n`. Paths are not compressed, so a
/// lookup visits at most 33 (IPv4) or 129 (IPv6) nodes.
///
/// ```
/// # use ip_radix::*;
/// # fn main() -> Result<()> {
/// let mut tree = RadixTree::new();
/// tree.add_cidr("1.2.3.0/24", 2)?;
/// tree.add_cidr("1.2.3.0/25", 1)?;
/// assert_eq!(tree.find_cidr("1.2.3.1")?, Some(&1));
/// assert_eq!(tree.find_cidr("1.2.3.129")?, Some(&2));
/// assert_eq!(tree.find_all_cidr("1.2.3.1")?, vec![&2, &1]);
/// assert_eq!(tree.find_exact_cidr("1.2.3.1"), Err(Error::NotFound));
/// assert_eq!(tree.add_cidr("1.2.3.0/24", 3), Err(Error::NodeBusy));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RadixTree<T> {
    pub(crate) arena: Arena<T>,
    pub(crate) root: NodeId,
}

impl<T> Default for RadixTree<T> {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl<T> RadixTree<T> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tree whose node storage is set up according to `config`.
    pub fn with_config(config: Config) -> Self {
        let mut arena = Arena::new(config);
        let root = arena.allocate();
        Self { arena, root }
    }

    /// Counters of the node storage.
    ///
    /// ```
    /// # use ip_radix::*;
    /// # fn main() -> Result<()> {
    /// let mut tree = RadixTree::new();
    /// tree.add_cidr("128.0.0.0/2", 1)?;
    /// assert_eq!(tree.stats(), Stats { nodes: 3, valued: 1, allocated: 200, free: 0 });
    /// tree.delete_cidr("128.0.0.0/2")?;
    /// assert_eq!(tree.stats(), Stats { nodes: 1, valued: 0, allocated: 200, free: 2 });
    /// # Ok(())
    /// # }
    /// ```
    pub fn stats(&self) -> Stats {
        self.arena.stats()
    }

    /// Number of prefixes carrying a value.
    pub fn len(&self) -> usize {
        self.arena.stats().valued
    }

    /// Returns `true` if no prefix carries a value.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all values. The nodes are kept on the free list for later inserts.
    pub fn clear(&mut self) {
        self.clear_root();
    }

    /// Insert a value for the CIDR unless that exact prefix already has one, in which case
    /// [`Error::NodeBusy`](crate::Error::NodeBusy) is returned and the tree keeps the old value.
    pub fn add_cidr(&mut self, cidr: &str, value: T) -> Result<()> {
        self.add(&parse_cidr(cidr)?, value)
    }

    /// Insert a value for the CIDR, replacing and returning any previous one.
    pub fn set_cidr(&mut self, cidr: &str, value: T) -> Result<Option<T>> {
        self.set(&parse_cidr(cidr)?, value)
    }

    /// Remove the value of exactly this CIDR and return it. Prefixes below it are kept.
    pub fn delete_cidr(&mut self, cidr: &str) -> Result<T> {
        self.delete(&parse_cidr(cidr)?)
    }

    /// Remove the CIDR and everything below it. Returns the number of values removed.
    pub fn delete_whole_range_cidr(&mut self, cidr: &str) -> Result<usize> {
        self.delete_whole_range(&parse_cidr(cidr)?)
    }

    /// Longest prefix match: the value of the most specific stored prefix covering the CIDR.
    pub fn find_cidr(&self, cidr: &str) -> Result<Option<&T>> {
        self.find(&parse_cidr(cidr)?)
    }

    /// The value stored for exactly this CIDR, or [`Error::NotFound`](crate::Error::NotFound).
    pub fn find_exact_cidr(&self, cidr: &str) -> Result<&T> {
        self.find_exact(&parse_cidr(cidr)?)
    }

    /// Values of all stored prefixes covering the CIDR, least specific first.
    pub fn find_all_cidr(&self, cidr: &str) -> Result<Vec<&T>> {
        self.find_all(&parse_cidr(cidr)?)
    }

    /// Insert a value for `prefix` unless that exact prefix already has one.
    ///
    /// ```
    /// # use ip_radix::*;
    /// # use ipnet::Ipv6Net;
    /// # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    /// let mut tree = RadixTree::new();
    /// let net: Ipv6Net = "dead:beef::/48".parse()?;
    /// tree.add(&net, 4)?;
    /// assert_eq!(tree.add(&net, 5), Err(Error::NodeBusy));
    /// assert_eq!(tree.find_exact(&net), Ok(&4));
    /// # Ok(())
    /// # }
    /// ```
    pub fn add<P: JointPrefix>(&mut self, prefix: &P, value: T) -> Result<()> {
        dispatch!(prefix, p => self.upsert(p, value, false)).map(drop)
    }

    /// Insert a value for `prefix`, replacing and returning any previous one.
    pub fn set<P: JointPrefix>(&mut self, prefix: &P, value: T) -> Result<Option<T>> {
        dispatch!(prefix, p => self.upsert(p, value, true))
    }

    /// Remove and return the value of exactly `prefix`.
    ///
    /// ```
    /// # use ip_radix::*;
    /// # fn main() -> Result<()> {
    /// let mut tree = RadixTree::new();
    /// tree.add(&(0x0102_0300u32, 24u8), 2)?;
    /// tree.add(&(0x0102_0300u32, 25u8), 1)?;
    /// assert_eq!(tree.delete(&(0x0102_0300u32, 24u8)), Ok(2));
    /// assert_eq!(tree.delete(&(0x0102_0300u32, 24u8)), Err(Error::NotFound));
    /// assert_eq!(tree.find(&(0x0102_0300u32, 32u8)), Ok(Some(&1)));
    /// # Ok(())
    /// # }
    /// ```
    pub fn delete<P: JointPrefix>(&mut self, prefix: &P) -> Result<T> {
        dispatch!(prefix, p => self.remove(p))
    }

    /// Remove `prefix` and every prefix below it, returning the number of values removed.
    pub fn delete_whole_range<P: JointPrefix>(&mut self, prefix: &P) -> Result<usize> {
        dispatch!(prefix, p => self.remove_range(p))
    }

    /// Longest prefix match for `prefix`.
    pub fn find<P: JointPrefix>(&self, prefix: &P) -> Result<Option<&T>> {
        dispatch!(prefix, p => self.best_match(p))
    }

    /// Exact match for `prefix`.
    pub fn find_exact<P: JointPrefix>(&self, prefix: &P) -> Result<&T> {
        dispatch!(prefix, p => self.exact_match(p))
    }

    /// All values covering `prefix`, least specific first.
    pub fn find_all<P: JointPrefix>(&self, prefix: &P) -> Result<Vec<&T>> {
        dispatch!(prefix, p => self.all_matches(p))
    }
}

impl<T> FromIterator<(IpNet, T)> for RadixTree<T> {
    fn from_iter<I: IntoIterator<Item = (IpNet, T)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<(IpNet, T)> for RadixTree<T> {
    /// Set every prefix, later values replacing earlier ones.
    fn extend<I: IntoIterator<Item = (IpNet, T)>>(&mut self, iter: I) {
        for (net, value) in iter {
            // an `IpNet` never exceeds the width of its family
            let _ = self.set(&net, value);
        }
    }
}
