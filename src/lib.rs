//! This crate provides an uncompressed binary radix tree that maps IP prefixes in CIDR notation to
//! values. It supports longest-prefix match, exact match and the list of all covering prefixes.
//! IPv4 and IPv6 prefixes are stored in the same tree. Prefixes can be given as text
//! (`"10.0.0.0/8"`), as [ipnet](https://docs.rs/ipnet) types, as
//! [ipnetwork](https://crates.io/crates/ipnetwork) or [cidr](https://crates.io/crates/cidr) types
//! (behind the features of the same name), or as any tuple `(R, u8)` where `R` is an unsigned
//! primitive integer.
//!
//! ```
//! # use ip_radix::*;
//! # fn main() -> Result<()> {
//! let mut tree = RadixTree::new();
//! tree.add_cidr("10.0.0.0/8", "private")?;
//! tree.add_cidr("10.20.0.0/16", "office")?;
//! tree.add_cidr("2001:db8:1::/48", "lab")?;
//!
//! assert_eq!(tree.find_cidr("10.20.30.40")?, Some(&"office"));
//! assert_eq!(tree.find_cidr("10.30.0.1")?, Some(&"private"));
//! assert_eq!(tree.find_cidr("2001:db8:1::1")?, Some(&"lab"));
//! assert_eq!(tree.find_cidr("192.168.0.1")?, None);
//! assert_eq!(tree.find_all_cidr("10.20.30.40")?, vec![&"private", &"office"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Description of the Tree
//!
//! Every node stands for one bit. The root matches every address; the left child of a node at
//! depth `d` extends its path with a `0` at bit `d` (counted from the most significant bit), the
//! right child with a `1`. A prefix of length `n` lives in the node at depth `n`, and every node
//! on the way there exists, with or without a value. Paths are never compressed, so each lookup
//! costs at most 33 (IPv4) or 129 (IPv6) steps, independent of the number of entries.
//!
//! IPv4 addresses occupy the 32 most significant bits of the same key space as IPv6. `10.0.0.0/8`
//! and `a00::/8` therefore name the same node. The tree does not remember the family a prefix
//! was inserted with; [`WalkFamily`] chooses how paths are reported when walking.
//!
//! # Node storage
//!
//! Nodes live in an arena of blocks that grow according to [`Growth`] and never shrink. Removed
//! nodes are kept on a free list and handed out again before new slots are used. The counters in
//! [`Stats`] describe this storage.
//!
//! # Operations on the tree
//!
//! | Operation                                       | Complexity          |
//! |-------------------------------------------------|---------------------|
//! | `add_cidr`, `set_cidr`                          | `O(w)`              |
//! | `delete_cidr`                                   | `O(w)`              |
//! | `delete_whole_range_cidr`                       | `O(w + m)`          |
//! | `find_cidr`, `find_exact_cidr`, `find_all_cidr` | `O(w)`              |
//! | `walk`, `iter`                                  | `O(n)`              |
//! | `stats`, `len`                                  | `O(1)`              |
//!
//! Here `w` is the width of the address (32 or 128), `m` the number of nodes below the removed
//! prefix and `n` the number of nodes in the tree.
//!
//! There are two kinds of removals:
//!
//! - [`RadixTree::delete_cidr`] removes the value of exactly one prefix. Prefixes below it stay.
//!   Nodes left without value and without children are reclaimed, walking upwards.
//! - [`RadixTree::delete_whole_range_cidr`] removes the prefix together with everything below it.
//!
//! # Concurrency
//!
//! [`RadixTree`] needs `&mut self` to change. [`SyncRadixTree`] puts a tree behind one lock for
//! sharing between threads.

#![deny(missing_docs)]

mod arena;
mod cidr;
mod config;
mod error;
mod fmt;
mod joint;
mod prefix;
#[cfg(feature = "serde")]
mod serde;
mod sync;
mod tree;

#[cfg(test)]
mod fuzzing;

pub use arena::Stats;
pub use cidr::{parse_cidr, WalkFamily};
pub use config::{Config, Growth, MAX_BLOCK};
pub use error::{Error, Result};
pub use joint::JointPrefix;
pub use prefix::{Bits, Prefix};
pub use sync::SyncRadixTree;
pub use tree::{Iter, Keys, RadixTree, Values};
