//! Module that contains the implementation for the iterators

use super::*;
use crate::cidr::{branch, WalkFamily};

/// An iterator over all entries of a [`RadixTree`] in pre-order, left before right. Prefixes are
/// reported the way [`WalkFamily::Auto`] does.
#[derive(Clone)]
pub struct Iter<'a, T> {
    tree: &'a RadixTree<T>,
    nodes: Vec<(NodeId, u128, u8)>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (IpNet, &'a T);

    fn next(&mut self) -> Option<(IpNet, &'a T)> {
        while let Some((idx, path, depth)) = self.nodes.pop() {
            let node = &self.tree.arena[idx];
            if let Some(right) = node.right {
                self.nodes.push((right, branch(path, depth, true), depth + 1));
            }
            if let Some(left) = node.left {
                self.nodes.push((left, path, depth + 1));
            }
            if let Some(value) = &node.value {
                if let Some(net) = WalkFamily::Auto.net(path, depth) {
                    return Some((net, value));
                }
            }
        }
        None
    }
}

/// An iterator over all prefixes of a [`RadixTree`].
#[derive(Clone)]
pub struct Keys<'a, T>(Iter<'a, T>);

impl<'a, T> Iterator for Keys<'a, T> {
    type Item = IpNet;

    fn next(&mut self) -> Option<IpNet> {
        self.0.next().map(|(p, _)| p)
    }
}

/// An iterator over all values of a [`RadixTree`] in the order of their prefixes.
#[derive(Clone)]
pub struct Values<'a, T>(Iter<'a, T>);

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.0.next().map(|(_, t)| t)
    }
}

impl<T> RadixTree<T> {
    /// An iterator visiting all prefixes with a value, together with that value.
    ///
    /// ```
    /// # use ip_radix::*;
    /// # fn main() -> Result<()> {
    /// let mut tree = RadixTree::new();
    /// tree.add_cidr("192.168.1.0/24", 2)?;
    /// tree.add_cidr("192.168.0.0/16", 1)?;
    /// tree.add_cidr("2001:db8:1::/48", 3)?;
    /// assert_eq!(
    ///     tree.iter().map(|(p, v)| (p.to_string(), *v)).collect::<Vec<_>>(),
    ///     vec![
    ///         ("2001:db8:1::/48".to_string(), 3),
    ///         ("192.168.0.0/16".to_string(), 1),
    ///         ("192.168.1.0/24".to_string(), 2),
    ///     ]
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            tree: self,
            nodes: vec![(self.root, 0, 0)],
        }
    }

    /// An iterator visiting all prefixes with a value.
    pub fn keys(&self) -> Keys<'_, T> {
        Keys(self.iter())
    }

    /// An iterator visiting all values.
    pub fn values(&self) -> Values<'_, T> {
        Values(self.iter())
    }
}

impl<'a, T> IntoIterator for &'a RadixTree<T> {
    type Item = (IpNet, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
