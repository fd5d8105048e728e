//! Depth-first enumeration of the tree with a callback.

use super::*;
use crate::cidr::{branch, WalkFamily};

impl<T> RadixTree<T> {
    /// Walk the tree depth first (pre-order, left before right) and call `f` for every node
    /// holding a value, with the network reconstructed from the branch bits taken to reach it.
    ///
    /// `f` returns `Ok(true)` to continue into the subtree of that node, `Ok(false)` to skip the
    /// subtree (siblings are still visited), or an error that stops the walk and is returned.
    /// Nodes that `family` cannot express are not reported.
    ///
    /// ```
    /// # use ip_radix::*;
    /// # fn main() -> Result<()> {
    /// let mut tree = RadixTree::new();
    /// tree.add_cidr("1.2.0.0/16", 0)?;
    /// tree.add_cidr("1.2.3.0/24", 1)?;
    /// tree.add_cidr("5.6.7.8", 2)?;
    ///
    /// let mut seen = Vec::new();
    /// tree.walk(WalkFamily::V4, |net, value| {
    ///     seen.push((net.to_string(), *value));
    ///     Ok::<_, Error>(*value != 0)
    /// })?;
    /// assert_eq!(seen, vec![("1.2.0.0/16".to_string(), 0), ("5.6.7.8/32".to_string(), 2)]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn walk<E, F>(&self, family: WalkFamily, mut f: F) -> std::result::Result<(), E>
    where
        F: FnMut(IpNet, &T) -> std::result::Result<bool, E>,
    {
        let mut stack = vec![(self.root, 0u128, 0u8)];
        while let Some((idx, path, depth)) = stack.pop() {
            let node = &self.arena[idx];
            if let Some(value) = &node.value {
                if let Some(net) = family.net(path, depth) {
                    if !f(net, value)? {
                        continue;
                    }
                }
            }
            if !family.descends(depth) {
                continue;
            }
            if let Some(right) = node.right {
                stack.push((right, branch(path, depth, true), depth + 1));
            }
            if let Some(left) = node.left {
                stack.push((left, path, depth + 1));
            }
        }
        Ok(())
    }
}
