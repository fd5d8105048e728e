//! Formatting implementation for the RadixTree

use std::fmt::{Debug, Formatter, Result};

use ipnet::IpNet;

use crate::arena::NodeId;
use crate::cidr::{branch, WalkFamily};
use crate::RadixTree;

impl<T: Debug> Debug for RadixTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        DebugRadixTree {
            tree: self,
            idx: self.root,
            path: 0,
            depth: 0,
        }
        .fmt(f)
    }
}

/// Prints the subtree below one node as nested maps, keyed by the network of each node.
struct DebugRadixTree<'a, T> {
    tree: &'a RadixTree<T>,
    idx: NodeId,
    path: u128,
    depth: u8,
}

impl<'a, T> DebugRadixTree<'a, T> {
    fn child(&self, idx: NodeId, right: bool) -> Self {
        Self {
            tree: self.tree,
            idx,
            path: branch(self.path, self.depth, right),
            depth: self.depth + 1,
        }
    }

    fn net(&self) -> Net {
        Net(WalkFamily::Auto.net(self.path, self.depth))
    }
}

/// Network of a node, printed in CIDR notation.
struct Net(Option<IpNet>);

impl Debug for Net {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.0 {
            Some(net) => write!(f, "{net}"),
            None => f.write_str("?"),
        }
    }
}

impl<T: Debug> Debug for DebugRadixTree<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let node = &self.tree.arena[self.idx];
        let net = self.net();
        let left = node.left.map(|c| self.child(c, false));
        let right = node.right.map(|c| self.child(c, true));
        match (node.value.as_ref(), left, right) {
            (None, None, None) => net.fmt(f),
            (None, None, Some(child)) | (None, Some(child), None) => {
                f.debug_map().entry(&net, &child).finish()
            }
            (None, Some(left), Some(right)) => {
                f.debug_map().entry(&net, &(left, right)).finish()
            }
            (Some(v), None, None) => f.debug_map().entry(&net, v).finish(),
            (Some(v), None, Some(child)) | (Some(v), Some(child), None) => {
                f.debug_map().entry(&net, &(v, child)).finish()
            }
            (Some(v), Some(left), Some(right)) => {
                f.debug_map().entry(&net, &(v, left, right)).finish()
            }
        }
    }
}
