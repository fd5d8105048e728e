//! Code to remove entries from the tree.

use log::trace;

use super::*;
use crate::prefix::{checked_len, Bits, Prefix};
use crate::Error;

impl<T> RadixTree<T> {
    /// Remove the value of exactly `prefix`. A node that is left without value and without
    /// children is reclaimed, and so are its ancestors that end up in the same state.
    pub(super) fn remove<P: Prefix>(&mut self, prefix: &P) -> Result<T> {
        let idx = self.reach(prefix)?;
        let node = &mut self.arena[idx];
        if node.value.is_none() {
            return Err(Error::NotFound);
        }
        if idx == self.root || node.has_children() {
            // keep the node, only take the value
            let value = node.value.take();
            self.arena.sub_valued();
            return value.ok_or(Error::NotFound);
        }
        let parent = self.unlink(idx);
        let value = self.arena.release(idx);
        self.prune(parent);
        value.ok_or(Error::NotFound)
    }

    /// Remove `prefix` together with its whole subtree, then prune the ancestors that are left
    /// without value and children. The root itself is never reclaimed.
    pub(super) fn remove_range<P: Prefix>(&mut self, prefix: &P) -> Result<usize> {
        let idx = self.reach(prefix)?;
        if idx == self.root {
            return Ok(self.clear_root());
        }
        let parent = self.unlink(idx);
        let removed = self.reclaim(idx);
        self.prune(parent);
        Ok(removed)
    }

    /// Drop the value of the root and reclaim both of its subtrees.
    pub(super) fn clear_root(&mut self) -> usize {
        let root = &mut self.arena[self.root];
        let left = root.left.take();
        let right = root.right.take();
        let mut removed = 0;
        if root.value.take().is_some() {
            self.arena.sub_valued();
            removed += 1;
        }
        for child in left.into_iter().chain(right) {
            removed += self.reclaim(child);
        }
        removed
    }

    /// Follow the existing children along the bits of `prefix` down to depth `prefix_len`.
    fn reach<P: Prefix>(&self, prefix: &P) -> Result<NodeId> {
        let len = checked_len(prefix)?;
        let key = prefix.repr();
        let mut idx = self.root;
        for depth in 0..len {
            idx = self.arena[idx]
                .child(key.is_bit_set(depth))
                .ok_or(Error::NotFound)?;
        }
        Ok(idx)
    }

    /// Detach a node from its parent, returning the parent.
    fn unlink(&mut self, idx: NodeId) -> Option<NodeId> {
        let parent = self.arena[idx].parent.take()?;
        let node = &mut self.arena[parent];
        if node.right == Some(idx) {
            node.right = None;
        } else {
            node.left = None;
        }
        Some(parent)
    }

    /// Release a detached node and all of its descendants into the arena. Returns the number of
    /// values dropped on the way.
    fn reclaim(&mut self, idx: NodeId) -> usize {
        let mut to_free = vec![idx];
        let mut nodes = 0;
        let mut values = 0;
        while let Some(idx) = to_free.pop() {
            let node = &mut self.arena[idx];
            to_free.extend(node.left.take());
            to_free.extend(node.right.take());
            if self.arena.release(idx).is_some() {
                values += 1;
            }
            nodes += 1;
        }
        trace!("reclaimed {nodes} nodes carrying {values} values");
        values
    }

    /// Walk upwards from `idx`, reclaiming every node without value and children until a node
    /// that still holds state, or the root, is reached.
    fn prune(&mut self, mut idx: Option<NodeId>) {
        let mut pruned = 0;
        while let Some(cur) = idx {
            let node = &self.arena[cur];
            if cur == self.root || node.value.is_some() || node.has_children() {
                break;
            }
            idx = self.unlink(cur);
            self.arena.release(cur);
            pruned += 1;
        }
        if pruned > 0 {
            trace!("pruned {pruned} empty ancestors");
        }
    }
}
