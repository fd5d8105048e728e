//! Code to insert values into the tree.

use log::trace;

use super::*;
use crate::prefix::{checked_len, Bits, Prefix};
use crate::Error;

impl<T> RadixTree<T> {
    /// Walk down the bits of `prefix`, creating every missing node, and store `value` in the node
    /// at depth `prefix_len`. Nodes created on the way stay in the tree even if the value is
    /// rejected with [`Error::NodeBusy`].
    pub(super) fn upsert<P: Prefix>(
        &mut self,
        prefix: &P,
        value: T,
        overwrite: bool,
    ) -> Result<Option<T>> {
        let len = checked_len(prefix)?;
        let key = prefix.repr();
        let mut idx = self.root;
        let mut created = 0;
        for depth in 0..len {
            let right = key.is_bit_set(depth);
            idx = match self.arena[idx].child(right) {
                Some(next) => next,
                None => {
                    created += 1;
                    self.new_child(idx, right)
                }
            };
        }
        if created > 0 {
            trace!("created {created} nodes on the path to a /{len} prefix");
        }

        let node = &mut self.arena[idx];
        if node.value.is_some() && !overwrite {
            return Err(Error::NodeBusy);
        }
        let old = node.value.replace(value);
        if old.is_none() {
            self.arena.add_valued();
        }
        Ok(old)
    }

    /// allocate a node and link it as the left or right child of `parent`.
    fn new_child(&mut self, parent: NodeId, right: bool) -> NodeId {
        let child = self.arena.allocate();
        self.arena[child].parent = Some(parent);
        let node = &mut self.arena[parent];
        if right {
            node.right = Some(child);
        } else {
            node.left = Some(child);
        }
        child
    }
}
