//! Node storage of the radix tree: growing blocks of nodes plus a free list of reclaimed ones.

use std::ops::{Index, IndexMut};

use log::debug;

use crate::config::{Config, Growth};

/// Stable handle of a node inside the [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId {
    block: u32,
    slot: u32,
}

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: Option<T>,
    pub(crate) left: Option<NodeId>,
    /// Right child while the node is live, next free node while it sits on the free list.
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl<T> Node<T> {
    const fn empty() -> Self {
        Self {
            value: None,
            left: None,
            right: None,
            parent: None,
        }
    }

    /// Get the child of a node, either to the left or the right
    #[inline(always)]
    pub(crate) fn child(&self, right: bool) -> Option<NodeId> {
        if right {
            self.right
        } else {
            self.left
        }
    }

    #[inline(always)]
    pub(crate) fn has_children(&self) -> bool {
        self.left.is_some() || self.right.is_some()
    }
}

/// Counters describing the memory used by a [`RadixTree`](crate::RadixTree).
///
/// These numbers are meant for diagnostics only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Stats {
    /// Nodes that are part of the tree, including the root.
    pub nodes: usize,
    /// Nodes that carry a value.
    pub valued: usize,
    /// Node slots reserved by all storage blocks so far.
    pub allocated: usize,
    /// Reclaimed nodes waiting on the free list.
    pub free: usize,
}

/// Pool of nodes. All node lifetimes are owned here; the tree only holds [`NodeId`]s.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    blocks: Vec<Vec<Node<T>>>,
    /// capacity of the last block in `blocks`.
    block_size: usize,
    free: Option<NodeId>,
    growth: Growth,
    stats: Stats,
}

impl<T> Arena<T> {
    pub(crate) fn new(config: Config) -> Self {
        let mut arena = Self {
            blocks: Vec::new(),
            block_size: 0,
            free: None,
            growth: config.growth,
            stats: Stats::default(),
        };
        if config.capacity > 0 {
            arena.push_block(config.capacity);
        }
        arena
    }

    pub(crate) fn stats(&self) -> Stats {
        self.stats
    }

    /// Record that a node without value received one.
    #[inline(always)]
    pub(crate) fn add_valued(&mut self) {
        self.stats.valued += 1;
    }

    /// Record that a node lost its value while staying in the tree.
    #[inline(always)]
    pub(crate) fn sub_valued(&mut self) {
        self.stats.valued -= 1;
    }

    /// Hand out an empty node, preferring the free list over fresh slots.
    pub(crate) fn allocate(&mut self) -> NodeId {
        self.stats.nodes += 1;
        if let Some(id) = self.free {
            self.free = self[id].right.take();
            self.stats.free -= 1;
            return id;
        }
        let full = self
            .blocks
            .last()
            .map_or(true, |block| block.len() >= self.block_size);
        if full {
            let size = self.growth.next_block(self.block_size);
            self.push_block(size);
        }
        let block = self.blocks.len() - 1;
        let nodes = &mut self.blocks[block];
        let slot = nodes.len();
        nodes.push(Node::empty());
        NodeId {
            block: block as u32,
            slot: slot as u32,
        }
    }

    /// Clear a node and put it on the free list. The value it carried is returned. Ancestors
    /// and descendants are not touched, the caller must already have unlinked the node.
    pub(crate) fn release(&mut self, id: NodeId) -> Option<T> {
        let next = self.free.replace(id);
        let node = &mut self[id];
        let value = node.value.take();
        node.left = None;
        node.parent = None;
        node.right = next;
        self.stats.nodes -= 1;
        self.stats.free += 1;
        if value.is_some() {
            self.stats.valued -= 1;
        }
        value
    }

    fn push_block(&mut self, size: usize) {
        debug!(
            "growing node arena by a block of {} slots ({} allocated so far)",
            size, self.stats.allocated
        );
        self.blocks.push(Vec::with_capacity(size));
        self.block_size = size;
        self.stats.allocated += size;
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.blocks[id.block as usize][id.slot as usize]
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.blocks[id.block as usize][id.slot as usize]
    }
}
