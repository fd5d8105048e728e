//! implementation of the lookups.

use super::*;
use crate::prefix::{checked_len, Bits, Prefix};
use crate::Error;

impl<T> RadixTree<T> {
    /// Walk from the root along the bits of `prefix` and call `visit` for every node that holds a
    /// value, together with whether that node sits exactly at depth `prefix_len`. The walk ends
    /// at depth `prefix_len` or as soon as a child is missing, whichever comes first.
    fn descend<'a, P, F>(&'a self, prefix: &P, mut visit: F) -> Result<()>
    where
        P: Prefix,
        F: FnMut(&'a T, bool),
    {
        let len = checked_len(prefix)?;
        let key = prefix.repr();
        let mut idx = self.root;
        let mut depth = 0;
        loop {
            let node = &self.arena[idx];
            if let Some(value) = &node.value {
                visit(value, depth == len);
            }
            // checked after the visit, so that a full-width prefix (/32, /128) still reports
            // the terminal node.
            if depth == len {
                break;
            }
            match node.child(key.is_bit_set(depth)) {
                Some(next) => idx = next,
                None => break,
            }
            depth += 1;
        }
        Ok(())
    }

    pub(super) fn best_match<P: Prefix>(&self, prefix: &P) -> Result<Option<&T>> {
        let mut best = None;
        self.descend(prefix, |value, _| best = Some(value))?;
        Ok(best)
    }

    pub(super) fn exact_match<P: Prefix>(&self, prefix: &P) -> Result<&T> {
        let mut exact = None;
        self.descend(prefix, |value, is_exact| {
            if is_exact {
                exact = Some(value)
            }
        })?;
        exact.ok_or(Error::NotFound)
    }

    pub(super) fn all_matches<P: Prefix>(&self, prefix: &P) -> Result<Vec<&T>> {
        let mut all = Vec::new();
        self.descend(prefix, |value, _| all.push(value))?;
        Ok(all)
    }
}
