//! Module for testing using fuzzing (quickcheck)
#![allow(clippy::type_complexity)]

use std::collections::{BTreeSet, HashMap};
use std::fmt::Debug;
use std::hash::Hash;
use std::net::Ipv4Addr;

use ipnet::{IpNet, Ipv4Net};
use itertools::Itertools;
use num_traits::Zero;
use quickcheck::Arbitrary;

use crate::*;

macro_rules! qc {
    ($name:ident, $f:ident) => {
        #[test]
        fn $name() {
            proptest_runner($f)
        }
    };
}

mod lookups;
mod traversals;

#[derive(Debug, PartialEq, Clone, Copy)]
enum Operation<P, T> {
    Add(P, T),
    Set(P, T),
    Delete(P),
    DeleteRange(P),
}

#[cfg(miri)]
const DEFAULT_NUM_TESTS: usize = 10;
#[cfg(not(miri))]
const DEFAULT_NUM_TESTS: usize = 10000;
const DEFAULT_GEN_SIZE: usize = 100;

fn proptest_runner<A: Arbitrary + Debug + PartialEq, F: Fn(A) -> bool>(f: F) {
    let num_tests: usize = std::env::var("QUICKCHECK_TESTS")
        .ok()
        .and_then(|x| x.parse::<usize>().ok())
        .unwrap_or(DEFAULT_NUM_TESTS);

    let gen_size: usize = std::env::var("QUICKCHECK_GENERATOR_SIZE")
        .ok()
        .and_then(|x| x.parse::<usize>().ok())
        .unwrap_or(DEFAULT_GEN_SIZE);

    let mut gen = quickcheck::Gen::new(gen_size);

    // sample all inputs
    for _ in 0..num_tests {
        let input = A::arbitrary(&mut gen);
        let input_c = input.clone();
        let success = f(input_c);
        if !success {
            shrink_failure(f, input)
        }
    }
}

fn shrink_failure<A: Arbitrary + Debug + PartialEq, F: Fn(A) -> bool>(f: F, input: A) -> ! {
    for i in input.shrink() {
        let i_c = i.clone();
        let success = f(i_c);
        if !success {
            shrink_failure(f, i)
        }
    }
    // if we reach this point, then all shrunken inputs work. Therefore, `inputs` is the minimal
    // input
    panic!(
        "[QUICKCHECK] Test case failed!\n  Minimal input:\n    {:?}",
        input
    );
}

/// Prefix with the host bits cleared, so that equal networks compare equal.
trait ModelPrefix: Prefix + Copy + Eq + Ord + Hash + Debug {
    fn from_repr_len(repr: Self::R, len: u8) -> Self;

    fn net(self) -> IpNet;

    fn contains(&self, other: &Self) -> bool {
        self.prefix_len() <= other.prefix_len()
            && Self::from_repr_len(other.repr(), self.prefix_len()) == *self
    }
}

/// Reference model: a plain map from canonical prefixes to values.
type ModelOf<P> = HashMap<P, i32>;
type Model = ModelOf<TestPrefix>;

/// Apply `ops` to both a tree and the model. Returns `None` as soon as the tree reports a
/// different outcome than the model predicts.
fn apply<P: ModelPrefix>(
    ops: Vec<Operation<P, i32>>,
) -> Option<(RadixTree<i32>, ModelOf<P>)> {
    let mut tree = RadixTree::new();
    let mut model = ModelOf::new();
    for op in ops {
        let ok = match op {
            Operation::Add(p, t) => {
                let want = if model.contains_key(&p) {
                    Err(Error::NodeBusy)
                } else {
                    model.insert(p, t);
                    Ok(())
                };
                tree.add(&p, t) == want
            }
            Operation::Set(p, t) => tree.set(&p, t) == Ok(model.insert(p, t)),
            Operation::Delete(p) => tree.delete(&p) == model.remove(&p).ok_or(Error::NotFound),
            Operation::DeleteRange(p) => {
                let before = model.len();
                model.retain(|k, _| !p.contains(k));
                let removed = before - model.len();
                // a node below the root only exists while some value lives in its subtree
                let want = if removed == 0 && p.prefix_len() > 0 {
                    Err(Error::NotFound)
                } else {
                    Ok(removed)
                };
                tree.delete_whole_range(&p) == want
            }
        };
        if !ok {
            return None;
        }
    }
    Some((tree, model))
}

/// Model entries in the order the tree enumerates them.
fn sorted<P: ModelPrefix>(model: &ModelOf<P>) -> Vec<(IpNet, i32)> {
    model
        .iter()
        .map(|(p, t)| (*p, *t))
        .sorted()
        .map(|(p, t)| (p.net(), t))
        .collect()
}

/// Model values of all prefixes covering `query`, least specific first.
fn covering<P: ModelPrefix>(model: &ModelOf<P>, query: &P) -> Vec<i32> {
    model
        .iter()
        .filter(|(p, _)| p.contains(query))
        .sorted_by_key(|(p, _)| p.prefix_len())
        .map(|(_, t)| *t)
        .collect()
}

/// Number of nodes a tree holding exactly the prefixes of `model` must consist of.
fn expected_nodes<P: ModelPrefix>(model: &ModelOf<P>) -> usize {
    let mut nodes = BTreeSet::new();
    nodes.insert(P::from_repr_len(Zero::zero(), 0));
    for p in model.keys() {
        for len in 0..=p.prefix_len() {
            nodes.insert(P::from_repr_len(p.repr(), len));
        }
    }
    nodes.len()
}

impl<P: Arbitrary, T: Arbitrary> Arbitrary for Operation<P, T> {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let p = P::arbitrary(g);
        match g.choose(&[0, 0, 0, 0, 1, 1, 1, 2, 2, 3]).copied().unwrap_or_default() {
            0 => Self::Add(p, T::arbitrary(g)),
            1 => Self::Set(p, T::arbitrary(g)),
            2 => Self::Delete(p),
            _ => Self::DeleteRange(p),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Operation::Add(p, t) => {
                let t = t.clone();
                Box::new(
                    p.clone()
                        .shrink()
                        .map(move |p| Operation::Add(p, t.clone())),
                )
            }
            Operation::Set(p, t) => {
                let t = t.clone();
                Box::new(
                    p.clone()
                        .shrink()
                        .map(move |p| Operation::Set(p, t.clone())),
                )
            }
            Operation::Delete(p) => Box::new(p.clone().shrink().map(Operation::Delete)),
            Operation::DeleteRange(p) => Box::new(p.clone().shrink().map(Operation::DeleteRange)),
        }
    }
}

/// IPv4 prefix, the key of most model tests.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
struct TestPrefix(u32, u8);

impl ModelPrefix for TestPrefix {
    fn from_repr_len(repr: u32, len: u8) -> Self {
        let mask = u32::MAX.checked_shl(32 - u32::from(len)).unwrap_or(0);
        Self(repr & mask, len)
    }

    fn net(self) -> IpNet {
        IpNet::V4(Ipv4Net::new(Ipv4Addr::from(self.0), self.1).unwrap())
    }
}

impl Debug for TestPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0b{:032b}/{}", self.0, self.1)
    }
}

impl Arbitrary for TestPrefix {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        #[rustfmt::skip]
        let len: u8 = *g
            .choose(&[
                0,
                1, 1,
                2, 2, 2,
                3, 3, 3, 3,
                4, 4, 4, 4, 4,
                5, 5, 5, 5, 5, 5,
                6, 6, 6, 6, 6, 6, 6,
                7, 7, 7, 7, 7, 7, 7, 7,
                8, 8, 8, 8, 8, 8, 8, 8, 8,
                9, 9, 9, 9, 9, 9, 9, 9, 9, 9,
                32, 32,
            ])
            .unwrap();
        let x = u32::arbitrary(g);
        Self::from_repr_len(x, len)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        if self.1 == 0 {
            quickcheck::empty_shrinker()
        } else {
            let len = self.1 - 1;
            let x = Self::from_repr_len(self.0, len);
            quickcheck::single_shrinker(x)
        }
    }
}

impl Prefix for TestPrefix {
    type R = u32;

    fn repr(&self) -> u32 {
        self.0
    }

    fn prefix_len(&self) -> u8 {
        self.1
    }
}
