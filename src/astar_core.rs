//! A generic A* search over any hashable node type. Successors, heuristic and goal test are
//! supplied as closures, so the same loop drives both the grid solvers and the unit tests below.
//!
//! The frontier is a [BinaryHeap] with lazy re-insertion: an improved node is pushed again and
//! the outdated heap entry is skipped when it surfaces. Expanded nodes are closed for good, which
//! is only optimal when the heuristic is consistent.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::warn;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost)
            && self.cost.eq(&other.cost)
            && self.index == other.index
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap: lowest estimated cost first, ties go to the lowest cost so
        // far and then to the node that was discovered first.
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| other.cost.cmp(&self.cost))
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// Per-node bookkeeping. A node present in the map is either open or closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NodeRecord<C> {
    /// Index of the predecessor in the node map, `usize::MAX` for the start.
    pub parent: usize,
    /// Best known cost from the start (g).
    pub cost: C,
    /// `cost` plus the heuristic estimate to the goal (f).
    pub estimated_cost: C,
    pub closed: bool,
}

impl<C: Copy + std::ops::Add<Output = C>> NodeRecord<C> {
    fn open(parent: usize, cost: C, heuristic: C) -> NodeRecord<C> {
        NodeRecord {
            parent,
            cost,
            estimated_cost: cost + heuristic,
            closed: false,
        }
    }
}

/// State of one search invocation. Created fresh for every call and dropped on return.
pub(crate) struct SearchState<N, C> {
    to_see: BinaryHeap<SmallestCostHolder<C>>,
    pub(crate) nodes: FxIndexMap<N, NodeRecord<C>>,
    pub(crate) expansions: usize,
}

impl<N, C> SearchState<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
{
    pub(crate) fn new(start: &N, start_estimate: C) -> SearchState<N, C> {
        let mut nodes = FxIndexMap::default();
        nodes.insert(
            start.clone(),
            NodeRecord {
                parent: usize::MAX,
                cost: Zero::zero(),
                estimated_cost: start_estimate,
                closed: false,
            },
        );
        let mut to_see = BinaryHeap::new();
        to_see.push(SmallestCostHolder {
            estimated_cost: start_estimate,
            cost: Zero::zero(),
            index: 0,
        });
        SearchState {
            to_see,
            nodes,
            expansions: 0,
        }
    }

    fn reverse_path(&self, index: usize) -> Vec<N> {
        let mut i = index;
        let mut path: Vec<N> = std::iter::from_fn(|| {
            self.nodes.get_index(i).map(|(node, record)| {
                i = record.parent;
                node.clone()
            })
        })
        .collect();
        path.reverse();
        path
    }

    pub(crate) fn run<FN, IN, FH, FS>(
        &mut self,
        mut successors: FN,
        mut heuristic: FH,
        mut success: FS,
        max_expansions: Option<usize>,
    ) -> Option<(Vec<N>, C)>
    where
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = (N, C)>,
        FH: FnMut(&N) -> C,
        FS: FnMut(&N) -> bool,
    {
        while let Some(SmallestCostHolder { cost, index, .. }) = self.to_see.pop() {
            let current = match self.nodes.get_index(index) {
                Some((node, record)) if !record.closed && cost <= record.cost => node.clone(),
                // Superseded by a cheaper entry, or already expanded.
                _ => continue,
            };
            if success(&current) {
                return Some((self.reverse_path(index), cost));
            }
            if max_expansions.is_some_and(|limit| self.expansions >= limit) {
                warn!(
                    "Search aborted after {} expansions with {} nodes still queued",
                    self.expansions,
                    self.to_see.len()
                );
                return None;
            }
            if let Some((_, record)) = self.nodes.get_index_mut(index) {
                record.closed = true;
            }
            self.expansions += 1;

            for (successor, move_cost) in successors(&current) {
                let new_cost = cost + move_cost;
                let (n, record) = match self.nodes.entry(successor) {
                    Vacant(e) => {
                        let record = NodeRecord::open(index, new_cost, heuristic(e.key()));
                        let n = e.index();
                        e.insert(record);
                        (n, record)
                    }
                    Occupied(mut e) => {
                        if e.get().closed || new_cost >= e.get().cost {
                            continue;
                        }
                        let record = NodeRecord::open(index, new_cost, heuristic(e.key()));
                        e.insert(record);
                        (e.index(), record)
                    }
                };
                self.to_see.push(SmallestCostHolder {
                    estimated_cost: record.estimated_cost,
                    cost: record.cost,
                    index: n,
                });
            }
        }
        warn!(
            "Frontier exhausted after {} expansions without reaching a goal",
            self.expansions
        );
        None
    }
}

/// Runs A* from `start` until `success` accepts a node, returning the path (start and goal
/// inclusive) with its cost, or [None] if the frontier runs dry or `max_expansions` is hit.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    successors: FN,
    mut heuristic: FH,
    success: FS,
    max_expansions: Option<usize>,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut state = SearchState::new(start, heuristic(start));
    state.run(successors, heuristic, success, max_expansions)
}
