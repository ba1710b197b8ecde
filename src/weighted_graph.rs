//! Single-source shortest distances on a small explicit graph, stored as a mapping from each node
//! to its outgoing neighbours and edge weights. Independent of the grid search; useful for
//! comparing routes on hand-built graphs.
use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use petgraph::algo::dijkstra;
use petgraph::graphmap::{DiGraphMap, NodeTrait};
use petgraph::visit::EdgeRef;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

#[derive(Clone, Debug)]
pub struct WeightedGraph<N> {
    adjacency: FxIndexMap<N, FxIndexMap<N, u32>>,
}

impl<N: NodeTrait> Default for WeightedGraph<N> {
    fn default() -> WeightedGraph<N> {
        WeightedGraph {
            adjacency: FxIndexMap::default(),
        }
    }
}

impl<N: NodeTrait> WeightedGraph<N> {
    pub fn new() -> WeightedGraph<N> {
        WeightedGraph::default()
    }

    /// Builds a graph from `(node, [(neighbour, weight), ..])` entries.
    pub fn from_adjacency<I, J>(adjacency: I) -> WeightedGraph<N>
    where
        I: IntoIterator<Item = (N, J)>,
        J: IntoIterator<Item = (N, u32)>,
    {
        let mut graph = WeightedGraph::new();
        for (from, neighbours) in adjacency {
            graph.add_node(from);
            for (to, weight) in neighbours {
                graph.add_edge(from, to, weight);
            }
        }
        graph
    }

    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Adds or replaces the directed edge `from -> to`.
    pub fn add_edge(&mut self, from: N, to: N, weight: u32) {
        self.add_node(to);
        self.adjacency.entry(from).or_default().insert(to, weight);
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    pub fn neighbours(&self, node: &N) -> Option<&FxIndexMap<N, u32>> {
        self.adjacency.get(node)
    }

    fn to_graph_map(&self) -> DiGraphMap<N, u32> {
        let mut graph = DiGraphMap::with_capacity(self.adjacency.len(), 0);
        for (&from, neighbours) in &self.adjacency {
            graph.add_node(from);
            for (&to, &weight) in neighbours {
                graph.add_edge(from, to, weight);
            }
        }
        graph
    }

    /// Distance from `source` to every node in insertion order; [None] marks unreachable nodes.
    /// A `source` that is not part of the graph only reaches itself.
    pub fn shortest_distances(&self, source: N) -> FxIndexMap<N, Option<u32>> {
        let mut graph = self.to_graph_map();
        graph.add_node(source);
        let distances = dijkstra(&graph, source, None, |e| *e.weight());
        let mut result: FxIndexMap<N, Option<u32>> = self
            .adjacency
            .keys()
            .map(|node| (*node, distances.get(node).copied()))
            .collect();
        result.entry(source).or_insert(Some(0));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WeightedGraph<char> {
        WeightedGraph::from_adjacency([
            ('s', vec![('u', 10), ('x', 5)]),
            ('u', vec![('v', 1), ('x', 2)]),
            ('v', vec![('y', 4)]),
            ('x', vec![('u', 3), ('v', 9), ('y', 2)]),
            ('y', vec![('s', 7), ('v', 6)]),
        ])
    }

    #[test]
    fn distances_from_source() {
        let distances = sample().shortest_distances('s');
        let expected = [('s', 0), ('u', 8), ('v', 9), ('x', 5), ('y', 7)];
        for (node, d) in expected {
            assert_eq!(distances[&node], Some(d), "distance to {}", node);
        }
    }

    #[test]
    fn unreachable_nodes_are_none() {
        let mut graph = sample();
        graph.add_node('z');
        graph.add_edge('z', 's', 1);
        let distances = graph.shortest_distances('v');
        assert_eq!(distances[&'z'], None);
        assert_eq!(distances[&'v'], Some(0));
        assert_eq!(distances[&'s'], Some(11));
    }

    #[test]
    fn unknown_source_reaches_only_itself() {
        let distances = sample().shortest_distances('q');
        assert_eq!(distances[&'q'], Some(0));
        assert!(distances
            .iter()
            .filter(|(node, _)| **node != 'q')
            .all(|(_, d)| d.is_none()));
    }

    #[test]
    fn edges_are_replaced() {
        let mut graph = sample();
        graph.add_edge('s', 'u', 1);
        assert_eq!(graph.neighbours(&'s').map(|n| n[&'u']), Some(1));
        assert_eq!(graph.shortest_distances('s')[&'u'], Some(1));
        assert_eq!(graph.nodes().count(), 5);
    }
}
