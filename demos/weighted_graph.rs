use barrier_pathfinding::WeightedGraph;

// Shortest distances from 's' on a small directed graph, for comparison with the grid search.

fn main() {
    let graph = WeightedGraph::from_adjacency([
        ('s', vec![('u', 10), ('x', 5)]),
        ('u', vec![('v', 1), ('x', 2)]),
        ('v', vec![('y', 4)]),
        ('x', vec![('u', 3), ('v', 9), ('y', 2)]),
        ('y', vec![('s', 7), ('v', 6)]),
    ]);
    for (node, distance) in graph.shortest_distances('s') {
        match distance {
            Some(d) => println!("{}: {}", node, d),
            None => println!("{}: unreachable", node),
        }
    }
}
