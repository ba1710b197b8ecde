use barrier_pathfinding::{AstarSolver, GridBounds, GridGraph, GridSolver, Point};

// The object sits inside a closed ring of barrier cells, so the route has to pay for crossing
// exactly one of them. Also shows how to route to the nearest of several detections.

fn ring(center: Point) -> Vec<Point> {
    (-1..=1)
        .flat_map(|dx| (-1..=1).map(move |dy| (dx, dy)))
        .filter(|&(dx, dy)| (dx, dy) != (0, 0))
        .map(|(dx, dy)| Point::new(center.x + dx, center.y + dy))
        .collect()
}

fn main() {
    let enclosed = Point::new(4, 4);
    let graph = GridGraph::new(GridBounds::default(), ring(enclosed));
    println!("{}", graph);
    let solver = AstarSolver::new();
    let start = Point::new(0, 0);

    match solver.search(&graph, start, enclosed) {
        Ok(route) => println!("To {:?}: {:?} (cost {})", enclosed, route.path, route.cost),
        Err(err) => println!("{}", err),
    }

    let detections = [enclosed, Point::new(7, 1)];
    match solver.search_multiple_goals(&graph, start, &detections) {
        Ok((goal, route)) => println!(
            "Nearest of {:?} is {:?} (cost {})",
            detections, goal, route.cost
        ),
        Err(err) => println!("{}", err),
    }
}
