use barrier_pathfinding::{search, GridBounds, GridGraph, Point};

// Routes a boat from the lower-left corner of an 8x8 survey board to a detected object on the
// top edge, around one barrier outline:
//
// ....G...
// ..####..
// ..#..#..
// ..#..#..
// .....#..
// ...###..
// ........
// S.......
//
// The outline is open on the left, but the top row of the outline forces a detour.

fn main() {
    let barrier = [
        (2, 4),
        (2, 5),
        (2, 6),
        (3, 6),
        (4, 6),
        (5, 6),
        (5, 5),
        (5, 4),
        (5, 3),
        (5, 2),
        (4, 2),
        (3, 2),
    ]
    .map(|(x, y)| Point::new(x, y));
    let graph = GridGraph::from_barriers(GridBounds::default(), [barrier]);
    println!("{}", graph);
    let start = Point::new(0, 0);
    let goal = Point::new(4, 7);
    match search(start, goal, &graph) {
        Ok(route) => {
            println!("Route:");
            for p in &route.path {
                println!("{:?}", p);
            }
            println!("Cost: {}", route.cost);
        }
        Err(err) => println!("{}", err),
    }
}
