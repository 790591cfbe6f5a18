use block_pathfinding::examiner::walking::WalkingExaminer;
use block_pathfinding::{AStar, Coordinate, HeapNodeContainer};

// In this example a path is found over hilly terrain. The start sits on a plateau one block
// high, followed by a dip, a wall three blocks high, a single step and a plateau two blocks high
// holding the end. The agent steps down into the dip, walks around the wall since it can only
// climb one block at a time, and takes the step to reach the end.
fn main() {
    let terrain = |c: Coordinate| {
        let ground = match c.x {
            0..=2 => 1,
            5..=6 if c.z.abs() <= 2 => 3,
            8 => 1,
            9..=11 => 2,
            _ => 0,
        };
        c.y <= ground
    };
    let start = Coordinate::new(1, 1, 0);
    let end = Coordinate::new(10, 2, 0);
    let astar = AStar::new(WalkingExaminer::new(terrain, end));
    let result = astar
        .search(start, end, &mut HeapNodeContainer::new())
        .unwrap();
    println!("Search {} after {} iterations", result.status(), result.iterations());
    for p in result {
        println!("{}", p);
    }
}
