//! Reference sample grids with their known answers.
//!
//! - [`PATROL_SAMPLE`]: 10x10 patrol grid with 41 visited cells, 6 loop-inducing obstructions.
//! - [`TRAIL_SAMPLE`]: 8x8 height map with total score 36, total rating 81.
//! - [`GARDEN_SAMPLE`]: 10x10 garden with fence price 1930, bulk price 1206.

use gridwalk_space::Grid;

pub const PATROL_SAMPLE: &str = "\
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

pub const PATROL_VISITED: usize = 41;
pub const PATROL_LOOP_OBSTRUCTIONS: usize = 6;

pub const TRAIL_SAMPLE: &str = "\
89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732
";

pub const TRAIL_TOTAL_SCORE: usize = 36;
pub const TRAIL_TOTAL_RATING: u64 = 81;

pub const GARDEN_SAMPLE: &str = "\
RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE
";

pub const GARDEN_FENCE_PRICE: u64 = 1930;
pub const GARDEN_BULK_PRICE: u64 = 1206;

/// Parse one of the fixtures above.
pub fn grid(text: &str) -> Grid {
    Grid::parse(text).expect("fixture grids are rectangular")
}
