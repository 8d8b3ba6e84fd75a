use std::collections::HashSet;

use anyhow::Context;
use gridly::prelude::*;
use gridly_grids::VecGrid;
use itertools::Itertools;

const MAX_HEIGHT: i32 = 9;

fn parse_grid(input: &str) -> anyhow::Result<VecGrid<i32>> {
    let rows: Vec<Vec<i32>> = input
        .lines()
        .map(|line| {
            line.chars()
                .map(|c| c.to_digit(10).context("invalid height digit"))
                .map_ok(|digit| digit as i32)
                .try_collect()
        })
        .try_collect()?;

    VecGrid::new_from_rows(rows).context("inconsistent row length")
}

fn is_low_point(grid: &VecGrid<i32>, location: Location, height: i32) -> bool {
    EACH_DIRECTION
        .iter()
        .map(|&direction| location + direction)
        .filter_map(|neighbor| grid.get(neighbor).ok())
        .all(|&neighbor_height| neighbor_height > height)
}

pub fn part1(input: &str) -> anyhow::Result<i32> {
    let grid = parse_grid(input)?;

    Ok(grid
        .rows()
        .iter()
        .flat_map(|row| row.iter_with_locations())
        .filter(|&(location, &height)| is_low_point(&grid, location, height))
        .map(|(_, &height)| height + 1)
        .sum())
}

/// Flood-fill the basin containing `start` and return its size. Basins are
/// bounded by height-9 cells and the grid edge; `visited` carries over
/// between fills so each cell is counted in exactly one basin.
fn basin_size(grid: &VecGrid<i32>, start: Location, visited: &mut HashSet<Location>) -> usize {
    let mut queue = vec![start];
    let mut size = 0;

    while let Some(location) = queue.pop() {
        size += 1;

        for &direction in &EACH_DIRECTION {
            let neighbor = location + direction;
            if let Ok(&height) = grid.get(neighbor) {
                if height < MAX_HEIGHT && visited.insert(neighbor) {
                    queue.push(neighbor);
                }
            }
        }
    }

    size
}

pub fn part2(input: &str) -> anyhow::Result<usize> {
    let grid = parse_grid(input)?;

    let mut visited: HashSet<Location> = HashSet::new();
    let mut sizes = Vec::new();

    for (location, &height) in grid.rows().iter().flat_map(|row| row.iter_with_locations()) {
        if height < MAX_HEIGHT && visited.insert(location) {
            sizes.push(basin_size(&grid, location, &mut visited));
        }
    }

    sizes.sort_unstable_by(|a, b| b.cmp(a));

    Ok(sizes.iter().take(3).product())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
2199943210
3987894921
9856789892
8767896789
9899965678
";

    #[test]
    fn sample_part1() {
        assert_eq!(part1(SAMPLE).unwrap(), 15);
    }

    #[test]
    fn sample_part2() {
        assert_eq!(part2(SAMPLE).unwrap(), 1134);
    }

    #[test]
    fn ragged_grid() {
        assert!(part1("219\n39\n").is_err());
    }
}
