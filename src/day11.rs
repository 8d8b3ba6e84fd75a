use std::iter;

use anyhow::Context;
use gridly::prelude::*;
use gridly_grids::VecGrid;
use itertools::Itertools;

const MAX_ENERGY: i64 = 9;

struct OctopusGrid {
    grid: VecGrid<i64>,
}

impl OctopusGrid {
    /// Advance the grid by one step and return the number of flashes.
    ///
    /// Every cell gains one energy; cells pushed past `MAX_ENERGY` reset to
    /// zero immediately and queue a flash. The cascade loop then drains the
    /// queue, bumping all eight neighbors of each flash. A cell sitting at
    /// zero during the cascade has already flashed this step and absorbs
    /// further bumps without effect, so no cell flashes twice per step.
    fn take_step(&mut self) -> i64 {
        let mut pending: Vec<Location> = Vec::new();
        let mut flashes = 0;

        for row in self.grid.row_range() {
            for column in self.grid.column_range() {
                let cell = self.grid.get_mut(row + column).unwrap();
                *cell += 1;
                if *cell > MAX_ENERGY {
                    *cell = 0;
                    flashes += 1;
                    pending.push(row + column);
                }
            }
        }

        while let Some(flash_loc) = pending.pop() {
            for direction in TOUCHING_ADJACENCIES {
                let neighbor_loc = flash_loc + direction;
                if let Ok(neighbor) = self.grid.get_mut(neighbor_loc) {
                    if *neighbor != 0 {
                        *neighbor += 1;
                        if *neighbor > MAX_ENERGY {
                            *neighbor = 0;
                            flashes += 1;
                            pending.push(neighbor_loc);
                        }
                    }
                }
            }
        }

        flashes
    }

    /// True when every octopus is at zero energy, which only happens right
    /// after a fully synchronized flash.
    fn is_synchronized(&self) -> bool {
        self.grid
            .rows()
            .iter()
            .flat_map(|row| row.iter())
            .all(|&cell| cell == 0)
    }
}

fn parse_grid(input: &str) -> anyhow::Result<OctopusGrid> {
    let rows: Vec<Vec<i64>> = input
        .lines()
        .map(|line| {
            line.chars()
                .map(|c| c.to_digit(10).context("invalid energy level digit"))
                .map_ok(|digit| digit as i64)
                .try_collect()
        })
        .try_collect()?;

    let grid = VecGrid::new_from_rows(rows).context("inconsistent row length")?;

    Ok(OctopusGrid { grid })
}

fn total_flashes(grid: &mut OctopusGrid, steps: usize) -> i64 {
    (0..steps).map(|_| grid.take_step()).sum()
}

pub fn part1(input: &str) -> anyhow::Result<i64> {
    let mut grid = parse_grid(input)?;

    Ok(total_flashes(&mut grid, 100))
}

pub fn part2(input: &str) -> anyhow::Result<usize> {
    let mut grid = parse_grid(input)?;

    iter::repeat_with(|| {
        grid.take_step();
        grid.is_synchronized()
    })
    .position(|synchronized| synchronized)
    .map(|step| step + 1)
    .context("infinite iterator wasn't infinite :(")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
5483143223
2745854711
5264556173
6141336146
6357385478
4167524645
2176841721
6882881134
4846848554
5283751526
";

    fn levels(grid: &OctopusGrid) -> Vec<i64> {
        grid.grid
            .rows()
            .iter()
            .flat_map(|row| row.iter().copied())
            .collect()
    }

    #[test]
    fn sample_part1() {
        assert_eq!(part1(SAMPLE).unwrap(), 1656);
    }

    #[test]
    fn sample_part2() {
        assert_eq!(part2(SAMPLE).unwrap(), 195);
    }

    #[test]
    fn all_nines_flash_exactly_once() {
        let mut grid = parse_grid("999\n999\n999").unwrap();

        // Every cell flashes once, including edges and corners, and none is
        // re-triggered by its flashing neighbors.
        assert_eq!(grid.take_step(), 9);
        assert_eq!(levels(&grid), vec![0; 9]);
        assert!(grid.is_synchronized());
    }

    #[test]
    fn lone_charged_cell_does_not_flash() {
        let mut grid = parse_grid("000\n080\n000").unwrap();

        assert_eq!(grid.take_step(), 0);
        assert_eq!(levels(&grid), vec![1, 1, 1, 1, 9, 1, 1, 1, 1]);
    }

    #[test]
    fn levels_stay_in_range_after_a_step() {
        let mut grid = parse_grid(SAMPLE).unwrap();
        grid.take_step();

        assert!(levels(&grid).iter().all(|&cell| (0..=9).contains(&cell)));
    }

    #[test]
    fn step_is_deterministic() {
        let mut a = parse_grid(SAMPLE).unwrap();
        let mut b = parse_grid(SAMPLE).unwrap();

        for _ in 0..20 {
            assert_eq!(a.take_step(), b.take_step());
            assert_eq!(levels(&a), levels(&b));
        }
    }

    #[test]
    fn flash_totals_are_monotonic() {
        let mut short = parse_grid(SAMPLE).unwrap();
        let mut long = parse_grid(SAMPLE).unwrap();

        assert!(total_flashes(&mut short, 10) <= total_flashes(&mut long, 20));
    }

    #[test]
    fn all_zero_grid_synchronizes_at_step_ten() {
        // An all-zero 2x2 grid charges uniformly; nothing flashes until
        // every cell crosses the threshold together on the tenth step, so
        // the answer is 10, not 0.
        assert_eq!(part2("00\n00").unwrap(), 10);
    }
}
