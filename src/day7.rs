use anyhow::{bail, Context};
use itertools::{Itertools, MinMaxResult};

use crate::library::parse_input_iter;

/// Try every alignment position between the leftmost and rightmost crab and
/// keep the cheapest total. The inputs are small enough that the quadratic
/// scan finishes instantly.
fn solve(input: &str, cost: impl Fn(i32) -> i32) -> anyhow::Result<i32> {
    let crabs: Vec<i32> =
        parse_input_iter(input.split(',')).context("failed to parse crab position")?;

    let (min, max) = match crabs.iter().copied().minmax() {
        MinMaxResult::NoElements => bail!("there are no crabs"),
        MinMaxResult::OneElement(position) => (position, position),
        MinMaxResult::MinMax(min, max) => (min, max),
    };

    (min..=max)
        .map(|alignment| {
            crabs
                .iter()
                .map(|&crab| cost((crab - alignment).abs()))
                .sum()
        })
        .min()
        .context("there are no candidate alignments")
}

pub fn part1(input: &str) -> anyhow::Result<i32> {
    solve(input, |distance| distance)
}

pub fn part2(input: &str) -> anyhow::Result<i32> {
    solve(input, |distance| distance * (distance + 1) / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "16,1,2,0,4,2,7,1,2,14";

    #[test]
    fn sample_part1() {
        assert_eq!(part1(SAMPLE).unwrap(), 37);
    }

    #[test]
    fn sample_part2() {
        assert_eq!(part2(SAMPLE).unwrap(), 168);
    }

    #[test]
    fn lone_crab_is_already_aligned() {
        assert_eq!(part2("7").unwrap(), 0);
    }
}
