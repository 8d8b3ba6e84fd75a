use anyhow::Context;
use itertools::Itertools;

use crate::library::parse_input_iter;

fn parse_depths(input: &str) -> anyhow::Result<Vec<i64>> {
    parse_input_iter(input.split_whitespace()).context("failed to parse depth measurement")
}

pub fn part1(input: &str) -> anyhow::Result<usize> {
    let depths = parse_depths(input)?;

    Ok(depths
        .iter()
        .tuple_windows()
        .filter(|(a, b)| a < b)
        .count())
}

pub fn part2(input: &str) -> anyhow::Result<usize> {
    let depths = parse_depths(input)?;

    Ok(depths
        .iter()
        .tuple_windows()
        .map(|(a, b, c)| a + b + c)
        .tuple_windows()
        .filter(|(a, b)| a < b)
        .count())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "199 200 208 210 200 207 240 269 260 263";

    #[test]
    fn sample_part1() {
        assert_eq!(part1(SAMPLE).unwrap(), 7);
    }

    #[test]
    fn sample_part2() {
        assert_eq!(part2(SAMPLE).unwrap(), 5);
    }

    #[test]
    fn bad_measurement() {
        assert!(part1("199 abc 208").is_err());
    }
}
