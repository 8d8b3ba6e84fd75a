use anyhow::{bail, Context};
use itertools::Itertools;

use crate::library::StrExt;

/// Parse the diagnostic report into numeric values plus the bit width of the
/// report, taken from the first line. Ragged lines are a parse error.
fn parse_report(input: &str) -> anyhow::Result<(Vec<u32>, usize)> {
    let lines = input.lines().collect_vec();
    let width = lines.first().context("empty diagnostic report")?.len();

    if lines.iter().any(|line| line.len() != width) {
        bail!("inconsistent diagnostic line length");
    }

    if width > 31 {
        bail!("diagnostic width {} is too large", width);
    }

    let values = lines
        .iter()
        .map(|line| line.parse_radix(2))
        .try_collect()
        .context("failed to parse binary number")?;

    Ok((values, width))
}

fn count_ones(values: &[u32], offset: usize) -> usize {
    values.iter().filter(|&&value| value >> offset & 1 == 1).count()
}

pub fn part1(input: &str) -> anyhow::Result<u32> {
    let (values, width) = parse_report(input)?;

    let gamma = (0..width).fold(0u32, |gamma, offset| {
        // ties go to 1, though the puzzle input never produces one here
        match 2 * count_ones(&values, offset) >= values.len() {
            true => gamma | 1 << offset,
            false => gamma,
        }
    });

    let epsilon = !gamma & ((1 << width) - 1);

    Ok(gamma * epsilon)
}

/// Repeatedly partition the values on each bit, most significant first,
/// keeping the half chosen by `keep_ones`, until one value survives.
fn filter_rating(
    mut values: Vec<u32>,
    width: usize,
    keep_ones: impl Fn(usize, usize) -> bool,
) -> Option<u32> {
    for offset in (0..width).rev() {
        if values.len() <= 1 {
            break;
        }

        let ones = count_ones(&values, offset);
        let zeroes = values.len() - ones;
        let keep = keep_ones(zeroes, ones);

        values.retain(|&value| (value >> offset & 1 == 1) == keep);
    }

    match values.as_slice() {
        &[value] => Some(value),
        _ => None,
    }
}

pub fn part2(input: &str) -> anyhow::Result<u32> {
    let (values, width) = parse_report(input)?;

    let oxygen = filter_rating(values.clone(), width, |zeroes, ones| ones >= zeroes)
        .context("no oxygen generator rating found")?;

    let co2 = filter_rating(values, width, |zeroes, ones| ones < zeroes)
        .context("no co2 scrubber rating found")?;

    Ok(oxygen * co2)
}
