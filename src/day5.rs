use anyhow::Context;
use nom::{
    character::complete::{char, digit1, multispace0, multispace1, space0},
    IResult, Parser,
};
use nom_supreme::{
    error::ErrorTree,
    final_parser::{final_parser, Location},
    multi::collect_separated_terminated,
    tag::complete::tag,
    ParserExt,
};

use crate::library::Counter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segment {
    a: Point,
    b: Point,
}

impl Segment {
    fn is_axis_aligned(&self) -> bool {
        self.a.x == self.b.x || self.a.y == self.b.y
    }

    /// Every point covered by the segment, walking one unit step at a time.
    /// Segments are horizontal, vertical, or 45° diagonal, so a signum step
    /// per axis lands exactly on each covered point.
    fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let dx = (self.b.x - self.a.x).signum();
        let dy = (self.b.y - self.a.y).signum();
        let length = (self.b.x - self.a.x).abs().max((self.b.y - self.a.y).abs());

        (0..=length).map(move |step| Point {
            x: self.a.x + dx * step,
            y: self.a.y + dy * step,
        })
    }
}

fn parse_point(input: &str) -> IResult<&str, Point, ErrorTree<&str>> {
    digit1
        .parse_from_str()
        .separated_array(char(','))
        .map(|[x, y]| Point { x, y })
        .context("point")
        .parse(input)
}

fn parse_segment(input: &str) -> IResult<&str, Segment, ErrorTree<&str>> {
    parse_point
        .separated_array(tag("->").delimited_by(space0))
        .map(|[a, b]| Segment { a, b })
        .context("segment")
        .parse(input)
}

fn parse_all_segments(input: &str) -> Result<Vec<Segment>, ErrorTree<Location>> {
    final_parser(collect_separated_terminated(
        parse_segment,
        multispace1,
        multispace0.all_consuming(),
    ))(input)
}

fn solve(input: &str, include_diagonals: bool) -> anyhow::Result<usize> {
    let segments = parse_all_segments(input).context("failed to parse vent segments")?;

    let coverage: Counter<Point> = segments
        .iter()
        .filter(|segment| include_diagonals || segment.is_axis_aligned())
        .flat_map(|segment| segment.points())
        .collect();

    Ok(coverage
        .iter_counts()
        .filter(|&(_, count)| count >= 2)
        .count())
}

pub fn part1(input: &str) -> anyhow::Result<usize> {
    solve(input, false)
}

pub fn part2(input: &str) -> anyhow::Result<usize> {
    solve(input, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
0,9 -> 5,9
8,0 -> 0,8
9,4 -> 3,4
2,2 -> 2,1
7,0 -> 7,4
6,4 -> 2,0
0,9 -> 2,9
3,4 -> 1,4
0,0 -> 8,8
5,5 -> 8,2
";

    #[test]
    fn sample_part1() {
        assert_eq!(part1(SAMPLE).unwrap(), 5);
    }

    #[test]
    fn sample_part2() {
        assert_eq!(part2(SAMPLE).unwrap(), 12);
    }

    #[test]
    fn segment_points_walk_backwards() {
        let segment = Segment {
            a: Point { x: 9, y: 7 },
            b: Point { x: 7, y: 9 },
        };

        let points: Vec<Point> = segment.points().collect();
        assert_eq!(
            points,
            [
                Point { x: 9, y: 7 },
                Point { x: 8, y: 8 },
                Point { x: 7, y: 9 },
            ]
        );
    }
}
