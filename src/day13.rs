use std::collections::HashSet;

use anyhow::Context;
use joinery::JoinableIterator;
use nom::{
    branch::alt,
    character::complete::{char, digit1, line_ending, multispace0},
    sequence::pair,
    IResult, Parser,
};
use nom_supreme::{
    error::ErrorTree,
    final_parser::{final_parser, Location},
    multi::collect_separated_terminated,
    tag::complete::tag,
    ParserExt,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Dot {
    x: i32,
    y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fold {
    X(i32),
    Y(i32),
}

impl Dot {
    /// Reflect the dot across the fold line if it lies beyond it. Dots on
    /// the near side (and on the line itself) are unchanged.
    fn folded(self, fold: Fold) -> Self {
        match fold {
            Fold::X(edge) if self.x > edge => Dot {
                x: 2 * edge - self.x,
                ..self
            },
            Fold::Y(edge) if self.y > edge => Dot {
                y: 2 * edge - self.y,
                ..self
            },
            _ => self,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct Page {
    dots: HashSet<Dot>,
}

impl Page {
    fn apply_fold(&mut self, fold: Fold) {
        self.dots = self.dots.drain().map(|dot| dot.folded(fold)).collect();
    }

    fn render(&self) -> anyhow::Result<String> {
        let width = self.dots.iter().map(|dot| dot.x).max().context("no dots")?;
        let height = self.dots.iter().map(|dot| dot.y).max().context("no dots")?;

        Ok((0..=height)
            .map(|y| {
                (0..=width)
                    .map(move |x| match self.dots.contains(&Dot { x, y }) {
                        true => '#',
                        false => ' ',
                    })
                    .join_concat()
            })
            .join_with('\n')
            .to_string())
    }
}

impl Extend<Dot> for Page {
    fn extend<T: IntoIterator<Item = Dot>>(&mut self, iter: T) {
        self.dots.extend(iter)
    }
}

fn parse_dot(input: &str) -> IResult<&str, Dot, ErrorTree<&str>> {
    digit1
        .parse_from_str()
        .separated_array(char(','))
        .map(|[x, y]| Dot { x, y })
        .context("dot")
        .parse(input)
}

fn parse_fold(input: &str) -> IResult<&str, Fold, ErrorTree<&str>> {
    alt((
        digit1.parse_from_str().preceded_by(tag("x=")).map(Fold::X),
        digit1.parse_from_str().preceded_by(tag("y=")).map(Fold::Y),
    ))
    .preceded_by(tag("fold along "))
    .context("fold instruction")
    .parse(input)
}

fn parse_problem(input: &str) -> IResult<&str, (Page, Vec<Fold>), ErrorTree<&str>> {
    collect_separated_terminated(parse_dot, line_ending, pair(line_ending, line_ending))
        .context("dots")
        .and(
            collect_separated_terminated(parse_fold, line_ending, multispace0.all_consuming())
                .context("fold list"),
        )
        .parse(input)
}

fn final_parse_problem(input: &str) -> Result<(Page, Vec<Fold>), ErrorTree<Location>> {
    final_parser(parse_problem)(input)
}

pub fn part1(input: &str) -> anyhow::Result<usize> {
    let (mut page, folds) = final_parse_problem(input).context("failed to parse instructions")?;

    let &first = folds.first().context("no fold instructions")?;
    page.apply_fold(first);

    Ok(page.dots.len())
}

pub fn part2(input: &str) -> anyhow::Result<String> {
    let (mut page, folds) = final_parse_problem(input).context("failed to parse instructions")?;

    for fold in folds {
        page.apply_fold(fold);
    }

    page.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
6,10
0,14
9,10
0,3
10,4
4,11
6,0
6,12
4,1
0,13
10,12
3,4
3,0
8,4
1,10
2,14
8,10
9,0

fold along y=7
fold along x=5
";

    #[test]
    fn sample_part1() {
        assert_eq!(part1(SAMPLE).unwrap(), 17);
    }

    #[test]
    fn sample_part2() {
        let expected = "\
#####
#   #
#   #
#   #
#####";

        assert_eq!(part2(SAMPLE).unwrap(), expected);
    }

    #[test]
    fn fold_reflects_only_far_side() {
        assert_eq!(Dot { x: 3, y: 10 }.folded(Fold::Y(7)), Dot { x: 3, y: 4 });
        assert_eq!(Dot { x: 3, y: 4 }.folded(Fold::Y(7)), Dot { x: 3, y: 4 });
    }
}
