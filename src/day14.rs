use std::collections::HashMap;

use anyhow::{bail, Context};
use itertools::{Itertools, MinMaxResult};
use nom::{
    character::complete::{line_ending, multispace0, multispace1, satisfy},
    combinator::success,
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

use crate::library::Counter;

type Rules = HashMap<(char, char), char>;

/// A polymer tracked as pair counts. The chain itself grows exponentially,
/// but the number of distinct adjacent pairs stays tiny, so 40 steps stay
/// cheap. The first element is remembered separately: every element is the
/// second of exactly one pair except the head of the chain.
#[derive(Debug, Clone, Default)]
struct Polymer {
    first: Option<char>,
    pairs: Counter<(char, char)>,
}

impl FromIterator<char> for Polymer {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        let mut this = Self::default();
        let mut iter = iter.into_iter();

        let mut prev = match iter.next() {
            Some(element) => element,
            None => return this,
        };

        this.first = Some(prev);

        iter.for_each(|next| {
            this.pairs.add_one((prev, next));
            prev = next;
        });

        this
    }
}

impl Polymer {
    fn apply_rules(self, rules: &Rules) -> anyhow::Result<Self> {
        let mut pairs = Counter::new();

        for (&(a, b), count) in self.pairs.iter_counts() {
            let &insert = rules
                .get(&(a, b))
                .with_context(|| format!("no insertion rule for pair {}{}", a, b))?;

            pairs.add((a, insert), count);
            pairs.add((insert, b), count);
        }

        Ok(Self {
            first: self.first,
            pairs,
        })
    }

    fn element_counts(&self) -> Counter<char> {
        let mut counts = Counter::new();

        for (&(_, second), count) in self.pairs.iter_counts() {
            counts.add(second, count);
        }

        if let Some(first) = self.first {
            counts.add_one(first);
        }

        counts
    }
}

fn parse_element(input: &str) -> IResult<&str, char, ErrorTree<&str>> {
    satisfy(|c: char| c.is_ascii_uppercase()).parse(input)
}

fn parse_template(input: &str) -> IResult<&str, Polymer, ErrorTree<&str>> {
    collect_separated_terminated(parse_element, success(()), line_ending)
        .map(|elements: Vec<char>| elements.into_iter().collect())
        .parse(input)
}

fn parse_rule(input: &str) -> IResult<&str, ((char, char), char), ErrorTree<&str>> {
    pair(parse_element, parse_element)
        .context("pattern")
        .terminated(tag(" -> "))
        .and(parse_element.context("insertion"))
        .parse(input)
}

fn parse_rules(input: &str) -> IResult<&str, Rules, ErrorTree<&str>> {
    collect_separated_terminated(parse_rule, line_ending, multispace0.all_consuming()).parse(input)
}

fn parse_problem(input: &str) -> IResult<&str, (Polymer, Rules), ErrorTree<&str>> {
    parse_template
        .context("template")
        .terminated(multispace1)
        .and(parse_rules.context("rule list"))
        .parse(input)
}

fn final_parse_problem(input: &str) -> Result<(Polymer, Rules), ErrorTree<Location>> {
    final_parser(parse_problem)(input)
}

fn solve(input: &str, steps: usize) -> anyhow::Result<usize> {
    let (polymer, rules) = final_parse_problem(input).context("failed to parse polymer")?;

    let polymer = (0..steps).try_fold(polymer, |polymer, step| {
        polymer
            .apply_rules(&rules)
            .with_context(|| format!("failure at step {}", step + 1))
    })?;

    let minmax = polymer
        .element_counts()
        .iter_counts()
        .map(|(_, count)| count)
        .minmax();

    Ok(match minmax {
        MinMaxResult::NoElements => bail!("the polymer is empty"),
        MinMaxResult::OneElement(_) => 0,
        MinMaxResult::MinMax(min, max) => max - min,
    })
}

pub fn part1(input: &str) -> anyhow::Result<usize> {
    solve(input, 10)
}

pub fn part2(input: &str) -> anyhow::Result<usize> {
    solve(input, 40)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
NNCB

CH -> B
HH -> N
CB -> H
NH -> C
HB -> C
HC -> B
HN -> C
NN -> C
BH -> H
NC -> B
NB -> B
BN -> B
BB -> N
BC -> B
CC -> N
CN -> C
";

    #[test]
    fn template_counts_include_the_head() {
        let polymer: Polymer = "NNCB".chars().collect();

        let mut counts: Vec<(char, usize)> = polymer
            .element_counts()
            .iter_counts()
            .map(|(&element, count)| (element, count))
            .collect();
        counts.sort_unstable();

        assert_eq!(counts, [('B', 1), ('C', 1), ('N', 2)]);
    }

    #[test]
    fn sample_part1() {
        assert_eq!(part1(SAMPLE).unwrap(), 1588);
    }

    #[test]
    fn sample_part2() {
        assert_eq!(part2(SAMPLE).unwrap(), 2188189693529);
    }

    #[test]
    fn missing_rule_is_an_error() {
        assert!(solve("AB\n\nAB -> C\n", 2).is_err());
    }
}
