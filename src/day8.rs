use anyhow::Context;
use nom::{
    bytes::complete::take_while1,
    character::complete::{char, multispace0, multispace1, space1},
    IResult, Parser,
};
use nom_supreme::{
    error::ErrorTree,
    final_parser::{final_parser, Location},
    multi::collect_separated_terminated,
    ParserExt,
};

/// A set of lit display segments, one bit per segment a through g.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
struct SegmentSet(u8);

impl SegmentSet {
    fn from_letters(letters: &str) -> Self {
        Self(
            letters
                .bytes()
                .fold(0, |mask, letter| mask | 1 << (letter - b'a')),
        )
    }

    fn len(self) -> u32 {
        self.0.count_ones()
    }

    fn contains(self, other: SegmentSet) -> bool {
        self.0 & other.0 == other.0
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    patterns: [SegmentSet; 10],
    outputs: [SegmentSet; 4],
}

fn parse_segment_set(input: &str) -> IResult<&str, SegmentSet, ErrorTree<&str>> {
    take_while1(|c: char| ('a'..='g').contains(&c))
        .map(SegmentSet::from_letters)
        .parse(input)
}

fn parse_patterns(input: &str) -> IResult<&str, [SegmentSet; 10], ErrorTree<&str>> {
    parse_segment_set
        .context("signal pattern")
        .separated_array(space1)
        .parse(input)
}

fn parse_outputs(input: &str) -> IResult<&str, [SegmentSet; 4], ErrorTree<&str>> {
    parse_segment_set
        .context("output digit")
        .separated_array(space1)
        .parse(input)
}

fn parse_entry(input: &str) -> IResult<&str, Entry, ErrorTree<&str>> {
    parse_patterns
        .terminated(char('|').delimited_by(space1))
        .and(parse_outputs)
        .map(|(patterns, outputs)| Entry { patterns, outputs })
        .context("entry")
        .parse(input)
}

fn parse_all_entries(input: &str) -> Result<Vec<Entry>, ErrorTree<Location>> {
    final_parser(collect_separated_terminated(
        parse_entry,
        multispace1,
        multispace0.all_consuming(),
    ))(input)
}

/// Identify which pattern is which digit purely by pattern size and segment
/// containment: 1, 4, 7, and 8 have unique sizes; 3 is the five-segment
/// pattern containing 1; 9 is the six-segment pattern containing 3; 5 is
/// contained by 9; 6 is the remaining six-segment pattern containing 5.
fn deduce_digits(patterns: &[SegmentSet; 10]) -> Option<[SegmentSet; 10]> {
    let by_len = |len: u32| patterns.iter().copied().filter(move |p| p.len() == len);

    let one = by_len(2).next()?;
    let four = by_len(4).next()?;
    let seven = by_len(3).next()?;
    let eight = by_len(7).next()?;

    let three = by_len(5).find(|p| p.contains(one))?;
    let nine = by_len(6).find(|p| p.contains(three))?;
    let five = by_len(5).find(|&p| p != three && nine.contains(p))?;
    let two = by_len(5).find(|&p| p != three && p != five)?;
    let six = by_len(6).find(|&p| p != nine && p.contains(five))?;
    let zero = by_len(6).find(|&p| p != nine && p != six)?;

    Some([zero, one, two, three, four, five, six, seven, eight, nine])
}

pub fn part1(input: &str) -> anyhow::Result<usize> {
    let entries = parse_all_entries(input).context("failed to parse display entries")?;

    Ok(entries
        .iter()
        .flat_map(|entry| entry.outputs)
        .filter(|output| matches!(output.len(), 2 | 3 | 4 | 7))
        .count())
}

pub fn part2(input: &str) -> anyhow::Result<usize> {
    let entries = parse_all_entries(input).context("failed to parse display entries")?;

    let mut total = 0;

    for entry in entries {
        let digits = deduce_digits(&entry.patterns)
            .context("failed to deduce the segment wiring for an entry")?;

        let value = entry
            .outputs
            .iter()
            .try_fold(0, |value, output| {
                digits
                    .iter()
                    .position(|digit| digit == output)
                    .map(|digit| value * 10 + digit)
            })
            .context("output digit doesn't match any deduced pattern")?;

        total += value;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHORT_SAMPLE: &str =
        "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf";

    const SAMPLE: &str = "\
be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb | fdgacbe cefdb cefbgd gcbe
edbfga begcd cbg gc gcadebf fbgde acbgfd abcde gfcbed gfec | fcgedb cgb dgebacf gc
fgaebd cg bdaec gdafb agbcfd gdcbef bgcad gfac gcb cdgabef | cg cg fdcagb cbg
fbegcd cbd adcefb dageb afcb bc aefdc ecdab fgdeca fcdbega | efabcd cedba gadfec cb
aecbfdg fbg gf bafeg dbefa fcge gcbea fcaegb dgceab fcbdga | gecf egdcabf bgf bfgea
fgeab ca afcebg bdacfeg cfaedg gcfdb baec bfadeg bafgc acf | gebdcfa ecba ca fadegcb
dbcfg fgd bdegcaf fgec aegbdf ecdfab fbedc dacgb gdcebf gf | cefg dcbef fcge gbcadfe
bdfegc cbegaf gecbf dfcage bdacg ed bedf ced adcbefg gebcd | ed bcgafe cdgba cbgef
egadfb cdbfeg cegd fecab cgb gbdefca cg fgcdab egfdb bfceg | gbdfcae bgc cg cgb
gcafb gcf dcaebfg ecagb gf abcdeg gaef cafbge fdbac fegbdc | fgae cfgab fg bagce
";

    #[test]
    fn entry_splits_patterns_and_outputs() {
        let entries = parse_all_entries(SHORT_SAMPLE).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].patterns[9], SegmentSet::from_letters("ab"));
        assert_eq!(entries[0].outputs[3], SegmentSet::from_letters("cdbaf"));
    }

    #[test]
    fn short_sample_decodes() {
        assert_eq!(part2(SHORT_SAMPLE).unwrap(), 5353);
    }

    #[test]
    fn sample_part1() {
        assert_eq!(part1(SAMPLE).unwrap(), 26);
    }

    #[test]
    fn sample_part2() {
        assert_eq!(part2(SAMPLE).unwrap(), 61229);
    }
}
