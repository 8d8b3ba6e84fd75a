use std::collections::HashMap;

use anyhow::Context;
use nom::{
    character::complete::{alpha1, char, multispace0, multispace1},
    IResult, Parser,
};
use nom_supreme::{
    error::ErrorTree,
    final_parser::{final_parser, Location},
    multi::parse_separated_terminated,
    ParserExt,
};

fn is_small(cave: &str) -> bool {
    cave.chars().all(|c| c.is_ascii_lowercase())
}

#[derive(Debug, Clone, Default)]
struct CaveSystem<'a> {
    links: HashMap<&'a str, Vec<&'a str>>,
}

fn parse_link(input: &str) -> IResult<&str, (&str, &str), ErrorTree<&str>> {
    alpha1
        .terminated(char('-'))
        .and(alpha1)
        .context("link")
        .parse(input)
}

fn parse_cave_system(input: &str) -> IResult<&str, CaveSystem<'_>, ErrorTree<&str>> {
    parse_separated_terminated(
        parse_link,
        multispace1,
        multispace0.all_consuming(),
        CaveSystem::default,
        |mut system, (a, b)| {
            system.links.entry(a).or_default().push(b);
            system.links.entry(b).or_default().push(a);
            system
        },
    )
    .parse(input)
}

fn final_parse_cave_system(input: &str) -> Result<CaveSystem<'_>, ErrorTree<Location>> {
    final_parser(parse_cave_system)(input)
}

impl<'a> CaveSystem<'a> {
    /// Count the distinct routes from `cave` to "end". `visited` holds the
    /// small caves on the current route; `spare_visit` is whether one small
    /// cave may still be entered a second time.
    fn count_routes(
        &self,
        cave: &'a str,
        visited: &mut Vec<&'a str>,
        spare_visit: bool,
    ) -> usize {
        if cave == "end" {
            return 1;
        }

        let entered_small = is_small(cave);
        if entered_small {
            visited.push(cave);
        }

        let mut routes = 0;

        if let Some(destinations) = self.links.get(cave) {
            for &next in destinations {
                routes += if next == "start" {
                    0
                } else if visited.contains(&next) {
                    match spare_visit {
                        true => self.count_routes(next, visited, false),
                        false => 0,
                    }
                } else {
                    self.count_routes(next, visited, spare_visit)
                };
            }
        }

        if entered_small {
            visited.pop();
        }

        routes
    }
}

fn solve(input: &str, spare_visit: bool) -> anyhow::Result<usize> {
    let system = final_parse_cave_system(input).context("failed to parse cave system")?;

    Ok(system.count_routes("start", &mut Vec::new(), spare_visit))
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

    const SMALL_SAMPLE: &str = "\
start-A
start-b
A-c
A-b
b-d
A-end
b-end
";

    const LARGE_SAMPLE: &str = "\
fs-end
he-DX
fs-he
start-DX
pj-DX
end-zg
zg-sl
zg-pj
pj-he
RW-he
fs-DX
pj-RW
zg-RW
start-pj
he-WI
zg-he
pj-fs
start-RW
";

    #[test]
    fn small_sample_part1() {
        assert_eq!(part1(SMALL_SAMPLE).unwrap(), 10);
    }

    #[test]
    fn small_sample_part2() {
        assert_eq!(part2(SMALL_SAMPLE).unwrap(), 36);
    }

    #[test]
    fn large_sample_part1() {
        assert_eq!(part1(LARGE_SAMPLE).unwrap(), 226);
    }

    #[test]
    fn large_sample_part2() {
        assert_eq!(part2(LARGE_SAMPLE).unwrap(), 3509);
    }
}
