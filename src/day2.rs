use anyhow::Context;
use nom::{
    branch::alt,
    character::complete::{digit1, line_ending, multispace0, space1},
    IResult, Parser,
};
use nom_supreme::{
    error::ErrorTree,
    final_parser::{final_parser, Location},
    multi::collect_separated_terminated,
    tag::complete::tag,
    ParserExt,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Forward(i32),
    Down(i32),
    Up(i32),
}

fn parse_command(input: &str) -> IResult<&str, Command, ErrorTree<&str>> {
    alt((
        digit1
            .parse_from_str()
            .preceded_by(space1)
            .preceded_by(tag("forward"))
            .map(Command::Forward),
        digit1
            .parse_from_str()
            .preceded_by(space1)
            .preceded_by(tag("down"))
            .map(Command::Down),
        digit1
            .parse_from_str()
            .preceded_by(space1)
            .preceded_by(tag("up"))
            .map(Command::Up),
    ))
    .context("command")
    .parse(input)
}

fn parse_course(input: &str) -> Result<Vec<Command>, ErrorTree<Location>> {
    final_parser(collect_separated_terminated(
        parse_command,
        line_ending,
        multispace0.all_consuming(),
    ))(input)
}

pub fn part1(input: &str) -> anyhow::Result<i32> {
    let course = parse_course(input).context("failed to parse course")?;

    let mut horizontal = 0;
    let mut depth = 0;

    for command in course {
        match command {
            Command::Forward(distance) => horizontal += distance,
            Command::Down(distance) => depth += distance,
            Command::Up(distance) => depth -= distance,
        }
    }

    Ok(horizontal * depth)
}

pub fn part2(input: &str) -> anyhow::Result<i32> {
    let course = parse_course(input).context("failed to parse course")?;

    let mut horizontal = 0;
    let mut depth = 0;
    let mut aim = 0;

    for command in course {
        match command {
            Command::Forward(distance) => {
                horizontal += distance;
                depth += aim * distance;
            }
            Command::Down(distance) => aim += distance,
            Command::Up(distance) => aim -= distance,
        }
    }

    Ok(horizontal * depth)
}
