include!(concat!(env!("OUT_DIR"), "/generated.rs"));

mod library;

use std::{
    fs,
    io::{self, Read},
    num::ParseIntError,
    path::PathBuf,
    str::FromStr,
};

use anyhow::Context;
use structopt::StructOpt;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum DayError {
    #[error("failed to parse day number")]
    Parse(#[from] ParseIntError),

    #[error("day {0} is not an implemented puzzle day")]
    BadDay(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    Part1,
    Part2,
}

#[derive(Debug, Clone, Error)]
pub enum PartError {
    #[error("failed to parse part number")]
    Parse(#[from] ParseIntError),

    #[error("part {0} is out of range; must be 1 or 2")]
    BadPart(u8),
}

impl FromStr for Part {
    type Err = PartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<u8>()? {
            1 => Ok(Part::Part1),
            2 => Ok(Part::Part2),
            value => Err(PartError::BadPart(value)),
        }
    }
}

#[derive(StructOpt)]
#[structopt(about = "Advent of Code 2021 solutions")]
struct Args {
    /// The puzzle day to solve
    #[structopt(short, long)]
    day: Day,

    /// Which part of the day to solve
    #[structopt(short, long)]
    part: Part,

    /// Read the puzzle input from this file instead of stdin
    #[structopt(short, long, conflicts_with = "input")]
    file: Option<PathBuf>,

    /// Use this string as the puzzle input directly
    #[structopt(short, long, conflicts_with = "file")]
    input: Option<String>,
}

fn read_input(args: &Args) -> anyhow::Result<String> {
    if let Some(input) = &args.input {
        return Ok(input.clone());
    }

    match &args.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read puzzle input from {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read puzzle input from stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::from_args();
    let input = read_input(&args)?;

    run_solution(args.day, args.part, &input)
}
