use std::{env, fs, path::PathBuf};

use joinery::JoinableIterator;
use lazy_format::lazy_format;
use nom::{character::complete::digit1, IResult, Parser};
use nom_supreme::{error::ErrorTree, final_parser::final_parser, tag::complete::tag, ParserExt};

fn day_file_name(input: &str) -> IResult<&str, u8, ErrorTree<&str>> {
    digit1
        .parse_from_str()
        .preceded_by(tag("day"))
        .terminated(tag(".rs"))
        .parse(input)
}

fn parse_day_file_name(name: &str) -> Result<u8, ErrorTree<&str>> {
    final_parser(day_file_name)(name)
}

fn main() {
    println!("cargo:rerun-if-changed=src");

    let mut days: Vec<u8> = fs::read_dir("src")
        .expect("failed to read src directory")
        .filter_map(|entry| {
            let name = entry.expect("failed to read directory entry").file_name();
            parse_day_file_name(name.to_str()?).ok()
        })
        .collect();

    days.sort_unstable();

    // generated.rs lives in OUT_DIR, so the module declarations need explicit
    // paths back into the source tree
    let manifest_dir = env::var("CARGO_MANIFEST_DIR")
        .expect("CARGO_MANIFEST_DIR is not set")
        .replace('\\', "/");
    let manifest_dir = manifest_dir.as_str();

    let mods = days
        .iter()
        .map(|day| lazy_format!("#[path = \"{manifest_dir}/src/day{day}.rs\"]\nmod day{day};"))
        .join_with('\n');

    let day_patterns = days.iter().join_with(" | ");

    let solution_arms = days
        .iter()
        .flat_map(|&day| {
            [1u8, 2].into_iter().map(move |part| {
                lazy_format!(
                    "        ({day}, Part::Part{part}) => \
                     println!(\"{{}}\", day{day}::part{part}(input)?),"
                )
            })
        })
        .join_with('\n');

    let generated = format!(
        "{mods}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Day(u8);

impl ::std::str::FromStr for Day {{
    type Err = DayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {{
        let value: u8 = s.parse()?;

        match value {{
            {day_patterns} => Ok(Day(value)),
            value => Err(DayError::BadDay(value)),
        }}
    }}
}}

fn run_solution(day: Day, part: Part, input: &str) -> ::anyhow::Result<()> {{
    match (day.0, part) {{
{solution_arms}
        _ => unreachable!(\"day {{:?}} was validated during argument parsing\", day),
    }}

    Ok(())
}}
"
    );

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is not set"));
    fs::write(out_dir.join("generated.rs"), generated).expect("failed to write generated.rs");
}
