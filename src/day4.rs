use anyhow::{bail, Context};
use nom::{
    character::complete::{char, digit1, line_ending, multispace1, space0},
    IResult, Parser,
};
use nom_supreme::{
    error::ErrorTree,
    final_parser::{final_parser, Location},
    multi::collect_separated_terminated,
    ParserExt,
};

/// Every way a bingo board can win, expressed as masks over the 25 mark
/// bits. Cell 0 (top left) is the most significant bit.
const WINNING_MASKS: [u32; 10] = [
    // Rows
    0b11111_00000_00000_00000_00000,
    0b00000_11111_00000_00000_00000,
    0b00000_00000_11111_00000_00000,
    0b00000_00000_00000_11111_00000,
    0b00000_00000_00000_00000_11111,
    // Columns
    0b10000_10000_10000_10000_10000,
    0b01000_01000_01000_01000_01000,
    0b00100_00100_00100_00100_00100,
    0b00010_00010_00010_00010_00010,
    0b00001_00001_00001_00001_00001,
];

#[derive(Debug, Clone, Copy)]
struct Board {
    cells: [i32; 25],
    mask: u32,
}

impl Board {
    fn mark(&mut self, draw: i32) {
        if let Some(index) = self.cells.iter().position(|&cell| cell == draw) {
            self.mask |= 1 << (24 - index);
        }
    }

    fn has_won(&self) -> bool {
        WINNING_MASKS
            .iter()
            .any(|&combo| self.mask & combo == combo)
    }

    fn unmarked_sum(&self) -> i32 {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(index, _)| self.mask >> (24 - index) & 1 == 0)
            .map(|(_, &cell)| cell)
            .sum()
    }
}

#[derive(Debug, Clone)]
struct Game {
    draws: Vec<i32>,
    boards: Vec<Board>,
}

fn parse_board(input: &str) -> IResult<&str, Board, ErrorTree<&str>> {
    digit1
        .preceded_by(space0)
        .parse_from_str()
        .context("cell")
        .array()
        .map(|row: [i32; 5]| row)
        .context("row")
        .separated_array(line_ending)
        .map(|rows: [[i32; 5]; 5]| Board {
            cells: brownstone::build_iter(rows.into_iter().flatten()),
            mask: 0,
        })
        .parse(input)
}

fn parse_game(input: &str) -> IResult<&str, Game, ErrorTree<&str>> {
    collect_separated_terminated(
        digit1.parse_from_str::<i32>().context("draw"),
        char(','),
        line_ending.terminated(line_ending),
    )
    .context("draws")
    .and(
        collect_separated_terminated(
            parse_board.context("board"),
            line_ending.terminated(line_ending),
            multispace1.opt().all_consuming(),
        )
        .context("boards"),
    )
    .map(|(draws, boards)| Game { draws, boards })
    .parse(input)
}

fn final_parse_game(input: &str) -> Result<Game, ErrorTree<Location>> {
    final_parser(parse_game)(input)
}

pub fn part1(input: &str) -> anyhow::Result<i32> {
    let mut game = final_parse_game(input).context("failed to parse bingo game")?;

    for &draw in &game.draws {
        for board in &mut game.boards {
            board.mark(draw);
            if board.has_won() {
                return Ok(board.unmarked_sum() * draw);
            }
        }
    }

    bail!("no winning board")
}

pub fn part2(input: &str) -> anyhow::Result<i32> {
    let mut game = final_parse_game(input).context("failed to parse bingo game")?;

    let mut last_score = None;

    for &draw in &game.draws {
        for board in &mut game.boards {
            // Boards stop playing once they've won
            if board.has_won() {
                continue;
            }

            board.mark(draw);
            if board.has_won() {
                last_score = Some(board.unmarked_sum() * draw);
            }
        }
    }

    last_score.context("no winning board")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

22 13 17 11  0
 8  2 23  4 24
21  9 14 16  7
 6 10  3 18  5
 1 12 20 15 19

 3 15  0  2 22
 9 18 13 17  5
19  8  7 25 23
20 11 10 24  4
14 21 16 12  6

14 21 17 24  4
10 16 15  9 19
18  8 23 26 20
22 11 13  6  5
 2  0 12  3  7
";

    #[test]
    fn sample_part1() {
        assert_eq!(part1(SAMPLE).unwrap(), 4512);
    }

    #[test]
    fn sample_part2() {
        assert_eq!(part2(SAMPLE).unwrap(), 1924);
    }
}
