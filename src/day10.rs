use anyhow::bail;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineStatus {
    Valid,
    Corrupt(i64),
    Incomplete(i64),
}

fn matching_close(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        '<' => Some('>'),
        _ => None,
    }
}

fn corruption_score(close: char) -> anyhow::Result<i64> {
    Ok(match close {
        ')' => 3,
        ']' => 57,
        '}' => 1197,
        '>' => 25137,
        c => bail!("{:?} is not a chunk delimiter", c),
    })
}

fn completion_points(close: char) -> i64 {
    match close {
        ')' => 1,
        ']' => 2,
        '}' => 3,
        _ => 4,
    }
}

/// Scan the line with an explicit stack of expected closing delimiters. The
/// first mismatched closer makes the line corrupt; leftover stack entries
/// make it incomplete, scored innermost first.
fn check_line(line: &str) -> anyhow::Result<LineStatus> {
    let mut stack = Vec::new();

    for c in line.chars() {
        match matching_close(c) {
            Some(close) => stack.push(close),
            None => match stack.pop() {
                Some(expected) if c == expected => {}
                _ => return Ok(LineStatus::Corrupt(corruption_score(c)?)),
            },
        }
    }

    Ok(if stack.is_empty() {
        LineStatus::Valid
    } else {
        LineStatus::Incomplete(
            stack
                .iter()
                .rev()
                .fold(0, |score, &close| score * 5 + completion_points(close)),
        )
    })
}

pub fn part1(input: &str) -> anyhow::Result<i64> {
    input.lines().try_fold(0, |total, line| {
        Ok(match check_line(line)? {
            LineStatus::Corrupt(score) => total + score,
            _ => total,
        })
    })
}

pub fn part2(input: &str) -> anyhow::Result<i64> {
    let mut scores = Vec::new();

    for line in input.lines() {
        if let LineStatus::Incomplete(score) = check_line(line)? {
            scores.push(score);
        }
    }

    if scores.is_empty() {
        bail!("there are no incomplete lines");
    }

    scores.sort_unstable();

    Ok(scores[scores.len() / 2])
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
[({(<(())[]>[[{[]{<()<>>
[(()[<>])]({[<{<<[]>>(
{([(<{}[<>[]}>{[]}[(<()>
(((({<>}<{<{<>}{[]{[]{}
[[<[([]))<([[{}[[()]]]
[{[{({}]{}}([{[{{{}}([]
{<[[]]>}<{[{[{[]{()[[[]
[<(<(<(<{}))><([]([]()
<{([([[(<>()){}]>(<<{{
<{([{{}}[<[[[<>{}]]]>[]]
";

    #[test]
    fn sample_part1() {
        assert_eq!(part1(SAMPLE).unwrap(), 26397);
    }

    #[test]
    fn sample_part2() {
        assert_eq!(part2(SAMPLE).unwrap(), 288957);
    }

    #[test]
    fn single_incomplete_line() {
        // completion is "])}>"
        assert_eq!(
            check_line("<{([{{}}[<[[[<>{}]]]>[]]").unwrap(),
            LineStatus::Incomplete(294)
        );
    }

    #[test]
    fn foreign_character() {
        assert!(part1("(x)").is_err());
    }
}
