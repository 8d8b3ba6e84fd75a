use anyhow::Context;

use crate::library::parse_input_iter;

/// Fish are bucketed by spawn timer; only the bucket counts matter, so the
/// whole population fits in nine u64s no matter how many days pass.
#[derive(Debug, Clone, Copy, Default)]
struct FishSchool {
    timers: [u64; 9],
}

impl FishSchool {
    fn advance_day(&mut self) {
        let spawning = self.timers[0];

        // The spawning fish wrap around to slot 8 as their offspring
        self.timers.rotate_left(1);

        // ...while the parents restart their cycle at 6
        self.timers[6] += spawning;
    }

    fn population(&self) -> u64 {
        self.timers.iter().sum()
    }
}

fn solve(input: &str, days: usize) -> anyhow::Result<u64> {
    let timers: Vec<usize> =
        parse_input_iter(input.split(',')).context("failed to parse fish timer")?;

    let mut school = FishSchool::default();
    for timer in timers {
        *school
            .timers
            .get_mut(timer)
            .context("fish timer out of range")? += 1;
    }

    for _ in 0..days {
        school.advance_day();
    }

    Ok(school.population())
}

pub fn part1(input: &str) -> anyhow::Result<u64> {
    solve(input, 80)
}

pub fn part2(input: &str) -> anyhow::Result<u64> {
    solve(input, 256)
}
