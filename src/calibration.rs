//! Trebuchet calibration values: the first and last digit of every line,
//! read as a two digit number.

use crate::Part;

const WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// What counts as a digit while scanning a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literals {
    Digits,
    DigitsAndWords,
}

impl From<Part> for Literals {
    fn from(part: Part) -> Self {
        match part {
            Part::One => Literals::Digits,
            Part::Two => Literals::DigitsAndWords,
        }
    }
}

fn prefix_digit(tail: &str, literals: Literals) -> Option<u32> {
    let first = tail.chars().next()?;
    if let Some(digit) = first.to_digit(10) {
        return Some(digit);
    }
    match literals {
        Literals::Digits => None,
        Literals::DigitsAndWords => WORDS
            .iter()
            .position(|word| tail.starts_with(word))
            .map(|idx| idx as u32 + 1),
    }
}

/// Every digit in `line` in order, words overlapping where they share letters.
fn digit_stream(
    line: &str,
    literals: Literals,
) -> impl DoubleEndedIterator<Item = u32> + '_ {
    (0..line.len())
        .filter_map(move |idx| line.get(idx..))
        .filter_map(move |tail| prefix_digit(tail, literals))
}

/// A line without any digit is worth 0.
pub fn calibration_value(line: &str, literals: Literals) -> u32 {
    let Some(first) = digit_stream(line, literals).next() else {
        return 0;
    };
    let last = digit_stream(line, literals).next_back().unwrap_or(first);
    first * 10 + last
}

#[tracing::instrument(skip(text))]
pub fn sum_calibration(text: &str, literals: Literals) -> u32 {
    text.lines()
        .map(|line| calibration_value(line, literals))
        .inspect(|value| tracing::trace!(value))
        .sum()
}

pub fn solve(text: &str, part: Part) -> u32 {
    sum_calibration(text, part.into())
}
