//! Engine schematic analysis.
//!
//! A schematic is a grid of digits, `.` for empty space and symbols. Digit
//! runs are part numbers; a part number is counted once it touches a symbol
//! (diagonals included). A `*` touching exactly two part numbers is a gear
//! whose ratio is the product of those numbers.

use std::ops::RangeInclusive;

use nom::{
    branch::alt,
    character::complete::{anychar, char, digit1},
    combinator::{iterator, map, value},
    IResult,
};

use crate::{Grid, Part};

const GEAR: char = '*';

/// A run of digits on a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberToken {
    row: usize,
    start: usize,
    end: usize,
    value: u64,
    claimed: bool,
}

impl NumberToken {
    fn new(row: usize, start: usize, end: usize, value: u64) -> Self {
        debug_assert!(start <= end);
        NumberToken {
            row,
            start,
            end,
            value,
            claimed: false,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    /// First column of the run.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Last column of the run, inclusive.
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    /// Whether `column` lies within one cell of the run. Rows are filtered by
    /// the caller.
    pub fn is_adjacent(&self, column: usize) -> bool {
        column + 1 >= self.start && column <= self.end + 1
    }

    /// Claims the token for a symbol at `column`, yielding its value the
    /// first time only.
    fn claim(&mut self, column: usize) -> Option<u64> {
        if self.claimed || !self.is_adjacent(column) {
            return None;
        }
        self.claimed = true;
        Some(self.value)
    }
}

/// A single non-digit, non-`.` cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolToken {
    row: usize,
    column: usize,
    gear: bool,
    ratio: u64,
}

impl SymbolToken {
    fn new(row: usize, column: usize, glyph: char) -> Self {
        SymbolToken {
            row,
            column,
            gear: glyph == GEAR,
            ratio: 1,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn is_gear_candidate(&self) -> bool {
        self.gear
    }

    /// Product of the values this symbol claimed while resolving gears.
    pub fn ratio(&self) -> u64 {
        self.ratio
    }
}

#[derive(Debug, Clone)]
enum Cell<'a> {
    Digits(&'a str),
    Blank,
    Symbol(char),
}

fn cell(input: &str) -> IResult<&str, Cell<'_>> {
    alt((
        map(digit1, Cell::Digits),
        value(Cell::Blank, char('.')),
        map(anychar, Cell::Symbol),
    ))(input)
}

fn decode(digits: &str) -> u64 {
    digits.bytes().fold(0u64, |acc, d| {
        acc.saturating_mul(10).saturating_add(u64::from(d - b'0'))
    })
}

/// Indexed schematic. Owns every token; number tokens are addressed by
/// `(row, position in row)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schematic {
    numbers: Grid<NumberToken>,
    symbols: Vec<SymbolToken>,
    widths: Vec<usize>,
}

impl Schematic {
    #[tracing::instrument(skip_all)]
    pub fn index(text: &str) -> Self {
        let mut schematic = Schematic::default();
        for (row, line) in text.lines().enumerate() {
            let mut numbers = Vec::new();
            let mut column = 0;
            let mut cells = iterator(line, cell);
            for token in &mut cells {
                match token {
                    Cell::Digits(digits) => {
                        // digit1 only accepts ASCII, so bytes are columns
                        let width = digits.len();
                        numbers.push(NumberToken::new(
                            row,
                            column,
                            column + width - 1,
                            decode(digits),
                        ));
                        column += width;
                    }
                    Cell::Blank => column += 1,
                    Cell::Symbol(glyph) => {
                        schematic.symbols.push(SymbolToken::new(row, column, glyph));
                        column += 1;
                    }
                }
            }
            schematic.numbers.push_row(numbers);
            schematic.widths.push(column);
        }
        tracing::debug!(
            rows = schematic.rows_len(),
            numbers = schematic.numbers.iter().count(),
            symbols = schematic.symbols.len(),
            "indexed schematic"
        );
        schematic
    }

    pub fn rows_len(&self) -> usize {
        self.numbers.rows_len()
    }

    /// Column count of `row`, if the row exists.
    pub fn width(&self, row: usize) -> Option<usize> {
        self.widths.get(row).copied()
    }

    /// Number tokens on `row`, left to right.
    pub fn numbers_in_row(&self, row: usize) -> &[NumberToken] {
        self.numbers.row(row).unwrap_or_default()
    }

    pub fn number(&self, at: (usize, usize)) -> Option<&NumberToken> {
        self.numbers.get(at)
    }

    /// Every number token with its `(row, position in row)` address.
    pub fn numbers(&self) -> impl Iterator<Item = ((usize, usize), &NumberToken)> {
        self.numbers.indexed_iter()
    }

    /// Symbols in row-major scan order.
    pub fn symbols(&self) -> &[SymbolToken] {
        &self.symbols
    }

    /// Sums every part number touching a symbol. Each number is claimed by
    /// the first symbol, in scan order, that touches it.
    #[tracing::instrument(skip_all)]
    pub fn sum_adjacent_parts(&mut self) -> u64 {
        let Schematic {
            numbers, symbols, ..
        } = self;
        let mut total = 0u64;
        for symbol in symbols.iter() {
            for y in neighbour_rows(numbers, symbol.row) {
                for number in numbers[y].iter_mut() {
                    if let Some(value) = number.claim(symbol.column) {
                        tracing::trace!(
                            row = number.row,
                            start = number.start,
                            value,
                            symbol = ?(symbol.row, symbol.column),
                            "claimed part"
                        );
                        total = total.saturating_add(value);
                    }
                }
            }
        }
        tracing::debug!(total, "resolved part numbers");
        total
    }

    /// Sums the ratios of every `*` touching exactly two unclaimed part
    /// numbers. Numbers touching a `*` are claimed even when that `*` does
    /// not end up counting as a gear.
    #[tracing::instrument(skip_all)]
    pub fn sum_gear_ratios(&mut self) -> u64 {
        let Schematic {
            numbers, symbols, ..
        } = self;
        let mut total = 0u64;
        for symbol in symbols.iter_mut().filter(|symbol| symbol.gear) {
            let mut adjacent = 0;
            for y in neighbour_rows(numbers, symbol.row) {
                for number in numbers[y].iter_mut() {
                    if let Some(value) = number.claim(symbol.column) {
                        adjacent += 1;
                        symbol.ratio = symbol.ratio.saturating_mul(value);
                    }
                }
            }
            tracing::trace!(
                symbol = ?(symbol.row, symbol.column),
                adjacent,
                ratio = symbol.ratio,
                "scanned gear candidate"
            );
            // three or more neighbours is not a gear either
            if adjacent == 2 {
                total = total.saturating_add(symbol.ratio);
            }
        }
        tracing::debug!(total, "resolved gear ratios");
        total
    }
}

fn neighbour_rows(numbers: &Grid<NumberToken>, row: usize) -> RangeInclusive<usize> {
    let rows = numbers.rows_len();
    assert!(row < rows, "symbol row {row} outside schematic of {rows} rows");
    row.saturating_sub(1)..=(row + 1).min(rows - 1)
}

/// Part one: sum of part numbers touching any symbol.
pub fn part_sum(text: &str) -> u64 {
    Schematic::index(text).sum_adjacent_parts()
}

/// Part two: sum of gear ratios.
pub fn gear_ratio_sum(text: &str) -> u64 {
    Schematic::index(text).sum_gear_ratios()
}

pub fn solve(text: &str, part: Part) -> u64 {
    match part {
        Part::One => part_sum(text),
        Part::Two => gear_ratio_sum(text),
    }
}
