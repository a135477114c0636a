use std::{
    io::Read,
    ops::{Index, IndexMut},
};

use clap::Parser;
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod calibration;
pub mod error;
pub mod schematic;

pub use error::InputError;

pub fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::from_default_env().add_directive("info".parse()?);
    let indicatif_layer = IndicatifLayer::new();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(indicatif_layer.get_stderr_writer()))
        .with(indicatif_layer)
        .with(env_filter)
        .init();
    Ok(())
}

/// Which half of a puzzle to solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    One,
    Two,
}

impl From<bool> for Part {
    fn from(part2: bool) -> Self {
        if part2 {
            Part::Two
        } else {
            Part::One
        }
    }
}

/// Solve one puzzle and print the answer to stdout.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// Solve part two instead of part one
    #[arg(long)]
    pub part2: bool,

    /// Puzzle input text. Read from stdin when omitted or `-`
    pub input: Option<String>,
}

impl Args {
    pub fn part(&self) -> Part {
        self.part2.into()
    }

    pub fn read_input(self) -> Result<String, InputError> {
        match self.input {
            Some(text) if text != "-" => Ok(text),
            _ => read_from(std::io::stdin().lock()),
        }
    }
}

fn read_from(mut reader: impl Read) -> Result<String, InputError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(InputError::Stdin)?;
    Ok(text)
}

/// Row-major storage where every row may have its own length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T>(pub Vec<Vec<T>>);

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Grid(Vec::new())
    }
}

impl<T> Grid<T> {
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter().flat_map(|row| row.iter())
    }
    pub fn indexed_iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(y, row)| row.iter().enumerate().map(move |(x, t)| ((y, x), t)))
    }
    pub fn get(&self, index: (usize, usize)) -> Option<&T> {
        self.0.get(index.0).and_then(|row| row.get(index.1))
    }
    pub fn row(&self, y: usize) -> Option<&[T]> {
        self.0.get(y).map(Vec::as_slice)
    }
    pub fn push_row(&mut self, row: Vec<T>) {
        self.0.push(row);
    }
    pub fn rows_len(&self) -> usize {
        self.0.len()
    }
}

impl<T> FromIterator<Vec<T>> for Grid<T> {
    fn from_iter<I: IntoIterator<Item = Vec<T>>>(iter: I) -> Self {
        Grid(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Grid<T> {
    type Output = [T];

    fn index(&self, y: usize) -> &Self::Output {
        &self.0[y]
    }
}

impl<T> IndexMut<usize> for Grid<T> {
    fn index_mut(&mut self, y: usize) -> &mut Self::Output {
        &mut self.0[y]
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (y, x): (usize, usize)) -> &Self::Output {
        &self.0[y][x]
    }
}
