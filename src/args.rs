use clap::{Parser, ValueEnum};
use minesweeper::FirstClick;
use std::path::PathBuf;

/// Console minesweeper. Missing field settings are asked for on startup.
#[derive(Parser, Clone, Default, Debug)]
#[command(version, about, long_about = None)]
pub struct MinesweeperArgs {
    /// number of rows
    #[arg(short, long)]
    pub rows: Option<usize>,
    /// number of columns
    #[arg(short, long)]
    pub cols: Option<usize>,
    /// amount of mines
    #[arg(short, long)]
    pub mines: Option<usize>,
    /// seed for a reproducible mine layout
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// which cells stay mine-free on the first open
    #[arg(short, long, value_enum, default_value_t = FirstClickArg::SafeCell)]
    pub first_click: FirstClickArg,
    /// print the board without colors
    #[arg(long)]
    pub no_color: bool,
    /// write a debug log to this file
    #[arg(short, long, value_name = "FILE")]
    pub log: Option<PathBuf>,
}

#[derive(ValueEnum, Copy, Clone, Default, Debug, PartialEq, Eq)]
pub enum FirstClickArg {
    Unprotected,
    #[default]
    SafeCell,
    SafeZone,
}

impl From<FirstClickArg> for FirstClick {
    fn from(value: FirstClickArg) -> Self {
        match value {
            FirstClickArg::Unprotected => Self::Unprotected,
            FirstClickArg::SafeCell => Self::SafeCell,
            FirstClickArg::SafeZone => Self::SafeZone,
        }
    }
}

impl MinesweeperArgs {
    /// Rows, columns and mines, if all three were given on the command line.
    pub fn dimensions(&self) -> Option<(usize, usize, usize)> {
        Some((self.rows?, self.cols?, self.mines?))
    }
}
