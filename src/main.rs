use args::MinesweeperArgs;
use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use console::Console;
use crossterm::tty::IsTty;
use log::LevelFilter;
use minesweeper::{ConfigError, FirstClick, GameField, RandomPlacement};
use simplelog::{Config, WriteLogger};
use std::fs::File;
use std::io;
use std::path::Path;

mod args;
mod console;

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("cannot create log file {}", path.display()))?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), file)?;
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = MinesweeperArgs::parse();
    if let Some(path) = &args.log {
        init_logging(path)?;
    }
    log::info!("starting with {args:?}");

    let first_click = FirstClick::from(args.first_click);
    let seed = args.seed;
    let build = |rows: usize, cols: usize, mines: usize| -> Result<GameField, ConfigError> {
        let placement = match seed {
            Some(seed) => RandomPlacement::seeded(seed),
            None => RandomPlacement::from_os_rng(),
        };
        Ok(GameField::with_placement(rows, cols, mines, placement)?.first_click(first_click))
    };

    let color = !args.no_color && io::stdout().is_tty();
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock(), color);

    let mut field = match args.dimensions() {
        Some((rows, cols, mines)) => build(rows, cols, mines).wrap_err("invalid field settings")?,
        None => match console.setup_field([args.rows, args.cols, args.mines], build)? {
            Some(field) => field,
            None => return Ok(()),
        },
    };

    console.run(&mut field)?;
    Ok(())
}
