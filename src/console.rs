use crossterm::style::{Color, StyledContent, Stylize};
use log::{debug, info};
use minesweeper::{CellView, ConfigError, GameField, MinePlacement, OpenOutcome, Snapshot};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

const USAGE: &str = "Commands: open X Y (row, column), show, help, exit";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Open(i64, i64),
    Show,
    Help,
    Exit,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`open` takes exactly two coordinates")]
    WrongArity,
    #[error("`{0}` is not a whole number")]
    NotANumber(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim().to_lowercase();
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Err(ParseCommandError::Empty);
        };

        let command = match word {
            "open" => {
                let (Some(x), Some(y), None) = (words.next(), words.next(), words.next()) else {
                    return Err(ParseCommandError::WrongArity);
                };
                let number = |token: &str| {
                    token
                        .parse::<i64>()
                        .map_err(|_| ParseCommandError::NotANumber(token.to_string()))
                };
                return Ok(Command::Open(number(x)?, number(y)?));
            }
            "show" => Command::Show,
            "help" => Command::Help,
            "exit" => Command::Exit,
            other => return Err(ParseCommandError::Unknown(other.to_string())),
        };

        match words.next() {
            None => Ok(command),
            Some(_) => Err(ParseCommandError::Unknown(line)),
        }
    }
}

/// Line-oriented front-end. Reads commands from `input`, writes everything to `output`.
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Asks for the field settings missing from `preset` until `build` accepts them.
    ///
    /// Any rejected attempt asks for all three values again. Returns `None` at end of input.
    pub fn setup_field<P: MinePlacement>(
        &mut self,
        mut preset: [Option<usize>; 3],
        mut build: impl FnMut(usize, usize, usize) -> Result<GameField<P>, ConfigError>,
    ) -> io::Result<Option<GameField<P>>> {
        const QUESTIONS: [&str; 3] = [
            "Number of rows: ",
            "Number of columns: ",
            "Number of mines: ",
        ];

        'attempt: loop {
            let mut values = [0; 3];
            for (i, question) in QUESTIONS.iter().enumerate() {
                values[i] = match preset[i].take() {
                    Some(value) => value,
                    None => {
                        let Some(answer) = self.prompt(question)? else {
                            return Ok(None);
                        };
                        match answer.parse::<usize>() {
                            Ok(value) => value,
                            Err(_) => {
                                writeln!(self.output, "Please enter whole, non-negative numbers.")?;
                                continue 'attempt;
                            }
                        }
                    }
                };
            }

            let [rows, cols, mines] = values;
            match build(rows, cols, mines) {
                Ok(field) => return Ok(Some(field)),
                Err(err) => {
                    debug!("rejected field settings: {err}");
                    writeln!(self.output, "Invalid field: {err}.")?;
                }
            }
        }
    }

    /// Plays until `exit`, end of input, or the end of the game.
    pub fn run<P: MinePlacement>(&mut self, field: &mut GameField<P>) -> io::Result<()> {
        writeln!(
            self.output,
            "Minesweeper on a {}x{} field with {} mines.",
            field.rows(),
            field.cols(),
            field.mine_count()
        )?;
        writeln!(self.output, "{USAGE}")?;

        while !field.is_game_over() {
            let Some(line) = self.prompt("> ")? else {
                info!("input closed, leaving the game");
                break;
            };

            match line.parse::<Command>() {
                Ok(Command::Open(x, y)) => self.open(field, x, y)?,
                Ok(Command::Show) => self.render(&field.snapshot())?,
                Ok(Command::Help) => writeln!(self.output, "{USAGE}")?,
                Ok(Command::Exit) => {
                    writeln!(self.output, "Leaving the game.")?;
                    break;
                }
                Err(ParseCommandError::Empty) => {}
                Err(err) => writeln!(self.output, "{err}. {USAGE}")?,
            }
        }
        Ok(())
    }

    fn open<P: MinePlacement>(
        &mut self,
        field: &mut GameField<P>,
        x: i64,
        y: i64,
    ) -> io::Result<()> {
        let (Ok(row), Ok(col)) = (usize::try_from(x), usize::try_from(y)) else {
            writeln!(
                self.output,
                "coordinates ({x}, {y}) are outside the {}x{} field",
                field.rows(),
                field.cols()
            )?;
            return Ok(());
        };

        match field.open_cell(row, col) {
            Err(err) => writeln!(self.output, "{err}")?,
            Ok(OpenOutcome::Revealed { cells }) if cells.is_empty() => {
                writeln!(self.output, "Cell ({row}, {col}) is already open.")?;
            }
            Ok(OpenOutcome::Revealed { .. }) => {
                self.render(&field.snapshot())?;
                if field.is_won() {
                    writeln!(self.output, "All safe cells are open. You win!")?;
                }
            }
            Ok(OpenOutcome::Loss) => {
                self.render(&field.snapshot())?;
                writeln!(self.output, "Cell ({row}, {col}) holds a mine! You lose.")?;
            }
            Ok(OpenOutcome::GameOver) => writeln!(self.output, "The game is over.")?,
        }
        Ok(())
    }

    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        let row_digits = (snapshot.rows() - 1).to_string().len();
        let col_digits = (snapshot.cols() - 1).to_string().len();

        write!(self.output, "{:row_digits$}", "")?;
        for col in 0..snapshot.cols() {
            write!(self.output, " {col:>col_digits$}")?;
        }
        writeln!(self.output)?;

        for (row, line) in snapshot.rows_iter().enumerate() {
            write!(self.output, "{row:>row_digits$}")?;
            for cell in line {
                // cells are one character wide, the column indices may be wider
                write!(self.output, " {:pad$}", "", pad = col_digits - 1)?;
                if self.color {
                    write!(self.output, "{}", styled(*cell))?;
                } else {
                    write!(self.output, "{cell}")?;
                }
            }
            writeln!(self.output)?;
        }
        Ok(())
    }
}

// crossterm's plain colours are the bright ones, its `Dark*` colours the dim ones
fn styled(cell: CellView) -> StyledContent<String> {
    let c = cell.to_string();
    match cell {
        CellView::Hidden => c.stylize(),
        CellView::Revealed(n) => {
            let bg = match n {
                0 => return c.on(Color::Black),
                1 => Color::Blue,
                2 => Color::Cyan,
                3 => Color::Green,
                4 => Color::Yellow,
                5 => Color::Magenta,
                6 => Color::Grey,
                7 => Color::White,
                8.. => Color::Red,
            };
            c.with(Color::Black).on(bg)
        }
        CellView::Exploded => c.with(Color::Red).on(Color::Black),
    }
}
