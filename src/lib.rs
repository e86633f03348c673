//! Minesweeper game model: lazy mine placement, adjacency counts, flood-fill reveal and the
//! win/loss state machine. The console front-end lives in the binary.

mod cell;
mod error;
mod field;
pub mod placement;
mod snapshot;
pub mod util;

pub use error::{ConfigError, InvalidCoordinate};
pub use field::{FieldState, FirstClick, GameField, MAX_SIDE, OpenOutcome};
pub use placement::{FixedPlacement, MinePlacement, RandomPlacement};
pub use snapshot::{CellView, Snapshot};
pub use util::Coord;
