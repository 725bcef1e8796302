//! Text level format and the built-in demo stage
//!
//! One character per tile. Characters map to sprite sheet coordinates and go
//! through the same decoding path as sheet-based level data.

use std::fmt;

use super::tile::{TileGrid, sheet};

/// Built-in stage: 64 x 18 tiles. Player spawns at (16, 112), just above the
/// floor on the left; the portal sits at the far right.
pub const DEMO_LEVEL: &str = "\
................................................................
................................................................
................................................................
................................................................
................................................................
.......................................$$$......................
................................................................
...........................===..................................
................................................................
.....................====.......................===.............
................................######..........................
................................................................
.......................................===......................
..................#.........................................###.
..........>.......#.........##.......#.........##...........#.#G
##################################===###########################
##################################...###########################
##################################...###########################
";

/// Reasons a text level can be rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// No rows at all
    Empty,
    /// A row's length differs from the first row
    RaggedRow { row: usize, expected: usize, found: usize },
    /// Character with no tile mapping
    UnknownTile { row: usize, column: usize, ch: char },
    /// More than u16::MAX rows or columns
    TooLarge,
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Empty => write!(f, "level has no rows"),
            LevelError::RaggedRow { row, expected, found } => write!(
                f,
                "row {} has {} tiles, expected {}",
                row, found, expected
            ),
            LevelError::UnknownTile { row, column, ch } => {
                write!(f, "unknown tile {:?} at row {}, column {}", ch, row, column)
            }
            LevelError::TooLarge => write!(f, "level exceeds {} tiles per side", u16::MAX),
        }
    }
}

impl std::error::Error for LevelError {}

/// Sheet coordinate for a level character
fn sheet_coord(ch: char) -> Option<(u8, u8)> {
    let coord = match ch {
        '.' | ' ' => sheet::EMPTY,
        '#' => sheet::BRICKS,
        '=' => sheet::PLATFORM,
        '$' => sheet::GOLD,
        'G' => sheet::PORTAL,
        '>' => sheet::ARROW_BLOCKS[0],
        '<' => sheet::ARROW_BLOCKS[2],
        _ => return None,
    };
    Some(coord)
}

/// Parse a text level. Blank lines are skipped; rows must all be the same
/// length.
pub fn parse_ascii(text: &str) -> Result<TileGrid, LevelError> {
    let rows: Vec<&str> = text
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.is_empty())
        .collect();
    let first = rows.first().ok_or(LevelError::Empty)?;
    let width = first.chars().count();

    let mut coords = Vec::with_capacity(width * rows.len());
    for (row, line) in rows.iter().enumerate() {
        let found = line.chars().count();
        if found != width {
            return Err(LevelError::RaggedRow {
                row,
                expected: width,
                found,
            });
        }
        for (column, ch) in line.chars().enumerate() {
            let coord = sheet_coord(ch).ok_or(LevelError::UnknownTile { row, column, ch })?;
            coords.push(coord);
        }
    }

    let width = u16::try_from(width).map_err(|_| LevelError::TooLarge)?;
    let height = u16::try_from(rows.len()).map_err(|_| LevelError::TooLarge)?;
    Ok(TileGrid::from_sheet(width, height, &coords))
}

/// The built-in stage
pub fn demo_level() -> TileGrid {
    match parse_ascii(DEMO_LEVEL) {
        Ok(grid) => grid,
        // DEMO_LEVEL is covered by tests; an empty stage keeps the game running
        Err(e) => {
            log::error!("Built-in level failed to parse: {}", e);
            TileGrid::from_sheet(0, 0, &[])
        }
    }
}
