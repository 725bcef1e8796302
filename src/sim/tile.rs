//! Tile classes and the immutable stage grid
//!
//! Level data addresses tiles by their (column, row) position in the sprite
//! sheet. Those coordinates are decoded once into a [`TileKind`] so gameplay
//! never compares against raw sheet positions.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Sprite sheet coordinates for the tiles the game knows about
pub mod sheet {
    pub const EMPTY: (u8, u8) = (0, 0);
    pub const PORTAL: (u8, u8) = (1, 1);
    pub const BRICKS: (u8, u8) = (2, 0);
    pub const PLATFORM: (u8, u8) = (2, 1);
    pub const GOLD: (u8, u8) = (3, 1);
    pub const ARROW_BLOCKS: [(u8, u8); 4] = [(0, 2), (0, 3), (1, 2), (1, 3)];
}

/// Semantic collision class of a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TileKind {
    #[default]
    Empty,
    /// Bricks and gold bricks
    Solid,
    /// Platform tile
    OneWaySolid,
    /// Portal that ends the stage
    Goal,
    /// Signage, never collides
    Decoration,
}

impl TileKind {
    /// Decode a sprite sheet coordinate. Unknown coordinates are empty.
    pub fn from_sheet(coord: (u8, u8)) -> Self {
        match coord {
            sheet::BRICKS | sheet::GOLD => TileKind::Solid,
            sheet::PLATFORM => TileKind::OneWaySolid,
            sheet::PORTAL => TileKind::Goal,
            c if sheet::ARROW_BLOCKS.contains(&c) => TileKind::Decoration,
            _ => TileKind::Empty,
        }
    }

    const fn bit(self) -> u8 {
        match self {
            TileKind::Empty => 1 << 0,
            TileKind::Solid => 1 << 1,
            TileKind::OneWaySolid => 1 << 2,
            TileKind::Goal => 1 << 3,
            TileKind::Decoration => 1 << 4,
        }
    }
}

/// A set of tile classes a collision query reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileClasses(u8);

impl TileClasses {
    pub const NONE: Self = Self(0);
    /// Tiles the player cannot move into
    pub const BLOCKING: Self = Self(TileKind::Solid.bit() | TileKind::OneWaySolid.bit());
    /// Win trigger
    pub const GOAL: Self = Self::only(TileKind::Goal);

    pub const fn only(kind: TileKind) -> Self {
        Self(kind.bit())
    }

    pub const fn with(self, kind: TileKind) -> Self {
        Self(self.0 | kind.bit())
    }

    #[inline]
    pub const fn contains(self, kind: TileKind) -> bool {
        self.0 & kind.bit() != 0
    }
}

impl FromIterator<TileKind> for TileClasses {
    fn from_iter<I: IntoIterator<Item = TileKind>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, Self::with)
    }
}

/// Fixed-size, read-only stage map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    width: i32,
    height: i32,
    /// Row-major cells (row * width + column)
    cells: Vec<TileKind>,
}

impl TileGrid {
    /// Build a grid from row-major sprite sheet coordinates.
    ///
    /// Missing trailing cells read as empty; extra cells are ignored.
    pub fn from_sheet(width: u16, height: u16, coords: &[(u8, u8)]) -> Self {
        let len = width as usize * height as usize;
        let mut cells: Vec<TileKind> = coords
            .iter()
            .take(len)
            .map(|&c| TileKind::from_sheet(c))
            .collect();
        cells.resize(len, TileKind::Empty);
        Self {
            width: width as i32,
            height: height as i32,
            cells,
        }
    }

    /// Width in tiles
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in tiles
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Stage size in pixels
    pub fn pixel_size(&self) -> IVec2 {
        IVec2::new(self.width, self.height) * crate::consts::TILE_SIZE
    }

    /// Tile at (column, row). Anything outside the grid reads as `Empty`.
    #[inline]
    pub fn tile_at(&self, column: i32, row: i32) -> TileKind {
        if column < 0 || row < 0 || column >= self.width || row >= self.height {
            return TileKind::Empty;
        }
        self.cells[(row * self.width + column) as usize]
    }

    /// Iterate every (column, row, kind) in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, TileKind)> + '_ {
        self.cells.iter().enumerate().map(move |(i, &kind)| {
            let i = i as i32;
            (i % self.width, i / self.width, kind)
        })
    }

    /// First tile of the given kind, scanning row-major
    pub fn find(&self, kind: TileKind) -> Option<IVec2> {
        self.iter()
            .find(|&(_, _, k)| k == kind)
            .map(|(c, r, _)| IVec2::new(c, r))
    }
}
