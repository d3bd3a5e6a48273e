#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the terminal Life engine.
//!
//! This crate defines the data and message surface that connects adapters,
//! the authoritative world, and pure systems. Adapters submit [`Command`]
//! values describing desired mutations, the world executes those commands via
//! its `apply` entry point, and then broadcasts [`Event`] values for systems to
//! react to deterministically. Systems read [`Grid`] snapshots and respond
//! exclusively with new command batches.

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "
▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒
▒▒▒▒██████████▒█████████▒████▒▒████▒█████████████▒▒▒
▒▒▒▒█▒▒▒▒▒▒▒▒▒▒█▒▒▒▒▒▒▒█▒█▒▒█▒▒█▒▒█▒█▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒
▒▒▒▒█▒▒▒▒▒▒▒▒▒▒█▒▒▒▒▒▒▒█▒█▒▒█▒▒█▒▒█▒█▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒
▒▒▒▒█▒▒▒▒▒▒▒▒▒▒█▒▒▒▒▒▒▒█▒█▒▒████▒▒█▒█▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒
▒▒▒▒█▒▒███████▒█████████▒█▒▒▒▒▒▒▒▒█▒█████████████▒▒▒
▒▒▒▒█▒▒▒▒▒▒▒▒█▒█▒▒▒▒▒▒▒█▒█▒▒▒▒▒▒▒▒█▒█▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒
▒▒▒▒█▒▒▒▒▒▒▒▒█▒█▒▒▒▒▒▒▒█▒█▒▒▒▒▒▒▒▒█▒█▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒
▒▒▒▒██████████▒█▒▒▒▒▒▒▒█▒█▒▒▒▒▒▒▒▒█▒█████████████▒▒▒
▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒
▒▒▒▒██████████▒██████▒▒▒▒█▒▒███████▒█████▒███████▒▒▒
▒▒▒▒█▒▒▒▒▒▒▒▒█▒█▒▒▒▒▒▒▒▒▒█▒▒▒▒▒█▒▒▒▒█▒▒▒▒▒█▒▒▒▒▒▒▒▒▒
▒▒▒▒█▒▒▒▒▒▒▒▒█▒██████▒▒▒▒█▒▒▒▒▒█▒▒▒▒█████▒███████▒▒▒
▒▒▒▒█▒▒▒▒▒▒▒▒█▒█▒▒▒▒▒▒▒▒▒█▒▒▒▒▒█▒▒▒▒█▒▒▒▒▒█▒▒▒▒▒▒▒▒▒
▒▒▒▒██████████▒█▒▒▒▒▒▒▒▒▒██████████▒█▒▒▒▒▒███████▒▒▒
▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒
▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒


";

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Replaces the current generation with an all-dead grid of the given size.
    ConfigureGrid {
        /// Dimensions of the grid for the remainder of the run.
        size: GridSize,
    },
    /// Marks the listed cells of the current generation as alive.
    SeedPopulation {
        /// Cells that should be alive in the initial generation.
        cells: Vec<CellCoord>,
    },
    /// Hands a fully computed generation to the world, superseding the current one.
    PromoteGeneration {
        /// Freshly computed generation; ownership moves into the world.
        next: Grid,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that the world now holds an all-dead grid of the given size.
    GridConfigured {
        /// Dimensions of the configured grid.
        size: GridSize,
    },
    /// Confirms that the initial population was written into the grid.
    PopulationSeeded {
        /// Number of living cells after seeding.
        alive: usize,
    },
    /// Announces that a new generation became current.
    GenerationAdvanced {
        /// Index of the generation that is now current. The seeded grid is generation zero.
        generation: u64,
        /// Number of living cells in the new generation.
        population: usize,
    },
    /// Reports that a promotion was refused because the grid sizes differ.
    PromotionRejected {
        /// Dimensions of the current generation.
        expected: GridSize,
        /// Dimensions of the grid offered for promotion.
        actual: GridSize,
    },
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }
}

/// Dimensions of a grid measured in whole cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridSize {
    width: u32,
    height: u32,
}

impl GridSize {
    /// Creates a new size descriptor with explicit dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns `true` when the size covers no cells at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Total number of cells covered by the size.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        let count = u64::from(self.width) * u64::from(self.height);
        usize::try_from(count).unwrap_or(0)
    }

    /// Iterates every coordinate inside the size in row-major order.
    pub fn cells(self) -> impl Iterator<Item = CellCoord> {
        (0..self.height)
            .flat_map(move |row| (0..self.width).map(move |column| CellCoord::new(column, row)))
    }
}

/// Dimensions of the visible terminal in character cells.
///
/// A zero-sized value is the fallback used when the terminal could not be
/// queried; it is valid input and leads to an empty grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TerminalSize {
    columns: u32,
    rows: u32,
}

impl TerminalSize {
    /// Creates a terminal size from column and row counts.
    #[must_use]
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Number of character columns.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of character rows.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Largest grid that fits the terminal while leaving the last column and
    /// row free for the cursor.
    #[must_use]
    pub const fn grid_size(&self) -> GridSize {
        GridSize::new(self.columns.saturating_sub(1), self.rows.saturating_sub(1))
    }
}

/// Axis-aligned rectangle expressed in cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellRect {
    origin: CellCoord,
    size: GridSize,
}

impl CellRect {
    /// Constructs a rectangle from an origin cell and size.
    #[must_use]
    pub const fn from_origin_and_size(origin: CellCoord, size: GridSize) -> Self {
        Self { origin, size }
    }

    /// Upper-left cell that anchors the rectangle.
    #[must_use]
    pub const fn origin(&self) -> CellCoord {
        self.origin
    }

    /// Dimensions of the rectangle measured in whole cells.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Returns `true` when the rectangle encloses no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Reports whether the cell lies inside the rectangle.
    #[must_use]
    pub fn contains(&self, cell: CellCoord) -> bool {
        let column = u64::from(cell.column());
        let row = u64::from(cell.row());
        let left = u64::from(self.origin.column());
        let top = u64::from(self.origin.row());
        column >= left
            && column < left + u64::from(self.size.width())
            && row >= top
            && row < top + u64::from(self.size.height())
    }

    /// Iterates the enclosed cells in row-major order.
    pub fn cells(self) -> impl Iterator<Item = CellCoord> {
        let origin = self.origin;
        self.size.cells().map(move |offset| {
            CellCoord::new(
                origin.column().saturating_add(offset.column()),
                origin.row().saturating_add(offset.row()),
            )
        })
    }
}

/// Relative offsets of the eight cells in a Moore neighbourhood.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// One generation of cell states laid out densely in row-major order.
///
/// The size is fixed at creation. Coordinates outside the grid are never
/// stored and always read as dead, so the automaton does not wrap.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    size: GridSize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates a grid of the provided size with every cell dead.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![false; size.cell_count()],
        }
    }

    /// Creates a grid with exactly the provided cells alive.
    ///
    /// Cells outside the grid are ignored.
    #[must_use]
    pub fn with_alive_cells<I>(size: GridSize, alive: I) -> Self
    where
        I: IntoIterator<Item = CellCoord>,
    {
        let mut grid = Self::new(size);
        for cell in alive {
            if grid.contains(cell) {
                grid.set(cell, true);
            }
        }
        grid
    }

    /// Dimensions of the grid.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.size.width()
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.size.height()
    }

    /// Reports whether the cell at the signed coordinate is alive.
    ///
    /// Any coordinate outside `[0, width) x [0, height)`, negative ones
    /// included, is dead.
    #[must_use]
    pub fn is_alive(&self, column: i64, row: i64) -> bool {
        self.signed_index(column, row)
            .and_then(|index| self.cells.get(index).copied())
            .unwrap_or(false)
    }

    /// Reports whether the in-grid cell is alive.
    #[must_use]
    pub fn cell(&self, cell: CellCoord) -> bool {
        self.index(cell)
            .and_then(|index| self.cells.get(index).copied())
            .unwrap_or(false)
    }

    /// Overwrites the state of a single cell.
    ///
    /// Callers iterate within the grid bounds; an out-of-range coordinate is a
    /// caller bug and is ignored in release builds.
    pub fn set(&mut self, cell: CellCoord, alive: bool) {
        debug_assert!(
            self.contains(cell),
            "cell {cell:?} lies outside grid {:?}",
            self.size
        );
        if let Some(index) = self.index(cell) {
            if let Some(slot) = self.cells.get_mut(index) {
                *slot = alive;
            }
        }
    }

    /// Reports whether the coordinate addresses a cell of this grid.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.column() < self.size.width() && cell.row() < self.size.height()
    }

    /// Number of living cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|alive| **alive).count()
    }

    /// Iterates the living cells in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.size.cells().filter(move |cell| self.cell(*cell))
    }

    /// Captures a read-only view suitable for presentation.
    #[must_use]
    pub fn view(&self) -> GridView<'_> {
        GridView {
            cells: &self.cells,
            size: self.size,
        }
    }

    fn signed_index(&self, column: i64, row: i64) -> Option<usize> {
        let column = u32::try_from(column).ok()?;
        let row = u32::try_from(row).ok()?;
        self.index(CellCoord::new(column, row))
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if self.contains(cell) {
            let row = usize::try_from(cell.row()).ok()?;
            let column = usize::try_from(cell.column()).ok()?;
            let width = usize::try_from(self.size.width()).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}

/// Read-only, row-major view of a single generation.
#[derive(Clone, Copy, Debug)]
pub struct GridView<'a> {
    cells: &'a [bool],
    size: GridSize,
}

impl<'a> GridView<'a> {
    /// Dimensions of the viewed grid.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Iterates the rows from top to bottom, each as a slice of cell states.
    pub fn rows(&self) -> impl Iterator<Item = &'a [bool]> + 'a {
        let width = usize::try_from(self.size.width()).unwrap_or(0);
        let height = usize::try_from(self.size.height()).unwrap_or(0);
        let cells: &'a [bool] = if width == 0 { &[] } else { self.cells };
        cells.chunks(width.max(1)).take(height)
    }
}
