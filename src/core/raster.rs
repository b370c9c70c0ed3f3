//! A structured, rectangular grid in 2d space.
//!
//! Each cell is identified by its column/row index pair, counted from the
//! lower left corner of the domain:
//!
//! ```text
//!  ________ ________ ________
//! |        |        |        |
//! | (0, 1) | (1, 1) | (2, 1) |
//! |________|________|________|
//! |        |        |        |
//! | (0, 0) | (1, 0) | (2, 0) |
//! |________|________|________|
//! ```
//!
//! Cells are not stored. [`RasterGrid::cells`] walks the index pairs on demand
//! and every [`Cell`] borrows its grid, so huge resolutions cost nothing until
//! they are iterated.

use crate::domain::model::{CellCenter, Point};
use crate::domain::ports::Report;
use crate::utils::error::Result;
use crate::utils::validation::{validate_cell_count, validate_resolution};
use serde::{Serialize, Serializer};
use std::io::Write;
use std::iter::FusedIterator;

#[derive(Debug, Clone, PartialEq)]
pub struct RasterGrid {
    lower_left: Point,
    upper_right: Point,
    columns: usize,
    rows: usize,
    cell_count: usize,
}

impl RasterGrid {
    /// Fails with `InvalidResolution` if `columns` or `rows` is zero, and with
    /// `GridTooLarge` if `columns * rows` overflows `usize`.
    /// The domain corners are taken as given.
    pub fn new(
        lower_left: Point,
        upper_right: Point,
        columns: usize,
        rows: usize,
    ) -> Result<Self> {
        validate_resolution("columns", columns)?;
        validate_resolution("rows", rows)?;
        let cell_count = validate_cell_count(columns, rows)?;

        tracing::debug!(
            "Created {}x{} grid over ({}, {})..({}, {})",
            columns,
            rows,
            lower_left.x,
            lower_left.y,
            upper_right.x,
            upper_right.y
        );

        Ok(Self {
            lower_left,
            upper_right,
            columns,
            rows,
            cell_count,
        })
    }

    pub fn lower_left(&self) -> Point {
        self.lower_left
    }

    pub fn upper_right(&self) -> Point {
        self.upper_right
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    pub fn cell_width(&self) -> f64 {
        (self.upper_right.x - self.lower_left.x) / self.columns as f64
    }

    pub fn cell_height(&self) -> f64 {
        (self.upper_right.y - self.lower_left.y) / self.rows as f64
    }

    /// All cells, column by column, rows ascending within each column.
    /// Call again to start over.
    pub fn cells(&self) -> Cells<'_> {
        Cells {
            grid: self,
            next: 0,
            end: self.cell_count,
        }
    }

    pub fn cell(&self, column: usize, row: usize) -> Option<Cell<'_>> {
        if column < self.columns && row < self.rows {
            Some(Cell {
                grid: self,
                column,
                row,
            })
        } else {
            None
        }
    }

    pub fn centers(&self) -> Vec<Point> {
        self.cells().map(|cell| cell.center()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell<'a> {
    grid: &'a RasterGrid,
    column: usize,
    row: usize,
}

impl Cell<'_> {
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn row(&self) -> usize {
        self.row
    }

    /// Midpoint of the cell, recomputed from the grid on every call.
    pub fn center(&self) -> Point {
        let (x0, y0) = self.grid.lower_left.coordinates();
        let (x1, y1) = self.grid.upper_right.coordinates();
        Point {
            x: x0 + (self.column as f64 + 0.5) * (x1 - x0) / self.grid.columns as f64,
            y: y0 + (self.row as f64 + 0.5) * (y1 - y0) / self.grid.rows as f64,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cells<'a> {
    grid: &'a RasterGrid,
    next: usize,
    end: usize,
}

impl<'a> Iterator for Cells<'a> {
    type Item = Cell<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(Cell {
            grid: self.grid,
            column: index / self.grid.rows,
            row: index % self.grid.rows,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cells<'_> {}

impl FusedIterator for Cells<'_> {}

fn cell_center(cell: Cell<'_>) -> CellCenter {
    let center = cell.center();
    CellCenter {
        column: cell.column(),
        row: cell.row(),
        x: center.x,
        y: center.y,
    }
}

/// Serializes as a sequence without collecting the cells first.
struct CellSequence<'a>(&'a RasterGrid);

impl Serialize for CellSequence<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.cells().map(cell_center))
    }
}

#[derive(Serialize)]
struct GridListing<'a> {
    lower_left: Point,
    upper_right: Point,
    columns: usize,
    rows: usize,
    cell_count: usize,
    cells: CellSequence<'a>,
}

/// Lists every cell of a grid with its center point.
#[derive(Debug, Clone)]
pub struct GridReport {
    grid: RasterGrid,
}

impl GridReport {
    pub fn new(grid: RasterGrid) -> Self {
        Self { grid }
    }
}

impl Report for GridReport {
    fn write_text(&self, out: &mut dyn Write) -> Result<()> {
        let (x0, y0) = self.grid.lower_left.coordinates();
        let (x1, y1) = self.grid.upper_right.coordinates();
        writeln!(
            out,
            "Grid ({:?}, {:?})..({:?}, {:?}): {} x {} = {} cells",
            x0,
            y0,
            x1,
            y1,
            self.grid.columns,
            self.grid.rows,
            self.grid.cell_count
        )?;
        for row in self.grid.cells().map(cell_center) {
            writeln!(
                out,
                "({}, {}): ({:?}, {:?})",
                row.column, row.row, row.x, row.y
            )?;
        }
        Ok(())
    }

    fn write_csv(&self, out: &mut dyn Write) -> Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        for row in self.grid.cells().map(cell_center) {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn write_json(&self, out: &mut dyn Write) -> Result<()> {
        let listing = GridListing {
            lower_left: self.grid.lower_left,
            upper_right: self.grid.upper_right,
            columns: self.grid.columns,
            rows: self.grid.rows,
            cell_count: self.grid.cell_count,
            cells: CellSequence(&self.grid),
        };
        serde_json::to_writer_pretty(&mut *out, &listing)?;
        writeln!(out)?;
        Ok(())
    }
}
