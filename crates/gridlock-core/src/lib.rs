//! Core types for the Gridlock puzzle engine.
//!
//! This crate provides the board model shared by solvers and tools:
//!
//! - [`Digit`] and [`DigitSet`] — the values 1-9 and bitmask sets of them.
//! - [`Coord`] — a cell position with block geometry helpers.
//! - [`Cell`] — a candidate set with a never-empty guard.
//! - [`Unit`] — a row, column, or block of 9 cells.
//! - [`Board`] — 81 cells plus the 27 units constraining them.
//!
//! # Examples
//!
//! ```
//! use gridlock_core::{Board, Coord, Digit};
//!
//! let mut board = Board::new();
//! board.set_cell_value(Coord::new(1, 1), Digit::D5);
//! assert!(board.validate().is_ok());
//!
//! board.set_cell_value(Coord::new(9, 1), Digit::D5);
//! assert!(board.validate().is_err());
//! ```

mod board;
mod cell;
mod coord;
mod digit;
mod digit_set;
mod error;
mod unit;

pub use self::{
    board::Board,
    cell::Cell,
    coord::Coord,
    digit::Digit,
    digit_set::DigitSet,
    error::{BoardError, Contradiction, InputError, StructureError},
    unit::{Unit, UnitKind},
};
