//! # K-map Logic
//!
//! This crate implements Karnaugh-map minimisation for two- and three-variable
//! Boolean functions, together with the pieces of a small teaching game built
//! on top of it.
//!
//! ## Overview
//!
//! A function is given as a [`CellVector`]: one bit per cell of the map, in
//! the order the cells are drawn. From there the library can:
//!
//! - find the adjacency groups on the map ([`find_groups`]);
//! - turn them into a sum-of-products [`Expression`] ([`minimize`], or
//!   [`simplify`] for both steps at once);
//! - read a sum-of-minterms equation back into cells ([`parse`]);
//! - run the level game with saved progress ([`game`]).
//!
//! The minimiser is a fixed-priority heuristic suited to small maps. It always
//! produces an expression that covers exactly the 1-cells, but not always the
//! smallest one.
//!
//! ## Map Layout
//!
//! Both maps have two rows, one per value of `A`. The columns of the
//! three-variable map run in Gray-code order (`BC` = 00, 01, 11, 10) so that
//! neighbouring columns differ in one variable, and the first and last columns
//! are neighbours too:
//!
//! ```text
//!          B'C'  B'C   BC   BC'
//!   A'   [ m0    m1    m3   m2 ]
//!   A    [ m4    m5    m7   m6 ]
//! ```
//!
//! Cell vectors are stored in this drawing order. [`CellVector::from_minterms`]
//! and [`CellVector::minterms`] work in canonical minterm numbers instead.
//!
//! ## Simplifying a Map
//!
//! ```
//! use kmap_logic::{simplify, CellVector, VarCount};
//!
//! # fn main() -> Result<(), kmap_logic::KmapError> {
//! // A'B'C', A'B'C and AB'C', AB'C: the left square
//! let cells = CellVector::from_minterms(VarCount::Three, [0, 1, 4, 5])?;
//! let solution = simplify(&cells);
//!
//! assert_eq!(solution.expression().to_string(), "F = B'");
//! for line in solution.descriptions() {
//!     println!("{}", line); // Quad (square): B' (m0, m1, m4, m5)
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Parsing Equations
//!
//! ```
//! use kmap_logic::{parse, simplify, VarCount};
//!
//! # fn main() -> Result<(), kmap_logic::KmapError> {
//! let cells = parse("F = A'B'C' + A'B'C + A'BC", VarCount::Three)?;
//! assert_eq!(cells.to_string(), "11100000");
//! assert_eq!(simplify(&cells).expression().to_string(), "F = A'B' + A'C");
//! # Ok(())
//! # }
//! ```
//!
//! ## Playing the Game
//!
//! ```
//! use kmap_logic::game::{Feedback, GameSession, MemoryStore};
//! use kmap_logic::VarCount;
//!
//! # fn main() -> Result<(), kmap_logic::KmapError> {
//! let mut game = GameSession::new(VarCount::Three, MemoryStore::new())?;
//! let target = game.current_level().unwrap().target(VarCount::Three);
//! for position in target.ones_positions() {
//!     game.toggle(position)?;
//! }
//! assert_eq!(game.check()?, Some(Feedback::Correct));
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! The library logs through the [`log`] facade: group acceptance and term
//! merging at `debug`, rejected candidates at `trace`, progress writes at
//! `info`. Install any logger to see them.

mod config;

// Public modules
pub mod equation;
pub mod error;
pub mod game;
pub mod group;
pub mod kmap;
pub mod minimize;
pub mod workbench;

// Re-export high-level public API
pub use config::MinimizeConfig;
pub use equation::{parse, EquationError, ParsedEquation};
pub use error::KmapError;
pub use group::{find_groups, Group, GroupKind, Orientation};
pub use kmap::{adjacency, labels, CellVector, VarCount, Variable};
pub use minimize::{minimize, minimize_with_config, simplify, Expression, Solution, Term};
pub use workbench::Workbench;
