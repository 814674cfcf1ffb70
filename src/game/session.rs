//! Game progression state machine

use super::catalog::{levels, Level};
use super::progress::{KeyValueStore, ProgressStore};
use crate::error::KmapError;
use crate::kmap::{CellVector, VarCount};
use log::debug;
use std::fmt;
use std::io;

/// Outcome of checking a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// The cells match the level's target
    Correct,
    /// The cells differ from the target
    Wrong,
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Correct => write!(f, "correct"),
            Feedback::Wrong => write!(f, "wrong"),
        }
    }
}

/// One player's walk through the level catalog of a mode
///
/// The session resumes at the stored counter. Checking a level never moves
/// to the next one; [`GameSession::next`] does. Solving a level, by check or
/// by auto-solve, raises the stored counter to the index after it.
///
/// # Examples
///
/// ```
/// use kmap_logic::game::{Feedback, GameSession, MemoryStore};
/// use kmap_logic::VarCount;
///
/// # fn main() -> Result<(), kmap_logic::KmapError> {
/// let mut game = GameSession::new(VarCount::Two, MemoryStore::new())?;
/// assert_eq!(game.current_level().unwrap().equation(), "F = A'B'");
///
/// game.toggle(1)?;
/// assert_eq!(game.check()?, Some(Feedback::Wrong));
///
/// game.toggle(1)?;
/// game.toggle(0)?;
/// assert_eq!(game.check()?, Some(Feedback::Correct));
/// assert_eq!(game.progress().level(VarCount::Two)?, 1);
///
/// game.next();
/// assert_eq!(game.level_index(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GameSession<S> {
    vars: VarCount,
    progress: ProgressStore<S>,
    level: usize,
    cells: CellVector,
    feedback: Option<Feedback>,
}

impl<S: KeyValueStore> GameSession<S> {
    /// Start a session, resuming at the stored level counter
    pub fn new(vars: VarCount, store: S) -> io::Result<Self> {
        let progress = ProgressStore::new(store);
        let level = progress.level(vars)?;
        debug!("game: {}-variable session resumes at level {}", vars, level);
        Ok(GameSession {
            vars,
            progress,
            level,
            cells: CellVector::zeros(vars),
            feedback: None,
        })
    }

    /// Variable count of the current mode
    pub fn vars(&self) -> VarCount {
        self.vars
    }

    /// Zero-based index of the current level
    pub fn level_index(&self) -> usize {
        self.level
    }

    /// The current level, `None` once the catalog is complete
    pub fn current_level(&self) -> Option<&'static Level> {
        levels(self.vars).get(self.level)
    }

    /// True once every level of the mode has been passed
    pub fn is_complete(&self) -> bool {
        self.current_level().is_none()
    }

    /// The player's cells
    pub fn cells(&self) -> &CellVector {
        &self.cells
    }

    /// Feedback of the last check or solve, cleared by edits and `next`
    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    /// The progress store
    pub fn progress(&self) -> &ProgressStore<S> {
        &self.progress
    }

    /// Flip a cell
    ///
    /// Ignored while the level is marked correct. Returns whether the cell
    /// changed.
    pub fn toggle(&mut self, position: usize) -> Result<bool, KmapError> {
        if self.feedback == Some(Feedback::Correct) {
            debug!("game: level {} solved, ignoring toggle", self.level);
            return Ok(false);
        }
        self.cells.toggle(position)?;
        self.feedback = None;
        Ok(true)
    }

    /// Compare the cells with the current level's target
    ///
    /// A correct answer records progress. Returns `None` once the catalog is
    /// complete.
    pub fn check(&mut self) -> io::Result<Option<Feedback>> {
        let Some(level) = self.current_level() else {
            return Ok(None);
        };
        let feedback = if self.cells == level.target(self.vars) {
            self.record_solved()?;
            Feedback::Correct
        } else {
            Feedback::Wrong
        };
        debug!("game: level {} checked {}", self.level, feedback);
        self.feedback = Some(feedback);
        Ok(Some(feedback))
    }

    /// Fill in the current level's target and mark it correct
    ///
    /// Records progress like a correct check. Returns `None` once the
    /// catalog is complete.
    pub fn solve(&mut self) -> io::Result<Option<Feedback>> {
        let Some(level) = self.current_level() else {
            return Ok(None);
        };
        self.cells = level.target(self.vars);
        self.record_solved()?;
        self.feedback = Some(Feedback::Correct);
        Ok(self.feedback)
    }

    /// Advance to the next level with a cleared map
    ///
    /// The index stops one past the last level.
    pub fn next(&mut self) {
        self.level = (self.level + 1).min(levels(self.vars).len());
        self.cells = CellVector::zeros(self.vars);
        self.feedback = None;
    }

    /// Jump to a level by index, with a cleared map
    ///
    /// Indices past the end select the completed state.
    pub fn select_level(&mut self, index: usize) {
        self.level = index.min(levels(self.vars).len());
        self.cells = CellVector::zeros(self.vars);
        self.feedback = None;
    }

    /// Switch to the other mode, resuming at its stored counter
    pub fn switch_mode(&mut self, vars: VarCount) -> io::Result<()> {
        self.level = self.progress.level(vars)?;
        self.vars = vars;
        self.cells = CellVector::zeros(vars);
        self.feedback = None;
        Ok(())
    }

    /// Take the progress store back
    pub fn into_store(self) -> S {
        self.progress.into_inner()
    }

    fn record_solved(&mut self) -> io::Result<()> {
        self.progress.record(self.vars, self.level + 1).map(|_| ())
    }
}
