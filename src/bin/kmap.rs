//! K-map Logic - Command Line Interface
//!
//! Simplifies maps given as bit strings or equations and plays the level game
//! against a progress file.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use kmap_logic::game::{levels, FileStore, GameSession, ProgressStore};
use kmap_logic::labels::Notation;
use kmap_logic::{equation, find_groups, simplify, CellVector, KmapError, VarCount};
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Command {
    /// Simplify a map and list the groups used (default)
    Simplify,
    /// Parse an equation and print its cells
    Parse,
    /// List every group the finder accepts, before minimisation
    Groups,
    /// List the game levels of a mode
    Levels,
    /// Check a map against a game level
    Check,
    /// Show the solution of a game level and record it as solved
    Solve,
    /// Show the saved progress
    Progress,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NotationArg {
    /// Complements written as A'
    Prime,
    /// Complements written with a combining overline
    Overline,
}

impl From<NotationArg> for Notation {
    fn from(val: NotationArg) -> Self {
        match val {
            NotationArg::Prime => Notation::Prime,
            NotationArg::Overline => Notation::Overline,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "kmap")]
#[command(about = "Karnaugh map simplifier and level game", long_about = None)]
#[command(version)]
struct Args {
    /// Map as a bit string in display order (e.g. 0110) or an equation (e.g. "F = A'B + AB'")
    #[arg(value_name = "MAP")]
    input: Option<String>,

    /// Subcommand to execute
    #[arg(short = 'D', long = "do", value_enum, default_value = "simplify")]
    command: Command,

    /// Number of variables (2 or 3); inferred from bit strings
    #[arg(short = 'n', long = "vars")]
    vars: Option<usize>,

    /// Game level (zero-based); defaults to the next unsolved level
    #[arg(short = 'l', long = "level")]
    level: Option<usize>,

    /// Progress file used by the game commands
    #[arg(short = 'P', long = "progress-file", default_value = ".kmap_progress")]
    progress_file: PathBuf,

    /// Notation for complemented literals
    #[arg(short = 'N', long = "notation", value_enum, default_value = "prime")]
    notation: NotationArg,

    /// Provide execution summary
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Log the finder and minimiser steps
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if args.verbose {
        let _ = simplelog::TermLogger::init(
            simplelog::LevelFilter::Debug,
            simplelog::Config::default(),
            simplelog::TerminalMode::Stderr,
            simplelog::ColorChoice::Auto,
        );
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), KmapError> {
    let notation = Notation::from(args.notation);
    match args.command {
        Command::Simplify => {
            let cells = read_map(args)?;
            let solution = simplify(&cells);
            if args.summary {
                eprintln!("Map: {} ({}-variable)", cells, cells.vars());
            }
            println!("F = {}", solution.expression().render(notation));
            for line in solution.descriptions() {
                println!("  {}", line);
            }
        }
        Command::Parse => {
            let text = required_input(args);
            let parsed = equation::parse_equation(text, vars_or_default(args)?)?;
            for term in parsed.skipped() {
                eprintln!("Skipped term: {}", term);
            }
            println!("{}", parsed.cells());
            if args.summary {
                eprintln!("Minterms: {:?}", parsed.cells().minterms());
            }
        }
        Command::Groups => {
            let cells = read_map(args)?;
            for group in find_groups(&cells) {
                println!("{}", group);
            }
        }
        Command::Levels => {
            let vars = vars_or_default(args)?;
            let progress = ProgressStore::new(FileStore::open(&args.progress_file)?);
            let reached = progress.level(vars)?;
            for (index, level) in levels(vars).iter().enumerate() {
                let mark = if index < reached { "*" } else { " " };
                println!("{} {:3}  {}", mark, index, level.equation());
            }
        }
        Command::Check => {
            let cells = read_map(args)?;
            let mut game = open_game(args, cells.vars())?;
            let Some(level) = game.current_level() else {
                println!("All levels complete!");
                return Ok(());
            };
            println!("Level {}: {}", game.level_index(), level.equation());
            for position in cells.ones_positions() {
                game.toggle(position)?;
            }
            if let Some(feedback) = game.check()? {
                println!("{}", feedback);
            }
        }
        Command::Solve => {
            let mut game = open_game(args, vars_or_default(args)?)?;
            let Some(level) = game.current_level() else {
                println!("All levels complete!");
                return Ok(());
            };
            println!("Level {}: {}", game.level_index(), level.equation());
            game.solve()?;
            let solution = simplify(game.cells());
            println!("{}", game.cells());
            println!("F = {}", solution.expression().render(notation));
        }
        Command::Progress => {
            let progress = ProgressStore::new(FileStore::open(&args.progress_file)?);
            for vars in [VarCount::Two, VarCount::Three] {
                println!(
                    "{}-variable: {} of {} levels",
                    vars,
                    progress.level(vars)?,
                    levels(vars).len()
                );
            }
            println!("Tutorial seen: {}", progress.tutorial_seen()?);
        }
    }
    Ok(())
}

/// The `MAP` argument, or a usage error and exit when it was not given
fn required_input(args: &Args) -> &str {
    match args.input.as_deref() {
        Some(text) => text,
        None => missing_input(args.command).exit(),
    }
}

fn missing_input(command: Command) -> clap::Error {
    let name = command
        .to_possible_value()
        .map(|value| value.get_name().to_string())
        .unwrap_or_default();
    Args::command().error(
        ErrorKind::MissingRequiredArgument,
        format!("the <MAP> argument is required for `--do {}`", name),
    )
}

fn vars_or_default(args: &Args) -> Result<VarCount, KmapError> {
    VarCount::from_count(args.vars.unwrap_or(3))
}

/// Read the input as a bit string when it only holds bits, as an equation otherwise
fn read_map(args: &Args) -> Result<CellVector, KmapError> {
    let text = required_input(args);
    let is_bits = text
        .chars()
        .all(|c| c == '0' || c == '1' || c.is_whitespace() || c == '_' || c == ',');
    if !is_bits {
        return Ok(kmap_logic::parse(text, vars_or_default(args)?)?);
    }
    let cells: CellVector = text.parse()?;
    if let Some(count) = args.vars {
        let vars = VarCount::from_count(count)?;
        if vars != cells.vars() {
            return Err(KmapError::CellCount {
                expected: Some(vars.cells()),
                found: cells.len(),
            });
        }
    }
    Ok(cells)
}

fn open_game(args: &Args, vars: VarCount) -> Result<GameSession<FileStore>, KmapError> {
    let store = FileStore::open(&args.progress_file)?;
    let mut game = GameSession::new(vars, store)?;
    if let Some(level) = args.level {
        game.select_level(level);
    }
    if args.summary {
        eprintln!(
            "Progress file: {} ({}-variable, level {})",
            args.progress_file.display(),
            vars,
            game.level_index()
        );
    }
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_map_is_optional_at_parse_time() {
        let args = Args::try_parse_from(["kmap", "-D", "levels", "-n", "2"]).unwrap();
        assert!(args.input.is_none());
        assert!(matches!(args.command, Command::Levels));
    }

    #[test]
    fn test_missing_map_is_a_usage_error() {
        let err = missing_input(Command::Parse);
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("--do parse"));
    }
}
