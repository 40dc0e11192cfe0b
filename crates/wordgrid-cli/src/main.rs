mod dict;

use clap::Parser;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Duration;
use wordgrid_core::{LetterGrid, SolveReport, Solver, SolverConfig};

/// Solve a letter-grid word puzzle: partition every grid cell into
/// dictionary words connected under 8-directional adjacency.
#[derive(Debug, Parser)]
#[command(name = "wordgrid", version, about)]
struct Cli {
    /// Grid rows, top to bottom, one argument per row (e.g. lomal iaual).
    #[arg(required = true)]
    rows: Vec<String>,

    /// Path to the word list (plain lines or TSV with the word first).
    #[arg(short, long)]
    dictionary: PathBuf,

    /// Shortest accepted dictionary word.
    #[arg(long, default_value_t = dict::DEFAULT_MIN_LEN)]
    min_len: usize,

    /// Longest accepted dictionary word.
    #[arg(long, default_value_t = dict::DEFAULT_MAX_LEN)]
    max_len: usize,

    /// Required word start cell, as a linear index or x,y pair.
    /// Repeatable; every hint must be satisfied.
    #[arg(long = "hint", value_name = "CELL")]
    hints: Vec<String>,

    /// Stop after this many solutions.
    #[arg(long)]
    max_solutions: Option<usize>,

    /// Stop after this many search nodes.
    #[arg(long)]
    max_nodes: Option<u64>,

    /// Give up after this many seconds.
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Emit the solve report as JSON instead of a listing.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let row_refs: Vec<&str> = cli.rows.iter().map(String::as_str).collect();
    let grid = build_grid(&row_refs)?;
    let hints = parse_hints(&cli.hints, &grid)?;

    let file = File::open(&cli.dictionary)
        .map_err(|e| format!("cannot open {}: {}", cli.dictionary.display(), e))?;
    let words = dict::load_words(BufReader::new(file), cli.min_len, cli.max_len)?;
    if words.is_empty() {
        return Err(format!(
            "no usable words in {} (lengths {}-{})",
            cli.dictionary.display(),
            cli.min_len,
            cli.max_len
        )
        .into());
    }
    let trie = dict::build_trie(&words);
    eprintln!("Loaded {} dictionary words", trie.len());

    let solver = Solver::with_config(SolverConfig {
        max_solutions: cli.max_solutions,
        max_nodes: cli.max_nodes,
        time_budget: cli.timeout.map(Duration::from_secs),
    });
    let report = solver.solve(&grid, &trie, &hints)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&grid, &report);
    }
    Ok(())
}

/// Build the grid from row arguments, refusing ragged or blank input.
/// The ready-to-solve gate lives here: the engine itself would just
/// return no solutions for an unusable grid.
fn build_grid(rows: &[&str]) -> Result<LetterGrid, Box<dyn Error>> {
    if rows.iter().any(|row| row.chars().any(char::is_whitespace)) {
        return Err("grid rows must not contain whitespace".into());
    }
    let grid = LetterGrid::from_rows(rows)
        .ok_or("grid rows must be non-empty and of equal length")?;
    if !grid.is_filled() {
        return Err("grid must be fully filled before solving".into());
    }
    Ok(grid)
}

/// Parse hint arguments: either a linear cell index or an x,y pair.
fn parse_hints(args: &[String], grid: &LetterGrid) -> Result<Vec<usize>, Box<dyn Error>> {
    let mut hints = Vec::with_capacity(args.len());
    for arg in args {
        let index = match arg.split_once(',') {
            Some((x, y)) => {
                let x: usize = x.trim().parse().map_err(|_| bad_hint(arg))?;
                let y: usize = y.trim().parse().map_err(|_| bad_hint(arg))?;
                if x >= grid.width() || y >= grid.height() {
                    return Err(format!(
                        "hint ({}, {}) is outside the {}x{} grid",
                        x,
                        y,
                        grid.width(),
                        grid.height()
                    )
                    .into());
                }
                grid.index_of(x, y)
            }
            None => arg.trim().parse().map_err(|_| bad_hint(arg))?,
        };
        hints.push(index);
    }
    Ok(hints)
}

fn bad_hint(arg: &str) -> Box<dyn Error> {
    format!("invalid hint '{}': expected a cell index or x,y", arg).into()
}

fn print_report(grid: &LetterGrid, report: &SolveReport) {
    if report.solutions.is_empty() {
        println!("No solutions.");
    }
    for (i, solution) in report.solutions.iter().enumerate() {
        println!(
            "Solution {} / {} ({} words):",
            i + 1,
            report.solutions.len(),
            solution.word_count()
        );
        for word in &solution.words {
            let path: Vec<String> = word
                .path
                .iter()
                .map(|&index| {
                    let (x, y) = grid.coords_of(index);
                    format!("({},{})", x, y)
                })
                .collect();
            println!("  {:<12} {}", word.word, path.join(" -> "));
        }
    }
    if report.truncated {
        println!("Search stopped early by a configured limit; the list may be incomplete.");
    }
}
